use axum::{extract::Path, Extension};
use axum_jsonschema::Json;

use crate::{
	reservations::ReservationsExt,
	types::{AccountAddress, ErrorResponse, ReservationRecord},
};

pub async fn reservation(
	Extension(reservations): ReservationsExt,
	Path(name): Path<String>,
) -> Result<Json<ReservationRecord>, ErrorResponse> {
	let holder = reservations
		.holder(&name)
		.ok_or_else(|| ErrorResponse::not_found("Reservation not found.".to_string()))?;

	Ok(Json(ReservationRecord {
		name: name.to_lowercase(),
		holder: AccountAddress(holder.to_string()),
	}))
}

pub fn docs(op: aide::transform::TransformOperation) -> aide::transform::TransformOperation {
	op.description("Look up the account a name is reserved for.")
		.response::<200, Json<ReservationRecord>>()
		.response::<404, ErrorResponse>()
}
