use axum::{extract::Path, Extension};
use axum_jsonschema::Json;

use crate::{
	config::ConfigExt,
	price::{name_price, reservation_payment},
	types::{ErrorResponse, PriceRecord},
};

pub async fn price(
	Extension(config): ConfigExt,
	Path(name): Path<String>,
) -> Result<Json<PriceRecord>, ErrorResponse> {
	let label = config.label_of(&name);

	if label.is_empty() || label.contains('.') {
		return Err(ErrorResponse::validation_error(format!(
			"Only names directly under .{} can be priced.",
			config.tld
		)));
	}

	let price = name_price(label);

	Ok(Json(PriceRecord {
		label: label.to_string(),
		name,
		price,
		reservation_payment: reservation_payment(price),
	}))
}

pub fn docs(op: aide::transform::TransformOperation) -> aide::transform::TransformOperation {
	op.description("Registration price of a name, by label length.")
		.response::<200, Json<PriceRecord>>()
		.response_with::<422, ErrorResponse, _>(|op| op.description("The name cannot be registered."))
}
