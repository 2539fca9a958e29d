use axum::Extension;
use axum_jsonschema::Json;

use crate::{
	config::ConfigExt,
	types::{ErrorResponse, NetworkRecord},
};

pub async fn network(Extension(config): ConfigExt) -> Result<Json<NetworkRecord>, ErrorResponse> {
	Ok(Json(NetworkRecord::from(config.network)))
}

pub fn docs(op: aide::transform::TransformOperation) -> aide::transform::TransformOperation {
	op.description("Node endpoints and name-service contract ids of the configured network.")
}
