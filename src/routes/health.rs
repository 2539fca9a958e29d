use axum::Extension;
use axum_jsonschema::Json;
use serde_json::{json, Value};

use crate::{config::ConfigExt, types::ErrorResponse};

pub async fn health(Extension(config): ConfigExt) -> Result<Json<Value>, ErrorResponse> {
	Ok(Json(json!({
		"status": "ok",
		"version": env!("CARGO_PKG_VERSION"),
		"network": config.network,
		"algorithm": config.namehasher.algorithm(),
	})))
}

pub fn docs(op: aide::transform::TransformOperation) -> aide::transform::TransformOperation {
	op.description("Health check, reporting the configured network and hash algorithm.")
}
