use axum::{
	extract::{Path, Query},
	Extension,
};
use axum_jsonschema::Json;

use crate::{
	config::ConfigExt,
	types::{AlgorithmQueryParams, ErrorResponse, NodeRecord},
};

#[tracing::instrument(skip(config))]
pub async fn namehash(
	Extension(config): ConfigExt,
	Path(name): Path<String>,
	Query(params): Query<AlgorithmQueryParams>,
) -> Result<Json<NodeRecord>, ErrorResponse> {
	let hasher = config
		.namehasher_for(params.algorithm.as_deref())
		.map_err(|e| ErrorResponse::validation_error(e.to_string()))?;

	let node = hasher
		.hash(&name)
		.map_err(|e| ErrorResponse::validation_error(e.to_string()))?;

	Ok(Json(NodeRecord::new(&name, node, hasher.algorithm())))
}

pub fn docs(op: aide::transform::TransformOperation) -> aide::transform::TransformOperation {
	op.description("Compute the namehash node of a dotted name.")
		.response::<200, Json<NodeRecord>>()
		.response_with::<422, ErrorResponse, _>(|op| {
			op.description("A label failed to encode, or the algorithm is not supported.")
		})
}
