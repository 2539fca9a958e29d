use axum::{extract::Path, Extension};
use axum_jsonschema::Json;

use crate::{
	config::ConfigExt,
	reverse::{reverse_node, ReverseKind},
	types::{ErrorResponse, NodeRecord},
};

#[tracing::instrument(skip(config))]
pub async fn reverse(
	Extension(config): ConfigExt,
	Path((kind, subject)): Path<(String, String)>,
) -> Result<Json<NodeRecord>, ErrorResponse> {
	let kind = kind
		.parse::<ReverseKind>()
		.map_err(|e| ErrorResponse::not_found(e.to_string()))?;

	let node = reverse_node(kind, &subject, &config.namehasher)
		.map_err(|e| ErrorResponse::validation_error(e.to_string()))?;
	let name = format!("{subject}.{}", kind.suffix());

	Ok(Json(NodeRecord::new(&name, node, config.namehasher.algorithm())))
}

pub fn docs(op: aide::transform::TransformOperation) -> aide::transform::TransformOperation {
	op.description(
		"Compute the reverse record node of an account (`addr`), staking contract (`staking`) or NFT collection (`collection`).",
	)
	.response::<200, Json<NodeRecord>>()
	.response_with::<404, ErrorResponse, _>(|op| op.description("Unknown reverse record kind."))
	.response_with::<422, ErrorResponse, _>(|op| {
		op.description("The address or collection id is invalid.")
	})
}
