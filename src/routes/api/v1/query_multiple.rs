use axum::Extension;
use axum_jsonschema::Json;
use tracing::info_span;

use crate::{
	config::ConfigExt,
	types::{ErrorResponse, NamehashQueryPayload, NodeRecord},
};

/// Most names a single batch may hash.
const MAX_BATCH_SIZE: usize = 100;

pub async fn query_multiple(
	Extension(config): ConfigExt,
	Json(payload): Json<NamehashQueryPayload>,
) -> Result<Json<Vec<NodeRecord>>, ErrorResponse> {
	if payload.names.len() > MAX_BATCH_SIZE {
		return Err(ErrorResponse::validation_error(format!(
			"At most {MAX_BATCH_SIZE} names can be hashed at once."
		)));
	}

	let hasher = config
		.namehasher_for(payload.algorithm.as_deref())
		.map_err(|e| ErrorResponse::validation_error(e.to_string()))?;

	let _span = info_span!("namehash_batch", names = payload.names.len()).entered();

	let records = payload
		.names
		.iter()
		.map(|name| {
			hasher
				.hash(name)
				.map(|node| NodeRecord::new(name, node, hasher.algorithm()))
				.map_err(|e| ErrorResponse::validation_error(format!("{name}: {e}")))
		})
		.collect::<Result<Vec<_>, _>>()?;

	Ok(Json(records))
}

pub fn docs(op: aide::transform::TransformOperation) -> aide::transform::TransformOperation {
	op.description("Compute the namehash nodes of multiple names.")
		.response_with::<422, ErrorResponse, _>(|op| {
			op.description("There were too many names, or one of them failed to hash.")
		})
}
