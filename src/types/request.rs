use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct NamehashQueryPayload {
	/// Dotted names to hash, e.g. `alice.voi`.
	pub names: Vec<String>,
	/// Hash algorithm tag, `sha256` or `keccak256`. Defaults to the server's configured algorithm.
	pub algorithm: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AlgorithmQueryParams {
	/// Hash algorithm tag, `sha256` or `keccak256`. Defaults to the server's configured algorithm.
	pub algorithm: Option<String>,
}
