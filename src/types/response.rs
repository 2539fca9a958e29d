#![allow(clippy::module_name_repetitions)]

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::AccountAddress;
use crate::{
	namehash::{self, HashAlgorithm, Node},
	network::{Contracts, Network},
	utils::node_to_u256,
};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct LabelRecord {
	/// The label text as it appears in the name.
	pub label: String,
	/// How the label is encoded before hashing: `address`, `numeric` or `text`.
	pub kind: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct NodeRecord {
	/// The hashed name.
	pub name: String,
	/// 0x-prefixed hex string of the 32-byte node.
	pub node: Node,
	/// The node read as a decimal integer, which is the name's registrar token id.
	pub token_id: String,
	/// Algorithm the node was derived with.
	pub algorithm: HashAlgorithm,
	/// Non-empty labels of the name, leftmost first.
	pub labels: Vec<LabelRecord>,
}

impl NodeRecord {
	pub fn new(name: &str, node: Node, algorithm: HashAlgorithm) -> Self {
		Self {
			name: name.to_string(),
			node,
			token_id: node_to_u256(&node).to_string(),
			algorithm,
			labels: namehash::labels(name)
				.map(|label| LabelRecord {
					label: label.as_str().to_string(),
					kind: label.kind().to_string(),
				})
				.collect(),
		}
	}
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct PriceRecord {
	/// The queried name.
	pub name: String,
	/// The registrable label, without the top-level suffix.
	pub label: String,
	/// Registration price in base units.
	pub price: u64,
	/// Payment required to reserve the name, including storage cost.
	pub reservation_payment: u64,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct NetworkRecord {
	pub network: Network,
	pub algod_url: String,
	pub indexer_url: String,
	pub contracts: Contracts,
}

impl From<Network> for NetworkRecord {
	fn from(network: Network) -> Self {
		Self {
			network,
			algod_url: network.algod_url().to_string(),
			indexer_url: network.indexer_url().to_string(),
			contracts: network.contracts(),
		}
	}
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ReservationRecord {
	/// The reserved name.
	pub name: String,
	/// Account the name is held for.
	pub holder: AccountAddress,
}
