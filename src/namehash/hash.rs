use alloy::primitives::keccak256;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::{fmt, str::FromStr};

use super::Error;

/// Digest function used to fold labels into a node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
	/// SHA-256, used by every current deployment.
	#[default]
	Sha256,
	/// Keccak-256, only used by the legacy registry.
	Keccak256,
}

impl HashAlgorithm {
	pub const fn tag(self) -> &'static str {
		match self {
			Self::Sha256 => "sha256",
			Self::Keccak256 => "keccak256",
		}
	}

	/// Hash `data` into a 32-byte digest.
	pub fn digest(self, data: &[u8]) -> [u8; 32] {
		match self {
			Self::Sha256 => Sha256::digest(data).into(),
			Self::Keccak256 => *keccak256(data),
		}
	}

	/// Hash the concatenation `left || right` without allocating.
	pub fn digest_pair(self, left: &[u8; 32], right: &[u8; 32]) -> [u8; 32] {
		let mut combined = [0u8; 64];
		combined[..32].copy_from_slice(left);
		combined[32..].copy_from_slice(right);

		self.digest(&combined)
	}
}

impl FromStr for HashAlgorithm {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"sha256" => Ok(Self::Sha256),
			"keccak256" => Ok(Self::Keccak256),
			other => Err(Error::UnsupportedAlgorithm(other.to_string())),
		}
	}
}

impl fmt::Display for HashAlgorithm {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.tag())
	}
}
