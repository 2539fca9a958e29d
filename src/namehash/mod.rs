//! Derivation of the 32-byte node that keys every name on chain.
//!
//! A node is built by folding the labels of a name from right to left:
//! `node = H(node || H(encode(label)))`, starting from 32 zero bytes.

pub mod address;
mod hash;
mod label;

use std::{fmt, ops::Deref, str::FromStr};

pub use hash::HashAlgorithm;
pub use label::{encode_integer, Label, NUMERIC_LABEL_REGEX};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("failed to decode address label: {0}")]
	Decode(#[from] address::Error),
	#[error("unsupported hash algorithm: {0:?}")]
	UnsupportedAlgorithm(String),
	#[error("numeric label does not fit in 256 bits: {0}")]
	NumericOverflow(String),
	#[error("invalid node: {0}")]
	InvalidNode(String),
}

/// A 32-byte namehash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Node(pub [u8; 32]);

impl Node {
	/// Node of the empty name.
	pub const ZERO: Self = Self([0; 32]);

	pub const fn as_bytes(&self) -> &[u8; 32] {
		&self.0
	}
}

impl Deref for Node {
	type Target = [u8; 32];

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl fmt::Display for Node {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "0x{}", hex::encode(self.0))
	}
}

impl FromStr for Node {
	type Err = Error;

	/// Parses the `0x`-prefixed lowercase hex form produced by `Display`.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let hex_str = s
			.strip_prefix("0x")
			.ok_or_else(|| Error::InvalidNode("missing 0x prefix".to_string()))?;
		if hex_str.bytes().any(|b| b.is_ascii_uppercase()) {
			return Err(Error::InvalidNode("hex digits must be lowercase".to_string()));
		}

		let mut bytes = [0u8; 32];
		hex::decode_to_slice(hex_str, &mut bytes)
			.map_err(|e| Error::InvalidNode(e.to_string()))?;

		Ok(Self(bytes))
	}
}

/// How labels are turned into bytes before hashing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LabelEncoding {
	/// Address labels hash their public key, numeric labels a 32-byte word.
	#[default]
	Typed,
	/// Every label hashes its UTF-8 bytes.
	Text,
}

/// A configured namehash function.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Namehasher {
	algorithm: HashAlgorithm,
	encoding: LabelEncoding,
}

impl Namehasher {
	pub const fn new(algorithm: HashAlgorithm) -> Self {
		Self {
			algorithm,
			encoding: LabelEncoding::Typed,
		}
	}

	/// The scheme of the legacy registry: Keccak-256 over plain text labels.
	pub const fn legacy() -> Self {
		Self {
			algorithm: HashAlgorithm::Keccak256,
			encoding: LabelEncoding::Text,
		}
	}

	#[must_use]
	pub const fn with_encoding(mut self, encoding: LabelEncoding) -> Self {
		self.encoding = encoding;
		self
	}

	pub const fn algorithm(&self) -> HashAlgorithm {
		self.algorithm
	}

	pub const fn encoding(&self) -> LabelEncoding {
		self.encoding
	}

	/// Compute the node of `name`.
	///
	/// # Errors
	///
	/// Fails if any label cannot be encoded. No partial node is returned.
	pub fn hash(&self, name: &str) -> Result<Node, Error> {
		if name.is_empty() {
			return Ok(Node::ZERO);
		}

		let mut node = Node::ZERO;
		for label in name.rsplit('.').filter(|label| !label.is_empty()) {
			let label_hash = self.algorithm.digest(&self.encode_label(label)?);
			node = Node(self.algorithm.digest_pair(&node.0, &label_hash));
		}

		Ok(node)
	}

	fn encode_label(&self, label: &str) -> Result<Vec<u8>, Error> {
		match self.encoding {
			LabelEncoding::Typed => Label::classify(label).encode(),
			LabelEncoding::Text => Ok(label.as_bytes().to_vec()),
		}
	}
}

/// Compute the node of `name` with SHA-256 and typed labels.
///
/// # Errors
///
/// Fails if an address label has a bad checksum or a numeric label overflows.
pub fn namehash(name: &str) -> Result<Node, Error> {
	Namehasher::default().hash(name)
}

/// Split a name into its non-empty labels, leftmost first.
pub fn labels(name: &str) -> impl Iterator<Item = Label<'_>> {
	name.split('.')
		.filter(|label| !label.is_empty())
		.map(Label::classify)
}
