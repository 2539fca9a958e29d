use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::namehash::{address, Namehasher, Node, NUMERIC_LABEL_REGEX};

/// Entities that can point back at a name through a reverse record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReverseKind {
	/// An account's primary name, keyed by its address.
	Addr,
	/// A staking contract, keyed by its escrow address.
	Staking,
	/// An NFT collection, keyed by its application id.
	Collection,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("unknown reverse record kind: {0}")]
	UnknownKind(String),
	#[error("invalid address: {0}")]
	Address(#[from] address::Error),
	#[error("collection id must be a decimal number, got {0:?}")]
	CollectionId(String),
	#[error(transparent)]
	Namehash(#[from] crate::namehash::Error),
}

impl ReverseKind {
	pub const fn suffix(self) -> &'static str {
		match self {
			Self::Addr => "addr.reverse",
			Self::Staking => "staking.reverse",
			Self::Collection => "collection.reverse",
		}
	}

	fn validate(self, subject: &str) -> Result<(), Error> {
		match self {
			Self::Addr | Self::Staking => {
				address::decode(subject)?;
			},
			Self::Collection => {
				if subject.starts_with('-') || !NUMERIC_LABEL_REGEX.is_match(subject) {
					return Err(Error::CollectionId(subject.to_string()));
				}
			},
		}

		Ok(())
	}
}

impl FromStr for ReverseKind {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"addr" => Ok(Self::Addr),
			"staking" => Ok(Self::Staking),
			"collection" => Ok(Self::Collection),
			other => Err(Error::UnknownKind(other.to_string())),
		}
	}
}

impl fmt::Display for ReverseKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Addr => "addr",
			Self::Staking => "staking",
			Self::Collection => "collection",
		})
	}
}

/// Name of the reverse record for `subject`, e.g. `<ADDRESS>.addr.reverse`.
pub fn reverse_name(kind: ReverseKind, subject: &str) -> Result<String, Error> {
	kind.validate(subject)?;

	Ok(format!("{subject}.{}", kind.suffix()))
}

/// Node of the reverse record for `subject`.
pub fn reverse_node(kind: ReverseKind, subject: &str, hasher: &Namehasher) -> Result<Node, Error> {
	let name = reverse_name(kind, subject)?;

	Ok(hasher.hash(&name)?)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::namehash::namehash;

	const ADDRESS: &str = "PINWUFIGWV7IK2YGC2KP4TOVQA2UMWM5GSTIKG5MHJUSPJ5DCHBNSPXJKE";

	#[test]
	fn builds_reverse_names() {
		assert_eq!(
			reverse_name(ReverseKind::Addr, ADDRESS).unwrap(),
			format!("{ADDRESS}.addr.reverse")
		);
		assert_eq!(
			reverse_name(ReverseKind::Staking, ADDRESS).unwrap(),
			format!("{ADDRESS}.staking.reverse")
		);
		assert_eq!(
			reverse_name(ReverseKind::Collection, "12345").unwrap(),
			"12345.collection.reverse"
		);
	}

	#[test]
	fn reverse_node_matches_namehash() {
		let node = reverse_node(ReverseKind::Collection, "12345", &Namehasher::default()).unwrap();
		assert_eq!(node, namehash("12345.collection.reverse").unwrap());
		assert_eq!(
			node.to_string(),
			"0x0a02aaa68e2fcddab8ab4a4446324e85bfdfc628583cc45677dfa7dc35793d24"
		);

		let node = reverse_node(ReverseKind::Addr, ADDRESS, &Namehasher::default()).unwrap();
		assert_eq!(
			node.to_string(),
			"0xedf63af866ec84a8c71498833fad0102ca3e5bea199c0bb48702af1df7d0fc90"
		);
	}

	#[test]
	fn rejects_invalid_subjects() {
		assert!(matches!(
			reverse_name(ReverseKind::Addr, "alice"),
			Err(Error::Address(address::Error::Length(5)))
		));
		assert!(matches!(
			reverse_name(ReverseKind::Collection, "-1"),
			Err(Error::CollectionId(_))
		));
		assert!(matches!(
			reverse_name(ReverseKind::Collection, "abc"),
			Err(Error::CollectionId(_))
		));
	}

	#[test]
	fn parses_kinds() {
		assert_eq!("addr".parse::<ReverseKind>().unwrap(), ReverseKind::Addr);
		assert_eq!(ReverseKind::Staking.to_string(), "staking");
		assert!(matches!(
			"nft".parse::<ReverseKind>(),
			Err(Error::UnknownKind(k)) if k == "nft"
		));
	}
}
