use schemars::{schema, JsonSchema};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, fmt::Display, ops::Deref};

use crate::namehash::{address, Node};

/// Checksummed base32 account address.
#[repr(transparent)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountAddress(pub String);

impl AccountAddress {
	pub fn from_string(s: &str) -> Result<Self, address::Error> {
		address::decode(s)?;
		Ok(Self(s.to_string()))
	}
}

impl Deref for AccountAddress {
	type Target = str;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl Display for AccountAddress {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl<'de> Deserialize<'de> for AccountAddress {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let s = String::deserialize(deserializer)?;
		Self::from_string(&s).map_err(de::Error::custom)
	}
}

impl JsonSchema for AccountAddress {
	fn schema_name() -> String {
		"AccountAddress".to_string()
	}

	fn json_schema(_: &mut schemars::gen::SchemaGenerator) -> schema::Schema {
		pattern_string("^[A-Z2-7]{58}$")
	}
}

impl Serialize for Node {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

impl<'de> Deserialize<'de> for Node {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let s = String::deserialize(deserializer)?;
		s.parse().map_err(de::Error::custom)
	}
}

/// 0x-prefixed hex string of a 32-byte node.
impl JsonSchema for Node {
	fn schema_name() -> String {
		"Node".to_string()
	}

	fn json_schema(_: &mut schemars::gen::SchemaGenerator) -> schema::Schema {
		pattern_string("^0x[a-f0-9]{64}$")
	}
}

fn pattern_string(pattern: &str) -> schema::Schema {
	schema::Schema::Object(schema::SchemaObject {
		string: Some(Box::new(schema::StringValidation {
			pattern: Some(pattern.to_string()),
			..Default::default()
		})),
		instance_type: Some(schema::SingleOrVec::Single(Box::new(
			schema::InstanceType::String,
		))),
		..Default::default()
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::namehash::namehash;

	#[test]
	fn node_serializes_as_hex() {
		let node = namehash("voi").unwrap();
		assert_eq!(
			serde_json::to_value(node).unwrap(),
			"0xb450c7e69b509b3d8c47d59c1cf8f6b141fe78244c5fd37df696a8bda7b0d541"
		);
		assert_eq!(
			serde_json::from_value::<Node>(serde_json::to_value(node).unwrap()).unwrap(),
			node
		);
	}

	#[test]
	fn address_deserialization_checks_checksum() {
		let ok = serde_json::from_str::<AccountAddress>(
			r#""PINWUFIGWV7IK2YGC2KP4TOVQA2UMWM5GSTIKG5MHJUSPJ5DCHBNSPXJKE""#,
		);
		assert!(ok.is_ok());

		let bad = serde_json::from_str::<AccountAddress>(
			r#""PINWUFIGWV7IK2YGC2KP4TOVQA2UMWM5GSTIKG5MHJUSPJ5DCHBNSPXJAE""#,
		);
		assert!(bad.is_err());
	}
}
