use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Network {
	Mainnet,
	#[default]
	Testnet,
}

/// Application ids of the name-service contracts. `None` where a network has no deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Contracts {
	pub registry: u64,
	pub resolver: u64,
	pub registrar: u64,
	pub reverse_registrar: Option<u64>,
	pub rsvp: Option<u64>,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown network: {0}")]
pub struct UnknownNetwork(String);

impl Network {
	pub const fn algod_url(self) -> &'static str {
		match self {
			Self::Mainnet => "https://mainnet-api.voi.nodely.dev",
			Self::Testnet => "https://testnet-api.voi.nodely.dev",
		}
	}

	pub const fn indexer_url(self) -> &'static str {
		match self {
			Self::Mainnet => "https://mainnet-idx.voi.nodely.dev",
			Self::Testnet => "https://testnet-idx.voi.nodely.dev",
		}
	}

	pub const fn contracts(self) -> Contracts {
		match self {
			Self::Mainnet => Contracts {
				registry: 797_607,
				resolver: 797_608,
				registrar: 797_609,
				reverse_registrar: Some(797_610),
				rsvp: Some(740_413),
			},
			Self::Testnet => Contracts {
				registry: 30_000,
				resolver: 30_001,
				registrar: 30_002,
				reverse_registrar: None,
				rsvp: None,
			},
		}
	}
}

impl FromStr for Network {
	type Err = UnknownNetwork;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_lowercase().as_str() {
			"mainnet" => Ok(Self::Mainnet),
			"testnet" => Ok(Self::Testnet),
			_ => Err(UnknownNetwork(s.to_string())),
		}
	}
}

impl fmt::Display for Network {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Mainnet => "mainnet",
			Self::Testnet => "testnet",
		})
	}
}
