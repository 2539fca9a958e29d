use regex::Regex;
use ruint::aliases::U256;
use std::sync::LazyLock;

use super::{address, Error};

pub static ADDRESS_LABEL_REGEX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^[A-Z2-7]{58}$").unwrap());
pub static NUMERIC_LABEL_REGEX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^-?[0-9]+$").unwrap());

/// One dot-separated segment of a name, tagged by how it is encoded before hashing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label<'a> {
	/// A 58-character base32 account address, hashed as its public key.
	Address(&'a str),
	/// A base-10 integer, hashed as a 32-byte big-endian word.
	Numeric(&'a str),
	/// Anything else, hashed as UTF-8.
	Text(&'a str),
}

impl<'a> Label<'a> {
	/// Classify a label. The address shape is checked before the numeric shape,
	/// so the order of these checks must not change.
	pub fn classify(label: &'a str) -> Self {
		if ADDRESS_LABEL_REGEX.is_match(label) {
			Self::Address(label)
		} else if NUMERIC_LABEL_REGEX.is_match(label) {
			Self::Numeric(label)
		} else {
			Self::Text(label)
		}
	}

	pub const fn as_str(&self) -> &'a str {
		match self {
			Self::Address(s) | Self::Numeric(s) | Self::Text(s) => s,
		}
	}

	pub const fn kind(&self) -> &'static str {
		match self {
			Self::Address(_) => "address",
			Self::Numeric(_) => "numeric",
			Self::Text(_) => "text",
		}
	}

	/// Canonical bytes of the label, fed to the hash primitive.
	///
	/// # Errors
	///
	/// Fails if an address-shaped label does not decode, or if a numeric label does not fit in 256 bits.
	pub fn encode(&self) -> Result<Vec<u8>, Error> {
		match self {
			Self::Address(s) => Ok(address::decode(s)?.to_vec()),
			Self::Numeric(s) => Ok(encode_integer(s)?.to_vec()),
			Self::Text(s) => Ok(s.as_bytes().to_vec()),
		}
	}
}

/// Encode a decimal integer as a 32-byte big-endian word.
/// Negative values use 256-bit two's complement.
pub fn encode_integer(digits: &str) -> Result<[u8; 32], Error> {
	let (negative, magnitude) = digits
		.strip_prefix('-')
		.map_or((false, digits), |rest| (true, rest));

	let value = U256::from_str_radix(magnitude, 10)
		.map_err(|_| Error::NumericOverflow(digits.to_string()))?;

	let value = if negative { value.wrapping_neg() } else { value };

	Ok(value.to_be_bytes::<32>())
}
