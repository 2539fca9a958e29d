use data_encoding::{Encoding, Specification, BASE32_NOPAD};
use sha2::{Digest, Sha512_256};
use std::sync::LazyLock;

/// Length of a base32 account address.
pub const ADDRESS_LENGTH: usize = 58;
const PUBLIC_KEY_LENGTH: usize = 32;
const CHECKSUM_LENGTH: usize = 4;

/// RFC 4648 base32 without padding that ignores the two unused trailing bits.
/// The checksum alone decides whether an address is valid.
static LENIENT_BASE32: LazyLock<Encoding> = LazyLock::new(|| {
	let mut spec = Specification::new();
	spec.symbols.push_str("ABCDEFGHIJKLMNOPQRSTUVWXYZ234567");
	spec.check_trailing_bits = false;
	spec.encoding().unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("address must be {ADDRESS_LENGTH} characters, got {0}")]
	Length(usize),
	#[error("address is not valid base32: {0}")]
	Encoding(String),
	#[error("address checksum does not match its public key")]
	Checksum,
}

/// Decode an account address into its 32-byte public key.
///
/// The address is the unpadded base32 encoding of the public key followed by
/// the last four bytes of its SHA-512/256 digest.
pub fn decode(address: &str) -> Result<[u8; 32], Error> {
	if address.len() != ADDRESS_LENGTH {
		return Err(Error::Length(address.len()));
	}

	let raw = LENIENT_BASE32
		.decode(address.as_bytes())
		.map_err(|e| Error::Encoding(e.to_string()))?;

	if raw.len() != PUBLIC_KEY_LENGTH + CHECKSUM_LENGTH {
		return Err(Error::Encoding(format!("decoded to {} bytes", raw.len())));
	}

	let (key, checksum) = raw.split_at(PUBLIC_KEY_LENGTH);
	if checksum != checksum_of(key) {
		return Err(Error::Checksum);
	}

	let mut public_key = [0u8; PUBLIC_KEY_LENGTH];
	public_key.copy_from_slice(key);

	Ok(public_key)
}

/// Encode a public key as an account address.
pub fn encode(public_key: &[u8; 32]) -> String {
	let mut raw = Vec::with_capacity(PUBLIC_KEY_LENGTH + CHECKSUM_LENGTH);
	raw.extend_from_slice(public_key);
	raw.extend_from_slice(&checksum_of(public_key));

	BASE32_NOPAD.encode(&raw)
}

pub fn is_valid(address: &str) -> bool {
	decode(address).is_ok()
}

fn checksum_of(public_key: &[u8]) -> [u8; CHECKSUM_LENGTH] {
	let digest = Sha512_256::digest(public_key);

	let mut checksum = [0u8; CHECKSUM_LENGTH];
	checksum.copy_from_slice(&digest[digest.len() - CHECKSUM_LENGTH..]);
	checksum
}

#[cfg(test)]
mod tests {
	use super::*;

	const ZERO_ADDRESS: &str = "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAY5HFKQ";
	const ADDRESS: &str = "PINWUFIGWV7IK2YGC2KP4TOVQA2UMWM5GSTIKG5MHJUSPJ5DCHBNSPXJKE";
	const PUBLIC_KEY: &str = "7a1b6a1506b57e856b061694fe4dd5803546599d34a6851bac3a6927a7a311c2";

	#[test]
	fn decodes_zero_address() {
		assert_eq!(decode(ZERO_ADDRESS).unwrap(), [0u8; 32]);
	}

	#[test]
	fn decodes_public_key() {
		assert_eq!(hex::encode(decode(ADDRESS).unwrap()), PUBLIC_KEY);
	}

	#[test]
	fn encodes_back_to_the_same_address() {
		let key = decode(ADDRESS).unwrap();
		assert_eq!(encode(&key), ADDRESS);
		assert_eq!(encode(&[0u8; 32]), ZERO_ADDRESS);
	}

	#[test]
	fn rejects_bad_checksum() {
		let tampered = "PINWUFIGWV7IK2YGC2KP4TOVQA2UMWM5GSTIKG5MHJUSPJ5DCHBNSPXJAE";
		assert_eq!(decode(tampered), Err(Error::Checksum));
		assert!(!is_valid(tampered));
	}

	#[test]
	fn ignores_unused_trailing_bits() {
		let noncanonical = "PINWUFIGWV7IK2YGC2KP4TOVQA2UMWM5GSTIKG5MHJUSPJ5DCHBNSPXJKF";
		assert_eq!(decode(noncanonical).unwrap(), decode(ADDRESS).unwrap());
		assert_eq!(encode(&decode(noncanonical).unwrap()), ADDRESS);
	}

	#[test]
	fn rejects_wrong_length() {
		assert_eq!(decode("ABC"), Err(Error::Length(3)));
	}

	#[test]
	fn rejects_non_base32() {
		let lowercase = ADDRESS.to_lowercase();
		assert!(matches!(decode(&lowercase), Err(Error::Encoding(_))));
	}
}
