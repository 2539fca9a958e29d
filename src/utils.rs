use ruint::aliases::U256;

use crate::namehash::Node;

/// Width of a reservation name argument.
pub const NAME_ARG_LENGTH: usize = 256;
/// Width of a text-record key argument.
pub const TEXT_KEY_ARG_LENGTH: usize = 22;
/// Width of a text-record value argument.
pub const TEXT_VALUE_ARG_LENGTH: usize = 256;
/// Width of a reverse-registrar name argument.
pub const REVERSE_NAME_ARG_LENGTH: usize = 58;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("value is {len} bytes, which does not fit in a {width}-byte argument")]
pub struct TooLong {
	pub len: usize,
	pub width: usize,
}

/// Right-pad the UTF-8 bytes of `value` with zeros to exactly `width` bytes.
pub fn pad_bytes(value: &str, width: usize) -> Result<Vec<u8>, TooLong> {
	let bytes = value.as_bytes();
	if bytes.len() > width {
		return Err(TooLong {
			len: bytes.len(),
			width,
		});
	}

	let mut padded = vec![0u8; width];
	padded[..bytes.len()].copy_from_slice(bytes);

	Ok(padded)
}

/// Remove the zero padding contracts leave at the end of fixed-width strings.
pub fn strip_trailing_zero_bytes(value: &str) -> &str {
	value.trim_end_matches('\0')
}

/// Read a node as a big-endian integer, which is how the registrar numbers its tokens.
pub fn node_to_u256(node: &Node) -> U256 {
	U256::from_be_bytes(node.0)
}

/// Shorten an address for display, e.g. `PINW...XJKE`.
pub fn format_address(address: &str) -> String {
	if address.chars().count() <= 8 {
		return address.to_string();
	}

	let head: String = address.chars().take(4).collect();
	let tail: String = address
		.chars()
		.rev()
		.take(4)
		.collect::<Vec<_>>()
		.into_iter()
		.rev()
		.collect();

	format!("{head}...{tail}")
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::namehash::namehash;

	#[test]
	fn pads_to_width() {
		let padded = pad_bytes("alice.voi", NAME_ARG_LENGTH).unwrap();
		assert_eq!(padded.len(), NAME_ARG_LENGTH);
		assert_eq!(&padded[..9], b"alice.voi");
		assert!(padded[9..].iter().all(|b| *b == 0));
	}

	#[test]
	fn exact_width_is_not_padded() {
		let key = "a".repeat(TEXT_KEY_ARG_LENGTH);
		assert_eq!(pad_bytes(&key, TEXT_KEY_ARG_LENGTH).unwrap(), key.as_bytes());
	}

	#[test]
	fn rejects_values_wider_than_argument() {
		assert_eq!(
			pad_bytes("com.twitter.handle.long", TEXT_KEY_ARG_LENGTH),
			Err(TooLong {
				len: 23,
				width: TEXT_KEY_ARG_LENGTH
			})
		);
	}

	#[test]
	fn strips_zero_padding() {
		let padded = String::from_utf8(pad_bytes("alice.voi", 32).unwrap()).unwrap();
		assert_eq!(strip_trailing_zero_bytes(&padded), "alice.voi");
		assert_eq!(strip_trailing_zero_bytes("a\0b\0\0"), "a\0b");
	}

	#[test]
	fn node_reads_as_big_endian_integer() {
		let mut bytes = [0u8; 32];
		bytes[30] = 0x30;
		bytes[31] = 0x39;
		assert_eq!(node_to_u256(&Node(bytes)), U256::from(12345u64));

		let node = namehash("alice.voi").unwrap();
		assert_eq!(node_to_u256(&node).to_be_bytes::<32>(), node.0);
	}

	#[test]
	fn shortens_addresses() {
		assert_eq!(
			format_address("PINWUFIGWV7IK2YGC2KP4TOVQA2UMWM5GSTIKG5MHJUSPJ5DCHBNSPXJKE"),
			"PINW...XJKE"
		);
		assert_eq!(format_address("ABCD"), "ABCD");
	}
}
