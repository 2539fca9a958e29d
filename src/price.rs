/// Extra payment the reservation contract takes to fund the record's storage box.
pub const RESERVATION_BOX_COST: u64 = 168_000;

/// Registration price of a label in base units, by its length in UTF-16 code units.
pub fn name_price(label: &str) -> u64 {
	match label.encode_utf16().count() {
		1 => 64_000,
		2 => 32_000,
		3 => 16_000,
		4 => 8_000,
		5 => 4_000,
		_ => 2_000,
	}
}

/// Total payment needed to reserve a name at `price`.
pub const fn reservation_payment(price: u64) -> u64 {
	price.saturating_add(RESERVATION_BOX_COST)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn prices_by_length() {
		assert_eq!(name_price("a"), 64_000);
		assert_eq!(name_price("ab"), 32_000);
		assert_eq!(name_price("abc"), 16_000);
		assert_eq!(name_price("abcd"), 8_000);
		assert_eq!(name_price("abcde"), 4_000);
		assert_eq!(name_price("abcdef"), 2_000);
		assert_eq!(name_price("abcdefghijklmnop"), 2_000);
	}

	#[test]
	fn counts_utf16_units_not_bytes() {
		assert_eq!(name_price("é"), 64_000);
		assert_eq!(name_price("😀"), 32_000);
		assert_eq!(name_price("a😀"), 16_000);
	}

	#[test]
	fn reservation_adds_box_cost() {
		assert_eq!(reservation_payment(2_000), 170_000);
		assert_eq!(reservation_payment(u64::MAX), u64::MAX);
	}
}
