use axum::Extension;
use std::{collections::HashMap, sync::Arc};

use crate::namehash::address;

#[allow(clippy::module_name_repetitions)]
pub type ReservationsExt = Extension<Arc<Reservations>>;

const BUNDLED: &str = include_str!("reservations.txt");

/// Names set aside for specific accounts before public registration.
#[derive(Debug, Default)]
pub struct Reservations {
	/// Reserved name to the address allowed to claim it
	holders: HashMap<Box<str>, Box<str>>,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("malformed reservation entry {0:?}, expected name=ADDRESS")]
	Malformed(String),
	#[error("reservation for {name} has an invalid address: {source}")]
	Address {
		name: String,
		source: address::Error,
	},
	#[error("The requested name is reserved.")]
	Reserved,
}

impl Reservations {
	/// Parse a list of `name=ADDRESS` entries separated by commas or newlines.
	/// Blank entries are ignored.
	pub fn new(entries: &str) -> Result<Self, Error> {
		let mut holders = HashMap::new();

		for entry in entries
			.split([',', '\n'])
			.map(str::trim)
			.filter(|e| !e.is_empty())
		{
			let (name, holder) = entry
				.split_once('=')
				.map(|(n, h)| (n.trim(), h.trim()))
				.filter(|(n, h)| !n.is_empty() && !h.is_empty())
				.ok_or_else(|| Error::Malformed(entry.to_string()))?;

			address::decode(holder).map_err(|source| Error::Address {
				name: name.to_string(),
				source,
			})?;

			holders.insert(name.to_lowercase().into(), holder.into());
		}

		Ok(Self { holders })
	}

	/// The reservation table shipped with the registry launch.
	pub fn bundled() -> Result<Self, Error> {
		Self::new(BUNDLED)
	}

	pub fn len(&self) -> usize {
		self.holders.len()
	}

	pub fn is_empty(&self) -> bool {
		self.holders.is_empty()
	}

	/// The account a name is reserved for, if any.
	pub fn holder(&self, name: &str) -> Option<&str> {
		self.holders.get(name.to_lowercase().as_str()).map(AsRef::as_ref)
	}

	/// Check that `claimant` may register `name`.
	pub fn ensure_claimable(&self, name: &str, claimant: &str) -> Result<(), Error> {
		match self.holder(name) {
			Some(holder) if holder != claimant => Err(Error::Reserved),
			_ => Ok(()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const HOLDER: &str = "PINWUFIGWV7IK2YGC2KP4TOVQA2UMWM5GSTIKG5MHJUSPJ5DCHBNSPXJKE";
	const OTHER: &str = "G3MSA75OZEJTCCENOJDLDJK7UD7E2K5DNC7FVHCNOV7E3I4DTXTOWDUIFQ";

	#[test]
	fn parses_entries() {
		let reservations =
			Reservations::new(&format!(" 1337.voi={HOLDER} ,, Cool.voi = {OTHER}")).unwrap();

		assert_eq!(reservations.len(), 2);
		assert_eq!(reservations.holder("1337.voi"), Some(HOLDER));
		assert_eq!(reservations.holder("cool.voi"), Some(OTHER));
		assert_eq!(reservations.holder("alice.voi"), None);
	}

	#[test]
	fn empty_list_reserves_nothing() {
		let reservations = Reservations::new("").unwrap();
		assert!(reservations.is_empty());
		assert!(reservations.ensure_claimable("alice.voi", OTHER).is_ok());
	}

	#[test]
	fn only_holder_may_claim() {
		let reservations = Reservations::new(&format!("1337.voi={HOLDER}")).unwrap();

		assert!(reservations.ensure_claimable("1337.voi", HOLDER).is_ok());
		assert!(matches!(
			reservations.ensure_claimable("1337.voi", OTHER),
			Err(Error::Reserved)
		));
		assert!(reservations.ensure_claimable("31337.voi", OTHER).is_ok());
	}

	#[test]
	fn rejects_malformed_entries() {
		assert!(matches!(
			Reservations::new("1337.voi"),
			Err(Error::Malformed(_))
		));
		assert!(matches!(
			Reservations::new("=ABC"),
			Err(Error::Malformed(_))
		));
	}

	#[test]
	fn parses_newline_separated_entries() {
		let reservations = Reservations::new(&format!("1337.voi={HOLDER}\nren.voi={OTHER}\n")).unwrap();
		assert_eq!(reservations.len(), 2);
		assert_eq!(reservations.holder("ren.voi"), Some(OTHER));
	}

	#[test]
	fn bundled_table_loads() {
		let reservations = Reservations::bundled().unwrap();

		assert_eq!(reservations.len(), 91);
		assert_eq!(reservations.holder("1337.voi"), Some(HOLDER));
		assert_eq!(reservations.holder("testing.voi"), Some(OTHER));
		assert_eq!(reservations.holder("ren.voi"), Some(OTHER));
		assert!(matches!(
			reservations.ensure_claimable("1337.voi", OTHER),
			Err(Error::Reserved)
		));
	}

	#[test]
	fn rejects_invalid_addresses() {
		assert!(matches!(
			Reservations::new("1337.voi=NOTANADDRESS"),
			Err(Error::Address { name, .. }) if name == "1337.voi"
		));
	}
}
