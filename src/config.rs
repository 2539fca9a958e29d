use axum::Extension;
use std::{
	env::{self, VarError},
	sync::Arc,
};

use crate::{
	namehash::{self, HashAlgorithm, Namehasher},
	network::{Network, UnknownNetwork},
	reservations::{self, Reservations, ReservationsExt},
};

#[allow(clippy::module_name_repetitions)]
pub type ConfigExt = Extension<Arc<Config>>;

#[derive(Debug)]
pub struct Config {
	pub network: Network,
	pub namehasher: Namehasher,
	/// Top-level label every registrable name lives under, e.g. `voi`.
	pub tld: String,
	reservations: Option<Reservations>,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error(transparent)]
	Network(#[from] UnknownNetwork),
	#[error(transparent)]
	Algorithm(#[from] namehash::Error),
	#[error(transparent)]
	Reservations(#[from] reservations::Error),
	#[error(transparent)]
	EnvWithContext(#[from] anyhow::Error),
}

impl Config {
	pub fn from_env() -> Result<Self, Error> {
		let network = env_or("NETWORK", "testnet")?.parse::<Network>()?;
		let algorithm = env_or("NAMEHASH_ALGORITHM", "sha256")?.parse::<HashAlgorithm>()?;
		let reservations = match env_opt("RESERVED_NAMES")? {
			Some(list) => Reservations::new(&list)?,
			None => Reservations::bundled()?,
		};

		let tld = env_or("TLD", "voi")?;
		if tld.is_empty() || tld.contains('.') {
			return Err(anyhow::anyhow!("TLD must be a single non-empty label, got {tld:?}").into());
		}

		tracing::info!(
			%network,
			%algorithm,
			reserved = reservations.len(),
			"Loaded configuration"
		);

		Ok(Self::new(network, Namehasher::new(algorithm), tld, reservations))
	}

	pub fn new(network: Network, namehasher: Namehasher, tld: String, reservations: Reservations) -> Self {
		Self {
			network,
			namehasher,
			tld,
			reservations: Some(reservations),
		}
	}

	/// The configured namehasher, or one using the algorithm named by `tag`.
	pub fn namehasher_for(&self, tag: Option<&str>) -> Result<Namehasher, namehash::Error> {
		match tag {
			Some(tag) => Ok(Namehasher::new(tag.parse()?)),
			None => Ok(self.namehasher),
		}
	}

	/// Strip the configured TLD from `name`, leaving the registrable label.
	pub fn label_of<'a>(&self, name: &'a str) -> &'a str {
		name.strip_suffix(&format!(".{}", self.tld)).unwrap_or(name)
	}

	pub fn reservations_extension(&mut self) -> ReservationsExt {
		Extension(Arc::new(self.reservations.take().unwrap_or_default()))
	}

	pub fn extension(self) -> ConfigExt {
		Extension(Arc::new(self))
	}
}

fn env_or(key: &str, default: &str) -> Result<String, Error> {
	Ok(env_opt(key)?.unwrap_or_else(|| default.to_string()))
}

fn env_opt(key: &str) -> Result<Option<String>, Error> {
	match env::var(key) {
		Ok(value) => Ok(Some(value)),
		Err(VarError::NotPresent) => Ok(None),
		Err(e) => Err(anyhow::Error::new(e)
			.context(format!("{key} environment variable is not valid unicode"))
			.into()),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn config() -> Config {
		Config::new(
			Network::Testnet,
			Namehasher::default(),
			"voi".to_string(),
			Reservations::default(),
		)
	}

	#[test]
	fn strips_tld() {
		let config = config();
		assert_eq!(config.label_of("alice.voi"), "alice");
		assert_eq!(config.label_of("alice"), "alice");
		assert_eq!(config.label_of("alice.algo"), "alice.algo");
		assert_eq!(config.label_of("voi"), "voi");
	}

	#[test]
	fn selects_namehasher_by_tag() {
		let config = config();
		assert_eq!(config.namehasher_for(None).unwrap(), Namehasher::default());
		assert_eq!(
			config.namehasher_for(Some("keccak256")).unwrap().algorithm(),
			HashAlgorithm::Keccak256
		);
		assert!(matches!(
			config.namehasher_for(Some("md5")),
			Err(namehash::Error::UnsupportedAlgorithm(_))
		));
	}

	#[test]
	fn unset_variable_reads_as_none() {
		assert_eq!(env_opt("ENVOI_NAMES_NEVER_SET").unwrap(), None);
		assert_eq!(env_or("ENVOI_NAMES_NEVER_SET", "voi").unwrap(), "voi");
	}

	#[test]
	fn reservations_are_taken_once() {
		let mut config = config();
		let Extension(first) = config.reservations_extension();
		let Extension(second) = config.reservations_extension();
		assert!(first.is_empty());
		assert!(second.is_empty());
	}
}
