#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

use anyhow::Result;
use dotenvy::dotenv;
use envoi_names::{config::Config, server};
use tracing_subscriber::{
	prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

#[tokio::main]
async fn main() -> Result<()> {
	dotenv().ok();

	// Initialize DataDog tracing
	let (_guard, _tracer_shutdown) = datadog_tracing::init()?;

	let env_filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| "envoi_names=info,tower_http=debug".into());

	tracing_subscriber::registry()
		.with(tracing_subscriber::fmt::layer())
		.with(env_filter)
		.init();

	log_panics::init();

	let config = Config::from_env()?;

	server::start(config).await
}
