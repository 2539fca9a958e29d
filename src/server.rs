use aide::openapi::{self, OpenApi};
use anyhow::Result;
use axum::{Extension, Router};
use datadog_tracing::axum::{OtelAxumLayer, OtelInResponseLayer};
use std::{env, net::SocketAddr, time::Duration};
use tokio::{net::TcpListener, signal};
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer};

use crate::{config::Config, routes};

/// Build the API router with its docs and shared state.
pub fn router(mut config: Config) -> Router {
	let mut openapi = OpenApi {
		info: openapi::Info {
			title: "enVoi Names API".to_string(),
			version: env!("CARGO_PKG_VERSION").to_string(),
			..openapi::Info::default()
		},
		..OpenApi::default()
	};

	routes::handler()
		.finish_api(&mut openapi)
		.layer(Extension(openapi))
		.layer(config.reservations_extension())
		.layer(config.extension())
}

pub async fn start(config: Config) -> Result<()> {
	let router = router(config)
		.layer(OtelInResponseLayer)
		.layer((
			OtelAxumLayer::default(),
			TimeoutLayer::new(Duration::from_secs(30)),
			CorsLayer::permissive(),
		));

	let addr = SocketAddr::from((
		[0, 0, 0, 0],
		env::var("PORT").map_or(Ok(8000), |p| p.parse())?,
	));
	let listener = TcpListener::bind(&addr).await?;

	tracing::info!("Starting server on {addr}...");

	axum::serve(listener, router.into_make_service())
		.with_graceful_shutdown(async {
			signal::ctrl_c().await.ok();
			tracing::info!("Shutting down...");
		})
		.await?;

	Ok(())
}
