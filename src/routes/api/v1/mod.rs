use aide::axum::{
	routing::{get_with, post_with},
	ApiRouter,
};

mod namehash;
mod network;
mod price;
mod query_multiple;
mod reservation;
mod reverse;

use namehash::{docs as namehash_docs, namehash};
use network::{docs as network_docs, network};
use price::{docs as price_docs, price};
use query_multiple::{docs as query_multiple_docs, query_multiple};
use reservation::{docs as reservation_docs, reservation};
use reverse::{docs as reverse_docs, reverse};

pub fn handler() -> ApiRouter {
	ApiRouter::new()
		.api_route(
			"/namehash",
			post_with(query_multiple, query_multiple_docs),
		)
		.api_route("/namehash/:name", get_with(namehash, namehash_docs))
		.api_route("/reverse/:kind/:subject", get_with(reverse, reverse_docs))
		.api_route("/price/:name", get_with(price, price_docs))
		.api_route("/network", get_with(network, network_docs))
		.api_route(
			"/reservations/:name",
			get_with(reservation, reservation_docs),
		)
}
