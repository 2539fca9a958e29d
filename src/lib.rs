#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

pub mod config;
pub mod namehash;
pub mod network;
pub mod price;
pub mod reservations;
pub mod reverse;
pub mod routes;
pub mod server;
pub mod types;
pub mod utils;

pub use namehash::{namehash, HashAlgorithm, Label, Namehasher, Node};
