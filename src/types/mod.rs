mod error;
mod request;
mod response;
mod wrappers;

pub use error::ErrorResponse;
pub use request::{AlgorithmQueryParams, NamehashQueryPayload};
pub use response::{LabelRecord, NetworkRecord, NodeRecord, PriceRecord, ReservationRecord};
pub use wrappers::AccountAddress;
