//! Coding resources: the remote listing, its fetch client, and the pure
//! filter derivations used by the resources view.

mod client;
mod error;
pub mod filter;
mod model;

pub use client::ResourceClient;
pub use error::{FetchError, FETCH_FAILED_MESSAGE};
pub use filter::{FilterView, Selection};
pub use model::{take_top, CodingResource};
