//! Contact form state and its round-trip to the remote contact API.

mod api;
mod controller;
mod draft;
mod error;
mod field;
mod state;
mod view;

pub use api::*;
pub use controller::*;
pub use draft::*;
pub use error::*;
pub use field::*;
pub use state::*;
