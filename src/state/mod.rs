//! Application state module

mod app_state;
mod card;
pub mod form;
mod reveal;

pub use app_state::*;
pub use card::*;
pub use form::*;
pub use reveal::*;
