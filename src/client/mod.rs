//! Portal client module for HTTP/JSON communication

mod http;
mod session;
mod traits;

pub use http::{ClientError, PortalClient};
pub use session::SessionStore;
pub use traits::PortalApi;

#[cfg(test)]
pub use traits::MockPortalApi;
