//! Services backing the HTTP layer.

pub mod cookies;
pub mod sessions;

pub use cookies::SessionCookie;
pub use sessions::{SessionHandle, SessionRegistry};
