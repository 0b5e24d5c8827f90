//! Shared types and state machines for the userfeed client.
//!
//! Everything in this crate is pure: the data model for the
//! randomuser.me wire format, the feed pagination state machine, and
//! the detail-modal selection state. All I/O lives in the client crate.

pub mod error;
pub mod feed;
pub mod models;
pub mod selection;

pub use error::*;
pub use feed::*;
pub use models::*;
pub use selection::*;
