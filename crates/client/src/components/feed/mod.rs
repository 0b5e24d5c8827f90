//! Feed display components.
//!
//! - `UserCard`: one row of the infinite-scrolling list
//! - `DetailModal`: full record view in a modal overlay

pub mod detail_modal;
pub mod user_card;

pub use detail_modal::DetailModal;
pub use user_card::UserCard;
