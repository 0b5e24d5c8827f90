//! Userfeed Client - Dioxus application
//!
//! This crate contains the web/desktop client for userfeed, an
//! infinite-scrolling browser for the randomuser.me demo API with a
//! per-record detail modal.

pub mod api_client;
pub mod logging;

pub mod components;
pub mod routes;
pub mod views;

pub use api_client::ApiClient;
pub use routes::Route;
