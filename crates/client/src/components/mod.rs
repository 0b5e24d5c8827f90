//! Reusable UI components.

pub mod feed;
