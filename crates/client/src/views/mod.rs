//! View components for the application.

pub mod feed_view;

pub use feed_view::FeedView;
