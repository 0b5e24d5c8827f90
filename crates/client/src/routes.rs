//! Application routing configuration.

use dioxus::prelude::*;

use crate::views::FeedView;

// Router configuration - a single screen.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    FeedView {},
}
