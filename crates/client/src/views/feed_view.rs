//! Feed view - the infinite-scrolling user list with its detail modal.
//!
//! This screen owns all of the state: a `FeedState` for the
//! accumulated list and page cursor, and a `SelectionState` for the
//! modal. Both live in signals and are torn down with the screen.
//!
//! Control flow: mount dispatches the fetch for page 1; scrolling to
//! the end of the list advances the cursor and dispatches the next
//! fetch; tapping a card opens the modal over the list.

use dioxus::prelude::*;
use userfeed_shared::{FeedState, SelectionState};

use crate::api_client::ApiClient;
use crate::components::feed::{DetailModal, UserCard};
use crate::{log_debug, log_error};

/// DOM id of the scroll container, used to read scroll metrics back.
const FEED_CONTAINER_ID: &str = "feed-container";

/// Slop for the end-of-list check; scroll offsets are rounded by the
/// browser, so an exact comparison would sometimes never fire.
const NEAR_END_SLOP_PX: i32 = 4;

/// Dispatch a fetch for the feed's current page.
///
/// Marks the page as loading synchronously, then resolves the request
/// in a spawned task on the UI event loop. A failed fetch applies no
/// state change: the loading flag stays set and the list stops growing
/// for that page. Nothing cancels an outstanding fetch.
fn dispatch_fetch(mut feed: Signal<FeedState>) {
    let page = feed.write().begin_fetch();
    spawn(async move {
        let client = ApiClient::new();
        match client.fetch_users(page).await {
            Ok(records) => {
                log_debug!("page {page}: received {} records", records.len());
                feed.write().apply_page(records);
            }
            Err(err) => {
                log_error!("fetch for page {page} failed: {err}");
            }
        }
    });
}

/// End-of-list test over raw scroll metrics.
fn is_near_end(scroll_top: i32, client_height: i32, scroll_height: i32) -> bool {
    scroll_top + client_height >= scroll_height - NEAR_END_SLOP_PX
}

/// Read (scroll_top, client_height, scroll_height) off the container.
#[cfg(target_arch = "wasm32")]
fn container_metrics() -> Option<(i32, i32, i32)> {
    let document = web_sys::window()?.document()?;
    let container = document.get_element_by_id(FEED_CONTAINER_ID)?;
    Some((
        container.scroll_top(),
        container.client_height(),
        container.scroll_height(),
    ))
}

#[cfg(not(target_arch = "wasm32"))]
fn container_metrics() -> Option<(i32, i32, i32)> {
    // The desktop webview does not expose scroll metrics to us here.
    None
}

/// FeedView - the single screen of the application.
#[component]
pub fn FeedView() -> Element {
    let mut feed = use_signal(FeedState::new);
    let mut selection = use_signal(SelectionState::new);

    // One scroll gesture produces a burst of scroll events. Advancing
    // once per end-reached transition (rearmed when the user scrolls
    // back up) keeps one fetch per pagination trigger. There is still
    // no loading guard: a fast scroller can have several pages in
    // flight at once.
    let mut end_reached = use_signal(|| false);

    // Initial fetch for page 1, exactly once at mount.
    use_effect(move || {
        dispatch_fetch(feed);
    });

    let is_loading = feed.read().is_loading();
    let modal_open = selection.read().is_visible();

    // Pre-resolve the detail set so the rsx below borrows nothing.
    let detail: Vec<_> = selection
        .read()
        .detail_for(feed.read().records())
        .into_iter()
        .cloned()
        .collect();

    // The list dims underneath the open modal.
    let list_class = if modal_open {
        "flex-1 overflow-y-auto px-4 pt-8 opacity-10"
    } else {
        "flex-1 overflow-y-auto px-4 pt-8"
    };

    rsx! {
        div { class: "h-screen flex flex-col bg-[#313338]",
            if modal_open {
                DetailModal {
                    users: detail,
                    on_close: move |_| selection.write().dismiss(),
                }
            }
            div {
                id: FEED_CONTAINER_ID,
                class: list_class,
                onscroll: move |_| {
                    let Some((top, client_h, scroll_h)) = container_metrics() else {
                        return;
                    };
                    let near = is_near_end(top, client_h, scroll_h);
                    if near && !end_reached() {
                        end_reached.set(true);
                        let page = feed.write().advance_page();
                        log_debug!("scroll hit end, advancing to page {page}");
                        dispatch_fetch(feed);
                    } else if !near && end_reached() {
                        end_reached.set(false);
                    }
                },
                for user in feed.read().records().iter() {
                    UserCard {
                        key: "{user.email}",
                        user: user.clone(),
                        on_select: move |uuid: String| selection.write().select(uuid),
                    }
                }
                if is_loading {
                    p { class: "text-[29px] text-[#b5bac1] pb-6", "Loading ..." }
                }
            }
        }
    }
}
