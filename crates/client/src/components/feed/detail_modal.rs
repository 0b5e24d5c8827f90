//! Detail modal component - full record view overlay.

use dioxus::prelude::*;
use userfeed_shared::UserRecord;

/// DetailModal - centered overlay showing the selected record(s).
///
/// ```text
/// +---------------------------------+
/// |                          [X]    |
/// |         [  portrait  ]          |
/// |         Aada Leino              |
/// |  Location: Harjavalta,          |
/// |    Central Ostrobothnia Finland |
/// +---------------------------------+
/// ```
///
/// Takes the already-filtered detail set: the selection filter matches
/// by substring containment, so more than one record can show up here.
/// An empty set renders an empty body, which is what an unknown or
/// stale id produces.
#[component]
pub fn DetailModal(users: Vec<UserRecord>, on_close: EventHandler<()>) -> Element {
    rsx! {
        // Backdrop
        div {
            class: "fixed inset-0 z-50 flex items-center justify-center bg-black/70 backdrop-blur-sm",
            onclick: move |_| on_close.call(()),
            // Modal container
            div {
                class: "relative w-3/4 max-w-md min-h-[300px] bg-[#2b2d31] rounded-2xl shadow-2xl px-5 py-8 flex flex-col items-center justify-center",
                onclick: move |e| e.stop_propagation(),
                // Header with close control
                div { class: "absolute top-4 right-4",
                    button {
                        class: "text-[#b5bac1] hover:text-white transition-colors",
                        onclick: move |_| on_close.call(()),
                        svg {
                            class: "w-6 h-6",
                            fill: "none",
                            stroke: "currentColor",
                            view_box: "0 0 24 24",
                            path {
                                stroke_linecap: "round",
                                stroke_linejoin: "round",
                                stroke_width: "2",
                                d: "M6 18L18 6M6 6l12 12",
                            }
                        }
                    }
                }
                for user in users.iter() {
                    div {
                        key: "{user.login.uuid}",
                        class: "flex flex-col items-center",
                        img {
                            class: "w-36 h-36 rounded-xl object-cover mb-3",
                            src: "{user.picture.large}",
                            alt: "{user.name.first} {user.name.last}",
                        }
                        h2 { class: "text-xl font-bold text-white mb-1",
                            "{user.name.first} {user.name.last}"
                        }
                        p { class: "text-[15px] text-[#b5bac1] text-center", {user.location_line()} }
                    }
                }
            }
        }
    }
}
