//! User card component - one row of the feed list.

use dioxus::prelude::*;
use userfeed_shared::UserRecord;

/// UserCard - list row with the name/email/region block on the left
/// and the profile thumbnail on the right.
///
/// ```text
/// +-------------------------------------------------------+
/// |  Ms Aada Leino                                 [img]  |
/// |  aada.leino@example.com                               |
/// |  Central Ostrobothnia Finland                         |
/// +-------------------------------------------------------+
/// ```
///
/// Tapping anywhere on the card selects the record by its uuid.
#[component]
pub fn UserCard(user: UserRecord, on_select: EventHandler<String>) -> Element {
    let full_name = user.full_name();
    let region = user.region();

    rsx! {
        div {
            class: "flex items-start justify-between px-4 py-4 mb-5 mr-2 rounded-xl bg-[#2b2d31] border border-[#3f4147] cursor-pointer transition-all hover:border-[#5865f2] hover:shadow-xl",
            onclick: {
                let uuid = user.login.uuid.clone();
                move |_| on_select.call(uuid.clone())
            },
            div { class: "min-w-0",
                h3 { class: "text-2xl font-bold text-white leading-tight truncate", "{full_name}" }
                p { class: "text-sm italic text-[#b5bac1] truncate", "{user.email}" }
                p { class: "text-lg font-bold text-[#dbdee1] truncate", "{region}" }
            }
            img {
                class: "w-16 h-14 ml-4 rounded-2xl object-cover flex-shrink-0",
                src: "{user.picture.large}",
                alt: "{full_name}",
            }
        }
    }
}
