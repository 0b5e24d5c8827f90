//! End-to-end flows over the feed and selection state machines,
//! driving them the way the screen does: begin a fetch, apply the
//! response, advance on scroll, select on tap.

use userfeed_shared::{
    FeedState, SelectionState, UserLocation, UserLogin, UserName, UserPicture, UserRecord,
    UsersPage, PAGE_SIZE,
};

fn record(uuid: &str) -> UserRecord {
    UserRecord {
        name: UserName {
            title: "Mx".into(),
            first: "Feed".into(),
            last: "Tester".into(),
        },
        email: format!("{uuid}@example.com"),
        location: UserLocation {
            city: "Lyon".into(),
            state: "Auvergne-Rhône-Alpes".into(),
            country: "France".into(),
        },
        picture: UserPicture {
            large: "https://example.com/l.jpg".into(),
            medium: "https://example.com/m.jpg".into(),
            thumbnail: "https://example.com/t.jpg".into(),
        },
        login: UserLogin { uuid: uuid.into() },
    }
}

fn page_of(prefix: &str, n: usize) -> Vec<UserRecord> {
    (0..n).map(|i| record(&format!("{prefix}-{i}"))).collect()
}

#[test]
fn mount_fetches_page_one_and_applies_response() {
    let mut feed = FeedState::new();

    // Screen mount: exactly one fetch, for page 1.
    let requested = feed.begin_fetch();
    assert_eq!(requested, 1);
    assert!(feed.is_loading());

    let response = page_of("p1", PAGE_SIZE as usize);
    feed.apply_page(response.clone());

    assert!(!feed.is_loading());
    assert_eq!(feed.records(), response.as_slice());
}

#[test]
fn two_page_scroll_accumulates_twenty_in_order() {
    let mut feed = FeedState::new();

    feed.begin_fetch();
    let page1 = page_of("p1", 10);
    feed.apply_page(page1.clone());

    // Scroll hits the end: advance then fetch the new page.
    let next = feed.advance_page();
    assert_eq!(next, 2);
    assert_eq!(feed.begin_fetch(), 2);
    let page2 = page_of("p2", 10);
    feed.apply_page(page2.clone());

    assert_eq!(feed.records().len(), 20);
    assert_eq!(&feed.records()[..10], page1.as_slice());
    assert_eq!(&feed.records()[10..], page2.as_slice());
}

#[test]
fn records_grow_as_a_prefix_across_observations() {
    let mut feed = FeedState::new();

    feed.begin_fetch();
    feed.apply_page(page_of("p1", 10));
    let snapshot = feed.records().to_vec();

    feed.advance_page();
    feed.begin_fetch();
    feed.apply_page(page_of("p2", 10));

    // Append-only: the earlier observation is a prefix of the later one.
    assert_eq!(&feed.records()[..snapshot.len()], snapshot.as_slice());
}

#[test]
fn page_cursor_equals_one_plus_advances() {
    let mut feed = FeedState::new();
    let advances = 7;
    for _ in 0..advances {
        feed.advance_page();
    }
    assert_eq!(feed.page(), 1 + advances);
}

#[test]
fn stalled_page_does_not_block_further_advances() {
    let mut feed = FeedState::new();

    // Page 1 fetch dispatched but the response never arrives.
    feed.begin_fetch();
    assert!(feed.is_loading());

    // Scroll still advances and dispatches page 2 concurrently.
    assert_eq!(feed.advance_page(), 2);
    assert_eq!(feed.begin_fetch(), 2);

    // Page 2 resolves; the loading flag clears even though page 1 is
    // still outstanding. A single flag covers all in-flight fetches.
    feed.apply_page(page_of("p2", 10));
    assert!(!feed.is_loading());
    assert_eq!(feed.records().len(), 10);
    assert!(feed.records().iter().all(|r| r.uuid().starts_with("p2")));
}

#[test]
fn tap_then_dismiss_then_detail_still_matches_old_id() {
    let mut feed = FeedState::new();
    feed.begin_fetch();
    feed.apply_page(vec![record("abc-123"), record("def-456")]);

    let mut sel = SelectionState::new();
    sel.select("abc-123");
    sel.dismiss();

    // Nothing cleared the id; the query still resolves it.
    let detail = sel.detail_for(feed.records());
    assert_eq!(detail.len(), 1);
    assert_eq!(detail[0].uuid(), "abc-123");
}

#[test]
fn wire_page_feeds_straight_into_feed_state() {
    let json = r#"{
        "results": [
            {
                "name": { "title": "Mr", "first": "Liam", "last": "Hall" },
                "location": { "city": "Hobart", "state": "Tasmania", "country": "Australia" },
                "email": "liam.hall@example.com",
                "login": { "uuid": "0a1b2c3d" },
                "picture": {
                    "large": "https://randomuser.me/api/portraits/men/10.jpg",
                    "medium": "https://randomuser.me/api/portraits/med/men/10.jpg",
                    "thumbnail": "https://randomuser.me/api/portraits/thumb/men/10.jpg"
                }
            }
        ],
        "info": { "seed": "abc", "results": 10, "page": 1, "version": "1.4" }
    }"#;

    let page: UsersPage = serde_json::from_str(json).unwrap();

    let mut feed = FeedState::new();
    feed.begin_fetch();
    feed.apply_page(page.results);

    assert_eq!(feed.records().len(), 1);
    assert_eq!(feed.records()[0].full_name(), "Mr Liam Hall");
}
