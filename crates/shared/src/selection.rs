//! Detail-modal selection state.

use crate::models::UserRecord;

/// Which record the detail overlay shows, and whether it is open.
///
/// `selected_id` survives `dismiss`: it is only ever overwritten by
/// the next tap, so a stale value persists while the modal is closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    selected_id: String,
    visible: bool,
}

impl SelectionState {
    pub fn new() -> Self {
        Self {
            selected_id: String::new(),
            visible: false,
        }
    }

    pub fn selected_id(&self) -> &str {
        &self.selected_id
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Record a tap: remember the id and open the overlay. The id is
    /// not checked against the record list; an unknown id simply
    /// renders an empty detail view.
    pub fn select(&mut self, id: impl Into<String>) {
        self.selected_id = id.into();
        self.visible = true;
    }

    /// Close the overlay. Leaves `selected_id` in place.
    pub fn dismiss(&mut self) {
        self.visible = false;
    }

    /// Records whose uuid contains the selected id as a substring.
    ///
    /// Containment, not equality: an id that is a prefix of another
    /// uuid will over-match, and the overlay renders every match.
    pub fn detail_for<'a>(&self, records: &'a [UserRecord]) -> Vec<&'a UserRecord> {
        records
            .iter()
            .filter(|r| r.login.uuid.contains(&self.selected_id))
            .collect()
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{UserLocation, UserLogin, UserName, UserPicture};

    fn record(uuid: &str) -> UserRecord {
        UserRecord {
            name: UserName {
                title: "Ms".into(),
                first: "Test".into(),
                last: "User".into(),
            },
            email: format!("{uuid}@example.com"),
            location: UserLocation {
                city: "Turku".into(),
                state: "Varsinais-Suomi".into(),
                country: "Finland".into(),
            },
            picture: UserPicture {
                large: "https://example.com/l.jpg".into(),
                medium: "https://example.com/m.jpg".into(),
                thumbnail: "https://example.com/t.jpg".into(),
            },
            login: UserLogin { uuid: uuid.into() },
        }
    }

    #[test]
    fn select_opens_and_dismiss_closes() {
        let mut sel = SelectionState::new();
        assert!(!sel.is_visible());

        sel.select("abc-123");
        assert!(sel.is_visible());
        assert_eq!(sel.selected_id(), "abc-123");

        sel.dismiss();
        assert!(!sel.is_visible());

        // Re-select with the modal already closed still opens it.
        sel.select("def-456");
        assert!(sel.is_visible());
    }

    #[test]
    fn dismiss_keeps_stale_selection() {
        let mut sel = SelectionState::new();
        sel.select("abc-123");
        sel.dismiss();
        assert_eq!(sel.selected_id(), "abc-123");

        let records = vec![record("abc-123"), record("zzz-999")];
        let detail = sel.detail_for(&records);
        assert_eq!(detail.len(), 1);
        assert_eq!(detail[0].uuid(), "abc-123");
    }

    #[test]
    fn detail_over_empty_list_is_empty() {
        let mut sel = SelectionState::new();
        sel.select("anything");
        assert!(sel.detail_for(&[]).is_empty());
    }

    #[test]
    fn detail_matches_by_substring_containment() {
        let records = vec![record("abc-123"), record("abc-1234"), record("xyz")];
        let mut sel = SelectionState::new();

        sel.select("abc-123");
        // "abc-123" is a substring of "abc-1234" as well: both match.
        assert_eq!(sel.detail_for(&records).len(), 2);

        sel.select("abc-1234");
        assert_eq!(sel.detail_for(&records).len(), 1);
    }

    #[test]
    fn unknown_id_matches_nothing() {
        let records = vec![record("abc-123")];
        let mut sel = SelectionState::new();
        sel.select("not-there");
        assert!(sel.detail_for(&records).is_empty());
    }
}
