//! Data model for the randomuser.me user API.
//!
//! Records are deserialized verbatim from the API and never mutated;
//! the feed only appends whole records. The API returns far more
//! fields than we consume; serde ignores the rest.

use serde::{Deserialize, Serialize};

/// Name triple as the API delivers it ("Mr" / "Jane" / "Doe").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserName {
    pub title: String,
    pub first: String,
    pub last: String,
}

/// Subset of the API's location object that the UI renders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserLocation {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub country: String,
}

/// Profile image URIs at the three sizes the API serves.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserPicture {
    pub large: String,
    pub medium: String,
    pub thumbnail: String,
}

/// Login block; only the stable uuid is consumed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserLogin {
    pub uuid: String,
}

/// One user profile as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRecord {
    pub name: UserName,
    /// Used as the list render key. Not used for deduplication: if the
    /// upstream source repeats a record across pages, the key collides.
    pub email: String,
    pub location: UserLocation,
    pub picture: UserPicture,
    pub login: UserLogin,
}

impl UserRecord {
    /// "Mr Jane Doe", the card headline.
    pub fn full_name(&self) -> String {
        format!("{} {} {}", self.name.title, self.name.first, self.name.last)
    }

    /// "California United States", the card region line.
    pub fn region(&self) -> String {
        format!("{} {}", self.location.state, self.location.country)
    }

    /// "Location: San Jose,California United States", the modal line.
    pub fn location_line(&self) -> String {
        format!(
            "Location: {},{} {}",
            self.location.city, self.location.state, self.location.country
        )
    }

    pub fn uuid(&self) -> &str {
        &self.login.uuid
    }
}

/// Pagination metadata the API attaches to every page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageInfo {
    #[serde(default)]
    pub seed: String,
    #[serde(default)]
    pub results: u32,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub version: String,
}

/// Wire envelope for one page of users: `{ "results": [...], "info": {...} }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UsersPage {
    pub results: Vec<UserRecord>,
    #[serde(default)]
    pub info: Option<PageInfo>,
}
