//! Advertisement entity and DTOs.
//!
//! [`Ad`] is the canonical record owned by the store. [`AdDraft`] is the
//! mutable subset accepted as create/update input (no id, no click count,
//! no timestamps). [`BidScore`] is the derived ranking value, never
//! persisted. Wire form is camelCase.

use serde::{Deserialize, Serialize};

use crate::types::{AdId, Timestamp};

/// A single advertisement record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ad {
    pub id: AdId,
    pub title: String,
    pub author: String,
    pub description: String,
    /// Landing page URL.
    pub url: String,
    /// Bid price. Positivity is enforced at the validation boundary, not by
    /// the entity itself.
    pub price: f64,
    /// Click count. Starts at 0, never negative.
    pub clicked: u32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(default)]
    pub media_assets: Vec<String>,
    #[serde(default)]
    pub video_urls: Vec<String>,
}

impl Ad {
    /// The draft view of this ad, used when duplicating it into a fresh
    /// record.
    pub fn to_draft(&self) -> AdDraft {
        AdDraft {
            title: self.title.clone(),
            author: self.author.clone(),
            description: self.description.clone(),
            url: self.url.clone(),
            price: self.price,
            media_assets: self.media_assets.clone(),
            video_urls: self.video_urls.clone(),
        }
    }
}

/// The mutable subset of an [`Ad`] accepted as create/update input.
///
/// The list fields are always present: absent input deserializes to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdDraft {
    pub title: String,
    pub author: String,
    pub description: String,
    pub url: String,
    pub price: f64,
    pub media_assets: Vec<String>,
    pub video_urls: Vec<String>,
}

/// Derived ranking value for one ad.
#[derive(Debug, Clone, Serialize)]
pub struct BidScore {
    pub id: AdId,
    pub value: f64,
}
