//! The canonical advertisement collection.

use tokio::sync::RwLock;
use uuid::Uuid;

use bidboard_core::ad::{Ad, AdDraft};
use bidboard_core::types::Timestamp;

/// Owns the canonical list of advertisements.
///
/// All access goes through `&self` methods; the list itself never escapes.
/// Reads return snapshot clones, mutations are serialized by the lock.
#[derive(Debug, Default)]
pub struct AdStore {
    ads: RwLock<Vec<Ad>>,
}

impl AdStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with the seed advertisements.
    pub fn with_seed() -> Self {
        Self {
            ads: RwLock::new(crate::seed::seed_ads()),
        }
    }

    /// Snapshot of the current collection, in insertion order.
    ///
    /// Unranked: display order is a derived view, computed by
    /// [`bidboard_core::bid::rank`] on the snapshot.
    pub async fn list(&self) -> Vec<Ad> {
        self.ads.read().await.clone()
    }

    /// Find one ad by id.
    pub async fn find_by_id(&self, id: &str) -> Option<Ad> {
        self.ads.read().await.iter().find(|ad| ad.id == id).cloned()
    }

    /// Promote a draft to a new ad: fresh id, zero clicks, current
    /// timestamps.
    pub async fn create(&self, draft: AdDraft) -> Ad {
        let ad = promote(draft, chrono::Utc::now());
        self.ads.write().await.push(ad.clone());
        tracing::debug!(id = %ad.id, "Ad created");
        ad
    }

    /// Replace an ad's draft fields and refresh `updated_at`, keeping id,
    /// click count, and `created_at`.
    ///
    /// Returns `None` when the id is unknown.
    pub async fn update(&self, id: &str, draft: AdDraft) -> Option<Ad> {
        let mut ads = self.ads.write().await;
        let ad = ads.iter_mut().find(|ad| ad.id == id)?;

        ad.title = draft.title;
        ad.author = draft.author;
        ad.description = draft.description;
        ad.url = draft.url;
        ad.price = draft.price;
        ad.media_assets = draft.media_assets;
        ad.video_urls = draft.video_urls;
        ad.updated_at = chrono::Utc::now();

        tracing::debug!(id = %ad.id, "Ad updated");
        Some(ad.clone())
    }

    /// Remove an ad. Returns `true` if a record was deleted.
    pub async fn delete(&self, id: &str) -> bool {
        let mut ads = self.ads.write().await;
        let before = ads.len();
        ads.retain(|ad| ad.id != id);
        let deleted = ads.len() < before;
        if deleted {
            tracing::debug!(id, "Ad deleted");
        }
        deleted
    }

    /// Register one click: increments the counter and refreshes
    /// `updated_at`. Returns `None` when the id is unknown.
    pub async fn click(&self, id: &str) -> Option<Ad> {
        let mut ads = self.ads.write().await;
        let ad = ads.iter_mut().find(|ad| ad.id == id)?;

        ad.clicked += 1;
        ad.updated_at = chrono::Utc::now();

        tracing::debug!(id = %ad.id, clicked = ad.clicked, "Ad clicked");
        Some(ad.clone())
    }

    /// Copy an existing ad into a fresh record: new id, zero clicks, fresh
    /// timestamps. Returns `None` when the origin id is unknown.
    pub async fn duplicate(&self, id: &str) -> Option<Ad> {
        let origin = self.find_by_id(id).await?;
        Some(self.create(origin.to_draft()).await)
    }

    /// Restore the seed data, discarding all changes.
    pub async fn reset(&self) {
        *self.ads.write().await = crate::seed::seed_ads();
        tracing::debug!("Ad store reset to seed data");
    }
}

fn promote(draft: AdDraft, now: Timestamp) -> Ad {
    Ad {
        id: Uuid::new_v4().to_string(),
        title: draft.title,
        author: draft.author,
        description: draft.description,
        url: draft.url,
        price: draft.price,
        clicked: 0,
        created_at: now,
        updated_at: now,
        media_assets: draft.media_assets,
        video_urls: draft.video_urls,
    }
}
