//! Seed advertisements for development and tests.

use chrono::Utc;

use bidboard_core::ad::Ad;

/// Three seed records. The price / click pairs keep the documented ranking
/// example intact, so a freshly seeded board lists seed-2, seed-1, seed-3.
pub fn seed_ads() -> Vec<Ad> {
    let now = Utc::now();
    vec![
        Ad {
            id: "seed-1".to_string(),
            title: "Full-funnel growth season".to_string(),
            author: "Acme Ads".to_string(),
            description: "One platform for planning, buying, and measuring campaigns \
                          across every channel."
                .to_string(),
            url: "https://ads.example.com/".to_string(),
            price: 6.8,
            clicked: 3,
            created_at: now,
            updated_at: now,
            media_assets: Vec::new(),
            video_urls: Vec::new(),
        },
        Ad {
            id: "seed-2".to_string(),
            title: "City partner program".to_string(),
            author: "Local Deals".to_string(),
            description: "Integrated marketing for food, travel, and entertainment, \
                          now recruiting city partners."
                .to_string(),
            url: "https://deals.example.com/".to_string(),
            price: 5.2,
            clicked: 5,
            created_at: now,
            updated_at: now,
            media_assets: Vec::new(),
            video_urls: Vec::new(),
        },
        Ad {
            id: "seed-3".to_string(),
            title: "Indie developer ad network".to_string(),
            author: "Pangolin Network".to_string(),
            description: "Native placements and a simple API for developers entering \
                          new markets."
                .to_string(),
            url: "https://network.example.com/".to_string(),
            price: 4.5,
            clicked: 2,
            created_at: now,
            updated_at: now,
            media_assets: Vec::new(),
            video_urls: Vec::new(),
        },
    ]
}
