//! Bid ranking.
//!
//! The single authoritative definition of the bid score. The board's
//! display order is a pure function of price and click count; every
//! consumer (API handlers, tests, future clients) must go through this
//! module so two environments can never disagree on order.

use crate::ad::{Ad, BidScore};

/// Weight applied to each click when scoring an ad.
///
/// Part of the ranking contract: changing it reorders every board, so it
/// must only change behind an explicit versioned contract.
pub const BID_COEFFICIENT: f64 = 0.42;

/// Bid score for a price / click-count pair.
///
/// `price + price * clicked * BID_COEFFICIENT`. Finite inputs always
/// produce a finite score; negative inputs are the validation boundary's
/// problem, not this function's.
pub fn score(price: f64, clicked: u32) -> f64 {
    price + price * f64::from(clicked) * BID_COEFFICIENT
}

/// The derived [`BidScore`] for one ad.
pub fn bid_score(ad: &Ad) -> BidScore {
    BidScore {
        id: ad.id.clone(),
        value: score(ad.price, ad.clicked),
    }
}

/// Rank ads by bid score, highest first.
///
/// Returns a fresh vector; the input is never mutated. The sort is stable,
/// so ads with equal scores keep their relative input order.
pub fn rank(ads: &[Ad]) -> Vec<Ad> {
    let mut ranked = ads.to_vec();
    ranked.sort_by(|a, b| score(b.price, b.clicked).total_cmp(&score(a.price, a.clicked)));
    ranked
}
