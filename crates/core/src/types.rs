//! Shared scalar type aliases.
//!
//! `AdId` is an opaque string identifier (UUIDs / `seed-*`), not a numeric
//! key. `Timestamp` is a UTC instant.

use chrono::{DateTime, Utc};

/// Opaque advertisement identifier.
pub type AdId = String;

/// UTC timestamp.
pub type Timestamp = DateTime<Utc>;
