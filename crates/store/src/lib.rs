//! In-memory advertisement store.
//!
//! The canonical advertisement collection behind an explicit repository
//! type. Callers receive snapshot clones and derived records; ranking and
//! validation stay in `bidboard-core`. Not durable: the board resets on
//! restart, which is the intended behavior for this system.

pub mod seed;
pub mod store;

pub use store::AdStore;
