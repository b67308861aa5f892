//! Request handlers.
//!
//! Each submodule provides async handler functions for one route group.
//! Handlers delegate to the ad store and the core engines, and map errors
//! via [`AppError`](crate::error::AppError).

pub mod ads;
pub mod form_schema;
pub mod media;
