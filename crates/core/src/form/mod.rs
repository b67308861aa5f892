//! Schema-driven form validation engine.
//!
//! A declarative field configuration (the "schema") drives three things:
//! rule compilation and evaluation ([`evaluator`]), initial value
//! construction, and normalization of raw input into an
//! [`AdDraft`](crate::ad::AdDraft) ([`draft`]). The schema describes
//! validation; nothing here reflects over types at runtime.

pub mod config;
pub mod draft;
pub mod evaluator;
pub mod rules;
