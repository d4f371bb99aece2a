//! Cross-cutting request middleware.

pub mod trace;
