//! Client-side persistence.

pub mod session_store;
