//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `recovery`) so pages depend on small
//! focused models; the session lives in a context signal provided at the app
//! root instead of ad hoc storage reads scattered across components.

pub mod recovery;
pub mod session;
