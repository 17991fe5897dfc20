//! Server-side dispatch
//!
//! The listener accepts connections one at a time; the router turns
//! each request into a response using the route-alias table, the
//! private-prefix list, registered handlers and the file store.

pub mod listener;
pub mod router;
pub mod store;

pub use router::{Handler, Router};
pub use store::FileStore;
