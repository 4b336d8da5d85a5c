//! In-memory resource store.
//!
//! Collections are created on first use and hold insertion-ordered items,
//! each carrying a generated `_id`. The whole store sits behind one
//! read-write lock; see [`ResourceStore`].

pub mod error;
pub mod id;
mod store;

pub use error::{StoreError, StoreResult};
pub use store::{Collections, Item, ResourceStore, ID_FIELD};
