//! Demo login/registration backed by a local JSON store.
//!
//! **Non-production by design**: passwords are stored and compared in
//! plaintext, faithfully to the demo site this imitates. Nothing here is
//! real authentication; treat the store as a themed prop.

mod store;

pub use store::{default_store_path, AuthError, AuthStore, SessionRecord, UserRecord};
