//! Domain types and pure workflow rules for the givehub platform client.
//!
//! Everything in this crate is I/O-free: the entity models as they travel
//! over the platform's JSON API, the status vocabularies with their
//! transition rules, campaign application eligibility, conversation
//! derivation over message threads, and the client-side validation that
//! runs before any request is issued. The HTTP surface lives in
//! `givehub-client`; stateful view controllers live in `givehub-workflow`.

pub mod conversation;
pub mod eligibility;
pub mod error;
pub mod model;
pub mod status;
pub mod types;
pub mod validation;

pub use error::CoreError;
pub use types::{EntityId, Timestamp};
