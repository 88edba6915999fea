//! Stateful view controllers for the givehub platform client.
//!
//! Each controller owns its in-memory copy of fetched entities, an
//! [`ApiClient`](givehub_client::ApiClient), and a cancellation token so
//! a torn-down view can abort whatever is still in flight:
//!
//! - [`ReviewController`] — admin approval and rejection of
//!   applications, including concurrent bulk decisions with per-item
//!   outcomes.
//! - [`Inbox`] — the messages page: conversations derived from
//!   application threads, message sending, read cursors.
//! - [`NotificationFeed`] — the notification list, with read-state that
//!   changes only after the server acknowledges.
//! - [`CampaignDesk`] — campaign status management and the application
//!   eligibility gate.
//!
//! Local copies never change ahead of the server: every mutation calls
//! the API first and applies the confirmed result.

pub mod campaigns;
pub mod error;
pub mod feed;
pub mod inbox;
pub mod review;

mod guard;

pub use campaigns::CampaignDesk;
pub use error::WorkflowError;
pub use feed::{NotificationFeed, NotificationTab};
pub use inbox::{Inbox, InboxScope};
pub use review::{BulkItem, BulkOutcome, Confirm, ReviewController};
