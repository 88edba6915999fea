//! Entity models and request payloads as they travel over the platform
//! API.
//!
//! Wire conventions: fields are camelCase, ids may arrive as `id` or
//! `_id`, timestamps are RFC 3339, and references to users are sometimes
//! populated objects and sometimes bare id strings ([`UserRef`] absorbs
//! both). Request payloads carry their field rules as `validator`
//! derives; `crate::validation` runs them before a request goes out.

pub mod application;
pub mod auth;
pub mod campaign;
pub mod contact;
pub mod dashboard;
pub mod message;
pub mod notification;
pub mod user;

pub use application::{Application, SubmitApplication, UpdateApplicationStatus};
pub use auth::{ChangePassword, Credentials, RegisterUser, SessionPayload, UpdateProfile};
pub use campaign::{BankDetails, Campaign, CreateCampaign, UpdateCampaign, UpdateCampaignStatus};
pub use contact::ContactRequest;
pub use dashboard::DashboardStats;
pub use message::{Message, SendMessage};
pub use notification::{Notification, NotificationKind, RelatedTo};
pub use user::{CreateAdmin, Role, UpdateRole, User, UserRef, UserSummary};
