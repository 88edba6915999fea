//! Typed async client for the givehub platform REST API.
//!
//! [`ApiClient`] covers every endpoint the web views call: campaigns,
//! applications, conversation messages, notifications, user management,
//! auth, dashboard stats, and the public contact form. Construction takes
//! a [`ClientConfig`] (base URL and timeouts); authenticated calls need a
//! [`Session`] obtained from [`ApiClient::login`] and attached with
//! [`ApiClient::with_session`].
//!
//! All failures surface as [`ApiError`]: transport problems, non-2xx
//! responses carrying the server's own message when it sends one, bodies
//! that fail typed decoding, and local validation that stops a request
//! before it is issued. Nothing is retried automatically.

pub mod applications;
pub mod auth;
pub mod campaigns;
pub mod config;
pub mod contact;
pub mod dashboard;
pub mod error;
pub mod http;
pub mod messages;
pub mod notifications;
pub mod session;
pub mod users;

pub use config::ClientConfig;
pub use error::ApiError;
pub use http::ApiClient;
pub use session::Session;
