/// Server-assigned entity identifier.
///
/// The platform's backing store is document-oriented; ids arrive as
/// opaque strings under `id` or `_id` depending on the endpoint.
pub type EntityId = String;

/// All timestamps are UTC, RFC 3339 on the wire.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
