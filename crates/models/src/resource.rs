use serde::{de::DeserializeOwned, Serialize};

/// One stored resource type, as the generic service template sees it.
///
/// Implementations provide the path segment the service mounts under, the
/// display name used in wire confirmations, and the conversion from a draft
/// plus a store-assigned identity to a full record.
pub trait Resource: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// Plural path segment, e.g. `users`.
    const NAME: &'static str;
    /// Singular display name, e.g. `User`.
    const TITLE: &'static str;

    /// Create payload: the record's fields without identity.
    type Draft: Clone + Send + Sync + Serialize + DeserializeOwned + 'static;

    /// Build a record from a store-assigned identity and a draft.
    fn from_draft(id: String, draft: Self::Draft) -> Self;

    /// Server-assigned identity. Never empty for a stored record.
    fn id(&self) -> &str;
}
