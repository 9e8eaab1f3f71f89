use serde::{Deserialize, Serialize};

use crate::resource::Resource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Create payload for a user. No identity; the store assigns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
}

impl Resource for User {
    const NAME: &'static str = "users";
    const TITLE: &'static str = "User";

    type Draft = UserDraft;

    fn from_draft(id: String, draft: UserDraft) -> Self {
        Self { id, name: draft.name, email: draft.email }
    }

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_wire_shape_uses_underscore_id() {
        let user = User { id: "u-1".into(), name: "Ada".into(), email: "a@x.com".into() };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["_id"], "u-1");
        assert_eq!(json["name"], "Ada");
        assert_eq!(json["email"], "a@x.com");
    }

    #[test]
    fn draft_builds_record_with_assigned_identity() {
        let draft: UserDraft = serde_json::from_str(r#"{"name":"Ada","email":"a@x.com"}"#).unwrap();
        let user = User::from_draft("u-2".into(), draft);
        assert_eq!(user.id(), "u-2");
        assert_eq!(user.name, "Ada");
    }
}
