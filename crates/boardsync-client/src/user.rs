use serde::{Deserialize, Serialize};

/// Wire shape of a user record in account queries.
#[derive(Debug, Clone, Deserialize)]
pub struct UserInfo {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// A member of the account.
///
/// Users are merged in place on every account pull, so a reference held by a
/// caller stays valid (and up to date) across refreshes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    /// Unmanaged slot for callers that need to link this user to a record in
    /// another system. Never touched by pulls.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_account: Option<serde_json::Value>,
}

impl User {
    pub fn new(id: u64, name: String, email: String) -> Self {
        Self {
            id,
            name,
            email,
            linked_account: None,
        }
    }

    pub(crate) fn from_info(info: &UserInfo) -> Self {
        Self::new(info.id, info.name.clone(), info.email.clone())
    }

    /// Merge a refreshed remote record into this user. A field is only
    /// overwritten when the remote value is non-empty.
    pub(crate) fn update_with_remote_data(&mut self, info: &UserInfo) {
        if !info.name.is_empty() {
            self.name = info.name.clone();
        }
        if !info.email.is_empty() {
            self.email = info.email.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_skips_empty_fields() {
        let mut user = User::new(7, "Ada".into(), "ada@example.com".into());
        user.linked_account = Some(serde_json::json!({"crm_id": 42}));

        user.update_with_remote_data(&UserInfo {
            id: 7,
            name: "Ada Lovelace".into(),
            email: String::new(),
        });

        assert_eq!(user.name, "Ada Lovelace");
        assert_eq!(user.email, "ada@example.com");
        assert!(user.linked_account.is_some());
    }
}
