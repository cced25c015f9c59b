//! Short link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL owned by a user.
///
/// The `code` is globally unique across all links; ownership is tracked by
/// the owner's email (the stable unique account key) with the username
/// denormalized alongside it for display.
#[derive(Debug, Clone)]
pub struct ShortLink {
    pub id: i64,
    pub code: String,
    pub long_url: String,
    pub owner_username: String,
    pub owner_email: String,
    pub created_at: DateTime<Utc>,
}

impl ShortLink {
    /// Returns true if the link belongs to the account with the given email.
    pub fn is_owned_by(&self, email: &str) -> bool {
        self.owner_email == email
    }
}

/// Input data for creating a new short link.
#[derive(Debug, Clone)]
pub struct NewShortLink {
    pub code: String,
    pub long_url: String,
    pub owner_username: String,
    pub owner_email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ownership_check() {
        let link = ShortLink {
            id: 1,
            code: "aZ3kD91".to_string(),
            long_url: "https://example.com/a/b".to_string(),
            owner_username: "alice".to_string(),
            owner_email: "alice@example.com".to_string(),
            created_at: Utc::now(),
        };

        assert!(link.is_owned_by("alice@example.com"));
        assert!(!link.is_owned_by("bob@example.com"));
    }

    #[test]
    fn test_new_short_link_creation() {
        let new_link = NewShortLink {
            code: "xyz7890".to_string(),
            long_url: "https://rust-lang.org".to_string(),
            owner_username: "bob".to_string(),
            owner_email: "bob@example.com".to_string(),
        };

        assert_eq!(new_link.code, "xyz7890");
        assert_eq!(new_link.long_url, "https://rust-lang.org");
    }
}
