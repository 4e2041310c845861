//! Input validation performed before any store call.
//!
//! Registration emails must pass a general shape check and belong to an
//! allow-listed `.com` domain. The allow-list is configuration, not a
//! hard-coded pattern (`TAREFA_EMAIL_DOMAINS`).

use validator::ValidateEmail;

/// Which registration emails are acceptable.
///
/// An address passes when:
/// - it is a well-formed email,
/// - the local part uses only word characters, dots, and hyphens,
/// - the domain is `<allowed>.com` for one of the configured domains.
#[derive(Debug, Clone)]
pub struct EmailPolicy {
    domains: Vec<String>,
}

impl EmailPolicy {
    /// Domains accepted when nothing is configured.
    pub const DEFAULT_DOMAINS: [&'static str; 4] = ["gmail", "hotmail", "outlook", "yahoo"];

    pub fn new(domains: Vec<String>) -> Self {
        Self { domains }
    }

    /// Checks an address against the policy.
    pub fn is_allowed(&self, email: &str) -> bool {
        if !email.validate_email() {
            return false;
        }

        let Some((local, domain)) = email.rsplit_once('@') else {
            return false;
        };

        if local.is_empty()
            || !local
                .chars()
                .all(|c| c.is_alphanumeric() || c == '_' || c == '.' || c == '-')
        {
            return false;
        }

        match domain.strip_suffix(".com") {
            Some(name) => self.domains.iter().any(|d| d == name),
            None => false,
        }
    }
}

impl Default for EmailPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DOMAINS.iter().map(|d| d.to_string()).collect())
    }
}

/// Task titles must carry at least one non-whitespace character.
pub fn title_is_valid(title: &str) -> bool {
    !title.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_the_default_domains() {
        let policy = EmailPolicy::default();
        for email in [
            "user@gmail.com",
            "first.last@hotmail.com",
            "a-b_c@outlook.com",
            "someone@yahoo.com",
        ] {
            assert!(policy.is_allowed(email), "rejected {email}");
        }
    }

    #[test]
    fn rejects_unlisted_domains_and_tlds() {
        let policy = EmailPolicy::default();
        for email in [
            "user@example.com",
            "user@gmail.org",
            "user@gmail.com.br",
            "user@sub.gmail.com",
        ] {
            assert!(!policy.is_allowed(email), "accepted {email}");
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        let policy = EmailPolicy::default();
        for email in ["", "user", "@gmail.com", "user@", "us er@gmail.com"] {
            assert!(!policy.is_allowed(email), "accepted {email:?}");
        }
    }

    #[test]
    fn custom_allow_list_replaces_the_default() {
        let policy = EmailPolicy::new(vec!["example".to_string()]);
        assert!(policy.is_allowed("user@example.com"));
        assert!(!policy.is_allowed("user@gmail.com"));
    }

    #[test]
    fn titles_need_visible_characters() {
        assert!(title_is_valid("Buy milk"));
        assert!(!title_is_valid(""));
        assert!(!title_is_valid("   "));
        assert!(!title_is_valid("\t\n"));
    }
}
