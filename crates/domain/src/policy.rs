//! Input constraints for profiles and links

use url::Url;

/// Policy configuration
#[derive(Debug, Clone)]
pub struct PolicyConfig {
    /// Maximum profile name length in characters
    pub max_name_length: Option<usize>,
    /// Maximum bio length in characters
    pub max_bio_length: Option<usize>,
    /// Maximum link label length in characters
    pub max_label_length: Option<usize>,
    /// Maximum number of links per profile
    pub max_links: Option<usize>,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            max_name_length: Some(64),
            max_bio_length: Some(280),
            max_label_length: Some(100),
            max_links: None,
        }
    }
}

/// Validator applied before submitting profile mutations
pub struct ProfilePolicy {
    config: PolicyConfig,
}

impl ProfilePolicy {
    pub fn new(config: PolicyConfig) -> Self {
        Self { config }
    }

    /// Validate a profile name
    pub fn check_name(&self, name: &str) -> Result<(), PolicyViolation> {
        if name.trim().is_empty() {
            return Err(PolicyViolation::Blank { field: "name" });
        }
        check_length("name", name, self.config.max_name_length)
    }

    /// Validate a bio (may be empty)
    pub fn check_bio(&self, bio: &str) -> Result<(), PolicyViolation> {
        check_length("bio", bio, self.config.max_bio_length)
    }

    /// Validate a link about to be added or updated
    pub fn check_link(&self, label: &str, url: &str) -> Result<(), PolicyViolation> {
        if label.trim().is_empty() {
            return Err(PolicyViolation::Blank { field: "label" });
        }
        if url.trim().is_empty() {
            return Err(PolicyViolation::Blank { field: "url" });
        }
        check_length("label", label, self.config.max_label_length)?;

        match Url::parse(url.trim()) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Ok(()),
            _ => Err(PolicyViolation::InvalidUrl(url.to_string())),
        }
    }

    /// Validate that one more link fits in a profile holding `current` links
    pub fn check_link_count(&self, current: usize) -> Result<(), PolicyViolation> {
        match self.config.max_links {
            Some(max) if current >= max => Err(PolicyViolation::TooManyLinks { max }),
            _ => Ok(()),
        }
    }
}

impl Default for ProfilePolicy {
    fn default() -> Self {
        Self::new(PolicyConfig::default())
    }
}

fn check_length(field: &'static str, value: &str, max: Option<usize>) -> Result<(), PolicyViolation> {
    let len = value.chars().count();
    match max {
        Some(max) if len > max => Err(PolicyViolation::TooLong { field, len, max }),
        _ => Ok(()),
    }
}

/// Policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PolicyViolation {
    #[error("{field} must not be empty")]
    Blank { field: &'static str },
    #[error("{field} is too long: {len} > {max}")]
    TooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },
    #[error("Invalid link URL '{0}': must be an http(s) URL")]
    InvalidUrl(String),
    #[error("Profile already has the maximum of {max} links")]
    TooManyLinks { max: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_rejects_blank_name() {
        let policy = ProfilePolicy::default();
        assert_eq!(
            policy.check_name("   "),
            Err(PolicyViolation::Blank { field: "name" })
        );
        assert!(policy.check_name("Alice").is_ok());
    }

    #[test]
    fn test_policy_limits_bio_length() {
        let policy = ProfilePolicy::new(PolicyConfig {
            max_bio_length: Some(10),
            ..Default::default()
        });

        assert!(policy.check_bio("").is_ok());
        assert!(matches!(
            policy.check_bio(&"é".repeat(11)),
            Err(PolicyViolation::TooLong { len: 11, .. })
        ));
    }

    #[test]
    fn test_policy_validates_links() {
        let policy = ProfilePolicy::default();

        assert!(policy.check_link("Blog", "https://example.com").is_ok());
        assert_eq!(
            policy.check_link("", "https://example.com"),
            Err(PolicyViolation::Blank { field: "label" })
        );
        assert!(matches!(
            policy.check_link("Blog", "ftp://example.com"),
            Err(PolicyViolation::InvalidUrl(_))
        ));
        assert!(matches!(
            policy.check_link("Blog", "example.com"),
            Err(PolicyViolation::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_policy_limits_link_count() {
        let policy = ProfilePolicy::new(PolicyConfig {
            max_links: Some(2),
            ..Default::default()
        });

        assert!(policy.check_link_count(1).is_ok());
        assert_eq!(
            policy.check_link_count(2),
            Err(PolicyViolation::TooManyLinks { max: 2 })
        );
    }
}
