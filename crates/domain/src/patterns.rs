//! URL pattern families used to classify links.
//!
//! All patterns are case-insensitive and match anywhere in the raw URL
//! string, so inputs that are not valid absolute URLs still classify.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

use crate::model::{MonetizationKind, SocialPlatform};

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("Valid regex")
}

static MEDIA_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)youtube\.com/watch",
        r"(?i)youtu\.be/",
        r"(?i)spotify\.com/(track|playlist|album)",
        r"(?i)tiktok\.com/@[0-9A-Za-z_]+/video",
        r"(?i)soundcloud\.com/",
    ]
    .into_iter()
    .map(compile)
    .collect()
});

static PAYMENT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)paypal\.com/(donate|paypalme)",
        r"(?i)ko-fi\.com/",
        r"(?i)patreon\.com/",
        r"(?i)buymeacoffee\.com/",
        r"(?i)stripe\.com/(buy|checkout)",
        r"(?i)gumroad\.com/",
        r"(?i)etsy\.com/shop",
    ]
    .into_iter()
    .map(compile)
    .collect()
});

/// Social patterns in evaluation order; first match wins
static SOCIAL_PATTERNS: LazyLock<Vec<(Regex, SocialPlatform)>> = LazyLock::new(|| {
    vec![
        (compile(r"(?i)instagram\.com/"), SocialPlatform::Instagram),
        (compile(r"(?i)twitter\.com/|x\.com/"), SocialPlatform::Twitter),
        (
            compile(r"(?i)youtube\.com/@|youtube\.com/channel|youtube\.com/c/"),
            SocialPlatform::Youtube,
        ),
        (
            compile(r"(?i)tiktok\.com/@[0-9A-Za-z_]+$"),
            SocialPlatform::Tiktok,
        ),
    ]
});

/// Monetization kind rules in evaluation order; unmatched URLs default to donation
static KIND_PATTERNS: LazyLock<Vec<(Regex, MonetizationKind)>> = LazyLock::new(|| {
    vec![
        (
            compile(r"(?i)paypal\.com/donate|ko-fi\.com|buymeacoffee\.com"),
            MonetizationKind::Donation,
        ),
        (
            compile(r"(?i)etsy\.com|gumroad\.com"),
            MonetizationKind::Product,
        ),
        (compile(r"(?i)patreon\.com"), MonetizationKind::Subscription),
    ]
});

static FIRST_SEGMENT: LazyLock<Regex> = LazyLock::new(|| compile(r"^/(@)?([^/]+)"));

static YOUTUBE_HANDLE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^/@([^/]+)|/c/([^/]+)|/channel/([^/]+)"));

/// True when the URL points at embeddable media
pub fn is_media(url: &str) -> bool {
    MEDIA_PATTERNS.iter().any(|p| p.is_match(url))
}

/// True when the URL points at a payment or creator-support host
pub fn is_monetization(url: &str) -> bool {
    PAYMENT_PATTERNS.iter().any(|p| p.is_match(url))
}

/// Social platform the URL is a profile on, if any
pub fn social_platform(url: &str) -> Option<SocialPlatform> {
    SOCIAL_PATTERNS
        .iter()
        .find(|(pattern, _)| pattern.is_match(url))
        .map(|(_, platform)| *platform)
}

/// Monetization kind for a URL already known to be a payment link
pub fn monetization_kind(url: &str) -> MonetizationKind {
    KIND_PATTERNS
        .iter()
        .find(|(pattern, _)| pattern.is_match(url))
        .map(|(_, kind)| *kind)
        .unwrap_or(MonetizationKind::Donation)
}

/// Extract the account handle from a social profile URL.
///
/// Returns an empty string when the URL cannot be parsed or has no handle.
pub fn social_username(url: &str, platform: SocialPlatform) -> String {
    let Ok(parsed) = Url::parse(url) else {
        return String::new();
    };
    let path = parsed.path();

    match platform {
        SocialPlatform::Instagram | SocialPlatform::Twitter | SocialPlatform::Tiktok => {
            FIRST_SEGMENT
                .captures(path)
                .and_then(|c| c.get(2))
                .map(|m| m.as_str().to_string())
                .unwrap_or_default()
        }
        SocialPlatform::Youtube => YOUTUBE_HANDLE
            .captures(path)
            .and_then(|c| c.get(1).or_else(|| c.get(2)).or_else(|| c.get(3)))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default(),
    }
}
