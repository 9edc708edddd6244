//! Link classification use case
//!
//! Classification is an ordered rule table: each rule pairs a predicate over
//! the (url, label) pair with the result it produces. Rules are evaluated in
//! order and the first rule that yields a result wins.

use crate::model::LinkClassification;
use crate::patterns;

/// Input to a classification rule
#[derive(Debug, Clone, Copy)]
pub struct LinkInput<'a> {
    pub url: &'a str,
    pub label: &'a str,
    label_lower: &'a str,
}

impl LinkInput<'_> {
    /// True when the label contains any keyword (case-insensitive) or marker (exact)
    fn label_hints(&self, keywords: &[&str], markers: &[&str]) -> bool {
        keywords.iter().any(|k| self.label_lower.contains(k))
            || markers.iter().any(|m| self.label.contains(m))
    }
}

/// A single prioritized classification rule
pub struct ClassifyRule {
    /// Rule name, used in logs and tests
    pub name: &'static str,
    pub apply: fn(&LinkInput<'_>) -> Option<LinkClassification>,
}

const MEDIA_KEYWORDS: &[&str] = &["video", "music", "song"];
const MEDIA_MARKERS: &[&str] = &["🎥", "🎵"];

const MONETIZATION_KEYWORDS: &[&str] = &["support", "donate", "buy", "shop"];
const MONETIZATION_MARKERS: &[&str] = &["💰", "💳"];

const SOCIAL_KEYWORDS: &[&str] = &["follow", "profile"];
const SOCIAL_MARKERS: &[&str] = &["📱", "👤"];

fn media(input: &LinkInput<'_>) -> Option<LinkClassification> {
    patterns::is_media(input.url).then(LinkClassification::media)
}

fn monetization(input: &LinkInput<'_>) -> Option<LinkClassification> {
    patterns::is_monetization(input.url)
        .then(|| LinkClassification::monetization(patterns::monetization_kind(input.url)))
}

fn social(input: &LinkInput<'_>) -> Option<LinkClassification> {
    patterns::social_platform(input.url).map(|platform| {
        LinkClassification::social(platform, patterns::social_username(input.url, platform))
    })
}

fn label_media(input: &LinkInput<'_>) -> Option<LinkClassification> {
    if input.label_hints(MEDIA_KEYWORDS, MEDIA_MARKERS) {
        media(input)
    } else {
        None
    }
}

fn label_monetization(input: &LinkInput<'_>) -> Option<LinkClassification> {
    if input.label_hints(MONETIZATION_KEYWORDS, MONETIZATION_MARKERS) {
        monetization(input)
    } else {
        None
    }
}

fn label_social(input: &LinkInput<'_>) -> Option<LinkClassification> {
    if input.label_hints(SOCIAL_KEYWORDS, SOCIAL_MARKERS) {
        social(input)
    } else {
        None
    }
}

/// Classification rules in priority order
pub const RULES: &[ClassifyRule] = &[
    ClassifyRule {
        name: "label_media",
        apply: label_media,
    },
    ClassifyRule {
        name: "label_monetization",
        apply: label_monetization,
    },
    ClassifyRule {
        name: "label_social",
        apply: label_social,
    },
    ClassifyRule {
        name: "url_media",
        apply: media,
    },
    ClassifyRule {
        name: "url_social",
        apply: social,
    },
    ClassifyRule {
        name: "url_monetization",
        apply: monetization,
    },
];

/// Classify a link for presentation.
///
/// Total and deterministic: the same (url, label) always yields the same
/// result, and anything unrecognised is `normal`.
pub fn classify_link(url: &str, label: &str) -> LinkClassification {
    classify_with_rule(url, label)
        .map(|(_, result)| result)
        .unwrap_or_default()
}

/// Classify a link and report which rule matched, if any
pub fn classify_with_rule(url: &str, label: &str) -> Option<(&'static str, LinkClassification)> {
    let label_lower = label.to_lowercase();
    let input = LinkInput {
        url,
        label,
        label_lower: &label_lower,
    };

    let matched = RULES
        .iter()
        .find_map(|rule| (rule.apply)(&input).map(|result| (rule.name, result)));

    if let Some((rule, result)) = &matched {
        tracing::trace!(url = %url, rule = *rule, category = %result.category, "Classified link");
    }

    matched
}
