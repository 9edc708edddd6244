//! Domain models and value objects

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One entry in a profile's ordered link list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    /// Display text, free-form
    pub label: String,
    /// Target URL
    pub url: String,
    /// Index in the profile's link list (contiguous from 0)
    pub position: usize,
}

impl LinkRecord {
    pub fn new(label: impl Into<String>, url: impl Into<String>, position: usize) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
            position,
        }
    }

    /// Stable identifier used by the reorder workflow
    pub fn display_id(&self) -> String {
        format!("link-{}", self.position)
    }
}

/// A link-in-bio profile as read from the remote store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// On-chain object ID
    pub object_id: String,
    /// Owner address, if known
    pub owner: Option<String>,
    pub name: String,
    pub bio: String,
    /// Avatar reference: icon id, http(s) URL, or empty
    pub avatar_cid: String,
    /// Theme id (see [`Theme::by_id`])
    pub theme: u64,
    /// Links ordered by position
    pub links: Vec<LinkRecord>,
}

impl Profile {
    /// Current link order as display ids
    pub fn link_ids(&self) -> Vec<String> {
        self.links.iter().map(LinkRecord::display_id).collect()
    }
}

/// Fields for a profile that does not exist yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProfile {
    pub name: String,
    pub bio: String,
    pub avatar_cid: String,
    pub theme: u64,
}

/// Presentation category of a link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LinkCategory {
    #[default]
    Normal,
    Media,
    Social,
    Monetization,
}

impl LinkCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Media => "media",
            Self::Social => "social",
            Self::Monetization => "monetization",
        }
    }
}

impl fmt::Display for LinkCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Social platform recognised from a profile URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SocialPlatform {
    Instagram,
    Twitter,
    Youtube,
    Tiktok,
}

impl SocialPlatform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Instagram => "instagram",
            Self::Twitter => "twitter",
            Self::Youtube => "youtube",
            Self::Tiktok => "tiktok",
        }
    }
}

impl fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of monetization link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MonetizationKind {
    #[default]
    Donation,
    Product,
    Service,
    Subscription,
}

impl MonetizationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Donation => "donation",
            Self::Product => "product",
            Self::Service => "service",
            Self::Subscription => "subscription",
        }
    }
}

impl fmt::Display for MonetizationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying a (url, label) pair. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LinkClassification {
    pub category: LinkCategory,
    /// Set only for social links
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<SocialPlatform>,
    /// Set only for social links; empty when the URL could not be parsed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Set only for monetization links
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monetization_kind: Option<MonetizationKind>,
}

impl LinkClassification {
    pub fn normal() -> Self {
        Self::default()
    }

    pub fn media() -> Self {
        Self {
            category: LinkCategory::Media,
            ..Default::default()
        }
    }

    pub fn social(platform: SocialPlatform, username: String) -> Self {
        Self {
            category: LinkCategory::Social,
            platform: Some(platform),
            username: Some(username),
            monetization_kind: None,
        }
    }

    pub fn monetization(kind: MonetizationKind) -> Self {
        Self {
            category: LinkCategory::Monetization,
            monetization_kind: Some(kind),
            ..Default::default()
        }
    }
}

/// A single "exchange positions" instruction for the remote link list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapOp {
    pub index_a: usize,
    pub index_b: usize,
}

impl SwapOp {
    pub fn new(index_a: usize, index_b: usize) -> Self {
        Self { index_a, index_b }
    }
}

impl fmt::Display for SwapOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.index_a, self.index_b)
    }
}

/// Built-in profile theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub id: u64,
    pub name: &'static str,
}

impl Theme {
    pub const ALL: [Theme; 5] = [
        Theme {
            id: 1,
            name: "Ocean Blue",
        },
        Theme {
            id: 2,
            name: "Sunset Orange",
        },
        Theme {
            id: 3,
            name: "Forest Green",
        },
        Theme {
            id: 4,
            name: "Purple Dream",
        },
        Theme {
            id: 5,
            name: "Dark Mode",
        },
    ];

    /// Look up a theme, falling back to the first one for unknown ids
    pub fn by_id(id: u64) -> Theme {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.id == id)
            .unwrap_or(Self::ALL[0])
    }
}

/// Receipt for a submitted mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationReceipt {
    /// Transaction digest or outbox reference
    pub digest: String,
}

/// Locally tracked profile analytics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSnapshot {
    pub total_views: u64,
    pub total_clicks: u64,
    #[serde(default)]
    pub clicks_by_link: BTreeMap<String, u64>,
    pub views_today: u64,
    pub clicks_today: u64,
}

/// A zkLogin identity linked to a wallet address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedAccount {
    pub zk_login_email: String,
    pub wallet_address: String,
    /// RFC 3339 timestamp
    pub linked_at: String,
}
