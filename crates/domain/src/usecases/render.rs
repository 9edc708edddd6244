//! Rendering use case - turns a fetched profile into a presentation view

use serde::Serialize;

use crate::model::{LinkClassification, Profile, Theme};
use crate::usecases::classify::classify_link;

/// Avatar icon ids selectable at profile creation
pub const AVATAR_ICONS: &[&str] = &[
    "business",
    "tech",
    "creative",
    "music",
    "photo",
    "lifestyle",
    "gaming",
    "education",
    "food",
    "travel",
];

/// Configuration for the renderer
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Generated-avatar base URL; the display name is appended as the seed
    pub default_avatar_base: String,
    /// Display name used when the profile name is empty
    pub fallback_name: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            default_avatar_base: "https://api.dicebear.com/7.x/avataaars/svg?seed=".to_string(),
            fallback_name: "Unknown".to_string(),
        }
    }
}

/// How the avatar should be drawn
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Avatar {
    /// One of [`AVATAR_ICONS`]
    Icon(String),
    /// An image URL (user-supplied or generated)
    Image(String),
}

/// A link ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkView {
    /// Stable id used for drag-and-drop reordering
    pub id: String,
    pub label: String,
    pub url: String,
    pub position: usize,
    pub classification: LinkClassification,
}

/// A profile ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileView {
    pub object_id: String,
    pub name: String,
    pub bio: String,
    pub avatar: Avatar,
    pub theme: Theme,
    pub links: Vec<LinkView>,
}

/// Renderer for profiles
pub struct ProfileRenderer {
    config: RenderConfig,
}

impl ProfileRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Build the view for a profile, classifying every link
    pub fn render(&self, profile: &Profile) -> ProfileView {
        let name = if profile.name.trim().is_empty() {
            self.config.fallback_name.clone()
        } else {
            profile.name.clone()
        };

        let links = profile
            .links
            .iter()
            .map(|link| LinkView {
                id: link.display_id(),
                label: link.label.clone(),
                url: link.url.clone(),
                position: link.position,
                classification: classify_link(&link.url, &link.label),
            })
            .collect();

        ProfileView {
            object_id: profile.object_id.clone(),
            avatar: self.avatar_for(&profile.avatar_cid, &name),
            name,
            bio: profile.bio.clone(),
            theme: Theme::by_id(profile.theme),
            links,
        }
    }

    fn avatar_for(&self, avatar_cid: &str, name: &str) -> Avatar {
        if !avatar_cid.starts_with("http") && AVATAR_ICONS.contains(&avatar_cid) {
            Avatar::Icon(avatar_cid.to_string())
        } else if !avatar_cid.is_empty() {
            Avatar::Image(avatar_cid.to_string())
        } else {
            Avatar::Image(format!("{}{}", self.config.default_avatar_base, name))
        }
    }
}

impl Default for ProfileRenderer {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}
