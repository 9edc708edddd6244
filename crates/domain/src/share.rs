//! Share links, explorer URLs and address formatting

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::form_urlencoded::byte_serialize;

/// Sui network a profile lives on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Network {
    #[default]
    Testnet,
    Mainnet,
    Devnet,
}

impl Network {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Testnet => "testnet",
            Self::Mainnet => "mainnet",
            Self::Devnet => "devnet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "testnet" => Ok(Self::Testnet),
            "mainnet" => Ok(Self::Mainnet),
            "devnet" => Ok(Self::Devnet),
            other => Err(format!("Unknown network: {}", other)),
        }
    }
}

/// Public URL of a profile page
pub fn profile_url(base_url: &str, object_id: &str) -> String {
    format!("{}/profile/{}", base_url.trim_end_matches('/'), object_id)
}

/// Intent URLs for sharing a profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareLinks {
    pub twitter: String,
    pub facebook: String,
    pub whatsapp: String,
    pub telegram: String,
}

fn encode(value: &str) -> String {
    byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Build share intent URLs for `url` with a `title`
pub fn share_links(url: &str, title: &str) -> ShareLinks {
    let url = encode(url);
    let title = encode(title);

    ShareLinks {
        twitter: format!("https://twitter.com/intent/tweet?text={}&url={}", title, url),
        facebook: format!("https://www.facebook.com/sharer/sharer.php?u={}", url),
        whatsapp: format!("https://wa.me/?text={}%20{}", title, url),
        telegram: format!("https://t.me/share/url?url={}&text={}", url, title),
    }
}

/// Explorer URL for an object
pub fn explorer_object_url(object_id: &str, network: Network) -> String {
    format!(
        "https://suiexplorer.com/object/{}?network={}",
        object_id, network
    )
}

/// Shorten an address for display: `0x1234...5678`
pub fn format_address(address: &str, length: usize) -> String {
    if !address.is_ascii() || address.len() < length * 2 + 2 {
        return address.to_string();
    }
    format!(
        "{}...{}",
        &address[..length + 2],
        &address[address.len() - length..]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_url_trims_trailing_slash() {
        assert_eq!(
            profile_url("https://blucky.app/", "0xabc"),
            "https://blucky.app/profile/0xabc"
        );
    }

    #[test]
    fn test_share_links_are_encoded() {
        let links = share_links("https://blucky.app/profile/0xabc", "Check out Alice & co");
        assert_eq!(
            links.facebook,
            "https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Fblucky.app%2Fprofile%2F0xabc"
        );
        assert!(links.twitter.contains("text=Check%20out%20Alice%20%26%20co"));
        assert!(links.whatsapp.starts_with("https://wa.me/?text=Check%20out"));
    }

    #[test]
    fn test_explorer_object_url() {
        assert_eq!(
            explorer_object_url("0xabc", Network::Mainnet),
            "https://suiexplorer.com/object/0xabc?network=mainnet"
        );
    }

    #[test]
    fn test_format_address() {
        assert_eq!(
            format_address("0x1234567890abcdef5678", 4),
            "0x1234...5678"
        );
        assert_eq!(format_address("0x12", 4), "0x12");
        assert_eq!(format_address("", 4), "");
    }

    #[test]
    fn test_network_parse() {
        assert_eq!("Mainnet".parse::<Network>(), Ok(Network::Mainnet));
        assert!("localnet".parse::<Network>().is_err());
    }
}
