//! Static site configuration: gallery catalog, playlist and per-section settings.
use dioxus::logger::tracing::warn;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::gallery::GalleryItem;
use crate::player::Track;

const SITE_JSON: &str = include_str!("../assets/site.json");

pub const PLACEHOLDER_COVER: &str = "img/cover-placeholder.jpg";

static SITE_CONFIG: Lazy<SiteConfig> = Lazy::new(|| match SiteConfig::from_json(SITE_JSON) {
    Ok(config) => config,
    Err(err) => {
        warn!("{err}; falling back to the built-in site configuration");
        SiteConfig::default()
    }
});

/// The configuration every section mounts against.
pub fn site_config() -> &'static SiteConfig {
    &SITE_CONFIG
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_gallery")]
    pub gallery: Vec<GalleryItem>,
    #[serde(default = "default_playlist")]
    pub playlist: Vec<Track>,
    #[serde(default)]
    pub player: PlayerSettings,
    #[serde(default)]
    pub portfolio: PortfolioSettings,
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        if config.playlist.is_empty() {
            return Err(ConfigError::EmptyPlaylist);
        }
        Ok(config)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            gallery: default_gallery(),
            playlist: default_playlist(),
            player: PlayerSettings::default(),
            portfolio: PortfolioSettings::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSettings {
    #[serde(default = "default_volume")]
    pub initial_volume: f64,
    #[serde(default)]
    pub autoplay: bool,
    #[serde(default = "default_placeholder_cover")]
    pub placeholder_cover: String,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            initial_volume: default_volume(),
            autoplay: false,
            placeholder_cover: default_placeholder_cover(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSettings {
    /// Distance from the bottom of the viewport a reveal target must cross.
    #[serde(default = "default_reveal_offset")]
    pub reveal_offset_px: f64,
    #[serde(default = "default_contact_delay")]
    pub contact_delay_ms: u32,
}

impl Default for PortfolioSettings {
    fn default() -> Self {
        Self {
            reveal_offset_px: default_reveal_offset(),
            contact_delay_ms: default_contact_delay(),
        }
    }
}

fn default_volume() -> f64 {
    0.8
}

fn default_placeholder_cover() -> String {
    PLACEHOLDER_COVER.to_string()
}

fn default_reveal_offset() -> f64 {
    40.0
}

fn default_contact_delay() -> u32 {
    900
}

fn default_gallery() -> Vec<GalleryItem> {
    [
        ("mountain-lake", "nature", "Mountain lake at dawn"),
        ("night-skyline", "city", "Skyline after the rain"),
        ("street-portrait", "people", "Street portrait"),
        ("forest-trail", "nature", "Forest trail in autumn"),
        ("old-town", "city", "Old town rooftops"),
        ("market-day", "people", "Market day"),
        ("desert-dunes", "nature", "Desert dunes"),
        ("subway", "city", "Last train home"),
        ("festival", "people", "Festival crowd"),
    ]
    .into_iter()
    .map(|(id, category, caption)| GalleryItem {
        id: id.to_string(),
        src: format!("images/{id}.jpg"),
        alt: caption.to_string(),
        caption: caption.to_string(),
        category: category.to_string(),
    })
    .collect()
}

fn default_playlist() -> Vec<Track> {
    vec![
        Track::new(
            "HIGH ON YOU",
            "Jind Universe",
            "music/HIGH_ON_YOU.mp3",
            "img/HOY.png",
        ),
        Track::new(
            "Pal Pal",
            "Afusic,Talwiinder,AliSoomroMusic",
            "music/PAL_PAL.mp3",
            "img/Pal.png",
        ),
        Track::new(
            "Barbaad",
            "Jubin Nautiyal,The Rish",
            "music/Barbaad.mp3",
            "img/barbaad.png",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_configuration_parses() {
        let config = SiteConfig::from_json(SITE_JSON).expect("site.json should parse");
        assert_eq!(config.playlist.len(), 3);
        assert!(!config.gallery.is_empty());
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config = SiteConfig::from_json(r#"{"gallery": []}"#).unwrap();
        assert!(config.gallery.is_empty());
        assert_eq!(config.playlist, default_playlist());
        assert_eq!(config.player.initial_volume, 0.8);
        assert!(!config.player.autoplay);
        assert_eq!(config.portfolio.contact_delay_ms, 900);
        assert_eq!(config.portfolio.reveal_offset_px, 40.0);
    }

    #[test]
    fn empty_playlist_is_rejected() {
        let err = SiteConfig::from_json(r#"{"playlist": []}"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyPlaylist));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            SiteConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
