use serde::{Deserialize, Serialize};

use crate::utils::encode_uri;

/// One playlist entry. Paths are relative to the page unless absolute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub artist: String,
    pub src: String,
    #[serde(default)]
    pub cover: Option<String>,
}

impl Track {
    pub fn new(title: &str, artist: &str, src: &str, cover: &str) -> Self {
        Self {
            title: title.to_string(),
            artist: artist.to_string(),
            src: src.to_string(),
            cover: Some(cover.to_string()),
        }
    }

    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            "Unknown title"
        } else {
            &self.title
        }
    }

    pub fn display_artist(&self) -> &str {
        if self.artist.trim().is_empty() {
            "Unknown artist"
        } else {
            &self.artist
        }
    }

    pub fn encoded_src(&self) -> String {
        encode_uri(&self.src)
    }

    /// Encoded cover path, or the placeholder when the track has none.
    pub fn cover_src(&self, placeholder: &str) -> String {
        match self.cover.as_deref().filter(|cover| !cover.trim().is_empty()) {
            Some(cover) => encode_uri(cover),
            None => placeholder.to_string(),
        }
    }
}

/// Resolve a requested playlist index. Below zero selects the last track,
/// past the end selects the first one.
pub fn wrap_index(index: isize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    if index < 0 {
        Some(len - 1)
    } else if index as usize >= len {
        Some(0)
    } else {
        Some(index as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_index_is_circular() {
        assert_eq!(wrap_index(-1, 3), Some(2));
        assert_eq!(wrap_index(3, 3), Some(0));
        assert_eq!(wrap_index(1, 3), Some(1));
        assert_eq!(wrap_index(0, 0), None);
    }

    #[test]
    fn missing_metadata_uses_fallbacks() {
        let track = Track {
            title: String::new(),
            artist: "  ".to_string(),
            src: "music/untitled take.mp3".to_string(),
            cover: None,
        };
        assert_eq!(track.display_title(), "Unknown title");
        assert_eq!(track.display_artist(), "Unknown artist");
        assert_eq!(track.encoded_src(), "music/untitled%20take.mp3");
        assert_eq!(track.cover_src("img/placeholder.jpg"), "img/placeholder.jpg");
    }
}
