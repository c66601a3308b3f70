//! Gallery filtering and lightbox navigation, independent of any rendering surface.
use dioxus::logger::tracing::debug;
use serde::{Deserialize, Serialize};

/// Filter value that shows every item.
pub const FILTER_ALL: &str = "all";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: String,
    pub src: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub category: String,
}

/// What the lightbox currently shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LightboxImage {
    pub src: String,
    pub alt: String,
    pub caption: String,
}

impl From<&GalleryItem> for LightboxImage {
    fn from(item: &GalleryItem) -> Self {
        Self {
            src: item.src.clone(),
            alt: item.alt.clone(),
            caption: item.caption.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxKey {
    Next,
    Previous,
    Close,
}

impl LightboxKey {
    /// Map a `KeyboardEvent.key` value to a lightbox action.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" => Some(Self::Next),
            "ArrowLeft" => Some(Self::Previous),
            "Escape" => Some(Self::Close),
            _ => None,
        }
    }
}

/// Whether a key activates a focused gallery item.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Gallery {
    items: Vec<GalleryItem>,
    hidden: Vec<bool>,
    active_filter: String,
    /// Position in the visible list of the displayed item; `None` while closed.
    current: Option<usize>,
    displayed: Option<LightboxImage>,
}

impl Gallery {
    pub fn new(items: Vec<GalleryItem>) -> Self {
        let hidden = vec![false; items.len()];
        Self {
            items,
            hidden,
            active_filter: FILTER_ALL.to_string(),
            current: None,
            displayed: None,
        }
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn active_filter(&self) -> &str {
        &self.active_filter
    }

    pub fn is_hidden(&self, index: usize) -> bool {
        self.hidden.get(index).copied().unwrap_or(true)
    }

    /// Distinct categories in catalog order, preceded by `"all"`.
    pub fn categories(&self) -> Vec<String> {
        let mut categories = vec![FILTER_ALL.to_string()];
        for item in &self.items {
            if !item.category.is_empty() && !categories.contains(&item.category) {
                categories.push(item.category.clone());
            }
        }
        categories
    }

    /// Show the items of one category, or every item for `"all"`.
    /// An open lightbox keeps its image.
    pub fn filter(&mut self, category: &str) {
        self.active_filter = category.to_string();
        for (item, hidden) in self.items.iter().zip(self.hidden.iter_mut()) {
            *hidden = !(category == FILTER_ALL || item.category == category);
        }
        debug!(category, visible = self.visible_count(), "gallery filtered");
    }

    pub fn visible_items(&self) -> Vec<&GalleryItem> {
        self.items
            .iter()
            .zip(&self.hidden)
            .filter(|(_, hidden)| !**hidden)
            .map(|(item, _)| item)
            .collect()
    }

    pub fn visible_count(&self) -> usize {
        self.hidden.iter().filter(|hidden| !**hidden).count()
    }

    /// Position of an item within the visible list.
    pub fn index_of_visible(&self, id: &str) -> Option<usize> {
        self.visible_items().iter().position(|item| item.id == id)
    }

    /// Open the lightbox on a visible item. Out-of-range indices wrap in both
    /// directions; with nothing visible this is a no-op.
    pub fn open(&mut self, index: isize) -> bool {
        let visible = self.visible_items();
        if visible.is_empty() {
            return false;
        }
        let len = visible.len() as isize;
        let wrapped = index.rem_euclid(len) as usize;
        let image = LightboxImage::from(visible[wrapped]);

        self.current = Some(wrapped);
        self.displayed = Some(image);
        true
    }

    pub fn close(&mut self) {
        self.current = None;
        self.displayed = None;
    }

    pub fn next(&mut self) -> bool {
        match self.current {
            Some(current) => self.open(current as isize + 1),
            None => false,
        }
    }

    pub fn prev(&mut self) -> bool {
        match self.current {
            Some(current) => self.open(current as isize - 1),
            None => false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    #[cfg(test)]
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn displayed(&self) -> Option<&LightboxImage> {
        self.displayed.as_ref()
    }

    /// Keyboard navigation while the lightbox is open. Returns whether the
    /// key was handled.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if !self.is_open() {
            return false;
        }
        match LightboxKey::from_key(key) {
            Some(LightboxKey::Next) => self.next(),
            Some(LightboxKey::Previous) => self.prev(),
            Some(LightboxKey::Close) => {
                self.close();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, category: &str) -> GalleryItem {
        GalleryItem {
            id: id.to_string(),
            src: format!("images/{id}.jpg"),
            alt: format!("{id} alt"),
            caption: format!("{id} caption"),
            category: category.to_string(),
        }
    }

    fn sample() -> Gallery {
        Gallery::new(vec![
            item("a", "nature"),
            item("b", "city"),
            item("c", "nature"),
            item("d", "people"),
        ])
    }

    #[test]
    fn filter_matches_category_or_all() {
        let mut gallery = sample();
        for filter in ["all", "nature", "city", "people", "missing"] {
            gallery.filter(filter);
            for (idx, item) in gallery.items().iter().enumerate() {
                let expected_visible = filter == FILTER_ALL || item.category == filter;
                assert_eq!(!gallery.is_hidden(idx), expected_visible, "{filter} / {}", item.id);
            }
            assert_eq!(gallery.active_filter(), filter);
        }
    }

    #[test]
    fn categories_are_unique_and_start_with_all() {
        assert_eq!(sample().categories(), vec!["all", "nature", "city", "people"]);
    }

    #[test]
    fn open_wraps_both_directions() {
        let mut gallery = sample();
        assert!(gallery.open(-1));
        assert_eq!(gallery.current_index(), Some(3));
        assert!(gallery.open(4));
        assert_eq!(gallery.current_index(), Some(0));
        assert_eq!(gallery.displayed().unwrap().src, "images/a.jpg");
    }

    #[test]
    fn next_then_prev_returns_to_same_item() {
        let mut gallery = sample();
        gallery.open(2);
        let before = gallery.displayed().cloned();
        gallery.next();
        assert_ne!(gallery.displayed().cloned(), before);
        gallery.prev();
        assert_eq!(gallery.displayed().cloned(), before);
    }

    #[test]
    fn navigation_cycles_over_visible_items_only() {
        let mut gallery = sample();
        gallery.filter("nature");
        gallery.open(1);
        assert_eq!(gallery.displayed().unwrap().caption, "c caption");
        gallery.next();
        assert_eq!(gallery.displayed().unwrap().caption, "a caption");
        gallery.prev();
        gallery.prev();
        assert_eq!(gallery.displayed().unwrap().caption, "a caption");
    }

    #[test]
    fn empty_visible_set_keeps_lightbox_closed() {
        let mut gallery = sample();
        gallery.filter("nothing-here");
        assert!(!gallery.open(0));
        assert!(!gallery.open(-5));
        assert!(!gallery.is_open());
        assert!(gallery.displayed().is_none());
    }

    #[test]
    fn close_resets_state() {
        let mut gallery = sample();
        gallery.open(1);
        gallery.close();
        assert!(!gallery.is_open());
        assert_eq!(gallery.current_index(), None);
        assert!(gallery.displayed().is_none());
        assert!(!gallery.next());
    }

    #[test]
    fn filtering_keeps_open_lightbox_image() {
        let mut gallery = sample();
        gallery.open(1);
        gallery.filter("people");
        assert!(gallery.is_open());
        assert_eq!(gallery.displayed().unwrap().src, "images/b.jpg");
    }

    #[test]
    fn keys_only_act_while_open() {
        let mut gallery = sample();
        assert!(!gallery.handle_key("ArrowRight"));
        gallery.open(0);
        assert!(gallery.handle_key("ArrowRight"));
        assert_eq!(gallery.current_index(), Some(1));
        assert!(gallery.handle_key("ArrowLeft"));
        assert_eq!(gallery.current_index(), Some(0));
        assert!(!gallery.handle_key("a"));
        assert!(gallery.handle_key("Escape"));
        assert!(!gallery.is_open());
    }

    #[test]
    fn visible_index_lookup_skips_hidden_items() {
        let mut gallery = sample();
        gallery.filter("nature");
        assert_eq!(gallery.index_of_visible("c"), Some(1));
        assert_eq!(gallery.index_of_visible("b"), None);
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(!is_activation_key("Tab"));
    }
}
