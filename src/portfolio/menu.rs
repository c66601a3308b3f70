/// Collapsible navigation state, mirrored into `aria-expanded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuToggle {
    expanded: bool,
    touched: bool,
}

impl MenuToggle {
    pub fn toggle(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.touched = true;
        self.expanded
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.is_expanded() {
            "true"
        } else {
            "false"
        }
    }

    /// CSS `display` for the nav element, `None` before the first toggle so
    /// the stylesheet decides.
    pub fn nav_display(&self) -> Option<&'static str> {
        if !self.touched {
            return None;
        }
        Some(if self.expanded { "flex" } else { "none" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_alternates_display() {
        let mut menu = MenuToggle::default();
        assert_eq!(menu.aria_expanded(), "false");
        assert_eq!(menu.nav_display(), None);

        assert!(menu.toggle());
        assert_eq!(menu.aria_expanded(), "true");
        assert_eq!(menu.nav_display(), Some("flex"));

        assert!(!menu.toggle());
        assert_eq!(menu.nav_display(), Some("none"));
    }
}
