//! Portfolio page behaviors: scroll reveal, in-page anchors, the contact form
//! and the collapsible navigation.
mod contact;
mod menu;
mod reveal;

pub use contact::*;
pub use menu::*;
pub use reveal::*;

use chrono::{Datelike, Local};

/// Fragment id targeted by an in-page link. A bare `#` is left to the browser.
pub fn anchor_target(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => Some(id),
        _ => None,
    }
}

/// Year shown in the footer.
pub fn current_year() -> i32 {
    Local::now().year()
}
