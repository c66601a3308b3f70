// Small document-wide side effects shared by the page sections.
use dioxus::prelude::*;

/// Suspend or restore scrolling of the page behind an overlay.
pub fn set_page_scroll_locked(locked: bool) {
    let overflow = if locked { "hidden" } else { "" };
    let _ = document::eval(&format!(
        r#"document.body.style.overflow = "{overflow}";"#
    ));
}

/// Animate the viewport to the top of the element with `id`.
pub fn smooth_scroll_to(id: &str) {
    let target = serde_json::to_string(id).unwrap_or_else(|_| "\"\"".to_string());
    let _ = document::eval(&format!(
        r#"const dest = document.getElementById({target});
        if (dest) {{
          dest.scrollIntoView({{ behavior: "smooth", block: "start" }});
        }}"#
    ));
}
