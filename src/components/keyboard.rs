// Document-level keydown listeners that outlive element focus.
use dioxus::prelude::*;
use serde::Deserialize;

#[cfg(target_arch = "wasm32")]
use crate::components::ScopedRuntime;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};
#[cfg(target_arch = "wasm32")]
use web_sys::window;

/// A keydown seen anywhere in the document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct KeyPress {
    pub key: String,
    pub code: String,
    /// Tag name of the focused element, if any.
    pub focused_tag: Option<String>,
}

#[cfg(target_arch = "wasm32")]
impl KeyPress {
    fn from_event(event: &web_sys::KeyboardEvent) -> Self {
        let focused_tag = window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.active_element())
            .map(|element| element.tag_name());
        Self {
            key: event.key(),
            code: event.code(),
            focused_tag,
        }
    }
}

/// Run `handler` for every keydown on the document while the calling
/// component is mounted. Returning `true` consumes the key (default action
/// prevented). `prevent_codes` lists the key codes whose default must be
/// prevented on platforms where the handler runs asynchronously.
///
/// On wasm the handler runs synchronously inside the browser callback, so its
/// return value decides `preventDefault` and neither `name` (the window slot of
/// the native bridge) nor `prevent_codes` is needed.
#[cfg(target_arch = "wasm32")]
pub fn use_document_keydown<F>(
    _name: &'static str,
    _prevent_codes: &'static [&'static str],
    mut handler: F,
) where
    F: FnMut(KeyPress) -> bool + 'static,
{
    let listener = use_hook(move || {
        let scope = ScopedRuntime::current();
        let callback = Closure::wrap(Box::new(move |event: web_sys::KeyboardEvent| {
            if event.default_prevented() || event.is_composing() {
                return;
            }
            if scope.run(|| handler(KeyPress::from_event(&event))) {
                event.prevent_default();
            }
        }) as Box<dyn FnMut(web_sys::KeyboardEvent)>);

        if let Some(doc) = window().and_then(|w| w.document()) {
            let _ = doc
                .add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref());
        }
        Rc::new(callback)
    });

    use_drop(move || {
        if let Some(doc) = window().and_then(|w| w.document()) {
            let _ = doc.remove_event_listener_with_callback(
                "keydown",
                listener.as_ref().as_ref().unchecked_ref(),
            );
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
pub fn use_document_keydown<F>(
    name: &'static str,
    prevent_codes: &'static [&'static str],
    mut handler: F,
) where
    F: FnMut(KeyPress) -> bool + 'static,
{
    use_hook(move || {
        let prevent = serde_json::to_string(prevent_codes).unwrap_or_else(|_| "[]".to_string());
        let script = format!(
            r#"const slot = "__showroomKeys_{name}";
            if (window[slot]) {{
              document.removeEventListener("keydown", window[slot]);
            }}
            const prevent = {prevent};
            const listener = (e) => {{
              if (e.defaultPrevented || e.isComposing) return;
              const active = document.activeElement;
              const tag = active ? active.tagName : null;
              const typing = tag === "INPUT" || tag === "TEXTAREA";
              if (!typing && prevent.includes(e.code)) e.preventDefault();
              dioxus.send({{ key: e.key, code: e.code, focused_tag: tag }});
            }};
            window[slot] = listener;
            document.addEventListener("keydown", listener);"#
        );
        spawn(async move {
            let mut keys = document::eval(&script);
            while let Ok(press) = keys.recv::<KeyPress>().await {
                handler(press);
            }
        })
    });

    use_drop(move || {
        let _ = document::eval(&format!(
            r#"const slot = "__showroomKeys_{name}";
            if (window[slot]) {{
              document.removeEventListener("keydown", window[slot]);
              delete window[slot];
            }}"#
        ));
    });
}
