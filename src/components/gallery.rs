use std::rc::Rc;

use crate::components::{set_page_scroll_locked, use_document_keydown, Icon};
use crate::config::site_config;
use crate::gallery::{is_activation_key, Gallery, LightboxImage};
use dioxus::prelude::*;

fn filter_label(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[component]
pub fn GalleryView() -> Element {
    let mut gallery = use_signal(|| Gallery::new(site_config().gallery.clone()));
    let close_button = use_signal(|| None::<Rc<MountedData>>);

    // Scroll lock and close-button focus follow the lightbox.
    use_effect(move || {
        let open = gallery.read().is_open();
        set_page_scroll_locked(open);
        if open {
            if let Some(button) = close_button() {
                spawn(async move {
                    let _ = button.set_focus(true).await;
                });
            }
        }
    });

    use_drop(|| set_page_scroll_locked(false));

    use_document_keydown("gallery", &[], move |press| {
        gallery.write().handle_key(&press.key)
    });

    let categories = gallery.read().categories();
    let active_filter = gallery.read().active_filter().to_string();
    let items = gallery.read().items().to_vec();
    let displayed = gallery.read().displayed().cloned();

    let mut open_item = move |id: &str| {
        let index = gallery.read().index_of_visible(id);
        if let Some(index) = index {
            gallery.write().open(index as isize);
        }
    };

    rsx! {
        section { class: "gallery-page",
            div { class: "filters", role: "toolbar",
                for category in categories {
                    button {
                        key: "{category}",
                        r#type: "button",
                        class: if category == active_filter { "filter-btn active" } else { "filter-btn" },
                        "data-filter": "{category}",
                        onclick: {
                            let category = category.clone();
                            move |_| gallery.write().filter(&category)
                        },
                        "{filter_label(&category)}"
                    }
                }
            }

            div { id: "gallery", class: "gallery",
                for (idx, item) in items.into_iter().enumerate() {
                    figure {
                        key: "{item.id}",
                        class: if gallery.read().is_hidden(idx) { "item hidden" } else { "item" },
                        tabindex: "0",
                        "data-category": "{item.category}",
                        onclick: {
                            let id = item.id.clone();
                            move |_| open_item(&id)
                        },
                        onkeydown: {
                            let id = item.id.clone();
                            move |evt: KeyboardEvent| {
                                if is_activation_key(&evt.key().to_string()) {
                                    evt.prevent_default();
                                    open_item(&id);
                                }
                            }
                        },
                        img {
                            src: "{item.src}",
                            alt: "{item.alt}",
                            loading: "lazy",
                        }
                        figcaption { "{item.caption}" }
                    }
                }
            }

            Lightbox { gallery, close_button, displayed }
        }
    }
}

#[component]
fn Lightbox(
    mut gallery: Signal<Gallery>,
    mut close_button: Signal<Option<Rc<MountedData>>>,
    displayed: Option<LightboxImage>,
) -> Element {
    let is_open = displayed.is_some();
    let image = displayed.unwrap_or_default();

    rsx! {
        div {
            id: "lightbox",
            class: if is_open { "lightbox open" } else { "lightbox" },
            role: "dialog",
            aria_modal: "true",
            aria_hidden: if is_open { "false" } else { "true" },
            // Clicks on the backdrop itself close the viewer.
            onclick: move |_| gallery.write().close(),
            button {
                class: "lb-btn lb-prev",
                r#type: "button",
                aria_label: "Previous image",
                onclick: move |evt: MouseEvent| {
                    evt.stop_propagation();
                    gallery.write().prev();
                },
                Icon { name: "chevron-left".to_string(), class: "icon".to_string() }
            }
            figure {
                class: "lb-figure",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                if is_open {
                    img { src: "{image.src}", alt: "{image.alt}" }
                }
                figcaption { class: "lb-caption", "{image.caption}" }
            }
            button {
                class: "lb-btn lb-next",
                r#type: "button",
                aria_label: "Next image",
                onclick: move |evt: MouseEvent| {
                    evt.stop_propagation();
                    gallery.write().next();
                },
                Icon { name: "chevron-right".to_string(), class: "icon".to_string() }
            }
            button {
                class: "lb-btn lb-close",
                r#type: "button",
                aria_label: "Close",
                onmounted: move |evt: MountedEvent| close_button.set(Some(evt.data())),
                onclick: move |evt: MouseEvent| {
                    evt.stop_propagation();
                    gallery.write().close();
                },
                Icon { name: "x".to_string(), class: "icon".to_string() }
            }
        }
    }
}
