use crate::components::{all_views, view_icon, view_label, AppView, Icon};
use dioxus::prelude::*;

/// Shared layout: section links on top, the routed section below.
#[component]
pub fn AppShell() -> Element {
    let current_view = use_route::<AppView>();

    rsx! {
        div { class: "app-shell",
            header { class: "app-header",
                span { class: "app-title", "Showroom" }
                nav { class: "section-links",
                    for view in all_views() {
                        Link {
                            key: "{view_label(&view)}",
                            to: view.clone(),
                            class: if view == current_view { "section-link active" } else { "section-link" },
                            Icon {
                                name: view_icon(&view).to_string(),
                                class: "icon".to_string(),
                            }
                            span { "{view_label(&view)}" }
                        }
                    }
                }
            }
            main { class: "app-main", Outlet::<AppView> {} }
        }
    }
}
