use crate::components::{smooth_scroll_to, Icon};
use crate::config::site_config;
use crate::portfolio::{
    anchor_target, current_year, ContactField, ContactForm, ContactTransport, MenuToggle,
    RevealTracker, SimulatedTransport,
};
use crate::utils::slugify;
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use serde::Deserialize;

const PROJECTS: &[(&str, &str)] = &[
    (
        "Photo Gallery",
        "A filterable image grid with a keyboard friendly lightbox.",
    ),
    (
        "Audio Player",
        "Playlist driven player with seeking, volume and autoplay.",
    ),
    (
        "This Portfolio",
        "Scroll reveal sections, smooth in-page links and a contact form.",
    ),
];

/// Sections in document order; each one is a reveal target.
const SECTIONS: &[&str] = &["About", "Projects", "Contact"];

/// One scroll measurement of every reveal target.
#[derive(Debug, Clone, Deserialize)]
struct RevealSample {
    tops: Vec<f64>,
    viewport_height: f64,
}

const REVEAL_LISTENER_JS: &str = r#"
const slot = "__showroomReveal";
if (window[slot]) {
  window.removeEventListener("scroll", window[slot]);
}
const measure = () => {
  const targets = Array.from(document.querySelectorAll("[data-reveal]"));
  dioxus.send({
    tops: targets.map((el) => el.getBoundingClientRect().top),
    viewport_height: window.innerHeight || document.documentElement.clientHeight,
  });
};
window[slot] = measure;
window.addEventListener("scroll", measure, { passive: true });
measure();
"#;

const REVEAL_TEARDOWN_JS: &str = r#"
const slot = "__showroomReveal";
if (window[slot]) {
  window.removeEventListener("scroll", window[slot]);
  delete window[slot];
}
"#;

#[component]
pub fn PortfolioView() -> Element {
    let settings = site_config().portfolio.clone();
    let mut reveal = use_signal(|| RevealTracker::new(SECTIONS.len(), settings.reveal_offset_px));
    let mut menu = use_signal(MenuToggle::default);
    let year = use_hook(current_year);

    // Measured once on mount and on every scroll notification.
    use_hook(move || {
        spawn(async move {
            let mut samples = document::eval(REVEAL_LISTENER_JS);
            while let Ok(sample) = samples.recv::<RevealSample>().await {
                reveal.write().update(&sample.tops, sample.viewport_height);
            }
        })
    });
    use_drop(|| {
        let _ = document::eval(REVEAL_TEARDOWN_JS);
    });

    let on_anchor = move |evt: MouseEvent, href: &str| {
        if let Some(id) = anchor_target(href) {
            evt.prevent_default();
            debug!(section = id, "smooth scrolling to section");
            smooth_scroll_to(id);
        }
    };

    let nav_style = menu
        .read()
        .nav_display()
        .map(|display| format!("display: {display};"))
        .unwrap_or_default();

    rsx! {
        div { class: "portfolio-page",
            header { id: "home", class: "portfolio-header",
                a {
                    class: "brand",
                    href: "#home",
                    onclick: move |evt| on_anchor(evt, "#home"),
                    "Portfolio"
                }
                button {
                    class: "menu-btn",
                    r#type: "button",
                    aria_label: "Toggle navigation",
                    aria_expanded: menu.read().aria_expanded(),
                    onclick: move |_| {
                        menu.write().toggle();
                    },
                    Icon { name: "menu".to_string(), class: "icon".to_string() }
                }
                nav { class: "portfolio-nav", style: "{nav_style}",
                    for section in SECTIONS.iter().copied() {
                        a {
                            key: "{section}",
                            href: "#{slugify(section)}",
                            onclick: move |evt| on_anchor(evt, &format!("#{}", slugify(section))),
                            "{section}"
                        }
                    }
                }
            }

            section { class: "hero",
                h1 { "Hi, I build small things for the web." }
                p { "Design minded developer. Scroll down to see some recent work." }
                a {
                    class: "cta",
                    href: "#contact",
                    onclick: move |evt| on_anchor(evt, "#contact"),
                    "Get in touch"
                }
            }

            for (idx, section) in SECTIONS.iter().copied().enumerate() {
                section {
                    key: "{section}",
                    id: "{slugify(section)}",
                    class: if reveal.read().is_shown(idx) { "fade-up show" } else { "fade-up" },
                    "data-reveal": "true",
                    h2 { "{section}" }
                    {
                        match section {
                            "About" => rsx! {
                                p {
                                    "I enjoy turning rough ideas into tidy, accessible interfaces. "
                                    "Most of my work sits between design and engineering."
                                }
                            },
                            "Projects" => rsx! {
                                div { class: "projects",
                                    for (title, summary) in PROJECTS.iter().copied() {
                                        article { key: "{title}", class: "project",
                                            h3 { "{title}" }
                                            p { "{summary}" }
                                        }
                                    }
                                }
                            },
                            _ => rsx! {
                                ContactSection { delay_ms: settings.contact_delay_ms }
                            },
                        }
                    }
                }
            }

            footer { class: "portfolio-footer",
                p { "© " span { id: "year", "{year}" } " Portfolio" }
            }
        }
    }
}

#[component]
fn ContactSection(delay_ms: u32) -> Element {
    let mut form = use_signal(ContactForm::default);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(fields) = form.write().begin_submit() else {
            return;
        };
        let transport = SimulatedTransport { delay_ms };
        spawn(async move {
            let result = transport.deliver(fields).await;
            form.write().finish_submit(result);
        });
    };

    let fields = form.read().fields().clone();
    let status = form.read().status().message();

    rsx! {
        form { id: "contactForm", class: "contact-form", onsubmit: on_submit,
            label {
                "Name"
                input {
                    name: "name",
                    r#type: "text",
                    required: true,
                    value: "{fields.name}",
                    oninput: move |evt| form.write().set_field(ContactField::Name, evt.value()),
                }
            }
            label {
                "Email"
                input {
                    name: "email",
                    r#type: "email",
                    required: true,
                    value: "{fields.email}",
                    oninput: move |evt| form.write().set_field(ContactField::Email, evt.value()),
                }
            }
            label {
                "Message"
                textarea {
                    name: "message",
                    rows: "5",
                    required: true,
                    value: "{fields.message}",
                    oninput: move |evt| form.write().set_field(ContactField::Message, evt.value()),
                }
            }
            button { r#type: "submit", "Send" }
            p { id: "formMsg", class: "form-msg", role: "status",
                if let Some(message) = status {
                    "{message}"
                }
            }
        }
    }
}
