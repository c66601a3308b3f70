use std::rc::Rc;

use crate::components::{run_media_commands, Icon};
use crate::player::Player;
use dioxus::prelude::*;

/// Previous / play-pause / next.
#[component]
pub(super) fn TransportButtons(mut player: Signal<Player>) -> Element {
    let glyph = player.read().play_glyph();
    let label = player.read().play_label();

    rsx! {
        div { class: "controls",
            button {
                id: "prevBtn",
                class: "ctrl-btn",
                r#type: "button",
                title: "Previous",
                aria_label: "Previous",
                onclick: move |_| {
                    let commands = player.write().prev();
                    run_media_commands(commands, player);
                },
                Icon { name: "prev".to_string(), class: "icon".to_string() }
            }
            button {
                id: "playBtn",
                class: "ctrl-btn play",
                r#type: "button",
                title: "{label}",
                aria_label: "{label}",
                onclick: move |_| {
                    let commands = player.write().toggle();
                    run_media_commands(commands, player);
                },
                "{glyph}"
            }
            button {
                id: "nextBtn",
                class: "ctrl-btn",
                r#type: "button",
                title: "Next",
                aria_label: "Next",
                onclick: move |_| {
                    let commands = player.write().next();
                    run_media_commands(commands, player);
                },
                Icon { name: "next".to_string(), class: "icon".to_string() }
            }
        }
    }
}

/// Clickable and keyboard-seekable progress track with the time readouts.
#[component]
pub(super) fn ProgressBar(mut player: Signal<Player>) -> Element {
    let mut track = use_signal(|| None::<Rc<MountedData>>);
    let percent = player.read().progress_percent();
    let position = player.read().position().round();
    let duration = player.read().duration().unwrap_or(0.0).round();
    let elapsed = player.read().elapsed_text();
    let total = player.read().duration_text();

    let on_click = move |evt: MouseEvent| {
        let pointer_x = evt.client_coordinates().x;
        spawn(async move {
            let Some(element) = track() else {
                return;
            };
            let Ok(rect) = element.get_client_rect().await else {
                return;
            };
            let commands = player
                .write()
                .seek(pointer_x, rect.origin.x, rect.size.width);
            run_media_commands(commands, player);
        });
    };

    rsx! {
        div { class: "progress-row",
            span { id: "currentTime", class: "time", "{elapsed}" }
            div {
                id: "progressBar",
                class: "progress",
                tabindex: "0",
                role: "slider",
                aria_label: "Seek",
                aria_valuemin: "0",
                aria_valuemax: "{duration}",
                aria_valuenow: "{position}",
                aria_valuetext: "{elapsed} of {total}",
                onmounted: move |evt: MountedEvent| track.set(Some(evt.data())),
                onclick: on_click,
                onkeydown: move |evt: KeyboardEvent| {
                    let commands = player.write().seek_key(&evt.key().to_string());
                    if !commands.is_empty() {
                        evt.prevent_default();
                        run_media_commands(commands, player);
                    }
                },
                div { id: "progress", class: "progress-fill", style: "width: {percent}%;" }
            }
            span { id: "duration", class: "time", "{total}" }
        }
    }
}

#[component]
pub(super) fn VolumeControl(mut player: Signal<Player>) -> Element {
    let volume = player.read().volume();

    rsx! {
        label { class: "volume",
            Icon { name: "volume".to_string(), class: "icon".to_string() }
            input {
                id: "volume",
                r#type: "range",
                min: "0",
                max: "1",
                step: "0.01",
                aria_label: "Volume",
                value: "{volume}",
                oninput: move |evt| {
                    if let Ok(value) = evt.value().parse::<f64>() {
                        let commands = player.write().set_volume(value);
                        run_media_commands(commands, player);
                    }
                },
            }
        }
    }
}

#[component]
pub(super) fn AutoplayToggle(mut player: Signal<Player>) -> Element {
    let enabled = player.read().autoplay();

    rsx! {
        label { class: "autoplay",
            input {
                id: "autoplay",
                r#type: "checkbox",
                checked: enabled,
                onchange: move |evt| player.write().set_autoplay(evt.checked()),
            }
            "Autoplay"
        }
    }
}

#[component]
pub(super) fn PlaylistPanel(mut player: Signal<Player>) -> Element {
    let tracks = player.read().playlist().to_vec();
    let current = player.read().current_index();

    let mut select = move |index: usize| {
        let commands = player.write().load_song(index as isize, true);
        run_media_commands(commands, player);
    };

    rsx! {
        ul { id: "playlist", class: "playlist",
            for (idx, track) in tracks.into_iter().enumerate() {
                li {
                    key: "{idx}",
                    class: if idx == current { "track active" } else { "track" },
                    tabindex: "0",
                    onclick: move |_| select(idx),
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter {
                            evt.prevent_default();
                            select(idx);
                        }
                    },
                    span { class: "track-title", "{track.display_title()}" }
                    span { class: "track-artist", "{track.display_artist()}" }
                }
            }
        }
    }
}
