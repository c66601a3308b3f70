use crate::components::{media_snapshot, run_media_commands, use_document_keydown, AUDIO_ELEMENT_ID};
use crate::config::site_config;
use crate::error::MediaErrorKind;
use crate::player::{space_toggles_playback, Player};
use dioxus::prelude::*;

mod controls;
#[cfg(target_arch = "wasm32")]
mod debug_surface;

use controls::{AutoplayToggle, PlaylistPanel, ProgressBar, TransportButtons, VolumeControl};

#[component]
pub fn PlayerView() -> Element {
    let mut player = use_signal(|| {
        let config = site_config();
        Player::new(config.playlist.clone(), &config.player)
    });

    // Space toggles playback unless a text field has focus.
    use_document_keydown("player", &["Space"], move |press| {
        if !space_toggles_playback(&press.code, press.focused_tag.as_deref()) {
            return false;
        }
        let commands = player.write().toggle();
        run_media_commands(commands, player);
        true
    });

    #[cfg(target_arch = "wasm32")]
    debug_surface::use_debug_surface(player);

    let refresh_time = move || {
        spawn(async move {
            if let Some(snapshot) = media_snapshot().await {
                player
                    .write()
                    .on_time_update(snapshot.current_time, snapshot.duration);
            }
        });
    };

    let (title, artist) = {
        let state = player.read();
        match state.current_track() {
            Some(track) => (
                track.display_title().to_string(),
                track.display_artist().to_string(),
            ),
            None => (String::new(), String::new()),
        }
    };
    let cover = player.read().cover_src().to_string();
    let status = player.read().status().map(str::to_string);

    rsx! {
        section { class: "player-page",
            audio {
                id: AUDIO_ELEMENT_ID,
                preload: "metadata",
                onmounted: move |_| {
                    let commands = player.write().mount();
                    run_media_commands(commands, player);
                },
                onloadedmetadata: move |_| {
                    spawn(async move {
                        if let Some(snapshot) = media_snapshot().await {
                            player.write().on_loaded_metadata(snapshot.duration);
                        }
                    });
                },
                ontimeupdate: move |_| refresh_time(),
                onended: move |_| {
                    let commands = player.write().on_ended();
                    run_media_commands(commands, player);
                },
                onerror: move |_| {
                    spawn(async move {
                        let code = media_snapshot()
                            .await
                            .and_then(|snapshot| snapshot.error_code)
                            .unwrap_or(0);
                        player.write().on_media_error(MediaErrorKind::from_code(code));
                    });
                },
                onplay: move |_| player.write().sync_paused(false),
                onpause: move |_| player.write().sync_paused(true),
            }

            div { class: "player-card",
                img {
                    id: "cover",
                    class: "cover",
                    src: "{cover}",
                    alt: "Album cover",
                    onerror: move |_| {
                        player.write().on_cover_error();
                    },
                }
                div { class: "meta",
                    h2 { id: "title", class: "track-name", "{title}" }
                    p { id: "artist", class: "track-artist", "{artist}" }
                }

                TransportButtons { player }
                ProgressBar { player }

                div { class: "player-options",
                    VolumeControl { player }
                    AutoplayToggle { player }
                }

                p { id: "playerStatus", class: "player-status", role: "status",
                    if let Some(message) = status {
                        "{message}"
                    }
                }
            }

            PlaylistPanel { player }
        }
    }
}
