// Applies player transitions to the page's <audio> element.
use crate::error::PlaybackError;
use crate::player::{MediaCommand, Player};
use dioxus::prelude::*;
use serde::Deserialize;

#[cfg(not(target_arch = "wasm32"))]
use crate::player::PlayTicket;
#[cfg(target_arch = "wasm32")]
use dioxus::logger::tracing::warn;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlAudioElement};

pub const AUDIO_ELEMENT_ID: &str = "player-audio";

/// Element state read back after a media event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct MediaSnapshot {
    pub current_time: f64,
    /// Zero while unknown.
    pub duration: f64,
    pub paused: bool,
    pub error_code: Option<u16>,
}

#[cfg(target_arch = "wasm32")]
fn audio_element() -> Option<HtmlAudioElement> {
    window()?
        .document()?
        .get_element_by_id(AUDIO_ELEMENT_ID)?
        .dyn_into::<HtmlAudioElement>()
        .ok()
}

#[cfg(target_arch = "wasm32")]
fn media_error_code(audio: &HtmlAudioElement) -> Option<u16> {
    let audio_js = wasm_bindgen::JsValue::from(audio.clone());
    let error_js = js_sys::Reflect::get(&audio_js, &"error".into()).ok()?;
    if error_js.is_null() || error_js.is_undefined() {
        return None;
    }
    js_sys::Reflect::get(&error_js, &"code".into())
        .ok()
        .and_then(|value| value.as_f64())
        .map(|code| code as u16)
}

#[cfg(target_arch = "wasm32")]
fn rejection_message(value: &wasm_bindgen::JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(value, &"message".into())
                .ok()
                .and_then(|message| message.as_string())
        })
        .unwrap_or_else(|| "play() was rejected".to_string())
}

/// Apply `commands` in order. Start-playback outcomes are reported back to
/// `player` asynchronously.
#[cfg(target_arch = "wasm32")]
pub fn run_media_commands(commands: Vec<MediaCommand>, mut player: Signal<Player>) {
    if commands.is_empty() {
        return;
    }
    let Some(audio) = audio_element() else {
        warn!("{}", PlaybackError::NoMediaElement);
        for command in commands {
            if let MediaCommand::Play(ticket) = command {
                player
                    .write()
                    .finish_play(ticket, Err(PlaybackError::NoMediaElement));
            }
        }
        return;
    };

    for command in commands {
        match command {
            MediaCommand::SetSource(src) => audio.set_src(&src),
            MediaCommand::Load => audio.load(),
            MediaCommand::Play(ticket) => match audio.play() {
                Ok(promise) => {
                    spawn(async move {
                        let result = wasm_bindgen_futures::JsFuture::from(promise)
                            .await
                            .map(|_| ())
                            .map_err(|err| PlaybackError::Rejected(rejection_message(&err)));
                        player.write().finish_play(ticket, result);
                    });
                }
                Err(err) => {
                    player
                        .write()
                        .finish_play(ticket, Err(PlaybackError::Rejected(rejection_message(&err))));
                }
            },
            MediaCommand::Pause => {
                let _ = audio.pause();
            }
            MediaCommand::Seek(seconds) => audio.set_current_time(seconds),
            MediaCommand::SetVolume(volume) => audio.set_volume(volume),
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn media_snapshot() -> Option<MediaSnapshot> {
    let audio = audio_element()?;
    let duration = audio.duration();
    Some(MediaSnapshot {
        current_time: audio.current_time(),
        duration: if duration.is_finite() { duration } else { 0.0 },
        paused: audio.paused(),
        error_code: media_error_code(&audio),
    })
}

#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Deserialize)]
struct PlayOutcome {
    ok: bool,
    #[serde(default)]
    missing: bool,
    #[serde(default)]
    message: Option<String>,
}

#[cfg(not(target_arch = "wasm32"))]
impl PlayOutcome {
    fn into_result(self) -> Result<(), PlaybackError> {
        match (self.ok, self.missing) {
            (true, _) => Ok(()),
            (false, true) => Err(PlaybackError::NoMediaElement),
            (false, false) => Err(PlaybackError::Rejected(
                self.message.unwrap_or_else(|| "play() was rejected".to_string()),
            )),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn command_statement(command: &MediaCommand) -> Option<String> {
    Some(match command {
        MediaCommand::SetSource(src) => {
            let src = serde_json::to_string(src).ok()?;
            format!("a.src = {src};")
        }
        MediaCommand::Load => "a.load();".to_string(),
        MediaCommand::Pause => "a.pause();".to_string(),
        MediaCommand::Seek(seconds) => format!("a.currentTime = {seconds};"),
        MediaCommand::SetVolume(volume) => format!("a.volume = {volume};"),
        MediaCommand::Play(_) => return None,
    })
}

#[cfg(not(target_arch = "wasm32"))]
pub fn run_media_commands(commands: Vec<MediaCommand>, mut player: Signal<Player>) {
    if commands.is_empty() {
        return;
    }
    let statements = commands
        .iter()
        .filter_map(command_statement)
        .collect::<Vec<_>>()
        .join("\n  ");
    let ticket: Option<PlayTicket> = commands.iter().rev().find_map(|command| match command {
        MediaCommand::Play(ticket) => Some(*ticket),
        _ => None,
    });
    let tail = if ticket.is_some() {
        r#"try {
    await a.play();
    return { ok: true };
  } catch (e) {
    return { ok: false, message: String(e) };
  }"#
    } else {
        "return { ok: true };"
    };
    let script = format!(
        r#"return (async function () {{
  const a = document.getElementById("{AUDIO_ELEMENT_ID}");
  if (!a) return {{ ok: false, missing: true }};
  {statements}
  {tail}
}})();"#
    );

    let eval = document::eval(&script);
    if let Some(ticket) = ticket {
        spawn(async move {
            let result = match eval.join::<PlayOutcome>().await {
                Ok(outcome) => outcome.into_result(),
                Err(err) => Err(PlaybackError::Rejected(err.to_string())),
            };
            player.write().finish_play(ticket, result);
        });
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn media_snapshot() -> Option<MediaSnapshot> {
    let eval = document::eval(&format!(
        r#"return (function () {{
  const a = document.getElementById("{AUDIO_ELEMENT_ID}");
  if (!a) return null;
  return {{
    current_time: Number.isFinite(a.currentTime) ? a.currentTime : 0,
    duration: Number.isFinite(a.duration) ? a.duration : 0,
    paused: !!a.paused,
    error_code: a.error ? a.error.code : null,
  }};
}})();"#
    ));
    eval.join::<Option<MediaSnapshot>>().await.ok().flatten()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn statements_follow_commands() {
        assert_eq!(
            command_statement(&MediaCommand::SetSource("audio/a b.mp3".into())).as_deref(),
            Some(r#"a.src = "audio/a b.mp3";"#)
        );
        assert_eq!(
            command_statement(&MediaCommand::Seek(12.5)).as_deref(),
            Some("a.currentTime = 12.5;")
        );
        assert_eq!(command_statement(&MediaCommand::SetVolume(1.0)).as_deref(), Some("a.volume = 1;"));
        assert!(command_statement(&MediaCommand::Play(test_ticket())).is_none());
    }

    #[test]
    fn play_outcomes_map_to_errors() {
        let rejected = PlayOutcome {
            ok: false,
            missing: false,
            message: Some("NotAllowedError".into()),
        };
        assert!(matches!(
            rejected.into_result(),
            Err(PlaybackError::Rejected(message)) if message == "NotAllowedError"
        ));
        let missing: PlayOutcome = serde_json::from_str(r#"{"ok":false,"missing":true}"#).unwrap();
        assert!(matches!(missing.into_result(), Err(PlaybackError::NoMediaElement)));
        let ok: PlayOutcome = serde_json::from_str(r#"{"ok":true}"#).unwrap();
        assert!(ok.into_result().is_ok());
    }

    #[test]
    fn snapshot_accepts_missing_error_code() {
        let snapshot: MediaSnapshot =
            serde_json::from_str(r#"{"current_time":3.5,"duration":0,"paused":true,"error_code":null}"#)
                .unwrap();
        assert_eq!(snapshot.duration, 0.0);
        assert_eq!(snapshot.error_code, None);
    }

    fn test_ticket() -> PlayTicket {
        let mut player = Player::new(
            vec![crate::player::Track::new("t", "a", "a.mp3", "")],
            &crate::config::PlayerSettings::default(),
        );
        player.mount();
        match player.play().pop() {
            Some(MediaCommand::Play(ticket)) => ticket,
            other => panic!("expected a play command, got {other:?}"),
        }
    }
}
