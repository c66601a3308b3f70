use std::rc::Rc;

use crate::components::{run_media_commands, ScopedRuntime};
use crate::player::{MediaCommand, Player};
use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;
use wasm_bindgen::{closure::Closure, JsValue};
use web_sys::window;

const SURFACE_NAME: &str = "__player";

type Action = Closure<dyn FnMut(JsValue, JsValue)>;
type Step = Box<dyn FnMut(&mut Player, JsValue, JsValue) -> Vec<MediaCommand>>;

/// Publish `window.__player` so playback can be driven from the browser
/// console: `loadSong(i, playNow)`, `play()`, `pause()`, `next()`, `prev()` and the
/// `playlist` itself. Removed again when the player unmounts.
pub(super) fn use_debug_surface(player: Signal<Player>) {
    let actions = use_hook(move || {
        let scope = ScopedRuntime::current();
        let surface = js_sys::Object::new();
        let mut actions: Vec<Action> = Vec::new();

        let mut bind = |name: &str, mut step: Step| {
            let scope = scope.clone();
            let mut player = player;
            let action = Closure::wrap(Box::new(move |first: JsValue, second: JsValue| {
                scope.run(|| {
                    let commands = step(&mut player.write(), first, second);
                    run_media_commands(commands, player);
                });
            }) as Box<dyn FnMut(JsValue, JsValue)>);
            let _ = js_sys::Reflect::set(&surface, &name.into(), action.as_ref());
            actions.push(action);
        };

        bind(
            "loadSong",
            Box::new(|player, index, play_now| {
                let index = index.as_f64().unwrap_or(0.0) as isize;
                player.load_song(index, play_now.as_bool().unwrap_or(false))
            }),
        );
        bind("play", Box::new(|player, _, _| player.play()));
        bind("pause", Box::new(|player, _, _| player.pause()));
        bind("next", Box::new(|player, _, _| player.next()));
        bind("prev", Box::new(|player, _, _| player.prev()));

        let playlist = serde_json::to_string(player.peek().playlist())
            .ok()
            .and_then(|json| js_sys::JSON::parse(&json).ok())
            .unwrap_or_else(|| js_sys::Array::new().into());
        let _ = js_sys::Reflect::set(&surface, &"playlist".into(), &playlist);

        match window() {
            Some(win) => {
                let _ = js_sys::Reflect::set(&win, &SURFACE_NAME.into(), &surface);
                debug!("player debug surface installed");
            }
            None => warn!("no window, player debug surface not installed"),
        }
        Rc::new(actions)
    });

    use_drop(move || {
        if let Some(win) = window() {
            let _ = js_sys::Reflect::delete_property(&win, &SURFACE_NAME.into());
        }
        drop(actions);
    });
}
