//! The components module contains the page sections and their shared pieces.

mod app;
mod app_view;
mod gallery;
mod icons;
mod keyboard;
mod media_host;
mod page_effects;
mod player;
mod portfolio;
#[cfg(any(target_arch = "wasm32", test))]
mod scoped_runtime;

pub use app::*;
pub use app_view::*;
pub use gallery::*;
pub use icons::*;
pub use keyboard::*;
pub use media_host::*;
pub use page_effects::*;
pub use player::*;
pub use portfolio::*;
#[cfg(any(target_arch = "wasm32", test))]
pub use scoped_runtime::*;
