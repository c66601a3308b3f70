//! Playlist-driven audio player: track data, time formatting and the
//! playback state machine.
mod machine;
mod playlist;
mod time;

pub use machine::*;
pub use playlist::*;
