use dioxus::logger::tracing::{debug, error, warn};

use super::playlist::{wrap_index, Track};
use super::time::{format_time, progress_percent};
use crate::config::PlayerSettings;
use crate::error::{MediaErrorKind, PlaybackError};

pub const PLAY_GLYPH: &str = "▶";
pub const PAUSE_GLYPH: &str = "⏸";

/// Fraction of the duration one arrow key press seeks by.
const SEEK_KEY_FRACTION: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    /// No track bound to the media element yet.
    Idle,
    /// Track bound, playback paused.
    Loaded,
    Playing,
}

/// Identifies one start-playback request so late outcomes of superseded
/// requests can be ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayTicket(u64);

/// Side effects a transition asks the host media element to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaCommand {
    SetSource(String),
    Load,
    Play(PlayTicket),
    Pause,
    Seek(f64),
    SetVolume(f64),
}

/// Whether a key press should toggle playback: Space, unless the user is
/// typing in a text field.
pub fn space_toggles_playback(code: &str, focused_tag: Option<&str>) -> bool {
    if code != "Space" {
        return false;
    }
    !matches!(
        focused_tag.map(|tag| tag.to_ascii_lowercase()).as_deref(),
        Some("input") | Some("textarea")
    )
}

/// Playback state machine. Every transition returns the media commands the
/// host must apply; nothing here touches the element directly.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    playlist: Vec<Track>,
    current_index: usize,
    state: PlayerState,
    volume: f64,
    autoplay: bool,
    placeholder_cover: String,
    cover_src: String,
    cover_failed: bool,
    duration: Option<f64>,
    position: f64,
    status: Option<String>,
    next_ticket: u64,
    pending: Option<PlayTicket>,
}

impl Player {
    pub fn new(playlist: Vec<Track>, settings: &PlayerSettings) -> Self {
        Self {
            playlist,
            current_index: 0,
            state: PlayerState::Idle,
            volume: settings.initial_volume.clamp(0.0, 1.0),
            autoplay: settings.autoplay,
            placeholder_cover: settings.placeholder_cover.clone(),
            cover_src: settings.placeholder_cover.clone(),
            cover_failed: false,
            duration: None,
            position: 0.0,
            status: None,
            next_ticket: 0,
            pending: None,
        }
    }

    /// Initial volume and the first track, paused.
    pub fn mount(&mut self) -> Vec<MediaCommand> {
        let mut commands = vec![MediaCommand::SetVolume(self.volume)];
        commands.extend(self.load_song(0, false));
        commands
    }

    pub fn playlist(&self) -> &[Track] {
        &self.playlist
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.playlist.get(self.current_index)
    }

    #[cfg(test)]
    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlayerState::Playing
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn autoplay(&self) -> bool {
        self.autoplay
    }

    pub fn set_autoplay(&mut self, enabled: bool) {
        self.autoplay = enabled;
    }

    pub fn cover_src(&self) -> &str {
        &self.cover_src
    }

    pub fn duration(&self) -> Option<f64> {
        self.duration
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn progress_percent(&self) -> f64 {
        progress_percent(self.position, self.duration.unwrap_or(f64::NAN))
    }

    pub fn elapsed_text(&self) -> String {
        match self.duration {
            Some(_) => format_time(self.position),
            None => "0:00".to_string(),
        }
    }

    pub fn duration_text(&self) -> String {
        format_time(self.duration.unwrap_or(f64::NAN))
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn play_glyph(&self) -> &'static str {
        if self.is_playing() {
            PAUSE_GLYPH
        } else {
            PLAY_GLYPH
        }
    }

    pub fn play_label(&self) -> &'static str {
        if self.is_playing() {
            "Pause"
        } else {
            "Play"
        }
    }

    /// Bind a track to the media element. Indices wrap around the playlist.
    pub fn load_song(&mut self, index: isize, play_now: bool) -> Vec<MediaCommand> {
        let Some(index) = wrap_index(index, self.playlist.len()) else {
            warn!("load_song called with an empty playlist");
            return Vec::new();
        };
        let track = &self.playlist[index];
        let src = track.encoded_src();
        debug!(index, src = %src, play_now, "loading track");

        self.current_index = index;
        self.cover_src = track.cover_src(&self.placeholder_cover);
        self.cover_failed = false;
        self.duration = None;
        self.position = 0.0;
        self.status = None;
        self.pending = None;
        self.state = PlayerState::Loaded;

        let mut commands = vec![MediaCommand::SetSource(src), MediaCommand::Load];
        if play_now {
            commands.extend(self.play());
        } else {
            commands.extend(self.pause());
        }
        commands
    }

    /// Ask the host to start playback. The state only becomes `Playing` once
    /// the outcome arrives through [`Player::finish_play`].
    pub fn play(&mut self) -> Vec<MediaCommand> {
        if self.state == PlayerState::Idle {
            return Vec::new();
        }
        let ticket = PlayTicket(self.next_ticket);
        self.next_ticket += 1;
        self.pending = Some(ticket);
        vec![MediaCommand::Play(ticket)]
    }

    /// Outcome of a start-playback request. Returns whether it was applied.
    pub fn finish_play(&mut self, ticket: PlayTicket, result: Result<(), PlaybackError>) -> bool {
        if self.pending != Some(ticket) {
            debug!(?ticket, "ignoring outcome of a superseded play request");
            return false;
        }
        self.pending = None;
        match result {
            Ok(()) => self.state = PlayerState::Playing,
            Err(err) => {
                warn!("Playback failed: {err}");
                self.state = PlayerState::Loaded;
            }
        }
        true
    }

    pub fn pause(&mut self) -> Vec<MediaCommand> {
        self.pending = None;
        if self.state == PlayerState::Playing {
            self.state = PlayerState::Loaded;
        }
        vec![MediaCommand::Pause]
    }

    pub fn toggle(&mut self) -> Vec<MediaCommand> {
        if self.is_playing() {
            self.pause()
        } else {
            self.play()
        }
    }

    pub fn next(&mut self) -> Vec<MediaCommand> {
        self.load_song(self.current_index as isize + 1, true)
    }

    pub fn prev(&mut self) -> Vec<MediaCommand> {
        self.load_song(self.current_index as isize - 1, true)
    }

    /// The current track finished playing.
    pub fn on_ended(&mut self) -> Vec<MediaCommand> {
        if self.autoplay {
            return self.next();
        }
        let mut commands = self.pause();
        self.position = 0.0;
        commands.push(MediaCommand::Seek(0.0));
        commands
    }

    pub fn on_loaded_metadata(&mut self, duration: f64) {
        self.duration = known_duration(duration);
    }

    pub fn on_time_update(&mut self, current_time: f64, duration: f64) {
        self.duration = known_duration(duration);
        self.position = if current_time.is_finite() {
            current_time.max(0.0)
        } else {
            0.0
        };
    }

    /// Seek from a pointer position over the progress track. Without a known
    /// duration nothing moves.
    pub fn seek(&mut self, pointer_x: f64, track_left: f64, track_width: f64) -> Vec<MediaCommand> {
        let fraction = if track_width > 0.0 {
            ((pointer_x - track_left) / track_width).clamp(0.0, 1.0)
        } else {
            0.0
        };
        match self.duration {
            Some(duration) => {
                self.position = fraction * duration;
                vec![MediaCommand::Seek(self.position)]
            }
            None => Vec::new(),
        }
    }

    /// Arrow-key seeking on the focused progress track.
    pub fn seek_key(&mut self, key: &str) -> Vec<MediaCommand> {
        let Some(duration) = self.duration else {
            return Vec::new();
        };
        let step = (duration * SEEK_KEY_FRACTION).floor().max(1.0);
        let target = match key {
            "ArrowRight" => (self.position + step).min(duration),
            "ArrowLeft" => (self.position - step).max(0.0),
            _ => return Vec::new(),
        };
        self.position = target;
        vec![MediaCommand::Seek(target)]
    }

    pub fn set_volume(&mut self, volume: f64) -> Vec<MediaCommand> {
        if !volume.is_finite() {
            return Vec::new();
        }
        self.volume = volume.clamp(0.0, 1.0);
        vec![MediaCommand::SetVolume(self.volume)]
    }

    /// The media element failed to load the current source. Playback stays on
    /// this track.
    pub fn on_media_error(&mut self, kind: MediaErrorKind) {
        let Some(track) = self.playlist.get(self.current_index) else {
            return;
        };
        let err = PlaybackError::MediaLoad {
            src: track.encoded_src(),
            kind,
        };
        error!("Audio load error: {err}");
        self.status = Some(format!(
            "Error loading audio for \"{}\". Check path or file.",
            track.display_title()
        ));
        self.pending = None;
        if self.state == PlayerState::Playing {
            self.state = PlayerState::Loaded;
        }
    }

    /// Swap a broken cover for the placeholder. Returns whether the cover
    /// changed; the placeholder itself failing is left alone.
    pub fn on_cover_error(&mut self) -> bool {
        if self.cover_failed {
            return false;
        }
        warn!("Cover failed to load: {}", self.cover_src);
        self.cover_failed = true;
        self.cover_src = self.placeholder_cover.clone();
        true
    }

    /// Realign with the media element when it was paused or resumed outside
    /// the player controls.
    pub fn sync_paused(&mut self, paused: bool) {
        match (paused, self.state) {
            (true, PlayerState::Playing) => self.state = PlayerState::Loaded,
            (false, PlayerState::Loaded) if self.pending.is_none() => {
                self.state = PlayerState::Playing
            }
            _ => {}
        }
    }
}

fn known_duration(duration: f64) -> Option<f64> {
    (duration.is_finite() && duration > 0.0).then_some(duration)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(autoplay: bool) -> PlayerSettings {
        PlayerSettings {
            initial_volume: 0.8,
            autoplay,
            placeholder_cover: "img/cover-placeholder.jpg".to_string(),
        }
    }

    fn three_tracks() -> Vec<Track> {
        vec![
            Track::new("One", "Artist A", "music/one.mp3", "img/one.png"),
            Track::new("Two", "Artist B", "music/two track.mp3", "img/two.png"),
            Track::new("Three", "Artist C", "music/three.mp3", "img/three.png"),
        ]
    }

    fn mounted(autoplay: bool) -> Player {
        let mut player = Player::new(three_tracks(), &settings(autoplay));
        player.mount();
        player
    }

    fn play_ticket(commands: &[MediaCommand]) -> PlayTicket {
        commands
            .iter()
            .find_map(|command| match command {
                MediaCommand::Play(ticket) => Some(*ticket),
                _ => None,
            })
            .expect("expected a play command")
    }

    /// Load a track, start it and confirm playback.
    fn start_track(player: &mut Player, index: isize) {
        let commands = player.load_song(index, true);
        let ticket = play_ticket(&commands);
        assert!(player.finish_play(ticket, Ok(())));
    }

    #[test]
    fn mount_sets_volume_and_loads_first_track_paused() {
        let mut player = Player::new(three_tracks(), &settings(false));
        assert_eq!(player.state(), PlayerState::Idle);
        let commands = player.mount();
        assert_eq!(
            commands,
            vec![
                MediaCommand::SetVolume(0.8),
                MediaCommand::SetSource("music/one.mp3".to_string()),
                MediaCommand::Load,
                MediaCommand::Pause,
            ]
        );
        assert_eq!(player.state(), PlayerState::Loaded);
        assert_eq!(player.play_glyph(), PLAY_GLYPH);
    }

    #[test]
    fn load_song_wraps_out_of_range_indices() {
        let mut player = mounted(false);
        player.load_song(-1, false);
        assert_eq!(player.current_index(), 2);
        player.load_song(3, false);
        assert_eq!(player.current_index(), 0);
    }

    #[test]
    fn load_song_encodes_paths_and_resets_duration() {
        let mut player = mounted(false);
        player.on_loaded_metadata(180.0);
        let commands = player.load_song(1, false);
        assert_eq!(
            commands[0],
            MediaCommand::SetSource("music/two%20track.mp3".to_string())
        );
        assert_eq!(player.cover_src(), "img/two.png");
        assert_eq!(player.duration_text(), "0:00");
        assert_eq!(player.current_track().unwrap().display_artist(), "Artist B");
    }

    #[test]
    fn play_waits_for_the_outcome() {
        let mut player = mounted(false);
        let ticket = play_ticket(&player.play());
        assert_eq!(player.state(), PlayerState::Loaded);
        assert!(player.finish_play(ticket, Ok(())));
        assert!(player.is_playing());
        assert_eq!(player.play_glyph(), PAUSE_GLYPH);
        assert_eq!(player.play_label(), "Pause");
    }

    #[test]
    fn rejected_play_stays_paused() {
        let mut player = mounted(false);
        let ticket = play_ticket(&player.play());
        player.finish_play(
            ticket,
            Err(PlaybackError::Rejected("NotAllowedError".to_string())),
        );
        assert_eq!(player.state(), PlayerState::Loaded);
        assert_eq!(player.play_glyph(), PLAY_GLYPH);
        assert!(player.status().is_none());
    }

    #[test]
    fn superseded_play_outcome_is_ignored() {
        let mut player = mounted(false);
        let stale = play_ticket(&player.play());
        let fresh = play_ticket(&player.next());
        assert!(!player.finish_play(stale, Ok(())));
        assert_eq!(player.state(), PlayerState::Loaded);
        assert!(player.finish_play(fresh, Ok(())));
        assert!(player.is_playing());
    }

    #[test]
    fn pause_and_toggle() {
        let mut player = mounted(false);
        start_track(&mut player, 0);
        assert_eq!(player.toggle(), vec![MediaCommand::Pause]);
        assert_eq!(player.state(), PlayerState::Loaded);
        assert!(matches!(player.toggle().as_slice(), [MediaCommand::Play(_)]));
    }

    #[test]
    fn next_and_prev_always_play() {
        let mut player = mounted(false);
        let commands = player.prev();
        assert_eq!(player.current_index(), 2);
        play_ticket(&commands);
        let commands = player.next();
        assert_eq!(player.current_index(), 0);
        play_ticket(&commands);
    }

    #[test]
    fn ended_without_autoplay_rewinds_same_track() {
        let mut player = mounted(false);
        start_track(&mut player, 2);
        player.on_time_update(200.0, 200.0);

        let commands = player.on_ended();
        assert_eq!(commands, vec![MediaCommand::Pause, MediaCommand::Seek(0.0)]);
        assert_eq!(player.current_index(), 2);
        assert_eq!(player.state(), PlayerState::Loaded);
        assert_eq!(player.position(), 0.0);
    }

    #[test]
    fn ended_with_autoplay_advances_and_plays() {
        let mut player = mounted(true);
        start_track(&mut player, 2);

        let commands = player.on_ended();
        assert_eq!(player.current_index(), 0);
        assert_eq!(
            commands[0],
            MediaCommand::SetSource("music/one.mp3".to_string())
        );
        let ticket = play_ticket(&commands);
        assert!(player.finish_play(ticket, Ok(())));
        assert!(player.is_playing());
    }

    #[test]
    fn seek_at_midpoint() {
        let mut player = mounted(false);
        player.on_loaded_metadata(200.0);
        let commands = player.seek(250.0, 50.0, 400.0);
        assert_eq!(commands, vec![MediaCommand::Seek(100.0)]);
        assert_eq!(player.progress_percent(), 50.0);
        assert_eq!(player.elapsed_text(), "1:40");
    }

    #[test]
    fn seek_clamps_and_needs_duration() {
        let mut player = mounted(false);
        assert!(player.seek(100.0, 0.0, 400.0).is_empty());
        player.on_loaded_metadata(120.0);
        assert_eq!(player.seek(-20.0, 0.0, 400.0), vec![MediaCommand::Seek(0.0)]);
        assert_eq!(player.seek(900.0, 0.0, 400.0), vec![MediaCommand::Seek(120.0)]);
    }

    #[test]
    fn arrow_keys_step_by_five_percent() {
        let mut player = mounted(false);
        assert!(player.seek_key("ArrowRight").is_empty());

        player.on_time_update(100.0, 200.0);
        assert_eq!(player.seek_key("ArrowRight"), vec![MediaCommand::Seek(110.0)]);
        assert_eq!(player.seek_key("ArrowLeft"), vec![MediaCommand::Seek(100.0)]);

        player.on_time_update(198.0, 200.0);
        assert_eq!(player.seek_key("ArrowRight"), vec![MediaCommand::Seek(200.0)]);

        // short tracks still move by at least one second
        player.on_time_update(0.5, 10.0);
        assert_eq!(player.seek_key("ArrowLeft"), vec![MediaCommand::Seek(0.0)]);
        assert_eq!(player.seek_key("ArrowRight"), vec![MediaCommand::Seek(1.0)]);
        assert!(player.seek_key("ArrowUp").is_empty());
    }

    #[test]
    fn time_update_without_duration_shows_zero() {
        let mut player = mounted(false);
        player.on_time_update(12.0, f64::NAN);
        assert_eq!(player.progress_percent(), 0.0);
        assert_eq!(player.elapsed_text(), "0:00");

        player.on_time_update(30.0, 120.0);
        assert_eq!(player.progress_percent(), 25.0);
        assert_eq!(player.elapsed_text(), "0:30");
        assert_eq!(player.duration_text(), "2:00");
    }

    #[test]
    fn volume_is_clamped() {
        let mut player = mounted(false);
        assert_eq!(player.set_volume(1.5), vec![MediaCommand::SetVolume(1.0)]);
        assert_eq!(player.set_volume(0.25), vec![MediaCommand::SetVolume(0.25)]);
        assert!(player.set_volume(f64::NAN).is_empty());
        assert_eq!(player.volume(), 0.25);
    }

    #[test]
    fn media_error_reports_track_and_does_not_advance() {
        let mut player = mounted(false);
        start_track(&mut player, 1);
        player.on_media_error(MediaErrorKind::Network);
        assert_eq!(
            player.status(),
            Some("Error loading audio for \"Two\". Check path or file.")
        );
        assert_eq!(player.current_index(), 1);
        assert_eq!(player.state(), PlayerState::Loaded);

        player.load_song(2, false);
        assert!(player.status().is_none());
    }

    #[test]
    fn cover_falls_back_to_placeholder_once() {
        let mut player = mounted(false);
        assert!(player.on_cover_error());
        assert_eq!(player.cover_src(), "img/cover-placeholder.jpg");
        assert!(!player.on_cover_error());
    }

    #[test]
    fn external_pause_is_mirrored() {
        let mut player = mounted(false);
        start_track(&mut player, 0);
        player.sync_paused(true);
        assert_eq!(player.state(), PlayerState::Loaded);
        player.sync_paused(false);
        assert!(player.is_playing());
    }

    #[test]
    fn space_is_ignored_in_text_fields() {
        assert!(space_toggles_playback("Space", Some("BODY")));
        assert!(space_toggles_playback("Space", None));
        assert!(!space_toggles_playback("Space", Some("INPUT")));
        assert!(!space_toggles_playback("Space", Some("textarea")));
        assert!(!space_toggles_playback("KeyK", Some("body")));
    }

    #[test]
    fn empty_playlist_never_leaves_idle() {
        let mut player = Player::new(Vec::new(), &settings(true));
        assert_eq!(player.mount(), vec![MediaCommand::SetVolume(0.8)]);
        assert!(player.play().is_empty());
        assert!(player.next().is_empty());
        assert_eq!(player.state(), PlayerState::Idle);
    }

    #[test]
    fn slider_values_follow_time_updates_and_reset_on_load() {
        let mut player = mounted(false);
        assert_eq!(player.duration(), None);
        player.on_time_update(30.0, 120.0);
        assert_eq!(player.position(), 30.0);
        assert_eq!(player.duration(), Some(120.0));
        player.on_time_update(f64::NAN, f64::INFINITY);
        assert_eq!(player.position(), 0.0);
        assert_eq!(player.duration(), None);
        player.on_time_update(10.0, 60.0);
        player.load_song(1, false);
        assert_eq!(player.position(), 0.0);
        assert_eq!(player.duration(), None);
    }
}
