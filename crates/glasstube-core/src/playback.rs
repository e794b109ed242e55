//! The playback state mirror.
//!
//! [`PlaybackMirror`] is the single source of truth for UI-visible playback
//! state. It never decodes anything: every command is forwarded to the
//! embedded widget through a [`PlayerAdapter`], and the widget's reported
//! state is mirrored back via ready/state-change callbacks and a fixed
//! 250 ms poll that runs only while playing.
//!
//! Two phases are reachable. Idle: no valid video reference, no adapter, and
//! every action is a guarded no-op. Active: a reference is loaded and the
//! adapter drives the mirror. Commands arriving before the adapter is ready
//! are silently dropped; that is the contract, not an error.

use tracing::debug;

use crate::player::{PlayerAdapter, PlayerEvent};

/// Fixed period of the position poll while playback is running.
pub const POLL_INTERVAL_MS: u32 = 250;

/// UI-facing playback state.
///
/// Invariant: `progress == current_time / duration * 100.0` whenever
/// `duration > 0`; the field is left untouched while the duration is still
/// unknown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackState {
    /// Whether the widget is currently playing.
    pub is_playing: bool,
    /// Volume, normalized to `0.0..=1.0`.
    pub volume: f64,
    /// Playback position as a percentage, `0.0..=100.0`.
    pub progress: f64,
    /// Total duration in seconds (0 while unknown).
    pub duration: f64,
    /// Playback position in seconds.
    pub current_time: f64,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            is_playing: false,
            volume: 1.0,
            progress: 0.0,
            duration: 0.0,
            current_time: 0.0,
        }
    }
}

/// Owns [`PlaybackState`] and keeps it synchronized with the adapter.
///
/// Created fresh whenever a video reference is loaded and dropped when the
/// player unmounts; nothing here outlives the owning component.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaybackMirror {
    state: PlaybackState,
}

impl PlaybackMirror {
    /// A mirror in its initial state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state snapshot.
    #[must_use]
    pub const fn state(&self) -> PlaybackState {
        self.state
    }

    /// One-shot readiness handoff from the adapter.
    ///
    /// Pulls the duration into the mirror (when already known) and pushes the
    /// mirrored volume out to the widget.
    pub fn mark_ready<P: PlayerAdapter>(&mut self, player: &P) {
        let duration = player.duration();
        if duration > 0.0 {
            self.state.duration = duration;
        }
        player.set_volume(self.state.volume);
        debug!(duration, "player ready");
    }

    /// Flip play/pause and issue the matching command.
    ///
    /// No-op while the adapter is not ready.
    pub fn toggle_play<P: PlayerAdapter>(&mut self, player: Option<&P>) {
        let Some(player) = player else { return };
        if self.state.is_playing {
            player.pause();
        } else {
            player.play();
        }
        self.state.is_playing = !self.state.is_playing;
    }

    /// Binary mute: volume 0 ↔ 1.
    ///
    /// Unmuting always restores full volume, never a remembered prior level;
    /// the state carries no memory for one.
    pub fn toggle_mute<P: PlayerAdapter>(&mut self, player: Option<&P>) {
        let Some(player) = player else { return };
        let volume = if self.state.volume > 0.0 { 0.0 } else { 1.0 };
        player.set_volume(volume);
        self.state.volume = volume;
    }

    /// Pass a volume through to the widget, clamped to `0.0..=1.0`.
    pub fn set_volume<P: PlayerAdapter>(&mut self, player: Option<&P>, volume: f64) {
        let Some(player) = player else { return };
        let volume = volume.clamp(0.0, 1.0);
        player.set_volume(volume);
        self.state.volume = volume;
    }

    /// Seek to a fractional position of the mirrored duration.
    ///
    /// `progress` and `current_time` are updated optimistically, without
    /// waiting for the widget to confirm; the next poll tick reconciles.
    pub fn seek_to_fraction<P: PlayerAdapter>(&mut self, player: Option<&P>, fraction: f64) {
        let Some(player) = player else { return };
        let fraction = fraction.clamp(0.0, 1.0);
        let target = fraction * self.state.duration;
        player.seek_to(target, true);
        self.state.current_time = target;
        self.state.progress = fraction * 100.0;
    }

    /// Apply a recognized widget state-change transition.
    pub fn apply_event(&mut self, event: PlayerEvent) {
        self.state.is_playing = match event {
            PlayerEvent::Playing => true,
            PlayerEvent::Paused => false,
        };
        debug!(?event, "widget state change");
    }

    /// One poll tick: re-read position and duration from the adapter.
    ///
    /// Strictly a no-op unless playback is running; the owning component
    /// cancels the interval outside that window as well, so the guard is the
    /// contract and the timer is the resource.
    pub fn poll_tick<P: PlayerAdapter>(&mut self, player: Option<&P>) {
        if !self.state.is_playing {
            return;
        }
        let Some(player) = player else { return };
        let current = player.current_time();
        let total = player.duration();
        self.state.current_time = current;
        if total > 0.0 {
            self.state.duration = total;
            self.state.progress = current / total * 100.0;
        }
    }
}

/// Format a position in seconds for the time label.
///
/// Renders `m:ss`, or `h:mm:ss` once an hour is reached; non-finite input
/// renders as `0:00`.
#[must_use]
pub fn format_timestamp(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }
    let total_secs = seconds as u64;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = total_secs % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::MockPlayerAdapter;

    const NO_PLAYER: Option<&MockPlayerAdapter> = None;

    #[test]
    fn test_default_state() {
        let mirror = PlaybackMirror::new();
        let state = mirror.state();
        assert!(!state.is_playing);
        assert_eq!(state.volume, 1.0);
        assert_eq!(state.progress, 0.0);
        assert_eq!(state.duration, 0.0);
        assert_eq!(state.current_time, 0.0);
    }

    #[test]
    fn test_commands_are_noops_without_adapter() {
        let mut mirror = PlaybackMirror::new();
        mirror.toggle_play(NO_PLAYER);
        mirror.toggle_mute(NO_PLAYER);
        mirror.set_volume(NO_PLAYER, 0.5);
        mirror.seek_to_fraction(NO_PLAYER, 0.5);
        assert_eq!(mirror.state(), PlaybackState::default());
    }

    #[test]
    fn test_mark_ready_syncs_duration_and_pushes_volume() {
        let mut player = MockPlayerAdapter::new();
        player.expect_duration().return_const(200.0);
        player.expect_set_volume().withf(|v| *v == 1.0).once().return_const(());

        let mut mirror = PlaybackMirror::new();
        mirror.mark_ready(&player);
        assert_eq!(mirror.state().duration, 200.0);
    }

    #[test]
    fn test_mark_ready_keeps_unknown_duration() {
        let mut player = MockPlayerAdapter::new();
        player.expect_duration().return_const(0.0);
        player.expect_set_volume().return_const(());

        let mut mirror = PlaybackMirror::new();
        mirror.mark_ready(&player);
        assert_eq!(mirror.state().duration, 0.0);
    }

    #[test]
    fn test_toggle_play_issues_commands() {
        let mut player = MockPlayerAdapter::new();
        player.expect_play().once().return_const(());
        player.expect_pause().once().return_const(());

        let mut mirror = PlaybackMirror::new();
        mirror.toggle_play(Some(&player));
        assert!(mirror.state().is_playing);
        mirror.toggle_play(Some(&player));
        assert!(!mirror.state().is_playing);
    }

    #[test]
    fn test_mute_pairs_restore_full_volume() {
        let mut player = MockPlayerAdapter::new();
        player.expect_set_volume().times(3).return_const(());

        let mut mirror = PlaybackMirror::new();
        mirror.set_volume(Some(&player), 0.37);
        mirror.toggle_mute(Some(&player));
        assert_eq!(mirror.state().volume, 0.0);
        mirror.toggle_mute(Some(&player));
        // Full volume, never the 0.37 set before muting.
        assert_eq!(mirror.state().volume, 1.0);
    }

    #[test]
    fn test_set_volume_is_clamped() {
        let mut player = MockPlayerAdapter::new();
        player.expect_set_volume().times(2).return_const(());

        let mut mirror = PlaybackMirror::new();
        mirror.set_volume(Some(&player), 1.7);
        assert_eq!(mirror.state().volume, 1.0);
        mirror.set_volume(Some(&player), -0.2);
        assert_eq!(mirror.state().volume, 0.0);
    }

    #[test]
    fn test_seek_to_fraction_updates_optimistically() {
        let mut player = MockPlayerAdapter::new();
        player.expect_duration().return_const(200.0);
        player.expect_set_volume().return_const(());
        player
            .expect_seek_to()
            .withf(|seconds, ahead| *seconds == 100.0 && *ahead)
            .once()
            .return_const(());

        let mut mirror = PlaybackMirror::new();
        mirror.mark_ready(&player);
        mirror.seek_to_fraction(Some(&player), 0.5);

        let state = mirror.state();
        assert_eq!(state.current_time, 100.0);
        assert_eq!(state.progress, 50.0);
    }

    #[test]
    fn test_seek_fraction_is_clamped() {
        let mut player = MockPlayerAdapter::new();
        player.expect_duration().return_const(100.0);
        player.expect_set_volume().return_const(());
        player
            .expect_seek_to()
            .withf(|seconds, _| *seconds == 100.0)
            .once()
            .return_const(());

        let mut mirror = PlaybackMirror::new();
        mirror.mark_ready(&player);
        mirror.seek_to_fraction(Some(&player), 1.4);
        assert_eq!(mirror.state().progress, 100.0);
    }

    #[test]
    fn test_poll_tick_is_inert_while_paused() {
        // A paused mirror must not even read from the adapter; the mock
        // panics on any unexpected call.
        let player = MockPlayerAdapter::new();
        let mut mirror = PlaybackMirror::new();
        mirror.poll_tick(Some(&player));
        assert_eq!(mirror.state(), PlaybackState::default());
    }

    #[test]
    fn test_poll_tick_recomputes_progress() {
        let mut player = MockPlayerAdapter::new();
        player.expect_current_time().return_const(30.0);
        player.expect_duration().return_const(120.0);

        let mut mirror = PlaybackMirror::new();
        mirror.apply_event(PlayerEvent::Playing);
        mirror.poll_tick(Some(&player));

        let state = mirror.state();
        assert_eq!(state.current_time, 30.0);
        assert_eq!(state.duration, 120.0);
        assert_eq!(state.progress, 25.0);
        assert_eq!(state.progress, state.current_time / state.duration * 100.0);
    }

    #[test]
    fn test_poll_tick_skips_progress_while_duration_unknown() {
        let mut player = MockPlayerAdapter::new();
        player.expect_current_time().return_const(5.0);
        player.expect_duration().return_const(0.0);

        let mut mirror = PlaybackMirror::new();
        mirror.apply_event(PlayerEvent::Playing);
        mirror.poll_tick(Some(&player));

        let state = mirror.state();
        assert_eq!(state.current_time, 5.0);
        assert_eq!(state.progress, 0.0);
    }

    #[test]
    fn test_apply_event_transitions() {
        let mut mirror = PlaybackMirror::new();
        mirror.apply_event(PlayerEvent::Playing);
        assert!(mirror.state().is_playing);
        mirror.apply_event(PlayerEvent::Paused);
        assert!(!mirror.state().is_playing);
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(0.0), "0:00");
        assert_eq!(format_timestamp(9.4), "0:09");
        assert_eq!(format_timestamp(65.0), "1:05");
        assert_eq!(format_timestamp(600.0), "10:00");
        assert_eq!(format_timestamp(3661.0), "1:01:01");
        assert_eq!(format_timestamp(f64::NAN), "0:00");
        assert_eq!(format_timestamp(-3.0), "0:00");
    }
}
