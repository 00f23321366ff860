//! Press-counting state machine
//!
//! Turns a stream of sampled levels into press counts and mode
//! transitions. Counting only rising edges keeps one physical press at
//! one count; the dwell filter rejects contact bounce.

use embassy_time::{Duration, Instant};

use crate::ModeController;
use crate::config::TriggerConfig;
use crate::sampler::Level;

/// Minimum time between accepted press edges. Anything faster is treated
/// as contact bounce.
pub const DEBOUNCE_DWELL: Duration = Duration::from_millis(30);

/// Mode the trigger currently holds the display in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerMode {
    Normal,
    Love,
}

/// Press-counting trigger
///
/// Owns its configuration and all mutable state. Mutated only from
/// [`poll`](Self::poll), which runs on the host's single control thread,
/// so no synchronization is needed.
pub struct PressTrigger {
    config: TriggerConfig,
    mode: TriggerMode,
    press_count: u16,
    entered_at: Option<Instant>,
    last_level: Level,
    last_edge_at: Option<Instant>,
}

impl PressTrigger {
    /// Create a trigger in `Normal` mode with a zero press count.
    ///
    /// The line is assumed high at boot so a button held down during
    /// power-up does not count as a press.
    pub const fn new(config: TriggerConfig) -> Self {
        Self {
            config,
            mode: TriggerMode::Normal,
            press_count: 0,
            entered_at: None,
            last_level: Level::High,
            last_edge_at: None,
        }
    }

    /// Process one sampled level.
    ///
    /// This is the only state-mutating entry point besides
    /// [`revert`](Self::revert). It never blocks and never fails; when the
    /// feature is disabled it returns immediately.
    pub fn poll(&mut self, level: Level, now: Instant, modes: &mut impl ModeController) {
        if !self.config.enabled {
            return;
        }

        let rising = self.last_level == Level::Low && level == Level::High;
        if rising && self.accepts_edge(now) {
            self.last_edge_at = Some(now);
            self.on_press(now, modes);
        }

        if self.mode == TriggerMode::Love {
            self.tick_timeout(now, modes);
        }

        self.last_level = level;
    }

    /// Force the trigger back to `Normal`, restoring the normal preset.
    ///
    /// This is the external revert path for configurations with
    /// `love_timeout_ms == 0`. No-op while already in `Normal`.
    pub fn revert(&mut self, modes: &mut impl ModeController) {
        if self.mode == TriggerMode::Love {
            modes.activate(self.config.normal_preset);
            self.mode = TriggerMode::Normal;
            self.entered_at = None;
        }
    }

    /// Current configuration
    pub const fn config(&self) -> &TriggerConfig {
        &self.config
    }

    /// Mutable access for settings changes at runtime
    pub const fn config_mut(&mut self) -> &mut TriggerConfig {
        &mut self.config
    }

    /// Current mode for external observation
    pub const fn mode(&self) -> TriggerMode {
        self.mode
    }

    /// Presses accumulated since the last trigger
    pub const fn press_count(&self) -> u16 {
        self.press_count
    }

    fn accepts_edge(&self, now: Instant) -> bool {
        match self.last_edge_at {
            Some(at) => now - at >= DEBOUNCE_DWELL,
            None => true,
        }
    }

    /// Count one accepted press edge; presses while in `Love` are ignored.
    fn on_press(&mut self, now: Instant, modes: &mut impl ModeController) {
        if self.mode != TriggerMode::Normal {
            return;
        }
        self.press_count += 1;
        if self.press_count >= self.config.presses_to_love {
            modes.activate(self.config.love_preset);
            self.mode = TriggerMode::Love;
            self.entered_at = Some(now);
            self.press_count = 0;
        }
    }

    fn tick_timeout(&mut self, now: Instant, modes: &mut impl ModeController) {
        let Some(timeout) = self.config.love_timeout() else {
            return;
        };
        let Some(entered_at) = self.entered_at else {
            return;
        };
        if now - entered_at >= timeout {
            modes.activate(self.config.normal_preset);
            self.mode = TriggerMode::Normal;
            self.entered_at = None;
        }
    }
}
