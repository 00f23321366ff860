//! Trigger configuration and its key/value persistence.
//!
//! The host owns a generic settings store; this module maps the trigger's
//! fields onto it key by key. Loading tolerates a missing section (first
//! boot) and partially present sections by defaulting field-wise.

use embassy_time::Duration;

use crate::PresetId;

const KEY_ENABLED: &str = "enabled";
const KEY_PRESSES_TO_LOVE: &str = "presses_to_love";
const KEY_LOVE_TIMEOUT_MS: &str = "love_timeout_ms";
const KEY_LOVE_PRESET: &str = "love_preset";
const KEY_NORMAL_PRESET: &str = "normal_preset";

const DEFAULT_ENABLED: bool = false;
const DEFAULT_PRESSES_TO_LOVE: u16 = 10;
const DEFAULT_LOVE_TIMEOUT_MS: u16 = 2500;
const DEFAULT_LOVE_PRESET: PresetId = 10;
const DEFAULT_NORMAL_PRESET: PresetId = 1;

/// Abstract key/value settings store provided by the host.
///
/// Reads return `None` for absent keys; values are already clamped to
/// their storage width, so no further range validation happens here.
pub trait SettingsStore {
    fn read_bool(&self, key: &str) -> Option<bool>;
    fn read_u16(&self, key: &str) -> Option<u16>;
    fn write_bool(&mut self, key: &str, value: bool);
    fn write_u16(&mut self, key: &str, value: u16);
}

/// Configuration of the press trigger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerConfig {
    /// Master on/off switch
    pub enabled: bool,
    /// Press-edge count required to trigger
    pub presses_to_love: u16,
    /// Milliseconds before auto-revert; 0 means revert only on an
    /// explicit external request
    pub love_timeout_ms: u16,
    /// Preset activated when the trigger fires
    pub love_preset: PresetId,
    /// Preset restored when love mode ends
    pub normal_preset: PresetId,
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_ENABLED,
            presses_to_love: DEFAULT_PRESSES_TO_LOVE,
            love_timeout_ms: DEFAULT_LOVE_TIMEOUT_MS,
            love_preset: DEFAULT_LOVE_PRESET,
            normal_preset: DEFAULT_NORMAL_PRESET,
        }
    }
}

/// Result of loading configuration from the settings store
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: TriggerConfig,
    /// True iff every field was present in the store. The host uses this
    /// to decide whether to persist the defaults back.
    pub complete: bool,
}

impl TriggerConfig {
    /// Load configuration from the host's settings store.
    ///
    /// Missing fields fall back to their documented defaults one by one,
    /// so a partial section is never fatal.
    pub fn load_from(store: &dyn SettingsStore) -> ConfigLoad {
        let mut complete = true;

        let enabled = match store.read_bool(KEY_ENABLED) {
            Some(value) => value,
            None => {
                complete = false;
                DEFAULT_ENABLED
            }
        };

        let config = Self {
            enabled,
            presses_to_love: field_u16(
                store,
                KEY_PRESSES_TO_LOVE,
                DEFAULT_PRESSES_TO_LOVE,
                &mut complete,
            ),
            love_timeout_ms: field_u16(
                store,
                KEY_LOVE_TIMEOUT_MS,
                DEFAULT_LOVE_TIMEOUT_MS,
                &mut complete,
            ),
            love_preset: field_u16(store, KEY_LOVE_PRESET, DEFAULT_LOVE_PRESET, &mut complete),
            normal_preset: field_u16(
                store,
                KEY_NORMAL_PRESET,
                DEFAULT_NORMAL_PRESET,
                &mut complete,
            ),
        };

        ConfigLoad { config, complete }
    }

    /// Persist every field to the host's settings store
    pub fn save_to(&self, store: &mut dyn SettingsStore) {
        store.write_bool(KEY_ENABLED, self.enabled);
        store.write_u16(KEY_PRESSES_TO_LOVE, self.presses_to_love);
        store.write_u16(KEY_LOVE_TIMEOUT_MS, self.love_timeout_ms);
        store.write_u16(KEY_LOVE_PRESET, self.love_preset);
        store.write_u16(KEY_NORMAL_PRESET, self.normal_preset);
    }

    /// Auto-revert timeout, or `None` when reverting is manual-only
    pub fn love_timeout(&self) -> Option<Duration> {
        if self.love_timeout_ms == 0 {
            None
        } else {
            Some(Duration::from_millis(u64::from(self.love_timeout_ms)))
        }
    }
}

fn field_u16(store: &dyn SettingsStore, key: &str, default: u16, complete: &mut bool) -> u16 {
    match store.read_u16(key) {
        Some(value) => value,
        None => {
            *complete = false;
            default
        }
    }
}
