#![no_std]

pub mod channel;
pub mod config;
pub mod hook;
pub mod sampler;
pub mod trigger;

pub use channel::{ModeChannel, ModeCommand, ModeReceiver, ModeSender};
pub use config::{ConfigLoad, SettingsStore, TriggerConfig};
pub use hook::{Hook, LoveButton};
pub use sampler::{BusError, InputDriver, InputSampler, Level};
pub use trigger::{DEBOUNCE_DWELL, PressTrigger, TriggerMode};

pub use embassy_time::{Duration, Instant};

/// Identifier of a stored visual preset understood by the host's
/// mode controller.
pub type PresetId = u16;

/// Abstract mode controller trait
///
/// Implement this trait to route preset activations into the host's
/// rendering pipeline. Activation is fire-and-forget: the trigger never
/// observes a failure.
pub trait ModeController {
    /// Switch the display to the given preset
    fn activate(&mut self, preset: PresetId);
}
