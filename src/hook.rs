//! Host lifecycle hook and the assembled button component.
//!
//! The host's dispatcher drives registered hooks through a small set of
//! lifecycle calls. All methods default to no-ops so implementors only
//! override what they need.

use embassy_time::Instant;

use crate::ModeController;
use crate::config::{ConfigLoad, SettingsStore, TriggerConfig};
use crate::sampler::{InputDriver, InputSampler};
use crate::trigger::PressTrigger;

/// Lifecycle operations invoked by the host
pub trait Hook {
    /// Called once at boot, after configuration has been loaded
    fn initialize(&mut self) {}

    /// Called continuously from the host's control loop
    fn poll(&mut self, _now: Instant) {}

    /// Load configuration from the host's settings store.
    ///
    /// Returns true iff every expected field was present.
    fn load_config(&mut self, _store: &dyn SettingsStore) -> bool {
        true
    }

    /// Persist configuration to the host's settings store
    fn save_config(&self, _store: &mut dyn SettingsStore) {}
}

/// The assembled love-button component: one sampled input line feeding
/// the press trigger, with activations routed to the host's display.
///
/// Constructed explicitly by the host's composition root and passed by
/// handle into the poll entry point, so tests can run any number of
/// independent instances.
pub struct LoveButton<D: InputDriver, M: ModeController> {
    sampler: InputSampler<D>,
    trigger: PressTrigger,
    modes: M,
}

impl<D: InputDriver, M: ModeController> LoveButton<D, M> {
    pub const fn new(driver: D, pin: u8, config: TriggerConfig, modes: M) -> Self {
        Self {
            sampler: InputSampler::new(driver, pin),
            trigger: PressTrigger::new(config),
            modes,
        }
    }

    /// The press trigger for external observation
    pub const fn trigger(&self) -> &PressTrigger {
        &self.trigger
    }

    /// Mutable trigger access, e.g. for settings changes
    pub const fn trigger_mut(&mut self) -> &mut PressTrigger {
        &mut self.trigger
    }

    /// The underlying input sampler
    pub const fn sampler(&self) -> &InputSampler<D> {
        &self.sampler
    }

    /// External revert request, used when auto-revert is disabled
    pub fn revert(&mut self) {
        self.trigger.revert(&mut self.modes);
    }
}

impl<D: InputDriver, M: ModeController> Hook for LoveButton<D, M> {
    /// Probe the expander. Absent hardware is not fatal: the feature
    /// silently stays inactive for this session.
    fn initialize(&mut self) {
        let _ = self.sampler.initialize();
    }

    fn poll(&mut self, now: Instant) {
        if !self.sampler.is_connected() {
            return;
        }
        let level = self.sampler.sample();
        self.trigger.poll(level, now, &mut self.modes);
    }

    fn load_config(&mut self, store: &dyn SettingsStore) -> bool {
        let ConfigLoad { config, complete } = TriggerConfig::load_from(store);
        *self.trigger.config_mut() = config;
        complete
    }

    fn save_config(&self, store: &mut dyn SettingsStore) {
        self.trigger.config().save_to(store);
    }
}
