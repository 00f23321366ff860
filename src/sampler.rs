//! Input sampling module
//!
//! Wraps the vendor driver for an I2C GPIO expander behind a capability
//! trait so the press-counting state machine never touches a real bus.

#[cfg(feature = "esp32-log")]
use esp_println::println;

/// Pin index the button is wired to on the expander, unless overridden.
pub const DEFAULT_BUTTON_PIN: u8 = 0;

/// Instantaneous logic level of the monitored line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Low,
    High,
}

/// Error returned when the expander does not answer on the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusError;

/// Abstract expander driver trait
///
/// Implement this trait to support different expander chips or bus
/// transports. The sampler is generic over this trait.
pub trait InputDriver {
    /// Establish communication with the expander
    fn connect(&mut self) -> Result<(), BusError>;

    /// Read the logic level of one input pin
    fn read_pin(&mut self, pin: u8) -> Result<Level, BusError>;
}

/// Polled reader for one digital input line on an I/O expander.
///
/// `connected` is decided once during [`initialize`](Self::initialize) and
/// never changes afterward; a chip that is absent at boot stays absent for
/// the whole session, so the bus is never touched again.
pub struct InputSampler<D: InputDriver> {
    driver: D,
    pin: u8,
    connected: bool,
    last_level: Level,
}

impl<D: InputDriver> InputSampler<D> {
    /// Create a sampler for one pin. No bus traffic happens here.
    pub const fn new(driver: D, pin: u8) -> Self {
        Self {
            driver,
            pin,
            connected: false,
            last_level: Level::Low,
        }
    }

    /// Attempt to establish communication with the expander.
    ///
    /// Called once at boot. On failure the sampler stays disconnected for
    /// the rest of the session and [`sample`](Self::sample) becomes a no-op;
    /// the error is also returned so the host can surface a diagnostic.
    pub fn initialize(&mut self) -> Result<(), BusError> {
        match self.driver.connect() {
            Ok(()) => {
                self.connected = true;
                #[cfg(feature = "esp32-log")]
                println!("press-trigger: expander connected");
                Ok(())
            }
            Err(err) => {
                self.connected = false;
                #[cfg(feature = "esp32-log")]
                println!("press-trigger: expander not responding, sampling disabled");
                Err(err)
            }
        }
    }

    /// Read the current level of the monitored pin.
    ///
    /// Runs inside the host's render loop, so it must complete in bounded
    /// time. When disconnected, or when a read fails mid-session, the last
    /// known level is returned unchanged and the line appears steady.
    pub fn sample(&mut self) -> Level {
        if self.connected {
            if let Ok(level) = self.driver.read_pin(self.pin) {
                self.last_level = level;
            }
        }
        self.last_level
    }

    /// Whether the expander answered during initialization
    pub const fn is_connected(&self) -> bool {
        self.connected
    }

    /// Last level observed by [`sample`](Self::sample)
    pub const fn last_level(&self) -> Level {
        self.last_level
    }
}
