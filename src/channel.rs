//! Bounded mode-command channel for `no_std` environments.
//!
//! Carries preset activations from the trigger's poll context to the
//! host's render task. Built on `critical-section` and `heapless::Deque`,
//! so it is safe to drain from an interrupt or a different task.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::{ModeController, PresetId};

/// Command emitted by the trigger towards the host's display pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeCommand {
    /// Switch the display to the given preset
    Activate(PresetId),
}

/// Error returned when trying to send to a full channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrySendError(pub ModeCommand);

/// Error returned when trying to receive from an empty channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

/// A bounded, thread-safe channel of [`ModeCommand`]s.
///
/// Synchronized with critical sections, making it suitable for embedded
/// environments. Backed by a fixed-size `heapless::Deque`.
pub struct ModeChannel<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<ModeCommand, SIZE>>>,
}

impl<const SIZE: usize> ModeChannel<SIZE> {
    /// Create a new empty channel.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sender handle for this channel.
    pub const fn sender(&self) -> ModeSender<'_, SIZE> {
        ModeSender { channel: self }
    }

    /// Get a receiver handle for this channel.
    ///
    /// Typically only the host's render task drains the queue.
    pub const fn receiver(&self) -> ModeReceiver<'_, SIZE> {
        ModeReceiver { channel: self }
    }

    /// Try to send a command into the channel.
    ///
    /// Returns `Err(TrySendError(command))` if the channel is full.
    pub fn try_send(&self, command: ModeCommand) -> Result<(), TrySendError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(command).map_err(TrySendError)
        })
    }

    /// Try to receive a command from the channel.
    ///
    /// Returns `Err(TryReceiveError)` if the channel is empty.
    pub fn try_receive(&self) -> Result<ModeCommand, TryReceiveError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front().ok_or(TryReceiveError)
        })
    }
}

impl<const SIZE: usize> Default for ModeChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// A sender handle for a [`ModeChannel`].
///
/// This is a lightweight reference that can be cloned and passed around.
#[derive(Clone, Copy)]
pub struct ModeSender<'a, const SIZE: usize> {
    channel: &'a ModeChannel<SIZE>,
}

impl<const SIZE: usize> ModeSender<'_, SIZE> {
    /// Try to send a command into the channel.
    pub fn try_send(&self, command: ModeCommand) -> Result<(), TrySendError> {
        self.channel.try_send(command)
    }
}

/// Activations are fire-and-forget: a full channel drops the command.
impl<const SIZE: usize> ModeController for ModeSender<'_, SIZE> {
    fn activate(&mut self, preset: PresetId) {
        let _ = self.try_send(ModeCommand::Activate(preset));
    }
}

/// A receiver handle for a [`ModeChannel`].
///
/// This is a lightweight reference that can be cloned and passed around.
#[derive(Clone, Copy)]
pub struct ModeReceiver<'a, const SIZE: usize> {
    channel: &'a ModeChannel<SIZE>,
}

impl<const SIZE: usize> ModeReceiver<'_, SIZE> {
    /// Try to receive a command from the channel.
    pub fn try_receive(&self) -> Result<ModeCommand, TryReceiveError> {
        self.channel.try_receive()
    }
}
