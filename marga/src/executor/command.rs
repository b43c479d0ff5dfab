//! Velocity commands and the publisher boundary.

use std::sync::mpsc::Sender;

use thiserror::Error;

/// Twist-style velocity command.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VelocityCommand {
    /// Forward velocity (m/s)
    pub linear: f32,
    /// Angular velocity (rad/s), CCW positive
    pub angular: f32,
}

impl VelocityCommand {
    #[inline]
    pub const fn new(linear: f32, angular: f32) -> Self {
        Self { linear, angular }
    }

    /// All-zero command.
    #[inline]
    pub const fn stop() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Pure rotation in place.
    #[inline]
    pub const fn rotate(angular: f32) -> Self {
        Self::new(0.0, angular)
    }

    /// Pure forward motion.
    #[inline]
    pub const fn forward(linear: f32) -> Self {
        Self::new(linear, 0.0)
    }

    pub fn is_stop(&self) -> bool {
        self.linear == 0.0 && self.angular == 0.0
    }
}

/// Failure to hand a command to the robot middleware.
#[derive(Error, Debug)]
pub enum PublishError {
    #[error("command receiver disconnected")]
    Disconnected,

    #[error("publish I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Sink for velocity commands.
///
/// Implement this for whatever carries commands to the base (a middleware
/// topic, a serial link, a simulator).
pub trait CommandPublisher {
    /// Send one command. Errors are reported to the caller, never retried.
    fn publish(&mut self, command: VelocityCommand) -> Result<(), PublishError>;
}

impl<P: CommandPublisher + ?Sized> CommandPublisher for &mut P {
    fn publish(&mut self, command: VelocityCommand) -> Result<(), PublishError> {
        (**self).publish(command)
    }
}

/// Keeps every published command in memory.
#[derive(Clone, Debug, Default)]
pub struct RecordingPublisher {
    commands: Vec<VelocityCommand>,
}

impl RecordingPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands in publish order.
    pub fn commands(&self) -> &[VelocityCommand] {
        &self.commands
    }

    pub fn last(&self) -> Option<VelocityCommand> {
        self.commands.last().copied()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl CommandPublisher for RecordingPublisher {
    fn publish(&mut self, command: VelocityCommand) -> Result<(), PublishError> {
        self.commands.push(command);
        Ok(())
    }
}

/// Forwards commands over an `mpsc` channel.
#[derive(Clone, Debug)]
pub struct ChannelPublisher {
    tx: Sender<VelocityCommand>,
}

impl ChannelPublisher {
    pub fn new(tx: Sender<VelocityCommand>) -> Self {
        Self { tx }
    }
}

impl CommandPublisher for ChannelPublisher {
    fn publish(&mut self, command: VelocityCommand) -> Result<(), PublishError> {
        self.tx
            .send(command)
            .map_err(|_| PublishError::Disconnected)
    }
}
