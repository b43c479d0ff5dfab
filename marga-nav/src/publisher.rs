//! Line-oriented command output.

use std::io::Write;

use marga::executor::{CommandPublisher, PublishError, VelocityCommand};

/// Writes one `linear,angular` line per command.
pub struct StdoutPublisher<W: Write> {
    out: W,
}

impl StdoutPublisher<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> StdoutPublisher<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> CommandPublisher for StdoutPublisher<W> {
    fn publish(&mut self, command: VelocityCommand) -> Result<(), PublishError> {
        writeln!(self.out, "{:.3},{:.3}", command.linear, command.angular)?;
        // Stops must reach the consumer immediately
        if command.is_stop() {
            self.out.flush()?;
        }
        Ok(())
    }
}
