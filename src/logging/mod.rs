//! Logging statistics from simulation runs
mod cli;

pub use cli::CLILogger;

use enum_map::Enum;
use std::error::Error;
use std::fmt;

/// Simulation run events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum)]
pub enum Event {
    Step,
    Episode,
    Epoch,
}

/// A value that can be logged.
#[derive(Debug, Clone, PartialEq)]
pub enum Loggable {
    /// Nothing. No data to log.
    /// Logging Nothing data may still produce a placeholder entry for the name.
    Nothing,
    /// A scalar value. Aggregated by taking means.
    Scalar(f64),
    /// A sample from a distribution over `0 .. size - 1`.
    IndexSample { value: usize, size: usize },
}

impl From<f64> for Loggable {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

/// Log statistics from a simulation run.
pub trait Logger {
    /// Log a value.
    ///
    /// # Args
    /// * `event` - The event associated with this value.
    /// * `name` - The name that identifies this value.
    /// * `value` - The value to log.
    ///
    /// # Errors
    /// If the logged value is structurally incompatible
    /// with previous values logged under the same name.
    fn log(&mut self, event: Event, name: &'static str, value: Loggable) -> Result<(), LogError>;

    /// Mark the end of an event instance.
    fn done(&mut self, event: Event);
}

/// Logger that does nothing.
impl Logger for () {
    fn log(&mut self, _: Event, _: &'static str, _: Loggable) -> Result<(), LogError> {
        Ok(())
    }

    fn done(&mut self, _: Event) {}
}

/// Logger helper methods that panic on structural log errors.
///
/// A [`LogError`] indicates a name used with two incompatible value kinds,
/// which is a programming error, not a runtime condition.
pub trait LoggerHelper: Logger {
    fn unwrap_log(&mut self, event: Event, name: &'static str, value: Loggable) {
        self.log(event, name, value)
            .expect("value incompatible with previous logs under this name")
    }

    fn unwrap_log_scalar(&mut self, event: Event, name: &'static str, value: f64) {
        self.unwrap_log(event, name, Loggable::Scalar(value))
    }
}

impl<L: Logger + ?Sized> LoggerHelper for L {}

/// A value was structurally incompatible with the previous values under its name.
#[derive(Debug, Clone, PartialEq)]
pub struct LogError {
    name: &'static str,
    value: Loggable,
    expected: String,
}

impl LogError {
    pub const fn new(name: &'static str, value: Loggable, expected: String) -> Self {
        Self {
            name,
            value,
            expected,
        }
    }
}

impl fmt::Display for LogError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "\"{}\": incompatible value {:?}, expected {}",
            self.name, self.value, self.expected
        )
    }
}

impl Error for LogError {}
