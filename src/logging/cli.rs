use super::{Event, LogError, Loggable, Logger};
use enum_map::{enum_map, EnumMap};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;
use std::time::{Duration, Instant};

/// Logger that writes periodic summaries to stdout.
pub struct CLILogger {
    events: EnumMap<Event, EventLog>,

    display_period: Duration,
    last_display_time: Instant,

    /// If true, aggregators restart after each display.
    /// Otherwise every display summarizes the entire run so far.
    average_between_displays: bool,
}

impl CLILogger {
    pub fn new(display_period: Duration, average_between_displays: bool) -> Self {
        Self {
            events: enum_map! { _ => EventLog::new() },
            display_period,
            last_display_time: Instant::now(),
            average_between_displays,
        }
    }

    /// Display the current summary.
    pub fn display(&mut self) {
        println!();
        for (event, event_log) in &mut self.events {
            if event_log.index == event_log.summary_start_index {
                continue;
            }

            print!("==== ");
            if self.average_between_displays {
                print!(
                    "{:?}s {} - {}",
                    event,
                    event_log.summary_start_index,
                    event_log.index - 1
                );
            } else {
                print!("{:?} {}", event, event_log.index - 1);
            }
            println!(" ====");

            for (name, aggregator) in &mut event_log.aggregators {
                println!("{}: {}", name, aggregator);
                if self.average_between_displays {
                    aggregator.clear();
                }
            }
            event_log.summary_start_index = event_log.index;
        }
        self.last_display_time = Instant::now();
    }
}

impl Logger for CLILogger {
    fn log(&mut self, event: Event, name: &'static str, value: Loggable) -> Result<(), LogError> {
        match self.events[event].aggregators.entry(name) {
            Entry::Vacant(v) => {
                v.insert(Aggregator::new(value));
            }
            Entry::Occupied(o) => {
                if let Err((value, expected)) = o.into_mut().update(value) {
                    return Err(LogError::new(name, value, expected));
                }
            }
        }
        Ok(())
    }

    fn done(&mut self, event: Event) {
        self.events[event].index += 1;

        if self.last_display_time.elapsed() < self.display_period {
            return;
        }
        // Don't output after steps - prefer complete episodes or epochs
        if let Event::Step = event {
            return;
        }
        self.display();
    }
}

impl Drop for CLILogger {
    fn drop(&mut self) {
        // Ensure everything is flushed.
        self.display();
    }
}

struct EventLog {
    /// Global index for this event
    index: u64,
    /// Value of `index` at the start of this summary period
    summary_start_index: u64,
    /// An aggregator for each log entry name.
    aggregators: BTreeMap<&'static str, Aggregator>,
}

impl EventLog {
    const fn new() -> Self {
        Self {
            index: 0,
            summary_start_index: 0,
            aggregators: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Aggregator {
    Nothing,
    ScalarMean { sum: f64, count: u64 },
    IndexDistribution { counts: Vec<u64> },
}

impl Aggregator {
    /// Create a new aggregator seeded with a first value.
    fn new(value: Loggable) -> Self {
        let mut aggregator = match value {
            Loggable::Nothing => Self::Nothing,
            Loggable::Scalar(_) => Self::ScalarMean { sum: 0.0, count: 0 },
            Loggable::IndexSample { size, .. } => Self::IndexDistribution {
                counts: vec![0; size],
            },
        };
        aggregator
            .update(value)
            .expect("fresh aggregator must accept its seed value");
        aggregator
    }

    /// Update with a new value.
    ///
    /// # Errors
    /// If the value is incompatible with the aggregated values,
    /// returns the value along with a description of the expected kind.
    fn update(&mut self, value: Loggable) -> Result<(), (Loggable, String)> {
        match (self, value) {
            (Self::Nothing, Loggable::Nothing) => Ok(()),
            (Self::ScalarMean { sum, count }, Loggable::Scalar(x)) => {
                *sum += x;
                *count += 1;
                Ok(())
            }
            (Self::IndexDistribution { counts }, Loggable::IndexSample { value, size })
                if counts.len() == size =>
            {
                counts[value] += 1;
                Ok(())
            }
            (aggregator, value) => Err((value, aggregator.expected())),
        }
    }

    /// Reset the accumulated statistics.
    fn clear(&mut self) {
        match self {
            Self::Nothing => {}
            Self::ScalarMean { sum, count } => {
                *sum = 0.0;
                *count = 0;
            }
            Self::IndexDistribution { counts } => counts.fill(0),
        }
    }

    /// A description of the value kind this aggregator accepts.
    fn expected(&self) -> String {
        match self {
            Self::Nothing => "Nothing".into(),
            Self::ScalarMean { .. } => "Scalar".into(),
            Self::IndexDistribution { counts } => {
                format!("IndexSample{{size: {}}}", counts.len())
            }
        }
    }
}

impl fmt::Display for Aggregator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Nothing => write!(f, "-"),
            Self::ScalarMean { sum, count } => {
                if *count == 0 {
                    write!(f, "-")
                } else {
                    write!(f, "{}", sum / (*count as f64))
                }
            }
            Self::IndexDistribution { counts } => {
                let total: u64 = counts.iter().sum();
                if total == 0 {
                    return write!(f, "-");
                }
                write!(f, "[")?;
                for (i, count) in counts.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:.2}", (*count as f64) / (total as f64))?;
                }
                write!(f, "]")
            }
        }
    }
}

#[cfg(test)]
mod aggregator {
    use super::*;

    #[test]
    fn scalar_mean() {
        let mut aggregator = Aggregator::new(Loggable::Scalar(1.0));
        aggregator.update(Loggable::Scalar(3.0)).unwrap();
        assert_eq!(aggregator, Aggregator::ScalarMean { sum: 4.0, count: 2 });
        assert_eq!(aggregator.to_string(), "2");
    }

    #[test]
    fn index_distribution_counts() {
        let mut aggregator = Aggregator::new(Loggable::IndexSample { value: 0, size: 2 });
        aggregator
            .update(Loggable::IndexSample { value: 1, size: 2 })
            .unwrap();
        aggregator
            .update(Loggable::IndexSample { value: 1, size: 2 })
            .unwrap();
        assert_eq!(
            aggregator,
            Aggregator::IndexDistribution {
                counts: vec![1, 2]
            }
        );
    }

    #[test]
    fn incompatible_value_kind() {
        let mut aggregator = Aggregator::new(Loggable::Scalar(1.0));
        assert!(aggregator
            .update(Loggable::IndexSample { value: 0, size: 2 })
            .is_err());
    }

    #[test]
    fn incompatible_index_sample_size() {
        let mut aggregator = Aggregator::new(Loggable::IndexSample { value: 0, size: 2 });
        assert!(aggregator
            .update(Loggable::IndexSample { value: 0, size: 3 })
            .is_err());
    }

    #[test]
    fn clear_resets_statistics() {
        let mut aggregator = Aggregator::new(Loggable::Scalar(5.0));
        aggregator.clear();
        assert_eq!(aggregator, Aggregator::ScalarMean { sum: 0.0, count: 0 });
    }
}

#[cfg(test)]
mod cli_logger {
    use super::*;

    #[test]
    fn incompatible_values_error() {
        let mut logger = CLILogger::new(Duration::from_secs(3600), true);
        logger.log(Event::Step, "reward", 1.0.into()).unwrap();
        assert!(logger
            .log(Event::Step, "reward", Loggable::IndexSample { value: 0, size: 2 })
            .is_err());
    }

    #[test]
    fn same_name_different_events() {
        // Aggregation is per event so the same name may hold different kinds.
        let mut logger = CLILogger::new(Duration::from_secs(3600), true);
        logger.log(Event::Step, "reward", 1.0.into()).unwrap();
        logger
            .log(Event::Episode, "reward", Loggable::IndexSample { value: 0, size: 2 })
            .unwrap();
    }
}
