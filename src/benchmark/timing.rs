use std::fmt::Display;
use std::time::Duration;

use serde::Serialize;

/// Minimum, maximum and total of a series of run durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    min: Duration,
    max: Duration,
    total: Duration,
    counted: u32
}

impl Timing {
    pub fn new() -> Timing {
        Timing {
            min: Duration::MAX,
            max: Duration::ZERO,
            total: Duration::ZERO,
            counted: 0
        }
    }

    pub fn update(&mut self, given: Duration) {
        self.min = self.min.min(given);
        self.max = self.max.max(given);
        self.total += given;
        self.counted += 1;
    }

    pub fn counted(&self) -> u32 {
        self.counted
    }

    pub fn total(&self) -> Duration {
        self.total
    }

    pub fn min(&self) -> Option<Duration> {
        (self.counted > 0).then_some(self.min)
    }

    pub fn max(&self) -> Option<Duration> {
        (self.counted > 0).then_some(self.max)
    }

    pub fn average(&self) -> Option<Duration> {
        (self.counted > 0).then(|| self.total / self.counted)
    }

    pub fn summary(&self) -> TimingSummary {
        TimingSummary {
            iterations: self.counted,
            min_secs: self.min().map_or(0.0, |d| d.as_secs_f64()),
            max_secs: self.max().map_or(0.0, |d| d.as_secs_f64()),
            avg_secs: self.average().map_or(0.0, |d| d.as_secs_f64()),
            total_secs: self.total.as_secs_f64()
        }
    }
}

impl Default for Timing {
    fn default() -> Self {
        Timing::new()
    }
}

fn write_duration(f: &mut std::fmt::Formatter<'_>, label: &str, duration: Duration) -> std::fmt::Result {
    write!(f, "{label}: {}.{:09}", duration.as_secs(), duration.subsec_nanos())
}

/// With more than one recorded run prints `min`, `max`, `avg` and `tot` on
/// separate lines, otherwise only `total`.
impl Display for Timing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.counted > 1 {
            write_duration(f, "min", self.min)?;
            writeln!(f)?;
            write_duration(f, "max", self.max)?;
            writeln!(f)?;
            write_duration(f, "avg", self.total / self.counted)?;
            writeln!(f)?;
            write_duration(f, "tot", self.total)
        } else {
            write_duration(f, "total", self.total)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimingSummary {
    pub iterations: u32,
    pub min_secs: f64,
    pub max_secs: f64,
    pub avg_secs: f64,
    pub total_secs: f64
}
