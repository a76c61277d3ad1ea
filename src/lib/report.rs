//! Derived statistics.

use std::fmt;

use system::{StationKind, Stats, System};
use variates::Variates;
use Time;

/// A summary of a finished simulation.
#[derive(Clone, Debug)]
pub struct Report {
    /// The length of the observed time span.
    pub span: Time,
    /// The metrics of the CPU, the first disk, and the second disk.
    pub stations: Vec<Metrics>,
}

/// The metrics of a station.
///
/// A ratio whose denominator is zero is undefined and is represented by `None`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Metrics {
    pub kind: StationKind,
    pub utilization: Option<f64>,
    pub throughput: Option<f64>,
    pub average_queue: Option<f64>,
    pub max_queue: usize,
    pub average_response: Option<f64>,
    pub max_response: Time,
}

struct Value(Option<f64>);

impl Report {
    /// Summarize a system.
    pub fn new<V: Variates>(system: &System<V>) -> Report {
        let stats = StationKind::all().iter().map(|&kind| (kind, *system.station(kind).stats()))
                                             .collect::<Vec<_>>();
        Report::from_stats(system.parameters().span(), &stats)
    }

    /// Summarize the statistics of stations observed over a time span.
    pub fn from_stats(span: Time, stats: &[(StationKind, Stats)]) -> Report {
        Report {
            span: span,
            stations: stats.iter().map(|&(kind, ref stats)| Metrics::new(kind, stats, span))
                                  .collect(),
        }
    }
}

impl Metrics {
    /// Compute the metrics of a station.
    pub fn new(kind: StationKind, stats: &Stats, span: Time) -> Metrics {
        Metrics {
            kind: kind,
            utilization: ratio(stats.busy_time as f64, span as f64),
            throughput: ratio(stats.completed as f64, span as f64),
            average_queue: ratio(stats.queue_sum as f64, stats.queue_samples as f64),
            max_queue: stats.max_queue,
            average_response: ratio(stats.busy_time as f64, stats.started as f64),
            max_response: stats.max_service,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        for metrics in &self.stations {
            let value = metrics.utilization.map(|value| 100.0 * value);
            writeln!(formatter, "{} Utilization: {}%", metrics.kind, Value(value))?;
        }
        writeln!(formatter)?;
        for metrics in &self.stations {
            writeln!(formatter, "Number of Jobs completed per unit of time ({}): {}",
                     metrics.kind, Value(metrics.throughput))?;
        }
        writeln!(formatter)?;
        for metrics in &self.stations {
            writeln!(formatter, "Average size of {}Q: {}", metrics.kind,
                     Value(metrics.average_queue))?;
        }
        writeln!(formatter)?;
        for metrics in &self.stations {
            writeln!(formatter, "Max size of {}Q: {}", metrics.kind, metrics.max_queue)?;
        }
        writeln!(formatter)?;
        for metrics in &self.stations {
            writeln!(formatter, "Average Response Time of {}Q: {}", metrics.kind,
                     Value(metrics.average_response))?;
        }
        writeln!(formatter)?;
        for metrics in &self.stations {
            writeln!(formatter, "Max Response Time of {}Q: {}", metrics.kind,
                     metrics.max_response)?;
        }
        Ok(())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            Some(value) => write!(formatter, "{:.4}", value),
            _ => write!(formatter, "undefined"),
        }
    }
}

#[inline]
fn ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 { None } else { Some(numerator / denominator) }
}
