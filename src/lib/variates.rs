//! Random variate generators.

use probability::distribution::{Categorical, Sample, Uniform};
use probability::source;

use system::StationKind;
use {Parameters, Range, Source, Time};

/// A generator of the random quantities driving a simulation.
///
/// The order in which the methods are called determines the sequence of
/// values produced, and the driver calls them in a fixed order.
pub trait Variates {
    /// Draw the time until the next external arrival.
    fn interarrival(&mut self) -> Time;

    /// Draw the time a station spends on a job.
    fn service(&mut self, StationKind) -> Time;

    /// Decide whether a job that has left the CPU leaves the system.
    fn quit(&mut self) -> bool;

    /// Choose one of the two disks.
    fn tiebreak(&mut self) -> StationKind;
}

/// A generator backed by a single seeded random source.
pub struct Random {
    source: Source,
    arrival: Interval,
    cpu: Interval,
    disk1: Interval,
    disk2: Interval,
    quit: Uniform,
    probability: f64,
    selector: Categorical,
}

struct Interval {
    distribution: Uniform,
    range: Range,
}

impl Random {
    /// Create a generator seeded according to the parameters.
    pub fn new(parameters: &Parameters) -> Random {
        info!(target: "Variates", "Seeding the random source with {}.", parameters.seed);
        Random::with_source(parameters, source::default(parameters.seed))
    }

    /// Create a generator drawing from a given source.
    pub fn with_source(parameters: &Parameters, source: Source) -> Random {
        Random {
            source: source,
            arrival: Interval::new(parameters.arrival),
            cpu: Interval::new(parameters.cpu),
            disk1: Interval::new(parameters.disk1),
            disk2: Interval::new(parameters.disk2),
            quit: Uniform::new(0.0, 1.0),
            probability: parameters.quit,
            selector: Categorical::new(&[0.5, 0.5]),
        }
    }
}

impl Variates for Random {
    #[inline]
    fn interarrival(&mut self) -> Time {
        self.arrival.sample(&mut self.source)
    }

    fn service(&mut self, kind: StationKind) -> Time {
        match kind {
            StationKind::Cpu => self.cpu.sample(&mut self.source),
            StationKind::Disk1 => self.disk1.sample(&mut self.source),
            StationKind::Disk2 => self.disk2.sample(&mut self.source),
        }
    }

    #[inline]
    fn quit(&mut self) -> bool {
        self.quit.sample(&mut self.source) < self.probability
    }

    fn tiebreak(&mut self) -> StationKind {
        match self.selector.sample(&mut self.source) {
            0 => StationKind::Disk1,
            _ => StationKind::Disk2,
        }
    }
}

impl Interval {
    fn new(range: Range) -> Interval {
        debug_assert!(range.min <= range.max);
        Interval {
            distribution: Uniform::new(range.min as f64, range.max as f64 + 1.0),
            range: range,
        }
    }

    fn sample(&self, source: &mut Source) -> Time {
        let value = self.distribution.sample(source).floor() as Time;
        value.max(self.range.min).min(self.range.max)
    }
}

#[cfg(test)]
mod tests {
    use system::StationKind;
    use {Parameters, Pickup, Range};
    use super::{Random, Variates};

    fn parameters(quit: f64) -> Parameters {
        Parameters {
            seed: 42,
            start: 0,
            finish: 100,
            arrival: Range { min: 1, max: 10 },
            quit: quit,
            cpu: Range { min: 2, max: 2 },
            disk1: Range { min: 0, max: 3 },
            disk2: Range { min: 5, max: 7 },
            pickup: Pickup::Arrival,
        }
    }

    #[test]
    fn bounds() {
        let mut variates = Random::new(&parameters(0.5));
        let mut seen = vec![false; 11];
        for _ in 0..10000 {
            let value = variates.interarrival();
            assert!(value >= 1 && value <= 10);
            seen[value as usize] = true;
            assert_eq!(variates.service(StationKind::Cpu), 2);
            let value = variates.service(StationKind::Disk1);
            assert!(value <= 3);
            let value = variates.service(StationKind::Disk2);
            assert!(value >= 5 && value <= 7);
        }
        assert!(seen[1..].iter().all(|&seen| seen));
    }

    #[test]
    fn quit() {
        let mut variates = Random::new(&parameters(0.0));
        assert!((0..1000).all(|_| !variates.quit()));

        let mut variates = Random::new(&parameters(1.0));
        assert!((0..1000).all(|_| variates.quit()));

        let mut variates = Random::new(&parameters(0.25));
        let count = (0..10000).filter(|_| variates.quit()).count();
        assert!(count > 2000 && count < 3000);
    }

    #[test]
    fn tiebreak() {
        let mut variates = Random::new(&parameters(0.5));
        let count = (0..10000).filter(|_| variates.tiebreak() == StationKind::Disk1).count();
        assert!(count > 4000 && count < 6000);
    }

    #[test]
    fn reproducibility() {
        let mut one = Random::new(&parameters(0.5));
        let mut other = Random::new(&parameters(0.5));
        for _ in 0..1000 {
            assert_eq!(one.interarrival(), other.interarrival());
            assert_eq!(one.service(StationKind::Disk2), other.service(StationKind::Disk2));
            assert_eq!(one.quit(), other.quit());
            assert_eq!(one.tiebreak(), other.tiebreak());
        }
    }
}
