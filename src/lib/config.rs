//! Parameters of a simulation.

use configuration::format::TOML;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use {Config, Error, ErrorKind, Result, Time};

/// The parameters of a simulation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parameters {
    /// The seed of the random source.
    pub seed: u64,
    /// The time at which the simulation starts.
    pub start: Time,
    /// The time at which the simulation ends.
    pub finish: Time,
    /// The interval between two consecutive external arrivals.
    pub arrival: Range,
    /// The probability that a job leaves the system after the CPU.
    pub quit: f64,
    /// The service time of the CPU.
    pub cpu: Range,
    /// The service time of the first disk.
    pub disk1: Range,
    /// The service time of the second disk.
    pub disk2: Range,
    /// The moment at which an idle station takes a queued job into service.
    pub pickup: Pickup,
}

/// A closed interval of integers.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Range {
    pub min: Time,
    pub max: Time,
}

/// The moment at which an idle station takes the head of its queue into service.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Pickup {
    /// Only when a job arrives at the station.
    Arrival,
    /// Also right after the station finishes a job.
    Finish,
}

impl Parameters {
    /// Read the parameters from a configuration file.
    pub fn open<T: AsRef<Path>>(path: T) -> Result<Parameters> {
        let path = path.as_ref();
        info!(target: "Config", "Reading {:?}...", path);
        match TOML::open(path) {
            Ok(config) => Parameters::new(&config),
            Err(error) => raise!(Configuration, "failed to read {:?} ({})", path, error),
        }
    }

    /// Extract the parameters from a configuration tree.
    pub fn new(config: &Config) -> Result<Parameters> {
        let pickup = match config.get::<String>("station.pickup") {
            Some(value) => value.parse()?,
            _ => Pickup::Arrival,
        };
        let parameters = Parameters {
            seed: integer(config, "seed")?,
            start: integer(config, "time.start")?,
            finish: integer(config, "time.finish")?,
            arrival: Range::new(config, "arrival")?,
            quit: number(config, "cpu.quit")?,
            cpu: Range::new(config, "cpu")?,
            disk1: Range::new(config, "disk1")?,
            disk2: Range::new(config, "disk2")?,
            pickup: pickup,
        };
        parameters.validate()?;
        Ok(parameters)
    }

    /// Check the consistency of the parameters.
    pub fn validate(&self) -> Result<()> {
        if self.start > self.finish {
            raise!(Configuration, "the start time ({}) exceeds the finish time ({})",
                   self.start, self.finish);
        }
        if !(self.quit >= 0.0 && self.quit <= 1.0) {
            raise!(Configuration, "the quit probability ({}) should be in [0, 1]", self.quit);
        }
        self.arrival.validate("arrival")?;
        self.cpu.validate("cpu")?;
        self.disk1.validate("disk1")?;
        self.disk2.validate("disk2")?;
        if self.arrival.max == 0 {
            raise!(Configuration, "the arrival range should allow a positive interval");
        }
        if self.start == self.finish {
            warn!(target: "Config", "The simulated time span is empty.");
        }
        Ok(())
    }

    /// Return the length of the simulated time span.
    #[inline]
    pub fn span(&self) -> Time {
        self.finish - self.start
    }
}

impl fmt::Display for Parameters {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        writeln!(formatter, "Seed: {}", self.seed)?;
        writeln!(formatter, "Initial Time: {}", self.start)?;
        writeln!(formatter, "Final time: {}", self.finish)?;
        writeln!(formatter, "Arrive Min: {}", self.arrival.min)?;
        writeln!(formatter, "Arrive Max: {}", self.arrival.max)?;
        writeln!(formatter, "Quit Prob: {}", self.quit)?;
        writeln!(formatter, "CPU Min: {}", self.cpu.min)?;
        writeln!(formatter, "CPU Max: {}", self.cpu.max)?;
        writeln!(formatter, "Disk1 Min: {}", self.disk1.min)?;
        writeln!(formatter, "Disk1 Max: {}", self.disk1.max)?;
        writeln!(formatter, "Disk2 Min: {}", self.disk2.min)?;
        write!(formatter, "Disk2 Max: {}", self.disk2.max)
    }
}

impl Range {
    fn new(config: &Config, name: &str) -> Result<Range> {
        Ok(Range {
            min: integer(config, &format!("{}.min", name))?,
            max: integer(config, &format!("{}.max", name))?,
        })
    }

    fn validate(&self, name: &str) -> Result<()> {
        if self.min > self.max {
            raise!(Configuration, "the {} range has its minimum ({}) above its maximum ({})",
                   name, self.min, self.max);
        }
        Ok(())
    }
}

impl FromStr for Pickup {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        match &*name.to_lowercase() {
            "arrival" => Ok(Pickup::Arrival),
            "finish" => Ok(Pickup::Finish),
            _ => Err(Error::new(ErrorKind::Configuration,
                                format!("found an unknown pickup policy ({:?})", name))),
        }
    }
}

fn number(config: &Config, path: &str) -> Result<f64> {
    if let Some(&value) = config.get::<i64>(path) {
        return Ok(value as f64);
    }
    if let Some(&value) = config.get::<f64>(path) {
        return Ok(value);
    }
    raise!(Configuration, "the parameter {:?} is required", path);
}

fn integer(config: &Config, path: &str) -> Result<u64> {
    if let Some(&value) = config.get::<i64>(path) {
        if value < 0 {
            raise!(Configuration, "the parameter {:?} should be non-negative ({})", path, value);
        }
        return Ok(value as u64);
    }
    let value = number(config, path)?;
    if value < 0.0 || value.fract() != 0.0 || !value.is_finite() || value >= 1.8446744073709552e19 {
        raise!(Configuration, "the parameter {:?} should be a non-negative integer ({})",
               path, value);
    }
    Ok(value as u64)
}

#[cfg(test)]
mod tests {
    use configuration::format::TOML;

    use {ErrorKind, Pickup, Range};
    use super::Parameters;

    const CONTENT: &'static str = r#"
        seed = 42

        [time]
        start = 0
        finish = 10000

        [arrival]
        min = 1
        max = 10

        [cpu]
        min = 1
        max = 5
        quit = 0.2

        [disk1]
        min = 1
        max = 10

        [disk2]
        min = 2.0
        max = 8
    "#;

    fn parse(content: &str) -> ::Result<Parameters> {
        Parameters::new(&TOML::parse(content).unwrap())
    }

    #[test]
    fn new() {
        let parameters = parse(CONTENT).unwrap();
        assert_eq!(parameters.seed, 42);
        assert_eq!(parameters.start, 0);
        assert_eq!(parameters.finish, 10000);
        assert_eq!(parameters.arrival, Range { min: 1, max: 10 });
        assert_eq!(parameters.quit, 0.2);
        assert_eq!(parameters.cpu, Range { min: 1, max: 5 });
        assert_eq!(parameters.disk2, Range { min: 2, max: 8 });
        assert_eq!(parameters.pickup, Pickup::Arrival);
        assert_eq!(parameters.span(), 10000);
    }

    #[test]
    fn new_pickup() {
        let content = format!("{}\n[station]\npickup = \"finish\"\n", CONTENT);
        assert_eq!(parse(&content).unwrap().pickup, Pickup::Finish);

        let content = format!("{}\n[station]\npickup = \"never\"\n", CONTENT);
        assert_eq!(parse(&content).err().unwrap().kind(), ErrorKind::Configuration);
    }

    #[test]
    fn new_missing() {
        let content = CONTENT.replace("quit = 0.2", "");
        assert_eq!(parse(&content).err().unwrap().kind(), ErrorKind::Configuration);
    }

    #[test]
    fn new_malformed() {
        let content = CONTENT.replace("seed = 42", "seed = -1");
        assert_eq!(parse(&content).err().unwrap().kind(), ErrorKind::Configuration);

        let content = CONTENT.replace("finish = 10000", "finish = 100.5");
        assert_eq!(parse(&content).err().unwrap().kind(), ErrorKind::Configuration);
    }

    #[test]
    fn validate_ranges() {
        let content = CONTENT.replace("min = 1\n        max = 5", "min = 6\n        max = 5");
        assert_eq!(parse(&content).err().unwrap().kind(), ErrorKind::Configuration);

        let mut parameters = parse(CONTENT).unwrap();
        parameters.disk1 = Range { min: 3, max: 2 };
        assert!(parameters.validate().is_err());
    }

    #[test]
    fn validate_arrival() {
        let content = CONTENT.replace("min = 1\n        max = 10\n\n        [cpu]",
                                      "min = 0\n        max = 0\n\n        [cpu]");
        assert_eq!(parse(&content).err().unwrap().kind(), ErrorKind::Configuration);

        let mut parameters = parse(CONTENT).unwrap();
        parameters.arrival = Range { min: 0, max: 1 };
        assert!(parameters.validate().is_ok());
    }

    #[test]
    fn new_large() {
        let content = CONTENT.replace("seed = 42", "seed = 9007199254740993");
        assert_eq!(parse(&content).unwrap().seed, 9007199254740993);

        let content = CONTENT.replace("seed = 42", "seed = 9007199254740992");
        assert_eq!(parse(&content).unwrap().seed, 9007199254740992);
    }

    #[test]
    fn validate_probability() {
        let mut parameters = parse(CONTENT).unwrap();
        parameters.quit = 1.5;
        assert!(parameters.validate().is_err());
        parameters.quit = -0.1;
        assert!(parameters.validate().is_err());
        parameters.quit = 1.0;
        assert!(parameters.validate().is_ok());
    }

    #[test]
    fn validate_time() {
        let mut parameters = parse(CONTENT).unwrap();
        parameters.start = 10001;
        assert!(parameters.validate().is_err());
        parameters.start = 10000;
        assert!(parameters.validate().is_ok());
    }

    #[test]
    fn open_missing() {
        let error = Parameters::open("tests/fixtures/missing.toml").err().unwrap();
        assert_eq!(error.kind(), ErrorKind::Configuration);
    }
}
