//! Discrete-event simulation of a queueing network with a CPU and two disks.

#[cfg(test)]
extern crate assert;

#[macro_use]
extern crate log;

extern crate configuration;
extern crate probability;
extern crate sqlite;

#[macro_use]
mod macros;

mod result;

pub mod config;
pub mod report;
pub mod system;
pub mod variates;

pub use config::{Parameters, Pickup, Range};
pub use report::Report;
pub use result::{Error, ErrorKind, Result};
pub use system::{Event, EventKind, Job, Station, StationKind, System};
pub use variates::Variates;

/// An outcome.
pub type Outcome<T> = Result<Option<T>>;

/// A configuration.
pub type Config = configuration::Tree;

/// A source of randomness.
pub type Source = probability::source::Default;

/// A point in or a span of simulated time.
pub type Time = u64;
