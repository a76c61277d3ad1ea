#[macro_use]
extern crate log;

extern crate arguments;
extern crate queuenet;
extern crate sql;
extern crate sqlite;
extern crate term;

use log::Level;
use queuenet::variates::Random;
use queuenet::{ErrorKind, Parameters, Report, System};
use std::time::Instant;

pub use queuenet::{Error, Result};

const USAGE: &'static str = "
Usage: queuenet [options]

Options:
    --config <path>          Configuration file (required).
    --log <path>             Output file for the event log [default: log.txt].
    --database <path>        Output database for the event log.
    --seed <number>          Seed overriding the one in the configuration.

    --verbose                Display progress information.
    --help                   Display this message.
";

macro_rules! raise(
    ($message:expr) => (return Err(::queuenet::Error::new(::queuenet::ErrorKind::Output,
                                                          $message)));
);

macro_rules! ok(
    ($result:expr, $kind:ident) => (match $result {
        Ok(result) => result,
        Err(error) => return Err(::queuenet::Error::new(::queuenet::ErrorKind::$kind, error)),
    });
);

macro_rules! some(
    ($option:expr, $message:expr) => (match $option {
        Some(value) => value,
        _ => return Err(::queuenet::Error::new(::queuenet::ErrorKind::Configuration, $message)),
    });
);

mod logger;
mod output;

fn main() {
    start().unwrap_or_else(|error| fail(error));
}

fn start() -> Result<()> {
    let arguments = ok!(arguments::parse(std::env::args()), Configuration);

    if arguments.get::<bool>("help").unwrap_or(false) {
        help();
    }

    if arguments.get::<bool>("verbose").unwrap_or(false) {
        logger::setup(Level::Info);
    } else {
        logger::setup(Level::Warn);
    }

    let mut parameters = Parameters::open(some!(arguments.get::<String>("config"),
                                                "a configuration file is required"))?;
    if let Some(seed) = seed(&arguments)? {
        info!(target: "Queuenet", "Overriding the seed with {}.", seed);
        parameters.seed = seed;
    }

    let log = arguments.get::<String>("log").unwrap_or_else(|| "log.txt".to_string());
    let mut outputs = output::new(&parameters, log.clone(), arguments.get::<String>("database"))?;
    let mut system = System::new(&parameters, Random::new(&parameters))?;

    info!(target: "Queuenet", "Simulating {} time units...", parameters.span());
    let start = Instant::now();
    while let Some(event) = system.next()? {
        for output in outputs.iter_mut() {
            output.next(&event)?;
        }
    }
    for output in outputs.iter_mut() {
        output.finish()?;
    }
    let elapsed = start.elapsed();

    info!(target: "Queuenet", "Dispatched {} events for {} jobs.",
          system.history().dispatched, system.history().created);
    info!(target: "Queuenet", "Well done in {:.2} seconds.",
          elapsed.as_secs() as f64 + elapsed.subsec_nanos() as f64 * 1e-9);

    print!("{}", Report::new(&system));
    println!();
    println!("Open {}", log);

    Ok(())
}

fn seed(arguments: &arguments::Arguments) -> Result<Option<u64>> {
    if let Some(seed) = arguments.get::<i64>("seed") {
        if seed < 0 {
            return Err(Error::new(ErrorKind::Configuration, "the seed should be non-negative"));
        }
        return Ok(Some(seed as u64));
    }
    match arguments.get::<String>("seed") {
        Some(seed) => Ok(Some(ok!(seed.parse::<u64>(), Configuration))),
        _ => Ok(None),
    }
}

fn help() -> ! {
    println!("{}", USAGE.trim());
    std::process::exit(0);
}

#[allow(unused_must_use)]
fn fail(error: Error) -> ! {
    use std::io::Write;
    match term::stderr() {
        Some(mut output) => {
            output.fg(term::color::RED);
            output.write_all(format!("Error: {}.\n", error).as_bytes());
            output.reset();
        },
        _ => {
            std::io::stderr().write_all(format!("Error: {}.\n", error).as_bytes());
        },
    }
    std::process::exit(1);
}
