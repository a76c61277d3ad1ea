use std::fmt;

use system::{Job, StationKind};
use Time;

/// An event.
#[derive(Clone, Copy, Debug)]
pub struct Event {
    /// The time.
    pub time: Time,
    /// The type.
    pub kind: EventKind,
}

order!(Event(time) descending);

/// The type of an event.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EventKind {
    /// A job has arrived at a station.
    Arrive(Job, StationKind),
    /// A station has finished a job.
    Finish(Job, StationKind),
    /// A job has left the system.
    Exit(Job),
    /// The simulation has reached its horizon.
    End,
}

impl Event {
    /// Create a job-arrive event.
    #[inline]
    pub fn arrive(time: Time, job: Job, station: StationKind) -> Event {
        Event { time: time, kind: EventKind::Arrive(job, station) }
    }

    /// Create a job-finish event.
    #[inline]
    pub fn finish(time: Time, job: Job, station: StationKind) -> Event {
        Event { time: time, kind: EventKind::Finish(job, station) }
    }

    /// Create a job-exit event.
    #[inline]
    pub fn exit(time: Time, job: Job) -> Event {
        Event { time: time, kind: EventKind::Exit(job) }
    }

    /// Create the terminal event.
    #[inline]
    pub fn end(time: Time) -> Event {
        Event { time: time, kind: EventKind::End }
    }

    /// Return the job the event concerns, if any.
    pub fn job(&self) -> Option<Job> {
        match self.kind {
            EventKind::Arrive(job, _) | EventKind::Finish(job, _) | EventKind::Exit(job) => {
                Some(job)
            },
            EventKind::End => None,
        }
    }

    /// Return the status as it appears in the event log.
    pub fn status(&self) -> &'static str {
        match self.kind {
            EventKind::Arrive(..) => "arrives",
            EventKind::Finish(..) => "finishes",
            EventKind::Exit(..) => "exits",
            EventKind::End => "finished simulation",
        }
    }

    /// Return the station as it appears in the event log.
    pub fn station(&self) -> &'static str {
        match self.kind {
            EventKind::Arrive(_, station) | EventKind::Finish(_, station) => station.name(),
            EventKind::Exit(..) => StationKind::Cpu.name(),
            EventKind::End => "end",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        let id = self.job().map(|job| job.id).unwrap_or(0);
        write!(formatter, "Job{} {} {} at time unit {}", id, self.status(), self.station(),
               self.time)
    }
}
