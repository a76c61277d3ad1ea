//! Complete system.

use std::collections::BinaryHeap;

use variates::Variates;
use {Outcome, Parameters, Pickup, Result, Time};

mod event;
mod history;
mod job;
mod station;

#[cfg(test)]
mod script;

pub use self::event::{Event, EventKind};
pub use self::history::History;
pub use self::job::Job;
pub use self::station::{Station, StationKind, Stats};

/// A complete system.
pub struct System<V> where V: Variates {
    parameters: Parameters,
    variates: V,
    stations: [Station; 3],
    history: History,
    queue: BinaryHeap<Event>,
    time: Time,
    halted: bool,
}

impl<V> System<V> where V: Variates {
    /// Create a system.
    ///
    /// The timeline is seeded with the arrival of the first job at the start
    /// time and with the terminal event at the finish time.
    pub fn new(parameters: &Parameters, variates: V) -> Result<System<V>> {
        parameters.validate()?;
        let mut queue = BinaryHeap::new();
        queue.push(Event::end(parameters.finish));
        queue.push(Event::arrive(parameters.start, Job::new(1), StationKind::Cpu));
        info!(target: "System", "Simulating from {} to {} with {:?} pickup.",
              parameters.start, parameters.finish, parameters.pickup);
        Ok(System {
            parameters: *parameters,
            variates: variates,
            stations: [
                Station::new(StationKind::Cpu),
                Station::new(StationKind::Disk1),
                Station::new(StationKind::Disk2),
            ],
            history: History { created: 1, ..History::default() },
            queue: queue,
            time: parameters.start,
            halted: false,
        })
    }

    /// Dispatch the earliest pending event and return it.
    ///
    /// The terminal event is returned once; afterwards the system is halted,
    /// and the events still pending are never dispatched.
    pub fn next(&mut self) -> Outcome<Event> {
        if self.halted {
            return Ok(None);
        }
        let event = some!(self.queue.pop(), Internal,
                          "the timeline has run out of events before the end at {}",
                          self.parameters.finish);
        if event.time < self.time {
            raise!(Internal, "the event \"{}\" is earlier than the clock ({})", event, self.time);
        }
        self.time = event.time;
        self.history.remember(&event);
        debug!(target: "System", "{}", event);
        self.dispatch(event)?;
        Ok(Some(event))
    }

    /// Dispatch events until the terminal one.
    pub fn run(&mut self) -> Result<()> {
        while let Some(_) = self.next()? {}
        Ok(())
    }

    /// Return the clock.
    #[inline(always)]
    pub fn time(&self) -> Time {
        self.time
    }

    /// Return a station.
    #[inline]
    pub fn station(&self, kind: StationKind) -> &Station {
        &self.stations[kind.index()]
    }

    /// Return the number of events that have not been dispatched.
    #[inline]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Check if the terminal event has been dispatched.
    #[inline(always)]
    pub fn halted(&self) -> bool {
        self.halted
    }

    getters! {
        ref parameters: Parameters,
        ref history: History,
    }

    fn dispatch(&mut self, event: Event) -> Result<()> {
        use self::StationKind::*;

        let time = event.time;
        match event.kind {
            EventKind::Arrive(job, Cpu) => {
                self.spawn(time)?;
                self.arrive(time, job, Cpu)?;
            },
            EventKind::Arrive(job, disk) => self.arrive(time, job, disk)?,
            EventKind::Finish(job, Cpu) => {
                self.stations[Cpu.index()].finish(job)?;
                if self.variates.quit() {
                    self.queue.push(Event::exit(time, job));
                } else {
                    let disk = self.route();
                    self.queue.push(Event::arrive(time, job, disk));
                }
                self.resume(time, Cpu)?;
            },
            EventKind::Finish(job, disk) => {
                self.stations[disk.index()].finish(job)?;
                self.queue.push(Event::arrive(time, job, Cpu));
                self.resume(time, disk)?;
            },
            EventKind::Exit(..) => {},
            EventKind::End => {
                self.halted = true;
                info!(target: "System", "Reached the end at {} with {} events pending.",
                      time, self.queue.len());
            },
        }
        Ok(())
    }

    fn spawn(&mut self, time: Time) -> Result<()> {
        self.history.created += 1;
        let job = Job::new(self.history.created);
        let arrival = some!(time.checked_add(self.variates.interarrival()), Internal,
                            "the arrival of {} after {} overflows the clock", job, time);
        self.queue.push(Event::arrive(arrival, job, StationKind::Cpu));
        Ok(())
    }

    fn arrive(&mut self, time: Time, job: Job, kind: StationKind) -> Result<()> {
        let station = &mut self.stations[kind.index()];
        if let Some(event) = station.arrive(time, job, &mut self.variates)? {
            self.queue.push(event);
        }
        Ok(())
    }

    fn resume(&mut self, time: Time, kind: StationKind) -> Result<()> {
        if self.parameters.pickup != Pickup::Finish {
            return Ok(());
        }
        let station = &mut self.stations[kind.index()];
        if let Some(event) = station.resume(time, &mut self.variates)? {
            self.queue.push(event);
        }
        Ok(())
    }

    fn route(&mut self) -> StationKind {
        let one = self.stations[StationKind::Disk1.index()].queue().len();
        let other = self.stations[StationKind::Disk2.index()].queue().len();
        if one < other {
            StationKind::Disk1
        } else if one > other {
            StationKind::Disk2
        } else {
            self.variates.tiebreak()
        }
    }
}
