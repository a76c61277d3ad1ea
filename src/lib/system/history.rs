use system::{Event, EventKind};

/// Statistics about the events of a system.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct History {
    /// The number of created jobs.
    pub created: usize,
    /// The number of dispatched events.
    pub dispatched: usize,
    /// The number of arrivals at any station.
    pub arrived: usize,
    /// The number of finishes at any station.
    pub finished: usize,
    /// The number of jobs that have left the system.
    pub exited: usize,
}

impl History {
    /// Take into account an event.
    pub fn remember(&mut self, event: &Event) {
        self.dispatched += 1;
        match event.kind {
            EventKind::Arrive(..) => self.arrived += 1,
            EventKind::Finish(..) => self.finished += 1,
            EventKind::Exit(..) => self.exited += 1,
            EventKind::End => {},
        }
    }
}
