use std::collections::VecDeque;
use std::fmt;

use system::{Event, Job};
use variates::Variates;
use {Result, Time};

/// A single-server station with a first-in-first-out queue.
pub struct Station {
    kind: StationKind,
    queue: VecDeque<Job>,
    current: Option<Job>,
    stats: Stats,
}

/// The identity of a station.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum StationKind {
    /// The central processing unit.
    Cpu,
    /// The first disk.
    Disk1,
    /// The second disk.
    Disk2,
}

/// Statistics accumulated by a station.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Stats {
    /// The number of finished jobs.
    pub completed: usize,
    /// The number of jobs taken from the queue into service.
    pub started: usize,
    /// The total time spent serving jobs.
    pub busy_time: Time,
    /// The longest time spent on a single job.
    pub max_service: Time,
    /// The sum of the observed queue lengths.
    pub queue_sum: usize,
    /// The number of times the queue length has been observed.
    pub queue_samples: usize,
    /// The longest observed queue.
    pub max_queue: usize,
}

impl Station {
    /// Create an idle station with an empty queue.
    pub fn new(kind: StationKind) -> Station {
        Station { kind: kind, queue: VecDeque::new(), current: None, stats: Stats::default() }
    }

    /// Put a job at the tail of the queue.
    ///
    /// If the station is idle, it immediately takes the head of the queue into
    /// service, and the corresponding finish event is returned.
    pub fn arrive<V: Variates>(&mut self, time: Time, job: Job, variates: &mut V)
                               -> Result<Option<Event>> {
        self.queue.push_back(job);
        self.stats.enqueued(self.queue.len());
        if self.current.is_some() {
            return Ok(None);
        }
        let event = some!(self.start(time, variates)?, Internal,
                          "the queue of {} is unexpectedly empty", self.kind);
        Ok(Some(event))
    }

    /// Release the job in service and become idle.
    pub fn finish(&mut self, job: Job) -> Result<()> {
        match self.current.take() {
            Some(current) if current == job => {},
            Some(current) => {
                raise!(Internal, "{} finished {} while serving {}", self.kind, job, current)
            },
            _ => raise!(Internal, "{} finished {} while idle", self.kind, job),
        }
        self.stats.completed += 1;
        Ok(())
    }

    /// Take the head of the queue into service if the station is idle.
    pub fn resume<V: Variates>(&mut self, time: Time, variates: &mut V)
                               -> Result<Option<Event>> {
        if self.current.is_some() {
            return Ok(None);
        }
        self.start(time, variates)
    }

    /// Check if a job is in service.
    #[inline]
    pub fn is_busy(&self) -> bool {
        self.current.is_some()
    }

    /// Return the job in service.
    #[inline(always)]
    pub fn current(&self) -> Option<Job> {
        self.current
    }

    /// Return the waiting jobs starting from the head of the queue.
    #[inline(always)]
    pub fn queue(&self) -> &VecDeque<Job> {
        &self.queue
    }

    getters! {
        kind: StationKind,
        ref stats: Stats,
    }

    fn start<V: Variates>(&mut self, time: Time, variates: &mut V) -> Result<Option<Event>> {
        let job = match self.queue.pop_front() {
            Some(job) => job,
            _ => return Ok(None),
        };
        self.stats.dequeued(self.queue.len());
        let service = variates.service(self.kind);
        let finish = some!(time.checked_add(service), Internal,
                           "the service of {} at {} by {} overflows the clock", job, time,
                           self.kind);
        self.stats.served(service);
        self.current = Some(job);
        Ok(Some(Event::finish(finish, job, self.kind)))
    }
}

impl StationKind {
    /// Return the name as it appears in logs and reports.
    pub fn name(&self) -> &'static str {
        match *self {
            StationKind::Cpu => "CPU",
            StationKind::Disk1 => "Disk1",
            StationKind::Disk2 => "Disk2",
        }
    }

    /// Return all stations.
    #[inline]
    pub fn all() -> [StationKind; 3] {
        [StationKind::Cpu, StationKind::Disk1, StationKind::Disk2]
    }

    #[inline]
    pub(crate) fn index(&self) -> usize {
        match *self {
            StationKind::Cpu => 0,
            StationKind::Disk1 => 1,
            StationKind::Disk2 => 2,
        }
    }
}

impl fmt::Display for StationKind {
    #[inline]
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        self.name().fmt(formatter)
    }
}

impl Stats {
    fn enqueued(&mut self, length: usize) {
        self.queue_sum += length;
        self.queue_samples += 1;
        if self.max_queue < length {
            self.max_queue = length;
        }
    }

    fn dequeued(&mut self, length: usize) {
        self.queue_sum += length;
        self.queue_samples += 1;
        self.started += 1;
    }

    fn served(&mut self, service: Time) {
        self.busy_time += service;
        if self.max_service < service {
            self.max_service = service;
        }
    }
}
