use std::collections::VecDeque;

use system::StationKind;
use variates::Variates;
use Time;

/// A draw requested from a generator.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Call {
    Interarrival,
    Service(StationKind),
    Quit,
    Tiebreak,
}

/// A generator returning predefined values and recording the calls.
pub struct Script {
    pub interarrival: Time,
    pub service: [Time; 3],
    pub quits: VecDeque<bool>,
    pub tiebreaks: VecDeque<StationKind>,
    pub calls: Vec<Call>,
}

impl Script {
    pub fn new(interarrival: Time, service: [Time; 3]) -> Script {
        Script {
            interarrival: interarrival,
            service: service,
            quits: VecDeque::new(),
            tiebreaks: VecDeque::new(),
            calls: vec![],
        }
    }
}

impl Variates for Script {
    fn interarrival(&mut self) -> Time {
        self.calls.push(Call::Interarrival);
        self.interarrival
    }

    fn service(&mut self, kind: StationKind) -> Time {
        self.calls.push(Call::Service(kind));
        self.service[kind.index()]
    }

    fn quit(&mut self) -> bool {
        self.calls.push(Call::Quit);
        self.quits.pop_front().unwrap_or(false)
    }

    fn tiebreak(&mut self) -> StationKind {
        self.calls.push(Call::Tiebreak);
        self.tiebreaks.pop_front().unwrap_or(StationKind::Disk1)
    }
}
