use std::fmt;

/// A job.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Job {
    /// The identifier.
    pub id: usize,
}

impl Job {
    #[inline]
    pub fn new(id: usize) -> Job {
        Job { id: id }
    }
}

impl fmt::Display for Job {
    #[inline]
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "Job{}", self.id)
    }
}
