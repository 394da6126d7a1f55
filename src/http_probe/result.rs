use std::fmt;

/// Binary classification of a single probe outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Up,
    Down,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Up => f.write_str("UP"),
            Status::Down => f.write_str("DOWN"),
        }
    }
}

/// Outcome of one probe: wall-clock time at probe initiation plus the
/// UP/DOWN classification. Lives only long enough to become one CSV record.
#[derive(Debug, Clone, Copy)]
pub struct ProbeResult {
    pub timestamp_ms: i64,
    pub status: Status,
}

impl ProbeResult {
    /// One CSV data line, without trailing newline.
    pub fn record(&self) -> String {
        format!("{},{}", self.timestamp_ms, self.status)
    }
}
