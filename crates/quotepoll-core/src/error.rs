use thiserror::Error;

/// Errors raised by a single poll cycle.
///
/// Only `UpstreamStatus` is fatal: the upstream answering with an error
/// status ends the whole run. Every other variant skips the cycle and the
/// loop carries on at the next tick.
#[derive(Debug, Error)]
pub enum PollError {
    #[error("error querying API: {0}")]
    Transport(String),

    #[error("unexpected response status {status}")]
    UpstreamStatus { status: u16 },

    #[error("error decoding quotes payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("quotes payload contained no records")]
    EmptyBatch,
}

impl PollError {
    /// Whether this error must terminate the run instead of skipping a cycle.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::UpstreamStatus { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_upstream_status_is_fatal() {
        assert!(PollError::UpstreamStatus { status: 500 }.is_fatal());
        assert!(!PollError::Transport(String::from("connection refused")).is_fatal());
        assert!(!PollError::EmptyBatch.is_fatal());
    }
}
