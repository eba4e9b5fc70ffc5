use thiserror::Error;

use quotepoll_core::PollError;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Poll(#[from] PollError),

    #[error("poller task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Poll(_) => 1,
            Self::Task(_) => 6,
            Self::Io(_) => 10,
        }
    }
}
