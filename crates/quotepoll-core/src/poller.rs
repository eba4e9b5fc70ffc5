use std::time::Duration;

use tokio::sync::oneshot;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, warn};

use crate::error::PollError;
use crate::feed::QuoteFeed;

/// Recurring poll loop over a [`QuoteFeed`].
///
/// The first cycle runs immediately, the rest on a fixed interval. The loop
/// ends when the stop signal arrives or when a cycle hits the fatal error
/// variant.
pub struct Poller {
    feed: QuoteFeed,
    interval: Duration,
}

impl Poller {
    pub fn new(feed: QuoteFeed, interval: Duration) -> Self {
        Self { feed, interval }
    }

    /// Runs poll cycles until `stop` fires.
    ///
    /// Recoverable cycle errors are logged and skipped. The stop signal is
    /// only observed between cycles, so a request in flight always completes
    /// before shutdown is honored. A tick that lands together with the stop
    /// signal is served first, which makes a full run perform one immediate
    /// poll plus one per elapsed interval.
    ///
    /// # Errors
    ///
    /// Returns the first fatal [`PollError`], i.e. the upstream answering
    /// with an error status.
    pub async fn run(self, mut stop: oneshot::Receiver<()>) -> Result<(), PollError> {
        let mut ticker = time::interval(self.interval);
        // A slow request delays the next tick; missed ticks are not bursted.
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                _ = ticker.tick() => self.cycle().await?,
                _ = &mut stop => {
                    debug!("stop signal received, poll loop exiting");
                    break;
                }
            }
        }

        Ok(())
    }

    async fn cycle(&self) -> Result<(), PollError> {
        match self.feed.fetch_first().await {
            Ok(record) => {
                println!("{record}");
                Ok(())
            }
            Err(error) if error.is_fatal() => Err(error),
            Err(error) => {
                warn!(%error, endpoint = self.feed.endpoint(), "poll cycle skipped");
                Ok(())
            }
        }
    }
}
