//! Epoch-tagged fetch bookkeeping.
//!
//! Every trigger stamps a new [`Epoch`]. A completion is applied only when
//! its epoch is still the latest one issued; anything older is dropped
//! without touching state. Overlapping requests are allowed and never block
//! new triggers.

use std::fmt;

use crate::{error::ClientResult, models::PageResult};

/// Identity of one issued product request. Strictly increasing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Epoch(u64);

impl Epoch {
    pub fn value(self) -> u64 {
        self.0
    }

    fn next(self) -> Self {
        Epoch(self.0 + 1)
    }
}

impl fmt::Display for Epoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// What resolving a completion did.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Applied { epoch: Epoch },
    Failed { epoch: Epoch, message: String },
    Discarded { epoch: Epoch, latest: Epoch },
}

impl FetchOutcome {
    pub fn epoch(&self) -> Epoch {
        match self {
            FetchOutcome::Applied { epoch }
            | FetchOutcome::Failed { epoch, .. }
            | FetchOutcome::Discarded { epoch, .. } => *epoch,
        }
    }

    pub fn is_discarded(&self) -> bool {
        matches!(self, FetchOutcome::Discarded { .. })
    }
}

#[derive(Debug, Default)]
pub struct FetchCoordinator {
    latest: Epoch,
    state: FetchState,
    current: PageResult,
    error: Option<String>,
}

impl FetchCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a new request as the authoritative one.
    pub fn begin(&mut self) -> Epoch {
        self.latest = self.latest.next();
        self.state = FetchState::Loading;
        self.error = None;
        self.latest
    }

    pub fn resolve(&mut self, epoch: Epoch, result: ClientResult<PageResult>) -> FetchOutcome {
        if epoch != self.latest {
            tracing::debug!(%epoch, latest = %self.latest, "discarding stale product response");
            return FetchOutcome::Discarded {
                epoch,
                latest: self.latest,
            };
        }

        match result {
            Ok(page) => {
                tracing::debug!(
                    %epoch,
                    products = page.products.len(),
                    page = page.pagination.current_page,
                    "applied product page"
                );
                self.current = page;
                self.state = FetchState::Success;
                FetchOutcome::Applied { epoch }
            }
            Err(err) => {
                tracing::warn!(%epoch, error = %err, "product fetch failed");
                let message = err.user_message();
                self.error = Some(message.clone());
                self.state = FetchState::Error;
                FetchOutcome::Failed { epoch, message }
            }
        }
    }

    pub fn latest(&self) -> Epoch {
        self.latest
    }

    pub fn state(&self) -> FetchState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == FetchState::Loading
    }

    pub fn current(&self) -> &PageResult {
        &self.current
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
