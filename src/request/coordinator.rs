//! Issuing fetches and deciding which completions still apply

use clap::ValueEnum;
use serde::Deserialize;
use tokio::sync::oneshot::{self, error::TryRecvError};

use super::responder::{Request, RequestId, Responder};
use crate::source::DataSource;
use crate::suggestion_set::SuggestionSet;

/// Which completed fetches are allowed to replace the shown suggestions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum StalePolicy {
    /// Apply every completion, even one superseded by a newer request
    #[default]
    Accept,
    /// Apply a completion only if it belongs to the newest request
    Latest,
    /// Apply a completion only if its query matches the live input
    LiveQuery,
}

struct PendingRequest<T> {
    request: Request,
    rx: oneshot::Receiver<Vec<T>>,
}

/// Tracks in-flight fetches for one controller
pub struct RequestCoordinator<T> {
    policy: StalePolicy,
    last_issued: RequestId,
    /// Requests at or below this id were superseded by an emptied input
    invalidated_through: RequestId,
    pending: Vec<PendingRequest<T>>,
}

impl<T> RequestCoordinator<T> {
    pub fn new(policy: StalePolicy) -> Self {
        Self {
            policy,
            last_issued: 0,
            invalidated_through: 0,
            pending: Vec::new(),
        }
    }

    pub fn policy(&self) -> StalePolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: StalePolicy) {
        self.policy = policy;
    }

    /// Id of the most recently issued request (0 before the first)
    pub fn last_issued(&self) -> RequestId {
        self.last_issued
    }

    /// Fetches issued but not yet completed or dropped
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Issue one fetch for `query`
    ///
    /// Control returns as soon as the source has been handed the request;
    /// a synchronous source will already have responded.
    pub fn issue(&mut self, query: &str, source: &mut dyn DataSource<T>) -> RequestId {
        self.last_issued = self.last_issued.wrapping_add(1);
        let request = Request::new(self.last_issued, query);
        let (responder, rx) = Responder::channel(request.id());

        log::debug!("Issuing request {} for {:?}", request.id(), query);
        self.pending.push(PendingRequest {
            request: request.clone(),
            rx,
        });
        source.fetch(request, responder);

        self.last_issued
    }

    /// Mark every request issued so far as superseded
    ///
    /// Only the `Latest` policy consults this; it is how an emptied input
    /// outranks fetches still in flight.
    pub fn invalidate(&mut self) {
        self.invalidated_through = self.last_issued;
    }

    /// Collect finished fetches and return the one to apply, if any
    ///
    /// Completions are considered in issue order; when several are accepted
    /// in one poll, the last one wins.
    pub fn poll(&mut self, live_query: &str) -> Option<SuggestionSet<T>> {
        let mut accepted = None;
        let mut still_pending = Vec::with_capacity(self.pending.len());

        for mut pending in self.pending.drain(..) {
            match pending.rx.try_recv() {
                Ok(data) => {
                    let request = pending.request;
                    if Self::is_applicable(
                        self.policy,
                        self.last_issued,
                        self.invalidated_through,
                        &request,
                        live_query,
                    ) {
                        log::debug!(
                            "Accepted request {} ({} suggestions)",
                            request.id(),
                            data.len()
                        );
                        accepted = Some(SuggestionSet::new(request.query(), data));
                    } else {
                        log::debug!("Discarded stale request {}", request.id());
                    }
                }
                Err(TryRecvError::Empty) => still_pending.push(pending),
                Err(TryRecvError::Closed) => {
                    log::debug!(
                        "Request {} dropped without a response",
                        pending.request.id()
                    );
                }
            }
        }

        self.pending = still_pending;
        accepted
    }

    fn is_applicable(
        policy: StalePolicy,
        last_issued: RequestId,
        invalidated_through: RequestId,
        request: &Request,
        live_query: &str,
    ) -> bool {
        match policy {
            StalePolicy::Accept => true,
            StalePolicy::Latest => {
                request.id() == last_issued && request.id() > invalidated_through
            }
            StalePolicy::LiveQuery => request.query() == live_query,
        }
    }
}

#[cfg(test)]
#[path = "coordinator_tests.rs"]
mod coordinator_tests;
