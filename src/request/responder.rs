//! Request descriptor and its completion handle

use tokio::sync::oneshot;

/// Monotonically increasing identifier, one per issued fetch
pub type RequestId = u64;

/// What the data source is asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    id: RequestId,
    query: String,
}

impl Request {
    pub fn new(id: RequestId, query: impl Into<String>) -> Self {
        Self {
            id,
            query: query.into(),
        }
    }

    pub fn id(&self) -> RequestId {
        self.id
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}

/// Completion handle for one request
///
/// `respond` consumes the handle, so a request completes at most once.
/// Dropping it without responding means the request never completes; the
/// controller keeps its previous state.
#[derive(Debug)]
pub struct Responder<T> {
    request_id: RequestId,
    tx: oneshot::Sender<Vec<T>>,
}

impl<T> Responder<T> {
    pub(crate) fn channel(request_id: RequestId) -> (Self, oneshot::Receiver<Vec<T>>) {
        let (tx, rx) = oneshot::channel();
        (Self { request_id, tx }, rx)
    }

    pub fn request_id(&self) -> RequestId {
        self.request_id
    }

    /// Deliver the suggestions for this request
    pub fn respond(self, data: Vec<T>) {
        if self.tx.send(data).is_err() {
            // Controller went away before the fetch finished
            log::debug!("Dropping response for request {}: receiver gone", self.request_id);
        }
    }
}
