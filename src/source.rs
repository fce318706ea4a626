//! Data sources that turn a query into suggestions
//!
//! The controller only sees the [`DataSource`] trait. Transport is entirely
//! up to the implementation: it may respond before `fetch` returns, from a
//! worker thread, from an async task, or never.

use std::path::Path;
use std::sync::mpsc::{self, Sender};
use std::thread;
use std::time::Duration;

use tokio::runtime::Handle;

use crate::error::TypeaheadError;
use crate::request::{Request, Responder};

/// Default cap on suggestions returned by [`WordListSource`]
pub const DEFAULT_MAX_RESULTS: usize = 50;

/// Built-in word list used when no file is given
pub const DEFAULT_WORDS: &[&str] = &[
    "apple",
    "apricot",
    "avocado",
    "banana",
    "blackberry",
    "blueberry",
    "cantaloupe",
    "cherry",
    "clementine",
    "coconut",
    "cranberry",
    "date",
    "dragonfruit",
    "durian",
    "elderberry",
    "fig",
    "gooseberry",
    "grape",
    "grapefruit",
    "guava",
    "honeydew",
    "jackfruit",
    "kiwi",
    "kumquat",
    "lemon",
    "lime",
    "lychee",
    "mandarin",
    "mango",
    "mulberry",
    "nectarine",
    "olive",
    "orange",
    "papaya",
    "passionfruit",
    "peach",
    "pear",
    "persimmon",
    "pineapple",
    "plum",
    "pomegranate",
    "quince",
    "raspberry",
    "starfruit",
    "strawberry",
    "tangerine",
    "watermelon",
];

/// Produces suggestions for a request
///
/// Implementations must call `responder.respond` at most once; the type
/// enforces it. Dropping the responder leaves the controller unchanged.
pub trait DataSource<T> {
    fn fetch(&mut self, request: Request, responder: Responder<T>);
}

impl<T, F> DataSource<T> for F
where
    F: FnMut(Request, Responder<T>),
{
    fn fetch(&mut self, request: Request, responder: Responder<T>) {
        self(request, responder)
    }
}

/// Case-insensitive prefix match over a fixed word list
#[derive(Debug, Clone)]
pub struct WordListSource {
    words: Vec<String>,
    max_results: usize,
}

impl WordListSource {
    pub fn new(words: Vec<String>) -> Self {
        Self {
            words,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    pub fn builtin() -> Self {
        Self::new(DEFAULT_WORDS.iter().map(|w| w.to_string()).collect())
    }

    /// One word per line; blank lines are skipped
    pub fn from_text(text: &str) -> Self {
        Self::new(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn load(path: &Path) -> Result<Self, TypeaheadError> {
        let text = std::fs::read_to_string(path).map_err(|source| TypeaheadError::WordList {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_text(&text))
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn matches(&self, query: &str) -> Vec<String> {
        let needle = query.to_lowercase();
        self.words
            .iter()
            .filter(|word| word.to_lowercase().starts_with(&needle))
            .take(self.max_results)
            .cloned()
            .collect()
    }
}

impl DataSource<String> for WordListSource {
    fn fetch(&mut self, request: Request, responder: Responder<String>) {
        responder.respond(self.matches(request.query()));
    }
}

/// Runs an inner source on a background worker thread
///
/// Requests are handled in the order they were issued, each after an
/// optional delay that stands in for network latency.
pub struct ThreadedSource<T> {
    request_tx: Sender<(Request, Responder<T>)>,
}

impl<T: Send + 'static> ThreadedSource<T> {
    pub fn spawn<S>(mut inner: S, delay: Duration) -> Self
    where
        S: DataSource<T> + Send + 'static,
    {
        let (request_tx, request_rx) = mpsc::channel::<(Request, Responder<T>)>();

        thread::spawn(move || {
            while let Ok((request, responder)) = request_rx.recv() {
                if !delay.is_zero() {
                    thread::sleep(delay);
                }
                inner.fetch(request, responder);
            }
            log::debug!("Suggestion worker thread shutting down");
        });

        Self { request_tx }
    }
}

impl<T> DataSource<T> for ThreadedSource<T> {
    fn fetch(&mut self, request: Request, responder: Responder<T>) {
        if let Err(mpsc::SendError((request, _))) = self.request_tx.send((request, responder)) {
            log::warn!("Suggestion worker is gone; request {} dropped", request.id());
        }
    }
}

/// Spawns one async task per request on a tokio runtime
pub struct TaskSource<F> {
    handle: Handle,
    make_fetch: F,
}

impl<F> TaskSource<F> {
    pub fn new(handle: Handle, make_fetch: F) -> Self {
        Self { handle, make_fetch }
    }
}

impl<T, F, Fut> DataSource<T> for TaskSource<F>
where
    T: Send + 'static,
    F: FnMut(Request) -> Fut,
    Fut: Future<Output = Vec<T>> + Send + 'static,
{
    fn fetch(&mut self, request: Request, responder: Responder<T>) {
        let fetch = (self.make_fetch)(request);
        self.handle.spawn(async move {
            responder.respond(fetch.await);
        });
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod source_tests;
