//! Request lifecycle between the controller and its data source
//!
//! Every qualifying input issues exactly one fetch. Each fetch carries a
//! single-use [`Responder`]; completions are collected by polling and then
//! filtered through the configured [`StalePolicy`].

mod coordinator;
mod responder;

pub use coordinator::{RequestCoordinator, StalePolicy};
pub use responder::{Request, RequestId, Responder};
