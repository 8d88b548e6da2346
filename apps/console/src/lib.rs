//! sentiscope-console: the interactive client for the classification
//! endpoint.
//!
//! Owns the session (analysis history, language, current text, active
//! page), issues one classification request per analyze action, and renders
//! the result plus a derived dashboard as terminal output. Library form so
//! the request/session/aggregation layers are testable without a terminal.

pub mod client;
pub mod i18n;
pub mod repl;
pub mod session;
pub mod stats;
pub mod view;
