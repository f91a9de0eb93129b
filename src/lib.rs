//! airline-flights - In-memory airline and flight registry served over HTTP
//!
//! - [`registry`]: airlines and their ordered flight lists
//! - [`http_server`]: axum routes, configuration and server
//! - [`cli`]: the `flights` command line
//! - [`logging`]: tracing subscriber setup

pub mod cli;
pub mod http_server;
pub mod logging;
pub mod registry;
