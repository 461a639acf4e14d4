//! Minimal Web Forum Library
//!
//! This library crate holds the forum's modules; the binary (`main.rs`) only
//! parses configuration, sets up logging and starts the server.
//!
//! ## Architecture Modules
//! - **`auth`**: Credential file, session table and the login guard used by protected routes.
//! - **`articles`**: The in-memory article store, the home-page title listing and the
//!   upload/details/reply handlers.
//! - **`pages`**: Static forms read at startup and the askama views rendered per request.
//! - **`server`**: Router assembly, listener and graceful shutdown.
//! - **`config`** / **`error`**: Runtime settings and the forum's error classification.

pub mod articles;
pub mod auth;
pub mod config;
pub mod error;
pub mod form;
pub mod pages;
pub mod server;
