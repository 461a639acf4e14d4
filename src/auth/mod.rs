//! Authentication Module
//!
//! Owns everything between an anonymous visitor and a logged-in user.
//!
//! ## Core Concepts
//! - **Credentials**: `name,password` lines in a flat file. Register appends, login scans.
//! - **Sessions**: an in-memory table from opaque cookie token to user name.
//! - **Guard**: the `CurrentUser` extractor; routes that take it redirect anonymous
//!   requests to the login page.

pub mod credentials;
pub mod handlers;
pub mod session;

#[cfg(test)]
mod tests;
