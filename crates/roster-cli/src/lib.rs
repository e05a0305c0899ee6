//! roster-cli library
//!
//! Exports the user API client and the session so tests and the binary
//! share them.

pub mod cli;
pub mod client;
pub mod commands;
pub mod error;
pub mod logger;
pub mod session;

#[cfg(test)]
mod tests;

pub use client::{Client, ClientError, ClientErrorResult};
pub use error::{AppError, Result as AppErrorResult};
pub use session::{Session, UserListing};
