//! Screen modules for the terminal client
//!
//! Each module owns the command handlers and rendering for one screen:
//! - auth: Login, registration, logout
//! - records: Record tables with search and filters, create/edit/delete
//! - profile: Profile view, password/email change, account deletion
//!
//! Handlers catch backend and validation errors at the interaction
//! boundary and turn them into notifications; nothing here panics on a
//! failed request.

pub mod auth;
pub mod profile;
pub mod records;

#[cfg(test)]
pub mod testing;
