//! Domain types shared by the Disney fan site crates.
//!
//! Holds the character data model as it comes off the wire, the locally
//! stored user profile, and the shared error type. Nothing in here performs
//! I/O, so it can be used by the API client, the web server, and tests alike.

pub mod character;
pub mod error;
pub mod profile;
pub mod types;
