// tracker_server/src/services/mod.rs

//! Clients for services outside this process.

pub mod people_lookup;

pub use people_lookup::{HttpPeopleLookup, LookupError, PeopleLookup};
