//! Agent registration, population, and discovery for Dragoman.
//!
//! The directory wraps an external inference framework behind the
//! [`ports::TranscoderFactory`] contract, builds agents either from a
//! JSON model roster supplied at startup or from a built-in default, and
//! answers name lookups and capability queries from the calling service.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
