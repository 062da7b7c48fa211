//! Step definitions for agent directory behaviour scenarios.

pub mod world;

mod given;
mod then;
mod when;
