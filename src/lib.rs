//! Dragoman: capability directory for speech-translation agents.
//!
//! This crate is the registry and bootstrap layer that maps model
//! identifiers to instantiated speech-translation agents and advertises
//! their capability metadata to a calling service. It builds and indexes
//! opaque transcoder handles; audio chunking, incremental decoding, and
//! everything else that makes an agent runnable lives in the embedding
//! service behind the factory port.
//!
//! # Architecture
//!
//! Dragoman follows hexagonal architecture principles:
//!
//! - **Domain**: capability metadata and directory entries with no
//!   infrastructure dependencies
//! - **Ports**: abstract trait interfaces for the external inference
//!   framework
//! - **Adapters**: concrete implementations of ports
//! - **Services**: population and lookup orchestration
//!
//! # Modules
//!
//! - [`agent_directory`]: agent registration, population, and discovery

pub mod agent_directory;
