//! Version selection layer
//!
//! Parses release tags, orders them by semver precedence and picks the newest
//! stable release of every minor line.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Registry   │────▶│   semver    │────▶│  Selector   │
//! │ (fetch tags)│     │  (parse)    │     │(latest/line)│
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                                       │
//!        ▼                                       ▼
//! ┌─────────────┐                         ┌─────────────┐
//! │ Registries  │                         │   Catalog   │
//! │  (github)   │                         │   (order)   │
//! └─────────────┘                         └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`catalog`]: Precedence ordering over a set of versions
//! - [`selector`]: Latest stable release per `(major, minor)` line
//! - [`semver`]: Strict version parsing and tag normalization
//! - [`registry`]: Registry trait for listing releases
//! - [`registries`]: Concrete registry implementations (GitHub)
//! - [`error`]: Error types for parsing and registry operations

pub mod catalog;
pub mod error;
pub mod registries;
pub mod registry;
pub mod selector;
pub mod semver;
