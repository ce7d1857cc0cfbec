//! Common infrastructure for the Possum selector toolkit.
//!
//! This crate provides shared plumbing used by the feature crates:
//! - **Warning System** - deduplicated colored terminal diagnostics

pub mod warning;
