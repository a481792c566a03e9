//! provkit - helper utilities for resource provider plugins
//!
//! Small, independent modules shared by provider codebases:
//!
//! - [`log`]: leveled line logger gated by a severity threshold
//! - [`schema`]: attribute trees and data-source schema derivation
//! - [`random`]: random strings and distinct-integer permutations
//! - [`conv`]: typed views over dynamic value slices
//! - [`validation`]: diff-suppress predicates
//!
//! Modules do not depend on each other; each can be used in isolation.

pub mod conv;
pub mod log;
pub mod random;
pub mod schema;
pub mod validation;
