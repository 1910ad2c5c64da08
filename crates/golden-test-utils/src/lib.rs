//! Shared test utilities for the golden-util workspace.
//!
//! This crate provides a standard goldens fixture so crate test suites do
//! not each hand-roll manifests, ledgers, and generated files. It is a
//! dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`tree`]: [`GoldenTree`] builder for regen/test scenarios

pub mod tree;

pub use tree::GoldenTree;
