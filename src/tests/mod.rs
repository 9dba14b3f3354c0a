//! Test modules for the Segment Trie crate.
//!
//! This module contains crate-internal test suites:
//! - Property-based tests for the trie using proptest
//! - Randomized bulk tests mirroring long-running workloads
//! - Configuration loading and validation tests
//! - Error type tests
//! - Shared fixtures and strategies

pub mod config_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{key_strategy, segment_strategy, TestFixture};
