//! Test modules for the Mokulua compound-word analyzer.
//!
//! This module contains the internal test suites that cut across
//! components: word-list loading, report aggregation and the
//! configuration layer, together with shared fixtures.

pub mod config_tests;
pub mod lexicon_tests;
