//! Common test utilities for the registration rule engine.
//!
//! Provides request fixtures shared by the rule and coordinator tests, plus
//! spy rules and recording observers for asserting evaluation order.

pub mod builders;
pub mod test_utils;

pub use builders::{heavy_load_request, standard_rule_set, typical_request};
pub use test_utils::{RecordingObserver, SpyRule};
