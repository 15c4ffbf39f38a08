//! Test harness for `TwabAccount`'s ring-buffer primitives and layout.
//!
//! - `core_unit_tests`: append/overwrite/oldest/newest behaviour.
//! - `layout_zero_copy`: byte-level layout and zero-copy trait contracts.
//! - `property_tests`: proptest coverage of append/overwrite sequences.
//! - `serialization_and_integration`: raw byte round-trips.
//! - `helpers`: shared fixtures.

pub mod helpers;
pub mod layout_zero_copy;
pub mod serialization_and_integration;
