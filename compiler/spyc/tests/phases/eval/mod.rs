//! Interpreter phase tests.
//!
//! - `scenarios` - small complete programs and their output
//! - `recovery` - lenient and strict handling of runtime errors

mod recovery;
mod scenarios;
