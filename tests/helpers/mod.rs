//! Test helpers module
//!
//! Shared setup for the KidSpots integration tests: a ready context with
//! zero simulated latency, fixture builders and a backend whose writes can
//! be made to fail.

#![allow(dead_code)]

pub mod controlled_backend;
pub mod test_context;
pub mod test_data;

#[allow(unused_imports)]
pub use controlled_backend::*;
#[allow(unused_imports)]
pub use test_context::*;
#[allow(unused_imports)]
pub use test_data::*;
