//! Crate-level test suites.
//!
//! `conformance` pins the decode/encode contracts charset by charset,
//! `identification` covers labels and ECI designators, `properties` holds
//! the randomized round-trip and totality laws.

mod identification;
