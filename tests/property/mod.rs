//! Property tests
//!
//! Uses proptest to generate random inputs and verify properties

mod store_proptest;
