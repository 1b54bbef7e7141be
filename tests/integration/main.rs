//! Integration tests for rs-readable
//!
//! These tests verify the complete extraction pipeline works end-to-end
//! with realistic HTML samples from various sources.

#![allow(clippy::expect_used)] // expect() is appropriate in tests for clear panic messages

mod edge_cases;
mod real_world_articles;
