//! End-to-end tests driving the alticons binary against on-disk fixtures.

mod common;
mod sync_tests;
