//! # gutimer-common
//!
//! Shared types, error definitions, configuration model, constants and
//! the duration-string parser used across the gutimer workspace.
//!
//! This crate is the leaf of the dependency graph. It depends on no other
//! internal crate and provides the primitives that the timing core and the
//! CLI build upon.

pub mod config;
pub mod constants;
pub mod duration;
pub mod error;
pub mod types;
