//! Core types and configuration for cantus.
//!
//! This crate provides the data structures shared by every cantus crate:
//! - [`types`]: Notes, durations, severities, and rule identifiers
//! - [`key`]: Major key signatures and scale-degree arithmetic
//! - [`interval`]: Vertical interval classes and melodic direction
//! - [`pitch`]: Scientific pitch names (`C4`, `Bb3`) to and from MIDI numbers
//! - [`config`]: The rule catalog loaded from `.cantus/rules.json`
//! - [`excerpt`]: Two-voice excerpt documents read by the CLI

pub mod config;
pub mod excerpt;
pub mod interval;
pub mod key;
pub mod pitch;
pub mod types;
