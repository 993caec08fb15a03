//! MindTide - Temporal Emotion Analytics Engine
//!
//! This crate turns a per-user stream of timestamped emotion observations
//! into temporal analytics: mood forecasts, day/time-of-week pattern
//! warnings, a composite resilience score with a narrative growth state,
//! and short personalized reflections.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
