//! Testing infrastructure for tstamp integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `TestWorld`: Fluent interface for declarative CLI test setup
//! - `fakes`: Recording stand-ins for the page, telemetry, notifier, sink and transport
//! - `fixtures`: Sample record generation and placement
//! - `assertions`: Checks for exported payloads

pub mod assertions;
pub mod fakes;
pub mod fixtures;
pub mod world;

pub use fakes::{
    MemorySink, PageEvent, RecordingNotifier, RecordingPage, RecordingTelemetry,
    ScriptedTransport, SavedFile,
};
pub use world::TestWorld;
