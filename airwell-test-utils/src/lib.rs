// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test fixtures for the Airwell workspace.
//!
//! - [`fixtures`]: small validated sensor tables and seeded settings
//! - [`RecordingListener`]: a subscriber callback that keeps every snapshot
//! - [`helpers`]: async stream assertions and range checks
//!
//! For development and testing only.

pub mod fixtures;
pub mod helpers;
pub mod recording_listener;

pub use fixtures::*;
pub use helpers::*;
pub use recording_listener::RecordingListener;
