// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Text dashboard over a [`SensorDataManager`](airwell_monitor::SensorDataManager).
//!
//! The dashboard never changes readings itself. It derives a
//! [`DisplayStatus`] for each reading from its sensor's thresholds, counts
//! them into a [`DashboardSummary`], and renders the latest snapshot as a
//! table.
//!
//! ```
//! use airwell_dashboard::{DashboardView, DisplayStatus, DEFAULT_LIVE_INTERVAL};
//! use airwell_monitor::SensorDataManager;
//! use std::sync::Arc;
//!
//! let manager = Arc::new(SensorDataManager::default());
//! let view = DashboardView::mount(manager.clone(), DEFAULT_LIVE_INTERVAL);
//!
//! manager.update_sensor("SENS_001", 33.0);
//! assert_eq!(view.status_of("SENS_001"), Some(DisplayStatus::Warning));
//! ```

pub mod dashboard_view;
pub mod display_status;
pub mod render;
pub mod sink;
pub mod summary;

pub use dashboard_view::{DashboardView, DEFAULT_LIVE_INTERVAL};
pub use display_status::{display_status, DisplayStatus};
pub use render::{format_value, render, Frame, MISSING_VALUE};
pub use sink::{DashboardSink, TerminalSink};
pub use summary::DashboardSummary;
