/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! sched-sim – CPU scheduling simulator
//!
//! Module layout:
//!
//! ```text
//! lib.rs
//! ├── process      – Process / Segment / ProcessTable data model
//! ├── request      – Algorithm + SimulationRequest (caller input, validation)
//! ├── scheduler/   – Strategy dispatch: FCFS, SJF, Round Robin
//! ├── metrics/     – MetricsCalculator, SimulationResult, run summary
//! ├── error        – SimError and its structured reasons
//! ├── config/      – YAML workload files
//! ├── generator    – seeded random workloads
//! └── render       – text Gantt chart and metrics table
//! ```
//!
//! The core (`process`, `request`, `scheduler`, `metrics`) is pure and
//! synchronous; `config`, `generator` and `render` sit around it for the
//! `sched-sim` binary and other presentation layers.

pub mod config;
pub mod error;
pub mod generator;
pub mod metrics;
pub mod process;
pub mod render;
pub mod request;
pub mod scheduler;

pub use error::SimError;
pub use metrics::SimulationResult;
pub use request::{Algorithm, SimulationRequest};
pub use scheduler::simulate;
