/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Metrics derived from a finished timeline.
//!
//! [`MetricsCalculator`] walks the segment list once, checking the timeline
//! invariants as it goes, and produces the immutable [`SimulationResult`]
//! handed to the rendering layer.
//!
//! Per process:
//!
//! ```text
//! completion = end of the last segment
//! turnaround = completion - arrival
//! waiting    = turnaround - burst
//! ```

pub mod summary;

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

pub use summary::{IdlePeriod, Summary};

use crate::error::{SegmentDefect, SimError};
use crate::process::{Process, ProcessId, Segment, Time};
use crate::request::Algorithm;

// ── Result types ──────────────────────────────────────────────────────────────

/// Derived statistics of one process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProcessMetrics {
    pub completion: Time,
    pub turnaround: Time,
    pub waiting: Time,
}

/// Output of one simulation run: the Gantt chart plus per-process metrics.
///
/// Read-only once built.  Maps use `BTreeMap` so iteration (and serialised
/// output) is ordered by process id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationResult {
    algorithm: Algorithm,
    segments: Vec<Segment>,
    metrics: BTreeMap<ProcessId, ProcessMetrics>,
}

impl SimulationResult {
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// The Gantt chart, in start-time order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn metrics(&self) -> &BTreeMap<ProcessId, ProcessMetrics> {
        &self.metrics
    }

    pub fn metrics_for(&self, id: ProcessId) -> Option<&ProcessMetrics> {
        self.metrics.get(&id)
    }

    /// Time at which the last segment ends (the timeline starts at 0).
    pub fn makespan(&self) -> Time {
        self.segments.last().map_or(0, |s| s.end)
    }

    /// Total time during which some process held the CPU.
    pub fn busy_time(&self) -> Time {
        self.segments.iter().map(Segment::duration).sum()
    }
}

// ── MetricsCalculator ─────────────────────────────────────────────────────────

/// Per-process running totals while walking the segment list.
#[derive(Debug, Default, Clone, Copy)]
struct Accumulated {
    cpu_time: Time,
    last_end: Option<Time>,
}

/// Derives [`SimulationResult`]s from segment lists over a fixed set of
/// processes.
pub struct MetricsCalculator<'a> {
    processes: BTreeMap<ProcessId, &'a Process>,
}

impl<'a> MetricsCalculator<'a> {
    pub fn new(processes: &'a [Process]) -> Self {
        Self {
            processes: processes.iter().map(|p| (p.id(), p)).collect(),
        }
    }

    /// Check `segments` and compute metrics for every process.
    ///
    /// # Errors
    /// [`SimError::InconsistentSegments`] for the first violated invariant:
    /// unknown process id, empty segment, overlap / out-of-order segment,
    /// a process running before it arrived (which is what a negative waiting
    /// time would require), a process that never ran, or CPU time not matching
    /// the burst.
    pub fn calculate(
        &self,
        algorithm: Algorithm,
        segments: Vec<Segment>,
    ) -> Result<SimulationResult, SimError> {
        let mut totals: BTreeMap<ProcessId, Accumulated> = BTreeMap::new();
        let mut previous_end: Option<Time> = None;

        for seg in &segments {
            let process = self
                .processes
                .get(&seg.process_id)
                .ok_or(SegmentDefect::UnknownProcess {
                    process_id: seg.process_id,
                })?;

            if seg.end <= seg.start {
                return Err(SegmentDefect::EmptySegment {
                    process_id: seg.process_id,
                    start: seg.start,
                    end: seg.end,
                }
                .into());
            }
            if let Some(prev) = previous_end.filter(|&prev| seg.start < prev) {
                return Err(SegmentDefect::Overlap {
                    process_id: seg.process_id,
                    start: seg.start,
                    previous_end: prev,
                }
                .into());
            }
            if seg.start < process.arrival_time() {
                return Err(SegmentDefect::StartedBeforeArrival {
                    process_id: seg.process_id,
                    start: seg.start,
                    arrival: process.arrival_time(),
                }
                .into());
            }

            let acc = totals.entry(seg.process_id).or_default();
            acc.cpu_time += seg.duration();
            acc.last_end = Some(seg.end);
            previous_end = Some(seg.end);
        }

        let mut metrics = BTreeMap::new();
        for (&id, process) in &self.processes {
            let acc = totals.get(&id).copied().unwrap_or_default();
            let completion = acc
                .last_end
                .ok_or(SegmentDefect::NeverScheduled { process_id: id })?;

            if acc.cpu_time != process.burst_time() {
                return Err(SegmentDefect::BurstMismatch {
                    process_id: id,
                    expected: process.burst_time(),
                    actual: acc.cpu_time,
                }
                .into());
            }

            // non-overlapping segments at or after arrival that sum to the
            // burst end no earlier than arrival + burst
            let turnaround = completion - process.arrival_time();
            let waiting = turnaround - process.burst_time();

            metrics.insert(
                id,
                ProcessMetrics {
                    completion,
                    turnaround,
                    waiting,
                },
            );
        }
        debug!(processes = metrics.len(), "metrics calculated");

        Ok(SimulationResult {
            algorithm,
            segments,
            metrics,
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
