/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Core data structures of the simulator.
//!
//! Two types model the two sides of one simulation run:
//!
//! ```text
//! caller ──(arrivals, bursts)──►  Process  ──(strategy)──►  Segment  ──►  metrics / Gantt chart
//!                                  ↑ input                    ↑ output
//!                                  validated, immutable       one CPU interval
//! ```
//!
//! # Ownership model
//! A [`ProcessTable`] is built once per run from validated input and only
//! ever lent out as `&[Process]`.  Strategies never mutate a `Process`; any
//! bookkeeping such as remaining burst time lives in the strategy's own
//! local state.

use serde::Serialize;

use crate::error::{InputErrorReason, SimError};

/// Simulation time, in abstract time units.
pub type Time = u64;

/// Process identifier: 1-based position in the caller's input.
pub type ProcessId = u32;

// ── Process ───────────────────────────────────────────────────────────────────

/// Immutable input descriptor of one simulated process.
///
/// Fields are private so a `Process` can only come out of [`Process::new`],
/// which enforces `burst_time > 0`.  Arrival times are unsigned, so
/// `arrival_time >= 0` holds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Process {
    id: ProcessId,
    arrival_time: Time,
    burst_time: Time,
}

impl Process {
    /// Build a process record.
    ///
    /// # Errors
    /// [`InputErrorReason::NonPositiveBurst`] when `burst_time` is zero.
    pub fn new(id: ProcessId, arrival_time: Time, burst_time: Time) -> Result<Self, SimError> {
        if burst_time == 0 {
            return Err(InputErrorReason::NonPositiveBurst {
                process: id as usize,
                burst: 0,
            }
            .into());
        }
        Ok(Self {
            id,
            arrival_time,
            burst_time,
        })
    }

    pub fn id(&self) -> ProcessId {
        self.id
    }

    pub fn arrival_time(&self) -> Time {
        self.arrival_time
    }

    pub fn burst_time(&self) -> Time {
        self.burst_time
    }

    /// Display label used in the Gantt chart, e.g. `P3`.
    pub fn label(&self) -> String {
        format!("P{}", self.id)
    }
}

// ── Segment ───────────────────────────────────────────────────────────────────

/// One contiguous interval `[start, end)` during which `process_id` owns the
/// CPU.
///
/// A Round Robin run produces several segments per process; FCFS and SJF
/// produce exactly one.  Idle CPU time is never represented by a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub process_id: ProcessId,
    pub start: Time,
    pub end: Time,
}

impl Segment {
    pub fn new(process_id: ProcessId, start: Time, end: Time) -> Self {
        Self {
            process_id,
            start,
            end,
        }
    }

    /// Length of the interval.  Zero for a malformed `end <= start` segment.
    pub fn duration(&self) -> Time {
        self.end.saturating_sub(self.start)
    }
}

// ── ProcessTable ──────────────────────────────────────────────────────────────

/// Validated, id-tagged set of processes for one run.
///
/// Ids are assigned `1..=n` in input order and are used for display
/// correlation only; they never influence scheduling priority except as the
/// final tie-break ("input order").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessTable {
    processes: Vec<Process>,
}

impl ProcessTable {
    /// Build a table from parallel arrival / burst columns.
    ///
    /// Besides the per-value range checks, the whole timeline must fit in
    /// [`Time`]: no schedule ends later than the latest arrival plus the sum of
    /// all bursts, so once that bound is representable no strategy can
    /// overflow the clock.
    ///
    /// # Errors
    /// * [`InputErrorReason::NonPositiveCount`] for empty columns.
    /// * [`InputErrorReason::LengthMismatch`] when the columns differ in length.
    /// * [`InputErrorReason::TooManyProcesses`] when ids would not fit in
    ///   [`ProcessId`].
    /// * [`InputErrorReason::NegativeArrival`] / [`InputErrorReason::NonPositiveBurst`]
    ///   for the first out-of-range value, scanning in input order.
    /// * [`InputErrorReason::TimelineOverflow`] when the timeline bound does
    ///   not fit in [`Time`].
    pub fn from_columns(arrivals: &[i64], bursts: &[i64]) -> Result<Self, SimError> {
        if arrivals.is_empty() {
            return Err(InputErrorReason::NonPositiveCount { count: 0 }.into());
        }
        if bursts.len() != arrivals.len() {
            return Err(InputErrorReason::LengthMismatch {
                field: "burst",
                expected: arrivals.len(),
                actual: bursts.len(),
            }
            .into());
        }

        let mut processes = Vec::with_capacity(arrivals.len());
        let mut latest_arrival: Time = 0;
        let mut total_burst: Time = 0;
        for (idx, (&arrival, &burst)) in arrivals.iter().zip(bursts).enumerate() {
            let position = idx + 1;
            let id = ProcessId::try_from(position).map_err(|_| {
                InputErrorReason::TooManyProcesses {
                    count: arrivals.len(),
                }
            })?;
            let arrival_time = Time::try_from(arrival).map_err(|_| {
                InputErrorReason::NegativeArrival {
                    process: position,
                    arrival,
                }
            })?;
            let burst_time = Time::try_from(burst)
                .ok()
                .filter(|&b| b > 0)
                .ok_or(InputErrorReason::NonPositiveBurst {
                    process: position,
                    burst,
                })?;

            latest_arrival = latest_arrival.max(arrival_time);
            total_burst = total_burst
                .checked_add(burst_time)
                .filter(|total| latest_arrival.checked_add(*total).is_some())
                .ok_or(InputErrorReason::TimelineOverflow { process: position })?;

            processes.push(Process {
                id,
                arrival_time,
                burst_time,
            });
        }

        Ok(Self { processes })
    }

    /// Processes in input order.
    pub fn as_slice(&self) -> &[Process] {
        &self.processes
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Look up a process by id.
    pub fn get(&self, id: ProcessId) -> Option<&Process> {
        // ids are 1-based positions, so this is a direct index
        (id as usize)
            .checked_sub(1)
            .and_then(|idx| self.processes.get(idx))
    }

    /// Sum of all burst times: the busy portion of any complete schedule.
    /// Cannot overflow, see [`ProcessTable::from_columns`].
    pub fn total_burst(&self) -> Time {
        self.processes.iter().map(Process::burst_time).sum()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
