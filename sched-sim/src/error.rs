/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Structured error types for the scheduling simulator.
//!
//! Two reason enums model the two failure layers:
//!
//! * [`InputErrorReason`] — why caller-supplied data was rejected before any
//!   scheduling happened (carries the offending value and process position).
//! * [`SegmentDefect`] — which invariant a strategy's segment list broke when
//!   the metrics calculator checked it.
//!
//! Both are wrapped by the top-level [`SimError`] returned from
//! [`simulate()`](crate::scheduler::simulate).
//!
//! `InvalidInput` is recoverable (the caller re-prompts).  `InconsistentSegments`
//! means a strategy produced a bad timeline and the whole run is discarded.

use thiserror::Error;

use crate::process::{ProcessId, Time};

// ── Input validation ──────────────────────────────────────────────────────────

/// Detailed reason why a simulation request was rejected.
///
/// Process positions (`process`) are 1-based, matching the `P<n>` labels the
/// caller sees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputErrorReason {
    /// The process count is zero or negative.
    NonPositiveCount { count: i64 },

    /// The `arrivals` or `bursts` column does not have `process_count` entries.
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A text field could not be parsed as an integer.
    NotANumber {
        field: &'static str,
        process: usize,
        value: String,
    },

    /// A burst time is zero or negative.
    NonPositiveBurst { process: usize, burst: i64 },

    /// An arrival time is negative.
    NegativeArrival { process: usize, arrival: i64 },

    /// More processes than a [`ProcessId`] can number.
    TooManyProcesses { count: usize },

    /// Latest arrival plus total burst time does not fit in [`Time`]; the
    /// timeline could not be simulated.  `process` is the first process whose
    /// burst pushes it over.
    TimelineOverflow { process: usize },

    /// Round Robin was selected without a time quantum.
    MissingQuantum,

    /// The Round Robin time quantum is zero or negative.
    NonPositiveQuantum { quantum: i64 },

    /// The algorithm name is not one of `fcfs`, `sjf`, `round_robin`.
    UnknownAlgorithm { name: String },
}

impl std::fmt::Display for InputErrorReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputErrorReason::NonPositiveCount { count } => {
                write!(f, "process count must be positive, got {}", count)
            }

            InputErrorReason::LengthMismatch {
                field,
                expected,
                actual,
            } => write!(
                f,
                "expected {} {} value(s), got {}",
                expected, field, actual
            ),

            InputErrorReason::NotANumber {
                field,
                process,
                value,
            } => write!(
                f,
                "{} of P{} is not a number: '{}'",
                field, process, value
            ),

            InputErrorReason::NonPositiveBurst { process, burst } => {
                write!(f, "burst time of P{} must be positive, got {}", process, burst)
            }

            InputErrorReason::NegativeArrival { process, arrival } => write!(
                f,
                "arrival time of P{} must not be negative, got {}",
                process, arrival
            ),

            InputErrorReason::TooManyProcesses { count } => {
                write!(f, "too many processes: {}", count)
            }

            InputErrorReason::TimelineOverflow { process } => write!(
                f,
                "total time exceeds the simulated range at P{}",
                process
            ),

            InputErrorReason::MissingQuantum => {
                write!(f, "round_robin requires a time quantum")
            }

            InputErrorReason::NonPositiveQuantum { quantum } => {
                write!(f, "time quantum must be positive, got {}", quantum)
            }

            InputErrorReason::UnknownAlgorithm { name } => write!(
                f,
                "unknown scheduling algorithm '{}' (valid: fcfs, sjf, round_robin)",
                name
            ),
        }
    }
}

// ── Segment consistency ───────────────────────────────────────────────────────

/// Invariant a segment list violated.
///
/// Every variant points at a strategy bug, never at user error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentDefect {
    /// A segment names a process id that is not in the process table.
    UnknownProcess { process_id: ProcessId },

    /// A segment has `end <= start`.
    EmptySegment {
        process_id: ProcessId,
        start: Time,
        end: Time,
    },

    /// A segment starts before the previous one ended.
    Overlap {
        process_id: ProcessId,
        start: Time,
        previous_end: Time,
    },

    /// A segment runs a process before it arrived.  This is also the only way
    /// a waiting time could come out negative: with every segment at or after
    /// arrival and the durations summing to the burst, `turnaround >= burst`.
    StartedBeforeArrival {
        process_id: ProcessId,
        start: Time,
        arrival: Time,
    },

    /// The segment durations of a process do not add up to its burst time.
    BurstMismatch {
        process_id: ProcessId,
        expected: Time,
        actual: Time,
    },

    /// A process never received any CPU time.
    NeverScheduled { process_id: ProcessId },
}

impl std::fmt::Display for SegmentDefect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SegmentDefect::UnknownProcess { process_id } => {
                write!(f, "segment references unknown process P{}", process_id)
            }

            SegmentDefect::EmptySegment {
                process_id,
                start,
                end,
            } => write!(
                f,
                "segment of P{} is empty or reversed ({}..{})",
                process_id, start, end
            ),

            SegmentDefect::Overlap {
                process_id,
                start,
                previous_end,
            } => write!(
                f,
                "segment of P{} starts at {} before the previous segment ended at {}",
                process_id, start, previous_end
            ),

            SegmentDefect::StartedBeforeArrival {
                process_id,
                start,
                arrival,
            } => write!(
                f,
                "P{} runs at {} but only arrives at {}",
                process_id, start, arrival
            ),

            SegmentDefect::BurstMismatch {
                process_id,
                expected,
                actual,
            } => write!(
                f,
                "P{} received {} time unit(s) of CPU but needs {}",
                process_id, actual, expected
            ),

            SegmentDefect::NeverScheduled { process_id } => {
                write!(f, "P{} never received any CPU time", process_id)
            }
        }
    }
}

// ── Top-level error ───────────────────────────────────────────────────────────

/// Top-level error type of the simulator.
///
/// | Variant | Raised by | Meaning |
/// |---|---|---|
/// | `InvalidInput` | request validation | caller data is malformed, nothing ran |
/// | `InconsistentSegments` | metrics calculator | a strategy emitted a bad timeline |
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// Caller-supplied data was malformed or out of range.
    #[error("invalid input: {0}")]
    InvalidInput(InputErrorReason),

    /// The segment list produced by a strategy broke a timeline invariant.
    #[error("inconsistent segments: {0}")]
    InconsistentSegments(SegmentDefect),
}

impl From<InputErrorReason> for SimError {
    fn from(reason: InputErrorReason) -> Self {
        SimError::InvalidInput(reason)
    }
}

impl From<SegmentDefect> for SimError {
    fn from(defect: SegmentDefect) -> Self {
        SimError::InconsistentSegments(defect)
    }
}
