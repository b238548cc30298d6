/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Caller-facing simulation input.
//!
//! A [`SimulationRequest`] is the explicit, immutable configuration value the
//! presentation layer hands to [`simulate()`](crate::scheduler::simulate).  It
//! still holds raw signed integers so that out-of-range values can be reported
//! precisely; [`SimulationRequest::validate`] turns it into a
//! [`ProcessTable`] plus a [`Strategy`] before any scheduling happens.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{InputErrorReason, SimError};
use crate::process::ProcessTable;
use crate::scheduler::Strategy;

/// Quantum used for generated Round Robin workloads when none is given.
pub const DEFAULT_QUANTUM: i64 = 2;

// ── Algorithm ─────────────────────────────────────────────────────────────────

/// Closed set of supported scheduling algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// First-Come-First-Serve, non-preemptive.
    #[default]
    Fcfs,
    /// Shortest Job First, non-preemptive.
    Sjf,
    /// Round Robin with a fixed time quantum.
    RoundRobin,
}

impl Algorithm {
    /// Canonical lower-case name (`fcfs`, `sjf`, `round_robin`).
    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Fcfs => "fcfs",
            Algorithm::Sjf => "sjf",
            Algorithm::RoundRobin => "round_robin",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = SimError;

    /// Case-insensitive; accepts `-`, `_` or a space as separator and the
    /// `rr` shorthand.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match normalised.as_str() {
            "fcfs" => Ok(Algorithm::Fcfs),
            "sjf" => Ok(Algorithm::Sjf),
            "round_robin" | "rr" => Ok(Algorithm::RoundRobin),
            _ => Err(InputErrorReason::UnknownAlgorithm {
                name: s.to_string(),
            }
            .into()),
        }
    }
}

// ── SimulationRequest ─────────────────────────────────────────────────────────

/// Everything one simulation run needs.
///
/// `quantum` is only consulted for [`Algorithm::RoundRobin`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRequest {
    pub process_count: i64,
    pub arrivals: Vec<i64>,
    pub bursts: Vec<i64>,
    pub algorithm: Algorithm,
    #[serde(default)]
    pub quantum: Option<i64>,
}

impl SimulationRequest {
    /// Build a request from the text fields of an input form.
    ///
    /// `arrivals[i]` / `bursts[i]` belong to process `P{i+1}`.  Each field is
    /// trimmed before parsing.  The quantum field is only read for Round
    /// Robin; for the other algorithms whatever it holds is dropped.
    ///
    /// # Errors
    /// [`InputErrorReason::NotANumber`] for the first field that does not
    /// parse as an integer, [`InputErrorReason::UnknownAlgorithm`] for an
    /// unrecognised algorithm name.  Range checks are left to
    /// [`validate`](Self::validate).
    pub fn from_text_fields(
        process_count: &str,
        arrivals: &[&str],
        bursts: &[&str],
        algorithm: &str,
        quantum: Option<&str>,
    ) -> Result<Self, SimError> {
        let process_count = parse_field("process count", 0, process_count)?;
        let arrivals = parse_column("arrival time", arrivals)?;
        let bursts = parse_column("burst time", bursts)?;
        let algorithm = algorithm.parse::<Algorithm>()?;
        let quantum = match algorithm {
            Algorithm::RoundRobin => quantum
                .filter(|q| !q.trim().is_empty())
                .map(|q| parse_field("time quantum", 0, q))
                .transpose()?,
            Algorithm::Fcfs | Algorithm::Sjf => None,
        };

        Ok(Self {
            process_count,
            arrivals,
            bursts,
            algorithm,
            quantum,
        })
    }

    /// Check every field and produce the validated process table and the
    /// strategy to run.
    ///
    /// Nothing is scheduled here; a request either passes completely or is
    /// rejected with [`SimError::InvalidInput`].
    pub fn validate(&self) -> Result<(ProcessTable, Strategy), SimError> {
        if self.process_count <= 0 {
            return Err(InputErrorReason::NonPositiveCount {
                count: self.process_count,
            }
            .into());
        }

        let expected = self.process_count as usize;
        if self.arrivals.len() != expected {
            return Err(InputErrorReason::LengthMismatch {
                field: "arrival",
                expected,
                actual: self.arrivals.len(),
            }
            .into());
        }
        if self.bursts.len() != expected {
            return Err(InputErrorReason::LengthMismatch {
                field: "burst",
                expected,
                actual: self.bursts.len(),
            }
            .into());
        }

        let table = ProcessTable::from_columns(&self.arrivals, &self.bursts)?;
        let strategy = Strategy::for_algorithm(self.algorithm, self.quantum)?;

        debug!(
            processes = table.len(),
            strategy = %strategy,
            "request validated"
        );

        Ok((table, strategy))
    }
}

fn parse_field(field: &'static str, process: usize, value: &str) -> Result<i64, SimError> {
    value.trim().parse::<i64>().map_err(|_| {
        InputErrorReason::NotANumber {
            field,
            process,
            value: value.to_string(),
        }
        .into()
    })
}

fn parse_column(field: &'static str, values: &[&str]) -> Result<Vec<i64>, SimError> {
    values
        .iter()
        .enumerate()
        .map(|(idx, v)| parse_field(field, idx + 1, v))
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn request(count: i64, arrivals: &[i64], bursts: &[i64], algorithm: Algorithm) -> SimulationRequest {
        SimulationRequest {
            process_count: count,
            arrivals: arrivals.to_vec(),
            bursts: bursts.to_vec(),
            algorithm,
            quantum: None,
        }
    }

    // ── Algorithm ─────────────────────────────────────────────────────────────

    #[test]
    fn algorithm_parses_canonical_and_loose_names() {
        assert_eq!("fcfs".parse::<Algorithm>().unwrap(), Algorithm::Fcfs);
        assert_eq!("SJF".parse::<Algorithm>().unwrap(), Algorithm::Sjf);
        assert_eq!("round_robin".parse::<Algorithm>().unwrap(), Algorithm::RoundRobin);
        assert_eq!("Round Robin".parse::<Algorithm>().unwrap(), Algorithm::RoundRobin);
        assert_eq!("round-robin".parse::<Algorithm>().unwrap(), Algorithm::RoundRobin);
        assert_eq!("rr".parse::<Algorithm>().unwrap(), Algorithm::RoundRobin);
    }

    #[test]
    fn algorithm_unknown_name_is_invalid_input() {
        let err = "priority".parse::<Algorithm>().unwrap_err();
        assert!(matches!(
            err,
            SimError::InvalidInput(InputErrorReason::UnknownAlgorithm { .. })
        ));
    }

    #[test]
    fn algorithm_display_round_trips_through_from_str() {
        for algo in [Algorithm::Fcfs, Algorithm::Sjf, Algorithm::RoundRobin] {
            assert_eq!(algo.to_string().parse::<Algorithm>().unwrap(), algo);
        }
    }

    // ── validate ──────────────────────────────────────────────────────────────

    #[test]
    fn validate_accepts_well_formed_request() {
        let (table, strategy) = request(2, &[0, 1], &[5, 3], Algorithm::Sjf)
            .validate()
            .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(strategy, Strategy::Sjf);
    }

    #[test]
    fn validate_rejects_non_positive_count() {
        for count in [0, -4] {
            let err = request(count, &[], &[], Algorithm::Fcfs).validate().unwrap_err();
            assert_eq!(
                err,
                SimError::InvalidInput(InputErrorReason::NonPositiveCount { count })
            );
        }
    }

    #[test]
    fn validate_rejects_column_shorter_than_count() {
        let err = request(3, &[0, 1], &[1, 1, 1], Algorithm::Fcfs)
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            SimError::InvalidInput(InputErrorReason::LengthMismatch {
                field: "arrival",
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn validate_rejects_zero_burst() {
        let err = request(2, &[0, 1], &[5, 0], Algorithm::Fcfs)
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            SimError::InvalidInput(InputErrorReason::NonPositiveBurst { process: 2, burst: 0 })
        ));
    }

    #[test]
    fn validate_round_robin_requires_quantum() {
        let err = request(1, &[0], &[1], Algorithm::RoundRobin)
            .validate()
            .unwrap_err();
        assert_eq!(err, SimError::InvalidInput(InputErrorReason::MissingQuantum));
    }

    #[test]
    fn validate_round_robin_rejects_non_positive_quantum() {
        let mut req = request(1, &[0], &[1], Algorithm::RoundRobin);
        req.quantum = Some(0);
        let err = req.validate().unwrap_err();
        assert_eq!(
            err,
            SimError::InvalidInput(InputErrorReason::NonPositiveQuantum { quantum: 0 })
        );
    }

    #[test]
    fn validate_ignores_quantum_for_non_preemptive_algorithms() {
        let mut req = request(1, &[0], &[1], Algorithm::Fcfs);
        req.quantum = Some(-1);
        assert!(req.validate().is_ok());
    }

    // ── from_text_fields ──────────────────────────────────────────────────────

    #[test]
    fn text_fields_parse_into_request() {
        let req = SimulationRequest::from_text_fields(
            "2",
            &["0", " 1 "],
            &["5", "3"],
            "Round Robin",
            Some("2"),
        )
        .unwrap();
        assert_eq!(req.process_count, 2);
        assert_eq!(req.arrivals, vec![0, 1]);
        assert_eq!(req.bursts, vec![5, 3]);
        assert_eq!(req.algorithm, Algorithm::RoundRobin);
        assert_eq!(req.quantum, Some(2));
    }

    #[test]
    fn text_fields_reject_non_numeric_burst() {
        let err = SimulationRequest::from_text_fields("2", &["0", "1"], &["5", "abc"], "fcfs", None)
            .unwrap_err();
        assert_eq!(
            err,
            SimError::InvalidInput(InputErrorReason::NotANumber {
                field: "burst time",
                process: 2,
                value: "abc".into()
            })
        );
    }

    #[test]
    fn text_fields_reject_non_numeric_count() {
        let err = SimulationRequest::from_text_fields("three", &[], &[], "fcfs", None).unwrap_err();
        assert!(matches!(
            err,
            SimError::InvalidInput(InputErrorReason::NotANumber { field: "process count", .. })
        ));
    }

    #[test]
    fn quantum_field_is_ignored_outside_round_robin() {
        for algorithm in ["fcfs", "sjf"] {
            let req =
                SimulationRequest::from_text_fields("1", &["0"], &["3"], algorithm, Some("abc"))
                    .unwrap();
            assert_eq!(req.quantum, None);
            assert!(req.validate().is_ok());
        }
    }

    #[test]
    fn text_fields_reject_non_numeric_quantum_for_round_robin() {
        let err = SimulationRequest::from_text_fields("1", &["0"], &["3"], "rr", Some("abc"))
            .unwrap_err();
        assert!(matches!(
            err,
            SimError::InvalidInput(InputErrorReason::NotANumber { field: "time quantum", .. })
        ));
    }

    #[test]
    fn blank_quantum_field_counts_as_missing() {
        let req =
            SimulationRequest::from_text_fields("1", &["0"], &["4"], "rr", Some("  ")).unwrap();
        assert_eq!(req.quantum, None);
        assert_eq!(
            req.validate().unwrap_err(),
            SimError::InvalidInput(InputErrorReason::MissingQuantum)
        );
    }
}
