//! Scheduling strategies and the simulation entry point.
//!
//! [`Strategy`] is the closed set of supported algorithms.  Each variant turns
//! a slice of [`Process`]es into an ordered list of [`Segment`]s (the Gantt
//! chart); [`Simulator`] runs the selected strategy once and hands the
//! segments to the [`MetricsCalculator`], which checks the timeline and derives
//! per-process statistics.
//!
//! # Design decisions
//!
//! | Topic | Choice |
//! |---|---|
//! | Algorithm selection | Closed `enum Strategy`, dispatched once per run — no trait objects |
//! | State | Stateless `simulate()` — remaining bursts, clock and ready queue are locals of one call |
//! | Tie-breaking | Always ends in input order, so identical input gives identical output |
//! | Idle CPU | No idle segments; gaps are derived from the result on demand |
//! | Thread safety | `Send + Sync` (no interior mutability) |
//!
//! # Example
//! ```rust
//! use sched_sim::request::{Algorithm, SimulationRequest};
//! use sched_sim::scheduler::simulate;
//!
//! let request = SimulationRequest {
//!     process_count: 3,
//!     arrivals: vec![0, 1, 2],
//!     bursts: vec![5, 3, 8],
//!     algorithm: Algorithm::Fcfs,
//!     quantum: None,
//! };
//! let result = simulate(&request).unwrap();
//! assert_eq!(result.segments().len(), 3);
//! assert_eq!(result.metrics_for(2).unwrap().waiting, 4);
//! ```

pub mod fcfs;
pub mod round_robin;
pub mod sjf;

use std::fmt;
use std::num::NonZeroU64;

use tracing::{debug, info};

use crate::error::{InputErrorReason, SimError};
use crate::metrics::{MetricsCalculator, SimulationResult};
use crate::process::{Process, ProcessTable, Segment};
use crate::request::{Algorithm, SimulationRequest};

// ── Strategy ──────────────────────────────────────────────────────────────────

/// A scheduling algorithm together with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// First-Come-First-Serve.
    Fcfs,
    /// Shortest Job First, non-preemptive.
    Sjf,
    /// Round Robin; the quantum is non-zero by construction.
    RoundRobin { quantum: NonZeroU64 },
}

impl Strategy {
    /// Build the strategy for `algorithm`.
    ///
    /// `quantum` is required for [`Algorithm::RoundRobin`] and ignored
    /// otherwise.
    ///
    /// # Errors
    /// [`InputErrorReason::MissingQuantum`] or
    /// [`InputErrorReason::NonPositiveQuantum`] for Round Robin.
    pub fn for_algorithm(algorithm: Algorithm, quantum: Option<i64>) -> Result<Self, SimError> {
        match algorithm {
            Algorithm::Fcfs => Ok(Strategy::Fcfs),
            Algorithm::Sjf => Ok(Strategy::Sjf),
            Algorithm::RoundRobin => {
                let q = quantum.ok_or(InputErrorReason::MissingQuantum)?;
                let quantum = u64::try_from(q)
                    .ok()
                    .and_then(NonZeroU64::new)
                    .ok_or(InputErrorReason::NonPositiveQuantum { quantum: q })?;
                Ok(Strategy::RoundRobin { quantum })
            }
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        match self {
            Strategy::Fcfs => Algorithm::Fcfs,
            Strategy::Sjf => Algorithm::Sjf,
            Strategy::RoundRobin { .. } => Algorithm::RoundRobin,
        }
    }

    /// Run the algorithm over `processes` and return the Gantt chart.
    ///
    /// Segments come out in non-decreasing start order.  `processes` may be
    /// in any order; ties are always broken by position in the slice.
    pub fn run(&self, processes: &[Process]) -> Vec<Segment> {
        match self {
            Strategy::Fcfs => fcfs::run(processes),
            Strategy::Sjf => sjf::run(processes),
            Strategy::RoundRobin { quantum } => round_robin::run(processes, quantum.get()),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::RoundRobin { quantum } => write!(f, "round_robin(q={})", quantum),
            other => f.write_str(other.algorithm().as_str()),
        }
    }
}

// ── Simulator ─────────────────────────────────────────────────────────────────

/// Runs one strategy over a validated process table.
///
/// Holds nothing but the selected strategy; every run allocates its own
/// state, so one `Simulator` can be shared freely between threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Simulator {
    strategy: Strategy,
}

impl Simulator {
    pub fn new(strategy: Strategy) -> Self {
        Self { strategy }
    }

    /// Schedule `table` and derive its metrics.
    ///
    /// # Errors
    /// [`SimError::InconsistentSegments`] if the strategy produced a timeline
    /// that breaks an invariant.  This never happens for the built-in
    /// strategies on a validated table; the check surfaces defects instead of
    /// hiding them.
    pub fn simulate(&self, table: &ProcessTable) -> Result<SimulationResult, SimError> {
        info!(
            strategy = %self.strategy,
            process_count = table.len(),
            "=== simulation started ==="
        );

        let segments = self.strategy.run(table.as_slice());
        debug!(segment_count = segments.len(), "strategy finished");

        let result =
            MetricsCalculator::new(table.as_slice()).calculate(self.strategy.algorithm(), segments)?;

        info!(
            segment_count = result.segments().len(),
            makespan = result.makespan(),
            "=== simulation complete ==="
        );
        Ok(result)
    }
}

/// Validate `request`, run the selected strategy and return the result.
///
/// # Errors
/// [`SimError::InvalidInput`] before anything is scheduled, or
/// [`SimError::InconsistentSegments`] from the metrics check.
pub fn simulate(request: &SimulationRequest) -> Result<SimulationResult, SimError> {
    let (table, strategy) = request.validate()?;
    Simulator::new(strategy).simulate(&table)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
