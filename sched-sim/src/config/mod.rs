//! Workload file loading.
//!
//! A workload describes one simulation request on disk.  The expected YAML
//! structure is:
//! ```yaml
//! algorithm: round_robin
//! quantum: 2
//! processes:
//!   - { arrival: 0, burst: 5 }
//!   - { arrival: 1, burst: 3 }
//! ```
//!
//! `algorithm` defaults to `fcfs` and `quantum` may be omitted for the
//! non-preemptive algorithms.  Values are kept signed here so range errors are
//! reported by request validation with the exact offending value.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::SimError;
use crate::request::{Algorithm, SimulationRequest};

// ── Private YAML deserialization types ────────────────────────────────────────

/// Top-level wrapper that maps directly onto the YAML file layout.
#[derive(Debug, Deserialize)]
struct WorkloadFile {
    algorithm: Option<String>,
    quantum: Option<i64>,
    #[serde(default)]
    processes: Vec<ProcessEntry>,
}

// ── Public data structures ────────────────────────────────────────────────────

/// One process row as it appears in the workload file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ProcessEntry {
    pub arrival: i64,
    pub burst: i64,
}

/// A parsed workload file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workload {
    /// Algorithm name as written in the file; `None` when absent.
    pub algorithm: Option<String>,
    pub quantum: Option<i64>,
    /// Processes in file order; `P1` is the first entry.
    pub processes: Vec<ProcessEntry>,
}

impl Workload {
    /// Reads and parses the workload at `path`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if the YAML is
    /// structurally invalid.  Semantic checks (positive bursts, known
    /// algorithm…) happen in [`into_request`](Self::into_request).
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading workload from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot open workload file: {}", path.display()))?;

        Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse YAML file: {}", path.display()))
    }

    /// Parses a workload from a YAML string.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let file: WorkloadFile = serde_yaml::from_str(content)?;

        if file.processes.is_empty() {
            warn!("Workload contains no processes");
        }
        for (idx, p) in file.processes.iter().enumerate() {
            debug!("  P{} | arrival: {} | burst: {}", idx + 1, p.arrival, p.burst);
        }

        Ok(Self {
            algorithm: file.algorithm,
            quantum: file.quantum,
            processes: file.processes,
        })
    }

    /// Turns the workload into a [`SimulationRequest`].
    ///
    /// `algorithm` / `quantum`, when given, override the file values (CLI
    /// flags take precedence over the workload).
    ///
    /// # Errors
    /// [`SimError::InvalidInput`] when the algorithm name is not recognised.
    pub fn into_request(
        self,
        algorithm: Option<&str>,
        quantum: Option<i64>,
    ) -> Result<SimulationRequest, SimError> {
        let algorithm = match algorithm.or(self.algorithm.as_deref()) {
            Some(name) => name.parse::<Algorithm>()?,
            None => {
                debug!("No algorithm given, defaulting to {}", Algorithm::default());
                Algorithm::default()
            }
        };

        Ok(SimulationRequest {
            process_count: self.processes.len() as i64,
            arrivals: self.processes.iter().map(|p| p.arrival).collect(),
            bursts: self.processes.iter().map(|p| p.burst).collect(),
            algorithm,
            quantum: quantum.or(self.quantum),
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
