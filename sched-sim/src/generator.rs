/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Random workload generation.
//!
//! Fills a request with `count` processes whose arrivals are drawn from
//! `0..10` and bursts from `1..10`.  The generator is seeded, so the same seed
//! always yields the same workload; the simulation core itself never touches
//! randomness.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::request::{Algorithm, SimulationRequest};

/// Arrival times are drawn from `0..ARRIVAL_UPPER`.
pub const ARRIVAL_UPPER: i64 = 10;

/// Burst times are drawn from `1..BURST_UPPER`.
pub const BURST_UPPER: i64 = 10;

/// Seeded source of random workloads.
pub struct WorkloadGenerator {
    rng: ChaCha8Rng,
}

impl WorkloadGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Draw `count` processes and wrap them in a request for `algorithm`.
    pub fn generate(
        &mut self,
        count: usize,
        algorithm: Algorithm,
        quantum: Option<i64>,
    ) -> SimulationRequest {
        let mut arrivals = Vec::with_capacity(count);
        let mut bursts = Vec::with_capacity(count);
        for _ in 0..count {
            arrivals.push(self.rng.gen_range(0..ARRIVAL_UPPER));
            bursts.push(self.rng.gen_range(1..BURST_UPPER));
        }
        debug!(count, ?arrivals, ?bursts, "generated random workload");

        SimulationRequest {
            process_count: count as i64,
            arrivals,
            bursts,
            algorithm,
            quantum,
        }
    }
}
