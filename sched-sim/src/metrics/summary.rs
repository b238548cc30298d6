/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Aggregate statistics over a whole run.

use serde::Serialize;

use super::SimulationResult;
use crate::process::Time;

/// Interval `[start, end)` during which no process held the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IdlePeriod {
    pub start: Time,
    pub end: Time,
}

impl IdlePeriod {
    pub fn duration(&self) -> Time {
        self.end - self.start
    }
}

/// Run-level figures shown under the metrics table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub process_count: usize,
    pub average_waiting: f64,
    pub average_turnaround: f64,
    /// End of the last segment; the timeline starts at 0.
    pub makespan: Time,
    pub idle_time: Time,
    /// Busy fraction of the makespan, `0.0..=1.0`.
    pub cpu_utilization: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
}

impl SimulationResult {
    /// Gaps in the timeline, including one from time 0 to the first segment
    /// when the first process arrives late.
    pub fn idle_periods(&self) -> Vec<IdlePeriod> {
        let mut cursor: Time = 0;
        let mut gaps = Vec::new();
        for seg in self.segments() {
            if seg.start > cursor {
                gaps.push(IdlePeriod {
                    start: cursor,
                    end: seg.start,
                });
            }
            cursor = cursor.max(seg.end);
        }
        gaps
    }

    /// Averages and utilisation for the whole run.
    pub fn summary(&self) -> Summary {
        let n = self.metrics().len();
        let makespan = self.makespan();
        let busy = self.busy_time();

        let per_makespan = |value: f64| if makespan == 0 { 0.0 } else { value / makespan as f64 };

        Summary {
            process_count: n,
            average_waiting: mean(self.metrics().values().map(|m| m.waiting), n),
            average_turnaround: mean(self.metrics().values().map(|m| m.turnaround), n),
            makespan,
            idle_time: makespan - busy,
            cpu_utilization: per_makespan(busy as f64),
            throughput: per_makespan(n as f64),
        }
    }
}

/// Summed as `f64`: each value fits in [`Time`], their total may not.
fn mean(values: impl Iterator<Item = Time>, n: usize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    values.map(|v| v as f64).sum::<f64>() / n as f64
}
