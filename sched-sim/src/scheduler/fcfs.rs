/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! First-Come-First-Serve.
//!
//! Processes run to completion in arrival order.  `start_i = max(arrival_i,
//! end_{i-1})`; equal arrivals keep their input order.

use tracing::{debug, warn};

use crate::process::{Process, Segment, Time};

pub fn run(processes: &[Process]) -> Vec<Segment> {
    // sort_by_key is stable: equal arrivals stay in input order
    let mut order: Vec<&Process> = processes.iter().collect();
    order.sort_by_key(|p| p.arrival_time());

    let mut clock: Time = 0;
    let mut segments = Vec::with_capacity(order.len());

    for process in order {
        let start = clock.max(process.arrival_time());
        if start > clock {
            warn!(from = clock, to = start, "CPU idle");
        }
        let end = start + process.burst_time();
        debug!(process = %process.label(), start, end, "fcfs dispatch");

        segments.push(Segment::new(process.id(), start, end));
        clock = end;
    }

    segments
}
