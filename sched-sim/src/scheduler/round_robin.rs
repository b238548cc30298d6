/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Round Robin with a fixed time quantum.
//!
//! # Queue ordering
//! The ready queue is FIFO.  After a process runs its slice `[start, end)`:
//!
//! 1. every process with `start <= arrival < end` joins the tail, in arrival
//!    order (equal arrivals in input order);
//! 2. then the process that just ran is re-queued if it still has work.
//!
//! A process arriving exactly at `end` is admitted on the next pass, i.e.
//! *behind* the re-queued process.

use std::collections::VecDeque;

use tracing::{debug, warn};

use crate::process::{Process, Segment, Time};

/// Run Round Robin with quantum `quantum` (must be non-zero).
pub fn run(processes: &[Process], quantum: Time) -> Vec<Segment> {
    debug_assert!(quantum > 0, "round robin quantum must be non-zero");

    // Positions into `processes`, by arrival; the stable sort keeps equal
    // arrivals in input order.
    let mut by_arrival: Vec<usize> = (0..processes.len()).collect();
    by_arrival.sort_by_key(|&idx| processes[idx].arrival_time());
    let mut arrivals = by_arrival.into_iter().peekable();

    let mut remaining: Vec<Time> = processes.iter().map(Process::burst_time).collect();
    let mut ready: VecDeque<usize> = VecDeque::with_capacity(processes.len());
    let mut segments = Vec::new();
    let mut clock: Time = 0;

    loop {
        while let Some(idx) = arrivals.next_if(|&idx| processes[idx].arrival_time() <= clock) {
            ready.push_back(idx);
        }

        let Some(idx) = ready.pop_front() else {
            match arrivals.peek() {
                Some(&next) => {
                    let to = processes[next].arrival_time();
                    warn!(from = clock, to, "CPU idle");
                    clock = to;
                    continue;
                }
                None => break,
            }
        };

        let process = &processes[idx];
        let slice = quantum.min(remaining[idx]);
        let start = clock;
        let end = start + slice;
        remaining[idx] -= slice;
        debug!(
            process = %process.label(),
            start,
            end,
            remaining = remaining[idx],
            "round_robin dispatch"
        );

        segments.push(Segment::new(process.id(), start, end));
        clock = end;

        // arrivals during the slice go ahead of the yielding process
        while let Some(arrived) = arrivals.next_if(|&i| processes[i].arrival_time() < end) {
            ready.push_back(arrived);
        }
        if remaining[idx] > 0 {
            ready.push_back(idx);
        }
    }

    segments
}
