/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Shortest Job First (non-preemptive).
//!
//! Whenever the CPU becomes free, the arrived process with the smallest burst
//! runs to completion.  Ties go to the earlier arrival, then to input order.
//! A shorter job arriving mid-execution waits for the next decision point.

use tracing::{debug, warn};

use crate::process::{Process, Segment, Time};

pub fn run(processes: &[Process]) -> Vec<Segment> {
    // (input position, process) of everything not yet run
    let mut pending: Vec<(usize, &Process)> = processes.iter().enumerate().collect();
    let mut clock: Time = 0;
    let mut segments = Vec::with_capacity(processes.len());

    while !pending.is_empty() {
        let pick = pending
            .iter()
            .enumerate()
            .filter(|(_, (_, p))| p.arrival_time() <= clock)
            .min_by_key(|(_, (idx, p))| (p.burst_time(), p.arrival_time(), *idx))
            .map(|(slot, _)| slot);

        let Some(slot) = pick else {
            // nothing has arrived yet: jump to the next arrival
            if let Some(next) = pending.iter().map(|(_, p)| p.arrival_time()).min() {
                warn!(from = clock, to = next, "CPU idle");
                clock = next;
            }
            continue;
        };

        let (_, process) = pending.remove(slot);
        let start = clock;
        let end = start + process.burst_time();
        debug!(process = %process.label(), start, end, "sjf dispatch");

        segments.push(Segment::new(process.id(), start, end));
        clock = end;
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::ProcessTable;

    fn spans(arrivals: &[i64], bursts: &[i64]) -> Vec<(u32, u64, u64)> {
        let table = ProcessTable::from_columns(arrivals, bursts).unwrap();
        run(table.as_slice())
            .into_iter()
            .map(|s| (s.process_id, s.start, s.end))
            .collect()
    }

    #[test]
    fn picks_shortest_arrived_job_at_each_decision() {
        // P1 runs first (only one arrived), then P2 (4) < P4 (5) < P3 (9)
        assert_eq!(
            spans(&[0, 1, 2, 3], &[8, 4, 9, 5]),
            vec![(1, 0, 8), (2, 8, 12), (4, 12, 17), (3, 17, 26)]
        );
    }

    #[test]
    fn running_job_is_not_preempted_by_shorter_arrival() {
        assert_eq!(spans(&[0, 1], &[10, 1]), vec![(1, 0, 10), (2, 10, 11)]);
    }

    #[test]
    fn equal_bursts_go_to_earlier_arrival() {
        // at t=4 both P2 (arr 3) and P3 (arr 1) are ready with burst 2
        assert_eq!(
            spans(&[0, 3, 1], &[4, 2, 2]),
            vec![(1, 0, 4), (3, 4, 6), (2, 6, 8)]
        );
    }

    #[test]
    fn full_tie_goes_to_input_order() {
        assert_eq!(
            spans(&[0, 0, 0], &[3, 3, 3]),
            vec![(1, 0, 3), (2, 3, 6), (3, 6, 9)]
        );
    }

    #[test]
    fn idle_until_first_arrival() {
        assert_eq!(spans(&[5, 7], &[1, 1]), vec![(1, 5, 6), (2, 7, 8)]);
    }

    #[test]
    fn later_short_job_is_not_picked_before_it_arrives() {
        // at t=0 only P1 is ready although P2 is shorter
        assert_eq!(spans(&[0, 2], &[3, 1]), vec![(1, 0, 3), (2, 3, 4)]);
    }
}
