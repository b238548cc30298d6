/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Plain-text rendering of a [`SimulationResult`].
//!
//! ```text
//! | P1 | P2 | -- | P3 |
//! 0    5    8    10   16
//! ```
//!
//! Each cell is one segment (or idle gap, drawn as `--`); the axis below shows
//! the start time of each cell and the end of the last one.  Both renderers
//! are `Display` adapters, so callers can `print!` them or `to_string()` them.

use std::fmt;

use crate::metrics::SimulationResult;
use crate::process::Time;

const IDLE_LABEL: &str = "--";
const MIN_CELL_WIDTH: usize = 4;

/// Text Gantt chart of a result.
pub struct GanttChart<'a>(pub &'a SimulationResult);

/// Per-process metrics table followed by the run summary.
pub struct MetricsTable<'a>(pub &'a SimulationResult);

/// One cell of the chart.
struct Cell {
    label: String,
    start: Time,
    end: Time,
}

fn cells(result: &SimulationResult) -> Vec<Cell> {
    let mut cells = Vec::with_capacity(result.segments().len());
    let mut idle = result.idle_periods().into_iter().peekable();

    for seg in result.segments() {
        if let Some(gap) = idle.next_if(|gap| gap.end <= seg.start) {
            cells.push(Cell {
                label: IDLE_LABEL.to_string(),
                start: gap.start,
                end: gap.end,
            });
        }
        cells.push(Cell {
            label: format!("P{}", seg.process_id),
            start: seg.start,
            end: seg.end,
        });
    }
    cells
}

impl fmt::Display for GanttChart<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells = cells(self.0);
        let Some(last) = cells.last() else {
            return writeln!(f, "(empty timeline)");
        };

        let mut bar = String::from("|");
        let mut axis = String::new();
        for cell in &cells {
            let width = (cell.label.len() + 2).max(MIN_CELL_WIDTH);
            bar.push_str(&format!("{:^width$}|", cell.label));
            axis.push_str(&format!("{:<w$}", cell.start, w = width + 1));
        }
        axis.push_str(&last.end.to_string());

        writeln!(f, "{bar}")?;
        writeln!(f, "{axis}")
    }
}

impl fmt::Display for MetricsTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;
        writeln!(
            f,
            "{:<6}{:>12}{:>12}{:>9}",
            "PID", "Completion", "Turnaround", "Waiting"
        )?;
        for (id, m) in result.metrics() {
            writeln!(
                f,
                "{:<6}{:>12}{:>12}{:>9}",
                format!("P{id}"),
                m.completion,
                m.turnaround,
                m.waiting
            )?;
        }

        let s = result.summary();
        writeln!(f)?;
        writeln!(f, "Algorithm:               {}", result.algorithm())?;
        writeln!(f, "Average waiting time:    {:.2}", s.average_waiting)?;
        writeln!(f, "Average turnaround time: {:.2}", s.average_turnaround)?;
        writeln!(f, "Makespan:                {}", s.makespan)?;
        writeln!(f, "Idle time:               {}", s.idle_time)?;
        writeln!(f, "CPU utilization:         {:.1}%", s.cpu_utilization * 100.0)?;
        writeln!(f, "Throughput:              {:.3} processes/unit", s.throughput)
    }
}
