use super::models::Shift;
use crate::components::team::models::TeamMember;
use crate::error::ScheduleResult;
use crate::utils::time::day_label;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt::Write as _;

/// One employee row of the projected grid; `cells` aligns with
/// `ScheduleGrid::days`
#[derive(Debug, Clone, Serialize)]
pub struct GridRow {
    pub employee_id: String,
    pub cells: Vec<Vec<Shift>>,
}

/// 2-D lookup of shifts by employee and day, recomputed from scratch
/// after every store mutation
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleGrid {
    pub days: Vec<NaiveDate>,
    pub rows: Vec<GridRow>,
    /// Per-day bucket for open shifts and dangling employee references
    pub unassigned: Vec<Vec<Shift>>,
}

/// Project shifts into a per-employee, per-day grid.
///
/// Every (employee, day) cell exists, empty or not, so callers can
/// distinguish "no shifts" from "unknown cell" deterministically.
/// Insertion order is preserved within each cell. Shifts dated outside
/// `days` are dropped from the projection.
pub fn project(shifts: &[Shift], employees: &[TeamMember], days: &[NaiveDate]) -> ScheduleGrid {
    let mut rows: Vec<GridRow> = employees
        .iter()
        .map(|employee| GridRow {
            employee_id: employee.id.clone(),
            cells: vec![Vec::new(); days.len()],
        })
        .collect();
    let mut unassigned: Vec<Vec<Shift>> = vec![Vec::new(); days.len()];

    for shift in shifts {
        let Some(column) = days.iter().position(|day| *day == shift.date) else {
            continue;
        };

        let row = shift
            .employee_id
            .as_ref()
            .and_then(|id| rows.iter_mut().find(|row| row.employee_id == *id));

        match row {
            Some(row) => row.cells[column].push(shift.clone()),
            None => unassigned[column].push(shift.clone()),
        }
    }

    ScheduleGrid {
        days: days.to_vec(),
        rows,
        unassigned,
    }
}

impl ScheduleGrid {
    /// Shifts for one cell, in insertion order; empty when the employee
    /// or day is not part of the projection
    pub fn cell(&self, employee_id: &str, date: NaiveDate) -> &[Shift] {
        let Some(column) = self.days.iter().position(|day| *day == date) else {
            return &[];
        };
        self.rows
            .iter()
            .find(|row| row.employee_id == employee_id)
            .map(|row| row.cells[column].as_slice())
            .unwrap_or(&[])
    }

    /// Serialize the projection for hosting applications
    pub fn to_json(&self) -> ScheduleResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render the grid as text for terminal output
    pub fn render_text(&self, employees: &[TeamMember]) -> String {
        let mut out = String::new();

        if let (Some(first), Some(last)) = (self.days.first(), self.days.last()) {
            let _ = writeln!(out, "Schedule {} - {}", first, last);
        }

        for row in &self.rows {
            let header = match employees.iter().find(|e| e.id == row.employee_id) {
                Some(member) => {
                    format!("{} — {} • {}h", member.name, member.position, member.hours)
                }
                None => row.employee_id.clone(),
            };
            let _ = writeln!(out, "{}", header);
            for (day, cell) in self.days.iter().zip(&row.cells) {
                let _ = writeln!(out, "  {} {}: {}", day_label(*day), day, render_cell(cell));
            }
        }

        if self.unassigned.iter().any(|cell| !cell.is_empty()) {
            let _ = writeln!(out, "Unassigned");
            for (day, cell) in self.days.iter().zip(&self.unassigned) {
                if !cell.is_empty() {
                    let _ = writeln!(out, "  {} {}: {}", day_label(*day), day, render_cell(cell));
                }
            }
        }

        out
    }
}

fn render_cell(cell: &[Shift]) -> String {
    if cell.is_empty() {
        // Empty cells are the grid's "add shift" affordance
        return String::from("—");
    }

    cell.iter()
        .map(|shift| {
            let mut text = format!(
                "{} {} • {} [{}]",
                shift.time_range(),
                shift.position,
                shift.duration,
                shift.status.label
            );
            if let Some(covering) = &shift.covering {
                let _ = write!(text, " (covering for {})", covering.cover_for);
            }
            if shift.conflict {
                text.push_str(" [conflict]");
            }
            text
        })
        .collect::<Vec<_>>()
        .join(", ")
}
