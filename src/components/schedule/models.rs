use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle states a shift can be in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusKind {
    Pending,
    Approved,
    Denied,
    /// Open shift with no assignee, available for claim
    Posted,
    CalledOff,
}

impl StatusKind {
    /// Badge label shown for this status
    pub fn default_label(self) -> &'static str {
        match self {
            StatusKind::Pending => "Pending",
            StatusKind::Approved => "Approved",
            StatusKind::Denied => "Denied",
            StatusKind::Posted => "Open",
            StatusKind::CalledOff => "Called Off",
        }
    }
}

/// Status of a shift, with its display label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftStatus {
    pub kind: StatusKind,
    pub label: String,
}

impl ShiftStatus {
    pub fn new(kind: StatusKind) -> Self {
        Self {
            kind,
            label: kind.default_label().to_string(),
        }
    }
}

/// Shift-swap relation: whose shift is covered, and by whom
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftCovering {
    pub cover_for: String,
    pub cover_by: String,
}

/// A scheduled work assignment for one employee on one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    pub id: String,
    /// Weak reference into the team roster; `None` is an open shift.
    /// Dangling ids are tolerated and rendered as unassigned.
    pub employee_id: Option<String>,
    /// Absolute calendar date; weekday labels are derived for display
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub position: String,
    /// Derived label, recomputed by the store whenever times change
    pub duration: String,
    pub status: ShiftStatus,
    pub note: Option<String>,
    pub covering: Option<ShiftCovering>,
    /// Computed annotation; true when another shift for the same
    /// employee overlaps on the same day
    pub conflict: bool,
}

impl Shift {
    /// Time range as grid cells render it
    pub fn time_range(&self) -> String {
        format!("{} - {}", self.start_time, self.end_time)
    }

    pub fn is_pending(&self) -> bool {
        self.status.kind == StatusKind::Pending
    }
}

/// Input for creating a shift; id, duration and conflict are store-assigned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftDraft {
    pub employee_id: Option<String>,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub position: String,
    /// Explicit initial status; defaults to pending (posted when unassigned)
    pub status: Option<StatusKind>,
    pub note: Option<String>,
    pub covering: Option<ShiftCovering>,
}

impl ShiftDraft {
    /// Create a draft with the required fields
    pub fn new(
        date: NaiveDate,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        position: impl Into<String>,
    ) -> Self {
        Self {
            employee_id: None,
            date,
            start_time: start_time.into(),
            end_time: end_time.into(),
            position: position.into(),
            status: None,
            note: None,
            covering: None,
        }
    }
}

/// Field-wise patch applied by update; unset fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct ShiftPatch {
    /// `Some(None)` clears the assignment, turning the shift into an open one
    pub employee_id: Option<Option<String>>,
    pub date: Option<NaiveDate>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub position: Option<String>,
    pub status: Option<StatusKind>,
    pub note: Option<Option<String>>,
    pub covering: Option<Option<ShiftCovering>>,
}
