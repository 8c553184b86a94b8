// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::Field;

pub const DEFAULT_COLUMN_WIDTH: u16 = 140;
pub const DEFAULT_HIDE_THRESHOLD: u16 = 35;
pub const DEFAULT_MIN_COLUMN_WIDTH: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnId {
    RowNumber,
    JobRequest,
    Submitted,
    Status,
    Submitter,
    Url,
    Assigned,
    Priority,
    DueDate,
    EstValue,
    AddSlot,
}

impl ColumnId {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RowNumber => "row_number",
            Self::JobRequest => "job_request",
            Self::Submitted => "submitted",
            Self::Status => "status",
            Self::Submitter => "submitter",
            Self::Url => "url",
            Self::Assigned => "assigned",
            Self::Priority => "priority",
            Self::DueDate => "due_date",
            Self::EstValue => "est_value",
            Self::AddSlot => "add_slot",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Editable free-text cell.
    Input,
    /// Read-only colored badge; never registers a focus handle.
    Badge,
    /// Structural column (row numbers, trailing blank); outside the
    /// navigation space entirely.
    Decoration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub id: ColumnId,
    pub label: &'static str,
    pub mode: RenderMode,
    pub field: Option<Field>,
    pub width: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnGroup {
    pub id: &'static str,
    pub label: &'static str,
    pub columns: &'static [ColumnSpec],
}

const ROW_NUMBER: ColumnSpec = ColumnSpec {
    id: ColumnId::RowNumber,
    label: "#",
    mode: RenderMode::Decoration,
    field: None,
    width: 30,
};

const JOB_REQUEST: ColumnSpec = ColumnSpec {
    id: ColumnId::JobRequest,
    label: "Job Request",
    mode: RenderMode::Input,
    field: Some(Field::JobRequest),
    width: DEFAULT_COLUMN_WIDTH,
};

const SUBMITTED: ColumnSpec = ColumnSpec {
    id: ColumnId::Submitted,
    label: "Submitted",
    mode: RenderMode::Input,
    field: Some(Field::Submitted),
    width: DEFAULT_COLUMN_WIDTH,
};

const STATUS: ColumnSpec = ColumnSpec {
    id: ColumnId::Status,
    label: "Status",
    mode: RenderMode::Badge,
    field: Some(Field::Status),
    width: DEFAULT_COLUMN_WIDTH,
};

const SUBMITTER: ColumnSpec = ColumnSpec {
    id: ColumnId::Submitter,
    label: "Submitter",
    mode: RenderMode::Input,
    field: Some(Field::Submitter),
    width: DEFAULT_COLUMN_WIDTH,
};

const URL: ColumnSpec = ColumnSpec {
    id: ColumnId::Url,
    label: "URL",
    mode: RenderMode::Input,
    field: Some(Field::Url),
    width: DEFAULT_COLUMN_WIDTH,
};

const ASSIGNED: ColumnSpec = ColumnSpec {
    id: ColumnId::Assigned,
    label: "Assigned",
    mode: RenderMode::Input,
    field: Some(Field::Assigned),
    width: DEFAULT_COLUMN_WIDTH,
};

const PRIORITY: ColumnSpec = ColumnSpec {
    id: ColumnId::Priority,
    label: "Priority",
    mode: RenderMode::Input,
    field: Some(Field::Priority),
    width: DEFAULT_COLUMN_WIDTH,
};

const DUE_DATE: ColumnSpec = ColumnSpec {
    id: ColumnId::DueDate,
    label: "Due Date",
    mode: RenderMode::Input,
    field: Some(Field::DueDate),
    width: DEFAULT_COLUMN_WIDTH,
};

const EST_VALUE: ColumnSpec = ColumnSpec {
    id: ColumnId::EstValue,
    label: "Est. Value",
    mode: RenderMode::Input,
    field: Some(Field::EstValue),
    width: DEFAULT_COLUMN_WIDTH,
};

const ADD_SLOT: ColumnSpec = ColumnSpec {
    id: ColumnId::AddSlot,
    label: "",
    mode: RenderMode::Decoration,
    field: None,
    width: 40,
};

const SHEET_COLUMNS: &[ColumnGroup] = &[
    ColumnGroup {
        id: "row",
        label: "",
        columns: &[ROW_NUMBER],
    },
    ColumnGroup {
        id: "financial",
        label: "Q3 Financial Overview",
        columns: &[JOB_REQUEST, SUBMITTED, STATUS, SUBMITTER],
    },
    ColumnGroup {
        id: "url",
        label: "",
        columns: &[URL],
    },
    ColumnGroup {
        id: "abc",
        label: "ABC",
        columns: &[ASSIGNED],
    },
    ColumnGroup {
        id: "answer",
        label: "Answer a question",
        columns: &[PRIORITY, DUE_DATE],
    },
    ColumnGroup {
        id: "extract",
        label: "Extract",
        columns: &[EST_VALUE],
    },
    ColumnGroup {
        id: "add",
        label: "+",
        columns: &[ADD_SLOT],
    },
];

/// The static grouped schema: declaration order within groups and group
/// order fix the column order for the whole session.
pub const fn sheet_columns() -> &'static [ColumnGroup] {
    SHEET_COLUMNS
}

pub const fn column_spec(id: ColumnId) -> &'static ColumnSpec {
    match id {
        ColumnId::RowNumber => &ROW_NUMBER,
        ColumnId::JobRequest => &JOB_REQUEST,
        ColumnId::Submitted => &SUBMITTED,
        ColumnId::Status => &STATUS,
        ColumnId::Submitter => &SUBMITTER,
        ColumnId::Url => &URL,
        ColumnId::Assigned => &ASSIGNED,
        ColumnId::Priority => &PRIORITY,
        ColumnId::DueDate => &DUE_DATE,
        ColumnId::EstValue => &EST_VALUE,
        ColumnId::AddSlot => &ADD_SLOT,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnPolicy {
    pub min_width: u16,
    pub hide_threshold: u16,
}

impl Default for ColumnPolicy {
    fn default() -> Self {
        Self {
            min_width: DEFAULT_MIN_COLUMN_WIDTH,
            hide_threshold: DEFAULT_HIDE_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ColumnState {
    id: ColumnId,
    width: u16,
    visible: bool,
}

/// Runtime width/visibility per column. The schema itself never changes;
/// this is the only mutable column state in the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    policy: ColumnPolicy,
    entries: Vec<ColumnState>,
}

impl ColumnLayout {
    pub fn new(policy: ColumnPolicy) -> Self {
        let entries = SHEET_COLUMNS
            .iter()
            .flat_map(|group| group.columns)
            .map(|spec| ColumnState {
                id: spec.id,
                width: spec.width,
                visible: true,
            })
            .collect();
        Self { policy, entries }
    }

    pub const fn policy(&self) -> ColumnPolicy {
        self.policy
    }

    pub fn width(&self, id: ColumnId) -> u16 {
        self.entry(id).map_or(0, |entry| entry.width)
    }

    pub fn is_visible(&self, id: ColumnId) -> bool {
        self.entry(id).is_some_and(|entry| entry.visible)
    }

    /// Streaming resize: clamps to the minimum width, never touches
    /// visibility. The hide check belongs to `finish_resize`.
    pub fn resize(&mut self, id: ColumnId, width: u16) {
        let min_width = self.policy.min_width;
        if let Some(entry) = self.entry_mut(id) {
            entry.width = width.max(min_width);
        }
    }

    /// Resize-end: a column dragged below the hide threshold disappears.
    /// Returns true when the column was hidden as a side effect.
    pub fn finish_resize(&mut self, id: ColumnId) -> bool {
        let threshold = self.policy.hide_threshold;
        match self.entry_mut(id) {
            Some(entry) if entry.visible && entry.width < threshold => {
                entry.visible = false;
                true
            }
            _ => false,
        }
    }

    /// Direct hide, bypassing the width check. There is no unhide for the
    /// session.
    pub fn hide(&mut self, id: ColumnId) -> bool {
        match self.entry_mut(id) {
            Some(entry) if entry.visible => {
                entry.visible = false;
                true
            }
            _ => false,
        }
    }

    /// Ordered visible leaf columns: everything addressable by navigation.
    /// Decoration columns are structural and excluded. Recomputed from
    /// scratch on each call so it can never go stale.
    pub fn visible_leaves(&self) -> Vec<&'static ColumnSpec> {
        self.entries
            .iter()
            .filter(|entry| entry.visible)
            .map(|entry| column_spec(entry.id))
            .filter(|spec| spec.mode != RenderMode::Decoration)
            .collect()
    }

    pub fn visible_leaf_ids(&self) -> Vec<ColumnId> {
        self.visible_leaves().iter().map(|spec| spec.id).collect()
    }

    fn entry(&self, id: ColumnId) -> Option<&ColumnState> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    fn entry_mut(&mut self, id: ColumnId) -> Option<&mut ColumnState> {
        self.entries.iter_mut().find(|entry| entry.id == id)
    }
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self::new(ColumnPolicy::default())
    }
}
