// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    InProcess,
    NeedToStart,
    Complete,
    Blocked,
}

impl Status {
    pub const ALL: [Self; 4] = [
        Self::InProcess,
        Self::NeedToStart,
        Self::Complete,
        Self::Blocked,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InProcess => "in_process",
            Self::NeedToStart => "need_to_start",
            Self::Complete => "complete",
            Self::Blocked => "blocked",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "in_process" => Some(Self::InProcess),
            "need_to_start" => Some(Self::NeedToStart),
            "complete" => Some(Self::Complete),
            "blocked" => Some(Self::Blocked),
            _ => None,
        }
    }

    /// Loose match against what a user types into the cell.
    pub fn parse_loose(value: &str) -> Option<Self> {
        let folded: String = value
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match folded.as_str() {
            "inprocess" => Some(Self::InProcess),
            "needtostart" => Some(Self::NeedToStart),
            "complete" => Some(Self::Complete),
            "blocked" => Some(Self::Blocked),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::InProcess => "In-process",
            Self::NeedToStart => "Need to start",
            Self::Complete => "Complete",
            Self::Blocked => "Blocked",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Self; 3] = [Self::High, Self::Medium, Self::Low];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }

    pub fn parse_loose(value: &str) -> Option<Self> {
        Self::parse(value.trim().to_ascii_lowercase().as_str())
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Field {
    JobRequest,
    Submitted,
    Status,
    Submitter,
    Url,
    Assigned,
    Priority,
    DueDate,
    EstValue,
}

impl Field {
    pub const ALL: [Self; 9] = [
        Self::JobRequest,
        Self::Submitted,
        Self::Status,
        Self::Submitter,
        Self::Url,
        Self::Assigned,
        Self::Priority,
        Self::DueDate,
        Self::EstValue,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::JobRequest => "job_request",
            Self::Submitted => "submitted",
            Self::Status => "status",
            Self::Submitter => "submitter",
            Self::Url => "url",
            Self::Assigned => "assigned",
            Self::Priority => "priority",
            Self::DueDate => "due_date",
            Self::EstValue => "est_value",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "job_request" => Some(Self::JobRequest),
            "submitted" => Some(Self::Submitted),
            "status" => Some(Self::Status),
            "submitter" => Some(Self::Submitter),
            "url" => Some(Self::Url),
            "assigned" => Some(Self::Assigned),
            "priority" => Some(Self::Priority),
            "due_date" => Some(Self::DueDate),
            "est_value" => Some(Self::EstValue),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Status(Status),
    Priority(Priority),
    Number(f64),
}

impl CellValue {
    pub fn display(&self) -> String {
        match self {
            Self::Text(value) => value.clone(),
            Self::Status(status) => status.label().to_owned(),
            Self::Priority(priority) => priority.label().to_owned(),
            Self::Number(value) => value.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(value) => value.is_empty(),
            Self::Status(_) | Self::Priority(_) | Self::Number(_) => false,
        }
    }
}

/// One job-request record. Dates are stored exactly as entered; `est_value`
/// holds whatever the permissive numeric coercion produced, including NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub job_request: String,
    pub submitted: String,
    pub status: Status,
    pub submitter: String,
    pub url: String,
    pub assigned: String,
    pub priority: Priority,
    pub due_date: String,
    pub est_value: f64,
}

impl Default for Row {
    fn default() -> Self {
        Self {
            job_request: String::new(),
            submitted: String::new(),
            status: Status::NeedToStart,
            submitter: String::new(),
            url: String::new(),
            assigned: String::new(),
            priority: Priority::Low,
            due_date: String::new(),
            est_value: 0.0,
        }
    }
}

impl Row {
    pub fn value(&self, field: Field) -> CellValue {
        match field {
            Field::JobRequest => CellValue::Text(self.job_request.clone()),
            Field::Submitted => CellValue::Text(self.submitted.clone()),
            Field::Status => CellValue::Status(self.status),
            Field::Submitter => CellValue::Text(self.submitter.clone()),
            Field::Url => CellValue::Text(self.url.clone()),
            Field::Assigned => CellValue::Text(self.assigned.clone()),
            Field::Priority => CellValue::Priority(self.priority),
            Field::DueDate => CellValue::Text(self.due_date.clone()),
            Field::EstValue => CellValue::Number(self.est_value),
        }
    }

    /// Permissive write path: text fields store the input as entered, enum
    /// fields keep their previous value on unrecognized input, and the
    /// numeric field coerces (invalid text becomes NaN). Never fails.
    pub fn apply_text(&mut self, field: Field, input: &str) {
        match field {
            Field::JobRequest => self.job_request = input.to_owned(),
            Field::Submitted => self.submitted = input.to_owned(),
            Field::Status => {
                if let Some(status) = Status::parse_loose(input) {
                    self.status = status;
                }
            }
            Field::Submitter => self.submitter = input.to_owned(),
            Field::Url => self.url = input.to_owned(),
            Field::Assigned => self.assigned = input.to_owned(),
            Field::Priority => {
                if let Some(priority) = Priority::parse_loose(input) {
                    self.priority = priority;
                }
            }
            Field::DueDate => self.due_date = input.to_owned(),
            Field::EstValue => self.est_value = coerce_number(input),
        }
    }
}

fn coerce_number(input: &str) -> f64 {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}
