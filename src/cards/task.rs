//! Chore (task) card state

use super::StatusStyle;
use crate::core::record::{Record, resolve_first};
use crate::core::value::FieldValue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Pending tasks older than this many days are overdue
pub const OVERDUE_AFTER_DAYS: i64 = 7;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum TaskStatus {
    #[default]
    Pending,
    PendingApproval,
    Approved,
}

impl TaskStatus {
    pub fn style(self) -> StatusStyle {
        match self {
            Self::Pending => StatusStyle {
                color: "#9CA3AF",
                icon: "circle",
                label: "To do",
            },
            Self::PendingApproval => StatusStyle {
                color: "#F59E0B",
                icon: "clock",
                label: "Waiting for approval",
            },
            Self::Approved => StatusStyle {
                color: "#16A34A",
                icon: "check-circle",
                label: "Completed",
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignedMember {
    #[serde(rename = "_id")]
    pub id: String,
    pub display_name: String,
    pub profile_color: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points_value: Option<f64>,
    /// Older name for `points_value`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assigned_to: Vec<AssignedMember>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Record for Task {
    fn field(&self, name: &str) -> FieldValue {
        match name {
            "_id" => self.document_id.clone().into(),
            "id" => self.id.clone().into(),
            "title" => self.title.clone().into(),
            "description" => self.description.clone().into(),
            "pointsValue" => self.points_value.into(),
            "value" => self.value.into(),
            "status" => self.status.to_string().into(),
            "completedBy" => self.completed_by.clone().into(),
            "createdAt" => self.created_at.map(|t| t.to_rfc3339()).into(),
            "updatedAt" => self.updated_at.map(|t| t.to_rfc3339()).into(),
            _ => FieldValue::Unset,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCardState {
    pub is_completed: bool,
    pub is_pending_approval: bool,
    pub is_pending: bool,
    pub status_color: &'static str,
    pub status_icon: &'static str,
    pub status_label: &'static str,
}

pub fn task_id(task: &Task) -> String {
    resolve_first(task, &["_id", "id"]).to_string()
}

/// Point value, preferring `pointsValue` over the legacy `value`.
pub fn task_points(task: &Task) -> f64 {
    resolve_first(task, &["pointsValue", "value"])
        .as_number()
        .unwrap_or(0.0)
}

pub fn task_card_state(task: &Task) -> TaskCardState {
    let style = task.status.style();
    TaskCardState {
        is_completed: task.status == TaskStatus::Approved,
        is_pending_approval: task.status == TaskStatus::PendingApproval,
        is_pending: task.status == TaskStatus::Pending,
        status_color: style.color,
        status_icon: style.icon,
        status_label: style.label,
    }
}

pub fn status_label(task: &Task) -> &'static str {
    task.status.style().label
}

pub fn format_task_points(points: f64) -> String {
    format!("+{points} pts")
}

pub fn can_complete_task(task: &Task) -> bool {
    task.status == TaskStatus::Pending
}

pub fn can_edit_task(task: &Task) -> bool {
    task.status != TaskStatus::Approved
}

/// Tasks can currently always be deleted.
pub fn can_delete_task(_task: &Task) -> bool {
    true
}

pub fn assigned_member_ids(task: &Task) -> Vec<&str> {
    task.assigned_to.iter().map(|m| m.id.as_str()).collect()
}

pub fn is_task_assigned_to_member(task: &Task, member_id: &str) -> bool {
    task.assigned_to.iter().any(|m| m.id == member_id)
}

/// Whole days between creation and `now`; 0 when the creation time is unknown.
pub fn task_age_days(task: &Task, now: DateTime<Utc>) -> i64 {
    task.created_at
        .map_or(0, |created| (now - created).num_days())
}

/// Still pending and older than [`OVERDUE_AFTER_DAYS`].
pub fn is_task_overdue(task: &Task, now: DateTime<Utc>) -> bool {
    task.status == TaskStatus::Pending && task_age_days(task, now) > OVERDUE_AFTER_DAYS
}
