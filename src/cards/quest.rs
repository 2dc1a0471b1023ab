//! Quest card state

use super::{MemberRefs, StatusStyle};
use crate::core::record::{Record, resolve_first};
use crate::core::value::FieldValue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Quest lifecycle. Quests without a status are available.
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
pub enum QuestStatus {
    #[default]
    Available,
    Active,
    Completed,
    PendingApproval,
}

impl QuestStatus {
    pub fn style(self) -> StatusStyle {
        match self {
            Self::Available => StatusStyle {
                color: "#6366F1",
                icon: "map",
                label: "Available",
            },
            Self::Active => StatusStyle {
                color: "#F59E0B",
                icon: "compass",
                label: "In Progress",
            },
            Self::Completed => StatusStyle {
                color: "#16A34A",
                icon: "check-circle",
                label: "Completed",
            },
            Self::PendingApproval => StatusStyle {
                color: "#8B5CF6",
                icon: "clock",
                label: "Waiting for Approval",
            },
        }
    }

    /// Primary button text; empty when there is nothing to do.
    pub fn action_label(self) -> &'static str {
        match self {
            Self::Available => "Start Quest",
            Self::Active => "Complete",
            Self::Completed | Self::PendingApproval => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum QuestType {
    OneTime,
    Recurring,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recurrence {
    pub frequency: Frequency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_reset: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quest {
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
    pub reward_value: Option<f64>,
    #[serde(default)]
    pub status: QuestStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claimed_by: Option<MemberRefs>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_by: Option<MemberRefs>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quest_type: Option<QuestType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<Recurrence>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Record for Quest {
    fn field(&self, name: &str) -> FieldValue {
        match name {
            "_id" => self.document_id.clone().into(),
            "id" => self.id.clone().into(),
            "title" => self.title.clone().into(),
            "description" => self.description.clone().into(),
            "pointsValue" => self.points_value.into(),
            "rewardValue" => self.reward_value.into(),
            "status" => self.status.to_string().into(),
            "questType" => self.quest_type.map(|t| t.to_string()).into(),
            "createdAt" => self.created_at.map(|t| t.to_rfc3339()).into(),
            "updatedAt" => self.updated_at.map(|t| t.to_rfc3339()).into(),
            _ => FieldValue::Unset,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestCardState {
    pub is_available: bool,
    pub is_active: bool,
    pub is_completed: bool,
    pub is_pending_approval: bool,
    pub status_color: &'static str,
    pub status_icon: &'static str,
    pub status_label: &'static str,
    pub action_label: &'static str,
}

pub fn quest_id(quest: &Quest) -> String {
    resolve_first(quest, &["_id", "id"]).to_string()
}

/// Point value, preferring `pointsValue` over the legacy `rewardValue`.
pub fn quest_points(quest: &Quest) -> f64 {
    resolve_first(quest, &["pointsValue", "rewardValue"])
        .as_number()
        .unwrap_or(0.0)
}

pub fn quest_card_state(quest: &Quest) -> QuestCardState {
    let status = quest.status;
    let style = status.style();
    QuestCardState {
        is_available: status == QuestStatus::Available,
        is_active: status == QuestStatus::Active,
        is_completed: status == QuestStatus::Completed,
        is_pending_approval: status == QuestStatus::PendingApproval,
        status_color: style.color,
        status_icon: style.icon,
        status_label: style.label,
        action_label: status.action_label(),
    }
}

pub fn format_quest_points(points: f64) -> String {
    format!("{points} pts")
}

pub fn can_claim_quest(quest: &Quest) -> bool {
    quest.status == QuestStatus::Available
}

pub fn can_complete_quest(quest: &Quest) -> bool {
    quest.status == QuestStatus::Active
}
