//! Reward store item state

use crate::core::record::{Record, resolve_first};
use crate::core::value::FieldValue;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreItem {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub item_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub cost: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_unlimited: bool,
    /// Older name for `is_unlimited`
    #[serde(default)]
    pub is_infinite: bool,
}

impl StoreItem {
    pub fn unlimited(&self) -> bool {
        self.is_unlimited || self.is_infinite
    }
}

impl Record for StoreItem {
    #[allow(clippy::cast_precision_loss)]
    fn field(&self, name: &str) -> FieldValue {
        match name {
            "_id" => self.document_id.clone().into(),
            "id" => self.id.clone().into(),
            "itemName" => self.item_name.clone().into(),
            "description" => self.description.clone().into(),
            "cost" => self.cost.into(),
            "stock" => self.stock.map(|s| s as f64).into(),
            "isUnlimited" => self.unlimited().into(),
            _ => FieldValue::Unset,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreItemCardState {
    pub can_afford: bool,
    pub has_stock: bool,
    pub is_available: bool,
}

/// Theme colors the redeem button chooses between
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonPalette {
    pub primary: String,
    pub disabled: String,
}

pub fn store_item_id(item: &StoreItem) -> String {
    resolve_first(item, &["_id", "id"]).to_string()
}

pub fn store_item_card_state(item: &StoreItem, user_points: f64) -> StoreItemCardState {
    let has_stock = item.unlimited() || item.stock.is_some_and(|stock| stock > 0);
    StoreItemCardState {
        can_afford: user_points >= item.cost,
        has_stock,
        is_available: has_stock,
    }
}

pub fn redeem_button_label(state: &StoreItemCardState) -> &'static str {
    if !state.has_stock {
        "Out of Stock"
    } else if !state.can_afford {
        "Need Points"
    } else {
        "Redeem"
    }
}

pub fn redeem_button_color<'a>(state: &StoreItemCardState, palette: &'a ButtonPalette) -> &'a str {
    if state.has_stock && state.can_afford {
        &palette.primary
    } else {
        &palette.disabled
    }
}
