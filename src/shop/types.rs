use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An item players can buy with points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerUp {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub cost: u64,
    pub effect_type: String,
    pub effect_value: f64,
}

/// Owned power-up quantities keyed by power-up id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    pub items: BTreeMap<String, u32>,
}

impl Inventory {
    pub fn quantity(&self, power_up_id: &str) -> u32 {
        self.items.get(power_up_id).copied().unwrap_or(0)
    }

    pub fn add(&mut self, power_up_id: &str) {
        let qty = self.items.entry(power_up_id.to_string()).or_insert(0);
        *qty = qty.saturating_add(1);
    }
}
