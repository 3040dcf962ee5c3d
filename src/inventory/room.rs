use super::item::{HouseholdItem, ItemRecord};

/// A room and the items placed in it, kept in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    name: String,
    area_sqm: f64,
    items: Vec<HouseholdItem>,
}

impl Room {
    pub fn new(name: impl Into<String>, area_sqm: f64) -> Self {
        Self {
            name: name.into(),
            area_sqm,
            items: Vec::new(),
        }
    }

    pub fn add_item(&mut self, item: HouseholdItem) {
        self.items.push(item);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn area_sqm(&self) -> f64 {
        self.area_sqm
    }

    pub fn items(&self) -> &[HouseholdItem] {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn total_current_value(&self) -> f64 {
        self.items.iter().map(HouseholdItem::current_value).sum()
    }

    pub fn inventory(&self) -> Vec<ItemRecord> {
        self.items.iter().map(HouseholdItem::describe).collect()
    }
}
