use chrono::{DateTime, Utc};
use indexmap::IndexMap;

use super::report::{
    FinancialAccumulator, FinancialReport, HouseInfo, InventoryReport, InventorySnapshot,
    RoomSnapshot,
};
use super::room::Room;

/// A house owning its rooms in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct House {
    name: String,
    address: String,
    rooms: Vec<Room>,
}

impl House {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            rooms: Vec::new(),
        }
    }

    pub fn add_room(&mut self, room: Room) {
        self.rooms.push(room);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn item_count(&self) -> usize {
        self.rooms.iter().map(Room::item_count).sum()
    }

    pub fn full_inventory(&self) -> InventorySnapshot {
        self.full_inventory_at(Utc::now())
    }

    /// Builds the snapshot stamped with `generated_at`.
    ///
    /// Rooms sharing a name collapse into one entry: the last room wins but the
    /// entry keeps the position of the first.
    pub fn full_inventory_at(&self, generated_at: DateTime<Utc>) -> InventorySnapshot {
        let mut rooms = IndexMap::with_capacity(self.rooms.len());
        for room in &self.rooms {
            let snapshot = RoomSnapshot {
                area_sqm: room.area_sqm(),
                total_current_value: room.total_current_value(),
                item_count: room.item_count(),
                items: room.inventory(),
            };
            if rooms.insert(room.name().to_string(), snapshot).is_some() {
                tracing::warn!(
                    room = room.name(),
                    "duplicate room name; earlier room replaced in inventory snapshot"
                );
            }
        }
        InventorySnapshot {
            house: HouseInfo {
                name: self.name.clone(),
                address: self.address.clone(),
                room_count: self.rooms.len(),
                generated_at,
            },
            rooms,
        }
    }

    pub fn financial_report(&self) -> FinancialReport {
        let mut acc = FinancialAccumulator::default();
        for item in self.rooms.iter().flat_map(|room| room.items()) {
            acc.record(item.category(), item.estimated_value(), item.current_value());
        }
        acc.finish()
    }

    pub fn inventory_report(&self) -> InventoryReport {
        self.inventory_report_at(Utc::now())
    }

    pub fn inventory_report_at(&self, generated_at: DateTime<Utc>) -> InventoryReport {
        InventoryReport {
            inventory: self.full_inventory_at(generated_at),
            financial: self.financial_report(),
        }
    }
}
