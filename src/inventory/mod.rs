//! Household inventory model: item kinds, rooms, houses, and derived reports.

pub mod catalog;
pub mod category;
pub mod house;
pub mod item;
pub mod report;
pub mod room;

pub use catalog::predefined_house;
pub use category::{Category, Condition};
pub use house::House;
pub use item::{
    Appliance, CleaningSupply, Clothing, Depreciation, Furniture, HouseholdItem, ItemKind,
    ItemRecord, KitchenUtensil, Tool,
};
pub use report::{
    round2, CategoryTotals, FinancialReport, FinancialSummary, HouseInfo, InventoryReport,
    InventorySnapshot, RoomSnapshot,
};
pub use room::Room;
