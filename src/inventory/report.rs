//! Derived, serializable views over a [`House`](super::House).

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::item::ItemRecord;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HouseInfo {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "direccion")]
    pub address: String,
    #[serde(rename = "total_habitaciones")]
    pub room_count: usize,
    #[serde(rename = "fecha_inventario")]
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoomSnapshot {
    #[serde(rename = "metros_cuadrados")]
    pub area_sqm: f64,
    #[serde(rename = "valor_total")]
    pub total_current_value: f64,
    #[serde(rename = "total_objetos")]
    pub item_count: usize,
    #[serde(rename = "objetos")]
    pub items: Vec<ItemRecord>,
}

/// Full nested record of a house, keyed by room name in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InventorySnapshot {
    #[serde(rename = "casa")]
    pub house: HouseInfo,
    #[serde(rename = "habitaciones")]
    pub rooms: IndexMap<String, RoomSnapshot>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FinancialSummary {
    #[serde(rename = "valor_total_original")]
    pub total_original: f64,
    #[serde(rename = "valor_total_actual")]
    pub total_current: f64,
    #[serde(rename = "depreciacion_total")]
    pub total_depreciation: f64,
    #[serde(rename = "porcentaje_depreciacion")]
    pub depreciation_percentage: f64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct CategoryTotals {
    pub original: f64,
    #[serde(rename = "actual")]
    pub current: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FinancialReport {
    #[serde(rename = "resumen_financiero")]
    pub summary: FinancialSummary,
    #[serde(rename = "valor_por_categoria")]
    pub by_category: IndexMap<Category, CategoryTotals>,
}

/// Document written to disk: inventory plus its financial analysis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InventoryReport {
    #[serde(rename = "inventario")]
    pub inventory: InventorySnapshot,
    #[serde(rename = "analisis_financiero")]
    pub financial: FinancialReport,
}

/// Running totals; rounding is applied only by [`FinancialAccumulator::finish`].
#[derive(Debug, Default)]
pub(crate) struct FinancialAccumulator {
    total_original: f64,
    total_current: f64,
    by_category: IndexMap<Category, CategoryTotals>,
}

impl FinancialAccumulator {
    pub(crate) fn record(&mut self, category: Category, original: f64, current: f64) {
        self.total_original += original;
        self.total_current += current;
        let entry = self.by_category.entry(category).or_default();
        entry.original += original;
        entry.current += current;
    }

    pub(crate) fn finish(self) -> FinancialReport {
        let depreciation = self.total_original - self.total_current;
        let percentage = if self.total_original > 0.0 {
            depreciation / self.total_original * 100.0
        } else {
            0.0
        };
        let by_category = self
            .by_category
            .into_iter()
            .map(|(category, totals)| {
                (
                    category,
                    CategoryTotals {
                        original: round2(totals.original),
                        current: round2(totals.current),
                    },
                )
            })
            .collect();
        FinancialReport {
            summary: FinancialSummary {
                total_original: round2(self.total_original),
                total_current: round2(self.total_current),
                total_depreciation: round2(depreciation),
                depreciation_percentage: round2(percentage),
            },
            by_category,
        }
    }
}

/// Rounds to two decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
