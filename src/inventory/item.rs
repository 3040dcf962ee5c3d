use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::{Category, Condition};

/// Lower-cased furniture materials that hold their value longer.
const DURABLE_MATERIALS: [&str; 3] = ["madera solida", "roble", "caoba"];
const DEFAULT_WARRANTY_MONTHS: u32 = 12;
const DEFAULT_SEASON: &str = "Todo el año";
const DEFAULT_STYLE: &str = "Moderno";

/// Linear depreciation over a fixed, simulated period of use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Depreciation {
    pub years: u32,
    pub annual_rate: f64,
}

impl Depreciation {
    pub const fn new(years: u32, annual_rate: f64) -> Self {
        Self { years, annual_rate }
    }

    /// Applies the schedule to `value`, never returning less than zero.
    pub fn apply(&self, value: f64) -> f64 {
        let lost = self.annual_rate * f64::from(self.years);
        (value * (1.0 - lost)).max(0.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appliance {
    #[serde(rename = "marca")]
    pub brand: String,
    #[serde(rename = "potencia_w")]
    pub power_watts: f64,
    #[serde(rename = "garantia_meses")]
    pub warranty_months: u32,
}

impl Appliance {
    pub fn new(brand: impl Into<String>, power_watts: f64) -> Self {
        Self {
            brand: brand.into(),
            power_watts,
            warranty_months: DEFAULT_WARRANTY_MONTHS,
        }
    }

    pub fn with_warranty_months(mut self, months: u32) -> Self {
        self.warranty_months = months;
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tool {
    pub material: String,
    #[serde(rename = "electrica")]
    pub is_electric: bool,
}

impl Tool {
    pub fn new(material: impl Into<String>) -> Self {
        Self {
            material: material.into(),
            is_electric: false,
        }
    }

    pub fn electric(mut self, is_electric: bool) -> Self {
        self.is_electric = is_electric;
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Clothing {
    #[serde(rename = "tela")]
    pub fabric: String,
    #[serde(rename = "talla")]
    pub size: String,
    #[serde(rename = "temporada")]
    pub season: String,
}

impl Clothing {
    pub fn new(fabric: impl Into<String>, size: impl Into<String>) -> Self {
        Self {
            fabric: fabric.into(),
            size: size.into(),
            season: DEFAULT_SEASON.to_string(),
        }
    }

    pub fn with_season(mut self, season: impl Into<String>) -> Self {
        self.season = season.into();
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Furniture {
    pub material: String,
    #[serde(rename = "dimensiones")]
    pub dimensions: String,
    #[serde(rename = "estilo")]
    pub style: String,
}

impl Furniture {
    pub fn new(material: impl Into<String>, dimensions: impl Into<String>) -> Self {
        Self {
            material: material.into(),
            dimensions: dimensions.into(),
            style: DEFAULT_STYLE.to_string(),
        }
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    /// Solid wood, oak and mahogany match case-insensitively; no partial matches.
    pub fn is_durable(&self) -> bool {
        let material = self.material.to_lowercase();
        DURABLE_MATERIALS.contains(&material.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KitchenUtensil {
    pub material: String,
    #[serde(rename = "afilable")]
    pub is_sharpenable: bool,
}

impl KitchenUtensil {
    pub fn new(material: impl Into<String>) -> Self {
        Self {
            material: material.into(),
            is_sharpenable: false,
        }
    }

    pub fn sharpenable(mut self, is_sharpenable: bool) -> Self {
        self.is_sharpenable = is_sharpenable;
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CleaningSupply {
    #[serde(rename = "tipo_limpieza")]
    pub cleaning_type: String,
    #[serde(rename = "desechable")]
    pub is_disposable: bool,
}

impl CleaningSupply {
    pub fn new(cleaning_type: impl Into<String>) -> Self {
        Self {
            cleaning_type: cleaning_type.into(),
            is_disposable: false,
        }
    }

    pub fn disposable(mut self, is_disposable: bool) -> Self {
        self.is_disposable = is_disposable;
        self
    }
}

/// Closed set of item kinds. Each kind fixes its category and depreciation schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "tipo")]
pub enum ItemKind {
    #[serde(rename = "Electrodoméstico")]
    Appliance(Appliance),
    #[serde(rename = "Herramienta")]
    Tool(Tool),
    #[serde(rename = "Ropa")]
    Clothing(Clothing),
    #[serde(rename = "Mueble")]
    Furniture(Furniture),
    #[serde(rename = "Utensilio Cocina")]
    KitchenUtensil(KitchenUtensil),
    #[serde(rename = "Artículo Limpieza")]
    CleaningSupply(CleaningSupply),
}

impl ItemKind {
    pub fn category(&self) -> Category {
        match self {
            ItemKind::Appliance(_) => Category::Electronics,
            ItemKind::Tool(_) => Category::Tools,
            ItemKind::Clothing(_) => Category::Clothing,
            ItemKind::Furniture(_) => Category::Furniture,
            ItemKind::KitchenUtensil(_) => Category::Kitchen,
            ItemKind::CleaningSupply(_) => Category::Cleaning,
        }
    }

    pub fn depreciation(&self) -> Depreciation {
        match self {
            ItemKind::Appliance(_) => Depreciation::new(2, 0.15),
            ItemKind::Tool(_) => Depreciation::new(3, 0.08),
            ItemKind::Clothing(_) => Depreciation::new(1, 0.3),
            ItemKind::Furniture(furniture) if furniture.is_durable() => {
                Depreciation::new(4, 0.05)
            }
            ItemKind::Furniture(_) => Depreciation::new(4, 0.1),
            ItemKind::KitchenUtensil(_) => Depreciation::new(2, 0.12),
            ItemKind::CleaningSupply(_) => Depreciation::new(1, 0.4),
        }
    }

    /// Discriminator written under `tipo` in item records.
    pub fn type_label(&self) -> &'static str {
        match self {
            ItemKind::Appliance(_) => "Electrodoméstico",
            ItemKind::Tool(_) => "Herramienta",
            ItemKind::Clothing(_) => "Ropa",
            ItemKind::Furniture(_) => "Mueble",
            ItemKind::KitchenUtensil(_) => "Utensilio Cocina",
            ItemKind::CleaningSupply(_) => "Artículo Limpieza",
        }
    }
}

impl From<Appliance> for ItemKind {
    fn from(value: Appliance) -> Self {
        ItemKind::Appliance(value)
    }
}

impl From<Tool> for ItemKind {
    fn from(value: Tool) -> Self {
        ItemKind::Tool(value)
    }
}

impl From<Clothing> for ItemKind {
    fn from(value: Clothing) -> Self {
        ItemKind::Clothing(value)
    }
}

impl From<Furniture> for ItemKind {
    fn from(value: Furniture) -> Self {
        ItemKind::Furniture(value)
    }
}

impl From<KitchenUtensil> for ItemKind {
    fn from(value: KitchenUtensil) -> Self {
        ItemKind::KitchenUtensil(value)
    }
}

impl From<CleaningSupply> for ItemKind {
    fn from(value: CleaningSupply) -> Self {
        ItemKind::CleaningSupply(value)
    }
}

/// A single household object. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct HouseholdItem {
    name: String,
    location: String,
    condition: Condition,
    estimated_value: f64,
    acquired_at: DateTime<Utc>,
    kind: ItemKind,
}

impl HouseholdItem {
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        kind: impl Into<ItemKind>,
    ) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            condition: Condition::default(),
            estimated_value: 0.0,
            acquired_at: Utc::now(),
            kind: kind.into(),
        }
    }

    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.condition = condition;
        self
    }

    /// Negative or NaN values are stored as zero.
    pub fn with_estimated_value(mut self, value: f64) -> Self {
        self.estimated_value = value.max(0.0);
        self
    }

    pub fn with_acquired_at(mut self, acquired_at: DateTime<Utc>) -> Self {
        self.acquired_at = acquired_at;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn condition(&self) -> Condition {
        self.condition
    }

    pub fn category(&self) -> Category {
        self.kind.category()
    }

    pub fn estimated_value(&self) -> f64 {
        self.estimated_value
    }

    pub fn acquired_at(&self) -> DateTime<Utc> {
        self.acquired_at
    }

    pub fn kind(&self) -> &ItemKind {
        &self.kind
    }

    pub fn current_value(&self) -> f64 {
        self.kind.depreciation().apply(self.estimated_value)
    }

    /// Builds the serializable information record for this item.
    pub fn describe(&self) -> ItemRecord {
        ItemRecord {
            kind: self.kind.clone(),
            name: self.name.clone(),
            category: self.category(),
            location: self.location.clone(),
            condition: self.condition,
            original_value: self.estimated_value,
            current_value: self.current_value(),
        }
    }
}

impl fmt::Display for HouseholdItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) - {}", self.name, self.category(), self.location)
    }
}

/// Flat description of an item as written to inventory snapshots.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemRecord {
    #[serde(flatten)]
    pub kind: ItemKind,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "categoria")]
    pub category: Category,
    #[serde(rename = "ubicacion")]
    pub location: String,
    #[serde(rename = "estado")]
    pub condition: Condition,
    #[serde(rename = "valor_original")]
    pub original_value: f64,
    #[serde(rename = "valor_actual")]
    pub current_value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn appliance_loses_thirty_percent() {
        let fridge = HouseholdItem::new("Refrigerador", "Cocina", Appliance::new("Samsung", 350.0))
            .with_estimated_value(25000.0);
        assert_close(fridge.current_value(), 17500.0);
        assert_eq!(fridge.category(), Category::Electronics);
    }

    #[test]
    fn oak_furniture_uses_reduced_rate() {
        let bed = HouseholdItem::new("Cama", "Dormitorio", Furniture::new("Roble", "2.0m x 1.6m"))
            .with_estimated_value(15000.0);
        assert_close(bed.current_value(), 12000.0);

        let table = HouseholdItem::new("Mesa", "Cocina", Furniture::new("CAOBA", "1m"))
            .with_estimated_value(1000.0);
        assert_close(table.current_value(), 800.0);
    }

    #[test]
    fn compound_material_names_do_not_count_as_durable() {
        let bed = HouseholdItem::new(
            "Cama Queen Size",
            "Dormitorio",
            Furniture::new("Madera de Roble", "2.0m x 1.6m"),
        )
        .with_estimated_value(15000.0);
        assert_close(bed.current_value(), 9000.0);
    }

    #[test]
    fn cleaning_supply_loses_forty_percent() {
        let rags = HouseholdItem::new("Trapos", "Garaje", CleaningSupply::new("Superficies"))
            .with_estimated_value(300.0);
        assert_close(rags.current_value(), 180.0);
    }

    #[test]
    fn remaining_schedules_match_their_rates() {
        let drill = HouseholdItem::new("Taladro", "Garaje", Tool::new("Metal").electric(true))
            .with_estimated_value(1000.0);
        assert_close(drill.current_value(), 760.0);

        let suit = HouseholdItem::new("Traje", "Dormitorio", Clothing::new("Lana", "M"))
            .with_estimated_value(1000.0);
        assert_close(suit.current_value(), 700.0);

        let pan = HouseholdItem::new("Sartén", "Cocina", KitchenUtensil::new("Tefal"))
            .with_estimated_value(1000.0);
        assert_close(pan.current_value(), 760.0);
    }

    #[test]
    fn depreciation_never_goes_negative() {
        let schedule = Depreciation::new(10, 0.5);
        assert_eq!(schedule.apply(1000.0), 0.0);
    }

    #[test]
    fn negative_estimates_are_clamped() {
        let item = HouseholdItem::new("Roto", "Garaje", Tool::new("Acero"))
            .with_estimated_value(-50.0);
        assert_eq!(item.estimated_value(), 0.0);
        assert_eq!(item.current_value(), 0.0);
    }

    #[test]
    fn constructor_defaults() {
        let item = HouseholdItem::new("Lámpara", "Sala", Appliance::new("Philips", 15.0));
        assert_eq!(item.condition(), Condition::Good);
        assert_eq!(item.estimated_value(), 0.0);
        match item.kind() {
            ItemKind::Appliance(appliance) => assert_eq!(appliance.warranty_months, 12),
            other => panic!("unexpected kind {other:?}"),
        }
        let shirt = Clothing::new("Algodón", "L");
        assert_eq!(shirt.season, "Todo el año");
        assert_eq!(Furniture::new("Pino", "1m").style, "Moderno");
    }

    #[test]
    fn describe_uses_record_keys() {
        let item = HouseholdItem::new(
            "Horno Microondas",
            "Cocina",
            Appliance::new("LG", 1200.0).with_warranty_months(18),
        )
        .with_condition(Condition::Excellent)
        .with_estimated_value(8000.0);

        let value = serde_json::to_value(item.describe()).unwrap();
        let object = value.as_object().unwrap();
        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "categoria",
                "estado",
                "garantia_meses",
                "marca",
                "nombre",
                "potencia_w",
                "tipo",
                "ubicacion",
                "valor_actual",
                "valor_original",
            ]
        );
        assert_eq!(object["tipo"], "Electrodoméstico");
        assert_eq!(object["categoria"], "Electrónicos");
        assert_eq!(object["estado"], "Excelente");
    }

    #[test]
    fn record_parses_back() {
        let item = HouseholdItem::new(
            "Juego de Trapos",
            "Garaje",
            CleaningSupply::new("Superficies").disposable(true),
        )
        .with_condition(Condition::Poor)
        .with_estimated_value(300.0);
        let record = item.describe();
        let json = serde_json::to_string(&record).unwrap();
        let parsed: ItemRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.kind, record.kind);
        assert_eq!(parsed.name, record.name);
        assert_eq!(parsed.condition, Condition::Poor);
        assert_close(parsed.current_value, record.current_value);
    }

    #[test]
    fn display_shows_name_category_and_location() {
        let item = HouseholdItem::new("Taladro", "Garaje", Tool::new("Metal"));
        assert_eq!(item.to_string(), "Taladro (Herramientas) - Garaje");
    }
}
