use std::fmt;

use serde::{Deserialize, Serialize};

/// Groups household items for valuation reports.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    #[serde(rename = "Cocina")]
    Kitchen,
    #[serde(rename = "Herramientas")]
    Tools,
    #[serde(rename = "Electrónicos")]
    Electronics,
    #[serde(rename = "Ropa")]
    Clothing,
    #[serde(rename = "Muebles")]
    Furniture,
    #[serde(rename = "Limpieza")]
    Cleaning,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Kitchen,
        Category::Tools,
        Category::Electronics,
        Category::Clothing,
        Category::Furniture,
        Category::Cleaning,
    ];

    /// Label used in reports and serialized snapshots.
    pub fn label(self) -> &'static str {
        match self {
            Category::Kitchen => "Cocina",
            Category::Tools => "Herramientas",
            Category::Electronics => "Electrónicos",
            Category::Clothing => "Ropa",
            Category::Furniture => "Muebles",
            Category::Cleaning => "Limpieza",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Physical state of an item at inventory time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Condition {
    #[serde(rename = "Excelente")]
    Excellent,
    #[default]
    #[serde(rename = "Bueno")]
    Good,
    #[serde(rename = "Regular")]
    Fair,
    #[serde(rename = "Malo")]
    Poor,
}

impl Condition {
    pub fn label(self) -> &'static str {
        match self {
            Condition::Excellent => "Excelente",
            Condition::Good => "Bueno",
            Condition::Fair => "Regular",
            Condition::Poor => "Malo",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_serialized_form() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.label()));
        }
        let json = serde_json::to_string(&Condition::Poor).unwrap();
        assert_eq!(json, "\"Malo\"");
    }

    #[test]
    fn condition_defaults_to_good() {
        assert_eq!(Condition::default(), Condition::Good);
    }
}
