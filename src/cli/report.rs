//! Console rendering of an [`InventoryReport`].

use crate::inventory::{FinancialReport, InventoryReport, InventorySnapshot};

use super::output::Formatter;

const TITLE: &str = "SISTEMA DE GESTIÓN DE INVENTARIO DE HOGAR";
const FINANCIAL_TITLE: &str = "REPORTE FINANCIERO DEL INVENTARIO";

/// Renders the per-room breakdown followed by the financial summary.
pub fn render_report(report: &InventoryReport, formatter: &Formatter) -> Vec<String> {
    let mut lines = render_inventory(&report.inventory, formatter);
    lines.push(String::new());
    lines.extend(render_financial(&report.financial, formatter));
    lines
}

pub fn render_inventory(snapshot: &InventorySnapshot, formatter: &Formatter) -> Vec<String> {
    let house = &snapshot.house;
    let mut lines = formatter.banner(TITLE);
    lines.push(formatter.info_text(format!("Casa: {}", house.name)));
    lines.push(formatter.info_text(format!("Dirección: {}", house.address)));
    lines.push(formatter.info_text(format!("Total habitaciones: {}", house.room_count)));
    lines.push(formatter.rule());

    for (name, room) in &snapshot.rooms {
        lines.push(String::new());
        lines.push(formatter.heading("🏠", format!("HABITACIÓN: {}", name.to_uppercase())));
        lines.push(format!("  Metros cuadrados: {}m²", format_area(room.area_sqm)));
        lines.push(format!("  Total objetos: {}", room.item_count));
        lines.push(format!(
            "  Valor total: {}",
            formatter.money(room.total_current_value)
        ));
        lines.push(formatter.sub_rule());
        for item in &room.items {
            lines.push(format!("  • {} ({})", item.name, item.kind.type_label()));
            lines.push(format!(
                "    Estado: {} | Valor actual: {}",
                item.condition,
                formatter.money(item.current_value)
            ));
        }
    }
    lines
}

/// Whole areas keep one decimal (`15.0`); fractional ones print unrounded.
fn format_area(area: f64) -> String {
    if area.fract() == 0.0 {
        format!("{area:.1}")
    } else {
        area.to_string()
    }
}

pub fn render_financial(report: &FinancialReport, formatter: &Formatter) -> Vec<String> {
    let summary = &report.summary;
    let mut lines = vec![
        formatter.rule(),
        formatter.heading("📊", FINANCIAL_TITLE),
        formatter.rule(),
    ];
    lines.push(format!(
        "Valor total original: {}",
        formatter.money(summary.total_original)
    ));
    lines.push(format!(
        "Valor total actual: {}",
        formatter.money(summary.total_current)
    ));
    lines.push(format!(
        "Depreciación total: {}",
        formatter.money(summary.total_depreciation)
    ));
    lines.push(format!(
        "Porcentaje de depreciación: {:.2}%",
        summary.depreciation_percentage
    ));

    lines.push(String::new());
    lines.push(formatter.header_text("VALOR POR CATEGORÍA:"));
    for (category, totals) in &report.by_category {
        lines.push(format!("  {}:", category));
        lines.push(format!("    Original: {}", formatter.money(totals.original)));
        lines.push(format!("    Actual: {}", formatter.money(totals.current)));
    }
    lines
}
