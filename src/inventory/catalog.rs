//! The fixed household inventory shipped with the CLI.

use super::category::Condition;
use super::house::House;
use super::item::{
    Appliance, CleaningSupply, Clothing, Furniture, HouseholdItem, KitchenUtensil, Tool,
};
use super::room::Room;

pub const HOUSE_NAME: &str = "Casa Familiar Ejemplo";
pub const HOUSE_ADDRESS: &str = "Calle Principal 123, Ciudad Ejemplo";

fn appliance(
    name: &str,
    location: &str,
    brand: &str,
    power_watts: f64,
    condition: Condition,
    value: f64,
    warranty_months: u32,
) -> HouseholdItem {
    HouseholdItem::new(
        name,
        location,
        Appliance::new(brand, power_watts).with_warranty_months(warranty_months),
    )
    .with_condition(condition)
    .with_estimated_value(value)
}

fn furniture(
    name: &str,
    location: &str,
    material: &str,
    dimensions: &str,
    condition: Condition,
    value: f64,
    style: &str,
) -> HouseholdItem {
    HouseholdItem::new(
        name,
        location,
        Furniture::new(material, dimensions).with_style(style),
    )
    .with_condition(condition)
    .with_estimated_value(value)
}

fn clothing(
    name: &str,
    location: &str,
    fabric: &str,
    size: &str,
    condition: Condition,
    value: f64,
    season: &str,
) -> HouseholdItem {
    HouseholdItem::new(name, location, Clothing::new(fabric, size).with_season(season))
        .with_condition(condition)
        .with_estimated_value(value)
}

fn tool(
    name: &str,
    location: &str,
    material: &str,
    condition: Condition,
    value: f64,
    is_electric: bool,
) -> HouseholdItem {
    HouseholdItem::new(name, location, Tool::new(material).electric(is_electric))
        .with_condition(condition)
        .with_estimated_value(value)
}

fn utensil(
    name: &str,
    location: &str,
    material: &str,
    condition: Condition,
    value: f64,
) -> HouseholdItem {
    HouseholdItem::new(name, location, KitchenUtensil::new(material))
        .with_condition(condition)
        .with_estimated_value(value)
}

fn cleaning(
    name: &str,
    location: &str,
    cleaning_type: &str,
    condition: Condition,
    value: f64,
    is_disposable: bool,
) -> HouseholdItem {
    HouseholdItem::new(
        name,
        location,
        CleaningSupply::new(cleaning_type).disposable(is_disposable),
    )
    .with_condition(condition)
    .with_estimated_value(value)
}

/// Builds the predefined six-room house.
///
/// The first five rooms (22 items) reproduce the classic sample household.
/// `Lavandería` and its two items are an addition to that data set, which
/// brings the original total from 123,150 to 133,000.
pub fn predefined_house() -> House {
    use Condition::{Excellent, Fair, Good, Poor};

    let mut house = House::new(HOUSE_NAME, HOUSE_ADDRESS);

    let mut kitchen = Room::new("Cocina", 15.0);
    kitchen.add_item(appliance("Refrigerador", "Cocina", "Samsung", 350.0, Good, 25000.0, 24));
    kitchen.add_item(appliance("Horno Microondas", "Cocina", "LG", 1200.0, Excellent, 8000.0, 18));
    kitchen.add_item(utensil("Juego de Cubiertos", "Cocina", "Acero Inoxidable", Good, 1500.0));
    kitchen.add_item(utensil("Sartén Antiadherente", "Cocina", "Tefal", Fair, 800.0));
    kitchen.add_item(furniture("Mesa de Cocina", "Cocina", "Madera", "1.2m x 0.8m", Good, 4500.0, "Rústico"));
    house.add_room(kitchen);

    let mut living = Room::new("Sala", 25.0);
    living.add_item(furniture("Sofá 3 Plazas", "Sala", "Cuero Sintético", "2.1m x 0.9m", Good, 12000.0, "Moderno"));
    living.add_item(furniture("Mesa de Centro", "Sala", "Cristal y Metal", "1.0m x 0.6m", Excellent, 3500.0, "Contemporáneo"));
    living.add_item(appliance("Televisor 55'", "Sala", "Sony", 180.0, Excellent, 18000.0, 36));
    living.add_item(furniture("Estantería", "Sala", "Madera MDF", "1.8m x 0.4m", Good, 2800.0, "Moderno"));
    house.add_room(living);

    let mut bedroom = Room::new("Dormitorio Principal", 18.0);
    bedroom.add_item(furniture("Cama Queen Size", "Dormitorio", "Madera de Roble", "2.0m x 1.6m", Good, 15000.0, "Clásico"));
    bedroom.add_item(furniture("Armario Empotrado", "Dormitorio", "Madera", "2.2m x 1.8m", Good, 8500.0, "Moderno"));
    bedroom.add_item(clothing("Traje Formal", "Dormitorio", "Lana", "M", Excellent, 3000.0, "Invierno"));
    bedroom.add_item(clothing("Vestido de Noche", "Dormitorio", "Seda", "S", Good, 2500.0, "Verano"));
    bedroom.add_item(appliance("Lámpara de Noche", "Dormitorio", "Philips", 15.0, Fair, 600.0, 6));
    house.add_room(bedroom);

    let mut garage = Room::new("Garaje", 30.0);
    garage.add_item(tool("Taladro Percutor", "Garaje", "Metal/Plástico", Good, 1800.0, true));
    garage.add_item(tool("Juego de Llaves", "Garaje", "Acero Cromado", Excellent, 1200.0, false));
    garage.add_item(tool("Escalera Extensible", "Garaje", "Aluminio", Fair, 3200.0, false));
    garage.add_item(cleaning("Aspiradora", "Garaje", "Pisos/Muebles", Good, 4500.0, false));
    garage.add_item(cleaning("Juego de Trapos", "Garaje", "Superficies", Poor, 300.0, true));
    house.add_room(garage);

    let mut bathroom = Room::new("Baño Principal", 8.0);
    bathroom.add_item(furniture("Vanitorio", "Baño", "Mármol Sintético", "1.0m x 0.5m", Good, 5200.0, "Moderno"));
    bathroom.add_item(cleaning("Juego de Toallas", "Baño", "Textiles", Good, 800.0, false));
    bathroom.add_item(utensil("Espejo Aumento", "Baño", "Vidrio", Excellent, 450.0));
    house.add_room(bathroom);

    let mut laundry = Room::new("Lavandería", 6.0);
    laundry.add_item(appliance("Lavadora", "Lavandería", "Whirlpool", 500.0, Good, 9500.0, 12));
    laundry.add_item(cleaning("Detergente y Suavizante", "Lavandería", "Ropa", Good, 350.0, true));
    house.add_room(laundry);

    house
}
