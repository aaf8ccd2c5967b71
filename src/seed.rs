use chrono::DateTime;

use crate::{
    models::{Category, ProductSummary},
    store::CatalogStore,
};

const CATEGORIES: [&str; 4] = ["Cameras", "Recorders", "Accessories", "Smart Home"];

// (name, category, brand, price, stock, rating)
const PRODUCTS: [(&str, &str, &str, f64, i64, f64); 30] = [
    ("Bullet Camera 2MP", "Cameras", "Hikvision", 1899.0, 14, 4.2),
    ("Bullet Camera 4MP", "Cameras", "Hikvision", 2799.0, 9, 4.5),
    ("Dome Camera 2MP", "Cameras", "CP Plus", 1499.0, 20, 4.0),
    ("Dome Camera 5MP", "Cameras", "Dahua", 3299.0, 0, 4.7),
    ("PTZ Camera 4MP", "Cameras", "Dahua", 12999.0, 3, 4.8),
    ("Wi-Fi Cube Camera", "Cameras", "Imou", 2199.0, 25, 3.9),
    ("Fisheye Camera 6MP", "Cameras", "Hikvision", 8499.0, 2, 4.1),
    ("Turret Camera 4MP", "Cameras", "CP Plus", 2599.0, 0, 3.6),
    ("Solar 4G Camera", "Cameras", "Imou", 9999.0, 6, 4.4),
    ("Doorbell Camera", "Cameras", "Qubo", 4499.0, 11, 4.0),
    ("Thermal Bullet Camera", "Cameras", "Hikvision", 45999.0, 1, 4.9),
    ("Mini Spy Camera", "Cameras", "Generic", 999.0, 40, 2.8),
    ("Dual Lens Camera", "Cameras", "Ezviz", 3799.0, 7, 4.3),
    ("4 Channel DVR", "Recorders", "CP Plus", 2899.0, 12, 4.1),
    ("8 Channel DVR", "Recorders", "Hikvision", 4299.0, 8, 4.3),
    ("16 Channel NVR", "Recorders", "Dahua", 8999.0, 0, 4.6),
    ("4 Channel PoE NVR", "Recorders", "Hikvision", 6499.0, 5, 4.4),
    ("32 Channel NVR", "Recorders", "Dahua", 18999.0, 2, 4.7),
    ("1TB Surveillance HDD", "Accessories", "Seagate", 3999.0, 30, 4.5),
    ("2TB Surveillance HDD", "Accessories", "WD", 5899.0, 18, 4.6),
    ("CCTV Power Supply", "Accessories", "Generic", 549.0, 60, 3.8),
    ("BNC Connector Pack", "Accessories", "Generic", 199.0, 120, 3.5),
    ("Coaxial Cable 90m", "Accessories", "Finolex", 1299.0, 0, 4.0),
    ("PoE Switch 8 Port", "Accessories", "TP-Link", 4599.0, 9, 4.4),
    ("Camera Junction Box", "Accessories", "Generic", 149.0, 75, 3.2),
    ("Smart Door Lock", "Smart Home", "Yale", 14999.0, 4, 4.6),
    ("Motion Sensor", "Smart Home", "Qubo", 1199.0, 22, 3.9),
    ("Smart Siren", "Smart Home", "Imou", 1799.0, 0, 3.7),
    ("Video Door Phone", "Smart Home", "Godrej", 8999.0, 6, 4.2),
    ("Smart Plug", "Smart Home", "Wipro", 899.0, 50, 4.0),
];

/// Deterministic demo catalog used by the reference server and tests.
pub fn seed_catalog() -> CatalogStore {
    let categories = CATEGORIES
        .iter()
        .enumerate()
        .map(|(i, name)| Category {
            id: format!("cat-{:03}", i + 1),
            name: (*name).to_string(),
        })
        .collect();

    // 2024-01-01T00:00:00Z, one product per day after that.
    let base = 1_704_067_200_i64;
    let products = PRODUCTS
        .iter()
        .enumerate()
        .map(|(i, (name, category, brand, price, stock, rating))| {
            let created_at = DateTime::from_timestamp(base + i as i64 * 86_400, 0);
            ProductSummary {
                id: format!("prod-{:03}", i + 1),
                name: (*name).to_string(),
                category: (*category).to_string(),
                brand: Some((*brand).to_string()),
                price: *price,
                discount: (i % 4 == 0).then_some(10.0),
                rating: Some(*rating),
                stock: *stock,
                stock_location: Some(if i % 2 == 0 { "Mumbai" } else { "Pune" }.to_string()),
                image: format!("/uploads/prod-{:03}.jpg", i + 1),
                created_at,
                updated_at: created_at,
            }
        })
        .collect();

    CatalogStore::new(categories, products)
}
