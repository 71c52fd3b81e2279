//! Static reference data: outlets, the product catalog, and the user directory
//!
//! Seeded once at startup and immutable for the process lifetime. Brand
//! partition order follows catalog declaration order and is the row skeleton
//! of both the entry form and the pivot report.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;

use shared::models::{group_by_brand, BrandGroup, Outlet, Product, StockEntry, User, UserRole};
use shared::validation::normalize_email;

/// Immutable reference catalogs
#[derive(Debug, Clone)]
pub struct Catalog {
    outlets: Vec<Outlet>,
    products: Vec<Product>,
    users: Vec<User>,
}

fn outlet(id: &str, name: &str, location: &str) -> Outlet {
    Outlet {
        id: id.to_string(),
        name: name.to_string(),
        location: location.to_string(),
    }
}

fn product(id: &str, brand: &str, name: &str, mrp: i64) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        brand: brand.to_string(),
        mrp: Decimal::from(mrp),
    }
}

impl Catalog {
    /// Build the seeded reference data
    pub fn seed() -> Self {
        let outlets = vec![
            outlet("ot-1", "Downtown Central", "123 Main St"),
            outlet("ot-2", "Uptown Plaza", "456 North Ave"),
            outlet("ot-3", "East Side Hub", "789 East Blvd"),
        ];

        let products = vec![
            // Parle Agro
            product("p1", "Parle Agro", "Frooti Bottle 20", 20),
            product("p2", "Parle Agro", "Appy fizz", 20),
            product("p3", "Parle Agro", "B Fizz", 20),
            product("p4", "Parle Agro", "Parle Smoodh Toffee Caramel", 20),
            product("p5", "Parle Agro", "Parle Agro Smoodh Chocolate Mil", 20),
            product("p6", "Parle Agro", "Smoodh choco hasel nut", 20),
            product("p7", "Parle Agro", "Smoodh Lassi", 20),
            // PepsiCo
            product("p8", "PepsiCo- Beverages", "Pepsi Pet bottle", 20),
            product("p9", "PepsiCo- Beverages", "Tropicana", 20),
            product("p10", "PepsiCo- Beverages", "Mountain Dew Can", 60),
            product("p11", "PepsiCo- Beverages", "7uP", 20),
            // Cadbury
            product("p12", "Cadbury", "Perk (Rs 20)", 20),
            product("p13", "Cadbury", "Cadbury Fuse", 50),
            product("p14", "Cadbury", "Crispello Chocolate", 45),
            product("p15", "Cadbury", "Five star oreo", 50),
            product("p16", "Cadbury", "Oreo Biscuit", 30),
            // Britannia
            product("p17", "Britannia", "Good Day Cashew", 25),
            product("p18", "Britannia", "Good Day Choco", 30),
            product("p19", "Britannia", "Cake Gobbles 15", 15),
            product("p20", "Britannia", "Swiss Roll", 10),
        ];

        let users = vec![
            User {
                id: "u-1".to_string(),
                name: "Admin User".to_string(),
                email: "admin@system.com".to_string(),
                role: UserRole::Admin,
                outlet_id: None,
            },
            User {
                id: "u-2".to_string(),
                name: "John Refiller".to_string(),
                email: "john@system.com".to_string(),
                role: UserRole::Refiller,
                outlet_id: Some("ot-1".to_string()),
            },
        ];

        Self {
            outlets,
            products,
            users,
        }
    }

    pub fn outlets(&self) -> &[Outlet] {
        &self.outlets
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn outlet(&self, id: &str) -> Option<&Outlet> {
        self.outlets.iter().find(|o| o.id == id)
    }

    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Case-insensitive directory lookup used by sign-in
    pub fn user_by_email(&self, email: &str) -> Option<&User> {
        let needle = normalize_email(email);
        self.users
            .iter()
            .find(|u| normalize_email(&u.email) == needle)
    }

    /// Products partitioned into brand buckets, declaration order throughout
    pub fn products_by_brand(&self) -> Vec<BrandGroup> {
        group_by_brand(&self.products)
    }
}

/// Stock entries present before any submission
pub fn initial_stock_entries() -> Vec<StockEntry> {
    let seeded_at = Utc::now();
    let seed = |id: &str, product_id: &str, quantity: i64, amount: Decimal, date: NaiveDate| StockEntry {
        id: id.to_string(),
        outlet_id: "ot-1".to_string(),
        product_id: product_id.to_string(),
        quantity: Decimal::from(quantity),
        amount,
        entry_date: date,
        entered_by: "u-2".to_string(),
        created_at: seeded_at,
    };

    vec![
        seed(
            "s-init-1",
            "p1",
            120,
            Decimal::new(1_920_58, 2),
            NaiveDate::from_ymd_opt(2025, 6, 30).expect("valid seed date"),
        ),
        seed(
            "s-init-2",
            "p2",
            120,
            Decimal::new(1_920_24, 2),
            NaiveDate::from_ymd_opt(2025, 6, 30).expect("valid seed date"),
        ),
        seed(
            "s-init-3",
            "p8",
            120,
            Decimal::new(2_040_16, 2),
            NaiveDate::from_ymd_opt(2025, 6, 26).expect("valid seed date"),
        ),
    ]
}
