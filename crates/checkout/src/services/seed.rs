//! Static catalog served by the mock backend.

use rust_decimal::Decimal;

use quickcart_core::{CartItem, CartItemId, City, CityId, DeliveryOptions};

/// The demo cart: three items totalling $2627.50.
#[must_use]
pub fn cart_items() -> Vec<CartItem> {
    vec![
        item(1, "Wireless Headphones", "SoundMax", 12_900, "headphones"),
        item(2, "Smartphone X12", "TechNova", 89_900, "smartphone"),
        item(3, "Gaming Laptop Pro", "HyperTech", 159_950, "laptop"),
    ]
}

/// Delivery cities with their per-tier surcharges.
#[must_use]
pub fn cities() -> Vec<City> {
    vec![
        city(1, "New York", Some(40), Some(20), Some(0)),
        city(2, "Los Angeles", None, Some(25), Some(5)),
        city(3, "Chicago", Some(35), None, Some(0)),
        city(4, "Houston", Some(50), Some(30), None),
        city(5, "Miami", None, Some(22), Some(10)),
        city(6, "San Francisco", Some(45), None, None),
        city(7, "Boston", Some(38), Some(18), Some(0)),
        city(8, "Seattle", None, Some(28), Some(0)),
        city(9, "Denver", Some(42), Some(21), Some(0)),
        city(10, "Atlanta", Some(36), None, Some(30)),
    ]
}

fn item(id: i32, name: &str, manufacturer: &str, cents: i64, image_seed: &str) -> CartItem {
    CartItem {
        id: CartItemId::new(id),
        name: name.to_string(),
        manufacturer: manufacturer.to_string(),
        price: Decimal::new(cents, 2),
        image_url: format!("https://picsum.photos/seed/{image_seed}/300/200"),
    }
}

fn city(id: i32, name: &str, fast: Option<i64>, regular: Option<i64>, slow: Option<i64>) -> City {
    City {
        id: CityId::new(id),
        name: name.to_string(),
        delivery: DeliveryOptions {
            fast: fast.map(Decimal::from),
            regular: regular.map(Decimal::from),
            slow: slow.map(Decimal::from),
        },
    }
}
