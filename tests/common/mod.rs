//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use webshop_kg::graph::RatingSource;

pub const HEADER: &str = "Item URI,Item Name,Item URL,\
Attribute 1,Value 1,Schema URI 1,\
Attribute 2,Value 2,Schema URI 2,\
Attribute 3,Value 3,Schema URI 3";

pub const ROWS: &[&str] = &[
    "ex:prod001,MX Master 3S,https://www.logitech.com/en-us/products/mice/mx-master-3s.html,Price,99.99,schema:price,Color,Graphite,schema:color,,,",
    "ex:prod002,M185,https://www.logitech.com/en-us/products/mice/m185.html,Price,19.99,schema:price,Color,Grey,schema:color,,,",
    "ex:prod003,G502 X,https://www.logitech.com/en-us/products/mice/g502-x.html?sku=1,Price,129.99,schema:price,Color,Black,schema:color,,,",
    "ex:prod004,Pebble 2,https://www.logitech.com/en-us/products/mice/pebble-2.html,Price,29.99,schema:price,Color,Rose,schema:color,,,",
    "ex:prod005,K120,https://www.logitech.com/en-us/products/keyboards/k120.html,Price,24.99,schema:price,Color,Black,schema:color,,,",
    "ex:prod006,\"MK270 Wireless Combo, US\",https://www.logitech.com/en-us/products/combos/mk270.html,Price,39.99,schema:price,Color,,schema:color,,,",
    "ex:prod007,Z407,https://www.logitech.com/en-us/products/speakers/z407.html,Price,79.99,schema:price,,,,,,",
    "ex:prod008,C920,https://www.logitech.com/en-us/products/webcams/c920.html,Price,69.99,schema:price,Release date,2023-09-14,schema:releaseDate,,,",
    "ex:prod009,Rally Bar,https://www.logitech.com/en-us/products/video-conferencing/rally-bar.html,Price,4999.00,schema:price,,,,,,",
    "ex:prod010,G733 Headset,https://www.logitech.com/en-us/products/headsets/g733.html,Price,59.00,schema:price,,,,Weight,42,schema:weight",
    "ex:prod011,M650 L,https://www.logitech.com/en-us/products/mice/m650-l.html,Price,100.00,schema:price,Color,Off-white,schema:color,,,",
    "ex:prod012,Lift,https://www.logitech.com/en-us/products/mice/lift.html,Price,49.99,schema:price,Color,Pale Grey,schema:color,,,",
];

/// Ratings handed out in row order.
pub const RATINGS: &[f64] = &[4.5, 3.8, 4.9, 4.2, 4.1, 4.4, 4.0, 4.7, 3.6, 4.3, 4.6, 4.0];

/// Seed ontology (21) + category nodes (7 × 2) + item statements (11 × 7 + 6)
/// + attribute statements (21).
pub const EXPECTED_TRIPLES: usize = 139;

/// Attribute statements asserted for the fixture.
pub const EXPECTED_ATTRIBUTES: usize = 21;

pub fn catalog_csv() -> String {
    let mut csv = String::from(HEADER);
    for row in ROWS {
        csv.push('\n');
        csv.push_str(row);
    }
    csv.push('\n');
    csv
}

/// Replays a fixed list of ratings, cycling when exhausted.
pub struct ScriptedRatings {
    values: Vec<f64>,
    next: usize,
}

impl ScriptedRatings {
    pub fn new(values: &[f64]) -> Self {
        Self {
            values: values.to_vec(),
            next: 0,
        }
    }

    pub fn fixture() -> Self {
        Self::new(RATINGS)
    }
}

impl RatingSource for ScriptedRatings {
    fn next_rating(&mut self) -> f64 {
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}
