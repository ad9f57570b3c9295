use serde::Serialize;

pub const BRAND: &str = "Flavor Factory";

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Location {
    pub city: &'static str,
    pub country: &'static str,
}

pub static LOCATIONS: [Location; 3] = [
    Location { city: "Lubumbashi", country: "DR Congo" },
    Location { city: "Johannesburg", country: "South Africa" },
    Location { city: "Ottawa", country: "Canada" },
];

/// Body of `GET /locations`.
#[derive(Debug, Serialize)]
pub struct Locations {
    pub brand: &'static str,
    pub cities: &'static [Location],
}

impl Locations {
    pub fn all() -> Self {
        Self {
            brand: BRAND,
            cities: &LOCATIONS,
        }
    }
}
