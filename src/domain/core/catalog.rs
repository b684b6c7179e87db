use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::Entity;

use super::{
    Amenity, Currency, Money, Rating, Room, RoomCategory, RoomDetails, RoomId, SearchCriteria,
};

/// The fixed in-memory list of room records.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    rooms: Vec<Room>,
}

impl Catalog {
    pub fn new(rooms: Vec<Room>) -> Self {
        Self { rooms }
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn get(&self, id: RoomId) -> Option<&Room> {
        self.rooms.iter().find(|room| room.id() == id)
    }

    pub fn featured(&self) -> Vec<&Room> {
        self.rooms.iter().filter(|room| room.featured()).collect()
    }

    /// Catalog-wide nightly price bounds, used as the default price filter.
    pub fn price_bounds(&self) -> (u64, u64) {
        let amounts = self.rooms.iter().map(|room| room.price().amount());
        let min = amounts.clone().min().unwrap_or(0);
        let max = amounts.max().unwrap_or(0);
        (min, max)
    }

    pub fn search(&self, criteria: &SearchCriteria) -> Vec<&Room> {
        super::filter(&self.rooms, criteria)
    }
}

pub static CATALOG: Lazy<Catalog> = Lazy::new(azure_haven);

fn azure_haven() -> Catalog {
    let usd = |amount| Money::new(amount, Currency::USD);
    let rooms = vec![
        Room::create(
            RoomId::from(1),
            "Ocean View Suite".to_owned(),
            "Luxurious suite with panoramic ocean views, private balcony, and premium amenities."
                .to_owned(),
            usd(450),
            RoomCategory::Suite,
            2,
            Rating::from_tenths(49).expect("seed rating"),
            vec![Amenity::Wifi, Amenity::Breakfast, Amenity::Parking],
            true,
            RoomDetails {
                size_sqm: 65,
                bed_type: "King Size Bed".to_owned(),
                features: vec![
                    "Private balcony with ocean view".to_owned(),
                    "Marble bathroom with rain shower".to_owned(),
                    "Premium linens and bathrobes".to_owned(),
                    "Mini bar with local specialties".to_owned(),
                    "Smart TV with streaming services".to_owned(),
                    "Climate control system".to_owned(),
                ],
            },
        ),
        Room::create(
            RoomId::from(2),
            "Deluxe Room".to_owned(),
            "Spacious room with modern amenities and comfortable furnishings.".to_owned(),
            usd(280),
            RoomCategory::Deluxe,
            2,
            Rating::from_tenths(47).expect("seed rating"),
            vec![Amenity::Wifi, Amenity::Breakfast],
            false,
            RoomDetails {
                size_sqm: 40,
                bed_type: "Queen Size Bed".to_owned(),
                features: vec![
                    "City-facing picture window".to_owned(),
                    "Work desk and reading corner".to_owned(),
                    "Rainfall shower".to_owned(),
                ],
            },
        ),
        Room::create(
            RoomId::from(3),
            "Family Suite".to_owned(),
            "Perfect for families with separate living area and two bedrooms.".to_owned(),
            usd(380),
            RoomCategory::Family,
            4,
            Rating::from_tenths(48).expect("seed rating"),
            vec![Amenity::Wifi, Amenity::Breakfast, Amenity::Parking],
            false,
            RoomDetails {
                size_sqm: 80,
                bed_type: "Two Queen Size Beds".to_owned(),
                features: vec![
                    "Separate living area".to_owned(),
                    "Two bedrooms".to_owned(),
                    "Children's welcome pack".to_owned(),
                ],
            },
        ),
        Room::create(
            RoomId::from(4),
            "Presidential Suite".to_owned(),
            "Ultimate luxury with private butler service and exclusive amenities.".to_owned(),
            usd(850),
            RoomCategory::Suite,
            4,
            Rating::from_tenths(50).expect("seed rating"),
            vec![Amenity::Wifi, Amenity::Breakfast, Amenity::Parking],
            true,
            RoomDetails {
                size_sqm: 120,
                bed_type: "King Size Bed".to_owned(),
                features: vec![
                    "Private butler service".to_owned(),
                    "Panoramic corner terrace".to_owned(),
                    "Dining room for six".to_owned(),
                    "Private whirlpool".to_owned(),
                ],
            },
        ),
        Room::create(
            RoomId::from(5),
            "Sea View Room".to_owned(),
            "Beautiful ocean views with modern comfort and elegant design.".to_owned(),
            usd(320),
            RoomCategory::OceanView,
            2,
            Rating::from_tenths(46).expect("seed rating"),
            vec![Amenity::Wifi, Amenity::Breakfast],
            false,
            RoomDetails {
                size_sqm: 45,
                bed_type: "Queen Size Bed".to_owned(),
                features: vec![
                    "Floor-to-ceiling sea view".to_owned(),
                    "Juliet balcony".to_owned(),
                ],
            },
        ),
        Room::create(
            RoomId::from(6),
            "Executive Suite".to_owned(),
            "Business-friendly suite with work area and premium amenities.".to_owned(),
            usd(420),
            RoomCategory::Suite,
            2,
            Rating::from_tenths(48).expect("seed rating"),
            vec![Amenity::Wifi, Amenity::Breakfast, Amenity::Parking],
            false,
            RoomDetails {
                size_sqm: 55,
                bed_type: "King Size Bed".to_owned(),
                features: vec![
                    "Dedicated work area".to_owned(),
                    "Espresso machine".to_owned(),
                    "Express laundry service".to_owned(),
                ],
            },
        ),
    ];
    Catalog::new(
        rooms
            .into_iter()
            .collect::<Result<_, _>>()
            .expect("seed catalog"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_seeds_six_rooms() {
        assert_eq!(CATALOG.rooms().len(), 6);
    }

    #[test]
    fn test_get_by_id() {
        let room = CATALOG.get(RoomId::from(4)).unwrap();
        assert_eq!(room.name(), "Presidential Suite");
        assert_eq!(room.price(), Money::new(850, Currency::USD));
    }

    #[test]
    fn test_get_unknown_id() {
        assert!(CATALOG.get(RoomId::from(99)).is_none());
    }

    #[test]
    fn test_featured_rooms() {
        let featured: Vec<_> = CATALOG.featured().iter().map(|r| r.name()).collect();
        assert_eq!(featured, ["Ocean View Suite", "Presidential Suite"]);
    }

    #[test]
    fn test_price_bounds() {
        assert_eq!(CATALOG.price_bounds(), (280, 850));
    }
}
