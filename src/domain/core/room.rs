use std::fmt;
use std::str::FromStr;

use derive_more::{Deref, Display, Error, From};
use serde::{Deserialize, Serialize};

use crate::domain::{Entity, Id};

use super::Money;

/// Room ID
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Display, From, Deref, Default,
)]
pub struct RoomId(u64);

impl Id for RoomId {
    type Inner = u64;
}

/// Category tag offered by the room search select.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomCategory {
    Suite,
    Deluxe,
    Family,
    #[serde(rename = "ocean")]
    OceanView,
}

impl RoomCategory {
    pub fn tag(&self) -> &'static str {
        match self {
            RoomCategory::Suite => "suite",
            RoomCategory::Deluxe => "deluxe",
            RoomCategory::Family => "family",
            RoomCategory::OceanView => "ocean",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RoomCategory::Suite => "Suites",
            RoomCategory::Deluxe => "Deluxe",
            RoomCategory::Family => "Family",
            RoomCategory::OceanView => "Ocean View",
        }
    }
}

impl FromStr for RoomCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "suite" => Ok(RoomCategory::Suite),
            "deluxe" => Ok(RoomCategory::Deluxe),
            "family" => Ok(RoomCategory::Family),
            "ocean" => Ok(RoomCategory::OceanView),
            _ => Err(ParseCategoryError),
        }
    }
}

impl fmt::Display for RoomCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Error, Display, Debug, PartialEq, Eq)]
#[display(fmt = "Unknown room category")]
pub struct ParseCategoryError;

/// Guest rating in tenths of a star (49 is displayed as 4.9).
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Rating(u8);

impl Rating {
    pub const MAX: Rating = Rating(50);

    pub fn from_tenths(tenths: u8) -> Result<Self, RoomError> {
        if tenths > Self::MAX.0 {
            return Err(RoomError::RatingOutOfRange);
        }
        Ok(Self(tenths))
    }

    pub fn tenths(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Amenity {
    Wifi,
    Breakfast,
    Parking,
}

/// Extra detail shown only on the room detail page.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RoomDetails {
    pub size_sqm: u16,
    pub bed_type: String,
    pub features: Vec<String>,
}

/// Room record, immutable once created.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    id: RoomId,
    name: String,
    description: String,
    price: Money,
    category: RoomCategory,
    max_guests: u8,
    rating: Rating,
    amenities: Vec<Amenity>,
    featured: bool,
    details: RoomDetails,
}

impl Room {
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        id: RoomId,
        name: String,
        description: String,
        price: Money,
        category: RoomCategory,
        max_guests: u8,
        rating: Rating,
        amenities: Vec<Amenity>,
        featured: bool,
        details: RoomDetails,
    ) -> Result<Self, RoomError> {
        Self::validate_created(&name, &price, max_guests)?;
        Ok(Room {
            id,
            name,
            description,
            price,
            category,
            max_guests,
            rating,
            amenities,
            featured,
            details,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn category(&self) -> RoomCategory {
        self.category
    }

    pub fn max_guests(&self) -> u8 {
        self.max_guests
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn amenities(&self) -> &[Amenity] {
        &self.amenities
    }

    pub fn featured(&self) -> bool {
        self.featured
    }

    pub fn details(&self) -> &RoomDetails {
        &self.details
    }

    fn validate_created(name: &str, price: &Money, max_guests: u8) -> Result<(), RoomError> {
        Self::validate_name(name)?;
        Self::validate_price(price)?;
        Self::validate_max_guests(max_guests)?;
        Ok(())
    }

    fn validate_name(name: &str) -> Result<(), RoomError> {
        match name.trim().is_empty() {
            true => Err(RoomError::NameIsBlank),
            false => Ok(()),
        }
    }

    fn validate_price(price: &Money) -> Result<(), RoomError> {
        match price.amount() {
            0 => Err(RoomError::PriceIsNotPositive),
            _ => Ok(()),
        }
    }

    fn validate_max_guests(max_guests: u8) -> Result<(), RoomError> {
        match max_guests {
            0 => Err(RoomError::NoGuestCapacity),
            _ => Ok(()),
        }
    }
}

impl Entity for Room {
    type Id = RoomId;

    const ENTITY_NAME: &'static str = "room";

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Room error
#[derive(Error, Display, Debug, PartialEq, Eq)]
pub enum RoomError {
    /// The name is blank
    #[display(fmt = "Name cannot be blank")]
    NameIsBlank,
    /// The nightly price is zero
    #[display(fmt = "Nightly price must be positive")]
    PriceIsNotPositive,
    /// The room sleeps nobody
    #[display(fmt = "A room must sleep at least one guest")]
    NoGuestCapacity,
    /// The rating exceeds five stars
    #[display(fmt = "Rating cannot exceed 5.0")]
    RatingOutOfRange,
}

#[cfg(test)]
mod tests {
    use super::super::Currency;
    use super::*;

    fn sample() -> Result<Room, RoomError> {
        Room::create(
            RoomId::from(7),
            "Garden Room".to_owned(),
            "Quiet room facing the courtyard garden.".to_owned(),
            Money::new(190, Currency::USD),
            RoomCategory::Deluxe,
            2,
            Rating::from_tenths(44)?,
            vec![Amenity::Wifi],
            false,
            RoomDetails::default(),
        )
    }

    #[test]
    fn test_room_create() {
        let room = sample().unwrap();
        assert_eq!(room.id(), RoomId::from(7));
        assert_eq!(room.category().label(), "Deluxe");
        assert_eq!(format!("{}", room.rating()), "4.4");
    }

    #[test]
    fn test_room_rejects_blank_name() {
        let room = Room::create(
            RoomId::from(8),
            "  ".to_owned(),
            String::new(),
            Money::new(100, Currency::USD),
            RoomCategory::Suite,
            2,
            Rating::default(),
            Vec::new(),
            false,
            RoomDetails::default(),
        );
        assert_eq!(room.unwrap_err(), RoomError::NameIsBlank);
    }

    #[test]
    fn test_room_rejects_zero_price() {
        let room = Room::create(
            RoomId::from(9),
            "Broom Closet".to_owned(),
            String::new(),
            Money::new(0, Currency::USD),
            RoomCategory::Deluxe,
            1,
            Rating::default(),
            Vec::new(),
            false,
            RoomDetails::default(),
        );
        assert_eq!(room.unwrap_err(), RoomError::PriceIsNotPositive);
    }

    #[test]
    fn test_rating_bounds() {
        assert!(Rating::from_tenths(50).is_ok());
        assert_eq!(Rating::from_tenths(51), Err(RoomError::RatingOutOfRange));
    }

    #[test]
    fn test_category_round_trip() {
        assert_eq!("ocean".parse::<RoomCategory>(), Ok(RoomCategory::OceanView));
        assert_eq!(RoomCategory::OceanView.to_string(), "ocean");
        assert!("penthouse".parse::<RoomCategory>().is_err());
    }
}
