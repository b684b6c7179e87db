use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};

use super::{ParseCategoryError, Room, RoomCategory};

/// Combined text, category and price filter state for room search.
///
/// Criteria are transient; they live only for the duration of a page view
/// and never touch the catalog they are applied to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    query: String,
    category: CategoryFilter,
    min_price: u64,
    max_price: u64,
}

impl SearchCriteria {
    pub fn new(query: String, category: CategoryFilter, min_price: u64, max_price: u64) -> Self {
        Self {
            query,
            category,
            min_price,
            max_price,
        }
    }

    pub fn matches(&self, room: &Room) -> bool {
        self.matches_query(room) && self.matches_category(room) && self.matches_price(room)
    }

    fn matches_query(&self, room: &Room) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let query = self.query.to_lowercase();
        room.name().to_lowercase().contains(&query)
            || room.description().to_lowercase().contains(&query)
    }

    fn matches_category(&self, room: &Room) -> bool {
        match self.category {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => room.category() == category,
        }
    }

    fn matches_price(&self, room: &Room) -> bool {
        (self.min_price..=self.max_price).contains(&room.price().amount())
    }
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: CategoryFilter::All,
            min_price: 0,
            max_price: u64::MAX,
        }
    }
}

/// Category selector; `all` disables category filtering.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, SerializeDisplay, DeserializeFromStr)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(RoomCategory),
}

impl FromStr for CategoryFilter {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(CategoryFilter::All),
            tag => Ok(CategoryFilter::Only(tag.parse()?)),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Only(category) => f.write_str(category.tag()),
        }
    }
}

/// Keeps every room for which all three predicates hold, in catalog order.
pub fn filter<'a>(rooms: &'a [Room], criteria: &SearchCriteria) -> Vec<&'a Room> {
    rooms.iter().filter(|room| criteria.matches(room)).collect()
}

#[cfg(test)]
mod tests {
    use super::super::CATALOG;
    use super::*;

    fn names(rooms: &[&Room]) -> Vec<String> {
        rooms.iter().map(|room| room.name().to_owned()).collect()
    }

    #[test]
    fn test_default_criteria_return_whole_catalog_in_order() {
        let found = filter(CATALOG.rooms(), &SearchCriteria::default());
        assert_eq!(found.len(), CATALOG.rooms().len());
        let all: Vec<_> = CATALOG.rooms().iter().collect();
        assert_eq!(names(&found), names(&all));
    }

    #[test]
    fn test_query_is_case_insensitive_over_name_and_description() {
        let criteria = SearchCriteria::new("OCEAN".to_owned(), CategoryFilter::All, 0, u64::MAX);
        let found = filter(CATALOG.rooms(), &criteria);
        // "Ocean View Suite" by name, "Sea View Room" by description.
        assert_eq!(names(&found), ["Ocean View Suite", "Sea View Room"]);
    }

    #[test]
    fn test_category_narrows_to_exact_tag() {
        let criteria = SearchCriteria::new(
            String::new(),
            CategoryFilter::Only(RoomCategory::Suite),
            0,
            u64::MAX,
        );
        let found = filter(CATALOG.rooms(), &criteria);
        assert_eq!(
            names(&found),
            ["Ocean View Suite", "Presidential Suite", "Executive Suite"]
        );
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let criteria = SearchCriteria::new(String::new(), CategoryFilter::All, 280, 320);
        let found = filter(CATALOG.rooms(), &criteria);
        assert_eq!(names(&found), ["Deluxe Room", "Sea View Room"]);
    }

    #[test]
    fn test_excluding_bounds_never_include_a_room() {
        for room in CATALOG.rooms() {
            let below = SearchCriteria::new(
                String::new(),
                CategoryFilter::All,
                0,
                room.price().amount() - 1,
            );
            assert!(!filter(CATALOG.rooms(), &below).contains(&room));
            let above = SearchCriteria::new(
                String::new(),
                CategoryFilter::All,
                room.price().amount() + 1,
                u64::MAX,
            );
            assert!(!filter(CATALOG.rooms(), &above).contains(&room));
        }
    }

    #[test]
    fn test_filter_is_idempotent() {
        let criteria = SearchCriteria::new("suite".to_owned(), CategoryFilter::All, 300, 900);
        let first: Vec<Room> = filter(CATALOG.rooms(), &criteria)
            .into_iter()
            .cloned()
            .collect();
        let second = filter(&first, &criteria);
        assert_eq!(first.iter().collect::<Vec<_>>(), second);
    }

    #[test]
    fn test_filter_does_not_mutate_the_catalog() {
        let before = CATALOG.rooms().to_vec();
        let criteria = SearchCriteria::new("no such room".to_owned(), CategoryFilter::All, 0, 1);
        assert!(filter(CATALOG.rooms(), &criteria).is_empty());
        assert_eq!(CATALOG.rooms(), before);
    }

    #[test]
    fn test_category_filter_round_trip() {
        assert_eq!("all".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!(
            "family".parse::<CategoryFilter>(),
            Ok(CategoryFilter::Only(RoomCategory::Family))
        );
        assert!("castle".parse::<CategoryFilter>().is_err());
    }
}
