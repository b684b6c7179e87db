use axum::extract::State;
use axum::Json;
use serde::Serialize;

use haven::domain::core::Room;

use super::AppState;

#[derive(Debug, Serialize)]
pub struct HomePage {
    headline: &'static str,
    tagline: &'static str,
    featured_rooms: Vec<Room>,
    facilities: Vec<Facility>,
    testimonials: Vec<Testimonial>,
}

#[derive(Debug, Serialize)]
pub struct Facility {
    title: &'static str,
    description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Testimonial {
    name: &'static str,
    location: &'static str,
    rating: u8,
    text: &'static str,
}

/// `GET /`
pub async fn home(State(state): State<AppState>) -> Json<HomePage> {
    Json(HomePage {
        headline: "Azure Haven Hotel",
        tagline: "Discover luxury and comfort in every room",
        featured_rooms: state.catalog.featured().into_iter().cloned().collect(),
        facilities: vec![
            Facility {
                title: "Infinity Pool",
                description: "Stunning ocean-view infinity pool with poolside bar",
            },
            Facility {
                title: "Fine Dining",
                description: "Award-winning restaurant with world-class cuisine",
            },
            Facility {
                title: "Spa & Wellness",
                description: "Luxurious spa treatments and wellness programs",
            },
            Facility {
                title: "Fitness Center",
                description: "State-of-the-art gym with personal trainers",
            },
        ],
        testimonials: vec![
            Testimonial {
                name: "Sarah Johnson",
                location: "New York, USA",
                rating: 5,
                text: "Absolutely breathtaking! The ocean view from our suite was incredible. \
                       The service was impeccable and the staff went above and beyond to make \
                       our stay memorable.",
            },
            Testimonial {
                name: "Michael Chen",
                location: "London, UK",
                rating: 5,
                text: "The perfect luxury getaway. The spa treatments were divine and the \
                       restaurant served the most delicious meals. Can't wait to come back!",
            },
            Testimonial {
                name: "Emma Rodriguez",
                location: "Barcelona, Spain",
                rating: 5,
                text: "Azure Haven exceeded all our expectations. The attention to detail and \
                       personalized service made our anniversary celebration truly special.",
            },
        ],
    })
}

#[derive(Debug, Serialize)]
pub struct AboutPage {
    values: Vec<CompanyValue>,
    team: Vec<TeamMember>,
}

#[derive(Debug, Serialize)]
pub struct CompanyValue {
    title: &'static str,
    description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct TeamMember {
    name: &'static str,
    position: &'static str,
    description: &'static str,
}

/// `GET /about`
pub async fn about() -> Json<AboutPage> {
    Json(AboutPage {
        values: vec![
            CompanyValue {
                title: "Excellence",
                description: "We strive for perfection in every detail, ensuring our guests \
                              receive the highest quality service.",
            },
            CompanyValue {
                title: "Hospitality",
                description: "Genuine care and attention to our guests' needs, creating \
                              memorable experiences that last a lifetime.",
            },
            CompanyValue {
                title: "Innovation",
                description: "Continuously improving our services and amenities to exceed \
                              expectations and set new standards.",
            },
            CompanyValue {
                title: "Luxury",
                description: "Providing an unparalleled level of comfort, elegance, and \
                              sophistication in every aspect of our service.",
            },
        ],
        team: vec![
            TeamMember {
                name: "Sarah Mitchell",
                position: "General Manager",
                description: "With over 15 years in luxury hospitality, Sarah ensures every \
                              guest receives exceptional service.",
            },
            TeamMember {
                name: "James Rodriguez",
                position: "Head Chef",
                description: "Award-winning chef with a passion for creating unforgettable \
                              culinary experiences.",
            },
            TeamMember {
                name: "Emma Thompson",
                position: "Spa Director",
                description: "Wellness expert dedicated to providing rejuvenating spa \
                              treatments and relaxation.",
            },
            TeamMember {
                name: "Michael Chen",
                position: "Concierge Manager",
                description: "Local expert who knows all the best spots and can arrange any \
                              experience you desire.",
            },
        ],
    })
}

#[cfg(test)]
mod tests {
    use haven::domain::core::CATALOG;

    use super::*;

    #[tokio::test]
    async fn test_home_features_only_flagged_rooms() {
        let Json(page) = home(State(AppState { catalog: &CATALOG })).await;
        assert_eq!(page.featured_rooms.len(), 2);
        assert!(page.featured_rooms.iter().all(|room| room.featured()));
    }

    #[tokio::test]
    async fn test_about_lists_values_and_team() {
        let Json(page) = about().await;
        assert_eq!(page.values.len(), 4);
        assert_eq!(page.team.len(), 4);
    }
}
