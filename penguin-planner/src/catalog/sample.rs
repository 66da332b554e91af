//! Built-in sample catalog.

use chrono::{Duration, NaiveDateTime};

use crate::domain::{
    Activity, ActivityCategory, ActivityId, ActivityTag, AvailabilitySlot, Price, Rating, Station,
};

use super::{Catalog, StationLineBuilder};

/// Singapore attractions offered in the activities browser.
pub fn sample_activities() -> Vec<Activity> {
    use ActivityCategory::*;
    use ActivityTag::*;

    let rows: [(&str, f64, f64, ActivityCategory, &[ActivityTag], &str, &str); 6] = [
        (
            "Universal Studios",
            88.0,
            4.8,
            Outdoor,
            &[Entertainment, Adventure],
            "Experience thrilling rides and shows at Southeast Asia's first Hollywood movie theme park.",
            "universal-studios-sg",
        ),
        (
            "Gardens by the Bay",
            28.0,
            4.7,
            Outdoor,
            &[Entertainment],
            "Visit the iconic Supertree Grove and explore the stunning indoor gardens.",
            "gardens-bay-sg",
        ),
        (
            "ArtScience Museum",
            21.0,
            4.5,
            Indoor,
            &[Entertainment],
            "Immerse yourself in digital art installations and interactive exhibits.",
            "artscience-museum-sg",
        ),
        (
            "Singapore Zoo",
            48.0,
            4.6,
            Outdoor,
            &[Entertainment, Adventure],
            "Get up close with wildlife in an open, natural setting.",
            "singapore-zoo-sg",
        ),
        (
            "Indoor Skydiving",
            89.0,
            4.7,
            Indoor,
            &[Adventure, Sports],
            "Experience the thrill of flying in a safe indoor environment.",
            "indoor-skydiving-sg",
        ),
        (
            "Jewel Changi",
            0.0,
            4.9,
            Indoor,
            &[Entertainment, Dining],
            "Visit the world's tallest indoor waterfall and explore the nature-themed mall.",
            "jewel-changi-sg",
        ),
    ];

    rows.into_iter()
        .zip(1..)
        .map(|((title, price, rating, category, tags, description, image), id)| {
            let price = Price::new(price).expect("sample prices are valid");
            let rating = Rating::new(rating).expect("sample ratings are valid");
            Activity::new(ActivityId(id), title, price, rating, category, tags.iter().copied())
                .with_description(description)
                .with_image(image)
        })
        .collect()
}

/// The western stretch of the North-South line, Jurong East to Woodlands.
pub fn ns_line() -> Vec<Station> {
    StationLineBuilder::new()
        .add("Jurong East", "NS/EW", 1)
        .add("Bukit Batok", "NS", 2)
        .add("Bukit Gombak", "NS", 3)
        .add("Choa Chu Kang", "NS", 4)
        .add("Yew Tee", "NS", 5)
        .add("Kranji", "NS", 6)
        .add("Marsiling", "NS", 7)
        .add("Woodlands", "NS", 8)
        .build()
        .expect("sample station line is valid")
}

/// Booking slots for the next three days, relative to `now`.
///
/// The day after tomorrow is sold out.
pub fn sample_availability(now: NaiveDateTime) -> Vec<AvailabilitySlot> {
    [(1, 20, 5), (2, 20, 0), (3, 20, 15)]
        .into_iter()
        .map(|(days, total, remaining)| {
            AvailabilitySlot::new(now + Duration::days(days), total, remaining)
                .expect("sample slots fit their capacity")
        })
        .collect()
}

impl Catalog {
    /// The built-in sample catalog, with availability relative to `now`.
    pub fn sample(now: NaiveDateTime) -> Self {
        Self {
            activities: sample_activities(),
            stations: ns_line(),
            slots: sample_availability(now),
        }
    }
}
