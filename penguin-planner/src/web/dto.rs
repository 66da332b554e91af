//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::dice::DiceRoll;
use crate::domain::{Activity, AvailabilityLevel, AvailabilitySlot, Station};
use crate::feed::{Feed, Post};
use crate::menu::MenuItem;
use crate::profile::{Outfit, ShopItem};
use crate::selection::{ReservationQuote, SelectionConfig};
use crate::trip::{Coordinate, Leg, PlannedActivity, TransportMode, TravelInfo};

/// Request to filter the activity catalog.
#[derive(Debug, Default, Deserialize)]
pub struct ActivityQuery {
    /// Category label (e.g., "outdoor")
    pub category: Option<String>,

    /// Comma-separated tag labels (e.g., "adventure,sports")
    pub tags: Option<String>,

    /// Lowest price, inclusive (defaults to 0)
    pub min_price: Option<f64>,

    /// Highest price, inclusive (defaults to the configured ceiling)
    pub max_price: Option<f64>,
}

/// An activity in listings.
#[derive(Debug, Serialize)]
pub struct ActivityResult {
    pub id: u32,
    pub title: String,
    pub price: f64,

    /// Display price ("Free" or "$28.00")
    pub price_label: String,

    pub rating: f64,

    /// Filled stars out of five
    pub stars: u8,

    pub category: String,
    pub tags: Vec<String>,
    pub description: String,
    pub image: String,
}

impl ActivityResult {
    /// Convert a domain activity.
    pub fn from_activity(activity: &Activity) -> Self {
        Self {
            id: activity.id.0,
            title: activity.title.clone(),
            price: activity.price.amount(),
            price_label: activity.price.to_string(),
            rating: activity.rating.value(),
            stars: activity.rating.filled_stars(),
            category: activity.category.label().to_string(),
            tags: activity.tags.iter().map(|t| t.label().to_string()).collect(),
            description: activity.description.clone(),
            image: activity.image.clone(),
        }
    }
}

/// Response for activity listing.
#[derive(Debug, Serialize)]
pub struct ActivitiesResponse {
    pub activities: Vec<ActivityResult>,
}

/// A station in results.
#[derive(Debug, Serialize)]
pub struct StationResult {
    pub name: String,
    pub line: String,
    pub ordinal: u32,
}

impl StationResult {
    /// Convert a domain station.
    pub fn from_station(station: &Station) -> Self {
        Self {
            name: station.name.clone(),
            line: station.line.to_string(),
            ordinal: station.ordinal,
        }
    }
}

/// Response for the station list.
#[derive(Debug, Serialize)]
pub struct StationsResponse {
    pub stations: Vec<StationResult>,
}

/// Request to ride a fixed number of stops.
#[derive(Debug, Deserialize)]
pub struct ResolveRequest {
    /// Starting station name (defaults to the first station)
    pub from: Option<String>,

    /// Number of stops to ride
    pub stops: u32,
}

/// Request to roll the die.
#[derive(Debug, Deserialize)]
pub struct RollRequest {
    /// Starting station name (defaults to the first station)
    pub from: Option<String>,
}

/// Response for a dice roll or a fixed ride.
#[derive(Debug, Serialize)]
pub struct DiceResponse {
    pub stops: u32,
    pub origin: StationResult,
    pub destination: StationResult,

    /// How long the client should animate the die before revealing (ms)
    pub settle_ms: u64,
}

impl DiceResponse {
    /// Convert a dice roll.
    pub fn from_roll(roll: &DiceRoll, settle_ms: u64) -> Self {
        Self {
            stops: roll.stops,
            origin: StationResult::from_station(&roll.origin),
            destination: StationResult::from_station(&roll.destination),
            settle_ms,
        }
    }
}

/// Request to check availability on a date.
#[derive(Debug, Deserialize)]
pub struct AvailabilityRequest {
    /// Date in YYYY-MM-DD format
    pub date: String,

    /// Party size (defaults to 1)
    pub party: Option<u32>,
}

/// A booking slot in results.
#[derive(Debug, Serialize)]
pub struct SlotResult {
    pub date: String,
    pub total: u32,
    pub remaining: u32,
    pub level: AvailabilityLevel,
}

impl SlotResult {
    /// Convert a domain slot.
    pub fn from_slot(slot: &AvailabilitySlot, limited_below: u32) -> Self {
        Self {
            date: slot.date().to_string(),
            total: slot.total(),
            remaining: slot.remaining(),
            level: slot.level(limited_below),
        }
    }
}

/// Response for an availability check.
#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub date: String,
    pub party: u32,
    pub slot: Option<SlotResult>,
    pub bookable: bool,
}

/// Request to pick a date in the reservation calendar.
#[derive(Debug, Deserialize)]
pub struct SelectDateRequest {
    /// Date in YYYY-MM-DD format
    pub date: String,
}

/// Response for a date pick.
#[derive(Debug, Serialize)]
pub struct SelectDateResponse {
    pub picked: String,
    pub selected: String,

    /// True if the picked date was sold out and the selection moved
    pub redirected: bool,
}

/// Request to quote a reservation.
#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    /// Date in YYYY-MM-DD format
    pub date: String,

    /// Party size
    pub party: u32,
}

/// Response for a reservation quote.
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub activity: String,
    pub date: String,
    #[serde(flatten)]
    pub quote: ReservationQuote,

    /// Display total (e.g., "$84.00")
    pub total_label: String,
}

/// Request to browse the shop.
#[derive(Debug, Deserialize)]
pub struct ShopRequest {
    /// Outfit category (defaults to hats)
    pub category: Option<String>,

    /// The player's point balance (defaults to 0)
    pub points: Option<u32>,
}

/// An item in the shop listing.
#[derive(Debug, Serialize)]
pub struct ShopItemResult {
    pub name: String,
    pub image: String,
    pub category: String,
    pub price: u32,
    pub affordable: bool,
}

impl ShopItemResult {
    /// Convert a shop item.
    pub fn from_item(item: &ShopItem, affordable: bool) -> Self {
        Self {
            name: item.name.clone(),
            image: item.image.clone(),
            category: item.category.label().to_string(),
            price: item.price,
            affordable,
        }
    }
}

/// Response for the shop listing.
#[derive(Debug, Serialize)]
pub struct ShopResponse {
    pub points: u32,
    pub items: Vec<ShopItemResult>,
}

/// Request to buy a shop item.
#[derive(Debug, Deserialize)]
pub struct PurchaseRequest {
    /// Item name
    pub item: String,

    /// The player's point balance
    pub points: u32,
}

/// Response for a purchase.
#[derive(Debug, Serialize)]
pub struct PurchaseResponse {
    pub item: String,
    pub price: u32,

    /// Balance after paying
    pub points: u32,
}

/// Request to view the wardrobe.
#[derive(Debug, Default, Deserialize)]
pub struct WardrobeRequest {
    /// Outfit category (defaults to hats)
    pub category: Option<String>,

    /// Comma-separated names of outfits to put on, in order
    pub wear: Option<String>,
}

/// An outfit in the wardrobe listing.
#[derive(Debug, Serialize)]
pub struct OutfitResult {
    pub name: String,
    pub image: String,
    pub equipped: bool,
}

impl OutfitResult {
    /// Convert an outfit.
    pub fn from_outfit(outfit: &Outfit, equipped: bool) -> Self {
        Self {
            name: outfit.name.clone(),
            image: outfit.image.clone(),
            equipped,
        }
    }
}

/// Response for the wardrobe listing.
#[derive(Debug, Serialize)]
pub struct WardrobeResponse {
    pub category: String,
    pub outfits: Vec<OutfitResult>,
}

/// An entry in the side menu.
#[derive(Debug, Serialize)]
pub struct MenuEntry {
    pub item: MenuItem,
    pub label: &'static str,
    pub icon: &'static str,
    pub opens_sheet: bool,
}

/// Response for the side menu.
#[derive(Debug, Serialize)]
pub struct MenuResponse {
    pub items: Vec<MenuEntry>,
}

/// Request for the home feed.
#[derive(Debug, Default, Deserialize)]
pub struct FeedRequest {
    /// Comma-separated ids of posts the viewer has liked
    pub liked: Option<String>,
}

/// A post on the feed.
#[derive(Debug, Serialize)]
pub struct PostResult {
    pub id: u32,
    pub username: String,
    pub user_image: String,
    pub activity_title: String,
    pub caption: String,
    pub image: String,

    /// Like count including the viewer's own like
    pub likes: u32,

    pub liked: bool,
    pub shares: u32,
    pub rating: f64,
    pub stars: u8,
    pub posted: String,
}

impl PostResult {
    /// Convert a post as seen through `feed`.
    pub fn from_post(post: &Post, feed: &Feed) -> Self {
        Self {
            id: post.id.0,
            username: post.username.clone(),
            user_image: post.user_image.clone(),
            activity_title: post.activity_title.clone(),
            caption: post.caption.clone(),
            image: post.image.clone(),
            likes: feed.displayed_likes(post),
            liked: feed.is_liked(post.id),
            shares: post.shares,
            rating: post.rating.value(),
            stars: post.rating.filled_stars(),
            posted: post.posted.clone(),
        }
    }
}

/// Response for the home feed.
#[derive(Debug, Serialize)]
pub struct FeedResponse {
    pub posts: Vec<PostResult>,
}

/// Request for the itinerary, optionally checking a journey against each leg.
#[derive(Debug, Default, Deserialize)]
pub struct TripRequest {
    /// Transport mode (mrt, bus, walk)
    pub mode: Option<String>,

    /// Journey time between activities (minutes)
    pub travel_minutes: Option<u32>,
}

/// A planned activity in the itinerary.
#[derive(Debug, Serialize)]
pub struct PlannedActivityResult {
    pub name: String,
    pub location: Coordinate,

    /// Start time (HH:MM)
    pub start: String,

    /// End time (HH:MM)
    pub end: String,

    pub duration_minutes: u32,
    pub participants: Vec<String>,
}

impl PlannedActivityResult {
    /// Convert a planned activity.
    pub fn from_planned(activity: &PlannedActivity) -> Self {
        Self {
            name: activity.name.clone(),
            location: activity.location,
            start: activity.start.format("%H:%M").to_string(),
            end: activity.end().format("%H:%M").to_string(),
            duration_minutes: activity.duration_minutes,
            participants: activity.participants.clone(),
        }
    }
}

/// A journey checked against the itinerary.
#[derive(Debug, Serialize)]
pub struct TravelResult {
    pub mode: TransportMode,
    pub icon: &'static str,
    pub minutes: u32,
}

impl TravelResult {
    /// Convert travel info.
    pub fn from_travel(travel: &TravelInfo) -> Self {
        Self {
            mode: travel.mode,
            icon: travel.mode.icon(),
            minutes: travel.duration_minutes,
        }
    }
}

/// The free time between two planned activities.
#[derive(Debug, Serialize)]
pub struct LegResult {
    pub from: usize,
    pub to: usize,

    /// Negative when the activities overlap
    pub gap_minutes: i64,

    /// Whether the requested journey fits, if one was given
    pub fits: Option<bool>,
}

impl LegResult {
    /// Convert a leg, checking `travel` against it.
    pub fn from_leg(leg: &Leg, travel: Option<&TravelInfo>) -> Self {
        Self {
            from: leg.from,
            to: leg.to,
            gap_minutes: leg.gap.num_minutes(),
            fits: travel.map(|t| leg.fits(t)),
        }
    }
}

/// Response for the itinerary.
#[derive(Debug, Serialize)]
pub struct TripResponse {
    pub activities: Vec<PlannedActivityResult>,
    pub collaborators: Vec<String>,
    pub legs: Vec<LegResult>,
    pub travel: Option<TravelResult>,
}

/// Response for the home screen spotlight.
#[derive(Debug, Serialize)]
pub struct SpotlightResponse {
    pub index: usize,
    pub count: usize,

    /// How often the spotlight moves on (ms)
    pub interval_ms: u64,

    pub activity: Option<ActivityResult>,
}

/// Timings and limits the client needs.
#[derive(Debug, Serialize)]
pub struct SettingsResponse {
    /// How long to show the splash screen (ms)
    pub splash_ms: u64,

    /// How often the spotlight moves on (ms)
    pub spotlight_ms: u64,

    /// How long the die tumbles before the destination is shown (ms)
    pub dice_settle_ms: u64,

    pub price_ceiling: f64,
    pub die_faces: u32,
    pub max_party_size: u32,
}

impl SettingsResponse {
    /// Convert the selection configuration.
    pub fn from_config(config: &SelectionConfig) -> Self {
        Self {
            splash_ms: millis(config.splash()),
            spotlight_ms: millis(config.spotlight_interval()),
            dice_settle_ms: millis(config.dice_settle()),
            price_ceiling: config.price_ceiling,
            die_faces: config.die_faces,
            max_party_size: config.max_party_size,
        }
    }
}

fn millis(duration: std::time::Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
