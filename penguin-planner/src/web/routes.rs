//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tracing::warn;

use crate::dice::DicePlanner;
use crate::domain::{ActivityCategory, ActivityId, ActivityTag, Station};
use crate::feed::{Feed, PostId};
use crate::menu::MenuItem;
use crate::profile::{OutfitCategory, Wardrobe, affordable_in};
use crate::selection::{
    FilterCriteria, PriceRange, filter_activities, find_availability, is_bookable, quote,
    select_date,
};
use crate::trip::{TransportMode, TravelInfo};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/activities", get(list_activities))
        .route("/activities/:id/quote", get(quote_activity))
        .route("/stations", get(list_stations))
        .route("/dice/resolve", get(resolve_stops))
        .route("/dice/roll", get(roll_dice))
        .route("/availability", get(check_availability))
        .route("/availability/select", get(pick_date))
        .route("/shop", get(browse_shop))
        .route("/shop/purchase", get(purchase))
        .route("/wardrobe", get(wardrobe))
        .route("/menu", get(menu))
        .route("/feed", get(feed))
        .route("/trip", get(trip))
        .route("/spotlight", get(spotlight))
        .route("/settings", get(settings))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List activities matching the query's filters.
async fn list_activities(
    State(state): State<AppState>,
    Query(req): Query<ActivityQuery>,
) -> Result<Json<ActivitiesResponse>, AppError> {
    let criteria = criteria_from_query(&req, state.config.price_ceiling)?;

    let activities = filter_activities(state.catalog.activities(), &criteria)
        .into_iter()
        .map(ActivityResult::from_activity)
        .collect();

    Ok(Json(ActivitiesResponse { activities }))
}

/// Build filter criteria from query parameters.
fn criteria_from_query(req: &ActivityQuery, price_ceiling: f64) -> Result<FilterCriteria, AppError> {
    let bound = |name: &str, value: Option<f64>, default: f64| match value {
        Some(v) if !v.is_finite() => Err(AppError::BadRequest {
            message: format!("{name} must be a finite number"),
        }),
        Some(v) => Ok(v),
        None => Ok(default),
    };
    let lower = bound("min_price", req.min_price, 0.0)?;
    let upper = bound("max_price", req.max_price, price_ceiling)?;
    let mut criteria = FilterCriteria::any().priced(PriceRange::new(lower, upper));

    if let Some(category) = req.category.as_deref().filter(|c| !c.is_empty()) {
        let category: ActivityCategory = category.parse().map_err(|e| AppError::BadRequest {
            message: format!("{e}"),
        })?;
        criteria = criteria.in_category(category);
    }

    if let Some(tags) = &req.tags {
        let tags = tags
            .split(',')
            .filter(|t| !t.trim().is_empty())
            .map(|t| t.parse::<ActivityTag>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| AppError::BadRequest {
                message: format!("{e}"),
            })?;
        criteria = criteria.with_tags(tags);
    }

    Ok(criteria)
}

/// List the stations the dice planner rides along.
async fn list_stations(State(state): State<AppState>) -> Json<StationsResponse> {
    let stations = state
        .catalog
        .stations()
        .iter()
        .map(StationResult::from_station)
        .collect();
    Json(StationsResponse { stations })
}

/// Find the starting station: the named one, or the line's first.
fn origin<'a>(state: &'a AppState, from: Option<&str>) -> Result<&'a Station, AppError> {
    match from.filter(|f| !f.is_empty()) {
        Some(name) => state
            .catalog
            .station_named(name)
            .ok_or_else(|| AppError::NotFound {
                message: format!("Unknown station: {name}"),
            }),
        None => state.catalog.origin().ok_or_else(|| AppError::NotFound {
            message: "No stations in catalog".to_string(),
        }),
    }
}

fn planner<'a>(state: &'a AppState, from: Option<&str>) -> Result<DicePlanner<'a>, AppError> {
    let origin = origin(state, from)?;
    let planner = DicePlanner::new(state.catalog.stations(), state.config.die_faces).ok_or_else(
        || AppError::NotFound {
            message: "No stations in catalog".to_string(),
        },
    )?;
    Ok(planner.from_station(origin))
}

/// Ride a fixed number of stops.
async fn resolve_stops(
    State(state): State<AppState>,
    Query(req): Query<ResolveRequest>,
) -> Result<Json<DiceResponse>, AppError> {
    let roll = planner(&state, req.from.as_deref())?.take(req.stops);
    Ok(Json(DiceResponse::from_roll(&roll, 0)))
}

/// Roll the die and ride that many stops.
async fn roll_dice(
    State(state): State<AppState>,
    Query(req): Query<RollRequest>,
) -> Result<Json<DiceResponse>, AppError> {
    let roll = planner(&state, req.from.as_deref())?.roll(&mut rand::thread_rng());
    Ok(Json(DiceResponse::from_roll(&roll, state.config.dice_settle_ms)))
}

/// Parse a YYYY-MM-DD date as midnight on that day.
fn parse_date(s: &str) -> Result<NaiveDateTime, AppError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map(|d| d.and_time(NaiveTime::MIN))
        .map_err(|_| AppError::BadRequest {
            message: format!("Invalid date (expected YYYY-MM-DD): {s}"),
        })
}

fn check_party(state: &AppState, party: u32) -> Result<u32, AppError> {
    if !state.config.accepts_party(party) {
        return Err(AppError::BadRequest {
            message: format!(
                "Party size must be between 1 and {}",
                state.config.max_party_size
            ),
        });
    }
    Ok(party)
}

/// Check whether a date can take a party.
async fn check_availability(
    State(state): State<AppState>,
    Query(req): Query<AvailabilityRequest>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    let at = parse_date(&req.date)?;
    let party = check_party(&state, req.party.unwrap_or(1))?;

    let slot = find_availability(state.catalog.slots(), at);

    Ok(Json(AvailabilityResponse {
        date: at.date().to_string(),
        party,
        slot: slot.map(|s| SlotResult::from_slot(s, state.config.limited_below)),
        bookable: is_bookable(slot, party),
    }))
}

/// Pick a date, moving off sold-out days.
async fn pick_date(
    State(state): State<AppState>,
    Query(req): Query<SelectDateRequest>,
) -> Result<Json<SelectDateResponse>, AppError> {
    let picked = parse_date(&req.date)?;
    let selected = select_date(state.catalog.slots(), picked);

    Ok(Json(SelectDateResponse {
        picked: picked.date().to_string(),
        selected: selected.date().to_string(),
        redirected: selected != picked,
    }))
}

/// Quote a reservation for an activity.
async fn quote_activity(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Query(req): Query<QuoteRequest>,
) -> Result<Json<QuoteResponse>, AppError> {
    let activity = state
        .catalog
        .activity(ActivityId(id))
        .ok_or_else(|| AppError::NotFound {
            message: format!("Unknown activity: {id}"),
        })?;
    let at = parse_date(&req.date)?;
    let party = check_party(&state, req.party)?;

    let slot = find_availability(state.catalog.slots(), at);
    let quote = quote(activity, slot, party, state.config.limited_below);

    Ok(Json(QuoteResponse {
        activity: activity.title.clone(),
        date: at.date().to_string(),
        total_label: quote.total.to_string(),
        quote,
    }))
}

/// List shop items in a category, flagging what the balance covers.
async fn browse_shop(
    State(state): State<AppState>,
    Query(req): Query<ShopRequest>,
) -> Result<Json<ShopResponse>, AppError> {
    let category = outfit_category(req.category.as_deref())?;
    let points = req.points.unwrap_or(0);

    let items = affordable_in(&state.shop, category, points)
        .into_iter()
        .map(|(item, affordable)| ShopItemResult::from_item(item, affordable))
        .collect();

    Ok(Json(ShopResponse { points, items }))
}

fn outfit_category(category: Option<&str>) -> Result<OutfitCategory, AppError> {
    match category.filter(|c| !c.is_empty()) {
        Some(c) => c.parse::<OutfitCategory>().map_err(|e| AppError::BadRequest {
            message: format!("{e}"),
        }),
        None => Ok(OutfitCategory::Hats),
    }
}

/// Buy a shop item with the given balance.
async fn purchase(
    State(state): State<AppState>,
    Query(req): Query<PurchaseRequest>,
) -> Result<Json<PurchaseResponse>, AppError> {
    let item = state
        .shop
        .iter()
        .find(|i| i.name.eq_ignore_ascii_case(req.item.trim()))
        .ok_or_else(|| AppError::NotFound {
            message: format!("Unknown shop item: {}", req.item),
        })?;

    let points = item.purchase(req.points).map_err(|e| AppError::BadRequest {
        message: format!("{e}"),
    })?;

    Ok(Json(PurchaseResponse {
        item: item.name.clone(),
        price: item.price,
        points,
    }))
}

/// List owned outfits in a category, after putting on the requested ones.
async fn wardrobe(
    State(state): State<AppState>,
    Query(req): Query<WardrobeRequest>,
) -> Result<Json<WardrobeResponse>, AppError> {
    let category = outfit_category(req.category.as_deref())?;
    let mut wardrobe = Wardrobe::new(state.outfits.to_vec());

    let wear = req.wear.as_deref().unwrap_or_default();
    for name in wear.split(',').map(str::trim).filter(|n| !n.is_empty()) {
        // Already worn: a second toggle would take it off again
        if wardrobe.is_equipped(name) {
            continue;
        }
        if !wardrobe.toggle(name) {
            return Err(AppError::NotFound {
                message: format!("No owned outfit named {name}"),
            });
        }
    }

    let outfits = wardrobe
        .outfits_in(category)
        .map(|o| {
            let equipped = wardrobe
                .equipped(category)
                .is_some_and(|worn| worn.name == o.name);
            OutfitResult::from_outfit(o, equipped)
        })
        .collect();

    Ok(Json(WardrobeResponse {
        category: category.label().to_string(),
        outfits,
    }))
}

/// Side menu entries.
async fn menu() -> Json<MenuResponse> {
    let items = MenuItem::ALL
        .into_iter()
        .map(|item| MenuEntry {
            item,
            label: item.label(),
            icon: item.icon(),
            opens_sheet: item.opens_sheet(),
        })
        .collect();
    Json(MenuResponse { items })
}

/// The home feed, with the viewer's likes applied.
async fn feed(
    State(state): State<AppState>,
    Query(req): Query<FeedRequest>,
) -> Result<Json<FeedResponse>, AppError> {
    let mut feed = Feed::new(state.posts.to_vec());

    let liked = req.liked.as_deref().unwrap_or_default();
    for id in liked.split(',').map(str::trim).filter(|id| !id.is_empty()) {
        let id = id.parse::<u32>().map_err(|_| AppError::BadRequest {
            message: format!("Invalid post id: {id}"),
        })?;
        // A repeated id must not cancel itself out
        if feed.is_liked(PostId(id)) {
            continue;
        }
        feed.toggle_like(PostId(id)).ok_or_else(|| AppError::NotFound {
            message: format!("Unknown post: {id}"),
        })?;
    }

    let posts = feed
        .posts()
        .iter()
        .map(|post| PostResult::from_post(post, &feed))
        .collect();
    Ok(Json(FeedResponse { posts }))
}

/// The itinerary, with each leg checked against an optional journey.
async fn trip(
    State(state): State<AppState>,
    Query(req): Query<TripRequest>,
) -> Result<Json<TripResponse>, AppError> {
    let travel = match (req.mode.as_deref().filter(|m| !m.is_empty()), req.travel_minutes) {
        (Some(mode), Some(minutes)) => Some(TravelInfo {
            duration_minutes: minutes,
            mode: mode.parse::<TransportMode>().map_err(|e| AppError::BadRequest {
                message: format!("{e}"),
            })?,
            route: Vec::new(),
        }),
        (None, None) => None,
        _ => {
            return Err(AppError::BadRequest {
                message: "mode and travel_minutes must be given together".to_string(),
            });
        }
    };

    let itinerary = &state.trip;
    Ok(Json(TripResponse {
        activities: itinerary
            .activities()
            .iter()
            .map(PlannedActivityResult::from_planned)
            .collect(),
        collaborators: itinerary.collaborators().to_vec(),
        legs: itinerary
            .legs()
            .iter()
            .map(|leg| LegResult::from_leg(leg, travel.as_ref()))
            .collect(),
        travel: travel.as_ref().map(TravelResult::from_travel),
    }))
}

/// The activity currently in the home screen spotlight.
async fn spotlight(State(state): State<AppState>) -> Json<SpotlightResponse> {
    let index = state.spotlight_index();
    let activities = state.catalog.activities();
    Json(SpotlightResponse {
        index,
        count: activities.len(),
        interval_ms: state.config.spotlight_interval_secs.saturating_mul(1000),
        activity: activities.get(index).map(ActivityResult::from_activity),
    })
}

/// Client timings and limits.
async fn settings(State(state): State<AppState>) -> Json<SettingsResponse> {
    Json(SettingsResponse::from_config(&state.config))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        warn!(%status, %message, "Request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
