//! Application state for the web layer.

use std::sync::{Arc, Mutex};

use crate::catalog::Catalog;
use crate::feed::Post;
use crate::profile::{Outfit, ShopItem};
use crate::selection::SelectionConfig;
use crate::timer::{Carousel, ScopedTimer, auto_advance};
use crate::trip::Itinerary;

/// Shared application state.
///
/// Everything here is immutable after startup, apart from the spotlight
/// carousel, which advances on a timer.
#[derive(Clone)]
pub struct AppState {
    /// Activities, stations and availability
    pub catalog: Arc<Catalog>,

    /// Items for sale in the points shop
    pub shop: Arc<Vec<ShopItem>>,

    /// Starter outfits every player owns
    pub outfits: Arc<Vec<Outfit>>,

    /// Posts on the home feed
    pub posts: Arc<Vec<Post>>,

    /// The map planner's itinerary
    pub trip: Arc<Itinerary>,

    /// Selection configuration
    pub config: Arc<SelectionConfig>,

    /// Which catalog activity the home screen spotlights
    pub spotlight: Arc<Mutex<Carousel>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        catalog: Catalog,
        shop: Vec<ShopItem>,
        outfits: Vec<Outfit>,
        posts: Vec<Post>,
        trip: Itinerary,
        config: SelectionConfig,
    ) -> Self {
        let spotlight = Carousel::new(catalog.activities().len());
        Self {
            catalog: Arc::new(catalog),
            shop: Arc::new(shop),
            outfits: Arc::new(outfits),
            posts: Arc::new(posts),
            trip: Arc::new(trip),
            config: Arc::new(config),
            spotlight: Arc::new(Mutex::new(spotlight)),
        }
    }

    /// Start rotating the spotlight. It stops when the returned timer is dropped.
    pub fn start_spotlight(&self) -> ScopedTimer {
        auto_advance(self.spotlight.clone(), self.config.spotlight_interval())
    }

    /// Index of the spotlighted activity.
    pub fn spotlight_index(&self) -> usize {
        self.spotlight
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .index()
    }
}
