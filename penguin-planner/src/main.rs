use std::error::Error;

use chrono::Local;
use tracing::info;
use tracing_subscriber::EnvFilter;

use penguin_planner::catalog::Catalog;
use penguin_planner::config::ServerConfig;
use penguin_planner::feed::sample_posts;
use penguin_planner::profile::{sample_outfits, sample_shop};
use penguin_planner::selection::SelectionConfig;
use penguin_planner::trip::sample_itinerary;
use penguin_planner::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let now = Local::now().naive_local();

    // Load the catalog (fail fast if a configured file is unusable)
    let catalog = match &config.catalog_path {
        Some(path) => Catalog::load(path, now)?,
        None => {
            info!("PLANNER_CATALOG not set, using sample catalog");
            Catalog::sample(now)
        }
    };
    info!(
        activities = catalog.activities().len(),
        stations = catalog.stations().len(),
        slots = catalog.slots().len(),
        "Catalog ready"
    );

    // Build app state
    let state = AppState::new(
        catalog,
        sample_shop(),
        sample_outfits(),
        sample_posts(),
        sample_itinerary(now.date()),
        SelectionConfig::default(),
    );

    // Rotate the spotlight for as long as the server runs
    let _spotlight = state.start_spotlight();

    // Create router
    let app = create_router(state);

    // Bind and serve
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!(addr = %config.addr, "Activity planner listening");
    info!("API Endpoints:");
    info!("  GET  /health                 - Health check");
    info!("  GET  /activities             - Filter activities");
    info!("  GET  /activities/:id/quote   - Quote a reservation");
    info!("  GET  /stations               - List stations");
    info!("  GET  /dice/roll              - Roll the dice planner");
    info!("  GET  /dice/resolve           - Ride a fixed number of stops");
    info!("  GET  /availability           - Check a date");
    info!("  GET  /availability/select    - Pick a date");
    info!("  GET  /shop                   - Browse the points shop");
    info!("  GET  /shop/purchase          - Buy a shop item");
    info!("  GET  /wardrobe               - Owned outfits");
    info!("  GET  /menu                   - Side menu");
    info!("  GET  /feed                   - Home feed");
    info!("  GET  /trip                   - Map planner itinerary");
    info!("  GET  /spotlight              - Spotlighted activity");
    info!("  GET  /settings               - Client timings");

    axum::serve(listener, app).await?;
    Ok(())
}
