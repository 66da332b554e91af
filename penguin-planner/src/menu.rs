//! Side menu entries.

use serde::Serialize;

/// An entry in the side menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuItem {
    DicePlanner,
    MapPlanner,
    Activities,
    Friends,
    Settings,
}

impl MenuItem {
    /// Every entry, in menu order.
    pub const ALL: [MenuItem; 5] = [
        MenuItem::DicePlanner,
        MenuItem::MapPlanner,
        MenuItem::Activities,
        MenuItem::Friends,
        MenuItem::Settings,
    ];

    /// Text shown in the menu.
    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::DicePlanner => "Dice Planner",
            MenuItem::MapPlanner => "Map Planner",
            MenuItem::Activities => "Activities",
            MenuItem::Friends => "Friends",
            MenuItem::Settings => "Settings",
        }
    }

    /// SF Symbol shown beside the label.
    pub fn icon(&self) -> &'static str {
        match self {
            MenuItem::DicePlanner => "dice.fill",
            MenuItem::MapPlanner => "map.fill",
            MenuItem::Activities => "figure.run",
            MenuItem::Friends => "person.2.fill",
            MenuItem::Settings => "gearshape.fill",
        }
    }

    /// Whether choosing the entry opens a sheet. Friends and Settings don't yet.
    pub fn opens_sheet(&self) -> bool {
        matches!(
            self,
            MenuItem::DicePlanner | MenuItem::MapPlanner | MenuItem::Activities
        )
    }
}
