//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}
pub mod regular_icons {
    pub use dioxus_free_icons::icons::fa_regular_icons::*;
}

pub mod state;
pub use state::{DetailRequest, DetailSelection, GenerationRequest, Resolution, Screen, WellnessState};

mod shelf;
pub use shelf::make_shelf;

mod provider;
pub use provider::{use_wellness, WellnessProvider};

pub mod actions;

mod badges;
pub use badges::{BookmarkIcon, Glyph, GlyphIcon};

pub mod views;
pub use views::WellnessApp;

pub mod activity_log;
pub use activity_log::{log_activity, use_activity_log, ActivityLog, LogFilter, LogLevel};

mod activity_log_panel;
pub use activity_log_panel::{ActivityLogPanel, ActivityLogToggle};
