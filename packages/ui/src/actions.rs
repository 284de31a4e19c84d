//! Event handlers shared by the screens.
//!
//! Each action applies its transition on [`WellnessState`] right away and,
//! when a server call is needed, spawns a task that applies the result with
//! the request's ticket.

use dioxus::prelude::*;
use store::Tip;

use crate::activity_log::{log_activity, ActivityLog, LogLevel};
use crate::shelf::make_shelf;
use crate::state::{Resolution, WellnessState};

/// Submit the profile, or regenerate from the tips screen.
pub fn generate_tips(mut state: Signal<WellnessState>, mut log: Signal<ActivityLog>) {
    let Some(request) = state.write().begin_generation() else {
        return;
    };
    log_activity(&mut log, LogLevel::Info, "Generating tips...");

    spawn(async move {
        let reply = api::generate_tips(request.profile)
            .await
            .map_err(|e| e.to_string());
        match state.write().resolve_tips(request.ticket, reply) {
            Resolution::Fresh => log_activity(&mut log, LogLevel::Success, "Tips ready"),
            Resolution::Substituted(reason) => {
                tracing::warn!("Tip generation failed: {}", reason);
                log_activity(
                    &mut log,
                    LogLevel::Warning,
                    &format!("Tip generation failed ({reason}), showing built-in tips"),
                );
            }
            Resolution::Failed(message) => {
                tracing::error!("Failed to generate tips: {}", message);
                log_activity(
                    &mut log,
                    LogLevel::Error,
                    &format!("Failed to generate tips: {message}"),
                );
            }
            Resolution::Stale => tracing::debug!("dropping stale tip list"),
        }
    });
}

/// Open the tip at `index` and fetch its detail.
pub fn open_tip(mut state: Signal<WellnessState>, mut log: Signal<ActivityLog>, index: usize) {
    let Some(request) = state.write().select_tip(index) else {
        return;
    };

    spawn(async move {
        let title = request.tip.title.clone();
        let reply = api::generate_detail(request.tip)
            .await
            .map_err(|e| e.to_string());
        match state.write().resolve_detail(request.ticket, reply) {
            Resolution::Fresh => {}
            Resolution::Substituted(reason) => {
                tracing::warn!("Detail for {} failed: {}", title, reason);
                log_activity(
                    &mut log,
                    LogLevel::Warning,
                    &format!("Detail for \"{title}\" failed ({reason}), showing built-in steps"),
                );
            }
            Resolution::Failed(message) => {
                tracing::error!("Failed to load detail: {}", message);
                log_activity(
                    &mut log,
                    LogLevel::Error,
                    &format!("Failed to load \"{title}\": {message}"),
                );
            }
            Resolution::Stale => tracing::debug!("dropping stale detail for {}", title),
        }
    });
}

/// Save or unsave `tip` and persist the whole list. A tip saved from its
/// detail screen keeps the explanation and steps.
pub fn toggle_save(mut state: Signal<WellnessState>, mut log: Signal<ActivityLog>, tip: Tip) {
    let snapshot = state.write().toggle_save(&tip);
    let message = if state.read().is_saved(&tip) {
        format!("Saved \"{}\"", tip.title)
    } else {
        format!("Removed \"{}\"", tip.title)
    };
    log_activity(&mut log, LogLevel::Info, &message);

    spawn(async move {
        make_shelf().save(&snapshot).await;
    });
}

pub fn go_back(mut state: Signal<WellnessState>) {
    state.write().back();
}
