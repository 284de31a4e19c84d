//! Wellness state context and hooks for the UI.

use dioxus::prelude::*;

use crate::activity_log::{log_activity, use_activity_log, LogLevel};
use crate::shelf::make_shelf;
use crate::state::WellnessState;

/// Get the shared controller signal.
pub fn use_wellness() -> Signal<WellnessState> {
    use_context::<Signal<WellnessState>>()
}

/// Provider component that owns the [`WellnessState`].
/// Expects an `ActivityLog` signal in context above it.
#[component]
pub fn WellnessProvider(children: Element) -> Element {
    let mut state = use_signal(WellnessState::new);
    let mut log = use_activity_log();

    // Saved tips are client-side; effects do not run during server rendering.
    use_effect(move || {
        spawn(async move {
            let saved = make_shelf().load().await;
            if !saved.is_empty() {
                log_activity(
                    &mut log,
                    LogLevel::Info,
                    &format!("Loaded {} saved tips", saved.len()),
                );
            }
            let merged = state.write().load_saved(saved);
            // Tips toggled before the load finished are merged in and written back.
            if let Some(snapshot) = merged {
                make_shelf().save(&snapshot).await;
            }
        });
    });

    use_context_provider(|| state);

    rsx! {
        {children}
    }
}
