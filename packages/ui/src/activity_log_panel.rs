//! Floating activity panel: what was generated, what fell back to built-in
//! content, and what was saved.

use dioxus::prelude::*;

use crate::activity_log::{use_activity_log, LogFilter};

const ACTIVITY_LOG_CSS: Asset = asset!("/assets/styling/activity_log.css");

#[component]
pub fn ActivityLogPanel() -> Element {
    let mut log = use_activity_log();

    let snapshot = log();
    if !snapshot.visible {
        return rsx! {};
    }

    let filter = snapshot.filter;
    let problems = snapshot.problem_count();
    let fallbacks = snapshot.fallback_count();
    let entries: Vec<_> = snapshot.visible_entries().into_iter().cloned().collect();
    let empty_text = match filter {
        LogFilter::All => "Nothing yet",
        LogFilter::Problems => "No fallbacks or errors",
    };

    rsx! {
        document::Stylesheet { href: ACTIVITY_LOG_CSS }

        div {
            class: "activity-log-panel",
            div {
                class: "activity-log-header",
                div {
                    span { "Activity" }
                    if fallbacks > 0 {
                        span {
                            class: "activity-log-fallbacks",
                            title: "Built-in tips or steps were shown",
                            if fallbacks == 1 { " 1 fallback" } else { " {fallbacks} fallbacks" }
                        }
                    }
                }
                div {
                    class: "activity-log-header-actions",
                    button {
                        onclick: move |_| log.write().clear(),
                        "Clear"
                    }
                    button {
                        onclick: move |_| log.write().visible = false,
                        "Close"
                    }
                }
            }
            div {
                class: "activity-log-filters",
                button {
                    class: if filter == LogFilter::All { "active" } else { "" },
                    onclick: move |_| log.write().filter = LogFilter::All,
                    "All"
                }
                button {
                    class: if filter == LogFilter::Problems { "active" } else { "" },
                    onclick: move |_| log.write().filter = LogFilter::Problems,
                    "Problems ({problems})"
                }
            }
            div {
                class: "activity-log-entries",
                if entries.is_empty() {
                    div { class: "activity-log-empty", "{empty_text}" }
                }
                for (n, entry) in entries.into_iter().enumerate() {
                    div {
                        key: "{n}",
                        class: entry.level.class(),
                        span { class: "activity-log-time", "{entry.timestamp}" }
                        span { " {entry.message}" }
                    }
                }
            }
        }
    }
}

/// Corner button; shows the problem count when something fell back or failed.
#[component]
pub fn ActivityLogToggle() -> Element {
    let mut log = use_activity_log();
    let snapshot = log();
    let problems = snapshot.problem_count();
    let class = if snapshot.has_errors() {
        "activity-log-toggle has-errors"
    } else if problems > 0 {
        "activity-log-toggle has-fallbacks"
    } else {
        "activity-log-toggle"
    };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| {
                let visible = log().visible;
                log.write().visible = !visible;
            },
            title: "Activity",
            if problems > 0 {
                "{problems}"
            } else {
                "Log"
            }
        }
    }
}
