use dioxus::prelude::*;

use crate::actions;
use crate::badges::{BookmarkIcon, Glyph, GlyphIcon};
use crate::icons::{FaArrowLeft, FaArrowsRotate, FaChevronRight};
use crate::{use_activity_log, use_wellness, Icon};

/// The generated tips, plus the saved list when it is not empty.
#[component]
pub fn TipsView() -> Element {
    let state = use_wellness();
    let log = use_activity_log();

    let snapshot = state();
    let loading = snapshot.is_loading();
    let goal_label = snapshot.goal().map(|g| g.label()).unwrap_or_default();
    let error = snapshot.error().map(str::to_string);
    let tips: Vec<_> = snapshot
        .tips()
        .iter()
        .cloned()
        .map(|tip| {
            let saved = snapshot.is_saved(&tip);
            (tip, saved)
        })
        .collect();
    let saved: Vec<_> = snapshot.saved().iter().map(|entry| entry.tip.clone()).collect();

    rsx! {
        div {
            class: "wellness-screen wide",

            div {
                class: "wellness-toolbar",
                button {
                    class: "wellness-link",
                    onclick: move |_| actions::go_back(state),
                    Icon { icon: FaArrowLeft, width: 18, height: 18 }
                    "Back"
                }
                button {
                    class: "wellness-secondary",
                    disabled: loading,
                    onclick: move |_| actions::generate_tips(state, log),
                    span {
                        class: if loading { "spin" } else { "" },
                        Icon { icon: FaArrowsRotate, width: 16, height: 16 }
                    }
                    "Regenerate"
                }
            }

            div {
                class: "wellness-hero",
                h2 { "Your Wellness Tips" }
                p { "Personalized recommendations for {goal_label}" }
            }

            if let Some(err) = error {
                div { class: "wellness-error", "{err}" }
            }

            div {
                class: "tip-grid",
                for (index, (tip, is_saved)) in tips.into_iter().enumerate() {
                    div {
                        key: "{tip.id()}",
                        class: "wellness-card tip-card",
                        onclick: move |_| actions::open_tip(state, log, index),
                        div {
                            class: "tip-card-top",
                            div {
                                class: "tip-icon",
                                GlyphIcon { glyph: Glyph::for_index(index) }
                            }
                            button {
                                class: if is_saved { "bookmark saved" } else { "bookmark" },
                                title: if is_saved { "Remove from saved" } else { "Save tip" },
                                onclick: {
                                    let tip = tip.clone();
                                    move |evt: MouseEvent| {
                                        evt.stop_propagation();
                                        actions::toggle_save(state, log, tip.clone());
                                    }
                                },
                                BookmarkIcon { saved: is_saved }
                            }
                        }
                        h3 { "{tip.title}" }
                        p { "{tip.preview}" }
                        div {
                            class: "tip-more",
                            span { "Learn more" }
                            Icon { icon: FaChevronRight, width: 14, height: 14 }
                        }
                    }
                }
            }

            if !saved.is_empty() {
                div {
                    class: "wellness-card saved-panel",
                    h3 {
                        BookmarkIcon { saved: true, size: 22 }
                        "Saved Tips ({saved.len()})"
                    }
                    for tip in saved {
                        div {
                            key: "{tip.id()}",
                            class: "saved-row",
                            span { "{tip.title}" }
                            button {
                                class: "bookmark saved",
                                title: "Remove from saved",
                                onclick: {
                                    let tip = tip.clone();
                                    move |_| actions::toggle_save(state, log, tip.clone())
                                },
                                BookmarkIcon { saved: true }
                            }
                        }
                    }
                }
            }
        }
    }
}
