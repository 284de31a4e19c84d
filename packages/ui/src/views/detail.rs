use dioxus::prelude::*;

use crate::actions;
use crate::badges::{BookmarkIcon, Glyph, GlyphIcon};
use crate::icons::{FaArrowLeft, FaArrowsRotate};
use crate::{use_activity_log, use_wellness, Icon};

/// One tip expanded: why it matters and five steps.
#[component]
pub fn DetailView() -> Element {
    let state = use_wellness();
    let log = use_activity_log();

    let snapshot = state();
    let Some(selection) = snapshot.selection().cloned() else {
        return rsx! {};
    };
    let loading = snapshot.is_detail_loading();
    let is_saved = snapshot.is_saved(&selection.tip);
    let error = snapshot.error().map(str::to_string);
    let tip = selection.tip.clone();
    let detail = selection.detail.clone();

    rsx! {
        div {
            class: "wellness-screen medium",

            button {
                class: "wellness-link",
                onclick: move |_| actions::go_back(state),
                Icon { icon: FaArrowLeft, width: 18, height: 18 }
                "Back to Tips"
            }

            div {
                class: "wellness-card detail-card",

                div {
                    class: "detail-header",
                    div {
                        class: "detail-heading",
                        div {
                            class: "tip-icon large",
                            GlyphIcon { glyph: Glyph::for_index(selection.index), size: 32 }
                        }
                        div {
                            h2 { "{selection.tip.title}" }
                            p { "{selection.tip.preview}" }
                        }
                    }
                    button {
                        class: "bookmark light",
                        title: if is_saved { "Remove from saved" } else { "Save tip" },
                        onclick: move |_| actions::toggle_save(state, log, tip.clone()),
                        BookmarkIcon { saved: is_saved, size: 24 }
                    }
                }

                div {
                    class: "detail-body",
                    if loading {
                        div {
                            class: "detail-loading",
                            span { class: "spin", Icon { icon: FaArrowsRotate, width: 32, height: 32 } }
                        }
                    } else if let Some(detail) = detail {
                        section {
                            h3 { "Why This Matters" }
                            p { "{detail.explanation}" }
                        }
                        section {
                            h3 { "Step-by-Step Guide" }
                            for (n, step) in detail.steps.iter().enumerate() {
                                div {
                                    key: "{n}",
                                    class: "detail-step",
                                    div { class: "detail-step-number", "{n + 1}" }
                                    p { "{step}" }
                                }
                            }
                        }
                    } else if let Some(err) = error {
                        div { class: "wellness-error", "{err}" }
                    }
                }
            }
        }
    }
}
