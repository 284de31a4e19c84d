use dioxus::prelude::*;

use crate::actions;
use crate::badges::{Glyph, GlyphIcon};
use crate::icons::{FaArrowsRotate, FaHeart, FaWandMagicSparkles};
use crate::{use_activity_log, use_wellness, Icon};
use store::{Gender, Goal};

/// Profile form: age, gender, goal, "Generate My Tips".
#[component]
pub fn ProfileView() -> Element {
    let mut state = use_wellness();
    let log = use_activity_log();

    let snapshot = state();
    let draft = snapshot.draft().clone();
    let loading = snapshot.is_loading();
    let can_submit = snapshot.can_submit();
    let error = snapshot.error().map(str::to_string);
    let gender_id = draft.gender.map(Gender::id).unwrap_or("");

    rsx! {
        div {
            class: "wellness-screen narrow",

            div {
                class: "wellness-hero",
                div {
                    class: "wellness-hero-badge",
                    Icon { icon: FaHeart, width: 32, height: 32 }
                }
                h1 { "Wellness Guide" }
                p { "Get personalized health recommendations powered by AI" }
            }

            div {
                class: "wellness-card wellness-form",

                if let Some(err) = error {
                    div { class: "wellness-error", "{err}" }
                }

                div {
                    class: "wellness-field",
                    label { r#for: "age", "Age" }
                    input {
                        id: "age",
                        r#type: "number",
                        value: "{draft.age}",
                        placeholder: "Enter your age",
                        oninput: move |evt: FormEvent| state.write().set_age(evt.value()),
                    }
                }

                div {
                    class: "wellness-field",
                    label { r#for: "gender", "Gender" }
                    select {
                        id: "gender",
                        value: "{gender_id}",
                        onchange: move |evt: FormEvent| {
                            state.write().set_gender(Gender::from_id(&evt.value()));
                        },
                        option { value: "", "Select gender" }
                        for gender in Gender::ALL {
                            option {
                                key: "{gender.id()}",
                                value: "{gender.id()}",
                                selected: draft.gender == Some(gender),
                                "{gender.label()}"
                            }
                        }
                    }
                }

                div {
                    class: "wellness-field",
                    label { "Wellness Goal" }
                    div {
                        class: "goal-list",
                        for goal in Goal::ALL {
                            button {
                                key: "{goal.id()}",
                                class: if draft.goal == Some(goal) { "goal-option selected" } else { "goal-option" },
                                onclick: move |_| state.write().set_goal(goal),
                                GlyphIcon { glyph: Glyph::for_goal(goal), size: 20 }
                                span { "{goal.label()}" }
                            }
                        }
                    }
                }

                button {
                    class: "wellness-primary",
                    disabled: !can_submit,
                    onclick: move |_| actions::generate_tips(state, log),
                    if loading {
                        span { class: "spin", Icon { icon: FaArrowsRotate, width: 20, height: 20 } }
                        "Generating..."
                    } else {
                        Icon { icon: FaWandMagicSparkles, width: 20, height: 20 }
                        "Generate My Tips"
                    }
                }
            }
        }
    }
}
