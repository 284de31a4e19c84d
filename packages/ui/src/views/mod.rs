use dioxus::prelude::*;

use crate::state::Screen;
use crate::{use_wellness, ActivityLogPanel, ActivityLogToggle};

mod profile;
pub use profile::ProfileView;

mod tips;
pub use tips::TipsView;

mod detail;
pub use detail::DetailView;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Switches between the three screens. Needs a `WellnessProvider` above it.
#[component]
pub fn WellnessApp() -> Element {
    let state = use_wellness();
    let screen = state.read().screen();

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        div {
            class: "wellness-page",
            {match screen {
                Screen::Profile => rsx! { ProfileView {} },
                Screen::Tips => rsx! { TipsView {} },
                Screen::Detail => rsx! { DetailView {} },
            }}
            ActivityLogToggle {}
            ActivityLogPanel {}
        }
    }
}
