use dioxus::prelude::*;

use crate::icons::{FaAppleWhole, FaBrain, FaDumbbell, FaMoon, FaPersonRunning};
use crate::Icon;
use store::Goal;

/// Icon slot for a tip position; also used for goals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    Activity,
    Apple,
    Brain,
    Dumbbell,
    Moon,
}

impl Glyph {
    /// Positions past the fifth get the default.
    pub fn for_index(index: usize) -> Self {
        match index {
            1 => Glyph::Apple,
            2 => Glyph::Brain,
            3 => Glyph::Dumbbell,
            4 => Glyph::Moon,
            _ => Glyph::Activity,
        }
    }

    pub fn for_goal(goal: Goal) -> Self {
        match goal {
            Goal::Weight => Glyph::Activity,
            Goal::Nutrition => Glyph::Apple,
            Goal::Mental => Glyph::Brain,
            Goal::Fitness => Glyph::Dumbbell,
            Goal::Sleep => Glyph::Moon,
        }
    }
}

#[component]
pub fn GlyphIcon(glyph: Glyph, #[props(default = 24)] size: u32) -> Element {
    match glyph {
        Glyph::Activity => rsx! { Icon { icon: FaPersonRunning, width: size, height: size } },
        Glyph::Apple => rsx! { Icon { icon: FaAppleWhole, width: size, height: size } },
        Glyph::Brain => rsx! { Icon { icon: FaBrain, width: size, height: size } },
        Glyph::Dumbbell => rsx! { Icon { icon: FaDumbbell, width: size, height: size } },
        Glyph::Moon => rsx! { Icon { icon: FaMoon, width: size, height: size } },
    }
}

/// Filled when saved, outlined otherwise.
#[component]
pub fn BookmarkIcon(saved: bool, #[props(default = 20)] size: u32) -> Element {
    if saved {
        rsx! { Icon { icon: crate::icons::FaBookmark, width: size, height: size } }
    } else {
        rsx! { Icon { icon: crate::regular_icons::FaBookmark, width: size, height: size } }
    }
}
