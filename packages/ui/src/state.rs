//! # View/state controller
//!
//! [`WellnessState`] is the single owner of everything the three screens
//! show. Views read it through a `Signal` and change it only through the
//! transition methods below; nothing else mutates it.
//!
//! ## Screens
//!
//! ```text
//!            begin/finish_generation           select_tip
//!  Profile ───────────────────────────▶ Tips ─────────────▶ Detail
//!     ▲                                 │  ▲                  │
//!     └──────────── back ───────────────┘  └────── back ──────┘
//! ```
//!
//! ## Tickets
//!
//! Every request handed out by [`begin_generation`](WellnessState::begin_generation)
//! or [`select_tip`](WellnessState::select_tip) carries a ticket. A result is
//! applied only while its ticket is still the one being waited for, so a
//! detail that arrives after the user went back (or opened another tip) is
//! dropped instead of overwriting the current screen.
//!
//! ## Replies
//!
//! [`resolve_tips`](WellnessState::resolve_tips) and
//! [`resolve_detail`](WellnessState::resolve_detail) apply what a server
//! function returned. A call that failed outright (server unreachable, request
//! dropped) shows the built-in content, the same as a failed generation on the
//! server. Only `Reply::Failed`, sent when the server propagates failures,
//! ends up in [`error`](WellnessState::error).

use api::fallback::{fallback_detail, fallback_tips};
use api::Reply;
use store::{Gender, Goal, Profile, ProfileDraft, SavedTip, SavedTips, Tip, TipDetail};

/// The active view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Profile,
    Tips,
    Detail,
}

/// A tip list request to send to the generator.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationRequest {
    pub ticket: u64,
    pub profile: Profile,
}

/// A detail request to send to the generator.
#[derive(Clone, Debug, PartialEq)]
pub struct DetailRequest {
    pub ticket: u64,
    pub tip: Tip,
}

/// The tip currently open on the detail screen.
#[derive(Clone, Debug, PartialEq)]
pub struct DetailSelection {
    /// Position in the last generated list; only picks the icon.
    pub index: usize,
    pub tip: Tip,
    pub detail: Option<TipDetail>,
    ticket: u64,
}

/// How a server reply was applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    Fresh,
    /// Built-in content is showing; carries the reason.
    Substituted(String),
    /// Recorded in `error`.
    Failed(String),
    /// The reply belonged to a request that is no longer current.
    Stale,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct WellnessState {
    screen: Screen,
    draft: ProfileDraft,
    tips: Vec<Tip>,
    selection: Option<DetailSelection>,
    saved: SavedTips,
    loading: bool,
    detail_loading: bool,
    pending_generation: Option<u64>,
    error: Option<String>,
    last_ticket: u64,
}

impl WellnessState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    pub fn tips(&self) -> &[Tip] {
        &self.tips
    }

    pub fn selection(&self) -> Option<&DetailSelection> {
        self.selection.as_ref()
    }

    pub fn saved(&self) -> &SavedTips {
        &self.saved
    }

    pub fn is_saved(&self, tip: &Tip) -> bool {
        self.saved.contains(tip)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_detail_loading(&self) -> bool {
        self.detail_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Goal of the submitted profile, for the tips header.
    pub fn goal(&self) -> Option<Goal> {
        self.draft.goal
    }

    /// Submit/regenerate is enabled.
    pub fn can_submit(&self) -> bool {
        !self.loading && self.draft.complete().is_some()
    }

    fn issue_ticket(&mut self) -> u64 {
        self.last_ticket += 1;
        self.last_ticket
    }

    pub fn set_age(&mut self, age: String) {
        self.draft.age = age;
    }

    pub fn set_gender(&mut self, gender: Option<Gender>) {
        self.draft.gender = gender;
    }

    pub fn set_goal(&mut self, goal: Goal) {
        self.draft.goal = Some(goal);
    }

    /// Start a tip list request from the profile or tips screen.
    ///
    /// Refused while a request is in flight or the draft is incomplete.
    pub fn begin_generation(&mut self) -> Option<GenerationRequest> {
        if self.loading || self.screen == Screen::Detail {
            return None;
        }
        let profile = self.draft.complete()?;
        let ticket = self.issue_ticket();
        self.loading = true;
        self.pending_generation = Some(ticket);
        self.error = None;
        Some(GenerationRequest { ticket, profile })
    }

    /// Apply a generated list and show it. Returns `false` for a stale ticket.
    pub fn finish_generation(&mut self, ticket: u64, tips: Vec<Tip>) -> bool {
        if self.pending_generation != Some(ticket) {
            return false;
        }
        self.pending_generation = None;
        self.loading = false;
        self.tips = tips;
        self.selection = None;
        self.detail_loading = false;
        self.screen = Screen::Tips;
        true
    }

    /// Record a failed tip list request; the screen does not change.
    pub fn fail_generation(&mut self, ticket: u64, message: String) -> bool {
        if self.pending_generation != Some(ticket) {
            return false;
        }
        self.pending_generation = None;
        self.loading = false;
        self.error = Some(message);
        true
    }

    /// Open the tip at `index` on the detail screen.
    ///
    /// The title and preview show straight away; the detail follows.
    pub fn select_tip(&mut self, index: usize) -> Option<DetailRequest> {
        if self.screen != Screen::Tips {
            return None;
        }
        let tip = self.tips.get(index)?.clone();
        let ticket = self.issue_ticket();
        self.selection = Some(DetailSelection {
            index,
            tip: tip.clone(),
            detail: None,
            ticket,
        });
        self.detail_loading = true;
        self.error = None;
        self.screen = Screen::Detail;
        Some(DetailRequest { ticket, tip })
    }

    fn current_detail_ticket(&self) -> Option<u64> {
        match (&self.selection, self.screen) {
            (Some(selection), Screen::Detail) if selection.detail.is_none() => {
                Some(selection.ticket)
            }
            _ => None,
        }
    }

    /// Apply a detail if it still belongs to the open tip.
    /// Returns `false` (and changes nothing) for a stale result.
    pub fn finish_detail(&mut self, ticket: u64, detail: TipDetail) -> bool {
        if self.current_detail_ticket() != Some(ticket) {
            return false;
        }
        if let Some(selection) = self.selection.as_mut() {
            selection.detail = Some(detail);
        }
        self.detail_loading = false;
        true
    }

    /// Record a failed detail request for the open tip.
    pub fn fail_detail(&mut self, ticket: u64, message: String) -> bool {
        if self.current_detail_ticket() != Some(ticket) {
            return false;
        }
        self.detail_loading = false;
        self.error = Some(message);
        true
    }

    /// Apply the outcome of a tip list request.
    pub fn resolve_tips(
        &mut self,
        ticket: u64,
        reply: Result<Reply<Vec<Tip>>, String>,
    ) -> Resolution {
        let (tips, resolution) = match reply {
            Ok(Reply::Ready(generated)) => match generated.fallback {
                Some(class) => (generated.value, Resolution::Substituted(class.to_string())),
                None => (generated.value, Resolution::Fresh),
            },
            Ok(Reply::Failed { message, .. }) => {
                return if self.fail_generation(ticket, message.clone()) {
                    Resolution::Failed(message)
                } else {
                    Resolution::Stale
                };
            }
            Err(message) => (fallback_tips(), Resolution::Substituted(message)),
        };
        if self.finish_generation(ticket, tips) {
            resolution
        } else {
            Resolution::Stale
        }
    }

    /// Apply the outcome of a detail request.
    pub fn resolve_detail(
        &mut self,
        ticket: u64,
        reply: Result<Reply<TipDetail>, String>,
    ) -> Resolution {
        if self.current_detail_ticket() != Some(ticket) {
            return Resolution::Stale;
        }
        let (detail, resolution) = match reply {
            Ok(Reply::Ready(generated)) => match generated.fallback {
                Some(class) => (generated.value, Resolution::Substituted(class.to_string())),
                None => (generated.value, Resolution::Fresh),
            },
            Ok(Reply::Failed { message, .. }) => {
                self.fail_detail(ticket, message.clone());
                return Resolution::Failed(message);
            }
            Err(message) => {
                let Some(selection) = self.selection.as_ref() else {
                    return Resolution::Stale;
                };
                (fallback_detail(&selection.tip), Resolution::Substituted(message))
            }
        };
        self.finish_detail(ticket, detail);
        resolution
    }

    /// Detail → Tips (dropping the selection), Tips → Profile.
    pub fn back(&mut self) -> Screen {
        match self.screen {
            Screen::Detail => {
                self.selection = None;
                self.detail_loading = false;
                self.error = None;
                self.screen = Screen::Tips;
            }
            Screen::Tips => {
                self.error = None;
                self.screen = Screen::Profile;
            }
            Screen::Profile => {}
        }
        self.screen
    }

    /// Save or unsave `tip` by title; returns the list to persist.
    ///
    /// Saving the open tip once its detail has arrived stores the detail too.
    pub fn toggle_save(&mut self, tip: &Tip) -> Vec<SavedTip> {
        let entry = match &self.selection {
            Some(DetailSelection {
                index,
                detail: Some(detail),
                ..
            }) if detail.tip.same_title(tip) => SavedTip::with_detail(detail, *index),
            _ => SavedTip::from(tip.clone()),
        };
        self.saved.toggle(entry);
        self.saved.to_vec()
    }

    /// Merge the list read from storage at start-up with anything saved
    /// while it was loading. Returns the list to write back, if it changed.
    pub fn load_saved(&mut self, stored: Vec<SavedTip>) -> Option<Vec<SavedTip>> {
        self.saved
            .merge_stored(stored)
            .then(|| self.saved.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::llm::{CompletionTransport, GenerationError, MessagesRequest, MessagesResponse};
    use api::{FailureClass, Generated, TipGenerator};
    use store::config::LlmConfig;
    use store::FailurePolicy;

    /// Transport whose endpoint is always unreachable.
    struct Unreachable;

    impl CompletionTransport for Unreachable {
        async fn complete(
            &self,
            _request: &MessagesRequest,
        ) -> Result<MessagesResponse, GenerationError> {
            Err(GenerationError::Transport("connection refused".to_string()))
        }
    }

    fn offline_generator() -> TipGenerator<Unreachable> {
        TipGenerator::new(Unreachable, &LlmConfig::default(), FailurePolicy::UseDefaults)
    }

    fn filled() -> WellnessState {
        let mut state = WellnessState::new();
        state.set_age("29".to_string());
        state.set_gender(Some(Gender::Female));
        state.set_goal(Goal::Sleep);
        state
    }

    fn on_tips() -> WellnessState {
        let mut state = filled();
        let request = state.begin_generation().unwrap();
        state.finish_generation(request.ticket, fallback_tips());
        state
    }

    #[test]
    fn test_starts_on_profile() {
        let state = WellnessState::new();
        assert_eq!(state.screen(), Screen::Profile);
        assert!(!state.can_submit());
        assert!(state.tips().is_empty());
    }

    #[test]
    fn test_incomplete_profile_cannot_submit() {
        let mut state = WellnessState::new();
        state.set_age("29".to_string());
        state.set_goal(Goal::Sleep);
        assert!(state.begin_generation().is_none());
        assert!(!state.is_loading());
    }

    #[test]
    fn test_only_one_generation_in_flight() {
        let mut state = filled();
        let first = state.begin_generation().unwrap();
        assert!(state.is_loading());
        assert!(!state.can_submit());
        assert!(state.begin_generation().is_none());

        assert!(state.finish_generation(first.ticket, fallback_tips()));
        assert!(!state.is_loading());
        assert!(state.can_submit());
    }

    #[tokio::test]
    async fn test_offline_submit_shows_fallback_tips() {
        let generator = offline_generator();
        let mut state = filled();

        let request = state.begin_generation().unwrap();
        assert_eq!(request.profile.age, "29");
        assert_eq!(request.profile.gender, Gender::Female);
        assert_eq!(request.profile.goal, Goal::Sleep);
        assert_eq!(state.screen(), Screen::Profile);

        let generated = generator.generate_tips(&request.profile).await.unwrap();
        assert!(state.finish_generation(request.ticket, generated.value));

        assert_eq!(state.screen(), Screen::Tips);
        assert_eq!(state.tips().len(), 5);
        assert!(state
            .tips()
            .iter()
            .any(|t| t.title == "Create a Sleep Sanctuary"));
    }

    #[tokio::test]
    async fn test_select_tip_loads_detail() {
        let generator = offline_generator();
        let mut state = on_tips();

        let index = state
            .tips()
            .iter()
            .position(|t| t.title == "Start with Morning Hydration")
            .unwrap();
        let request = state.select_tip(index).unwrap();

        assert_eq!(state.screen(), Screen::Detail);
        assert!(state.is_detail_loading());
        let selection = state.selection().unwrap();
        assert_eq!(selection.tip.title, "Start with Morning Hydration");
        assert_eq!(selection.index, index);
        assert!(selection.detail.is_none());

        let generated = generator.generate_detail(&request.tip).await.unwrap();
        assert!(state.finish_detail(request.ticket, generated.value));

        assert!(!state.is_detail_loading());
        let detail = state.selection().unwrap().detail.as_ref().unwrap();
        assert_eq!(detail.steps.len(), 5);
    }

    #[test]
    fn test_regenerate_replaces_list() {
        let mut state = on_tips();
        let request = state.begin_generation().unwrap();
        assert_eq!(state.screen(), Screen::Tips);

        let fresh = vec![Tip::new("One", "1")];
        assert!(state.finish_generation(request.ticket, fresh.clone()));
        assert_eq!(state.tips(), fresh.as_slice());
        assert_eq!(state.screen(), Screen::Tips);
    }

    #[test]
    fn test_back_navigation() {
        let mut state = on_tips();
        state.select_tip(0).unwrap();

        assert_eq!(state.back(), Screen::Tips);
        assert!(state.selection().is_none());
        assert!(!state.is_detail_loading());

        assert_eq!(state.back(), Screen::Profile);
        assert_eq!(state.back(), Screen::Profile);
        // Draft survives the round trip
        assert!(state.can_submit());
    }

    #[test]
    fn test_stale_detail_after_back_is_dropped() {
        let mut state = on_tips();
        let request = state.select_tip(1).unwrap();
        state.back();

        let tip = request.tip.clone();
        assert!(!state.finish_detail(request.ticket, fallback_detail(&tip)));
        assert_eq!(state.screen(), Screen::Tips);
        assert!(state.selection().is_none());
    }

    #[test]
    fn test_stale_detail_for_previous_tip_is_dropped() {
        let mut state = on_tips();
        let first = state.select_tip(0).unwrap();
        state.back();
        let second = state.select_tip(2).unwrap();

        assert!(!state.finish_detail(first.ticket, fallback_detail(&first.tip)));
        assert!(state.is_detail_loading());
        assert_eq!(state.selection().unwrap().tip, second.tip);

        assert!(state.finish_detail(second.ticket, fallback_detail(&second.tip)));
        assert_eq!(
            state.selection().unwrap().detail.as_ref().unwrap().tip,
            second.tip
        );
    }

    #[test]
    fn test_select_out_of_range() {
        let mut state = on_tips();
        assert!(state.select_tip(5).is_none());
        assert_eq!(state.screen(), Screen::Tips);
    }

    #[test]
    fn test_failures_clear_loading_and_record_error() {
        let mut state = filled();
        let request = state.begin_generation().unwrap();
        assert!(state.fail_generation(request.ticket, "server unreachable".to_string()));
        assert!(!state.is_loading());
        assert_eq!(state.screen(), Screen::Profile);
        assert_eq!(state.error(), Some("server unreachable"));

        let request = state.begin_generation().unwrap();
        assert!(state.error().is_none());
        state.finish_generation(request.ticket, fallback_tips());

        let detail = state.select_tip(0).unwrap();
        assert!(state.fail_detail(detail.ticket, "overloaded".to_string()));
        assert!(!state.is_detail_loading());
        assert_eq!(state.screen(), Screen::Detail);
        assert!(state.selection().unwrap().detail.is_none());
    }

    #[test]
    fn test_toggle_save_any_screen() {
        let mut state = on_tips();
        let tip = state.tips()[3].clone();

        let snapshot = state.toggle_save(&tip);
        assert_eq!(snapshot, vec![SavedTip::from(tip.clone())]);
        assert!(state.is_saved(&tip));

        state.select_tip(3).unwrap();
        let snapshot = state.toggle_save(&tip);
        assert!(snapshot.is_empty());
        assert!(!state.is_saved(&tip));
        assert_eq!(state.screen(), Screen::Detail);
    }

    #[test]
    fn test_save_from_detail_keeps_detail() {
        let mut state = on_tips();
        let request = state.select_tip(2).unwrap();
        state.finish_detail(request.ticket, fallback_detail(&request.tip));

        let snapshot = state.toggle_save(&request.tip);
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].tip, request.tip);
        assert_eq!(snapshot[0].index, Some(2));
        assert_eq!(snapshot[0].steps.as_ref().map(Vec::len), Some(5));
        assert!(snapshot[0].explanation.is_some());
    }

    #[test]
    fn test_load_saved() {
        let mut state = WellnessState::new();
        let write_back = state.load_saved(vec![
            SavedTip::from(Tip::new("A", "a")),
            SavedTip::from(Tip::new("A", "dup")),
        ]);
        assert_eq!(state.saved().len(), 1);
        assert!(state.is_saved(&Tip::new("A", "anything")));
        assert!(write_back.is_none());
    }

    #[test]
    fn test_load_saved_keeps_tips_saved_while_loading() {
        let mut state = on_tips();
        let early = state.tips()[0].clone();
        state.toggle_save(&early);

        let write_back = state
            .load_saved(vec![SavedTip::from(Tip::new("Stored", "s"))])
            .unwrap();

        let titles: Vec<&str> = write_back.iter().map(|t| t.tip.title.as_str()).collect();
        assert_eq!(titles, vec!["Stored", early.title.as_str()]);
        assert!(state.is_saved(&early));
        assert_eq!(state.saved().len(), 2);
    }

    #[test]
    fn test_failed_call_shows_fallback_tips() {
        let mut state = filled();
        let request = state.begin_generation().unwrap();

        let resolution =
            state.resolve_tips(request.ticket, Err("error sending request".to_string()));

        assert_eq!(
            resolution,
            Resolution::Substituted("error sending request".to_string())
        );
        assert_eq!(state.screen(), Screen::Tips);
        assert!(!state.is_loading());
        assert!(state.error().is_none());
        assert_eq!(state.tips(), fallback_tips().as_slice());
        assert!(state
            .tips()
            .iter()
            .any(|t| t.title == "Create a Sleep Sanctuary"));
    }

    #[test]
    fn test_failed_call_shows_fallback_detail() {
        let mut state = on_tips();
        let index = state
            .tips()
            .iter()
            .position(|t| t.title == "Start with Morning Hydration")
            .unwrap();
        let request = state.select_tip(index).unwrap();
        assert!(state.is_detail_loading());

        let resolution = state.resolve_detail(request.ticket, Err("server unreachable".to_string()));

        assert!(matches!(resolution, Resolution::Substituted(_)));
        assert!(!state.is_detail_loading());
        assert!(state.error().is_none());
        let detail = state.selection().unwrap().detail.as_ref().unwrap();
        assert_eq!(detail.tip.title, "Start with Morning Hydration");
        assert_eq!(detail.steps.len(), 5);
    }

    #[test]
    fn test_server_substitution_is_reported() {
        let mut state = filled();
        let request = state.begin_generation().unwrap();
        let reply = Reply::Ready(Generated::substituted(fallback_tips(), FailureClass::ResponseShape));

        let resolution = state.resolve_tips(request.ticket, Ok(reply));
        assert_eq!(
            resolution,
            Resolution::Substituted(FailureClass::ResponseShape.to_string())
        );
        assert_eq!(state.screen(), Screen::Tips);

        let request = state.begin_generation().unwrap();
        let fresh = vec![Tip::new("One", "1")];
        let resolution =
            state.resolve_tips(request.ticket, Ok(Reply::Ready(Generated::fresh(fresh.clone()))));
        assert_eq!(resolution, Resolution::Fresh);
        assert_eq!(state.tips(), fresh.as_slice());
    }

    #[test]
    fn test_propagated_failure_records_error() {
        let mut state = filled();
        let request = state.begin_generation().unwrap();
        let reply = Reply::Failed {
            class: FailureClass::Transport,
            message: "endpoint returned 529: overloaded".to_string(),
        };

        let resolution = state.resolve_tips(request.ticket, Ok(reply));
        assert!(matches!(resolution, Resolution::Failed(_)));
        assert_eq!(state.screen(), Screen::Profile);
        assert!(state.tips().is_empty());
        assert_eq!(state.error(), Some("endpoint returned 529: overloaded"));

        let request = state.begin_generation().unwrap();
        state.resolve_tips(request.ticket, Err("offline".to_string()));
        let detail = state.select_tip(0).unwrap();
        let reply = Reply::Failed {
            class: FailureClass::ResponseShape,
            message: "unexpected response".to_string(),
        };
        assert!(matches!(
            state.resolve_detail(detail.ticket, Ok(reply)),
            Resolution::Failed(_)
        ));
        assert!(!state.is_detail_loading());
        assert!(state.selection().unwrap().detail.is_none());
    }

    #[test]
    fn test_stale_replies_change_nothing() {
        let mut state = on_tips();
        let request = state.select_tip(1).unwrap();
        state.back();

        assert_eq!(
            state.resolve_detail(request.ticket, Err("late".to_string())),
            Resolution::Stale
        );
        assert!(state.selection().is_none());
        assert_eq!(
            state.resolve_tips(request.ticket, Err("late".to_string())),
            Resolution::Stale
        );
        assert_eq!(state.screen(), Screen::Tips);
    }
}
