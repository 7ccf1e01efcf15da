//! # Connect Prompt Session
//!
//! State of the connect prompt for one visibility cycle. The component arms a
//! session when it becomes visible and routes every user intent through it:
//!
//! - a dismiss (cancel button, backdrop, cancel key) fires at most once per cycle
//! - only one confirm can be in flight
//! - a connect outcome closes the prompt only on success; cancel and failure keep it open
//!
//! The session does no I/O; the component calls the wallet and the owner callbacks
//! according to the returned [`PromptEffect`].

use crate::capability::ConnectOutcome;

/// Key that dismisses the prompt.
pub const CANCEL_KEY: &str = "Escape";

/// Whether a key event is a logical cancel press. Auto-repeat events are not.
pub fn is_cancel_key(key: &str, repeat: bool) -> bool {
    // "Esc" is what older Edge and Firefox report.
    !repeat && (key == CANCEL_KEY || key == "Esc")
}

/// What the component must do after a confirm settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PromptEffect {
    /// Call `on_connected` (if any), then `on_dismiss`.
    Connected,
    /// Keep the dialog open.
    StayOpen,
    /// The session was closed or not confirming; do nothing.
    Ignored,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PromptSession {
    open: bool,
    confirming: bool,
    error: Option<String>,
}

impl PromptSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the session when the prompt becomes visible.
    pub fn show(&mut self) {
        if self.open {
            return;
        }
        self.open = true;
        self.confirming = false;
        self.error = None;
    }

    /// Disarm the session when the prompt is hidden by its owner.
    pub fn hide(&mut self) {
        self.open = false;
        self.confirming = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_confirming(&self) -> bool {
        self.confirming
    }

    /// Failure reported by the last connect attempt.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns `true` if the owner's dismiss callback should fire.
    pub fn request_dismiss(&mut self) -> bool {
        if !self.open {
            return false;
        }
        self.open = false;
        self.confirming = false;
        true
    }

    /// Returns `true` if a connect flow should start.
    pub fn begin_confirm(&mut self) -> bool {
        if !self.open || self.confirming {
            return false;
        }
        self.confirming = true;
        self.error = None;
        true
    }

    /// Apply the outcome of the connect flow started by [`begin_confirm`](Self::begin_confirm).
    pub fn finish_confirm(&mut self, outcome: &ConnectOutcome) -> PromptEffect {
        if !self.open || !self.confirming {
            self.confirming = false;
            return PromptEffect::Ignored;
        }
        self.confirming = false;

        match outcome {
            ConnectOutcome::Connected => {
                self.open = false;
                PromptEffect::Connected
            }
            ConnectOutcome::Cancelled => PromptEffect::StayOpen,
            ConnectOutcome::Failed(reason) => {
                self.error = Some(reason.clone());
                PromptEffect::StayOpen
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_session() -> PromptSession {
        let mut session = PromptSession::new();
        session.show();
        session
    }

    #[test]
    fn test_cancel_key_ignores_repeats() {
        assert!(is_cancel_key("Escape", false));
        assert!(is_cancel_key("Esc", false));
        assert!(!is_cancel_key("Escape", true));
        assert!(!is_cancel_key("Enter", false));
    }

    #[test]
    fn test_dismiss_fires_once_per_cycle() {
        let mut session = open_session();
        assert!(session.request_dismiss());
        assert!(!session.request_dismiss());

        session.hide();
        session.show();
        assert!(session.request_dismiss());
    }

    #[test]
    fn test_closed_session_ignores_everything() {
        let mut session = PromptSession::new();
        assert!(!session.request_dismiss());
        assert!(!session.begin_confirm());
        assert_eq!(session.finish_confirm(&ConnectOutcome::Connected), PromptEffect::Ignored);
    }

    #[test]
    fn test_single_confirm_in_flight() {
        let mut session = open_session();
        assert!(session.begin_confirm());
        assert!(!session.begin_confirm());
        assert_eq!(session.finish_confirm(&ConnectOutcome::Connected), PromptEffect::Connected);
        assert!(!session.is_open());
        assert!(!session.request_dismiss());
    }

    #[test]
    fn test_cancel_and_failure_keep_prompt_open() {
        let mut session = open_session();
        session.begin_confirm();
        assert_eq!(session.finish_confirm(&ConnectOutcome::Cancelled), PromptEffect::StayOpen);
        assert!(session.is_open());
        assert_eq!(session.error(), None);

        session.begin_confirm();
        assert_eq!(
            session.finish_confirm(&ConnectOutcome::Failed("User declined access".to_string())),
            PromptEffect::StayOpen
        );
        assert!(session.is_open());
        assert_eq!(session.error(), Some("User declined access"));

        assert!(session.begin_confirm());
        assert_eq!(session.error(), None);
    }

    #[test]
    fn test_outcome_after_dismiss_is_ignored() {
        let mut session = open_session();
        session.begin_confirm();
        assert!(session.request_dismiss());
        assert_eq!(session.finish_confirm(&ConnectOutcome::Connected), PromptEffect::Ignored);
    }

    #[test]
    fn test_show_is_idempotent_while_open() {
        let mut session = open_session();
        session.begin_confirm();
        session.show();
        assert!(session.is_confirming());
    }
}
