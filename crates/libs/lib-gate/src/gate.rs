//! # Gate State Machine
//!
//! [`GateModel`] is the pure state behind a wallet gate. It does no I/O: the
//! controller feeds it identity query results and user intents, and it answers
//! with what changed and what to render.
//!
//! ```text
//!            resolve(present)
//!  Loading ─────────────────────────────────────► Connected (terminal)
//!     │                                              ▲
//!     │ resolve(absent | error)                      │ finish_verification(present)
//!     ▼                                              │
//!  Disconnected ── begin_verification ──► verifying ─┘
//!     │   ▲                                   │
//!     │   └──── finish_verification(absent) ──┘
//!     │
//!     └── dismiss ──► redirected (prompt hidden for good)
//! ```
//!
//! Every transition method returns whether the model changed, so observers can
//! skip redundant renders.

use crate::error::{GateError, Result};
use crate::identity::WalletIdentity;

/// Gate status derived from the pending flag and the identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateState {
    Loading,
    Disconnected,
    Connected,
}

/// What the gate renders. Exactly one of these at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateView {
    /// Loading indicator.
    Loading,
    /// Placeholder text with the connect prompt over it.
    Locked { prompt_visible: bool },
    /// Protected children.
    Unlocked,
}

/// Result of a dismiss request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DismissEffect {
    /// Prompt hidden; navigate to the route.
    Redirect(String),
    /// Prompt hidden while a successful connection is being verified; stay put.
    Hide,
    /// Nothing to do (already dismissed, connected or still loading).
    Ignored,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GateModel {
    pending: bool,
    identity: Option<WalletIdentity>,
    modal_visible: bool,
    verifying: bool,
    redirected: bool,
    last_error: Option<GateError>,
}

impl Default for GateModel {
    fn default() -> Self {
        Self::new()
    }
}

impl GateModel {
    /// Fresh model in the `Loading` state.
    pub fn new() -> Self {
        Self {
            pending: true,
            identity: None,
            modal_visible: false,
            verifying: false,
            redirected: false,
            last_error: None,
        }
    }

    pub fn state(&self) -> GateState {
        if self.pending {
            GateState::Loading
        } else if self.identity.is_some() {
            GateState::Connected
        } else {
            GateState::Disconnected
        }
    }

    pub fn view(&self) -> GateView {
        match self.state() {
            GateState::Loading => GateView::Loading,
            GateState::Connected => GateView::Unlocked,
            GateState::Disconnected => GateView::Locked {
                prompt_visible: self.prompt_visible(),
            },
        }
    }

    pub fn identity(&self) -> Option<&WalletIdentity> {
        self.identity.as_ref()
    }

    /// Prompt visibility: disconnected, modal requested, and not redirected away.
    pub fn prompt_visible(&self) -> bool {
        self.state() == GateState::Disconnected && self.modal_visible && !self.redirected
    }

    pub fn is_verifying(&self) -> bool {
        self.verifying
    }

    pub fn has_redirected(&self) -> bool {
        self.redirected
    }

    /// Most recent identity query failure, cleared once an identity is found.
    pub fn last_error(&self) -> Option<&GateError> {
        self.last_error.as_ref()
    }

    /// Apply the result of the initial identity query. Only the first call counts.
    pub fn resolve(&mut self, result: Result<Option<WalletIdentity>>) -> bool {
        if !self.pending {
            return false;
        }
        self.pending = false;
        self.apply_identity(result);
        true
    }

    /// Start verifying a connection reported by the prompt.
    ///
    /// Refused unless disconnected, not already verifying, and not redirected.
    pub fn begin_verification(&mut self) -> bool {
        if self.state() != GateState::Disconnected || self.verifying || self.redirected {
            return false;
        }
        self.verifying = true;
        true
    }

    /// Apply the identity re-query that follows a successful connect.
    ///
    /// A still-absent identity leaves the gate disconnected with the prompt shown.
    pub fn finish_verification(&mut self, result: Result<Option<WalletIdentity>>) -> bool {
        if !self.verifying {
            return false;
        }
        self.verifying = false;
        self.apply_identity(result);
        true
    }

    /// Handle a dismiss of the prompt.
    pub fn dismiss(&mut self, redirect_route: &str) -> DismissEffect {
        if self.state() != GateState::Disconnected || self.redirected {
            return DismissEffect::Ignored;
        }

        if self.verifying {
            if !self.modal_visible {
                return DismissEffect::Ignored;
            }
            self.modal_visible = false;
            return DismissEffect::Hide;
        }

        if !self.modal_visible {
            return DismissEffect::Ignored;
        }

        self.modal_visible = false;
        self.redirected = true;
        DismissEffect::Redirect(redirect_route.to_string())
    }

    fn apply_identity(&mut self, result: Result<Option<WalletIdentity>>) {
        match result {
            Ok(Some(identity)) => {
                self.identity = Some(identity);
                self.modal_visible = false;
                self.last_error = None;
            }
            Ok(None) => {
                self.modal_visible = true;
            }
            Err(err) => {
                self.modal_visible = true;
                self.last_error = Some(err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> WalletIdentity {
        WalletIdentity::parse("GCEZWKCA5VLDNRLN3RPRJMRZOX3Z6G5CHCGSNFHEYVXM3XOJMDS674JZ").unwrap()
    }

    fn disconnected() -> GateModel {
        let mut model = GateModel::new();
        model.resolve(Ok(None));
        model
    }

    #[test]
    fn test_initial_state_is_loading() {
        let model = GateModel::new();
        assert_eq!(model.state(), GateState::Loading);
        assert_eq!(model.view(), GateView::Loading);
        assert!(!model.prompt_visible());
    }

    #[test]
    fn test_resolve_present_unlocks() {
        let mut model = GateModel::new();
        assert!(model.resolve(Ok(Some(identity()))));
        assert_eq!(model.state(), GateState::Connected);
        assert_eq!(model.view(), GateView::Unlocked);
        assert_eq!(model.identity(), Some(&identity()));
        assert!(!model.prompt_visible());
    }

    #[test]
    fn test_resolve_absent_shows_prompt() {
        let model = disconnected();
        assert_eq!(model.state(), GateState::Disconnected);
        assert_eq!(model.view(), GateView::Locked { prompt_visible: true });
        assert!(model.last_error().is_none());
    }

    #[test]
    fn test_resolve_error_is_disconnected_with_error() {
        let mut model = GateModel::new();
        model.resolve(Err(GateError::IdentityQuery("kit missing".to_string())));
        assert_eq!(model.state(), GateState::Disconnected);
        assert!(model.prompt_visible());
        assert_eq!(
            model.last_error(),
            Some(&GateError::IdentityQuery("kit missing".to_string()))
        );
    }

    #[test]
    fn test_resolve_only_once() {
        let mut model = disconnected();
        assert!(!model.resolve(Ok(Some(identity()))));
        assert_eq!(model.state(), GateState::Disconnected);
    }

    #[test]
    fn test_dismiss_redirects_once() {
        let mut model = disconnected();
        assert_eq!(model.dismiss("/"), DismissEffect::Redirect("/".to_string()));
        assert!(model.has_redirected());
        assert_eq!(model.view(), GateView::Locked { prompt_visible: false });

        assert_eq!(model.dismiss("/"), DismissEffect::Ignored);
        assert!(!model.begin_verification());
    }

    #[test]
    fn test_dismiss_ignored_while_loading_or_connected() {
        let mut model = GateModel::new();
        assert_eq!(model.dismiss("/"), DismissEffect::Ignored);

        model.resolve(Ok(Some(identity())));
        assert_eq!(model.dismiss("/"), DismissEffect::Ignored);
    }

    #[test]
    fn test_verification_success_connects() {
        let mut model = disconnected();
        assert!(model.begin_verification());
        assert!(!model.begin_verification());

        assert_eq!(model.dismiss("/"), DismissEffect::Hide);
        assert!(!model.has_redirected());

        assert!(model.finish_verification(Ok(Some(identity()))));
        assert_eq!(model.state(), GateState::Connected);
        assert!(!model.prompt_visible());

        assert!(!model.begin_verification());
        assert!(!model.finish_verification(Ok(None)));
        assert_eq!(model.state(), GateState::Connected);
    }

    #[test]
    fn test_verification_still_absent_reopens_prompt() {
        let mut model = disconnected();
        model.begin_verification();
        model.dismiss("/");
        assert!(!model.prompt_visible());

        model.finish_verification(Ok(None));
        assert_eq!(model.state(), GateState::Disconnected);
        assert!(model.prompt_visible());

        assert_eq!(model.dismiss("/"), DismissEffect::Redirect("/".to_string()));
    }

    #[test]
    fn test_verification_error_is_recorded_then_cleared() {
        let mut model = disconnected();
        model.begin_verification();
        model.finish_verification(Err(GateError::IdentityQuery("timeout".to_string())));
        assert!(model.last_error().is_some());
        assert!(model.prompt_visible());

        model.begin_verification();
        model.finish_verification(Ok(Some(identity())));
        assert!(model.last_error().is_none());
        assert_eq!(model.state(), GateState::Connected);
    }
}
