//! # Prompt Controller
//!
//! [`PromptController`] is everything the connect prompt component does apart
//! from drawing: it follows the owner's visibility, holds the scroll lock (and
//! any listeners the component attaches) while visible, routes dismiss intents
//! through the [`PromptSession`], and runs the connect flow, calling the owner
//! callbacks in order.
//!
//! Like [`GateController`](crate::GateController) it is a cheap `Rc` handle so a
//! spawned connect flow can outlive the component that started it; outcomes
//! that settle after [`release`](PromptController::release) are ignored.
//!
//! ```rust,ignore
//! let prompt = PromptController::new(lock, PromptCallbacks::new(on_dismiss).on_connected(on_connected));
//! if prompt.sync_visible(true) {
//!     let listener = add_keydown_listener(...);
//!     prompt.on_release(move || listener.remove());
//! }
//! spawn_local(prompt.confirm(wallet)?);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::future::Future;
use std::rc::Rc;

use crate::capability::{ConnectOutcome, WalletCapability};
use crate::prompt::{is_cancel_key, PromptEffect, PromptSession};
use crate::scroll_lock::{ScrollLock, ScrollLockGuard};

type Hook = Box<dyn Fn()>;

/// Owner callbacks of a prompt.
pub struct PromptCallbacks {
    on_dismiss: Hook,
    on_connected: Option<Hook>,
}

impl PromptCallbacks {
    /// `on_dismiss` fires on cancel, backdrop, cancel key and after a successful connect.
    pub fn new(on_dismiss: impl Fn() + 'static) -> Self {
        Self {
            on_dismiss: Box::new(on_dismiss),
            on_connected: None,
        }
    }

    /// Fires after a successful connect, before `on_dismiss`.
    pub fn on_connected(mut self, on_connected: impl Fn() + 'static) -> Self {
        self.on_connected = Some(Box::new(on_connected));
        self
    }
}

/// Resources held while the prompt is visible. Dropping it releases them all.
struct VisibleHold {
    _scroll: ScrollLockGuard,
    releases: Vec<Box<dyn FnOnce()>>,
}

impl Drop for VisibleHold {
    fn drop(&mut self) {
        for release in self.releases.drain(..) {
            release();
        }
    }
}

struct Inner {
    session: RefCell<PromptSession>,
    lock: ScrollLock,
    hold: RefCell<Option<VisibleHold>>,
    callbacks: PromptCallbacks,
}

#[derive(Clone)]
pub struct PromptController {
    inner: Rc<Inner>,
}

impl PromptController {
    pub fn new(lock: ScrollLock, callbacks: PromptCallbacks) -> Self {
        Self {
            inner: Rc::new(Inner {
                session: RefCell::new(PromptSession::new()),
                lock,
                hold: RefCell::new(None),
                callbacks,
            }),
        }
    }

    /// Follow the owner's visibility. Returns `true` when the prompt just became
    /// visible; the caller attaches its listeners with [`on_release`](Self::on_release).
    pub fn sync_visible(&self, visible: bool) -> bool {
        if visible {
            self.inner.session.borrow_mut().show();
            let mut hold = self.inner.hold.borrow_mut();
            if hold.is_some() {
                return false;
            }
            *hold = Some(VisibleHold {
                _scroll: self.inner.lock.acquire(),
                releases: Vec::new(),
            });
            true
        } else {
            self.release();
            false
        }
    }

    /// Run `release` when the visible resources are dropped. Runs it at once if
    /// the prompt is not holding any.
    pub fn on_release(&self, release: impl FnOnce() + 'static) {
        let mut hold = self.inner.hold.borrow_mut();
        match hold.as_mut() {
            Some(held) => held.releases.push(Box::new(release)),
            None => {
                drop(hold);
                release();
            }
        }
    }

    /// Hide and drop everything held. Called on hide and on teardown.
    pub fn release(&self) {
        self.inner.session.borrow_mut().hide();
        let released = self.inner.hold.borrow_mut().take();
        drop(released);
    }

    pub fn is_holding(&self) -> bool {
        self.inner.hold.borrow().is_some()
    }

    pub fn is_open(&self) -> bool {
        self.inner.session.borrow().is_open()
    }

    pub fn is_confirming(&self) -> bool {
        self.inner.session.borrow().is_confirming()
    }

    /// Failure reported by the last connect attempt.
    pub fn error(&self) -> Option<String> {
        self.inner.session.borrow().error().map(str::to_string)
    }

    /// Cancel button or backdrop. Returns `true` if `on_dismiss` fired.
    pub fn dismiss(&self) -> bool {
        let fire = self.inner.session.borrow_mut().request_dismiss();
        if fire {
            (self.inner.callbacks.on_dismiss)();
        }
        fire
    }

    /// Window key press. Returns `true` if it dismissed the prompt.
    pub fn key(&self, key: &str, repeat: bool) -> bool {
        is_cancel_key(key, repeat) && self.dismiss()
    }

    /// Start a connect flow. Returns `None` if the prompt is closed or a flow is
    /// already in flight. The session enters the confirming state before this returns.
    pub fn confirm<W>(&self, wallet: W) -> Option<impl Future<Output = PromptEffect> + 'static>
    where
        W: WalletCapability + 'static,
    {
        if !self.inner.session.borrow_mut().begin_confirm() {
            return None;
        }
        let this = self.clone();
        Some(async move {
            let outcome = wallet.connect().await;
            this.finish(&outcome)
        })
    }

    fn finish(&self, outcome: &ConnectOutcome) -> PromptEffect {
        let effect = self.inner.session.borrow_mut().finish_confirm(outcome);
        match &effect {
            PromptEffect::Connected => {
                log::info!("Wallet connected from prompt");
                if let Some(on_connected) = &self.inner.callbacks.on_connected {
                    on_connected();
                }
                (self.inner.callbacks.on_dismiss)();
            }
            PromptEffect::StayOpen => {
                if let ConnectOutcome::Failed(reason) = outcome {
                    log::warn!("Connect failed, prompt stays open: {}", reason);
                }
            }
            PromptEffect::Ignored => {
                log::debug!("Connect outcome arrived after the prompt closed");
            }
        }
        effect
    }
}

impl fmt::Debug for PromptController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PromptController")
            .field("session", &*self.inner.session.borrow())
            .field("holding", &self.is_holding())
            .finish()
    }
}
