//! # Gate Controller
//!
//! [`GateController`] drives a [`GateModel`] over the external wallet and
//! navigator. It is a cheap `Rc` handle: clones share one model, so a spawned
//! task can hold a clone while the component keeps another.
//!
//! ## Stale responses
//!
//! Identity queries cannot be cancelled. Instead the controller carries a
//! liveness flag; results that arrive after [`GateController::unmount`] are
//! dropped. [`MountedGate`] clears the flag when it is dropped, so a component
//! that stores it gets the protection on any teardown path.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let gate = MountedGate::new(GateController::new(wallet, navigator, "/"));
//! gate.set_listener(|model| render(model.view()));
//! spawn_local(gate.controller().mount());
//!
//! // from the prompt:
//! spawn_local(gate.connected());
//! gate.dismiss();
//! ```

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::ops::Deref;
use std::rc::Rc;

use crate::capability::{Navigator, WalletCapability};
use crate::gate::{DismissEffect, GateModel, GateView};

type Listener = Box<dyn Fn(&GateModel)>;

struct Inner<W, N> {
    wallet: W,
    navigator: N,
    redirect_route: String,
    model: RefCell<GateModel>,
    alive: Cell<bool>,
    mounted: Cell<bool>,
    listener: RefCell<Option<Listener>>,
}

pub struct GateController<W, N> {
    inner: Rc<Inner<W, N>>,
}

impl<W, N> Clone for GateController<W, N> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<W, N> GateController<W, N>
where
    W: WalletCapability + 'static,
    N: Navigator + 'static,
{
    pub fn new(wallet: W, navigator: N, redirect_route: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(Inner {
                wallet,
                navigator,
                redirect_route: redirect_route.into(),
                model: RefCell::new(GateModel::new()),
                alive: Cell::new(true),
                mounted: Cell::new(false),
                listener: RefCell::new(None),
            }),
        }
    }

    /// Register the observer called after every model change.
    pub fn set_listener(&self, listener: impl Fn(&GateModel) + 'static) {
        *self.inner.listener.borrow_mut() = Some(Box::new(listener));
    }

    /// Snapshot of the current model.
    pub fn model(&self) -> GateModel {
        self.inner.model.borrow().clone()
    }

    pub fn view(&self) -> GateView {
        self.inner.model.borrow().view()
    }

    pub fn is_alive(&self) -> bool {
        self.inner.alive.get()
    }

    /// Run the initial identity query. Only the first call issues a query.
    pub async fn mount(&self) {
        if self.inner.mounted.replace(true) {
            log::debug!("Gate already mounted, skipping identity query");
            return;
        }

        let result = self.inner.wallet.identity().await;
        if let Err(err) = &result {
            log::warn!("Initial identity query failed: {}", err);
        }

        if !self.is_alive() {
            log::debug!("Gate unmounted before identity query settled, dropping result");
            return;
        }

        self.apply(|model| model.resolve(result));
        log::debug!("Gate resolved to {:?}", self.inner.model.borrow().state());
    }

    /// Handle a "connected" notification from the prompt.
    ///
    /// The gate enters verification immediately, before the returned future is
    /// polled, so a dismiss delivered right after this call does not redirect.
    /// The future re-queries the identity. Notifications that arrive while a
    /// verification is in flight or after the gate is connected yield a no-op future.
    pub fn connected(&self) -> impl Future<Output = ()> + 'static {
        let started = self.is_alive() && self.apply(|model| model.begin_verification());
        let this = self.clone();

        async move {
            if !started {
                log::debug!("Ignoring connected notification");
                return;
            }

            let result = this.inner.wallet.identity().await;
            if let Err(err) = &result {
                log::warn!("Identity re-query after connect failed: {}", err);
            }

            if !this.is_alive() {
                log::debug!("Gate unmounted during verification, dropping result");
                return;
            }

            this.apply(|model| model.finish_verification(result));
            log::debug!("Gate verification finished in {:?}", this.inner.model.borrow().state());
        }
    }

    /// Handle a dismiss of the prompt, redirecting when the model says so.
    pub fn dismiss(&self) -> DismissEffect {
        if !self.is_alive() {
            return DismissEffect::Ignored;
        }

        let effect = self
            .inner
            .model
            .borrow_mut()
            .dismiss(&self.inner.redirect_route);

        if effect != DismissEffect::Ignored {
            self.notify();
        }

        if let DismissEffect::Redirect(route) = &effect {
            log::info!("Wallet prompt dismissed, redirecting to {}", route);
            self.inner.navigator.redirect(route);
        }

        effect
    }

    /// Stop applying results. Pending queries still settle but are discarded.
    pub fn unmount(&self) {
        self.inner.alive.set(false);
    }

    fn apply(&self, update: impl FnOnce(&mut GateModel) -> bool) -> bool {
        let changed = update(&mut self.inner.model.borrow_mut());
        if changed {
            self.notify();
        }
        changed
    }

    fn notify(&self) {
        let snapshot = self.model();
        if let Some(listener) = self.inner.listener.borrow().as_ref() {
            listener(&snapshot);
        }
    }
}

/// Owning handle for a mounted gate; unmounts the controller on drop.
pub struct MountedGate<W, N>
where
    W: WalletCapability + 'static,
    N: Navigator + 'static,
{
    controller: GateController<W, N>,
}

impl<W, N> MountedGate<W, N>
where
    W: WalletCapability + 'static,
    N: Navigator + 'static,
{
    pub fn new(controller: GateController<W, N>) -> Self {
        Self { controller }
    }

    pub fn controller(&self) -> GateController<W, N> {
        self.controller.clone()
    }
}

impl<W, N> Deref for MountedGate<W, N>
where
    W: WalletCapability + 'static,
    N: Navigator + 'static,
{
    type Target = GateController<W, N>;

    fn deref(&self) -> &Self::Target {
        &self.controller
    }
}

impl<W, N> Drop for MountedGate<W, N>
where
    W: WalletCapability + 'static,
    N: Navigator + 'static,
{
    fn drop(&mut self) {
        self.controller.unmount();
    }
}
