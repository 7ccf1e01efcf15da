//! Browser environment detection
//!
//! Overlays portal into `document.body`, so they need a window, a document and
//! a body. This is checked once at startup; components read the result from
//! context instead of probing the DOM themselves.

use leptos::prelude::*;
use lib_gate::GateError;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::utils::constants::BOOT_SCREEN_ID;

/// Handles to the browser objects the app renders into.
pub struct Environment {
    document: Document,
    body: HtmlElement,
}

impl Environment {
    /// Probe window, document and body.
    pub fn detect() -> Result<Self, GateError> {
        let window = web_sys::window()
            .ok_or_else(|| GateError::Environment("no window available".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| GateError::Environment("no document available".to_string()))?;
        let body = document
            .body()
            .ok_or_else(|| GateError::Environment("document has no body".to_string()))?;

        Ok(Self { document, body })
    }

    pub fn body(&self) -> &HtmlElement {
        &self.body
    }

    /// Hide the static boot screen shown by `index.html` until the WASM loads.
    pub fn hide_boot_screen(&self) {
        let Some(element) = self.document.get_element_by_id(BOOT_SCREEN_ID) else {
            log::debug!("No boot screen element '{}'", BOOT_SCREEN_ID);
            return;
        };

        if let Some(html_element) = element.dyn_ref::<HtmlElement>() {
            if let Err(e) = html_element.class_list().add_1("hidden") {
                log::warn!("Failed to add 'hidden' class to boot screen: {:?}", e);
            }
        }

        // Also set display:none in case the stylesheet has not loaded yet
        if let Err(e) = element.set_attribute("style", "display: none !important;") {
            log::warn!("Failed to hide boot screen: {:?}", e);
        }
    }
}

/// Whether overlays have somewhere to render. Provided through context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderTarget {
    ready: bool,
}

impl RenderTarget {
    pub fn ready() -> Self {
        Self { ready: true }
    }

    pub fn unavailable() -> Self {
        Self { ready: false }
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }
}

impl From<&Result<Environment, GateError>> for RenderTarget {
    fn from(env: &Result<Environment, GateError>) -> Self {
        if env.is_ok() {
            Self::ready()
        } else {
            Self::unavailable()
        }
    }
}

pub fn provide_render_target(target: RenderTarget) {
    provide_context(target);
}

/// Missing context counts as "not ready".
pub fn render_target_ready() -> bool {
    use_context::<RenderTarget>()
        .map(|target| target.is_ready())
        .unwrap_or(false)
}
