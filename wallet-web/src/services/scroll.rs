//! Document body scroll lock

use lib_gate::{ScrollLock, ScrollTarget};

/// `document.body`, locked by setting `overflow: hidden`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BodyScroll;

impl ScrollTarget for BodyScroll {
    fn set_scroll_locked(&self, locked: bool) {
        let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        else {
            log::warn!("No document body, cannot change scroll lock");
            return;
        };

        let style = body.style();
        let result = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };

        if let Err(e) = result {
            log::warn!("Failed to update body overflow: {:?}", e);
        }
    }
}

thread_local! {
    static BODY_LOCK: ScrollLock = ScrollLock::new(BodyScroll);
}

/// The page-wide body scroll lock shared by every modal.
pub fn body_scroll_lock() -> ScrollLock {
    BODY_LOCK.with(|lock| lock.clone())
}
