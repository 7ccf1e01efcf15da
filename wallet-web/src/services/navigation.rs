//! Router-backed navigation for the gate

use std::rc::Rc;

use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use lib_gate::Navigator;

/// Navigator that pushes routes through the Leptos router.
#[derive(Clone)]
pub struct RouterNavigator {
    navigate: Rc<dyn Fn(&str)>,
}

impl RouterNavigator {
    /// Capture the router's navigate function. Must run inside `<Router>`.
    pub fn from_router() -> Self {
        let navigate = use_navigate();
        Self {
            navigate: Rc::new(move |route| navigate(route, NavigateOptions::default())),
        }
    }
}

impl Navigator for RouterNavigator {
    fn redirect(&self, route: &str) {
        (self.navigate)(route);
    }
}
