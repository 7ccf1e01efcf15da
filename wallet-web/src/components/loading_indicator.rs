//! Loading Indicator - spinner shown while the wallet status is unknown

use leptos::prelude::*;

#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="gate-loading">
            <div class="gate-spinner" role="status" aria-label="Loading"></div>
        </div>
    }
}
