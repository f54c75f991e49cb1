use leptos::prelude::*;

use crate::routing::paths;

/// Rendered for any location the route table does not resolve.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"Page not found"</h1>
            <a href=paths::HOME>"Return home"</a>
        </div>
    }
}
