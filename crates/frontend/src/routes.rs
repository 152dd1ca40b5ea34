use crate::catalog::page::CatalogPage;
use crate::detail::page::DetailPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// Two route surfaces: the landing catalog and the typed detail page.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <p class="route-fallback">"Page not found."</p> }>
                <Route path=path!("/") view=CatalogPage />
                <Route path=path!("/:kind/:id") view=DetailPage />
            </Routes>
        </Router>
    }
}
