//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::pages::{cart::CartPage, products::ProductsPage};
use crate::state::cart::CartStore;
use crate::state::catalog::CatalogStore;
use crate::util::storage::BrowserStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css"
                />
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the catalog and cart stores as shared contexts and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let catalog = RwSignal::new(CatalogStore::new(BrowserStorage));
    let cart = RwSignal::new(CartStore::new(BrowserStorage));
    provide_context(catalog);
    provide_context(cart);

    // Slots are read after hydration only, so server and first client render
    // agree on an empty catalog.
    Effect::new(move || {
        catalog.update(|store| store.load());
        cart.update(|store| store.load());
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront.css"/>
        <Title text="Storefront"/>

        <Router>
            <Navbar/>
            <main class="container">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=ProductsPage/>
                    <Route path=StaticSegment("cart") view=CartPage/>
                </Routes>
            </main>
        </Router>
    }
}
