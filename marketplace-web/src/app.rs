//! Root component: contexts, navbar, toasts and routes.

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes, A},
    path,
};

use crate::components::{Navbar, Toasts};
use crate::pages::{ExplorePage, HomePage};
use crate::state::connection::provide_connection_context;
use crate::state::notifications::provide_notifications;
use crate::state::wallet::provide_wallet_context;

#[component]
pub fn App() -> impl IntoView {
    // Order matters: the wallet session needs the endpoint and the toast sink
    let connection = provide_connection_context();
    let notifications = provide_notifications();
    provide_wallet_context(connection, notifications);

    view! {
        <Router>
            <div class="app-container">
                <Navbar/>
                <Toasts/>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/explore") view=ExplorePage/>
                </Routes>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="app-container" style="display: flex; justify-content: center; align-items: center; min-height: calc(100vh - 60px);">
            <div class="card" style="max-width: 500px; text-align: center;">
                <h1 style="margin-bottom: 16px; font-size: 32px; font-weight: 700;">"404 - Page Not Found"</h1>
                <p style="margin-bottom: 24px;">"The page you're looking for doesn't exist."</p>
                <A href="/">
                    <span class="btn" style="margin-top: 20px; display: inline-block;">
                        "Go to Home"
                    </span>
                </A>
            </div>
        </div>
    }
}
