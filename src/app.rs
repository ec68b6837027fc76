use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::pages::home::Home;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| "not found">
                <Route path=path!("/") view=Home/>
            </Routes>
        </Router>
    }
}
