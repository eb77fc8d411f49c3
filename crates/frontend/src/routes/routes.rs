use crate::domain::a001_invoice::ui::details::InvoiceDetails;
use crate::domain::a001_invoice::ui::list::InvoiceList;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <main class="page-container">
                <Routes fallback=|| view! { <div class="page">"Page not found"</div> }>
                    <Route path=path!("/") view=InvoiceList />
                    <Route path=path!("/create") view=InvoiceDetails />
                </Routes>
            </main>
        </Router>
    }
}
