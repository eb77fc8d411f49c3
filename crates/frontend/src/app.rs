use crate::routes::routes::AppRoutes;
use crate::shared::notifications::{NotificationHost, Notifications};
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Toast-style notifications shared by every page
    provide_context(Notifications::new());

    view! {
        <ConfigProvider>
            <AppRoutes />
            <NotificationHost />
        </ConfigProvider>
    }
}
