use super::view_model::InvoiceDetailsViewModel;
use crate::domain::a001_invoice::navigation::{is_view_flag, LIST_PATH};
use crate::shared::components::ui::Select;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use contracts::domain::a001_invoice::status::InvoiceStatus;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn InvoiceDetails() -> impl IntoView {
    let vm = InvoiceDetailsViewModel::new(use_notifications());
    let query = use_query_map();
    let navigate = use_navigate();

    let saved = RwSignal::new(false);
    Effect::new(move |_| {
        if saved.get() {
            navigate(LIST_PATH, Default::default());
        }
    });

    let view_only = Memo::new(move |_| query.with(|q| is_view_flag(q.get("view").as_deref())));

    // Re-runs when the query changes without leaving the route
    Effect::new(move |_| {
        let id = query.with(|q| q.get("invoiceId"));
        vm.load(id);
    });

    let title = move || {
        if view_only.get() {
            "Invoice Details"
        } else if vm.is_edit_mode() {
            "Edit Invoice"
        } else {
            "Create Invoice"
        }
    };

    let status_options: Vec<(String, String)> = InvoiceStatus::all()
        .into_iter()
        .map(|s| (s.as_str().to_string(), s.as_str().to_string()))
        .collect();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{icon("invoices")}{title}</h1>
                    {move || vm.loading.get().then(|| view! { <Spinner size=SpinnerSize::Small /> })}
                </div>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                {move || vm.form.with(|f| f.custom_id).map(|custom_id| view! {
                    <div class="form-group">
                        <label>{"Invoice #"}</label>
                        <span class="form-group__value">{custom_id}</span>
                    </div>
                })}

                <div class="form-group">
                    <label for="issue_date">{"Issue Date"}</label>
                    <input
                        type="date"
                        id="issue_date"
                        disabled=move || view_only.get()
                        prop:value=move || vm.form.with(|f| f.issue_date.clone())
                        on:input=move |ev| vm.form.update(|f| f.issue_date = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="customer_name">{"Customer Name"}</label>
                    <input
                        type="text"
                        id="customer_name"
                        disabled=move || view_only.get()
                        prop:value=move || vm.form.with(|f| f.customer_name.clone())
                        on:input=move |ev| vm.form.update(|f| f.customer_name = event_target_value(&ev))
                        placeholder="Customer name"
                    />
                </div>

                <div class="form-group">
                    <label for="total_cost">{"Total Payment"}</label>
                    <input
                        type="number"
                        id="total_cost"
                        min="0"
                        step="0.01"
                        disabled=move || view_only.get()
                        prop:value=move || vm.form.with(|f| f.total_cost.clone())
                        on:input=move |ev| vm.form.update(|f| f.total_cost = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="status">{"Status"}</label>
                    <Select
                        id="status".to_string()
                        value=Signal::derive(move || vm.form.with(|f| f.status.clone()))
                        options=status_options
                        placeholder=String::new()
                        disabled=Signal::derive(move || view_only.get())
                        on_change=Callback::new(move |label: String| vm.form.update(|f| f.status = label))
                    />
                </div>
            </div>

            <div class="details-actions">
                <Show when=move || !view_only.get()>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || vm.saving.get() || !vm.is_form_valid())
                        on_click=move |_| vm.save_command(move || saved.set(true))
                    >
                        {icon("save")}
                        {move || if vm.is_edit_mode() { "Save" } else { "Create" }}
                    </Button>
                </Show>
                <a class="button button--secondary" href=LIST_PATH>
                    {icon("cancel")}
                    {move || if view_only.get() { "Back" } else { "Cancel" }}
                </a>
            </div>
        </div>
    }
}
