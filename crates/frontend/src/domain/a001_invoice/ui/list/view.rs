use super::state::{InvoiceListState, COLUMNS};
use crate::domain::a001_invoice::api;
use crate::domain::a001_invoice::navigation::details_href;
use crate::shared::components::ui::Select;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use contracts::domain::a001_invoice::aggregate::Invoice;
use contracts::domain::a001_invoice::status::InvoiceStatus;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use thaw::*;

fn status_options() -> Vec<(String, String)> {
    InvoiceStatus::all()
        .into_iter()
        .map(|s| (s.as_str().to_string(), s.as_str().to_string()))
        .collect()
}

#[component]
#[allow(non_snake_case)]
pub fn InvoiceList() -> impl IntoView {
    let state = RwSignal::new(InvoiceListState::default());
    let notifications = use_notifications();

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_all().await {
                Ok(v) => state.update(|s| s.load_succeeded(v)),
                Err(e) => {
                    log::error!("Error fetching invoices: {}", e);
                    let mut notice = "";
                    state.update(|s| notice = s.load_failed());
                    notifications.error(notice);
                }
            }
        });
    };

    let change_status = move |id: String, label: String| {
        let mut status = None;
        state.update(|s| status = s.begin_status_change(&id, &label));
        let Some(status) = status else {
            return;
        };
        wasm_bindgen_futures::spawn_local(async move {
            match api::update_status(&id, status).await {
                Ok(_) => state.update(|s| s.status_change_succeeded(&id, &label)),
                Err(e) => {
                    log::error!("Error updating status of {}: {}", id, e);
                    state.update(|s| s.status_change_failed(&id, &label));
                    notifications.error(format!("Status not saved: {}", label));
                }
            }
        });
    };

    let confirm_delete = move || {
        let mut target = None;
        state.update(|s| target = s.confirm_delete());
        let Some(id) = target else {
            return;
        };
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete(&id).await {
                Ok(()) => {
                    state.update(|s| s.delete_finished(&id, true));
                    notifications.success("Invoice deleted successfully");
                }
                Err(e) => {
                    log::error!("Error deleting invoice {}: {}", id, e);
                    state.update(|s| s.delete_finished(&id, false));
                    notifications.error("Network Error");
                }
            }
        });
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{icon("invoices")}{Invoice::list_name()}</h1>
                </div>
                <div class="header__actions">
                    <a class="button button--primary" href=details_href(None, false)>
                        {icon("plus")}
                        {"Create +"}
                    </a>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                </div>
            </div>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {COLUMNS
                                .iter()
                                .map(|title| view! { <th class="table__header-cell">{*title}</th> })
                                .collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {move || state.with(|s| s.rows().to_vec()).into_iter().map(|row| {
                            let id = row.id.clone();
                            let id_for_status = id.clone();
                            let id_for_change = id.clone();
                            let id_for_failed = id.clone();
                            let id_for_delete = id.clone();
                            view! {
                                <tr class=move || {
                                    if state.with(|s| s.status_failed(&id_for_failed)) {
                                        "table__row table__row--error"
                                    } else {
                                        "table__row"
                                    }
                                }>
                                    <td class="table__cell">{row.custom_id}</td>
                                    <td class="table__cell">{row.issue_date}</td>
                                    <td class="table__cell">{row.customer_name}</td>
                                    <td class="table__cell">{row.total_cost}</td>
                                    <td class="table__cell">
                                        <Select
                                            value=Signal::derive(move || state.with(|s| s.displayed_status(&id_for_status)))
                                            options=status_options()
                                            placeholder=String::new()
                                            class="form__select--small".to_string()
                                            on_change=Callback::new(move |label: String| change_status(id_for_change.clone(), label))
                                        />
                                    </td>
                                    <td class="table__cell table__cell--actions">
                                        <a class="icon-button" title="View" href=details_href(Some(&id), true)>
                                            {icon("eye")}
                                        </a>
                                        <a class="icon-button" title="Edit" href=details_href(Some(&id), false)>
                                            {icon("edit")}
                                        </a>
                                        {move || {
                                            if state.with(|s| s.is_deleting(&id_for_delete)) {
                                                view! { <Spinner size=SpinnerSize::Small /> }.into_any()
                                            } else {
                                                let id = id_for_delete.clone();
                                                view! {
                                                    <button
                                                        class="icon-button"
                                                        title="Delete"
                                                        on:click=move |_| state.update(|s| s.request_delete(&id))
                                                    >
                                                        {icon("delete")}
                                                    </button>
                                                }
                                                .into_any()
                                            }
                                        }}
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <Show when=move || state.with(|s| s.dialog_open())>
                <div class="modal-overlay" on:click=move |_| state.update(|s| s.cancel_delete())>
                    <div class="modal" role="dialog" on:click=|ev| ev.stop_propagation()>
                        <h3 class="modal__title">"Confirm Deletion"</h3>
                        <p class="modal__text">
                            "Are you sure you want to delete this invoice? This action cannot be undone."
                        </p>
                        <div class="modal__actions">
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| state.update(|s| s.cancel_delete())
                            >
                                "Cancel"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| confirm_delete()
                            >
                                "Confirm"
                            </Button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
