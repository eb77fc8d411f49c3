use super::form::InvoiceForm;
use crate::domain::a001_invoice::api;
use crate::shared::notifications::Notifications;
use leptos::prelude::*;

/// ViewModel for the invoice details page
#[derive(Clone, Copy)]
pub struct InvoiceDetailsViewModel {
    pub form: RwSignal<InvoiceForm>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    notifications: Notifications,
}

impl InvoiceDetailsViewModel {
    pub fn new(notifications: Notifications) -> Self {
        Self {
            form: RwSignal::new(InvoiceForm::default()),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
            notifications,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.is_edit_mode())
    }

    pub fn is_form_valid(&self) -> bool {
        self.form.with(|f| f.validate().is_ok())
    }

    /// Reset to an empty form, or load the invoice when an id is given
    pub fn load(&self, id: Option<String>) {
        self.error.set(None);
        let Some(id) = id else {
            self.form.set(InvoiceForm::default());
            return;
        };

        let this = *self;
        this.loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_by_id(&id).await {
                Ok(invoice) => this.form.set(InvoiceForm::from_invoice(&invoice)),
                Err(e) => {
                    log::error!("Error loading invoice {}: {}", id, e);
                    this.error.set(Some(format!("Failed to load invoice: {}", e)));
                    this.notifications.error("Failed to load invoice");
                }
            }
            this.loading.set(false);
        });
    }

    /// Validate, then create or update depending on the form's id
    pub fn save_command<F>(&self, on_saved: F)
    where
        F: Fn() + 'static,
    {
        let current = self.form.get_untracked();
        let draft = match current.to_draft() {
            Ok(draft) => draft,
            Err(e) => {
                self.error.set(Some(e));
                return;
            }
        };
        self.error.set(None);

        let this = *self;
        this.saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = match &current.id {
                Some(id) => api::update(id, draft).await,
                None => api::create(&draft).await,
            };
            this.saving.set(false);
            match result {
                Ok(saved) => {
                    let message = if current.is_edit_mode() {
                        "Invoice updated successfully"
                    } else {
                        "Invoice created successfully"
                    };
                    log::info!("Saved invoice {}", saved.custom_id);
                    this.notifications.success(message);
                    on_saved();
                }
                Err(e) => {
                    log::error!("Error saving invoice: {}", e);
                    this.error.set(Some(e));
                    this.notifications.error("Failed to save invoice");
                }
            }
        });
    }
}
