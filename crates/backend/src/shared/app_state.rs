use std::sync::{Arc, Mutex};

use crate::domain::a001_invoice::custom_id::CustomIdSource;
use crate::domain::a001_invoice::store::InvoiceStore;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub invoices: Arc<dyn InvoiceStore>,
    pub custom_ids: Arc<Mutex<Box<dyn CustomIdSource>>>,
    /// See `InvoiceConfig::custom_id_retries`
    pub custom_id_retries: u32,
}

impl AppState {
    pub fn new(
        invoices: Arc<dyn InvoiceStore>,
        custom_ids: Box<dyn CustomIdSource>,
        custom_id_retries: u32,
    ) -> Self {
        Self {
            invoices,
            custom_ids: Arc::new(Mutex::new(custom_ids)),
            custom_id_retries,
        }
    }
}
