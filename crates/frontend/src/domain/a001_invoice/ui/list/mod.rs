//! Invoice list page
//!
//! - state.rs: page state (rows, delete workflow, per-row status edits)
//! - view.rs: Leptos component

mod state;
mod view;

pub use state::{DeleteFlow, InvoiceListState, InvoiceRow, StatusEdit, COLUMNS, FETCH_FAILED_NOTICE};
pub use view::InvoiceList;
