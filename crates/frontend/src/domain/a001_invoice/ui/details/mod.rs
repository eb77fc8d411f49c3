//! Invoice Details UI Module
//!
//! Create, edit and read-only view share one page:
//! - form.rs: editable field values and validation
//! - view_model.rs: ViewModel with commands and state management
//! - view.rs: Leptos component (pure UI)

mod form;
mod view;
mod view_model;

pub use form::InvoiceForm;
pub use view::InvoiceDetails;
pub use view_model::InvoiceDetailsViewModel;
