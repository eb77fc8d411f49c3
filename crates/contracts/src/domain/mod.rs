pub mod a001_invoice;
pub mod common;
