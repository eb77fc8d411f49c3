pub mod a001_invoice;
