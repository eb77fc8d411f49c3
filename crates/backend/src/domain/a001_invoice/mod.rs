pub mod custom_id;
pub mod error;
pub mod repository;
pub mod service;
pub mod store;
