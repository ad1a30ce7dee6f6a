pub mod catalog_store;
pub mod filter;
pub mod models;
pub mod paginator;

#[cfg(test)]
mod catalog_store_test;
