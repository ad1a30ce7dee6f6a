pub mod catalog_client;
pub mod debouncer;
pub mod search_service;

#[cfg(test)]
mod catalog_client_test;
