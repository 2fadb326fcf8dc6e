//! Library exports for text2kv, shared between the binary and tests.

pub mod config;
pub mod pages;
pub mod request;
pub mod response;
pub mod routes;
pub mod startup;
pub mod state;
pub mod store;
pub mod utils;
