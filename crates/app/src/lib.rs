//! Storefront application: API services, checkout orchestration, cart persistence, views and
//! configuration used by the `storefront` CLI.

pub mod api;
pub mod config;
pub mod context;
pub mod domain;
pub mod observability;
pub mod storage;
pub mod views;
