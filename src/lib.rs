//! GZ Movement backend: plan catalog, entitlement resolution and hosted
//! checkout, served as a small JSON API.

pub mod catalog;
pub mod checkout;
pub mod config;
pub mod content;
pub mod controllers;
pub mod entitlement;
pub mod error;
pub mod routers;
pub mod server;
pub mod supabase;
pub mod types;
pub mod utilities;
pub mod views;
