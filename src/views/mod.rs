//! JSON view models the host UI renders from.

pub mod account;
pub mod pricing;
