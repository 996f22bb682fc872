pub mod checkout;
pub mod content;
pub mod generic;
pub mod incoming_requests;
pub mod plan;
pub mod session;
pub mod subscription;
