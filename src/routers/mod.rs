pub mod content;
pub mod me;
pub mod public;
