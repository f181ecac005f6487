pub mod demo;
pub mod status;
