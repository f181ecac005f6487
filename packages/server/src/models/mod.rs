pub mod demo;
pub mod shared;
