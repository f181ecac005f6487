mod common;
mod health;
