//! Route handlers

pub mod gallery;
pub mod generate;
pub mod health;
pub mod items;
