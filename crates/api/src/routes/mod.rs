//! Route Handlers

pub mod assess;
pub mod model;
pub mod pages;
