// src/views/mod.rs

pub mod error;
pub mod introduction;
pub mod layout;
pub mod results;
pub mod section;
