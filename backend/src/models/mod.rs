// src/models/mod.rs

pub mod answer;
pub mod question;
pub mod result;
pub mod section;
pub mod session;
