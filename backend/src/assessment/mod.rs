// src/assessment/mod.rs

pub mod controller;
pub mod progress;
pub mod question_bank;
pub mod scoring;
