//! HTTP request handlers

pub mod health;
pub mod journey;
