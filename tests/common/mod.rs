//! Shared test fixtures and utilities

pub mod database;
