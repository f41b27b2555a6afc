//! Extracurricular activity signups for Mergington High School.
//!
//! Activities live in an in-memory [`database::ActivityRegistry`] seeded at
//! startup; [`web::router`] exposes it as a small JSON API next to a static
//! landing page.

pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod services;
pub mod web;
