//! chromadist - color distance toolkit
//!
//! Compare and rank colors with the interchangeable metrics from
//! `color-metrics`. This library exposes modules for the CLI and for
//! integration testing.

pub mod error;
pub mod models;
pub mod services;
