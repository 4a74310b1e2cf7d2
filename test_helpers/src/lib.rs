//! Test helpers shared across the augmentor workspace.
//!
//! [`trees`] builds the syntax trees behavioural and integration suites
//! scan, [`figment`] wraps `figment::Jail` for configuration layering tests,
//! and [`text`] normalises Gherkin placeholders.

pub mod figment;
pub mod text;
pub mod trees;
