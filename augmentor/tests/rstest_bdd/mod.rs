//! `rstest-bdd` harness for `augmentor`.
//!
//! Fixtures hold the per-scenario tree, sink, and outcome; steps drive the
//! generator; scenarios bind the feature files under `tests/features`.

mod fixtures;
mod scenarios;
mod steps;
