//! Scenario state shared between generation steps.

use augmentor::{CollisionPolicy, GenerationReport, MemorySink, SyntaxTree};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

/// Tree under test plus whatever the last generator run produced.
#[derive(Debug, Default, ScenarioState)]
pub struct GenerationState {
    pub tree: Slot<SyntaxTree>,
    pub policy: Slot<CollisionPolicy>,
    pub sink: Slot<MemorySink>,
    pub report: Slot<GenerationReport>,
    pub failure: Slot<String>,
}

/// Provides a clean state for each scenario.
#[fixture]
pub fn generation_state() -> GenerationState {
    GenerationState::default()
}
