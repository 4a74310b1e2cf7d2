//! Binds the generation feature file to the step registry.

use crate::fixtures::{GenerationState, generation_state};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/generation.feature",
    fixtures = [generation_state: GenerationState]
);
