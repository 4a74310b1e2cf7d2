//! Step definitions for generation scenarios.

use anyhow::{Result, anyhow, ensure};
use augmentor::{CollisionPolicy, Generator, MemorySink};
use rstest_bdd_macros::{given, then, when};
use test_helpers::text::{split_list, unquote};
use test_helpers::trees;

use crate::fixtures::GenerationState;

#[given("a partial class {class} inside namespace {namespace}")]
fn class_in_namespace(
    generation_state: &GenerationState,
    class: String,
    namespace: String,
) -> Result<()> {
    let tree = trees::class_in_namespace(unquote(&namespace), unquote(&class))?;
    generation_state.tree.set(tree);
    Ok(())
}

#[given("a top-level partial class {class}")]
fn top_level_class(generation_state: &GenerationState, class: String) -> Result<()> {
    generation_state
        .tree
        .set(trees::top_level_class(unquote(&class))?);
    Ok(())
}

#[given("a partial class {class} nested in class Outer of namespace {namespace}")]
fn nested_class(
    generation_state: &GenerationState,
    class: String,
    namespace: String,
) -> Result<()> {
    let tree = trees::nested_class(unquote(&namespace), unquote(&class))?;
    generation_state.tree.set(tree);
    Ok(())
}

#[given("a namespace {namespace} without marked declarations")]
fn unmarked_namespace(generation_state: &GenerationState, namespace: String) -> Result<()> {
    generation_state
        .tree
        .set(trees::unmarked(unquote(&namespace))?);
    Ok(())
}

#[given("a partial class {class} in each of namespaces {namespaces}")]
fn class_in_each(
    generation_state: &GenerationState,
    class: String,
    namespaces: String,
) -> Result<()> {
    let names = split_list(&namespaces);
    let borrowed: Vec<&str> = names.iter().map(String::as_str).collect();
    let tree = trees::same_class_in(&borrowed, unquote(&class))?;
    generation_state.tree.set(tree);
    Ok(())
}

#[given("the sink rejects duplicate keys")]
fn sink_rejects(generation_state: &GenerationState) {
    generation_state.policy.set(CollisionPolicy::Reject);
}

#[when("the generator runs")]
fn generator_runs(generation_state: &GenerationState) -> Result<()> {
    let policy = generation_state
        .policy
        .with_ref(|policy| *policy)
        .unwrap_or_default();
    let tree = generation_state
        .tree
        .with_ref(Clone::clone)
        .ok_or_else(|| anyhow!("a tree must be built before the generator runs"))?;
    let mut sink = MemorySink::new(policy);
    match Generator::default().run(&tree, &mut sink) {
        Ok(report) => {
            generation_state.report.set(report);
        }
        Err(err) => {
            generation_state.failure.set(err.to_string());
        }
    }
    generation_state.sink.set(sink);
    Ok(())
}

#[then("the fragment count is {count}")]
fn fragment_count(generation_state: &GenerationState, count: usize) -> Result<()> {
    let actual = generation_state
        .report
        .with_ref(|report| report.entries.len())
        .ok_or_else(|| anyhow!("the generator run did not produce a report"))?;
    ensure!(actual == count, "expected {count} fragments, got {actual}");
    Ok(())
}

fn fragment_text(generation_state: &GenerationState, key: &str) -> Result<String> {
    generation_state
        .sink
        .with_ref(|sink| sink.get(key).map(str::to_owned))
        .flatten()
        .ok_or_else(|| anyhow!("no fragment registered under {key}"))
}

#[then("fragment {key} declares namespace {namespace}")]
fn declares_namespace(
    generation_state: &GenerationState,
    key: String,
    namespace: String,
) -> Result<()> {
    let text = fragment_text(generation_state, unquote(&key))?;
    let expected = format!("\nnamespace {}\n{{\n", unquote(&namespace));
    ensure!(text.contains(&expected), "fragment text was:\n{text}");
    Ok(())
}

#[then("fragment {key} adds method {method}")]
fn adds_method(generation_state: &GenerationState, key: String, method: String) -> Result<()> {
    let text = fragment_text(generation_state, unquote(&key))?;
    let expected = format!("public void {}()", unquote(&method));
    ensure!(text.contains(&expected), "fragment text was:\n{text}");
    Ok(())
}

#[then("the pass fails with a collision on {key}")]
fn fails_with_collision(generation_state: &GenerationState, key: String) -> Result<()> {
    let failure = generation_state
        .failure
        .with_ref(Clone::clone)
        .ok_or_else(|| anyhow!("the generator run was expected to fail"))?;
    let expected = format!("fragment key '{}'", unquote(&key));
    ensure!(failure.contains(&expected), "unexpected failure: {failure}");
    Ok(())
}
