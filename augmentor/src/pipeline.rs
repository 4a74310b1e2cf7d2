//! Scanner and synthesizer composed into one pass.

use serde::Serialize;

use crate::error::Result;
use crate::scan::{ScanRule, Scanner};
use crate::sink::{Encoding, FragmentSink};
use crate::synthesize::{Fragment, SynthesisOptions, Synthesizer};
use crate::syntax::{NodeKind, SyntaxView};

/// Runs a full scan-and-synthesize pass over a tree.
///
/// # Examples
///
/// ```
/// use augmentor::{Generator, MemorySink, NodeKind, SyntaxTree};
///
/// let mut tree = SyntaxTree::new();
/// let acme = tree.add_namespace(tree.root(), "Acme")?;
/// tree.add_type(acme, NodeKind::Class, "Foo", ["partial"])?;
///
/// let mut sink = MemorySink::default();
/// let report = Generator::default().run(&tree, &mut sink)?;
/// assert_eq!(report.keys().collect::<Vec<_>>(), ["Foo_generated"]);
/// assert!(sink.get("Foo_generated").is_some_and(|text| text.contains("HelloWorld")));
/// # Ok::<(), augmentor::AugmentError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Generator {
    scanner: Scanner,
    synthesizer: Synthesizer,
}

impl Generator {
    /// Builds a generator from a scan rule and synthesis options.
    ///
    /// # Errors
    ///
    /// Propagates [`SynthesisOptions::validate`] failures.
    pub fn new(rule: ScanRule, options: SynthesisOptions) -> Result<Self> {
        Ok(Self {
            scanner: Scanner::new(rule),
            synthesizer: Synthesizer::new(options)?,
        })
    }

    /// Returns the scanner.
    #[must_use]
    pub const fn scanner(&self) -> &Scanner {
        &self.scanner
    }

    /// Returns the synthesizer.
    #[must_use]
    pub const fn synthesizer(&self) -> &Synthesizer {
        &self.synthesizer
    }

    /// Synthesizes a fragment for every match in `view`, in scan order.
    ///
    /// # Errors
    ///
    /// Returns the first synthesis failure.
    pub fn fragments<V: SyntaxView + ?Sized>(&self, view: &V) -> Result<Vec<Fragment>> {
        self.scanner
            .candidates(view)
            .map(|declaration| self.synthesizer.synthesize(&declaration))
            .collect()
    }

    /// Synthesizes every match in `view` and registers each fragment with
    /// `sink` as soon as it is rendered.
    ///
    /// Duplicate keys are passed through; the sink's policy decides their
    /// fate.
    ///
    /// # Errors
    ///
    /// Stops at the first synthesis or sink failure.
    pub fn run<V, S>(&self, view: &V, sink: &mut S) -> Result<GenerationReport>
    where
        V: SyntaxView + ?Sized,
        S: FragmentSink + ?Sized,
    {
        let span = tracing::debug_span!("augment", marker = %self.scanner.rule().marker);
        let _entered = span.enter();

        let mut report = GenerationReport::default();
        for declaration in self.scanner.candidates(view) {
            let fragment = self.synthesizer.synthesize(&declaration)?;
            sink.register(&fragment.key, &fragment.text, Encoding::Utf8)?;
            report.entries.push(ReportEntry::from(&fragment));
        }
        tracing::info!(fragments = report.entries.len(), "generation pass complete");
        Ok(report)
    }
}

/// Summary of one fragment registered during a pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    /// Fragment key.
    pub key: String,
    /// Container the fragment re-opens the declaration in.
    pub container: String,
    /// Declaration name.
    pub name: String,
    /// Declaration kind.
    pub kind: NodeKind,
}

impl From<&Fragment> for ReportEntry {
    fn from(fragment: &Fragment) -> Self {
        Self {
            key: fragment.key.clone(),
            container: fragment.container.clone(),
            name: fragment.name.clone(),
            kind: fragment.kind,
        }
    }
}

/// Outcome of [`Generator::run`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    /// Registered fragments in registration order, duplicates included.
    pub entries: Vec<ReportEntry>,
}

impl GenerationReport {
    /// Iterates over registered keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.key.as_str())
    }

    /// Returns `true` when no fragment was registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AugmentError, SinkError};
    use crate::sink::{CollisionPolicy, MemorySink};
    use crate::syntax::SyntaxTree;
    use rstest::{fixture, rstest};

    #[fixture]
    fn twin_baz() -> SyntaxTree {
        let build = || -> Result<SyntaxTree> {
            let mut tree = SyntaxTree::new();
            let root = tree.root();
            let first = tree.add_namespace(root, "First")?;
            let second = tree.add_namespace(root, "Second")?;
            tree.add_type(first, NodeKind::Class, "Baz", ["partial"])?;
            tree.add_type(second, NodeKind::Class, "Baz", ["partial"])?;
            Ok(tree)
        };
        build().expect("fixture tree should build")
    }

    #[rstest]
    fn fragments_match_run_output(twin_baz: SyntaxTree) -> Result<()> {
        let generator = Generator::default();
        let fragments = generator.fragments(&twin_baz)?;
        let mut sink = MemorySink::default();
        let report = generator.run(&twin_baz, &mut sink)?;
        let from_fragments: Vec<_> = fragments.iter().map(ReportEntry::from).collect();
        assert_eq!(report.entries, from_fragments);
        Ok(())
    }

    #[rstest]
    fn duplicate_keys_reach_the_sink(twin_baz: SyntaxTree) -> Result<()> {
        let mut sink = MemorySink::new(CollisionPolicy::Overwrite);
        let report = Generator::default().run(&twin_baz, &mut sink)?;
        assert_eq!(report.keys().collect::<Vec<_>>(), ["Baz_generated", "Baz_generated"]);
        assert_eq!(sink.registrations(), 2);
        assert!(
            sink.get("Baz_generated")
                .is_some_and(|text| text.contains("namespace Second\n"))
        );
        Ok(())
    }

    #[rstest]
    fn rejecting_sinks_stop_the_pass(twin_baz: SyntaxTree) {
        let mut sink = MemorySink::new(CollisionPolicy::Reject);
        let err = Generator::default()
            .run(&twin_baz, &mut sink)
            .expect_err("second Baz is refused");
        assert!(matches!(err, AugmentError::Sink(SinkError::Collision(_))));
        assert_eq!(sink.len(), 1);
    }

    #[rstest]
    fn empty_trees_produce_empty_reports() -> Result<()> {
        let mut sink = MemorySink::default();
        let report = Generator::default().run(&SyntaxTree::new(), &mut sink)?;
        assert!(report.is_empty());
        assert!(sink.is_empty());
        Ok(())
    }
}
