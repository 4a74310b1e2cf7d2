//! Fragment synthesis.
//!
//! A [`Synthesizer`] turns each scanned declaration into a [`Fragment`]: the
//! companion source text plus the key under which a sink registers it.

mod template;

pub use template::{TemplateContext, render};

use serde::{Deserialize, Serialize};

use crate::error::{AugmentError, Result};
use crate::ident::{check_identifier, check_identifier_path};
use crate::scan::Declaration;
use crate::syntax::{NodeKind, SyntaxView};

/// Container used when a declaration has no namespace parent.
pub const DEFAULT_FALLBACK_CONTAINER: &str = "Global";
/// Suffix appended to a declaration name to form its fragment key.
pub const DEFAULT_KEY_SUFFIX: &str = "_generated";
/// Name of the generated method.
pub const DEFAULT_METHOD_NAME: &str = "HelloWorld";
/// Text printed by the generated method.
pub const DEFAULT_MESSAGE: &str = "Hello, World!";

/// Caller-provided values that parameterise the template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesisOptions {
    /// Container used when the immediate parent is not a namespace.
    pub fallback_container: String,
    /// Suffix appended to the declaration name to build the key.
    pub key_suffix: String,
    /// Generated method name.
    pub method_name: String,
    /// Text the generated method prints.
    pub message: String,
}

impl Default for SynthesisOptions {
    fn default() -> Self {
        Self {
            fallback_container: DEFAULT_FALLBACK_CONTAINER.to_owned(),
            key_suffix: DEFAULT_KEY_SUFFIX.to_owned(),
            method_name: DEFAULT_METHOD_NAME.to_owned(),
            message: DEFAULT_MESSAGE.to_owned(),
        }
    }
}

impl SynthesisOptions {
    /// Checks that every option can be interpolated without escaping.
    ///
    /// # Errors
    ///
    /// Returns [`AugmentError::InvalidInput`] for a fallback container that is
    /// not a dotted identifier path, a method name or key suffix that is not
    /// identifier text, or a message containing `"`, `\`, or a line break.
    pub fn validate(&self) -> Result<()> {
        check_identifier_path("fallback_container", &self.fallback_container)?;
        check_identifier("method_name", &self.method_name)?;
        if !self
            .key_suffix
            .chars()
            .all(|ch| ch.is_alphanumeric() || matches!(ch, '_' | '-' | '.'))
        {
            return Err(AugmentError::invalid_input(
                "key_suffix",
                self.key_suffix.as_str(),
                "expected letters, digits, '_', '-', or '.'",
            ));
        }
        if self
            .message
            .chars()
            .any(|ch| matches!(ch, '"' | '\\' | '\n' | '\r'))
        {
            return Err(AugmentError::invalid_input(
                "message",
                self.message.as_str(),
                "must not contain quotes, backslashes, or line breaks",
            ));
        }
        Ok(())
    }
}

/// A synthesized unit of source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fragment {
    /// Registration key (`<name><suffix>`).
    pub key: String,
    /// Rendered source text.
    pub text: String,
    /// Container the text re-opens the declaration in.
    pub container: String,
    /// Declaration name.
    pub name: String,
    /// Declaration kind.
    pub kind: NodeKind,
}

/// Renders [`Fragment`]s from scanned declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Synthesizer {
    options: SynthesisOptions,
}

impl Synthesizer {
    /// Creates a synthesizer after validating `options`.
    ///
    /// # Errors
    ///
    /// Propagates [`SynthesisOptions::validate`] failures.
    pub fn new(options: SynthesisOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    /// Returns the active options.
    #[must_use]
    pub const fn options(&self) -> &SynthesisOptions {
        &self.options
    }

    /// Returns the fragment key for a declaration called `name`.
    #[must_use]
    pub fn key_for(&self, name: &str) -> String {
        format!("{name}{}", self.options.key_suffix)
    }

    /// Renders the fragment for `declaration`.
    ///
    /// The container is the name of the declaration's immediate parent when
    /// that parent is a namespace, and the fallback container otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`AugmentError::InvalidInput`] when the declaration has no
    /// valid identifier, is not a type declaration, or sits in a namespace
    /// whose name is not a dotted identifier path.
    pub fn synthesize<V: SyntaxView + ?Sized>(
        &self,
        declaration: &Declaration<'_, V>,
    ) -> Result<Fragment> {
        let name = declaration.name().unwrap_or_default();
        check_identifier("name", name)?;

        let kind = declaration
            .kind()
            .ok_or(AugmentError::UnknownNode(declaration.id().to_raw()))?;
        let keyword = kind.type_keyword().ok_or_else(|| {
            AugmentError::invalid_input("kind", kind.as_str(), "expected a type declaration")
        })?;

        let container = declaration
            .container()
            .unwrap_or(&self.options.fallback_container);
        check_identifier_path("container", container)?;

        let text = render(&TemplateContext {
            container,
            keyword,
            name,
            method: &self.options.method_name,
            message: &self.options.message,
        });
        let fragment = Fragment {
            key: self.key_for(name),
            text,
            container: container.to_owned(),
            name: name.to_owned(),
            kind,
        };
        tracing::debug!(
            key = %fragment.key,
            container = %fragment.container,
            "synthesized fragment"
        );
        Ok(fragment)
    }
}

/// Renders `declaration` with the default options.
///
/// # Errors
///
/// See [`Synthesizer::synthesize`].
pub fn synthesize<V: SyntaxView + ?Sized>(declaration: &Declaration<'_, V>) -> Result<Fragment> {
    Synthesizer::default().synthesize(declaration)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::scan;
    use crate::syntax::SyntaxTree;
    use rstest::rstest;

    fn single(parent_is_namespace: bool, name: &str) -> Result<SyntaxTree> {
        let mut tree = SyntaxTree::new();
        let mut parent = tree.root();
        if parent_is_namespace {
            parent = tree.add_namespace(parent, "Acme")?;
        }
        tree.add_type(parent, NodeKind::Class, name, ["partial"])?;
        Ok(tree)
    }

    #[rstest]
    #[case(true, "Acme")]
    #[case(false, "Global")]
    fn container_derivation(#[case] in_namespace: bool, #[case] expected: &str) -> Result<()> {
        let tree = single(in_namespace, "Foo")?;
        let found = scan(&tree);
        let [declaration] = found.as_slice() else {
            panic!("expected exactly one declaration");
        };
        let fragment = synthesize(declaration)?;
        assert_eq!(fragment.container, expected);
        assert!(fragment.text.contains(&format!("namespace {expected}\n")));
        Ok(())
    }

    #[rstest]
    #[case("Foo", "Foo_generated")]
    #[case("_x", "_x_generated")]
    fn key_depends_only_on_the_name(#[case] name: &str, #[case] expected: &str) -> Result<()> {
        for in_namespace in [true, false] {
            let tree = single(in_namespace, name)?;
            let keys: Vec<_> = scan(&tree)
                .iter()
                .map(synthesize)
                .map(|fragment| fragment.map(|f| f.key))
                .collect::<Result<_>>()?;
            assert_eq!(keys, [expected]);
        }
        Ok(())
    }

    #[rstest]
    fn invalid_names_fail_fast() -> Result<()> {
        let tree = single(true, "not valid")?;
        let found = scan(&tree);
        let err = found
            .first()
            .map(synthesize)
            .expect("declaration should be found")
            .expect_err("invalid names are rejected");
        assert!(matches!(err, AugmentError::InvalidInput { what: "name", .. }));
        Ok(())
    }

    #[rstest]
    fn custom_options_flow_into_the_text() -> Result<()> {
        let synthesizer = Synthesizer::new(SynthesisOptions {
            fallback_container: "Root.Generated".to_owned(),
            key_suffix: ".g".to_owned(),
            method_name: "Greet".to_owned(),
            message: "Bonjour".to_owned(),
        })?;
        let tree = single(false, "Bar")?;
        let found = scan(&tree);
        let fragment = found
            .first()
            .map(|d| synthesizer.synthesize(d))
            .expect("declaration should be found")?;
        assert_eq!(fragment.key, "Bar.g");
        assert!(fragment.text.contains("namespace Root.Generated\n"));
        assert!(fragment.text.contains("public void Greet()"));
        assert!(fragment.text.contains("Console.WriteLine(\"Bonjour\");"));
        Ok(())
    }

    #[rstest]
    #[case::quote("message", "say \"hi\"")]
    #[case::newline("message", "a\nb")]
    #[case::method("method_name", "Hello World")]
    #[case::fallback("fallback_container", "")]
    #[case::suffix("key_suffix", "/x")]
    fn options_that_need_escaping_are_rejected(#[case] field: &str, #[case] value: &str) {
        let mut options = SynthesisOptions::default();
        let slot = match field {
            "message" => &mut options.message,
            "method_name" => &mut options.method_name,
            "fallback_container" => &mut options.fallback_container,
            _ => &mut options.key_suffix,
        };
        value.clone_into(slot);
        match Synthesizer::new(options) {
            Err(AugmentError::InvalidInput { what, .. }) => assert_eq!(what, field),
            other => panic!("expected InvalidInput for {field}, got {other:?}"),
        }
    }
}
