//! Node kinds recognised by the scanner and synthesizer.

use serde::{Deserialize, Serialize};

/// Kind tag carried by every syntax node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Root of a tree; exactly one per tree.
    CompilationUnit,
    /// Namespace-like container (`namespace`, `module`, `package`).
    Namespace,
    /// `class` declaration.
    Class,
    /// `struct` declaration.
    Struct,
    /// `interface` declaration.
    Interface,
    /// `record` declaration.
    Record,
    /// Method or function member.
    Method,
    /// Any node the pipeline does not interpret.
    Other,
}

impl NodeKind {
    /// Returns the keyword that declares this kind, for type declarations.
    #[must_use]
    pub const fn type_keyword(self) -> Option<&'static str> {
        match self {
            Self::Class => Some("class"),
            Self::Struct => Some("struct"),
            Self::Interface => Some("interface"),
            Self::Record => Some("record"),
            Self::CompilationUnit | Self::Namespace | Self::Method | Self::Other => None,
        }
    }

    /// Returns `true` for kinds that declare a type.
    #[must_use]
    pub const fn is_type_declaration(self) -> bool {
        self.type_keyword().is_some()
    }

    /// Returns `true` for namespace-like containers.
    #[must_use]
    pub const fn is_namespace(self) -> bool {
        matches!(self, Self::Namespace)
    }

    /// Returns `true` when nodes of this kind must carry an identifier.
    #[must_use]
    pub const fn requires_name(self) -> bool {
        matches!(self, Self::Namespace | Self::Method) || self.is_type_declaration()
    }

    /// Returns the serialized name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CompilationUnit => "compilation_unit",
            Self::Namespace => "namespace",
            Self::Class => "class",
            Self::Struct => "struct",
            Self::Interface => "interface",
            Self::Record => "record",
            Self::Method => "method",
            Self::Other => "other",
        }
    }
}
