//! Symbol records handed to the grouping engine by an extractor.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Declaration kind of an exported symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolKind {
    Function,
    Method,
    Type,
    Const,
    Var,
}

impl SymbolKind {
    /// Keyword used in violation messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Function | Self::Method => "func",
            Self::Type => "type",
            Self::Const => "const",
            Self::Var => "var",
        }
    }

    /// Declarations grouped by their own identifier rather than by receiver + name.
    pub fn is_declared_identifier(self) -> bool {
        matches!(self, Self::Type | Self::Const | Self::Var)
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 1-based source position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// An exported declaration and the file it was found in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    /// Declared identifier
    pub name: String,
    /// Receiver type for methods, empty for free declarations
    #[serde(default)]
    pub owner_type: String,
    pub kind: SymbolKind,
    /// Path of the declaring source file
    #[serde(default)]
    pub declaring_file: PathBuf,
    #[serde(default)]
    pub position: Position,
    /// Package fallback pattern such as `service*.go`
    #[serde(default)]
    pub default_file: String,
    #[serde(default)]
    pub is_test: bool,
    /// First result type of a package-level function, as written (`*Vue`, `pkg.Vue`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<String>,
    /// Set when the receiver is an interface type
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub receiver_is_interface: bool,
}

impl Symbol {
    /// Create a free declaration of the given kind.
    pub fn new(name: impl Into<String>, kind: SymbolKind, declaring_file: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            owner_type: String::new(),
            kind,
            declaring_file: declaring_file.into(),
            position: Position::default(),
            default_file: String::new(),
            is_test: false,
            return_type: None,
            receiver_is_interface: false,
        }
    }

    /// Create a method declared on `owner`.
    pub fn method(
        owner: impl Into<String>,
        name: impl Into<String>,
        declaring_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            owner_type: owner.into(),
            ..Self::new(name, SymbolKind::Method, declaring_file)
        }
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner_type = owner.into();
        self
    }

    pub fn with_default_file(mut self, default_file: impl Into<String>) -> Self {
        self.default_file = default_file.into();
        self
    }

    pub fn with_position(mut self, line: usize, column: usize) -> Self {
        self.position = Position::new(line, column);
        self
    }

    pub fn with_return_type(mut self, return_type: impl Into<String>) -> Self {
        self.return_type = Some(return_type.into());
        self
    }

    /// Owner used for grouping.
    ///
    /// A package-level function without a receiver whose first result is an
    /// exported named type is grouped with that type, so `NewVue() *Vue`
    /// resolves like a method on `Vue`.
    pub fn effective_owner(&self) -> &str {
        if !self.owner_type.is_empty() {
            return base_type_name(&self.owner_type);
        }
        if self.kind == SymbolKind::Function {
            if let Some(returned) = self.return_type.as_deref().map(base_type_name) {
                if is_exported(returned) {
                    return returned;
                }
            }
        }
        ""
    }

    /// The `(name, owner)` pair the resolver works on.
    ///
    /// Types, constants and variables are grouped by their own identifier, so
    /// the identifier moves into the owner slot and the name is left empty.
    pub fn subject(&self) -> (&str, &str) {
        if self.kind.is_declared_identifier() && self.owner_type.is_empty() {
            ("", self.name.as_str())
        } else {
            (self.name.as_str(), self.effective_owner())
        }
    }

    /// Base name of the declaring file.
    pub fn file_name(&self) -> &str {
        file_name_of(&self.declaring_file)
    }

    /// `Owner.Name` or `Name`.
    pub fn qualified_name(&self) -> String {
        let owner = self.effective_owner();
        if owner.is_empty() {
            self.name.clone()
        } else {
            format!("{owner}.{}", self.name)
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.qualified_name())
    }
}

/// Go-style export check: the identifier starts with an upper-case letter
/// (any script, so `Über` counts).
pub fn is_exported(identifier: &str) -> bool {
    identifier.chars().next().is_some_and(char::is_uppercase)
}

/// Strip pointer markers, package qualifiers and type arguments from a type
/// expression: `*pkg.List[T]` becomes `List`.
pub fn base_type_name(type_expr: &str) -> &str {
    let trimmed = type_expr.trim().trim_start_matches('*').trim_start();
    let without_args = match trimmed.find('[') {
        Some(idx) => &trimmed[..idx],
        None => trimmed,
    };
    match without_args.rfind('.') {
        Some(idx) => &without_args[idx + 1..],
        None => without_args,
    }
}

pub(crate) fn file_name_of(path: &Path) -> &str {
    path.file_name().and_then(|n| n.to_str()).unwrap_or_default()
}
