// src/syntax.rs
//! Host-neutral model of a type declaration.
//!
//! Front-ends (see [`crate::lang`]) build these values from a concrete syntax
//! tree. The analysis pipeline only ever reads them, so it stays independent
//! of how the tree was produced.

use serde::Serialize;

/// 1-based source position of a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Declaration keywords the analysis cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    Abstract,
    Static,
    Const,
}

impl Modifier {
    /// Maps a modifier keyword. Anything else is irrelevant and yields `None`.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.trim() {
            "abstract" => Some(Self::Abstract),
            "static" => Some(Self::Static),
            "const" => Some(Self::Const),
            _ => None,
        }
    }
}

/// The modifier set of a declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Modifiers(Vec<Modifier>);

impl Modifiers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from raw keywords, dropping unknown ones.
    pub fn from_keywords<'a, I>(keywords: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut set = Self::new();
        for modifier in keywords.into_iter().filter_map(Modifier::from_keyword) {
            set.insert(modifier);
        }
        set
    }

    pub fn insert(&mut self, modifier: Modifier) {
        if !self.0.contains(&modifier) {
            self.0.push(modifier);
        }
    }

    #[must_use]
    pub fn contains(&self, modifier: Modifier) -> bool {
        self.0.contains(&modifier)
    }

    #[must_use]
    pub fn is_static(&self) -> bool {
        self.contains(Modifier::Static)
    }

    #[must_use]
    pub fn is_const(&self) -> bool {
        self.contains(Modifier::Const)
    }

    #[must_use]
    pub fn is_abstract(&self) -> bool {
        self.contains(Modifier::Abstract)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    Class,
    Struct,
    Record,
    Interface,
    Enum,
}

impl TypeKind {
    /// Only class-like kinds carry instance state worth measuring.
    #[must_use]
    pub fn is_analyzable(self) -> bool {
        matches!(self, Self::Class | Self::Struct | Self::Record)
    }
}

/// A class/struct/record-like declaration.
#[derive(Debug, Clone)]
pub struct TypeDeclaration {
    pub kind: TypeKind,
    pub name: String,
    pub modifiers: Modifiers,
    /// The declaration ends with a `;` token (e.g. `record Point(int X, int Y);`).
    pub terminated: bool,
    /// Set when the type is marked as generated code.
    pub generated: bool,
    pub members: Vec<Member>,
    pub location: Location,
}

impl TypeDeclaration {
    #[must_use]
    pub fn new(kind: TypeKind, name: &str, location: Location) -> Self {
        Self {
            kind,
            name: name.to_string(),
            modifiers: Modifiers::new(),
            terminated: false,
            generated: false,
            members: Vec::new(),
            location,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Member {
    Field(FieldDecl),
    Property(PropertyDecl),
    Method(MethodDecl),
    NestedType(TypeDeclaration),
    /// Member shapes without cohesion relevance (enum constants, delegates,
    /// event fields, ...).
    Other,
}

/// A field declaration; one declaration may introduce several names.
#[derive(Debug, Clone)]
pub struct FieldDecl {
    pub modifiers: Modifiers,
    pub names: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    Property,
    Indexer,
    Event,
}

/// A property, indexer, or event with accessors.
#[derive(Debug, Clone)]
pub struct PropertyDecl {
    pub kind: PropertyKind,
    pub modifiers: Modifiers,
    pub name: String,
    /// `None` for expression-bodied members (`int X => _x;`).
    pub accessors: Option<Vec<Accessor>>,
    /// Full declaration text.
    pub text: String,
}

impl PropertyDecl {
    /// An accessor list where no accessor has a block or expression body.
    #[must_use]
    pub fn is_auto_implemented(&self) -> bool {
        self.accessors
            .as_ref()
            .is_some_and(|list| list.iter().all(|a| !a.has_body))
    }
}

#[derive(Debug, Clone)]
pub struct Accessor {
    pub has_body: bool,
    pub text: String,
}

/// A method, constructor, destructor, operator or conversion operator.
#[derive(Debug, Clone)]
pub struct MethodDecl {
    pub modifiers: Modifiers,
    pub text: String,
}
