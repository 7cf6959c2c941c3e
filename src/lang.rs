// src/lang.rs
//! Source-language front-ends that build [`crate::syntax`] models.

pub mod csharp;
pub mod generated;

use tree_sitter::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    CSharp,
}

impl Lang {
    #[must_use]
    pub fn from_ext(ext: &str) -> Option<Self> {
        match ext {
            "cs" => Some(Self::CSharp),
            _ => None,
        }
    }

    #[must_use]
    pub fn from_path(path: &std::path::Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_ext)
    }

    #[must_use]
    pub fn grammar(self) -> Language {
        match self {
            Self::CSharp => tree_sitter_c_sharp::LANGUAGE.into(),
        }
    }
}
