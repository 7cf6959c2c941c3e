// src/analysis/eligibility.rs
//! Decides whether a type declaration is analyzed at all.

use crate::syntax::TypeDeclaration;

/// Why a declaration was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skip {
    /// Interfaces and enums carry no instance state.
    NotClassLike,
    Abstract,
    /// Terminated by `;` (positional record or bodiless alias form).
    Bodiless,
    Generated,
}

/// Returns `Some(reason)` when the declaration must not be analyzed.
#[must_use]
pub fn skip_reason(decl: &TypeDeclaration) -> Option<Skip> {
    if !decl.kind.is_analyzable() {
        return Some(Skip::NotClassLike);
    }
    if decl.modifiers.is_abstract() {
        return Some(Skip::Abstract);
    }
    if decl.terminated {
        return Some(Skip::Bodiless);
    }
    if decl.generated {
        return Some(Skip::Generated);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{Location, Modifiers, TypeKind};

    fn decl(kind: TypeKind) -> TypeDeclaration {
        TypeDeclaration::new(kind, "T", Location::new(1, 1))
    }

    #[test]
    fn test_plain_class_is_analyzed() {
        assert_eq!(skip_reason(&decl(TypeKind::Class)), None);
        assert_eq!(skip_reason(&decl(TypeKind::Struct)), None);
        assert_eq!(skip_reason(&decl(TypeKind::Record)), None);
    }

    #[test]
    fn test_abstract_is_skipped() {
        let mut d = decl(TypeKind::Class);
        d.modifiers = Modifiers::from_keywords(["public", "abstract"]);
        assert_eq!(skip_reason(&d), Some(Skip::Abstract));
    }

    #[test]
    fn test_terminated_is_skipped() {
        let mut d = decl(TypeKind::Record);
        d.terminated = true;
        assert_eq!(skip_reason(&d), Some(Skip::Bodiless));
    }

    #[test]
    fn test_interface_is_skipped() {
        assert_eq!(skip_reason(&decl(TypeKind::Interface)), Some(Skip::NotClassLike));
    }
}
