// src/analysis/classifier.rs
//! Splits a type's members into state items and behavior units.

use crate::syntax::{FieldDecl, Member, MethodDecl, PropertyDecl, PropertyKind, TypeDeclaration};

/// A data-holding member: an instance field name or an auto property name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateItem {
    pub name: String,
}

/// The source text of one executable unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BehaviorUnit {
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub state: Vec<StateItem>,
    pub behavior: Vec<BehaviorUnit>,
}

/// Shape of a member as far as cohesion is concerned.
#[derive(Debug, Clone, Copy)]
pub enum MemberKind<'a> {
    /// Instance field (neither `static` nor `const`).
    Field(&'a FieldDecl),
    /// Instance property whose accessors have no bodies.
    AutoProperty(&'a PropertyDecl),
    /// Instance property, indexer or event with at least one accessor body.
    ExplicitAccessorProperty(&'a PropertyDecl),
    /// Instance property or indexer with an expression body and no accessor list.
    ExpressionBodiedProperty(&'a PropertyDecl),
    /// Instance method, constructor, destructor, operator or conversion.
    Method(&'a MethodDecl),
    NestedType(&'a TypeDeclaration),
    /// Static, const, or otherwise irrelevant.
    Ignored,
}

impl<'a> MemberKind<'a> {
    #[must_use]
    pub fn of(member: &'a Member) -> Self {
        match member {
            Member::Field(field) => {
                if field.modifiers.is_static() || field.modifiers.is_const() {
                    Self::Ignored
                } else {
                    Self::Field(field)
                }
            }
            Member::Property(prop) => Self::of_property(prop),
            Member::Method(method) => {
                if method.modifiers.is_static() {
                    Self::Ignored
                } else {
                    Self::Method(method)
                }
            }
            Member::NestedType(nested) => Self::NestedType(nested),
            Member::Other => Self::Ignored,
        }
    }

    fn of_property(prop: &'a PropertyDecl) -> Self {
        if prop.modifiers.is_static() {
            return Self::Ignored;
        }
        match (&prop.accessors, prop.is_auto_implemented()) {
            (None, _) => Self::ExpressionBodiedProperty(prop),
            // Only plain properties store data; an auto indexer or event has no name to track.
            (Some(_), true) if prop.kind == PropertyKind::Property => Self::AutoProperty(prop),
            (Some(_), true) => Self::Ignored,
            (Some(_), false) => Self::ExplicitAccessorProperty(prop),
        }
    }
}

/// Classifies every member of `decl`, including members of nested types.
///
/// State lists fields before auto properties; behavior lists methods before
/// accessors. Each group keeps source order.
#[must_use]
pub fn classify(decl: &TypeDeclaration) -> Classification {
    let mut walk = Walk::default();
    walk.visit(decl);

    let mut state = walk.fields;
    state.extend(walk.auto_properties);
    let mut behavior = walk.methods;
    behavior.extend(walk.accessors);

    Classification { state, behavior }
}

#[derive(Default)]
struct Walk {
    fields: Vec<StateItem>,
    auto_properties: Vec<StateItem>,
    methods: Vec<BehaviorUnit>,
    accessors: Vec<BehaviorUnit>,
}

impl Walk {
    fn visit(&mut self, decl: &TypeDeclaration) {
        for member in &decl.members {
            self.visit_member(member);
        }
    }

    fn visit_member(&mut self, member: &Member) {
        match MemberKind::of(member) {
            MemberKind::Field(field) => {
                self.fields
                    .extend(field.names.iter().map(|name| StateItem { name: name.clone() }));
            }
            MemberKind::AutoProperty(prop) => {
                self.auto_properties.push(StateItem {
                    name: prop.name.clone(),
                });
            }
            MemberKind::ExplicitAccessorProperty(prop) => {
                let accessors = prop.accessors.iter().flatten();
                self.accessors.extend(accessors.map(|a| BehaviorUnit {
                    text: a.text.clone(),
                }));
            }
            MemberKind::ExpressionBodiedProperty(prop) => {
                self.accessors.push(BehaviorUnit {
                    text: prop.text.clone(),
                });
            }
            MemberKind::Method(method) => {
                self.methods.push(BehaviorUnit {
                    text: method.text.clone(),
                });
            }
            MemberKind::NestedType(nested) => self.visit(nested),
            MemberKind::Ignored => {}
        }
    }
}
