// src/lang/csharp.rs
//! C# front-end: tree-sitter syntax tree to [`TypeDeclaration`] models.

use tree_sitter::{Node, Parser};

use super::Lang;
use crate::error::{LcomError, Result};
use crate::syntax::{
    Accessor, FieldDecl, Location, Member, MethodDecl, Modifiers, PropertyDecl,
    PropertyKind, TypeDeclaration, TypeKind,
};

/// Parses a compilation unit and returns every class, struct and record
/// declaration in source order. Nested declarations appear both as members
/// of their parent and as entries of their own; a nested declaration inside
/// a generated type is itself marked generated.
///
/// # Errors
/// Returns error if the grammar cannot be loaded or the parser gives up.
pub fn parse_types(source: &str) -> Result<Vec<TypeDeclaration>> {
    let mut parser = Parser::new();
    parser.set_language(&Lang::CSharp.grammar())?;
    let tree = parser.parse(source, None).ok_or(LcomError::Parse)?;

    let root = tree.root_node();
    if root.has_error() {
        tracing::debug!("syntax errors present; classifying the parsable parts");
    }

    let extractor = Extractor { source };
    let mut out = Vec::new();
    extractor.collect(root, false, &mut out);
    Ok(out)
}

fn type_kind(kind: &str) -> Option<TypeKind> {
    match kind {
        "class_declaration" => Some(TypeKind::Class),
        "struct_declaration" => Some(TypeKind::Struct),
        "record_declaration" | "record_struct_declaration" => Some(TypeKind::Record),
        "interface_declaration" => Some(TypeKind::Interface),
        "enum_declaration" => Some(TypeKind::Enum),
        _ => None,
    }
}

fn is_method(kind: &str) -> bool {
    matches!(
        kind,
        "method_declaration"
            | "constructor_declaration"
            | "destructor_declaration"
            | "operator_declaration"
            | "conversion_operator_declaration"
    )
}

struct Extractor<'a> {
    source: &'a str,
}

impl Extractor<'_> {
    fn collect(&self, node: Node, in_generated: bool, out: &mut Vec<TypeDeclaration>) {
        let mut generated = in_generated;
        if let Some(kind) = type_kind(node.kind()) {
            let decl = self.build_type(node, kind, in_generated);
            generated = decl.generated;
            if kind.is_analyzable() {
                out.push(decl);
            }
        }
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            self.collect(child, generated, out);
        }
    }

    fn build_type(&self, node: Node, kind: TypeKind, in_generated: bool) -> TypeDeclaration {
        let name = self.field_text(node, "name").unwrap_or_default();
        let start = node.start_position();
        let mut decl =
            TypeDeclaration::new(kind, name, Location::new(start.row + 1, start.column + 1));
        decl.modifiers = self.modifiers(node);
        decl.terminated = self.is_terminated(node);
        decl.generated = in_generated || self.has_generated_code_attribute(node);

        if let Some(body) = body_of(node) {
            let mut cursor = body.walk();
            decl.members = body
                .named_children(&mut cursor)
                .map(|member| self.build_member(member, decl.generated))
                .collect();
        }
        decl
    }

    fn build_member(&self, node: Node, in_generated: bool) -> Member {
        let kind = node.kind();
        if let Some(type_kind) = type_kind(kind) {
            return Member::NestedType(self.build_type(node, type_kind, in_generated));
        }
        if is_method(kind) {
            return Member::Method(MethodDecl {
                modifiers: self.modifiers(node),
                text: self.text(node).to_string(),
            });
        }
        match kind {
            "field_declaration" => Member::Field(FieldDecl {
                modifiers: self.modifiers(node),
                names: self.variable_names(node),
            }),
            "property_declaration" => self.build_property(node, PropertyKind::Property),
            "indexer_declaration" => self.build_property(node, PropertyKind::Indexer),
            "event_declaration" => self.build_property(node, PropertyKind::Event),
            _ => Member::Other,
        }
    }

    fn build_property(&self, node: Node, kind: PropertyKind) -> Member {
        let name = match kind {
            PropertyKind::Indexer => "this".to_string(),
            PropertyKind::Property | PropertyKind::Event => {
                self.field_text(node, "name").unwrap_or_default().to_string()
            }
        };
        let accessors = node
            .child_by_field_name("accessors")
            .or_else(|| first_child_of_kind(node, "accessor_list"))
            .map(|list| self.accessors(list));

        Member::Property(PropertyDecl {
            kind,
            modifiers: self.modifiers(node),
            name,
            accessors,
            text: self.text(node).to_string(),
        })
    }

    fn accessors(&self, list: Node) -> Vec<Accessor> {
        let mut cursor = list.walk();
        list.named_children(&mut cursor)
            .filter(|n| n.kind() == "accessor_declaration")
            .map(|n| Accessor {
                has_body: has_body(n),
                text: self.text(n).to_string(),
            })
            .collect()
    }

    /// `int a = 1, b;` yields `["a", "b"]`.
    fn variable_names(&self, field: Node) -> Vec<String> {
        let Some(declaration) = first_child_of_kind(field, "variable_declaration") else {
            return Vec::new();
        };
        let mut cursor = declaration.walk();
        declaration
            .named_children(&mut cursor)
            .filter(|n| n.kind() == "variable_declarator")
            .filter_map(|n| {
                n.child_by_field_name("name")
                    .or_else(|| first_child_of_kind(n, "identifier"))
            })
            .map(|n| self.text(n).to_string())
            .collect()
    }

    fn modifiers(&self, node: Node) -> Modifiers {
        let mut cursor = node.walk();
        let keywords: Vec<&str> = node
            .children(&mut cursor)
            .filter(|n| n.kind() == "modifier")
            .map(|n| self.text(n))
            .collect();
        Modifiers::from_keywords(keywords)
    }

    /// A `;` either inside the declaration (`record R(int X);`) or right
    /// after its body (`class C { };`), where the grammar leaves it outside
    /// the declaration node.
    fn is_terminated(&self, node: Node) -> bool {
        if has_token(node, ";") {
            return true;
        }
        if node.next_sibling().is_some_and(|n| n.kind() == ";") {
            return true;
        }
        self.source
            .get(node.end_byte()..)
            .is_some_and(|rest| rest.trim_start().starts_with(';'))
    }

    fn has_generated_code_attribute(&self, node: Node) -> bool {
        let mut cursor = node.walk();
        let found = node
            .children(&mut cursor)
            .filter(|n| n.kind() == "attribute_list")
            .any(|list| super::generated::is_generated_attribute_list(self.text(list)));
        found
    }

    fn field_text(&self, node: Node, field: &str) -> Option<&str> {
        node.child_by_field_name(field).map(|n| self.text(n))
    }

    fn text(&self, node: Node) -> &str {
        self.source.get(node.byte_range()).unwrap_or("")
    }
}

fn body_of(node: Node) -> Option<Node> {
    node.child_by_field_name("body")
        .or_else(|| first_child_of_kind(node, "declaration_list"))
}

fn has_body(accessor: Node) -> bool {
    if accessor.child_by_field_name("body").is_some() {
        return true;
    }
    let mut cursor = accessor.walk();
    let found = accessor
        .children(&mut cursor)
        .any(|n| matches!(n.kind(), "block" | "arrow_expression_clause"));
    found
}

fn has_token(node: Node, token: &str) -> bool {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).any(|n| n.kind() == token);
    found
}

fn first_child_of_kind<'t>(node: Node<'t>, kind: &str) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).find(|n| n.kind() == kind);
    found
}
