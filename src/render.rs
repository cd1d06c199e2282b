//! Example literal synthesis for schema types.
//!
//! Every [`Ty`] maps to a placeholder literal in the output DSL. Nothing here
//! fails: shapes that cannot be synthesized degrade to `notImplemented(..)` or
//! `null`.
//!
//! Cyclic object graphs are cut with a visited-token set owned by the caller.
//! The set is append-only for one declaration, so the second time a
//! self-referencing object is entered it renders as `notImplemented("<token>")`.

use std::collections::HashSet;

use crate::ir::{Package, Property, Ty};
use crate::select::select_properties;
use crate::writer::Writer;

/// Object tokens entered while rendering one declaration.
pub type VisitedTypes<'a> = HashSet<&'a str>;

pub struct Renderer<'a> {
    package: &'a Package,
    required_only: bool,
}

impl<'a> Renderer<'a> {
    pub fn new(package: &'a Package, required_only: bool) -> Self {
        Self { package, required_only }
    }

    pub fn package(&self) -> &'a Package {
        self.package
    }

    /// One `name = value` line per selected property, at the writer's current level.
    pub fn render_properties(
        &self,
        out: &mut Writer,
        properties: &'a [Property],
        visited: &mut VisitedTypes<'a>,
    ) {
        for property in select_properties(properties, self.required_only) {
            out.indent();
            out.push(&property.name);
            out.push(" = ");
            self.render(out, &property.ty, visited);
            out.push("\n");
        }
    }

    pub fn render(&self, out: &mut Writer, ty: &'a Ty, visited: &mut VisitedTypes<'a>) {
        match ty {
            Ty::Boolean => out.push("false"),
            Ty::Integer => out.push("0"),
            Ty::Number => out.push("0.0"),
            Ty::String => out.push("\"string\""),
            Ty::Any => out.push("\"any\""),
            Ty::Json => out.push("\"{}\""),
            Ty::Archive => out.push("fileArchive(\"./path/to/archive\")"),
            Ty::Asset => out.push("stringAsset(\"content\")"),

            Ty::Array(element) => {
                out.push("[");
                self.render(out, element, visited);
                out.push("]");
            }

            Ty::Map(element) => {
                out.push("{\n");
                out.indented(|out| {
                    out.indent();
                    out.push("\"string\" = ");
                    self.render(out, element, visited);
                    out.push("\n");
                });
                out.indent();
                out.push("}");
            }

            Ty::Object(token) => self.render_object(out, token, visited),

            Ty::Resource(token) => not_implemented(out, token),

            Ty::Enum(token) => {
                let case = match self.package.enumeration(token) {
                    Some(enumeration) => enumeration.representative(),
                    None => {
                        tracing::warn!(%token, "enum type is not defined in the package");
                        None
                    }
                };
                match case {
                    Some(case) => out.push(&format!("{case:?}")),
                    None => out.push("null"),
                }
            }

            Ty::Union(alternatives) => self.render_union(out, alternatives, visited),

            Ty::Input(inner) | Ty::Optional(inner) => self.render(out, inner, visited),
            Ty::Alias { underlying, .. } => self.render(out, underlying, visited),
        }
    }

    fn render_object(&self, out: &mut Writer, token: &'a str, visited: &mut VisitedTypes<'a>) {
        let Some(object) = self.package.object(token) else {
            tracing::warn!(%token, "object type is not defined in the package");
            out.push("null");
            return;
        };

        if visited.contains(token) && references_itself(self.package, token) {
            tracing::debug!(%token, "cutting recursive object type");
            not_implemented(out, token);
            return;
        }

        visited.insert(token);
        out.push("{\n");
        out.indented(|out| self.render_properties(out, &object.properties, visited));
        out.indent();
        out.push("}");
    }

    // An all-object union shows its first alternative; after that the first
    // primitive-compatible alternative, if any, is appended and ends the union.
    fn render_union(&self, out: &mut Writer, alternatives: &'a [Ty], visited: &mut VisitedTypes<'a>) {
        let mut rendered = false;
        if is_union_of_objects(alternatives) {
            if let Some(first) = alternatives.first() {
                self.render(out, first, visited);
                rendered = true;
            }
        }

        if let Some(primitive) = alternatives.iter().find(|t| is_primitive_compatible(t)) {
            self.render(out, primitive, visited);
            return;
        }

        if !rendered {
            out.push("null");
        }
    }
}

/// Render a single type with a fresh visited set.
pub fn render_value(package: &Package, ty: &Ty, required_only: bool) -> String {
    let renderer = Renderer::new(package, required_only);
    let mut out = Writer::new();
    let mut visited = VisitedTypes::new();
    renderer.render(&mut out, ty, &mut visited);
    out.into_string()
}

fn not_implemented(out: &mut Writer, token: &str) {
    out.push(&format!("notImplemented({token:?})"));
}

fn is_union_of_objects(alternatives: &[Ty]) -> bool {
    !alternatives.is_empty() && alternatives.iter().all(|t| matches!(t, Ty::Object(_)))
}

fn is_primitive_compatible(ty: &Ty) -> bool {
    match ty {
        Ty::Boolean | Ty::Integer | Ty::Number | Ty::String => true,
        Ty::Enum(_) | Ty::Resource(_) => true,
        Ty::Optional(inner) => is_primitive_compatible(inner),
        _ => false,
    }
}

/// Whether the object `token` can reach itself through the types of its properties.
pub fn references_itself(package: &Package, token: &str) -> bool {
    let Some(root) = package.object(token) else {
        return false;
    };

    let mut expanded: HashSet<&str> = HashSet::new();
    let mut pending: Vec<&Ty> = root.properties.iter().map(|p| &p.ty).collect();
    while let Some(ty) = pending.pop() {
        match ty {
            Ty::Object(other) => {
                if other == token {
                    return true;
                }
                if expanded.insert(other.as_str()) {
                    if let Some(object) = package.object(other) {
                        pending.extend(object.properties.iter().map(|p| &p.ty));
                    }
                }
            }
            Ty::Array(inner) | Ty::Map(inner) | Ty::Input(inner) | Ty::Optional(inner) => {
                pending.push(inner)
            }
            Ty::Alias { underlying, .. } => pending.push(underlying),
            Ty::Union(alternatives) => pending.extend(alternatives),
            _ => {}
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{EnumCase, EnumType, EnumValue, ObjectType, TypeDef};

    fn package_with(types: Vec<(&str, TypeDef)>) -> Package {
        let mut pkg = Package { name: "test".into(), ..Package::default() };
        for (token, def) in types {
            pkg.types.insert(token.to_string(), def);
        }
        pkg
    }

    fn object(properties: Vec<Property>) -> TypeDef {
        TypeDef::Object(ObjectType { properties })
    }

    fn render(pkg: &Package, ty: &Ty) -> String {
        render_value(pkg, ty, false)
    }

    #[test]
    fn primitives_render_fixed_literals() {
        let pkg = Package::default();
        assert_eq!(render(&pkg, &Ty::Boolean), "false");
        assert_eq!(render(&pkg, &Ty::Integer), "0");
        assert_eq!(render(&pkg, &Ty::Number), "0.0");
        assert_eq!(render(&pkg, &Ty::String), "\"string\"");
        assert_eq!(render(&pkg, &Ty::Any), "\"any\"");
        assert_eq!(render(&pkg, &Ty::Json), "\"{}\"");
        assert_eq!(render(&pkg, &Ty::Archive), "fileArchive(\"./path/to/archive\")");
        assert_eq!(render(&pkg, &Ty::Asset), "stringAsset(\"content\")");
    }

    #[test]
    fn wrappers_are_transparent() {
        let pkg = Package::default();
        let ty = Ty::input(Ty::optional(Ty::Alias {
            token: "test:index:Name".into(),
            underlying: Box::new(Ty::String),
        }));
        assert_eq!(render(&pkg, &ty), "\"string\"");
    }

    #[test]
    fn arrays_hold_one_element() {
        let pkg = Package::default();
        assert_eq!(render(&pkg, &Ty::array(Ty::Integer)), "[0]");
        assert_eq!(render(&pkg, &Ty::array(Ty::array(Ty::Boolean))), "[[false]]");
    }

    #[test]
    fn maps_indent_their_entry() {
        let pkg = Package::default();
        assert_eq!(render(&pkg, &Ty::map(Ty::Integer)), "{\n  \"string\" = 0\n}");
        assert_eq!(
            render(&pkg, &Ty::map(Ty::map(Ty::String))),
            "{\n  \"string\" = {\n    \"string\" = \"string\"\n  }\n}"
        );
    }

    #[test]
    fn objects_render_selected_properties() {
        let pkg = package_with(vec![(
            "test:index:Settings",
            object(vec![
                Property::optional("label", Ty::String),
                Property::required("size", Ty::Integer),
                Property::required("legacy", Ty::Boolean).deprecated("unused"),
            ]),
        )]);
        let ty = Ty::object("test:index:Settings");
        assert_eq!(render(&pkg, &ty), "{\n  size = 0\n  label = \"string\"\n}");
        assert_eq!(render_value(&pkg, &ty, true), "{\n  size = 0\n}");
    }

    #[test]
    fn direct_self_reference_is_cut_on_second_entry() {
        let pkg = package_with(vec![(
            "test:index:Node",
            object(vec![
                Property::required("value", Ty::String),
                Property::optional("next", Ty::object("test:index:Node")),
            ]),
        )]);
        assert_eq!(
            render(&pkg, &Ty::object("test:index:Node")),
            "{\n  value = \"string\"\n  next = notImplemented(\"test:index:Node\")\n}"
        );
    }

    #[test]
    fn transitive_cycle_terminates() {
        let pkg = package_with(vec![
            ("test:index:A", object(vec![Property::required("b", Ty::array(Ty::object("test:index:B")))])),
            ("test:index:B", object(vec![Property::required("a", Ty::map(Ty::object("test:index:A")))])),
        ]);
        assert!(references_itself(&pkg, "test:index:A"));
        assert!(references_itself(&pkg, "test:index:B"));
        let out = render(&pkg, &Ty::object("test:index:A"));
        assert!(out.contains("notImplemented(\"test:index:A\")"), "{out}");
    }

    #[test]
    fn repeated_non_recursive_object_renders_in_full() {
        let pkg = package_with(vec![
            ("test:index:Leaf", object(vec![Property::required("id", Ty::String)])),
            (
                "test:index:Pair",
                object(vec![
                    Property::required("left", Ty::object("test:index:Leaf")),
                    Property::required("right", Ty::object("test:index:Leaf")),
                ]),
            ),
        ]);
        assert!(!references_itself(&pkg, "test:index:Leaf"));
        let out = render(&pkg, &Ty::object("test:index:Pair"));
        assert_eq!(
            out,
            "{\n  left = {\n    id = \"string\"\n  }\n  right = {\n    id = \"string\"\n  }\n}"
        );
    }

    #[test]
    fn resource_references_are_not_implemented() {
        let pkg = Package::default();
        assert_eq!(
            render(&pkg, &Ty::Resource("test:index:Bucket".into())),
            "notImplemented(\"test:index:Bucket\")"
        );
    }

    #[test]
    fn enums_pick_first_eligible_case() {
        let pkg = package_with(vec![
            (
                "test:index:Color",
                TypeDef::Enum(EnumType {
                    elements: vec![
                        EnumCase {
                            name: "Red".into(),
                            value: EnumValue::String("red".into()),
                            deprecation_message: Some("no more red".into()),
                        },
                        EnumCase { name: "Blue".into(), value: EnumValue::String("blue".into()), deprecation_message: None },
                    ],
                }),
            ),
            (
                "test:index:Level",
                TypeDef::Enum(EnumType {
                    elements: vec![EnumCase { name: "Low".into(), value: EnumValue::Integer(3), deprecation_message: None }],
                }),
            ),
            ("test:index:Empty", TypeDef::Enum(EnumType::default())),
        ]);
        assert_eq!(render(&pkg, &Ty::enumeration("test:index:Color")), "\"blue\"");
        assert_eq!(render(&pkg, &Ty::enumeration("test:index:Level")), "\"3\"");
        assert_eq!(render(&pkg, &Ty::enumeration("test:index:Empty")), "null");
    }

    #[test]
    fn union_of_objects_renders_first_alternative() {
        let pkg = package_with(vec![
            ("test:index:Cat", object(vec![Property::required("meow", Ty::Boolean)])),
            ("test:index:Dog", object(vec![Property::required("bark", Ty::Integer)])),
        ]);
        let ty = Ty::Union(vec![Ty::object("test:index:Cat"), Ty::object("test:index:Dog")]);
        assert_eq!(render(&pkg, &ty), "{\n  meow = false\n}");
    }

    #[test]
    fn union_prefers_first_primitive_compatible_alternative() {
        let pkg = package_with(vec![("test:index:Cat", object(vec![Property::required("meow", Ty::Boolean)]))]);
        let ty = Ty::Union(vec![Ty::object("test:index:Cat"), Ty::Any, Ty::optional(Ty::Integer), Ty::String]);
        assert_eq!(render(&pkg, &ty), "0");
    }

    #[test]
    fn union_without_candidates_is_null() {
        let pkg = Package::default();
        assert_eq!(render(&pkg, &Ty::Union(vec![])), "null");
        assert_eq!(render(&pkg, &Ty::Union(vec![Ty::Any, Ty::array(Ty::String)])), "null");
    }

    #[test]
    fn undefined_references_degrade_to_null() {
        let pkg = Package::default();
        assert_eq!(render(&pkg, &Ty::object("test:index:Missing")), "null");
        assert_eq!(render(&pkg, &Ty::enumeration("test:index:Missing")), "null");
    }

    #[test]
    fn rendering_is_deterministic() {
        let pkg = package_with(vec![(
            "test:index:Settings",
            object(vec![
                Property::optional("tags", Ty::map(Ty::String)),
                Property::required("ports", Ty::array(Ty::Integer)),
            ]),
        )]);
        let ty = Ty::object("test:index:Settings");
        assert_eq!(render(&pkg, &ty), render(&pkg, &ty));
    }
}
