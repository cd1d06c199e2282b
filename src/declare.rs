//! Top-level declaration shapes: `resource` blocks and `invoke` assignments.

use crate::ir::{Function, Resource};
use crate::render::{Renderer, VisitedTypes};
use crate::writer::Writer;

/// ```text
/// resource "<name>" "<token>" {
///   prop = value
/// }
/// ```
pub fn resource_declaration<'a>(renderer: &Renderer<'a>, resource: &'a Resource, name: &str) -> String {
    let mut out = Writer::new();
    let mut visited = VisitedTypes::new();
    let properties = &resource.input_properties;
    out.push(&format!("resource \"{name}\" {:?} {{\n", resource.token));
    out.indented(|out| renderer.render_properties(out, properties, &mut visited));
    out.indent();
    out.push("}");
    out.into_string()
}

/// ```text
/// <name> = invoke("<token>", {
///   arg = value
/// })
/// ```
pub fn invoke_declaration<'a>(renderer: &Renderer<'a>, function: &'a Function, name: &str) -> String {
    let mut out = Writer::new();
    let mut visited = VisitedTypes::new();
    let inputs = function.inputs.as_ref();
    out.push(&format!("{name} = invoke(\"{}\", {{\n", function.token));
    out.indented(|out| {
        let Some(inputs) = inputs else {
            return;
        };
        renderer.render_properties(out, &inputs.properties, &mut visited);
    });
    out.indent();
    out.push("})");
    out.into_string()
}
