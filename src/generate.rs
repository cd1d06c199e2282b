//! Document assembly: a single named example, or every member of a package.

use crate::declare::{invoke_declaration, resource_declaration};
use crate::error::GenerateError;
use crate::ir::{Function, Package, Resource};
use crate::naming::{NameRegistry, SINGLE_ITEM_NAME};
use crate::options::GenerateOptions;
use crate::render::Renderer;

pub struct ExampleGenerator<'a> {
    renderer: Renderer<'a>,
}

impl<'a> ExampleGenerator<'a> {
    pub fn new(package: &'a Package, required_properties_only: bool) -> Self {
        Self { renderer: Renderer::new(package, required_properties_only) }
    }

    pub fn example_resource(&self, resource: &'a Resource) -> String {
        resource_declaration(&self.renderer, resource, SINGLE_ITEM_NAME)
    }

    pub fn example_invoke(&self, function: &'a Function) -> String {
        invoke_declaration(&self.renderer, function, SINGLE_ITEM_NAME)
    }

    /// Example for one token. Resources are searched before functions.
    pub fn example_for_token(&self, token: &str) -> Result<String, GenerateError> {
        let package = self.renderer.package();
        if let Some(resource) = package.resource(token) {
            return Ok(self.example_resource(resource));
        }
        if let Some(function) = package.function(token) {
            return Ok(self.example_invoke(function));
        }
        Err(GenerateError::NotFound(token.to_string()))
    }

    /// Every non-deprecated resource and/or function, each preceded by a
    /// header comment and followed by a newline. Names are unique across the
    /// whole document.
    pub fn generate_all(&self, include_resources: bool, include_functions: bool) -> String {
        let package = self.renderer.package();
        let mut names = NameRegistry::new();
        let mut buffer = String::new();
        let mut emitted = 0usize;

        if include_resources {
            for resource in package.resources.iter().filter(|r| !r.is_deprecated()) {
                let name = names.resource_name(&resource.token);
                tracing::debug!(token = %resource.token, %name, "emitting resource example");
                buffer.push_str(&format!("// Resource {}\n", resource.token));
                buffer.push_str(&resource_declaration(&self.renderer, resource, &name));
                buffer.push('\n');
                emitted += 1;
            }
        }

        if include_functions {
            for function in package.functions.iter().filter(|f| !f.is_deprecated()) {
                let name = names.function_name(&function.token);
                tracing::debug!(token = %function.token, %name, "emitting invoke example");
                buffer.push_str(&format!("// Invoking {}\n", function.token));
                buffer.push_str(&invoke_declaration(&self.renderer, function, &name));
                buffer.push('\n');
                emitted += 1;
            }
        }

        tracing::info!(package = %package.name, declarations = emitted, "generated package examples");
        buffer
    }
}

/// Entry point: single-item mode when `options.token` is set, whole package otherwise.
pub fn generate(package: &Package, options: &GenerateOptions) -> Result<String, GenerateError> {
    let generator = ExampleGenerator::new(package, options.required_properties_only);
    match options.token.as_deref() {
        Some(token) => generator.example_for_token(token),
        None => Ok(generator.generate_all(options.include_resources, options.include_functions)),
    }
}
