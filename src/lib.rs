//! Example constructor syntax for typed resource and function schemas.
//!
//! Given a bound [`ir::Package`], emits illustrative declarations in the
//! program DSL with a placeholder literal for every property:
//!
//! ```text
//! resource "example" "test:index:MyResource" {
//!   fooBool = false
//!   fooInt = 0
//!   fooString = "string"
//! }
//! ```
pub mod ir;
pub mod writer;
pub mod select;
pub mod render;
pub mod declare;
pub mod naming;
pub mod generate;
pub mod options;
pub mod error;
pub mod storage;
pub mod cli;

pub use error::{GenerateError, LoadError, WriteError};
pub use generate::{generate, ExampleGenerator};
pub use ir::{Package, Property, Ty};
pub use options::GenerateOptions;
