// Bound schema model the generator walks. Read-only; no wire-format concerns here.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Ty {
    Boolean,
    Integer,
    Number,
    String,
    Any,
    Json,
    Archive,
    Asset,
    Array(Box<Ty>),
    Map(Box<Ty>),
    Object(String),          // token into `Package::types`
    Enum(String),            // token into `Package::types`
    Union(Vec<Ty>),
    Resource(String),        // reference to another resource by token
    Input(Box<Ty>),
    Optional(Box<Ty>),
    Alias {
        token: String,
        underlying: Box<Ty>,
    },
}

impl Ty {
    pub fn array(element: Ty) -> Self {
        Ty::Array(Box::new(element))
    }

    pub fn map(element: Ty) -> Self {
        Ty::Map(Box::new(element))
    }

    pub fn object(token: impl Into<String>) -> Self {
        Ty::Object(token.into())
    }

    pub fn enumeration(token: impl Into<String>) -> Self {
        Ty::Enum(token.into())
    }

    pub fn input(inner: Ty) -> Self {
        Ty::Input(Box::new(inner))
    }

    pub fn optional(inner: Ty) -> Self {
        Ty::Optional(Box::new(inner))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Ty,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecation_message: Option<String>,
}

impl Property {
    pub fn required(name: impl Into<String>, ty: Ty) -> Self {
        Self { name: name.into(), ty, required: true, deprecation_message: None }
    }

    pub fn optional(name: impl Into<String>, ty: Ty) -> Self {
        Self { name: name.into(), ty, required: false, deprecation_message: None }
    }

    pub fn deprecated(mut self, message: impl Into<String>) -> Self {
        self.deprecation_message = Some(message.into());
        self
    }

    pub fn is_deprecated(&self) -> bool {
        is_deprecated(&self.deprecation_message)
    }
}

/// Object body. The identity token is the key it is stored under in [`Package::types`]
/// (or the owning function's token for inline function inputs).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectType {
    #[serde(default)]
    pub properties: Vec<Property>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumType {
    #[serde(default)]
    pub elements: Vec<EnumCase>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumCase {
    #[serde(default)]
    pub name: String,
    pub value: EnumValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecation_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EnumValue {
    Boolean(bool),
    Integer(i64),
    Number(f64),
    String(String),
}

impl EnumType {
    /// Text of the first non-deprecated case that has something to show.
    pub fn representative(&self) -> Option<String> {
        self.elements
            .iter()
            .filter(|case| !is_deprecated(&case.deprecation_message))
            .find_map(EnumCase::example_text)
    }
}

impl EnumCase {
    fn example_text(&self) -> Option<String> {
        match &self.value {
            EnumValue::String(s) if !s.is_empty() => Some(s.clone()),
            EnumValue::Integer(i) => Some(i.to_string()),
            _ if !self.name.is_empty() => Some(self.name.clone()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TypeDef {
    Object(ObjectType),
    Enum(EnumType),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub token: String,
    #[serde(default)]
    pub input_properties: Vec<Property>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecation_message: Option<String>,
}

impl Resource {
    pub fn is_deprecated(&self) -> bool {
        is_deprecated(&self.deprecation_message)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Function {
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inputs: Option<ObjectType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecation_message: Option<String>,
}

impl Function {
    pub fn is_deprecated(&self) -> bool {
        is_deprecated(&self.deprecation_message)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub name: String,
    #[serde(default)]
    pub resources: Vec<Resource>,
    #[serde(default)]
    pub functions: Vec<Function>,
    /// Object and enum definitions by token, in declaration order.
    #[serde(default)]
    pub types: IndexMap<String, TypeDef>,
}

impl Package {
    pub fn object(&self, token: &str) -> Option<&ObjectType> {
        match self.types.get(token)? {
            TypeDef::Object(object) => Some(object),
            TypeDef::Enum(_) => None,
        }
    }

    pub fn enumeration(&self, token: &str) -> Option<&EnumType> {
        match self.types.get(token)? {
            TypeDef::Enum(enumeration) => Some(enumeration),
            TypeDef::Object(_) => None,
        }
    }

    pub fn resource(&self, token: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.token == token)
    }

    pub fn function(&self, token: &str) -> Option<&Function> {
        self.functions.iter().find(|f| f.token == token)
    }
}

fn is_deprecated(message: &Option<String>) -> bool {
    message.as_deref().is_some_and(|m| !m.is_empty())
}
