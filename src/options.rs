use serde::{Deserialize, Serialize};

/// What to generate and how much of each shape to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerateOptions {
    /// Render only required properties, at every nesting level.
    pub required_properties_only: bool,
    /// Whole-package mode: include resources.
    pub include_resources: bool,
    /// Whole-package mode: include functions.
    pub include_functions: bool,
    /// Single-item mode: generate just this resource or function.
    pub token: Option<String>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            required_properties_only: false,
            include_resources: true,
            include_functions: true,
            token: None,
        }
    }
}

impl GenerateOptions {
    pub fn for_token(token: impl Into<String>) -> Self {
        Self { token: Some(token.into()), ..Self::default() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let opts: GenerateOptions = serde_json::from_str(r#"{"requiredPropertiesOnly": true}"#).unwrap();
        assert!(opts.required_properties_only);
        assert!(opts.include_resources);
        assert!(opts.include_functions);
        assert_eq!(opts.token, None);
    }
}
