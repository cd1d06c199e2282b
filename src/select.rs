use crate::ir::Property;

/// Properties worth showing in an example, required ones first.
///
/// Deprecated properties are always dropped; with `required_only` so is
/// everything optional. The sort is stable, so declaration order survives
/// within each group.
pub fn select_properties(properties: &[Property], required_only: bool) -> Vec<&Property> {
    let mut selected: Vec<&Property> = properties
        .iter()
        .filter(|p| !p.is_deprecated())
        .filter(|p| !required_only || p.required)
        .collect();
    selected.sort_by_key(|p| !p.required);
    selected
}
