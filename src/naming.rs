//! Unique local names for declarations in a whole-package document.
//!
//! Each member kind has an ordered list of naming tiers. The first tier whose
//! candidate has not been handed out yet wins; the last tier is taken without
//! checking. Whatever wins is recorded, so later members see it as taken.

use std::collections::HashSet;

/// Name used when a single resource or function is generated on its own.
pub const SINGLE_ITEM_NAME: &str = "example";

/// `package:module:member`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenParts<'a> {
    pub package: &'a str,
    pub module: &'a str,
    pub member: &'a str,
}

impl<'a> TokenParts<'a> {
    /// Split a token. Anything other than exactly three parts becomes the
    /// member name as a whole.
    pub fn parse(token: &'a str) -> Self {
        let parts: Vec<&str> = token.split(':').collect();
        match parts.as_slice() {
            [package, module, member] => Self { package, module, member },
            _ => Self { package: "", module: "", member: token },
        }
    }
}

type Tier<'t> = &'t dyn Fn() -> String;

#[derive(Debug, Default)]
pub struct NameRegistry {
    seen: HashSet<String>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    fn is_taken(&self, name: &str) -> bool {
        self.seen.contains(name)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn resource_name(&mut self, token: &str) -> String {
        let TokenParts { package, module, member } = TokenParts::parse(token);
        let base = format!("{}Resource", camel_case(member));

        let with_package = || format!("{package}{member}Resource");
        let with_module = || format!("example{base}From{}", title(&clean_module_name(module)));
        self.assign(token, &[&|| base.clone(), &with_package], &with_module)
    }

    pub fn function_name(&mut self, token: &str) -> String {
        let TokenParts { package, module, member } = TokenParts::parse(token);
        let result = format!("{member}Result");

        let with_package = || format!("{result}From{}", title(package));
        let with_module = || format!("example{}From{}", title(&result), title(&clean_module_name(module)));
        self.assign(token, &[&|| member.to_string(), &|| result.clone(), &with_package], &with_module)
    }

    fn assign(&mut self, token: &str, tiers: &[Tier<'_>], terminal: Tier<'_>) -> String {
        for (index, tier) in tiers.iter().enumerate() {
            let candidate = tier();
            if !self.seen.contains(&candidate) {
                if index > 0 {
                    tracing::debug!(%token, name = %candidate, tier = index + 1, "escalated declaration name");
                }
                self.seen.insert(candidate.clone());
                return candidate;
            }
        }

        let candidate = terminal();
        tracing::debug!(%token, name = %candidate, tier = tiers.len() + 1, "using terminal declaration name");
        self.seen.insert(candidate.clone());
        candidate
    }
}

// ————————————————————————————————————————————————————————————————————————————
// STRING HELPERS
// ————————————————————————————————————————————————————————————————————————————

/// Uppercase the first character.
pub fn title(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `my-resource_name` → `myResource_name`, `URLMap` → `urlmap`.
///
/// Hyphens are dropped and the following character uppercased; then the
/// leading run of uppercase characters is lowercased. Underscores and other
/// characters are kept as they are.
pub fn camel_case(s: &str) -> String {
    let mut joined = String::with_capacity(s.len());
    let mut upper_next = false;
    for c in s.chars() {
        if c == '-' {
            upper_next = !joined.is_empty();
            continue;
        }
        if upper_next {
            joined.extend(c.to_uppercase());
            upper_next = false;
        } else {
            joined.push(c);
        }
    }

    let mut out = String::with_capacity(joined.len());
    let mut chars = joined.chars();
    for c in chars.by_ref() {
        if c.is_lowercase() {
            out.push(c);
            break;
        }
        out.extend(c.to_lowercase());
    }
    out.extend(chars);
    out
}

pub fn clean_module_name(module: &str) -> String {
    module.replace('/', "")
}
