use once_cell::sync::Lazy;
use thiserror::Error;

use super::{GenerateFn, catalog};
use crate::common::collections::HashSet;

/// One entry of the layout catalog. Descriptors are built once at startup
/// and live for the process lifetime.
#[derive(Clone, Copy)]
pub struct LayoutDescriptor {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    pub generate: GenerateFn,
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("duplicate layout name or alias: '{0}'")]
    Duplicate(String),
    #[error("layout names may not contain whitespace: '{0}'")]
    Whitespace(String),
}

/// Ordered catalog of layout descriptors. Names and aliases are unique
/// across the whole catalog and free of whitespace, because they double as
/// space-delimited tokens in user input.
pub struct Registry {
    descriptors: Vec<LayoutDescriptor>,
}

impl Registry {
    pub fn new(descriptors: Vec<LayoutDescriptor>) -> Result<Self, RegistryError> {
        let mut seen: HashSet<&str> = HashSet::default();
        for descriptor in &descriptors {
            for key in std::iter::once(descriptor.name).chain(descriptor.aliases.iter().copied()) {
                if key.is_empty() || key.chars().any(char::is_whitespace) {
                    return Err(RegistryError::Whitespace(key.to_string()));
                }
                if !seen.insert(key) {
                    return Err(RegistryError::Duplicate(key.to_string()));
                }
            }
        }
        Ok(Self { descriptors })
    }

    pub fn builtin() -> &'static Registry {
        static BUILTIN: Lazy<Registry> = Lazy::new(|| {
            Registry::new(catalog::builtin_descriptors())
                .expect("builtin layout catalog is consistent")
        });
        &BUILTIN
    }

    /// Exact, case-sensitive match against name or any alias.
    pub fn resolve(&self, token: &str) -> Option<&LayoutDescriptor> {
        self.descriptors
            .iter()
            .find(|d| d.name == token || d.aliases.contains(&token))
    }

    pub fn iter(&self) -> impl Iterator<Item = &LayoutDescriptor> { self.descriptors.iter() }

    pub fn len(&self) -> usize { self.descriptors.len() }

    pub fn is_empty(&self) -> bool { self.descriptors.is_empty() }
}
