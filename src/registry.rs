use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::{alias::Alias, error::DiError};

/// Store of alias definitions, keyed by the id the alias answers to.
///
/// The registry deals in identifiers only. Resolving a chain yields
/// the canonical id the container should instantiate; it never touches
/// service instances.
#[derive(Debug, Default, Serialize)]
pub struct AliasRegistry {
    aliases: FxHashMap<String, Alias>,
}

impl AliasRegistry {
    pub fn new() -> Self {
        Self {
            aliases: FxHashMap::default(),
        }
    }

    /// Registers `alias` under `id`, replacing any previous definition.
    ///
    /// An alias pointing at its own id is rejected up front; it could
    /// never resolve.
    pub fn set_alias(&mut self, id: impl Into<String>, alias: Alias) -> Result<(), DiError> {
        let id = id.into();
        if id == alias.target() {
            return Err(DiError::InvalidArgument(format!(
                "An alias cannot reference itself, got a circular reference on \"{}\".",
                id
            )));
        }
        self.aliases.insert(id, alias);
        Ok(())
    }

    pub fn get_alias(&self, id: &str) -> Option<&Alias> {
        self.aliases.get(id)
    }

    pub fn has_alias(&self, id: &str) -> bool {
        self.aliases.contains_key(id)
    }

    pub fn remove_alias(&mut self, id: &str) -> Option<Alias> {
        self.aliases.remove(id)
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    pub fn aliases(&self) -> &FxHashMap<String, Alias> {
        &self.aliases
    }

    /// Follows the alias chain from `id` to the canonical id.
    ///
    /// An id with no registered alias resolves to itself. A chain that
    /// revisits an id fails with [`DiError::CircularReference`].
    pub fn resolve<'a>(&'a self, id: &'a str) -> Result<&'a str, DiError> {
        let path = self.chain(id)?;
        Ok(path.last().copied().unwrap_or(id))
    }

    /// Collects the rendered deprecation message of every deprecated
    /// alias along the chain from `id`, each rendered with the id the
    /// hop was registered under.
    pub fn deprecation_warnings(&self, id: &str) -> Result<Vec<String>, DiError> {
        let path = self.chain(id)?;
        Ok(path
            .iter()
            .filter_map(|hop| {
                self.aliases
                    .get(*hop)
                    .filter(|alias| alias.is_deprecated())
                    .map(|alias| alias.deprecation_message(hop))
            })
            .collect())
    }

    // Walks id -> target -> ... until an id with no alias, erroring on
    // the first revisit. The returned path always starts at `id`.
    fn chain<'a>(&'a self, id: &'a str) -> Result<Vec<&'a str>, DiError> {
        let mut path = vec![id];
        let mut current = id;
        while let Some(alias) = self.aliases.get(current) {
            let target = alias.target();
            if path.contains(&target) {
                return Err(DiError::CircularReference {
                    id: id.to_string(),
                    path: format!("{} -> {}", path.join(" -> "), target),
                });
            }
            path.push(target);
            current = target;
        }
        Ok(path)
    }
}
