//! Trait dictionary
//!
//! Nodes are classified by named traits arranged in a directed acyclic
//! hierarchy: a sub-trait link `clerk -> official` says that every clerk is
//! an official. The dictionary owns the vocabulary and answers closure
//! queries over it.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::ModelError;

/// A registry of trait names and sub-trait links
///
/// # Examples
///
/// ```
/// use pepys_model::TraitDictionary;
///
/// let mut dictionary = TraitDictionary::new();
/// dictionary.define("official");
/// dictionary.define("clerk");
/// dictionary.link("clerk", "official").unwrap();
/// assert!(dictionary.is_subtrait("clerk", "official"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraitDictionary {
    // trait name -> direct super-traits; presence in the map means defined
    parents: BTreeMap<String, BTreeSet<String>>,
}

impl TraitDictionary {
    /// Create an empty dictionary
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a trait name; re-defining is a no-op
    pub fn define(&mut self, name: &str) {
        self.parents.entry(name.to_string()).or_default();
    }

    /// Whether a trait name is defined
    pub fn contains(&self, name: &str) -> bool {
        self.parents.contains_key(name)
    }

    /// Declare `sub` to be a sub-trait of `sup`
    ///
    /// # Errors
    ///
    /// [`ModelError::UnknownTrait`] when either name is undefined;
    /// [`ModelError::CyclicTraitLink`] when the link would make the
    /// hierarchy cyclic, including a self-link.
    pub fn link(&mut self, sub: &str, sup: &str) -> Result<(), ModelError> {
        for name in [sub, sup] {
            if !self.contains(name) {
                return Err(ModelError::UnknownTrait {
                    name: name.to_string(),
                });
            }
        }
        if self.is_subtrait(sup, sub) {
            return Err(ModelError::CyclicTraitLink {
                sub: sub.to_string(),
                sup: sup.to_string(),
            });
        }
        tracing::debug!(sub, sup, "sub-trait link declared");
        if let Some(parents) = self.parents.get_mut(sub) {
            parents.insert(sup.to_string());
        }
        Ok(())
    }

    /// Whether `name` is `ancestor` or lies below it in the hierarchy
    ///
    /// Undefined names are below nothing but themselves.
    pub fn is_subtrait(&self, name: &str, ancestor: &str) -> bool {
        if name == ancestor {
            return true;
        }
        // Explicit worklist; the hierarchy is acyclic but may be a DAG, so
        // visited names are skipped rather than revisited.
        let mut visited = BTreeSet::new();
        let mut queue = vec![name];
        while let Some(current) = queue.pop() {
            let Some(parents) = self.parents.get(current) else {
                continue;
            };
            for parent in parents {
                if parent == ancestor {
                    return true;
                }
                if visited.insert(parent.as_str()) {
                    queue.push(parent);
                }
            }
        }
        false
    }

    /// Every trait above `name`, transitively, sorted
    pub fn supertraits(&self, name: &str) -> Vec<String> {
        let mut found = BTreeSet::new();
        let mut queue = vec![name];
        while let Some(current) = queue.pop() {
            let Some(parents) = self.parents.get(current) else {
                continue;
            };
            for parent in parents {
                if found.insert(parent.clone()) {
                    queue.push(parent);
                }
            }
        }
        found.into_iter().collect()
    }

    /// Every defined trait name, sorted
    pub fn traits(&self) -> Vec<String> {
        self.parents.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TraitDictionary {
        let mut dictionary = TraitDictionary::new();
        for name in ["person", "official", "clerk", "place"] {
            dictionary.define(name);
        }
        dictionary.link("official", "person").unwrap();
        dictionary.link("clerk", "official").unwrap();
        dictionary
    }

    #[test]
    fn test_define_is_idempotent() {
        let mut dictionary = TraitDictionary::new();
        dictionary.define("person");
        dictionary.define("person");
        assert_eq!(dictionary.traits(), vec!["person"]);
    }

    #[test]
    fn test_link_requires_defined_names() {
        let mut dictionary = TraitDictionary::new();
        dictionary.define("person");
        assert_eq!(
            dictionary.link("ghost", "person"),
            Err(ModelError::UnknownTrait {
                name: "ghost".to_string()
            })
        );
        assert_eq!(
            dictionary.link("person", "ghost"),
            Err(ModelError::UnknownTrait {
                name: "ghost".to_string()
            })
        );
    }

    #[test]
    fn test_is_subtrait_is_reflexive_and_transitive() {
        let dictionary = sample();
        assert!(dictionary.is_subtrait("clerk", "clerk"));
        assert!(dictionary.is_subtrait("clerk", "official"));
        assert!(dictionary.is_subtrait("clerk", "person"));
        assert!(!dictionary.is_subtrait("person", "clerk"));
        assert!(!dictionary.is_subtrait("clerk", "place"));
    }

    #[test]
    fn test_link_rejects_cycles() {
        let mut dictionary = sample();
        assert_eq!(
            dictionary.link("person", "clerk"),
            Err(ModelError::CyclicTraitLink {
                sub: "person".to_string(),
                sup: "clerk".to_string()
            })
        );
        assert_eq!(
            dictionary.link("person", "person"),
            Err(ModelError::CyclicTraitLink {
                sub: "person".to_string(),
                sup: "person".to_string()
            })
        );
    }

    #[test]
    fn test_supertraits_transitive_and_sorted() {
        let dictionary = sample();
        assert_eq!(dictionary.supertraits("clerk"), vec!["official", "person"]);
        assert!(dictionary.supertraits("place").is_empty());
    }

    #[test]
    fn test_diamond_hierarchy_is_allowed() {
        let mut dictionary = TraitDictionary::new();
        for name in ["a", "b", "c", "d"] {
            dictionary.define(name);
        }
        dictionary.link("d", "b").unwrap();
        dictionary.link("d", "c").unwrap();
        dictionary.link("b", "a").unwrap();
        dictionary.link("c", "a").unwrap();

        assert!(dictionary.is_subtrait("d", "a"));
        assert_eq!(dictionary.supertraits("d"), vec!["a", "b", "c"]);
    }
}
