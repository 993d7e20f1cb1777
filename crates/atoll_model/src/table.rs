//! Insertion-ordered module store with name lookup.

use crate::module::Module;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The set of modules a placement run operates on, keyed by name.
///
/// Modules are stored in insertion order so that every traversal over the
/// table is deterministic; a name index provides O(1) lookup. The index is
/// rebuilt on deserialization via [`rebuild_index`](Self::rebuild_index).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModuleTable {
    modules: Vec<Module>,
    /// Auxiliary index: module name to vector position.
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl ModuleTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a module, replacing any existing module of the same name.
    pub fn insert(&mut self, module: Module) {
        match self.index.get(module.name()) {
            Some(&slot) => self.modules[slot] = module,
            None => {
                self.index.insert(module.name().to_string(), self.modules.len());
                self.modules.push(module);
            }
        }
    }

    /// Returns the module with the given name, if present.
    pub fn get(&self, name: &str) -> Option<&Module> {
        self.index.get(name).map(|&slot| &self.modules[slot])
    }

    /// Returns a mutable reference to the module with the given name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Module> {
        match self.index.get(name) {
            Some(&slot) => Some(&mut self.modules[slot]),
            None => None,
        }
    }

    /// Returns `true` if a module with the given name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Returns the number of modules in the table.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Returns `true` if the table holds no modules.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Iterates over modules in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Module> {
        self.modules.iter()
    }

    /// Rebuilds the name index after deserialization.
    pub fn rebuild_index(&mut self) {
        self.index.clear();
        for (slot, module) in self.modules.iter().enumerate() {
            self.index.insert(module.name().to_string(), slot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let mut table = ModuleTable::new();
        table.insert(Module::new("a", 4, 2));
        table.insert(Module::new("b", 3, 3));
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("a").unwrap().width(), 4);
        assert_eq!(table.get("b").unwrap().height(), 3);
        assert!(table.get("c").is_none());
    }

    #[test]
    fn insert_same_name_replaces() {
        let mut table = ModuleTable::new();
        table.insert(Module::new("a", 4, 2));
        table.insert(Module::new("a", 7, 7));
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("a").unwrap().width(), 7);
    }

    #[test]
    fn get_mut_updates() {
        let mut table = ModuleTable::new();
        table.insert(Module::new("a", 4, 2));
        table.get_mut("a").unwrap().set_position(5, 6);
        assert_eq!((table.get("a").unwrap().x(), table.get("a").unwrap().y()), (5, 6));
    }

    #[test]
    fn iteration_is_insertion_ordered() {
        let mut table = ModuleTable::new();
        for name in ["z", "m", "a"] {
            table.insert(Module::new(name, 1, 1));
        }
        let names: Vec<&str> = table.iter().map(|m| m.name()).collect();
        assert_eq!(names, vec!["z", "m", "a"]);
    }

    #[test]
    fn empty_table() {
        let table = ModuleTable::new();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert!(!table.contains("a"));
    }

    #[test]
    fn serde_roundtrip_rebuilds_index() {
        let mut table = ModuleTable::new();
        table.insert(Module::new("a", 4, 2));
        table.insert(Module::new("b", 3, 3));

        let json = serde_json::to_string(&table).unwrap();
        let mut restored: ModuleTable = serde_json::from_str(&json).unwrap();
        restored.rebuild_index();

        assert_eq!(restored.len(), 2);
        assert_eq!(restored.get("b").unwrap().width(), 3);
    }
}
