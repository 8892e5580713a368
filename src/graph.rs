use std::collections::{BTreeSet, HashMap};

use log::trace;

use crate::model::Module;

/// Direct dependencies of every concrete module.
const EDGES: [(Module, &[Module]); 7] = [
    (Module::Base, &[]),
    (Module::Graphics, &[Module::Base]),
    (Module::Controls, &[Module::Base, Module::Graphics]),
    (Module::Fxml, &[Module::Base, Module::Graphics]),
    (Module::Media, &[Module::Base, Module::Graphics]),
    (Module::Swing, &[Module::Base, Module::Graphics]),
    (Module::Web, &[Module::Base, Module::Controls, Module::Media]),
];

/// Dependency graph over the module catalog.
#[derive(Debug, Clone)]
pub struct ModuleGraph {
    edges: HashMap<Module, Vec<Module>>,
}

impl Default for ModuleGraph {
    fn default() -> Self {
        ModuleGraph {
            edges: EDGES
                .iter()
                .map(|(module, dependencies)| (*module, dependencies.to_vec()))
                .collect(),
        }
    }
}

impl ModuleGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dependencies(&self, module: Module) -> &[Module] {
        self.edges.get(&module).map(Vec::as_slice).unwrap_or_default()
    }

    /// Every module reachable from `selected`, the selection included.
    ///
    /// Selecting [`Module::All`] yields the whole catalog regardless of the other selections.
    pub fn resolve_closure<'a>(
        &self,
        selected: impl IntoIterator<Item = &'a Module>,
    ) -> BTreeSet<Module> {
        let mut pending = Vec::new();
        for module in selected {
            if module.is_wildcard() {
                trace!("Wildcard module selected, using the full catalog");
                return Module::CATALOG.into_iter().collect();
            }
            pending.push(*module);
        }

        let mut closure = BTreeSet::new();
        while let Some(module) = pending.pop() {
            if closure.insert(module) {
                pending.extend(
                    self.dependencies(module)
                        .iter()
                        .filter(|dependency| !closure.contains(*dependency)),
                );
            }
        }
        closure
    }
}
