// crates/batarong_core/src/input/registry.rs
use std::collections::HashMap;

use batarong_shared::{ActionId, ActionLookup};

#[derive(Default, Clone)]
pub struct ActionRegistry {
    name_to_id: HashMap<String, ActionId>,
    next_id: ActionId,
}

impl ActionRegistry {
    pub fn register(&mut self, name: &str) -> ActionId {
        if let Some(&id) = self.name_to_id.get(name) {
            return id;
        }
        let id = self.next_id;
        self.name_to_id.insert(name.to_string(), id);
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    pub fn get_id(&self, name: &str) -> Option<ActionId> {
        self.name_to_id.get(name).copied()
    }

    /// Registered (name, id) pairs, for the inspector.
    pub fn iter(&self) -> impl Iterator<Item = (&str, ActionId)> {
        self.name_to_id.iter().map(|(n, &id)| (n.as_str(), id))
    }
}

impl ActionLookup for ActionRegistry {
    fn action_id(&self, name: &str) -> Option<ActionId> {
        self.get_id(name)
    }
}
