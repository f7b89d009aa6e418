//! Per-instance action binding table

use crate::action::ActionType;
use crate::definition::ActionMap;
use crate::handler::HandlerRef;
use std::collections::HashMap;

/// Action type -> handler, one per store instance
///
/// Keys are unique; registering a type again replaces the previous entry.
pub struct BindingTable<S> {
    entries: HashMap<ActionType, HandlerRef<S>>,
}

impl<S> BindingTable<S> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Lazy-by-name entries for every pair of a static action map
    pub(crate) fn seeded(actions: &ActionMap) -> Self {
        let entries = actions
            .iter()
            .map(|(action_type, name)| (action_type.clone(), HandlerRef::NameLookup(name.clone())))
            .collect();
        Self { entries }
    }

    /// Insert or replace the handler for `action_type`
    pub(crate) fn insert(
        &mut self,
        action_type: ActionType,
        handler: HandlerRef<S>,
    ) -> Option<HandlerRef<S>> {
        let previous = self.entries.insert(action_type.clone(), handler);
        if let Some(previous) = &previous {
            log::trace!("Binding for `{}` replaced (was {:?})", action_type, previous);
        }
        previous
    }

    pub fn get(&self, action_type: &str) -> Option<&HandlerRef<S>> {
        self.entries.get(action_type)
    }

    pub fn contains(&self, action_type: &str) -> bool {
        self.entries.contains_key(action_type)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bound action types, sorted
    pub fn action_types(&self) -> Vec<&ActionType> {
        let mut types: Vec<_> = self.entries.keys().collect();
        types.sort();
        types
    }
}

impl<S> Default for BindingTable<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn name_of(table: &BindingTable<()>, action_type: &str) -> Option<String> {
        match table.get(action_type)? {
            HandlerRef::NameLookup(name) => Some(name.clone()),
            HandlerRef::Bound(_) => None,
        }
    }

    #[test]
    fn test_seeded_entries_are_lazy() {
        let mut actions = ActionMap::new();
        actions.insert("B".into(), "handleB".to_string());
        actions.insert("A".into(), "handleA".to_string());

        let table = BindingTable::<()>::seeded(&actions);
        assert_eq!(table.len(), 2);
        assert!(table.get("A").is_some_and(HandlerRef::is_lazy));
        assert_eq!(name_of(&table, "B").as_deref(), Some("handleB"));
        assert_eq!(
            table.action_types(),
            vec![&ActionType::from("A"), &ActionType::from("B")]
        );
    }

    #[test]
    fn test_last_insert_wins() {
        let mut table = BindingTable::<()>::new();
        assert!(table
            .insert("A".into(), HandlerRef::NameLookup("first".into()))
            .is_none());
        let previous = table.insert("A".into(), HandlerRef::NameLookup("second".into()));

        assert!(previous.is_some());
        assert_eq!(table.len(), 1);
        assert_eq!(name_of(&table, "A").as_deref(), Some("second"));
    }

    #[test]
    fn test_unknown_type() {
        let table = BindingTable::<()>::default();
        assert!(table.is_empty());
        assert!(!table.contains("NOPE"));
        assert!(table.get("NOPE").is_none());
    }
}
