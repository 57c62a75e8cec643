//! Containers: the addressable nodes of the content tree.

use indexmap::IndexMap;

use crate::object::RuntimeObject;

/// Bitmask of the visit/turn counting a container asks the VM to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CountFlags(pub u32);

impl CountFlags {
    pub const VISITS: u32 = 1;
    pub const TURNS: u32 = 2;
    pub const COUNT_START_ONLY: u32 = 4;

    pub fn bits(self) -> u32 {
        self.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn visits_should_be_counted(self) -> bool {
        self.0 & Self::VISITS != 0
    }

    pub fn turn_index_should_be_counted(self) -> bool {
        self.0 & Self::TURNS != 0
    }

    pub fn counting_at_start_only(self) -> bool {
        self.0 & Self::COUNT_START_ONLY != 0
    }
}

/// Ordered content plus named children that are only reachable by name.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Container {
    pub name: Option<String>,
    pub count_flags: CountFlags,
    pub content: Vec<RuntimeObject>,
    named_only_content: IndexMap<String, RuntimeObject>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_content(content: Vec<RuntimeObject>) -> Self {
        Self {
            content,
            ..Self::default()
        }
    }

    pub fn push(&mut self, obj: impl Into<RuntimeObject>) {
        self.content.push(obj.into());
    }

    /// Stores `obj` under `key`. A container stored this way takes `key` as
    /// its name, so a child's name always matches its key.
    pub fn insert_named(&mut self, key: impl Into<String>, obj: impl Into<RuntimeObject>) {
        let key = key.into();
        let mut obj = obj.into();
        if let RuntimeObject::Container(child) = &mut obj {
            child.name = Some(key.clone());
        }
        self.named_only_content.insert(key, obj);
    }

    pub fn named_only_content(&self) -> &IndexMap<String, RuntimeObject> {
        &self.named_only_content
    }

    pub fn get_named(&self, key: &str) -> Option<&RuntimeObject> {
        self.named_only_content.get(key)
    }

    pub fn remove_named(&mut self, key: &str) -> Option<RuntimeObject> {
        self.named_only_content.shift_remove(key)
    }

    /// Named children in the ordered content plus the named-only ones.
    pub fn named_content(&self) -> impl Iterator<Item = (&str, &RuntimeObject)> {
        let in_content = self.content.iter().filter_map(|obj| match obj {
            RuntimeObject::Container(c) => c.name.as_deref().map(|name| (name, obj)),
            _ => None,
        });
        let named_only = self
            .named_only_content
            .iter()
            .map(|(k, v)| (k.as_str(), v));
        in_content.chain(named_only)
    }

    /// True when the container carries no name, flags or named content.
    pub fn has_empty_terminator(&self) -> bool {
        self.name.is_none() && self.count_flags.is_empty() && self.named_only_content.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;

    #[test]
    fn insert_named_renames_containers() {
        let mut parent = Container::new();
        parent.insert_named("child", Container::named("stale"));
        parent.insert_named("v", Value::Int(1));
        match parent.get_named("child") {
            Some(RuntimeObject::Container(c)) => assert_eq!(c.name.as_deref(), Some("child")),
            other => panic!("expected container, got {other:?}"),
        }
        assert_eq!(parent.named_only_content().len(), 2);
        assert!(!parent.has_empty_terminator());
    }

    #[test]
    fn named_content_includes_content_children() {
        let mut parent = Container::new();
        parent.push(Container::named("inline"));
        parent.push(Value::Int(3));
        parent.insert_named("only", Container::new());
        let names: Vec<&str> = parent.named_content().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["inline", "only"]);
    }

    #[test]
    fn count_flags_accessors() {
        let flags = CountFlags(CountFlags::VISITS | CountFlags::COUNT_START_ONLY);
        assert!(flags.visits_should_be_counted());
        assert!(!flags.turn_index_should_be_counted());
        assert!(flags.counting_at_start_only());
    }
}
