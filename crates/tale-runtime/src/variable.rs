use tale_path::Path;

/// Read of a variable, or of the visit count of a container.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VariableReference {
    Named(String),
    ReadCount(Path),
}

impl VariableReference {
    pub fn named(name: impl Into<String>) -> Self {
        VariableReference::Named(name.into())
    }

    pub fn read_count(path: Path) -> Self {
        VariableReference::ReadCount(path)
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            VariableReference::Named(name) => Some(name),
            VariableReference::ReadCount(_) => None,
        }
    }

    pub fn path_for_count(&self) -> Option<&Path> {
        match self {
            VariableReference::Named(_) => None,
            VariableReference::ReadCount(path) => Some(path),
        }
    }
}

/// Write of a variable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VariableAssignment {
    pub name: String,
    /// Global story variable rather than a temporary.
    pub is_global: bool,
    /// First declaration rather than re-assignment.
    pub is_new_declaration: bool,
}

impl VariableAssignment {
    pub fn global(name: impl Into<String>, is_new_declaration: bool) -> Self {
        Self {
            name: name.into(),
            is_global: true,
            is_new_declaration,
        }
    }

    pub fn temporary(name: impl Into<String>, is_new_declaration: bool) -> Self {
        Self {
            name: name.into(),
            is_global: false,
            is_new_declaration,
        }
    }
}
