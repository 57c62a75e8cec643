//! Jumps and conditional jump pairs.

use tale_path::Path;

/// Kind of call frame pushed by a divert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PushPopType {
    Tunnel,
    #[default]
    Function,
}

/// Where a divert goes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DivertTarget {
    /// Literal address.
    Path(Path),
    /// Name of a variable holding a divert target value.
    Variable(String),
}

/// Jump instruction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Divert {
    pub target: DivertTarget,
    pub pushes_to_stack: bool,
    pub stack_push_type: PushPopType,
    /// Call into a function hosted outside the story.
    pub is_external: bool,
    /// Expected argument count of an external call.
    pub external_args: usize,
}

impl Divert {
    /// Plain jump to `path`.
    pub fn to_path(path: Path) -> Self {
        Self {
            target: DivertTarget::Path(path),
            pushes_to_stack: false,
            stack_push_type: PushPopType::Function,
            is_external: false,
            external_args: 0,
        }
    }

    /// Plain jump through the variable `name`.
    pub fn to_variable(name: impl Into<String>) -> Self {
        Self {
            target: DivertTarget::Variable(name.into()),
            ..Self::to_path(Path::default())
        }
    }

    /// Divert that pushes a frame of the given kind before jumping.
    pub fn pushing(mut self, kind: PushPopType) -> Self {
        self.pushes_to_stack = true;
        self.stack_push_type = kind;
        self
    }

    /// Marks the divert as a call to an external function.
    pub fn external(mut self, args: usize) -> Self {
        self.is_external = true;
        self.pushes_to_stack = false;
        self.stack_push_type = PushPopType::Function;
        self.external_args = args;
        self
    }

    pub fn target_path(&self) -> Option<&Path> {
        match &self.target {
            DivertTarget::Path(path) => Some(path),
            DivertTarget::Variable(_) => None,
        }
    }

    pub fn variable_divert_name(&self) -> Option<&str> {
        match &self.target {
            DivertTarget::Path(_) => None,
            DivertTarget::Variable(name) => Some(name),
        }
    }

    pub fn has_variable_target(&self) -> bool {
        matches!(self.target, DivertTarget::Variable(_))
    }
}

/// Pair of optional diverts selected by a condition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Branch {
    pub true_divert: Option<Divert>,
    pub false_divert: Option<Divert>,
}

impl Branch {
    pub fn new(true_divert: Option<Divert>, false_divert: Option<Divert>) -> Self {
        Self {
            true_divert,
            false_divert,
        }
    }
}
