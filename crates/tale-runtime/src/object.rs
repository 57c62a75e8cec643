use crate::choice::{Choice, ChoicePoint};
use crate::container::Container;
use crate::control_command::{CommandType, ControlCommand};
use crate::divert::{Branch, Divert};
use crate::glue::GlueType;
use crate::native_function::NativeFunctionCall;
use crate::value::Value;
use crate::variable::{VariableAssignment, VariableReference};

/// Any node of the decoded instruction graph.
#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeObject {
    Container(Container),
    Value(Value),
    Glue(GlueType),
    ControlCommand(ControlCommand),
    NativeFunctionCall(NativeFunctionCall),
    Divert(Divert),
    ChoicePoint(ChoicePoint),
    VariableReference(VariableReference),
    VariableAssignment(VariableAssignment),
    Branch(Branch),
    Void,
    Choice(Choice),
}

impl RuntimeObject {
    pub fn kind(&self) -> &'static str {
        match self {
            RuntimeObject::Container(_) => "container",
            RuntimeObject::Value(_) => "value",
            RuntimeObject::Glue(_) => "glue",
            RuntimeObject::ControlCommand(_) => "control command",
            RuntimeObject::NativeFunctionCall(_) => "native function call",
            RuntimeObject::Divert(_) => "divert",
            RuntimeObject::ChoicePoint(_) => "choice point",
            RuntimeObject::VariableReference(_) => "variable reference",
            RuntimeObject::VariableAssignment(_) => "variable assignment",
            RuntimeObject::Branch(_) => "branch",
            RuntimeObject::Void => "void",
            RuntimeObject::Choice(_) => "choice",
        }
    }

    pub fn as_container(&self) -> Option<&Container> {
        match self {
            RuntimeObject::Container(c) => Some(c),
            _ => None,
        }
    }

    pub fn into_container(self) -> Option<Container> {
        match self {
            RuntimeObject::Container(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            RuntimeObject::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_divert(&self) -> Option<&Divert> {
        match self {
            RuntimeObject::Divert(d) => Some(d),
            _ => None,
        }
    }

    pub fn into_divert(self) -> Option<Divert> {
        match self {
            RuntimeObject::Divert(d) => Some(d),
            _ => None,
        }
    }

    pub fn command_type(&self) -> Option<CommandType> {
        match self {
            RuntimeObject::ControlCommand(c) => Some(c.command_type()),
            _ => None,
        }
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for RuntimeObject {
                fn from(v: $ty) -> Self {
                    RuntimeObject::$variant(v)
                }
            }
        )*
    };
}

impl_from! {
    Container => Container,
    Value => Value,
    GlueType => Glue,
    ControlCommand => ControlCommand,
    NativeFunctionCall => NativeFunctionCall,
    Divert => Divert,
    ChoicePoint => ChoicePoint,
    VariableReference => VariableReference,
    VariableAssignment => VariableAssignment,
    Branch => Branch,
    Choice => Choice,
}

impl From<CommandType> for RuntimeObject {
    fn from(command: CommandType) -> Self {
        RuntimeObject::ControlCommand(ControlCommand(command))
    }
}
