//! tale-runtime - in-memory instruction graph of a compiled story.
//!
//! Every node the story VM executes is a [`RuntimeObject`]: containers of
//! content, literal values, glue, control commands, diverts, choice points
//! and variable operations. The types here are plain data holders; loading
//! them from the JSON bytecode lives in `tale-json`.

mod choice;
mod container;
mod control_command;
mod divert;
mod glue;
mod native_function;
mod object;
mod value;
mod variable;

pub use choice::{Choice, ChoiceFlags, ChoicePoint};
pub use container::{Container, CountFlags};
pub use control_command::{CommandType, ControlCommand};
pub use divert::{Branch, Divert, DivertTarget, PushPopType};
pub use glue::GlueType;
pub use native_function::{NativeFunctionCall, NativeOp};
pub use object::RuntimeObject;
pub use value::{StringValue, Value, VariablePointerValue};
pub use variable::{VariableAssignment, VariableReference};

pub use tale_path::{Component, Path};
