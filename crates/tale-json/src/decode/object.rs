//! Object-shaped tokens.
//!
//! Each shape is keyed on one or more marker keys; shapes are tried in the
//! order of [`OBJECT_PREDICATES`], never in key enumeration order.

use serde_json::{Map, Value as Json};
use tale_path::Path;
use tale_runtime::{
    Branch, Choice, ChoiceFlags, ChoicePoint, Divert, PushPopType, RuntimeObject, Value,
    VariableAssignment, VariablePointerValue, VariableReference,
};
use tracing::warn;

use super::{decode_token, int_field, str_field, u32_field};
use crate::error::{malformed, Result};

type ObjectPredicate = fn(&Json, &Map<String, Json>) -> Result<Option<RuntimeObject>>;

const OBJECT_PREDICATES: [ObjectPredicate; 8] = [
    divert_target_value,
    variable_pointer_value,
    divert,
    choice_point,
    variable_reference,
    variable_assignment,
    branch,
    legacy_choice,
];

pub(super) fn decode_object(token: &Json, obj: &Map<String, Json>) -> Result<Option<RuntimeObject>> {
    for predicate in OBJECT_PREDICATES {
        if let Some(decoded) = predicate(token, obj)? {
            return Ok(Some(decoded));
        }
    }
    Err(malformed(token, "unrecognised object"))
}

fn divert_target_value(token: &Json, obj: &Map<String, Json>) -> Result<Option<RuntimeObject>> {
    Ok(str_field(token, obj, "^->")?
        .map(|target| RuntimeObject::Value(Value::DivertTarget(Path::parse(target)))))
}

fn variable_pointer_value(token: &Json, obj: &Map<String, Json>) -> Result<Option<RuntimeObject>> {
    let Some(name) = str_field(token, obj, "^var")? else {
        return Ok(None);
    };
    let mut pointer = VariablePointerValue::new(name);
    if let Some(ci) = int_field(token, obj, "ci")? {
        let ci = i32::try_from(ci).map_err(|_| malformed(token, "\"ci\" is out of range"))?;
        pointer = pointer.with_context_index(ci);
    }
    Ok(Some(RuntimeObject::Value(Value::VariablePointer(pointer))))
}

#[derive(Debug, Clone, Copy)]
enum DivertKind {
    Jump,
    Function,
    Tunnel,
    External,
}

const DIVERT_KEYS: [(&str, DivertKind); 4] = [
    ("->", DivertKind::Jump),
    ("f()", DivertKind::Function),
    ("->t->", DivertKind::Tunnel),
    ("x()", DivertKind::External),
];

fn divert(token: &Json, obj: &Map<String, Json>) -> Result<Option<RuntimeObject>> {
    let mut present = DIVERT_KEYS.iter().filter(|(key, _)| obj.contains_key(*key));
    let Some(&(key, kind)) = present.next() else {
        return Ok(None);
    };
    if present.next().is_some() {
        return Err(malformed(token, "more than one divert key"));
    }
    let target = str_field(token, obj, key)?.unwrap_or_default();

    let mut divert = if obj.contains_key("var") {
        Divert::to_variable(target)
    } else {
        Divert::to_path(Path::parse(target))
    };
    match kind {
        DivertKind::Jump => {}
        DivertKind::Function => divert = divert.pushing(PushPopType::Function),
        DivertKind::Tunnel => divert = divert.pushing(PushPopType::Tunnel),
        DivertKind::External => {
            let args = match int_field(token, obj, "exArgs")? {
                Some(n) => usize::try_from(n).map_err(|_| malformed(token, "negative \"exArgs\""))?,
                None => 0,
            };
            divert = divert.external(args);
        }
    }
    Ok(Some(RuntimeObject::Divert(divert)))
}

fn choice_point(token: &Json, obj: &Map<String, Json>) -> Result<Option<RuntimeObject>> {
    let Some(path) = str_field(token, obj, "*")? else {
        return Ok(None);
    };
    let flags = u32_field(token, obj, "flg")?.unwrap_or(0);
    Ok(Some(RuntimeObject::ChoicePoint(ChoicePoint::new(
        Path::parse(path),
        ChoiceFlags(flags),
    ))))
}

fn variable_reference(token: &Json, obj: &Map<String, Json>) -> Result<Option<RuntimeObject>> {
    if let Some(name) = str_field(token, obj, "VAR?")? {
        return Ok(Some(VariableReference::named(name).into()));
    }
    if let Some(path) = str_field(token, obj, "CNT?")? {
        return Ok(Some(VariableReference::read_count(Path::parse(path)).into()));
    }
    Ok(None)
}

fn variable_assignment(token: &Json, obj: &Map<String, Json>) -> Result<Option<RuntimeObject>> {
    let is_new_declaration = !obj.contains_key("re");
    if let Some(name) = str_field(token, obj, "VAR=")? {
        return Ok(Some(VariableAssignment::global(name, is_new_declaration).into()));
    }
    if let Some(name) = str_field(token, obj, "temp=")? {
        return Ok(Some(VariableAssignment::temporary(name, is_new_declaration).into()));
    }
    Ok(None)
}

/// `{"t?": …, "f?": …}`. Each side is decoded through the full classifier;
/// the object is a branch only when at least one side is a divert. A side
/// that decodes to anything else is dropped with a warning.
fn branch(token: &Json, obj: &Map<String, Json>) -> Result<Option<RuntimeObject>> {
    let true_side = branch_side(obj, "t?")?;
    let false_side = branch_side(obj, "f?")?;
    if true_side.is_none() && false_side.is_none() {
        return Ok(None);
    }

    let true_divert = keep_divert(token, "t?", true_side);
    let false_divert = keep_divert(token, "f?", false_side);
    if true_divert.is_none() && false_divert.is_none() {
        return Ok(None);
    }
    Ok(Some(RuntimeObject::Branch(Branch::new(true_divert, false_divert))))
}

fn branch_side(obj: &Map<String, Json>, key: &str) -> Result<Option<RuntimeObject>> {
    match obj.get(key) {
        Some(side) => decode_token(side),
        None => Ok(None),
    }
}

fn keep_divert(token: &Json, key: &str, side: Option<RuntimeObject>) -> Option<Divert> {
    match side {
        Some(RuntimeObject::Divert(divert)) => Some(divert),
        Some(other) => {
            warn!(key, kind = other.kind(), %token, "branch side is not a divert; ignoring it");
            None
        }
        None => None,
    }
}

fn legacy_choice(token: &Json, obj: &Map<String, Json>) -> Result<Option<RuntimeObject>> {
    let original_choice_path = match obj.get("originalChoicePath") {
        None | Some(Json::Null) => return Ok(None),
        Some(_) => str_field(token, obj, "originalChoicePath")?.unwrap_or_default(),
    };
    let choice = Choice {
        text: str_field(token, obj, "text")?.unwrap_or_default().to_string(),
        index: int_field(token, obj, "index")?.unwrap_or(0),
        original_choice_path: original_choice_path.to_string(),
        original_thread_index: int_field(token, obj, "originalThreadIndex")?.unwrap_or(0),
    };
    Ok(Some(RuntimeObject::Choice(choice)))
}
