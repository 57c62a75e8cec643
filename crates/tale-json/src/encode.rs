//! Runtime object → JSON token.
//!
//! The exact inverse of [`decode_token`](crate::decode_token): every token
//! produced here decodes back to an equal object. Values JSON cannot spell
//! (NaN, infinities) are rejected rather than written as `null`.

use serde_json::{json, Map, Value as Json};
use tale_runtime::{
    Container, Divert, DivertTarget, GlueType, PushPopType, RuntimeObject, Value,
    VariableReference,
};

use crate::error::{CodecError, Result};
use crate::opcode::mnemonic;

/// Serialize a runtime object to its JSON token.
pub fn encode(obj: &RuntimeObject) -> Result<Json> {
    let token = match obj {
        RuntimeObject::Container(c) => return encode_container(c),
        RuntimeObject::Value(v) => return encode_value(v),
        RuntimeObject::Glue(g) => Json::from(match g {
            GlueType::Bidirectional => "<>",
            GlueType::Left => "G<",
            GlueType::Right => "G>",
        }),
        RuntimeObject::ControlCommand(c) => Json::from(mnemonic(c.command_type())),
        RuntimeObject::NativeFunctionCall(call) => Json::from(call.name()),
        RuntimeObject::Divert(d) => encode_divert(d),
        RuntimeObject::ChoicePoint(cp) => json!({
            "*": cp.path_on_choice.to_string(),
            "flg": cp.flags.bits()
        }),
        RuntimeObject::VariableReference(VariableReference::Named(name)) => json!({ "VAR?": name }),
        RuntimeObject::VariableReference(VariableReference::ReadCount(path)) => {
            json!({ "CNT?": path.to_string() })
        }
        RuntimeObject::VariableAssignment(assign) => {
            let mut m = Map::new();
            let key = if assign.is_global { "VAR=" } else { "temp=" };
            m.insert(key.into(), json!(assign.name));
            if !assign.is_new_declaration {
                m.insert("re".into(), json!(true));
            }
            Json::Object(m)
        }
        RuntimeObject::Branch(b) => {
            let mut m = Map::new();
            if let Some(d) = &b.true_divert {
                m.insert("t?".into(), encode_divert(d));
            }
            if let Some(d) = &b.false_divert {
                m.insert("f?".into(), encode_divert(d));
            }
            Json::Object(m)
        }
        RuntimeObject::Void => Json::from("void"),
        RuntimeObject::Choice(choice) => json!({
            "text": choice.text,
            "index": choice.index,
            "originalChoicePath": choice.original_choice_path,
            "originalThreadIndex": choice.original_thread_index
        }),
    };
    Ok(token)
}

fn encode_value(value: &Value) -> Result<Json> {
    let token = match value {
        Value::Int(i) => json!(i),
        Value::Float(f) => serde_json::Number::from_f64(*f)
            .map(Json::Number)
            .ok_or(CodecError::NonFiniteNumber(*f))?,
        Value::Str(s) if s.is_newline() => Json::from("\n"),
        Value::Str(s) => Json::String(format!("^{}", s.text)),
        Value::DivertTarget(path) => json!({ "^->": path.to_string() }),
        Value::VariablePointer(ptr) => {
            let mut m = Map::new();
            m.insert("^var".into(), json!(ptr.name));
            if let Some(ci) = ptr.context_index {
                m.insert("ci".into(), json!(ci));
            }
            Json::Object(m)
        }
    };
    Ok(token)
}

fn encode_divert(divert: &Divert) -> Json {
    let key = if divert.is_external {
        "x()"
    } else if !divert.pushes_to_stack {
        "->"
    } else {
        match divert.stack_push_type {
            PushPopType::Function => "f()",
            PushPopType::Tunnel => "->t->",
        }
    };

    let mut m = Map::new();
    match &divert.target {
        DivertTarget::Path(path) => {
            m.insert(key.into(), json!(path.to_string()));
        }
        DivertTarget::Variable(name) => {
            m.insert(key.into(), json!(name));
            m.insert("var".into(), json!(true));
        }
    }
    if divert.is_external && divert.external_args > 0 {
        m.insert("exArgs".into(), json!(divert.external_args));
    }
    Json::Object(m)
}

/// Serialize a container: content elements followed by the terminator.
pub fn encode_container(container: &Container) -> Result<Json> {
    encode_container_inner(container, false)
}

/// Named-only children are written under their key without `"#n"`; the key
/// restores the name on decode.
fn encode_container_inner(container: &Container, without_name: bool) -> Result<Json> {
    let mut arr = container
        .content
        .iter()
        .map(encode)
        .collect::<Result<Vec<_>>>()?;

    let mut terminator = Map::new();
    for (key, obj) in container.named_only_content() {
        let token = match obj {
            RuntimeObject::Container(child) => encode_container_inner(child, true)?,
            other => encode(other)?,
        };
        terminator.insert(key.clone(), token);
    }
    if !container.count_flags.is_empty() {
        terminator.insert("#f".into(), json!(container.count_flags.bits()));
    }
    if let (Some(name), false) = (&container.name, without_name) {
        terminator.insert("#n".into(), json!(name));
    }

    arr.push(if terminator.is_empty() {
        Json::Null
    } else {
        Json::Object(terminator)
    });
    Ok(Json::Array(arr))
}
