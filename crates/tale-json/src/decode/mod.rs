//! JSON token → runtime object.
//!
//! Token shapes overlap (a bare string may be text, glue, an opcode or an
//! operator), so each family of shapes is resolved by an ordered list of
//! predicates. A predicate returns `Ok(None)` when the token is not its
//! shape; the first `Some` wins.

mod container;
mod object;

use serde_json::{Map, Number, Value as Json};
use tale_runtime::{ControlCommand, GlueType, NativeFunctionCall, RuntimeObject, Value};

use crate::error::{malformed, Result};
use crate::opcode::MnemonicTable;

pub use container::decode_container;

type StringPredicate = fn(&str, &MnemonicTable) -> Option<RuntimeObject>;

/// Bare-string shapes in priority order.
const STRING_PREDICATES: [StringPredicate; 7] = [
    escaped_text,
    newline,
    glue,
    control_command,
    native_function,
    pop_fallback,
    void,
];

/// Decodes one token.
///
/// `null` decodes to `Ok(None)`; every other token either yields a runtime
/// object or fails with [`CodecError::MalformedToken`](crate::CodecError).
pub fn decode_token(token: &Json) -> Result<Option<RuntimeObject>> {
    let table = MnemonicTable::global()?;

    match token {
        Json::Number(n) => number_value(token, n).map(|v| Some(RuntimeObject::Value(v))),
        Json::String(s) => match parse_numeric_str(s) {
            Some(value) => Ok(Some(RuntimeObject::Value(value))),
            None => STRING_PREDICATES
                .iter()
                .find_map(|predicate| predicate(s.as_str(), table))
                .map(Some)
                .ok_or_else(|| malformed(token, "unrecognised string")),
        },
        Json::Object(obj) => object::decode_object(token, obj),
        Json::Array(arr) => decode_container(arr).map(|c| Some(RuntimeObject::Container(c))),
        Json::Null => Ok(None),
        Json::Bool(_) => Err(malformed(token, "unsupported scalar")),
    }
}

/// Decodes a token that must produce an object, as in list and map slots.
pub(crate) fn decode_required(token: &Json) -> Result<RuntimeObject> {
    decode_token(token)?.ok_or_else(|| malformed(token, "null where content is required"))
}

// ── Numbers ─────────────────────────────────────────────────────────────

/// JSON integers stay `Int` and JSON floats stay `Float`, whatever their
/// magnitude or fractional part.
fn number_value(token: &Json, n: &Number) -> Result<Value> {
    if let Some(i) = n.as_i64() {
        return Ok(Value::Int(i));
    }
    match n.as_f64() {
        Some(f) if n.is_f64() => Ok(Value::Float(f)),
        _ => Err(malformed(token, "integer out of range")),
    }
}

/// Reads strings like `"5"`, `"-2.5"` or `"1e3"` as numbers. Words such as
/// `"inf"` and the newline string never count as numeric.
fn parse_numeric_str(s: &str) -> Option<Value> {
    if s == "\n" || s.is_empty() {
        return None;
    }
    let numeric_chars = s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'-' | b'+' | b'.' | b'e' | b'E'));
    if !numeric_chars {
        return None;
    }
    if let Ok(i) = s.parse::<i64>() {
        return Some(Value::Int(i));
    }
    s.parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .map(Value::from_number)
}

// ── Strings ─────────────────────────────────────────────────────────────

fn escaped_text(s: &str, _: &MnemonicTable) -> Option<RuntimeObject> {
    s.strip_prefix('^')
        .map(|text| RuntimeObject::Value(Value::string(text)))
}

fn newline(s: &str, _: &MnemonicTable) -> Option<RuntimeObject> {
    (s == "\n").then(|| RuntimeObject::Value(Value::newline()))
}

fn glue(s: &str, _: &MnemonicTable) -> Option<RuntimeObject> {
    let glue = match s {
        "<>" => GlueType::Bidirectional,
        "G<" => GlueType::Left,
        "G>" => GlueType::Right,
        _ => return None,
    };
    Some(RuntimeObject::Glue(glue))
}

fn control_command(s: &str, table: &MnemonicTable) -> Option<RuntimeObject> {
    table
        .command_for(s)
        .map(|command| RuntimeObject::ControlCommand(ControlCommand(command)))
}

fn native_function(s: &str, _: &MnemonicTable) -> Option<RuntimeObject> {
    NativeFunctionCall::with_name(s).map(RuntimeObject::NativeFunctionCall)
}

/// Frame pops are in the mnemonic table too; this only keeps them
/// recognised should the table ever stop listing them.
fn pop_fallback(s: &str, _: &MnemonicTable) -> Option<RuntimeObject> {
    match s {
        "->->" => Some(ControlCommand::pop_tunnel().into()),
        "~ret" => Some(ControlCommand::pop_function().into()),
        _ => None,
    }
}

fn void(s: &str, _: &MnemonicTable) -> Option<RuntimeObject> {
    (s == "void").then_some(RuntimeObject::Void)
}

// ── Field extraction ────────────────────────────────────────────────────

/// Optional string field. Present but not a string is malformed.
pub(crate) fn str_field<'a>(
    token: &Json,
    obj: &'a Map<String, Json>,
    key: &str,
) -> Result<Option<&'a str>> {
    match obj.get(key) {
        None => Ok(None),
        Some(Json::String(s)) => Ok(Some(s)),
        Some(_) => Err(malformed(token, format!("\"{key}\" must be a string"))),
    }
}

/// Optional integer field. Accepts a JSON integer, a whole-number JSON float
/// such as `3.0`, or a string holding an integer.
pub(crate) fn int_field(token: &Json, obj: &Map<String, Json>, key: &str) -> Result<Option<i64>> {
    match obj.get(key) {
        None => Ok(None),
        Some(v) => as_int(v)
            .map(Some)
            .ok_or_else(|| malformed(token, format!("\"{key}\" must be an integer"))),
    }
}

pub(crate) fn as_int(v: &Json) -> Option<i64> {
    match v {
        Json::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Json::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

pub(crate) fn u32_field(token: &Json, obj: &Map<String, Json>, key: &str) -> Result<Option<u32>> {
    match int_field(token, obj, key)? {
        None => Ok(None),
        Some(i) => u32::try_from(i)
            .map(Some)
            .map_err(|_| malformed(token, format!("\"{key}\" is out of range"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tale_runtime::{CommandType, StringValue};

    fn decode(v: Json) -> RuntimeObject {
        decode_token(&v).unwrap().unwrap()
    }

    #[test]
    fn numbers_and_numeric_strings() {
        assert_eq!(decode(json!(5)), RuntimeObject::Value(Value::Int(5)));
        assert_eq!(decode(json!("5")), RuntimeObject::Value(Value::Int(5)));
        assert_eq!(decode(json!(2.5)), RuntimeObject::Value(Value::Float(2.5)));
        assert_eq!(decode(json!("-0.25")), RuntimeObject::Value(Value::Float(-0.25)));
        assert_eq!(
            decode(json!(10_000_000_000i64)),
            RuntimeObject::Value(Value::Int(10_000_000_000))
        );
        assert_eq!(decode(json!("1e3")), RuntimeObject::Value(Value::Int(1000)));
    }

    #[test]
    fn json_number_kind_decides_int_or_float() {
        assert_eq!(decode(json!(2.0)), RuntimeObject::Value(Value::Float(2.0)));
        assert_eq!(decode(json!(-0.0)), RuntimeObject::Value(Value::Float(-0.0)));
        assert_eq!(decode(json!(2)), RuntimeObject::Value(Value::Int(2)));
        assert_eq!(
            decode(json!(i64::MIN)),
            RuntimeObject::Value(Value::Int(i64::MIN))
        );
    }

    #[test]
    fn integers_beyond_i64_are_malformed() {
        let err = decode_token(&json!(u64::MAX)).unwrap_err();
        assert!(matches!(err, crate::CodecError::MalformedToken { .. }));
    }

    #[test]
    fn newline_is_never_numeric() {
        assert_eq!(parse_numeric_str("\n"), None);
        assert_eq!(
            decode(json!("\n")),
            RuntimeObject::Value(Value::Str(StringValue::new("\n")))
        );
    }

    #[test]
    fn numeric_words_are_not_numbers() {
        assert_eq!(parse_numeric_str("inf"), None);
        assert_eq!(parse_numeric_str("NaN"), None);
        assert_eq!(parse_numeric_str("-"), None);
        assert_eq!(parse_numeric_str("."), None);
        assert_eq!(parse_numeric_str(""), None);
    }

    #[test]
    fn escaped_text_wins_over_everything() {
        assert_eq!(decode(json!("^ev")), RuntimeObject::Value(Value::string("ev")));
        assert_eq!(decode(json!("^5")), RuntimeObject::Value(Value::string("5")));
        assert_eq!(decode(json!("^")), RuntimeObject::Value(Value::string("")));
    }

    #[test]
    fn string_predicates_in_order() {
        assert_eq!(decode(json!("<>")), RuntimeObject::Glue(GlueType::Bidirectional));
        assert_eq!(decode(json!("G<")), RuntimeObject::Glue(GlueType::Left));
        assert_eq!(decode(json!("G>")), RuntimeObject::Glue(GlueType::Right));
        assert_eq!(decode(json!("ev")).command_type(), Some(CommandType::EvalStart));
        assert_eq!(decode(json!("->->")).command_type(), Some(CommandType::PopTunnel));
        assert_eq!(decode(json!("~ret")).command_type(), Some(CommandType::PopFunction));
        assert_eq!(decode(json!("void")), RuntimeObject::Void);
        assert!(matches!(
            decode(json!("&&")),
            RuntimeObject::NativeFunctionCall(c) if c.name() == "&&"
        ));
    }

    #[test]
    fn pop_fallback_matches_table() {
        let table = MnemonicTable::global().unwrap();
        for s in ["->->", "~ret"] {
            assert_eq!(pop_fallback(s, table), control_command(s, table));
        }
    }

    #[test]
    fn unknown_strings_and_scalars_fail() {
        assert!(decode_token(&json!("hello")).is_err());
        assert!(decode_token(&json!("")).is_err());
        assert!(decode_token(&json!(true)).is_err());
    }

    #[test]
    fn null_is_absent() {
        assert_eq!(decode_token(&Json::Null).unwrap(), None);
        assert!(decode_required(&Json::Null).is_err());
    }

    #[test]
    fn int_field_accepts_numeric_strings() {
        let token = json!({"a": "7", "b": 3.0, "c": 2.5, "d": [1]});
        let obj = token.as_object().unwrap();
        assert_eq!(int_field(&token, obj, "a").unwrap(), Some(7));
        assert_eq!(int_field(&token, obj, "b").unwrap(), Some(3));
        assert!(int_field(&token, obj, "c").is_err());
        assert!(int_field(&token, obj, "d").is_err());
        assert_eq!(int_field(&token, obj, "missing").unwrap(), None);
    }
}
