//! Container arrays.
//!
//! ```json
//! [<content>..., {"#f": 3, "#n": "name", "child": [...]}]
//! ```
//!
//! The trailing object (or `null`) is the terminator record; it is told apart
//! from content by position alone.

use serde_json::{Map, Value as Json};
use tale_runtime::{Container, CountFlags};
use tracing::trace;

use super::{as_int, decode_required};
use crate::collections::decode_list;
use crate::error::{malformed, Result};

/// Decodes a container array.
///
/// A trailing JSON object or `null` is the terminator and is not content;
/// when the last element is anything else, every element is content.
pub fn decode_container(arr: &[Json]) -> Result<Container> {
    let terminator = match arr.last() {
        Some(Json::Object(record)) => Some(Some(record)),
        Some(Json::Null) => Some(None),
        _ => None,
    };

    let mut container = Container::with_content(decode_list(arr, terminator.is_some())?);

    if let Some(Some(record)) = terminator {
        apply_terminator(&mut container, record)?;
    }

    trace!(
        name = container.name.as_deref().unwrap_or(""),
        content = container.content.len(),
        named = container.named_only_content().len(),
        flags = container.count_flags.bits(),
        "decoded container"
    );
    Ok(container)
}

fn apply_terminator(container: &mut Container, record: &Map<String, Json>) -> Result<()> {
    for (key, value) in record {
        match key.as_str() {
            "#f" => {
                let flags = as_int(value)
                    .and_then(|n| u32::try_from(n).ok())
                    .ok_or_else(|| malformed(value, "\"#f\" must be a non-negative integer"))?;
                container.count_flags = CountFlags(flags);
            }
            "#n" => {
                let name = value
                    .as_str()
                    .ok_or_else(|| malformed(value, "\"#n\" must be a string"))?;
                container.name = Some(name.to_string());
            }
            _ => container.insert_named(key.as_str(), decode_required(value)?),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tale_runtime::{RuntimeObject, Value};

    fn build(v: Json) -> Result<Container> {
        decode_container(v.as_array().unwrap())
    }

    #[test]
    fn terminator_sets_name_flags_and_named_content() {
        let c = build(json!([1, 2, {"#n": "mycontainer", "#f": 3, "sub": "void"}])).unwrap();
        assert_eq!(c.content, vec![RuntimeObject::from(Value::Int(1)), RuntimeObject::from(Value::Int(2))]);
        assert_eq!(c.name.as_deref(), Some("mycontainer"));
        assert_eq!(c.count_flags, CountFlags(3));
        assert_eq!(c.get_named("sub"), Some(&RuntimeObject::Void));
    }

    #[test]
    fn non_object_tail_is_content() {
        let c = build(json!([1, 2])).unwrap();
        assert_eq!(c.content.len(), 2);
        assert!(c.has_empty_terminator());
    }

    #[test]
    fn null_terminator_is_empty() {
        let c = build(json!(["^a", null])).unwrap();
        assert_eq!(c.content, vec![RuntimeObject::from(Value::string("a"))]);
        assert!(c.has_empty_terminator());
    }

    #[test]
    fn empty_array_is_empty_container() {
        let c = build(json!([])).unwrap();
        assert!(c.content.is_empty());
        assert!(c.has_empty_terminator());
    }

    #[test]
    fn named_children_take_their_key_as_name() {
        let c = build(json!([{"s": [["^x", {"#n": "inner"}], {"#n": "stale"}]}])).unwrap();
        let child = c.get_named("s").and_then(RuntimeObject::as_container).unwrap();
        assert_eq!(child.name.as_deref(), Some("s"));
        let inline = child.content[0].as_container().unwrap();
        assert_eq!(inline.name.as_deref(), Some("inner"));
    }

    #[test]
    fn bad_terminator_fields_fail() {
        assert!(build(json!([{"#n": 4}])).is_err());
        assert!(build(json!([{"#f": "x"}])).is_err());
        assert!(build(json!([{"#f": -1}])).is_err());
        assert!(build(json!([{"k": null}])).is_err());
    }
}
