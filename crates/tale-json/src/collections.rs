//! Bulk conversions between JSON collections and runtime-object collections.
//!
//! Every element goes through [`decode_token`](crate::decode_token) or
//! [`encode`](crate::encode); nothing here looks at token shapes.

use indexmap::IndexMap;
use serde_json::{Map, Value as Json};
use tale_runtime::RuntimeObject;

use crate::decode::{as_int, decode_required};
use crate::encode::encode;
use crate::error::{malformed, Result};

/// Decodes an array one element at a time, optionally leaving out the last
/// element (a container's terminator).
pub fn decode_list(arr: &[Json], skip_last: bool) -> Result<Vec<RuntimeObject>> {
    let count = if skip_last {
        arr.len().saturating_sub(1)
    } else {
        arr.len()
    };
    arr[..count].iter().map(decode_required).collect()
}

/// Decodes every value of an object; keys and their order are kept.
pub fn decode_map(obj: &Map<String, Json>) -> Result<IndexMap<String, RuntimeObject>> {
    obj.iter()
        .map(|(key, value)| Ok((key.clone(), decode_required(value)?)))
        .collect()
}

/// Reads an object of integer counts, e.g. visit or turn tables.
pub fn decode_int_map(obj: &Map<String, Json>) -> Result<IndexMap<String, i64>> {
    obj.iter()
        .map(|(key, value)| {
            let n = as_int(value).ok_or_else(|| malformed(value, "count must be an integer"))?;
            Ok((key.clone(), n))
        })
        .collect()
}

pub fn encode_list(objs: &[RuntimeObject]) -> Result<Json> {
    objs.iter()
        .map(encode)
        .collect::<Result<Vec<_>>>()
        .map(Json::Array)
}

pub fn encode_map(map: &IndexMap<String, RuntimeObject>) -> Result<Json> {
    map.iter()
        .map(|(key, obj)| Ok((key.clone(), encode(obj)?)))
        .collect::<Result<Map<_, _>>>()
        .map(Json::Object)
}

pub fn encode_int_map(map: &IndexMap<String, i64>) -> Json {
    Json::Object(
        map.iter()
            .map(|(key, n)| (key.clone(), Json::from(*n)))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tale_runtime::{CommandType, GlueType, Value};

    #[test]
    fn decode_list_with_and_without_last() {
        let arr = json!(["ev", 1, "/ev"]);
        let arr = arr.as_array().unwrap();
        let all = decode_list(arr, false).unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[2].command_type(), Some(CommandType::EvalEnd));
        let head = decode_list(arr, true).unwrap();
        assert_eq!(head, all[..2].to_vec());
        assert!(decode_list(&[], true).unwrap().is_empty());
    }

    #[test]
    fn decode_map_keeps_keys_in_order() {
        let obj = json!({"z": "<>", "a": 4});
        let map = decode_map(obj.as_object().unwrap()).unwrap();
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["z", "a"]);
        assert_eq!(map["z"], RuntimeObject::Glue(GlueType::Bidirectional));
        assert_eq!(map["a"], RuntimeObject::Value(Value::Int(4)));
        assert_eq!(encode_map(&map).unwrap(), obj);
    }

    #[test]
    fn int_map_roundtrip() {
        let obj = json!({"knot": 3, "knot.stitch": "2"});
        let map = decode_int_map(obj.as_object().unwrap()).unwrap();
        assert_eq!(map["knot"], 3);
        assert_eq!(map["knot.stitch"], 2);
        assert_eq!(encode_int_map(&map), json!({"knot": 3, "knot.stitch": 2}));
        assert!(decode_int_map(json!({"k": "x"}).as_object().unwrap()).is_err());
    }

    #[test]
    fn list_errors_abort_the_whole_conversion() {
        let arr = json!(["ev", "nonsense", "/ev"]);
        assert!(decode_list(arr.as_array().unwrap(), false).is_err());

        let objs: Vec<RuntimeObject> =
            vec![Value::Int(1).into(), Value::Float(f64::INFINITY).into()];
        assert!(encode_list(&objs).is_err());
        assert_eq!(encode_list(&objs[..1]).unwrap(), json!([1]));
    }
}
