//! tale-json - JSON bytecode codec for compiled stories.
//!
//! Decoding turns the compact JSON form of a story into the runtime object
//! graph of `tale-runtime`; encoding is its exact inverse.
//!
//! ```
//! use serde_json::json;
//! use tale_json::{decode_container, encode_container};
//!
//! let token = json!(["^Hello", "\n", "done", {"#n": "intro", "#f": 1}]);
//! let container = decode_container(token.as_array().unwrap()).unwrap();
//! assert_eq!(container.name.as_deref(), Some("intro"));
//! assert_eq!(encode_container(&container).unwrap(), token);
//! ```

pub mod collections;
mod decode;
mod document;
mod encode;
mod error;
pub mod opcode;

pub use collections::{
    decode_int_map, decode_list, decode_map, encode_int_map, encode_list, encode_map,
};
pub use decode::{decode_container, decode_token};
pub use document::StoryDocument;
pub use encode::{encode, encode_container};
pub use error::{CodecError, Result};
pub use opcode::{mnemonic, MnemonicTable};
