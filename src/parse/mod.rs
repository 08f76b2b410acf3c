pub mod query_parser;
pub mod query_serializer;

pub use query_parser::{decode, decode_tokens};
pub use query_serializer::{encode, serialize_query, to_search};
