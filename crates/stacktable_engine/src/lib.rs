//! Stacktable engine: search URL construction, HTTP fetch, payload decode.
mod decode;
mod engine;
mod fetch;
mod query;
mod types;

pub use decode::{decode_search_page, DecodeError};
pub use engine::EngineHandle;
pub use fetch::{FetchSettings, ReqwestSearchClient, SearchClient};
pub use query::{request_url, EngineConfig, PageRequest};
pub use types::{EngineEvent, FailureKind, FetchError, QuestionItem, RequestId, SearchPage};
