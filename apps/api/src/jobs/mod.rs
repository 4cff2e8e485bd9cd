// Job search core: upstream adapter, SQLite-backed store, and the ingestion
// pipeline that ties them together. All JSearch calls go through source —
// no other module talks to RapidAPI directly.

pub mod handlers;
pub mod pipeline;
pub mod source;
pub mod store;
