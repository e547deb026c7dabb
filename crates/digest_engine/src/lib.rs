//! Digest engine: fetching the digest and publishing rendered pages.
mod engine;
mod fetch;
mod loader;
mod persist;
mod types;

pub use engine::{ChannelEventSink, EngineHandle, EventSink};
pub use fetch::{resolve_data_url, FetchSettings, Fetcher, ReqwestFetcher};
pub use loader::{DigestLoader, LoaderSettings, MAX_ATTEMPTS};
pub use persist::{ensure_output_dir, PagePublisher, PersistError};
pub use types::{EngineEvent, FailureKind, FetchError, FetchMetadata, FetchOutput, LoadError};
