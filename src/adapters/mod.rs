// Adapters layer: concrete implementations of the domain ports (http, storage, notifications).

pub mod http;
pub mod notifier;
pub mod storage;

pub use http::HttpFetcher;
pub use notifier::{BrowserNotifier, NoopNotifier};
pub use storage::LocalStorage;
