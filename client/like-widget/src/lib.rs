/// Like Widget Library
///
/// Client counterpart of likes-service. The widget renders a like count and
/// routes its two operations (read, increment) to exactly one backing store,
/// chosen once at composition time:
///
/// - server mode: the likes-service HTTP surface (`RemoteCounter`)
/// - local mode: durable per-user key-value files, no network (`LocalCounter`)
///
/// # Modules
///
/// - `config`: mode selection and client configuration
/// - `store`: the `CounterBackend` seam and both implementations
/// - `widget`: the `LikeButton` state machine
/// - `posts`: read-only client for the external content source
/// - `error`: error types
pub mod config;
pub mod error;
pub mod posts;
pub mod store;
pub mod widget;

pub use config::{ClientConfig, Mode};
pub use error::WidgetError;
pub use store::{backend_for, CounterBackend, LocalCounter, RemoteCounter};
pub use widget::LikeButton;
