pub mod config;
pub mod error;
pub mod types;

pub use config::RouteConfig;
pub use error::{Result, RouteError};
pub use types::{Point, PolygonId, VertexId};
