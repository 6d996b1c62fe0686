pub mod adjacency;
pub mod config;
pub mod error;
pub mod features;
pub mod geometry;
pub mod grouping;
pub mod intersect;
pub mod logging;
pub mod rect;
pub mod report;
pub mod scene;

pub use adjacency::{Adjacency, AdjacencyKind, adjacency};
pub use config::{Config, OutputFormat};
pub use error::{GeometryError, SceneError};
pub use features::{Feature, features};
pub use geometry::{Point, Segment};
pub use grouping::{Axis, AxisGroups, group_points};
pub use intersect::{contains, contains_with, intersect};
pub use rect::Rect;
pub use report::{Evaluation, PairReport, Relation, compare, evaluate, evaluate_all};
pub use scene::{NamedRect, Scene};
