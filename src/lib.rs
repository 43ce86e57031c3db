//! Canvaslib - a small 2D canvas helper library
//!
//! Core modules:
//! - `stage`: Surface owner with a fluent drawing API, input state, events and scenes
//! - `math`, `geometry`: Scalar/vector helpers and collision predicates
//! - `random`: Seeded random numbers, vectors and angles
//! - `options`: Drawing and stage options with JSON defaults merging
//! - `surface`: Drawing surface trait plus a recording implementation
//! - `platform`: Browser canvas, DOM input and animation frames (wasm32)

pub mod error;
pub mod geometry;
pub mod images;
pub mod keys;
pub mod math;
pub mod options;
pub mod platform;
pub mod random;
pub mod stage;
pub mod surface;
pub mod validate;

pub use error::{ClibError, Result};
pub use geometry::{Aabb, Circle};
pub use images::ImageBatch;
pub use options::{FillOptions, OptionSet, Shadow, StageOptions, StrokeOptions, TextOptions};
pub use random::{AngleUnit, Random};
pub use stage::{EventKind, InputEvent, ListenerHandle, Scene, Stage, StageEvent};
pub use surface::{RecordingSurface, Surface};

pub use glam::Vec2;
