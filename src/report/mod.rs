/// Report layer: field selection, relative time, line rendering.
pub mod fields;
pub mod render;
pub mod since;

pub use fields::{DEFAULT_FIELDS, FieldSet};
pub use render::{Line, RenderOptions, render};
pub use since::TimeStyle;
