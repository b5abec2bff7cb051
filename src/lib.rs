//! Area and perimeter summaries for mixed shape collections.
//!
//! Shapes are grouped by kind and rendered as a short localized report
//! (English or Spanish) containing `<h1>` and `<br/>` markup fragments.

pub mod config;
pub mod i18n;
pub mod report;
pub mod shapes;

pub use i18n::Language;
pub use report::{generate_report, group_shapes, ReportGenerator, ShapeGroup};
pub use shapes::{Shape, ShapeError, ShapeKind};
