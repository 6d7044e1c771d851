// Export modules for library usage
pub mod chart;
pub mod cli;
pub mod config;
pub mod core;
pub mod io;
pub mod ranking;
pub mod report;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{
    Answer, AttemptRecord, ChartPoint, Component, DotType, ProfileReport, QuestionLink,
    RankedSelection, ScoreMap,
};

pub use crate::core::errors::{Error, Result, ResultExt};

pub use crate::chart::{classify, layout, point_angle, wrap_label, SeriesEntry};
pub use crate::config::{ChartConfig, ProfilemapConfig};
pub use crate::ranking::select;
pub use crate::report::{build_report, chart_points};
pub use crate::scoring::{aggregate, score_for, total};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
