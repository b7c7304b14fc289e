//! Aggregates the "business logic" layer.

pub mod bounds;
pub mod color;
pub mod config;
pub mod constants;
pub mod data;
pub mod emphasis;
pub mod error;

// re-export frequently-used items for convenience
pub use bounds::Bounds;
pub use color::{Ansi, AnsiCode, ColorError, Decorator, Plain, colorize};
pub use config::{Config, ConfigBuilder};
pub use constants::{BLANK, DEFAULT_LABEL, GLYPHS, LEVELS_PER_LINE, MIDPOINT_LEVEL};
pub use data::{Sample, check_finite, parse_sample, read_samples};
pub use emphasis::{Comparison, EmphasisRule, match_emphasis};
pub use error::{ConfigError, ParseRuleError, ParseSampleError, SparkError};
