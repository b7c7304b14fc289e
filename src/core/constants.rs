//! A collection of constants.

/// Block glyphs from empty to full, one per eighth of a character cell.
pub const GLYPHS: [char; 9] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Distinct non-empty heights a single line can show.
pub const LEVELS_PER_LINE: usize = GLYPHS.len() - 1;

/// Height given to every sample of a flat series, per line.
pub const MIDPOINT_LEVEL: usize = LEVELS_PER_LINE / 2;

/// Rendered in place of a missing sample.
pub const BLANK: char = ' ';

/// Decoration applied to unmatched samples once emphasis is active.
pub const DEFAULT_LABEL: &str = "white";

/// Series used by the demo when the caller supplies none.
pub const DEMO_SAMPLES: [f64; 8] = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];

/// Name shown in the demo's command-line examples.
pub const PROGRAM_NAME: &str = "sparkline";
