pub mod batch;
pub mod demo;
pub mod rows;
pub mod scale;
pub mod sparkline;

pub use batch::{batch, join};
pub use demo::demo;
pub use rows::{Row, split_rows};
pub use scale::{Height, scale, scale_with};
pub use sparkline::Renderer;
