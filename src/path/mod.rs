mod builder;
mod style;
mod visuals;

pub use builder::PathBuilder;
pub use style::PathStyle;
pub use visuals::{DrawingSummary, CROSS_ARM_AFTER, CROSS_ARM_BEFORE};
