pub mod dataset;
pub mod panel;
pub mod series;

pub mod util;
