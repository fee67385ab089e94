mod assessment;
mod common;
mod incident;

pub use assessment::*;
pub use common::*;
pub use incident::*;
