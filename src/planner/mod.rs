pub mod constants;
pub mod regression;
pub mod solver;

pub use constants::*;
pub use regression::{estimate_requirement, LeastSquaresLine, Predictor, RequirementModel};
pub use solver::{optimize_diet, SolveOptions};
