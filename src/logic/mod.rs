pub mod calculations;
pub mod market;
pub mod revenue;
pub mod rules;

pub use rules::AdvisoryEngine;
