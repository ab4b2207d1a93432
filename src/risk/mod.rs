//! Risk factors, recommendations, and the engine that assembles a response's analysis.

mod engine;
mod factors;
mod recommend;

pub use engine::{confidence, FraudAnalysis, RiskEngine};
pub use factors::{identify, RiskFactor};
pub use recommend::{recommend, Recommendation};
