// Decision pipeline services
pub mod action_advisor;
pub mod decision_band;
pub mod decision_engine;
pub mod policy_gate;
pub mod risk_rubric;
pub mod threat_classifier;

pub use action_advisor::*;
pub use decision_band::*;
pub use decision_engine::*;
pub use policy_gate::*;
pub use risk_rubric::*;
pub use threat_classifier::*;
