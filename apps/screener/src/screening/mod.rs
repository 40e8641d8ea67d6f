// Mock screening backend: latency-wrapped generation, bias analysis and
// skill matching. No real inference happens anywhere in here.

pub mod bias_analyzer;
pub mod service;
pub mod skill_match;

pub use bias_analyzer::{BiasAnalyzer, PassThroughBiasAnalyzer, RerollBiasAnalyzer};
pub use service::{validate_request, Screener, ScreeningService};
pub use skill_match::ResumeMatch;
