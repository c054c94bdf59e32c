pub mod adapters;
pub mod context;
pub mod errors;
pub mod policy;
pub mod prelude;
pub mod stages;

pub use stages::{InterceptorChain, Stage, StageOutcome};
