//! Screen module: lifecycle orchestration and output interception.

mod intercept;
mod manager;

pub use intercept::{InterceptGate, TeeWriter};
pub use manager::{ScreenConfig, ScreenManager};
