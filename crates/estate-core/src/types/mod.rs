//! 포트폴리오 전반에서 사용되는 공통 타입.

mod calendar;
mod decimal;
pub mod serde_helpers;

pub use calendar::*;
pub use decimal::*;
