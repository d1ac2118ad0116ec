//! 부동산 포트폴리오 도메인 모델.
//!
//! 모든 엔티티는 지표 엔진의 읽기 전용 입력입니다. 생성/수정/삭제는
//! 외부 영속 계층의 책임입니다.

mod maintenance;
mod property;
mod snapshot;
mod tenant;

pub use maintenance::*;
pub use property::*;
pub use snapshot::*;
pub use tenant::*;
