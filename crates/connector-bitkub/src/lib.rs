//! Bitkub 거래소 커넥터.
//!
//! 이 크레이트는 다음을 제공합니다:
//! - Exchange trait: 정규 모델 기반 거래소 인터페이스
//! - Bitkub REST 커넥터 (요청 서명, 응답 에러 분류)
//! - 마켓 카탈로그, 잔고, 주문, 출금 정규화
//! - 삽입 순서를 보존하는 요청 파라미터 타입

pub mod connector;
pub mod error;
pub mod params;
pub mod traits;

pub use connector::bitkub::{BitkubClient, BitkubConfig};
pub use error::*;
pub use params::RequestParams;
pub use traits::*;
