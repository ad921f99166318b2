//! # Connector Core
//!
//! 거래소 커넥터들이 공유하는 정규(canonical) 트레이딩 모델을 제공합니다.
//!
//! 이 크레이트는 커넥터 전반에서 사용되는 기본 타입을 제공합니다:
//! - 심볼 및 마켓 정의
//! - 잔고 시트
//! - 주문 의도/결과 타입
//! - 출금 요청/결과 타입
//! - 설정 관리
//! - 로깅 인프라
//! - API 자격증명

pub mod config;
pub mod credentials;
pub mod domain;
pub mod error;
pub mod logging;
pub mod types;

pub use config::*;
pub use credentials::Credentials;
pub use domain::*;
pub use error::*;
pub use logging::*;
pub use types::*;
