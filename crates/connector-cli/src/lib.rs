//! Bitkub 커넥터 CLI 도구.
//!
//! 이 crate는 다음 기능을 제공합니다:
//! - 마켓 목록 조회
//! - 잔고 조회
//! - 주문 제출/취소 (드라이런 지원)
//! - 암호화폐 출금

pub mod commands;
