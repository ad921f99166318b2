//! Bitkub 거래소 연동 모듈.
//!
//! 이 모듈은 Bitkub REST API를 정규 트레이딩 모델로 변환합니다.
//!
//! # 구성 요소
//!
//! - `classifier`: 응답 본문의 `error` 코드를 파싱 전에 분류
//! - `signer`: 비공개 요청 서명 (HMAC-SHA256, hex)
//! - `markets`: 마켓 카탈로그 및 원시/정규 심볼 변환
//! - `balance`: 잔고 정규화
//! - `order`: 주문 제출/취소 요청 생성 및 응답 해석
//! - `withdraw`: 출금 검증 및 요청 생성
//! - `client`: reqwest 기반 클라이언트
//!
//! # API 문서
//!
//! 공식 API 문서: <https://github.com/bitkub/bitkub-official-api-docs/blob/master/restful-api.md>
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use connector_bitkub::{BitkubClient, BitkubConfig, Exchange, OrderOptions};
//! use connector_core::OrderIntent;
//!
//! let client = BitkubClient::new(BitkubConfig::from_env())?;
//! let order = OrderIntent::limit_buy("XRP/THB", dec!(20), dec!(100));
//! let result = client.create_order(&order, &OrderOptions::test()).await?;
//! println!("Order: {:?}", result.id);
//! ```

pub mod balance;
pub mod classifier;
pub mod client;
pub mod config;
pub mod endpoint;
pub mod markets;
pub mod order;
pub mod signer;
pub mod withdraw;

pub use classifier::classify;
pub use client::BitkubClient;
pub use config::BitkubConfig;
pub use endpoint::{Api, Endpoint};
pub use markets::MarketCatalog;
pub use signer::{RequestSigner, SignedRequest};

use serde_json::Value;

/// 응답 봉투에서 실제 페이로드를 꺼냅니다.
///
/// `result` 객체가 있으면 그것을, 없으면 최상위 객체를 사용합니다.
pub(crate) fn payload(raw: &Value) -> &Value {
    match raw.get("result") {
        Some(result) if result.is_object() => result,
        _ => raw,
    }
}

/// 숫자 또는 문자열 필드를 문자열로 읽습니다.
pub(crate) fn safe_string(obj: &Value, key: &str) -> Option<String> {
    match obj.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// 정수, 실수(버림), 숫자 문자열 필드를 정수로 읽습니다.
pub(crate) fn safe_integer(obj: &Value, key: &str) -> Option<i64> {
    match obj.get(key)? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
        }
        _ => None,
    }
}
