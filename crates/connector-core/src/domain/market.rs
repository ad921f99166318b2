//! 마켓 카탈로그 레코드.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 거래 가능한 마켓 하나를 나타내는 정규 레코드.
///
/// `symbol == base + "/" + quote` 가 항상 성립합니다.
/// `id`는 거래소의 숫자 식별자로, 원시 심볼 문자열과는 무관합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Market {
    /// 거래소 마켓 ID
    pub id: String,
    /// 정규 심볼 (예: BTC/THB)
    pub symbol: String,
    /// 기준 자산
    pub base: String,
    /// 호가 자산
    pub quote: String,
    /// 거래소 표기 기준 자산
    pub base_id: String,
    /// 거래소 표기 호가 자산
    pub quote_id: String,
    /// 거래 가능 여부
    pub active: bool,
    /// 테이커 수수료율 (0.0025 = 0.25%)
    #[serde(default)]
    pub taker: Decimal,
    /// 메이커 수수료율
    #[serde(default)]
    pub maker: Decimal,
    /// 원시 레코드
    #[serde(default)]
    pub info: serde_json::Value,
}
