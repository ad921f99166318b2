//! 출금 요청 및 결과.

use crate::types::Quantity;
use serde::{Deserialize, Serialize};

/// 정규 출금 요청.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithdrawalRequest {
    /// 통화 코드 (예: BTC, XRP)
    pub currency: String,
    /// 출금 수량
    pub amount: Quantity,
    /// 목적지 주소
    pub address: String,
    /// 목적지 태그/메모 (XRP는 필수)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl WithdrawalRequest {
    pub fn new(currency: impl Into<String>, amount: Quantity, address: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            amount,
            address: address.into(),
            tag: None,
        }
    }

    /// 목적지 태그를 설정합니다.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}

/// 출금 결과.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithdrawalResult {
    /// 거래소 트랜잭션 ID (응답에 없으면 `None`)
    pub id: Option<String>,
    /// 원시 응답
    #[serde(default)]
    pub info: serde_json::Value,
}
