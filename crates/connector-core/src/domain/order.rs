//! 주문 타입.
//!
//! 이 모듈은 커넥터에 전달되는 주문 관련 타입을 정의합니다:
//! - `Side` - 주문 방향 (매수/매도)
//! - `OrderType` - 주문 유형 (시장가, 지정가)
//! - `OrderIntent` - 정규 주문 의도
//! - `OrderResult` - 주문 제출 결과
//! - `OrderState` - 주문 상태 분류

use crate::types::{Price, Quantity};
use serde::{Deserialize, Serialize};

/// 주문 방향 (매수 또는 매도).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// 매수
    Buy,
    /// 매도
    Sell,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Buy => write!(f, "buy"),
            Side::Sell => write!(f, "sell"),
        }
    }
}

impl std::str::FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "buy" | "bid" => Ok(Side::Buy),
            "sell" | "ask" => Ok(Side::Sell),
            _ => Err(format!("Unknown side: {}", s)),
        }
    }
}

/// 주문 유형.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    /// 시장가 주문 - 가격 없이 즉시 체결
    Market,
    /// 지정가 주문 - 가격 필수
    Limit,
}

impl OrderType {
    /// 거래소로 전송되는 문자열 표기.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Market => "market",
            OrderType::Limit => "limit",
        }
    }
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OrderType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "market" => Ok(OrderType::Market),
            "limit" => Ok(OrderType::Limit),
            _ => Err(format!("Unknown order type: {}", s)),
        }
    }
}

/// 정규 주문 의도.
///
/// `price`는 지정가 주문에 필수이며 시장가 주문에서는 무시됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderIntent {
    /// 정규 심볼 (예: XRP/THB)
    pub symbol: String,
    /// 주문 유형
    pub order_type: OrderType,
    /// 주문 방향
    pub side: Side,
    /// 주문 수량
    pub amount: Quantity,
    /// 지정가
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
}

impl OrderIntent {
    /// 시장가 매수 주문을 생성합니다.
    pub fn market_buy(symbol: impl Into<String>, amount: Quantity) -> Self {
        Self {
            symbol: symbol.into(),
            order_type: OrderType::Market,
            side: Side::Buy,
            amount,
            price: None,
        }
    }

    /// 시장가 매도 주문을 생성합니다.
    pub fn market_sell(symbol: impl Into<String>, amount: Quantity) -> Self {
        Self {
            symbol: symbol.into(),
            order_type: OrderType::Market,
            side: Side::Sell,
            amount,
            price: None,
        }
    }

    /// 지정가 매수 주문을 생성합니다.
    pub fn limit_buy(symbol: impl Into<String>, amount: Quantity, price: Price) -> Self {
        Self {
            symbol: symbol.into(),
            order_type: OrderType::Limit,
            side: Side::Buy,
            amount,
            price: Some(price),
        }
    }

    /// 지정가 매도 주문을 생성합니다.
    pub fn limit_sell(symbol: impl Into<String>, amount: Quantity, price: Price) -> Self {
        Self {
            symbol: symbol.into(),
            order_type: OrderType::Limit,
            side: Side::Sell,
            amount,
            price: Some(price),
        }
    }

    /// 실제로 적용되는 가격. 시장가 주문은 항상 0입니다.
    pub fn effective_price(&self) -> Option<Price> {
        match self.order_type {
            OrderType::Market => Some(Price::ZERO),
            OrderType::Limit => self.price,
        }
    }
}

/// 주문 제출 결과.
///
/// 제출 시점에는 체결/상태를 추론하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderResult {
    /// 거래소 주문 ID
    pub id: Option<String>,
    /// 거래소가 응답한 주문 가격
    pub price: Option<Price>,
    /// 원시 응답
    #[serde(default)]
    pub info: serde_json::Value,
}

/// 주문 상태 분류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderState {
    /// 미체결 (대기 중 또는 부분 체결)
    Open,
    /// 전량 체결
    Closed,
}
