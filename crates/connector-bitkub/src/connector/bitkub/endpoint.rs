//! Bitkub REST 엔드포인트 테이블.
//!
//! 엔드포인트는 문자열 조합이 아닌 열거형으로 식별하며,
//! 고정된 테이블을 통해 (메서드, 경로, 인증) 기술자로 변환됩니다.

use connector_core::Side;
use reqwest::Method;

/// 엔드포인트 인증 유형.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Api {
    /// 인증 불필요
    Public,
    /// 서명 필요
    Private,
}

/// Bitkub REST 엔드포인트.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// 마켓 목록
    MarketSymbols,
    /// 잔고
    Balances,
    /// 매수 주문
    PlaceBid,
    /// 매도 주문
    PlaceAsk,
    /// 매수 주문 (드라이런)
    PlaceBidTest,
    /// 매도 주문 (드라이런)
    PlaceAskTest,
    /// 주문 취소
    CancelOrder,
    /// 주문 정보
    OrderInfo,
    /// 미체결 주문
    OpenOrders,
    /// 주문 내역
    OrderHistory,
    /// 출금
    Withdraw,
    /// 입금 주소
    DepositAddresses,
}

impl Endpoint {
    /// 모든 엔드포인트.
    pub const ALL: [Endpoint; 12] = [
        Endpoint::MarketSymbols,
        Endpoint::Balances,
        Endpoint::PlaceBid,
        Endpoint::PlaceAsk,
        Endpoint::PlaceBidTest,
        Endpoint::PlaceAskTest,
        Endpoint::CancelOrder,
        Endpoint::OrderInfo,
        Endpoint::OpenOrders,
        Endpoint::OrderHistory,
        Endpoint::Withdraw,
        Endpoint::DepositAddresses,
    ];

    /// 기본 URL 기준 상대 경로.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::MarketSymbols => "market/symbols",
            Endpoint::Balances => "market/balances",
            Endpoint::PlaceBid => "market/place-bid",
            Endpoint::PlaceAsk => "market/place-ask",
            Endpoint::PlaceBidTest => "market/place-bid/test",
            Endpoint::PlaceAskTest => "market/place-ask/test",
            Endpoint::CancelOrder => "market/cancel-order",
            Endpoint::OrderInfo => "market/order-info",
            Endpoint::OpenOrders => "market/my-open-orders",
            Endpoint::OrderHistory => "market/my-order-history",
            Endpoint::Withdraw => "crypto/withdraw",
            Endpoint::DepositAddresses => "crypto/addresses",
        }
    }

    pub fn api(&self) -> Api {
        match self {
            Endpoint::MarketSymbols => Api::Public,
            _ => Api::Private,
        }
    }

    pub fn method(&self) -> Method {
        match self.api() {
            Api::Public => Method::GET,
            Api::Private => Method::POST,
        }
    }

    /// (방향, 테스트 모드)에 해당하는 주문 엔드포인트.
    pub fn for_order(side: Side, test_mode: bool) -> Endpoint {
        match (side, test_mode) {
            (Side::Buy, false) => Endpoint::PlaceBid,
            (Side::Buy, true) => Endpoint::PlaceBidTest,
            (Side::Sell, false) => Endpoint::PlaceAsk,
            (Side::Sell, true) => Endpoint::PlaceAskTest,
        }
    }

    /// 드라이런 엔드포인트인지 확인.
    pub fn is_dry_run(&self) -> bool {
        matches!(self, Endpoint::PlaceBidTest | Endpoint::PlaceAskTest)
    }
}
