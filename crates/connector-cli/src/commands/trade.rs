//! 주문 제출 및 취소.

use anyhow::Result;
use connector_bitkub::{BitkubClient, Exchange, OrderOptions, RequestParams};
use connector_core::{OrderIntent, OrderType, Price, Quantity, Side};
use tracing::{info, warn};

use super::print_json;

/// 주문 명령 설정.
#[derive(Debug, Clone)]
pub struct PlaceOrderConfig {
    /// 정규 심볼 (예: XRP/THB)
    pub symbol: String,
    /// 주문 방향
    pub side: Side,
    /// 주문 유형
    pub order_type: OrderType,
    /// 수량
    pub amount: Quantity,
    /// 지정가 가격
    pub price: Option<Price>,
    /// 드라이런 엔드포인트 사용
    pub test_mode: bool,
    /// 추가 원시 파라미터
    pub extra: RequestParams,
}

impl PlaceOrderConfig {
    /// 정규 주문 의도로 변환합니다.
    pub fn intent(&self) -> OrderIntent {
        OrderIntent {
            symbol: self.symbol.clone(),
            order_type: self.order_type,
            side: self.side,
            amount: self.amount,
            price: self.price,
        }
    }

    pub fn options(&self) -> OrderOptions {
        OrderOptions {
            test_mode: self.test_mode,
            extra: self.extra.clone(),
        }
    }
}

/// 주문을 제출하고 결과를 JSON으로 출력합니다.
pub async fn place_order(client: &BitkubClient, config: PlaceOrderConfig) -> Result<()> {
    if config.order_type == OrderType::Market && config.price.is_some() {
        warn!("Price is ignored for market orders");
    }

    let result = client.create_order(&config.intent(), &config.options()).await?;

    if config.test_mode {
        info!("Test order accepted (no order was executed)");
    }

    print_json(&result)
}

/// 주문을 취소하고 원시 응답을 출력합니다.
pub async fn cancel_order(client: &BitkubClient, order_id: &str) -> Result<()> {
    let raw = client.cancel_order(order_id).await?;
    print_json(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_config_to_intent_and_options() {
        let config = PlaceOrderConfig {
            symbol: "XRP/THB".to_string(),
            side: Side::Buy,
            order_type: OrderType::Limit,
            amount: dec!(20),
            price: Some(dec!(100)),
            test_mode: true,
            extra: RequestParams::new().with("client_id", "cli-1"),
        };

        let intent = config.intent();
        assert_eq!(intent, OrderIntent::limit_buy("XRP/THB", dec!(20), dec!(100)));

        let options = config.options();
        assert!(options.test_mode);
        assert_eq!(options.extra.len(), 1);
    }
}
