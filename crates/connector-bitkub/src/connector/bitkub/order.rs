//! 주문 요청 생성 및 응답 해석.

use connector_core::{
    decimal_from_json, DecimalExt, OrderIntent, OrderResult, OrderState, OrderType,
};
use rust_decimal::Decimal;
use serde_json::Value;

use super::endpoint::Endpoint;
use super::markets::to_raw_symbol;
use super::{payload, safe_string};
use crate::{ExchangeError, ExchangeResult, OrderOptions, RequestParams};

/// 주문 의도를 원시 파라미터와 엔드포인트로 변환합니다.
///
/// 필드 순서: `sym`, `amt`, `typ`, `rat`(지정가만), 추가 파라미터.
/// 수량과 가격은 뒤쪽 0을 제거한 JSON 숫자로 전송됩니다.
pub fn build_placement_request(
    intent: &OrderIntent,
    options: &OrderOptions,
) -> ExchangeResult<(RequestParams, Endpoint)> {
    let mut params = RequestParams::new()
        .with("sym", to_raw_symbol(&intent.symbol)?)
        .with("amt", intent.amount.to_json_number())
        .with("typ", intent.order_type.as_str());

    if intent.order_type == OrderType::Limit {
        let price = intent.price.ok_or_else(|| {
            ExchangeError::InvalidOrder(format!(
                "limit order for {} requires a price",
                intent.symbol
            ))
        })?;
        params.insert("rat", price.to_json_number());
    }

    params.extend(&options.extra);

    Ok((params, Endpoint::for_order(intent.side, options.test_mode)))
}

/// 주문 응답에서 주문 ID와 가격을 추출합니다.
///
/// 체결 상태는 추론하지 않습니다.
pub fn parse_placement_result(raw: &Value) -> OrderResult {
    let order = payload(raw);

    OrderResult {
        id: safe_string(order, "id"),
        price: order.get("rat").and_then(decimal_from_json),
        info: raw.clone(),
    }
}

/// 주문 취소 파라미터.
pub fn build_cancel_request(order_id: &str) -> RequestParams {
    RequestParams::new().with("id", order_id)
}

/// 원시 주문의 상태를 분류합니다.
///
/// `status == "filled"`이거나 `remaining`이 숫자 0이면 종료, 그 외에는 미체결.
/// 문자열 `"0"`은 숫자로 보지 않습니다.
pub fn classify_status(order: &Value) -> OrderState {
    let filled = order.get("status").and_then(Value::as_str) == Some("filled");
    let nothing_remaining = order
        .get("remaining")
        .filter(|remaining| remaining.is_number())
        .and_then(decimal_from_json)
        .is_some_and(|remaining| remaining == Decimal::ZERO);

    if filled || nothing_remaining {
        OrderState::Closed
    } else {
        OrderState::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_limit_buy_request() {
        let intent = OrderIntent::limit_buy("XRP/THB", dec!(20), dec!(100));
        let (params, endpoint) = build_placement_request(&intent, &OrderOptions::default()).unwrap();

        assert_eq!(
            params.to_json().unwrap(),
            r#"{"sym":"THB_XRP","amt":20,"typ":"limit","rat":100}"#
        );
        assert_eq!(endpoint, Endpoint::PlaceBid);
    }

    #[test]
    fn test_trailing_zeroes_stripped() {
        let intent = OrderIntent::limit_sell("BTC/THB", dec!(20.00), dec!(15000.10));
        let (params, endpoint) = build_placement_request(&intent, &OrderOptions::default()).unwrap();

        assert_eq!(
            params.to_json().unwrap(),
            r#"{"sym":"THB_BTC","amt":20,"typ":"limit","rat":15000.1}"#
        );
        assert_eq!(endpoint, Endpoint::PlaceAsk);
    }

    #[test]
    fn test_high_precision_values_sent_exactly() {
        let intent = OrderIntent::limit_buy(
            "BTC/THB",
            dec!(0.12345678901234567891),
            dec!(100000000000000000000),
        );
        let (params, _) = build_placement_request(&intent, &OrderOptions::default()).unwrap();

        assert_eq!(
            params.to_json().unwrap(),
            r#"{"sym":"THB_BTC","amt":0.12345678901234567891,"typ":"limit","rat":100000000000000000000}"#
        );
    }

    #[test]
    fn test_market_order_has_no_rate() {
        let mut intent = OrderIntent::market_sell("ETH/THB", dec!(0.5));
        intent.price = Some(dec!(12345));

        let (params, _) = build_placement_request(&intent, &OrderOptions::default()).unwrap();

        assert!(params.get("rat").is_none());
        assert_eq!(params.get("typ"), Some(&json!("market")));
        assert_eq!(intent.effective_price(), Some(Decimal::ZERO));
    }

    #[test]
    fn test_test_mode_selects_dry_run_without_leaking() {
        let intent = OrderIntent::market_buy("BTC/THB", dec!(1));
        let (params, endpoint) = build_placement_request(&intent, &OrderOptions::test()).unwrap();

        assert_eq!(endpoint, Endpoint::PlaceBidTest);
        assert!(params.iter().all(|(key, _)| !key.to_lowercase().contains("test")));
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn test_extra_params_merged_after_fields() {
        let intent = OrderIntent::limit_buy("BTC/THB", dec!(1), dec!(100));
        let options = OrderOptions::default()
            .with_extra(RequestParams::new().with("client_id", "abc").with("rat", 99));

        let (params, _) = build_placement_request(&intent, &options).unwrap();
        assert_eq!(
            params.to_json().unwrap(),
            r#"{"sym":"THB_BTC","amt":1,"typ":"limit","rat":99,"client_id":"abc"}"#
        );
    }

    #[test]
    fn test_limit_without_price_rejected() {
        let mut intent = OrderIntent::limit_buy("BTC/THB", dec!(1), dec!(100));
        intent.price = None;

        assert!(matches!(
            build_placement_request(&intent, &OrderOptions::default()),
            Err(ExchangeError::InvalidOrder(_))
        ));
    }

    #[test]
    fn test_invalid_symbol_rejected() {
        let intent = OrderIntent::market_buy("BTCTHB", dec!(1));
        assert!(matches!(
            build_placement_request(&intent, &OrderOptions::default()),
            Err(ExchangeError::InvalidSymbol(_))
        ));
    }

    #[test]
    fn test_parse_placement_result() {
        let raw = json!({
            "error": 0,
            "result": {"id": "1", "hash": "fwQ6dnQWQPs4cbatF5Am2xCDP1J", "typ": "limit",
                       "amt": 1000, "rat": 15000, "fee": 2.5, "cre": 2.5, "rec": 0.06666666,
                       "ts": 1533834547}
        });
        let result = parse_placement_result(&raw);

        assert_eq!(result.id.as_deref(), Some("1"));
        assert_eq!(result.price, Some(dec!(15000)));
        assert_eq!(result.info, raw);
    }

    #[test]
    fn test_parse_placement_result_top_level() {
        let result = parse_placement_result(&json!({"id": 42, "rat": "100.5"}));
        assert_eq!(result.id.as_deref(), Some("42"));
        assert_eq!(result.price, Some(dec!(100.5)));

        let result = parse_placement_result(&json!({"error": 0}));
        assert!(result.id.is_none());
        assert!(result.price.is_none());
    }

    #[test]
    fn test_cancel_request() {
        assert_eq!(
            build_cancel_request("fwQ6dnQWQPs4cbatF5Am2xCDP1J").to_json().unwrap(),
            r#"{"id":"fwQ6dnQWQPs4cbatF5Am2xCDP1J"}"#
        );
    }

    #[test]
    fn test_classify_status() {
        assert_eq!(classify_status(&json!({"status": "filled", "remaining": 5})), OrderState::Closed);
        assert_eq!(classify_status(&json!({"status": "open", "remaining": 0})), OrderState::Closed);
        assert_eq!(classify_status(&json!({"status": "open", "remaining": 0.0})), OrderState::Closed);
        assert_eq!(classify_status(&json!({"status": "open", "remaining": "0"})), OrderState::Open);
        assert_eq!(classify_status(&json!({"status": "open", "remaining": "0.0"})), OrderState::Open);
        assert_eq!(classify_status(&json!({"status": "open", "remaining": 5})), OrderState::Open);
        assert_eq!(classify_status(&json!({})), OrderState::Open);
    }
}
