//! 정밀한 금융 계산을 위한 Decimal 유틸리티.
//!
//! 거래소 JSON은 수량과 가격을 숫자 또는 숫자 문자열로 보냅니다.
//! 이 모듈은 그 값들과 `Decimal` 사이의 변환을 담당합니다.

use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

/// 금융 정밀도를 위한 가격 타입.
pub type Price = Decimal;

/// 주문 수량을 위한 타입.
pub type Quantity = Decimal;

/// Decimal 연산을 위한 확장 트레이트.
pub trait DecimalExt {
    /// 소수부의 후행 0을 제거한 값을 반환합니다 (예: `20.00` -> `20`).
    fn without_trailing_zeroes(&self) -> Decimal;

    /// 후행 0을 제거한 JSON 숫자로 변환합니다.
    ///
    /// 패딩된 문자열이 아닌 정규 숫자 표현을 만듭니다. `serde_json`의
    /// `arbitrary_precision` 기능으로 십진 텍스트를 그대로 보존하므로
    /// `f64`를 거치며 자릿수가 잘리지 않습니다.
    fn to_json_number(&self) -> Value;
}

impl DecimalExt for Decimal {
    fn without_trailing_zeroes(&self) -> Decimal {
        self.normalize()
    }

    fn to_json_number(&self) -> Value {
        let text = self.normalize().to_string();
        match serde_json::Number::from_str(&text) {
            Ok(number) => Value::Number(number),
            Err(_) => Value::String(text),
        }
    }
}

/// JSON 숫자 또는 숫자 문자열에서 Decimal을 파싱합니다.
///
/// 지수 표기(`1e-8`)도 허용합니다. 숫자가 아니면 `None`.
pub fn decimal_from_json(value: &Value) -> Option<Decimal> {
    let text = match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        _ => return None,
    };

    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_without_trailing_zeroes() {
        assert_eq!(dec!(20.000).without_trailing_zeroes().to_string(), "20");
        assert_eq!(dec!(0.1500).without_trailing_zeroes().to_string(), "0.15");
    }

    #[test]
    fn test_to_json_number() {
        assert_eq!(dec!(20.00).to_json_number(), json!(20));
        assert_eq!(dec!(100).to_json_number(), json!(100));
        assert_eq!(dec!(0.5).to_json_number().to_string(), "0.5");
        assert_eq!(dec!(15000.10).to_json_number().to_string(), "15000.1");
    }

    #[test]
    fn test_to_json_number_keeps_every_digit() {
        let amount = dec!(0.12345678901234567891);
        assert_eq!(amount.to_json_number().to_string(), "0.12345678901234567891");

        // u64::MAX 초과 정수도 지수 표기 없이
        let rate = dec!(100000000000000000000);
        assert_eq!(rate.to_json_number().to_string(), "100000000000000000000");

        assert_eq!(decimal_from_json(&amount.to_json_number()), Some(amount));
    }

    #[test]
    fn test_decimal_from_json() {
        assert_eq!(decimal_from_json(&json!(188379.27)), Some(dec!(188379.27)));
        assert_eq!(decimal_from_json(&json!("8.90397323")), Some(dec!(8.90397323)));
        assert_eq!(decimal_from_json(&json!(0)), Some(Decimal::ZERO));
        assert_eq!(decimal_from_json(&json!(1e-8)), Some(dec!(0.00000001)));
        assert_eq!(decimal_from_json(&json!(null)), None);
        assert_eq!(decimal_from_json(&json!("abc")), None);
    }
}
