//! 잔고 정규화.
//!
//! 원시 응답 예:
//! `{"error":0,"result":{"THB":{"available":188379.27,"reserved":0},"BTC":{...}}}`

use connector_core::{common_currency_code, decimal_from_json, BalanceEntry, BalanceSheet};
use serde_json::Value;

use crate::{ExchangeError, ExchangeResult};

/// 통화별 `{available, reserved}` 맵을 잔고 시트로 변환합니다.
///
/// 원시 맵의 키마다 항목 하나를 만들며, 없는 통화는 만들지 않습니다.
/// 하위 필드가 없으면 `None`으로 둡니다.
pub fn parse_balance(result: &Value) -> ExchangeResult<BalanceSheet> {
    let balances = result.as_object().ok_or_else(|| {
        ExchangeError::MalformedResponse(format!("balance result is not an object: {}", result))
    })?;

    let entries = balances
        .iter()
        .map(|(currency, balance)| {
            let code = common_currency_code(currency);
            let entry = BalanceEntry {
                currency: code.clone(),
                free: balance.get("available").and_then(decimal_from_json),
                used: balance.get("reserved").and_then(decimal_from_json),
            };
            (code, entry)
        })
        .collect();

    Ok(BalanceSheet {
        entries,
        info: result.clone(),
    })
}
