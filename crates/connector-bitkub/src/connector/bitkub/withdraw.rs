//! 출금 검증 및 요청 생성.
//!
//! 검증 순서: 법정화폐 거부, 주소 검증, XRP 태그 확인.
//! 모든 검증은 요청을 만들기 전에 끝나며 실패 시 네트워크 요청은 없습니다.

use connector_core::{DecimalExt, WithdrawalRequest, WithdrawalResult};
use rust_decimal::Decimal;
use serde_json::Value;

use super::{payload, safe_string};
use crate::{AddressValidator, ExchangeError, ExchangeResult, RequestParams};

/// 출금할 수 없는 법정화폐 코드.
pub const FIAT_CURRENCIES: [&str; 3] = ["THB", "USD", "EUR"];

/// 고정 출금 수수료 (통화 단위).
const WITHDRAW_FEES: [(&str, Decimal); 2] = [
    ("BTC", Decimal::from_parts(5, 0, 0, false, 4)),
    ("ETH", Decimal::from_parts(5, 0, 0, false, 3)),
];

/// 목적지 태그가 필수인 통화.
const TAG_REQUIRED: &str = "XRP";

/// 법정화폐 여부.
pub fn is_fiat(currency: &str) -> bool {
    FIAT_CURRENCIES
        .iter()
        .any(|fiat| fiat.eq_ignore_ascii_case(currency))
}

/// 통화의 고정 출금 수수료. 알려지지 않은 통화는 `None`.
pub fn withdraw_fee(currency: &str) -> Option<Decimal> {
    WITHDRAW_FEES
        .iter()
        .find(|(code, _)| code.eq_ignore_ascii_case(currency))
        .map(|(_, fee)| *fee)
}

/// 통화 코드를 거래소 `cur` 값으로 변환합니다.
pub fn currency_name(currency: &str) -> String {
    match currency.to_uppercase().as_str() {
        "BTC" => "bitcoin".to_string(),
        other => other.to_lowercase(),
    }
}

/// 출금 요청을 검증하고 원시 파라미터를 만듭니다.
///
/// 필드 순서: `cur`, `amt`, `adr`, `mem`(있을 때), 추가 파라미터.
/// XRP는 태그가 필수이고 `mem`은 항상 태그 값입니다.
pub fn build_withdrawal_request(
    request: &WithdrawalRequest,
    validator: &dyn AddressValidator,
    extra: &RequestParams,
) -> ExchangeResult<RequestParams> {
    if is_fiat(&request.currency) {
        return Err(ExchangeError::UnsupportedCurrency(format!(
            "{} withdrawals are not supported",
            request.currency.to_uppercase()
        )));
    }

    validator.check_address(&request.address)?;

    let tag_required = request.currency.eq_ignore_ascii_case(TAG_REQUIRED);
    if tag_required && request.tag.is_none() {
        return Err(ExchangeError::MissingDestinationTag(format!(
            "{} withdrawal to {} requires a destination tag",
            TAG_REQUIRED, request.address
        )));
    }

    let mut params = RequestParams::new()
        .with("cur", currency_name(&request.currency))
        .with("amt", request.amount.to_json_number())
        .with("adr", request.address.as_str());

    if let Some(tag) = &request.tag {
        params.insert("mem", tag.as_str());
    }

    if tag_required {
        params.extend(&extra.without("mem"));
    } else {
        params.extend(extra);
    }

    Ok(params)
}

/// 출금 응답에서 거래 ID를 추출합니다.
///
/// `response.txn`을 우선 읽고, 없으면 `txn`을 읽습니다. 둘 다 없으면 `None`.
pub fn parse_withdrawal_result(raw: &Value) -> WithdrawalResult {
    let body = payload(raw);
    let id = body
        .get("response")
        .and_then(|response| safe_string(response, "txn"))
        .or_else(|| safe_string(body, "txn"));

    WithdrawalResult {
        id,
        info: raw.clone(),
    }
}
