//! 통화 코드 정규화.

/// 거래소마다 다른 통화 표기를 공통 코드로 변환합니다.
///
/// 알려진 별칭(XBT, BCC 등)만 치환하고 나머지는 대문자로 반환합니다.
pub fn common_currency_code(code: &str) -> String {
    let upper = code.to_uppercase();
    let mapped = match upper.as_str() {
        "XBT" => "BTC",
        "BCC" | "BCHABC" => "BCH",
        "BCHSV" => "BSV",
        "DRK" => "DASH",
        other => other,
    };
    mapped.to_string()
}
