//! 응답 본문 에러 분류.
//!
//! 모든 응답은 성공 페이로드로 해석되기 전에 이 분류기를 먼저 통과합니다.
//! 에러 코드 표: <https://github.com/bitkub/bitkub-official-api-docs/blob/master/restful-api.md#error-codes>

use serde_json::Value;

use super::safe_integer;
use crate::{ExchangeError, ExchangeResult};

/// 응답 본문의 `error` 코드를 분류합니다.
///
/// JSON 객체/배열로 보이지 않거나 파싱되지 않는 본문은 분류하지 않고
/// 호출자의 일반 처리에 맡깁니다 (`Ok`).
pub fn classify(body: &str) -> ExchangeResult<()> {
    if body.len() < 2 || !(body.starts_with('{') || body.starts_with('[')) {
        return Ok(());
    }

    let envelope: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) => return Ok(()),
    };

    let code = match safe_integer(&envelope, "error") {
        Some(code) if code > 0 => code,
        _ => return Ok(()),
    };

    Err(classify_code(code, envelope))
}

fn classify_code(code: i64, envelope: Value) -> ExchangeError {
    match code {
        1 | 10..=15 | 22 => ExchangeError::InvalidRequest { code },
        2..=9 | 25 | 45 | 46 | 52 => ExchangeError::AuthenticationFailure { code },
        _ => ExchangeError::GenericExchangeError { code, envelope },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_passes() {
        assert!(classify(r#"{"error":0,"result":[]}"#).is_ok());
        assert!(classify(r#"{"error":"0","result":[]}"#).is_ok());
        assert!(classify(r#"{"result":{}}"#).is_ok());
    }

    #[test]
    fn test_unclassifiable_body_defers() {
        assert!(classify("").is_ok());
        assert!(classify("{").is_ok());
        assert!(classify("<html>502 Bad Gateway</html>").is_ok());
        assert!(classify(r#"{"error": 5"#).is_ok());
        assert!(classify("[1,2,3]").is_ok());
    }

    #[test]
    fn test_invalid_request_codes() {
        for code in [1, 10, 11, 12, 13, 14, 15, 22] {
            let body = json!({"error": code}).to_string();
            assert!(
                matches!(classify(&body), Err(ExchangeError::InvalidRequest { code: c }) if c == code),
                "code {code}"
            );
        }
    }

    #[test]
    fn test_authentication_codes() {
        for code in [2, 3, 4, 5, 6, 7, 8, 9, 25, 45, 46, 52] {
            let body = json!({"error": code}).to_string();
            assert!(
                matches!(classify(&body), Err(ExchangeError::AuthenticationFailure { code: c }) if c == code),
                "code {code}"
            );
        }
    }

    #[test]
    fn test_generic_error_carries_envelope() {
        let err = classify(r#"{"error":99,"result":null}"#).unwrap_err();
        match err {
            ExchangeError::GenericExchangeError { code, envelope } => {
                assert_eq!(code, 99);
                assert_eq!(envelope, json!({"error": 99, "result": null}));
            }
            other => panic!("unexpected error: {other:?}"),
        }

        for code in [16, 21, 23, 24, 26, 44, 47, 51, 53] {
            let body = json!({"error": code}).to_string();
            assert!(matches!(
                classify(&body),
                Err(ExchangeError::GenericExchangeError { .. })
            ));
        }
    }

    #[test]
    fn test_string_status_is_classified() {
        assert!(matches!(
            classify(r#"{"error":"5"}"#),
            Err(ExchangeError::AuthenticationFailure { code: 5 })
        ));
    }

    #[test]
    fn test_negative_status_passes() {
        assert!(classify(r#"{"error":-1}"#).is_ok());
    }
}
