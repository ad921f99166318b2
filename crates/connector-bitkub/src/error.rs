//! 거래소 에러 타입.

use connector_core::CoreError;
use thiserror::Error;

/// 거래소 관련 에러.
///
/// 모든 에러는 호출자에게 즉시 전파되며 내부에서 재시도하지 않습니다.
#[derive(Debug, Error)]
pub enum ExchangeError {
    /// 비공개 호출에 필요한 자격증명 없음 (네트워크 요청 전 실패)
    #[error("Missing credentials: {0} is required")]
    MissingCredentials(&'static str),

    /// 유효하지 않은 출금 주소
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// 출금이 지원되지 않는 통화 (법정화폐)
    #[error("Unsupported currency: fiat withdrawal for {0} is not supported")]
    UnsupportedCurrency(String),

    /// 목적지 태그 누락
    #[error("Missing destination tag: withdrawal of {0} requires a tag")]
    MissingDestinationTag(String),

    /// 잘못된 요청 파라미터 (거래소 에러 코드)
    #[error("Invalid request: some parameters are invalid (status {code})")]
    InvalidRequest { code: i64 },

    /// 인증/권한 실패 (거래소 에러 코드)
    #[error("Authentication failure: failed auth or permissions (status {code})")]
    AuthenticationFailure { code: i64 },

    /// 분류되지 않은 거래소 에러
    #[error("Exchange error {code}: {envelope}")]
    GenericExchangeError {
        code: i64,
        envelope: serde_json::Value,
    },

    /// 성공 응답이어야 할 본문을 해석할 수 없음
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// "BASE/QUOTE" 형식이 아닌 심볼
    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),

    /// 주문 의도 검증 실패
    #[error("Invalid order: {0}")]
    InvalidOrder(String),

    /// 네트워크/연결 에러
    #[error("Network error: {0}")]
    Network(String),

    /// 타임아웃
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// 분류기가 통과시킨 비정상 HTTP 상태
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// 설정 에러
    #[error("Config error: {0}")]
    Config(String),
}

impl ExchangeError {
    /// 거래소가 반환한 원시 상태 코드 (분류된 거래소 에러만).
    pub fn code(&self) -> Option<i64> {
        match self {
            ExchangeError::InvalidRequest { code }
            | ExchangeError::AuthenticationFailure { code }
            | ExchangeError::GenericExchangeError { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// 인증 에러인지 확인.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            ExchangeError::AuthenticationFailure { .. } | ExchangeError::MissingCredentials(_)
        )
    }

    /// 요청을 보내기 전 검증 단계에서 발생한 에러인지 확인.
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            ExchangeError::MissingCredentials(_)
                | ExchangeError::InvalidAddress(_)
                | ExchangeError::UnsupportedCurrency(_)
                | ExchangeError::MissingDestinationTag(_)
                | ExchangeError::InvalidSymbol(_)
                | ExchangeError::InvalidOrder(_)
        )
    }
}

impl From<reqwest::Error> for ExchangeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ExchangeError::Timeout(err.to_string())
        } else {
            ExchangeError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ExchangeError {
    fn from(err: serde_json::Error) -> Self {
        ExchangeError::MalformedResponse(err.to_string())
    }
}

impl From<CoreError> for ExchangeError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidSymbol(symbol) => ExchangeError::InvalidSymbol(symbol),
            CoreError::Config(msg) => ExchangeError::Config(msg),
            CoreError::Serialization(msg) => ExchangeError::MalformedResponse(msg),
        }
    }
}
