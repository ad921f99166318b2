//! 거래소 trait 및 협력자 정의.

use async_trait::async_trait;
use connector_core::{
    BalanceSheet, Market, OrderIntent, OrderResult, WithdrawalRequest, WithdrawalResult,
};

use crate::{ExchangeError, RequestParams};

/// 거래소 작업을 위한 Result 타입.
pub type ExchangeResult<T> = Result<T, ExchangeError>;

/// 주문 제출 옵션.
///
/// 테스트 모드 플래그는 엔드포인트 선택에만 쓰이며 거래소로 전송되지 않습니다.
#[derive(Debug, Clone, Default)]
pub struct OrderOptions {
    /// 드라이런 엔드포인트 사용 여부
    pub test_mode: bool,
    /// 주문 필드 뒤에 병합할 추가 원시 파라미터
    pub extra: RequestParams,
}

impl OrderOptions {
    /// 드라이런 옵션.
    pub fn test() -> Self {
        Self {
            test_mode: true,
            ..Default::default()
        }
    }

    pub fn with_extra(mut self, extra: RequestParams) -> Self {
        self.extra = extra;
        self
    }
}

/// 정규 모델 기반 거래소 인터페이스.
///
/// 각 작업은 네트워크 요청을 최대 한 번만 보내며 재시도하지 않습니다.
#[async_trait]
pub trait Exchange: Send + Sync {
    /// 거래소 이름 반환.
    fn name(&self) -> &str;

    // === 시장 데이터 ===

    /// 마켓 목록 조회.
    async fn fetch_markets(&self) -> ExchangeResult<Vec<Market>>;

    // === 계좌 작업 ===

    /// 전체 잔고 조회.
    async fn fetch_balance(&self) -> ExchangeResult<BalanceSheet>;

    // === 주문 작업 ===

    /// 새 주문 제출.
    async fn create_order(
        &self,
        intent: &OrderIntent,
        options: &OrderOptions,
    ) -> ExchangeResult<OrderResult>;

    /// 주문 취소. 원시 응답을 반환합니다.
    async fn cancel_order(&self, order_id: &str) -> ExchangeResult<serde_json::Value>;

    // === 자금 이동 ===

    /// 암호화폐 출금.
    async fn withdraw(
        &self,
        request: &WithdrawalRequest,
        extra: &RequestParams,
    ) -> ExchangeResult<WithdrawalResult>;
}

/// 출금 주소 검증기.
pub trait AddressValidator: Send + Sync {
    /// 주소가 유효하지 않으면 `ExchangeError::InvalidAddress`를 반환합니다.
    fn check_address(&self, address: &str) -> ExchangeResult<()>;
}

/// 기본 주소 검증기.
///
/// 빈 주소, 공백이 포함된 주소, 한 문자만 반복된 주소를 거부합니다.
#[derive(Debug, Clone, Copy)]
pub struct DefaultAddressValidator {
    /// 최소 주소 길이
    pub min_length: usize,
}

impl Default for DefaultAddressValidator {
    fn default() -> Self {
        Self { min_length: 1 }
    }
}

impl AddressValidator for DefaultAddressValidator {
    fn check_address(&self, address: &str) -> ExchangeResult<()> {
        let mut chars = address.chars();
        let single_repeated = match chars.next() {
            Some(first) => chars.all(|c| c == first),
            None => true,
        };

        if address.chars().count() < self.min_length
            || address.chars().any(char::is_whitespace)
            || single_repeated
        {
            return Err(ExchangeError::InvalidAddress(format!(
                "address is invalid or has less than {} characters: {:?}",
                self.min_length, address
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_validator_accepts_real_address() {
        let validator = DefaultAddressValidator::default();
        assert!(validator
            .check_address("rPEPPER7kfTD9w2To4CQk6UCfuHM9c6GDY")
            .is_ok());
    }

    #[test]
    fn test_default_validator_rejects() {
        let validator = DefaultAddressValidator::default();
        for bad in ["", "r abc", "aaaa", "x"] {
            assert!(
                matches!(
                    validator.check_address(bad),
                    Err(ExchangeError::InvalidAddress(_))
                ),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_order_options_test_mode() {
        assert!(OrderOptions::test().test_mode);
        assert!(!OrderOptions::default().test_mode);
    }
}
