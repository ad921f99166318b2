//! Bitkub REST 클라이언트.

use async_trait::async_trait;
use connector_core::{
    connector_span, BalanceSheet, Market, OrderIntent, OrderResult, WithdrawalRequest,
    WithdrawalResult,
};
use reqwest::{Client, Url};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;
use tracing::{debug, error, info, warn, Instrument};

use super::balance::parse_balance;
use super::classifier::classify;
use super::config::BitkubConfig;
use super::endpoint::Endpoint;
use super::markets::MarketCatalog;
use super::order::{build_cancel_request, build_placement_request, parse_placement_result};
use super::signer::RequestSigner;
use super::withdraw::{build_withdrawal_request, parse_withdrawal_result};
use crate::traits::{AddressValidator, DefaultAddressValidator, Exchange, ExchangeResult, OrderOptions};
use crate::{ExchangeError, RequestParams};

/// Bitkub 거래소 클라이언트.
///
/// 각 작업은 서명 후 HTTP 요청 한 번을 보내고, 응답 본문을 먼저 에러
/// 분류기에 통과시킨 다음 정규 모델로 변환합니다.
pub struct BitkubClient {
    client: Client,
    signer: RequestSigner,
    address_validator: Arc<dyn AddressValidator>,
    /// 세션당 한 번 로드되는 마켓 카탈로그
    markets: OnceCell<MarketCatalog>,
}

impl BitkubClient {
    /// 새 Bitkub 클라이언트 생성.
    ///
    /// 기본 URL 끝에 `/`가 없으면 붙입니다.
    ///
    /// # Errors
    /// 기본 URL이 올바르지 않으면 `ExchangeError::Config`,
    /// HTTP 클라이언트 생성에 실패하면 `ExchangeError::Network`를 반환합니다.
    pub fn new(config: BitkubConfig) -> ExchangeResult<Self> {
        let mut base_url = config.base_url;
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Url::parse(&base_url)
            .map_err(|e| ExchangeError::Config(format!("invalid base URL {}: {}", base_url, e)))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ExchangeError::Network(format!("HTTP 클라이언트 생성 실패: {}", e)))?;

        Ok(Self {
            client,
            signer: RequestSigner::new(base_url, config.credentials),
            address_validator: Arc::new(DefaultAddressValidator::default()),
            markets: OnceCell::new(),
        })
    }

    /// 환경 변수 설정으로 생성.
    pub fn from_env() -> ExchangeResult<Self> {
        Self::new(BitkubConfig::from_env())
    }

    /// 출금 주소 검증기를 교체합니다.
    pub fn with_address_validator(mut self, validator: Arc<dyn AddressValidator>) -> Self {
        self.address_validator = validator;
        self
    }

    pub fn base_url(&self) -> &str {
        self.signer.base_url()
    }

    /// 마켓 카탈로그를 로드합니다.
    ///
    /// 첫 호출만 네트워크 요청을 보내고 이후에는 같은 카탈로그를 반환합니다.
    pub async fn load_markets(&self) -> ExchangeResult<&MarketCatalog> {
        self.markets
            .get_or_try_init(|| async {
                let raw = self.request(Endpoint::MarketSymbols, &RequestParams::new()).await?;
                let records = raw.get("result").and_then(Value::as_array).ok_or_else(|| {
                    ExchangeError::MalformedResponse(format!(
                        "market list without result array: {}",
                        raw
                    ))
                })?;

                let catalog = MarketCatalog::load(records)?;
                info!("Loaded {} Bitkub markets", catalog.len());
                Ok::<_, ExchangeError>(catalog)
            })
            .await
    }

    /// 엔드포인트에 요청을 보내고 분류된 JSON 응답을 반환합니다.
    pub async fn request(&self, endpoint: Endpoint, params: &RequestParams) -> ExchangeResult<Value> {
        let signed = self
            .signer
            .sign(endpoint.path(), endpoint.api(), endpoint.method(), params)?;

        debug!("{} {}", signed.method, endpoint.path());

        let mut builder = self.client.request(signed.method, signed.url.as_str());
        for (name, value) in &signed.headers {
            builder = builder.header(*name, value.as_str());
        }
        if let Some(body) = signed.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        self.handle_response(response).await
    }

    /// API 응답 처리.
    ///
    /// 분류기가 HTTP 상태보다 먼저 본문을 검사합니다.
    async fn handle_response(&self, response: reqwest::Response) -> ExchangeResult<Value> {
        let status = response.status();
        let body = response.text().await?;

        if let Err(err) = classify(&body) {
            warn!(code = ?err.code(), "Bitkub rejected request: {}", err);
            return Err(err);
        }

        if !status.is_success() {
            return Err(ExchangeError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse response: {} - Body: {}", e, body);
            ExchangeError::MalformedResponse(format!("{}: {}", e, body))
        })
    }
}

#[async_trait]
impl Exchange for BitkubClient {
    fn name(&self) -> &str {
        "bitkub"
    }

    async fn fetch_markets(&self) -> ExchangeResult<Vec<Market>> {
        let catalog = self
            .load_markets()
            .instrument(connector_span!("fetch_markets"))
            .await?;
        Ok(catalog.markets().to_vec())
    }

    async fn fetch_balance(&self) -> ExchangeResult<BalanceSheet> {
        async {
            let raw = self.request(Endpoint::Balances, &RequestParams::new()).await?;
            let result = raw.get("result").ok_or_else(|| {
                ExchangeError::MalformedResponse(format!("balance response without result: {}", raw))
            })?;
            parse_balance(result)
        }
        .instrument(connector_span!("fetch_balance"))
        .await
    }

    async fn create_order(
        &self,
        intent: &OrderIntent,
        options: &OrderOptions,
    ) -> ExchangeResult<OrderResult> {
        async {
            let (params, endpoint) = build_placement_request(intent, options)?;

            info!(
                "Placing {} {} order for {} {} @ {:?}{}",
                intent.side,
                intent.order_type,
                intent.amount,
                intent.symbol,
                intent.effective_price(),
                if endpoint.is_dry_run() { " (test)" } else { "" }
            );

            let raw = self.request(endpoint, &params).await?;
            let result = parse_placement_result(&raw);

            info!("Order placed successfully: {:?}", result.id);
            Ok::<_, ExchangeError>(result)
        }
        .instrument(connector_span!("create_order", intent.symbol))
        .await
    }

    async fn cancel_order(&self, order_id: &str) -> ExchangeResult<Value> {
        async {
            let raw = self
                .request(Endpoint::CancelOrder, &build_cancel_request(order_id))
                .await?;

            info!("Order {} cancelled", order_id);
            Ok::<_, ExchangeError>(raw)
        }
        .instrument(connector_span!("cancel_order"))
        .await
    }

    async fn withdraw(
        &self,
        request: &WithdrawalRequest,
        extra: &RequestParams,
    ) -> ExchangeResult<WithdrawalResult> {
        async {
            let params =
                build_withdrawal_request(request, self.address_validator.as_ref(), extra)?;

            info!(
                "Withdrawing {} {} to {}",
                request.amount,
                request.currency.to_uppercase(),
                request.address
            );

            let raw = self.request(Endpoint::Withdraw, &params).await?;
            let result = parse_withdrawal_result(&raw);

            info!("Withdrawal submitted: {:?}", result.id);
            Ok::<_, ExchangeError>(result)
        }
        .instrument(connector_span!("withdraw", request.currency))
        .await
    }
}
