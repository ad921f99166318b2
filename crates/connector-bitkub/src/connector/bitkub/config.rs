//! Bitkub 클라이언트 설정.

use connector_core::{Credentials, ExchangeConfig};
use std::fmt;

/// 기본 REST API URL.
pub const DEFAULT_BASE_URL: &str = "https://api.bitkub.com/api/";

/// Bitkub 클라이언트 설정.
///
/// # 보안
/// - `Debug` 구현은 API 키를 마스킹하고 시크릿을 출력하지 않습니다.
#[derive(Clone)]
pub struct BitkubConfig {
    /// API 자격증명 (공개 엔드포인트만 쓸 때는 없어도 됨)
    pub credentials: Option<Credentials>,
    /// REST API 기본 URL
    pub base_url: String,
    /// 요청 타임아웃 (초)
    pub timeout_secs: u64,
}

impl fmt::Debug for BitkubConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitkubConfig")
            .field(
                "api_key",
                &self.credentials.as_ref().map(Credentials::masked_api_key),
            )
            .field("api_secret", &"***REDACTED***")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for BitkubConfig {
    fn default() -> Self {
        Self {
            credentials: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl BitkubConfig {
    /// 자격증명으로 설정 생성.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            credentials: Some(Credentials::new(api_key, api_secret)),
            ..Default::default()
        }
    }

    /// 자격증명 없는 공개 전용 설정.
    pub fn public() -> Self {
        Self::default()
    }

    /// 기본 URL 변경.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// 타임아웃 변경.
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// 공통 거래소 설정에서 생성.
    pub fn from_exchange_config(config: &ExchangeConfig, credentials: Option<Credentials>) -> Self {
        Self {
            credentials,
            base_url: config.base_url.clone(),
            timeout_secs: config.timeout_secs,
        }
    }

    /// 환경 변수에서 생성.
    ///
    /// # 환경 변수
    /// - `BITKUB_API_KEY`, `BITKUB_API_SECRET`: 없으면 공개 전용 설정
    /// - `BITKUB_BASE_URL`: 선택
    pub fn from_env() -> Self {
        let credentials = Credentials::from_env("BITKUB_API_KEY", "BITKUB_API_SECRET");
        let base_url =
            std::env::var("BITKUB_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Self {
            credentials,
            base_url,
            ..Default::default()
        }
    }
}
