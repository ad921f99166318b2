//! 요청 서명.
//!
//! 공개 엔드포인트는 쿼리 문자열만 붙이고, 비공개 엔드포인트는
//! `ts`를 추가한 JSON 본문에 HMAC 서명(`sig`)을 덧붙입니다.
//! 이 모듈은 요청을 만들기만 하며 네트워크 I/O는 하지 않습니다.

use chrono::Utc;
use connector_core::Credentials;
use hmac::{Hmac, Mac};
use reqwest::{Method, Url};
use serde_json::Value;
use sha2::Sha256;

use super::endpoint::Api;
use crate::{ExchangeError, ExchangeResult, RequestParams};

/// 서명 알고리즘. 다이제스트는 이 별칭 하나로 결정되며 출력은 hex입니다.
type HmacSha256 = Hmac<Sha256>;

/// API 키 헤더 이름.
pub const API_KEY_HEADER: &str = "X-BTK-APIKEY";

/// 전송 가능한 요청.
#[derive(Debug, Clone, PartialEq)]
pub struct SignedRequest {
    /// 전체 URL (공개 요청은 쿼리 포함)
    pub url: String,
    /// HTTP 메서드
    pub method: Method,
    /// JSON 본문 (비공개 요청만)
    pub body: Option<String>,
    /// 요청 헤더 (비공개 요청만)
    pub headers: Vec<(&'static str, String)>,
}

impl SignedRequest {
    /// 헤더 값 조회.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Bitkub 요청 서명기.
#[derive(Debug, Clone)]
pub struct RequestSigner {
    base_url: String,
    credentials: Option<Credentials>,
}

impl RequestSigner {
    pub fn new(base_url: impl Into<String>, credentials: Option<Credentials>) -> Self {
        Self {
            base_url: base_url.into(),
            credentials,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 현재 시각(초)으로 요청을 서명합니다.
    pub fn sign(
        &self,
        path: &str,
        api: Api,
        method: Method,
        params: &RequestParams,
    ) -> ExchangeResult<SignedRequest> {
        self.sign_at(path, api, method, params, Utc::now().timestamp())
    }

    /// 주어진 Unix 시각(초)으로 요청을 서명합니다.
    ///
    /// 비공개 요청 본문의 필드 순서: 호출자 필드(삽입 순서), `ts`, `sig`.
    /// 서명 페이로드는 `sig`를 넣기 전의 JSON 문자열입니다.
    pub fn sign_at(
        &self,
        path: &str,
        api: Api,
        method: Method,
        params: &RequestParams,
        ts: i64,
    ) -> ExchangeResult<SignedRequest> {
        let (path, query) = implode_path(path, params);
        let url = format!("{}{}", self.base_url, path);

        match api {
            Api::Public => {
                let url = if query.is_empty() {
                    url
                } else {
                    Url::parse_with_params(&url, query.query_pairs())
                        .map_err(|e| ExchangeError::Config(format!("invalid URL {}: {}", url, e)))?
                        .to_string()
                };

                Ok(SignedRequest {
                    url,
                    method,
                    body: None,
                    headers: Vec::new(),
                })
            }
            Api::Private => {
                let credentials = self.require_credentials()?;

                let mut body = query;
                body.insert("ts", ts);
                let auth = body.to_json()?;
                let signature = Self::hmac_hex(credentials.expose_secret(), &auth)?;
                body.insert("sig", signature);

                Ok(SignedRequest {
                    url,
                    method,
                    body: Some(body.to_json()?),
                    headers: vec![
                        ("Accept", "application/json".to_string()),
                        ("Content-Type", "application/json".to_string()),
                        (API_KEY_HEADER, credentials.api_key().to_string()),
                    ],
                })
            }
        }
    }

    fn require_credentials(&self) -> ExchangeResult<&Credentials> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(ExchangeError::MissingCredentials("apiKey"))?;

        if credentials.api_key().is_empty() {
            return Err(ExchangeError::MissingCredentials("apiKey"));
        }
        if credentials.expose_secret().is_empty() {
            return Err(ExchangeError::MissingCredentials("secret"));
        }

        Ok(credentials)
    }

    /// HMAC-SHA256으로 페이로드 서명 (hex).
    fn hmac_hex(secret: &str, payload: &str) -> ExchangeResult<String> {
        let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
            .map_err(|e| ExchangeError::Config(format!("invalid HMAC key: {}", e)))?;
        mac.update(payload.as_bytes());
        Ok(hex::encode(mac.finalize().into_bytes()))
    }
}

/// 경로의 `{name}` 자리표시자를 파라미터 값으로 치환합니다.
///
/// 치환에 사용된 파라미터는 나머지 파라미터에서 제외됩니다.
/// 호출자의 파라미터는 변경하지 않습니다.
pub fn implode_path(path: &str, params: &RequestParams) -> (String, RequestParams) {
    let mut imploded = path.to_string();
    let mut rest = params.clone();

    for (key, value) in params.iter() {
        let placeholder = format!("{{{}}}", key);
        if imploded.contains(&placeholder) {
            let text = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            imploded = imploded.replace(&placeholder, &text);
            rest.remove(key);
        }
    }

    (imploded, rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://api.bitkub.com/api/";

    fn signer() -> RequestSigner {
        RequestSigner::new(BASE, Some(Credentials::new("my-api-key", "secret")))
    }

    #[test]
    fn test_public_without_params() {
        let req = signer()
            .sign_at(
                "market/symbols",
                Api::Public,
                Method::GET,
                &RequestParams::new(),
                0,
            )
            .unwrap();

        assert_eq!(req.url, "https://api.bitkub.com/api/market/symbols");
        assert_eq!(req.method, Method::GET);
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn test_public_with_query() {
        let params = RequestParams::new().with("sym", "THB_BTC").with("lmt", 10);
        let req = signer()
            .sign_at("market/trades", Api::Public, Method::GET, &params, 0)
            .unwrap();

        assert_eq!(
            req.url,
            "https://api.bitkub.com/api/market/trades?sym=THB_BTC&lmt=10"
        );
    }

    #[test]
    fn test_public_path_params_leave_no_query() {
        let params = RequestParams::new().with("pair", "THB_BTC");
        let req = signer()
            .sign_at("market/books/{pair}", Api::Public, Method::GET, &params, 0)
            .unwrap();

        assert_eq!(req.url, "https://api.bitkub.com/api/market/books/THB_BTC");
        assert!(!req.url.contains('?'));
    }

    #[test]
    fn test_public_does_not_need_credentials() {
        let signer = RequestSigner::new(BASE, None);
        assert!(signer
            .sign_at("market/symbols", Api::Public, Method::GET, &RequestParams::new(), 0)
            .is_ok());
    }

    #[test]
    fn test_private_body_and_signature() {
        let params = RequestParams::new()
            .with("sym", "THB_BTC")
            .with("amt", 1)
            .with("rat", 1500000)
            .with("typ", "limit");

        let req = signer()
            .sign_at("market/place-bid", Api::Private, Method::POST, &params, 1529490568)
            .unwrap();

        assert_eq!(req.url, "https://api.bitkub.com/api/market/place-bid");
        assert_eq!(req.method, Method::POST);
        assert_eq!(
            req.body.as_deref(),
            Some(
                r#"{"sym":"THB_BTC","amt":1,"rat":1500000,"typ":"limit","ts":1529490568,"sig":"f5d649d7576ae008de28152ce3d6d43309a73be9fcbac76b0a1da88281f1e592"}"#
            )
        );
        assert_eq!(req.header("X-BTK-APIKEY"), Some("my-api-key"));
        assert_eq!(req.header("Accept"), Some("application/json"));
        assert_eq!(req.header("content-type"), Some("application/json"));
    }

    #[test]
    fn test_private_empty_params() {
        let signer = RequestSigner::new(BASE, Some(Credentials::new("k", "test-secret")));
        let req = signer
            .sign_at("market/balances", Api::Private, Method::POST, &RequestParams::new(), 1700000000)
            .unwrap();

        assert_eq!(
            req.body.as_deref(),
            Some(
                r#"{"ts":1700000000,"sig":"a14daa97722d2edc327dfc08977351b99586f3b9a53e0d7b89cfc7edfa35b259"}"#
            )
        );
    }

    #[test]
    fn test_signing_is_deterministic() {
        let params = RequestParams::new().with("id", "fwQ6dnQWQPs4cbatF5Am2xCDP1J");
        let a = signer()
            .sign_at("market/cancel-order", Api::Private, Method::POST, &params, 1600000000)
            .unwrap();
        let b = signer()
            .sign_at("market/cancel-order", Api::Private, Method::POST, &params, 1600000000)
            .unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_signature_depends_on_field_order() {
        let ab = RequestParams::new().with("a", 1).with("b", 2);
        let ba = RequestParams::new().with("b", 2).with("a", 1);

        let sig = |params: &RequestParams| {
            let req = signer()
                .sign_at("market/balances", Api::Private, Method::POST, params, 1)
                .unwrap();
            let body: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
            body["sig"].as_str().unwrap().to_string()
        };

        assert_ne!(sig(&ab), sig(&ba));
    }

    #[test]
    fn test_private_does_not_mutate_caller_params() {
        let params = RequestParams::new().with("id", 1);
        signer()
            .sign_at("market/cancel-order", Api::Private, Method::POST, &params, 1)
            .unwrap();

        assert_eq!(params.len(), 1);
        assert!(params.get("ts").is_none());
    }

    #[test]
    fn test_missing_credentials() {
        let cases = [
            (None, "apiKey"),
            (Some(Credentials::new("", "secret")), "apiKey"),
            (Some(Credentials::new("key", "")), "secret"),
        ];

        for (credentials, field) in cases {
            let signer = RequestSigner::new(BASE, credentials);
            let err = signer
                .sign_at("market/balances", Api::Private, Method::POST, &RequestParams::new(), 1)
                .unwrap_err();
            assert!(matches!(err, ExchangeError::MissingCredentials(f) if f == field));
        }
    }

    #[test]
    fn test_implode_path() {
        let params = RequestParams::new().with("pair", "THB_BTC").with("lmt", 5);
        let (path, rest) = implode_path("market/books/{pair}", &params);

        assert_eq!(path, "market/books/THB_BTC");
        assert_eq!(rest.to_json().unwrap(), r#"{"lmt":5}"#);
        assert_eq!(params.len(), 2);
    }
}
