//! # API 자격증명
//!
//! 비공개 엔드포인트 호출에 필요한 API 키와 시크릿을 보관합니다.
//!
//! ## 보안 고려사항
//! - 시크릿은 `SecretString`으로 보관되어 `Debug` 출력에 노출되지 않습니다
//! - 어댑터 수명 동안 변경되지 않습니다

use secrecy::{ExposeSecret, SecretString};
use std::fmt;

/// 거래소 API 자격증명.
pub struct Credentials {
    api_key: String,
    secret: SecretString,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            secret: SecretString::from(secret.into()),
        }
    }

    /// 환경 변수에서 자격증명을 읽습니다. 둘 중 하나라도 없으면 `None`.
    pub fn from_env(api_key_env: &str, secret_env: &str) -> Option<Self> {
        let api_key = std::env::var(api_key_env).ok()?;
        let secret = std::env::var(secret_env).ok()?;
        Some(Self::new(api_key, secret))
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// 서명에 사용할 시크릿을 노출합니다.
    pub fn expose_secret(&self) -> &str {
        self.secret.expose_secret()
    }

    /// 로그에 남겨도 되는 마스킹된 API 키.
    pub fn masked_api_key(&self) -> String {
        let chars: Vec<char> = self.api_key.chars().collect();
        if chars.len() > 8 {
            let head: String = chars[..4].iter().collect();
            let tail: String = chars[chars.len() - 4..].iter().collect();
            format!("{}...{}", head, tail)
        } else {
            "***REDACTED***".to_string()
        }
    }
}

impl Clone for Credentials {
    fn clone(&self) -> Self {
        Self::new(self.api_key.clone(), self.expose_secret().to_string())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.masked_api_key())
            .field("secret", &"***REDACTED***")
            .finish()
    }
}
