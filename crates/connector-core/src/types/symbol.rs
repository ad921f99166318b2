//! 정규 심볼 정의.
//!
//! 정규 심볼은 항상 `BASE/QUOTE` 형식입니다 (예: `BTC/THB`).
//! 거래소별 원시 형식으로의 변환은 각 커넥터가 담당합니다.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// 기준 자산과 호가 자산으로 구성된 정규 심볼.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol {
    /// 기준 자산 (예: BTC)
    pub base: String,
    /// 호가 자산 (예: THB)
    pub quote: String,
}

impl Symbol {
    /// 새 심볼을 생성합니다.
    ///
    /// 대소문자는 변환하지 않습니다 (원시 심볼과 문자 그대로 왕복).
    pub fn new(base: impl Into<String>, quote: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            quote: quote.into(),
        }
    }

    /// "BASE/QUOTE" 형식 문자열에서 심볼을 파싱합니다.
    ///
    /// 구분자로 나눈 토큰이 정확히 두 개이고 둘 다 비어 있지 않아야 합니다.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        let mut parts = s.split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(base), Some(quote), None) if !base.is_empty() && !quote.is_empty() => {
                Ok(Self::new(base, quote))
            }
            _ => Err(CoreError::InvalidSymbol(s.to_string())),
        }
    }
}

impl FromStr for Symbol {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.quote)
    }
}
