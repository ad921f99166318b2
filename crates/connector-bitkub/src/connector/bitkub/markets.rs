//! 마켓 카탈로그.
//!
//! Bitkub 원시 심볼은 `QUOTE_BASE` 순서(예: `THB_BTC`)이고,
//! 정규 심볼은 `BASE/QUOTE`(예: `BTC/THB`)입니다.

use connector_core::{Market, Symbol};
use rust_decimal::Decimal;
use serde_json::Value;
use std::collections::HashMap;

use super::safe_string;
use crate::{ExchangeError, ExchangeResult};

/// 거래 수수료율 (테이커/메이커 동일, 등급 구분 없음).
pub const TRADING_FEE: Decimal = Decimal::from_parts(25, 0, 0, false, 4);

/// 정규 심볼을 원시 심볼로 변환합니다 (`BTC/THB` -> `THB_BTC`).
pub fn to_raw_symbol(symbol: &str) -> ExchangeResult<String> {
    let symbol = Symbol::parse(symbol)?;
    Ok(format!("{}_{}", symbol.quote, symbol.base))
}

/// 원시 심볼을 (기준, 호가) 자산으로 나눕니다.
///
/// 토큰이 정확히 두 개가 아니면 카탈로그가 잘못된 것으로 보고합니다.
fn split_raw_symbol(raw: &str) -> ExchangeResult<(&str, &str)> {
    let mut parts = raw.split('_');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(quote), Some(base), None) if !quote.is_empty() && !base.is_empty() => {
            Ok((base, quote))
        }
        _ => Err(ExchangeError::MalformedResponse(format!(
            "market symbol {:?} is not of the form QUOTE_BASE",
            raw
        ))),
    }
}

/// 원시 마켓 레코드 하나를 정규 마켓으로 변환합니다.
///
/// 레코드 예: `{"id":1,"info":"Thai Baht to Bitcoin","symbol":"THB_BTC"}`
pub fn from_raw_record(record: &Value) -> ExchangeResult<Market> {
    let raw_symbol = record
        .get("symbol")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            ExchangeError::MalformedResponse(format!("market record without symbol: {}", record))
        })?;
    let id = safe_string(record, "id").ok_or_else(|| {
        ExchangeError::MalformedResponse(format!("market record without id: {}", record))
    })?;

    let (base, quote) = split_raw_symbol(raw_symbol)?;

    Ok(Market {
        id,
        symbol: Symbol::new(base, quote).to_string(),
        base: base.to_string(),
        quote: quote.to_string(),
        base_id: base.to_string(),
        quote_id: quote.to_string(),
        active: true,
        taker: TRADING_FEE,
        maker: TRADING_FEE,
        info: record.clone(),
    })
}

/// 세션 동안 한 번 채워지고 이후 읽기 전용인 마켓 카탈로그.
#[derive(Debug, Clone, Default)]
pub struct MarketCatalog {
    markets: Vec<Market>,
    by_symbol: HashMap<String, usize>,
    by_id: HashMap<String, usize>,
}

impl MarketCatalog {
    /// 원시 심볼 목록을 순서 그대로 정규 마켓으로 변환합니다.
    ///
    /// 중복 레코드는 제거하지 않고 그대로 유지합니다. 조회 인덱스는
    /// 처음 나온 레코드를 가리킵니다.
    pub fn load(records: &[Value]) -> ExchangeResult<Self> {
        let markets = records
            .iter()
            .map(from_raw_record)
            .collect::<ExchangeResult<Vec<_>>>()?;

        let mut by_symbol = HashMap::new();
        let mut by_id = HashMap::new();
        for (index, market) in markets.iter().enumerate() {
            by_symbol.entry(market.symbol.clone()).or_insert(index);
            by_id.entry(market.id.clone()).or_insert(index);
        }

        Ok(Self {
            markets,
            by_symbol,
            by_id,
        })
    }

    /// 모든 마켓 (원시 목록 순서).
    pub fn markets(&self) -> &[Market] {
        &self.markets
    }

    /// 정규 심볼로 마켓 조회.
    pub fn market(&self, symbol: &str) -> Option<&Market> {
        self.by_symbol.get(symbol).map(|&i| &self.markets[i])
    }

    /// 거래소 마켓 ID로 조회.
    pub fn market_by_id(&self, id: &str) -> Option<&Market> {
        self.by_id.get(id).map(|&i| &self.markets[i])
    }

    pub fn len(&self) -> usize {
        self.markets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markets.is_empty()
    }
}
