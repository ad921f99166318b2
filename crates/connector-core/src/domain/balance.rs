//! 잔고 시트.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 통화 하나의 잔고.
///
/// 원시 응답에 필드가 없으면 `None`으로 남습니다. 0으로 채우지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceEntry {
    /// 정규 통화 코드
    pub currency: String,
    /// 사용 가능한 잔고
    pub free: Option<Decimal>,
    /// 주문에 묶인 잔고
    pub used: Option<Decimal>,
}

impl BalanceEntry {
    /// 총 잔고 반환 (사용 가능 + 묶인 잔고). 둘 중 하나라도 없으면 `None`.
    pub fn total(&self) -> Option<Decimal> {
        Some(self.free? + self.used?)
    }
}

/// 잔고 조회 한 번의 결과.
///
/// 매 조회마다 새로 만들어지며 이전 결과와 병합되지 않습니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BalanceSheet {
    /// 통화 코드별 잔고
    pub entries: BTreeMap<String, BalanceEntry>,
    /// 원시 응답
    #[serde(default)]
    pub info: serde_json::Value,
}

impl BalanceSheet {
    /// 통화 코드로 잔고를 조회합니다.
    pub fn get(&self, currency: &str) -> Option<&BalanceEntry> {
        self.entries.get(currency)
    }

    /// 잔고가 있는 통화 수.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_total() {
        let entry = BalanceEntry {
            currency: "THB".to_string(),
            free: Some(dec!(100)),
            used: Some(dec!(5)),
        };
        assert_eq!(entry.total(), Some(dec!(105)));
    }

    #[test]
    fn test_total_absent_when_partial() {
        let entry = BalanceEntry {
            currency: "BTC".to_string(),
            free: Some(dec!(1)),
            used: None,
        };
        assert_eq!(entry.total(), None);
    }
}
