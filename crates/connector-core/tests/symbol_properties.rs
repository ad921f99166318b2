//! 정규 심볼 속성 테스트

use connector_core::{CoreError, Symbol};
use proptest::prelude::*;

proptest! {
    /// "BASE/QUOTE" 문자열은 파싱 후 다시 출력해도 그대로여야 한다
    #[test]
    fn parse_display_round_trip(base in "[A-Za-z0-9]{1,8}", quote in "[A-Za-z0-9]{1,8}") {
        let text = format!("{}/{}", base, quote);
        let symbol = Symbol::parse(&text).unwrap();

        prop_assert_eq!(&symbol.base, &base);
        prop_assert_eq!(&symbol.quote, &quote);
        prop_assert_eq!(symbol.to_string(), text);
    }

    /// 구분자가 없는 문자열은 항상 거부된다
    #[test]
    fn missing_separator_is_rejected(text in "[A-Z0-9_]{0,12}") {
        prop_assert!(matches!(Symbol::parse(&text), Err(CoreError::InvalidSymbol(_))));
    }
}
