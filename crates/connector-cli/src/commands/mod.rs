//! CLI 명령어 구현 모듈.

pub mod account;
pub mod market;
pub mod params;
pub mod trade;
pub mod withdraw;

use anyhow::Result;
use serde::Serialize;

/// 결과를 보기 좋은 JSON으로 stdout에 출력합니다.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
