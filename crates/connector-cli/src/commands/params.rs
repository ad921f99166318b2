//! `key=value` 형식의 추가 원시 파라미터 파싱.

use anyhow::{anyhow, Result};
use connector_bitkub::RequestParams;
use serde_json::Value;

/// `key=value` 하나를 (키, JSON 값)으로 파싱합니다.
///
/// 값이 JSON으로 해석되면 그대로 쓰고, 아니면 문자열로 취급합니다.
pub fn parse_param(text: &str) -> Result<(String, Value)> {
    let (key, value) = text
        .split_once('=')
        .ok_or_else(|| anyhow!("Invalid parameter {:?}: expected key=value", text))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(anyhow!("Invalid parameter {:?}: empty key", text));
    }

    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}

/// 명령줄 순서 그대로 추가 파라미터를 만듭니다.
pub fn parse_params(items: &[String]) -> Result<RequestParams> {
    items
        .iter()
        .map(|item| parse_param(item))
        .collect::<Result<Vec<_>>>()
        .map(|pairs| pairs.into_iter().collect())
}
