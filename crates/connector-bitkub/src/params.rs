//! 삽입 순서를 보존하는 요청 파라미터.
//!
//! Bitkub 서버는 요청 본문의 필드 순서 그대로 서명을 다시 계산합니다.
//! 따라서 서명 페이로드는 해시맵이 아닌 명시적인 순서 목록으로 만듭니다.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

/// 키/값 쌍의 순서 있는 목록.
///
/// 이미 있는 키에 `insert`하면 값만 교체되고 위치는 유지됩니다.
/// 새 키는 항상 끝에 추가됩니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestParams {
    fields: Vec<(String, Value)>,
}

impl RequestParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// 필드를 추가한 파라미터를 반환합니다 (빌더 형식).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// 필드를 설정합니다. 기존 키는 제자리에서 값만 바뀝니다.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// 필드를 제거하고 값을 반환합니다. 나머지 필드 순서는 유지됩니다.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let index = self.fields.iter().position(|(k, _)| k == key)?;
        Some(self.fields.remove(index).1)
    }

    /// 주어진 키를 뺀 복사본을 반환합니다.
    pub fn without(&self, key: &str) -> Self {
        Self {
            fields: self
                .fields
                .iter()
                .filter(|(k, _)| k != key)
                .cloned()
                .collect(),
        }
    }

    /// 다른 파라미터를 순서대로 병합합니다.
    pub fn extend(&mut self, other: &RequestParams) {
        for (key, value) in &other.fields {
            self.insert(key.clone(), value.clone());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// 삽입 순서 그대로 JSON 객체 문자열로 직렬화합니다.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// URL 쿼리용 (키, 문자열 값) 쌍.
    pub fn query_pairs(&self) -> Vec<(&str, String)> {
        self.fields
            .iter()
            .map(|(k, v)| (k.as_str(), query_value(v)))
            .collect()
    }
}

fn query_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

impl Serialize for RequestParams {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for RequestParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}
