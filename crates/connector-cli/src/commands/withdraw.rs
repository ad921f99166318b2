//! 암호화폐 출금.

use anyhow::Result;
use connector_bitkub::{BitkubClient, Exchange, RequestParams};
use connector_core::{Quantity, WithdrawalRequest};

use super::print_json;

/// 출금 명령 설정.
#[derive(Debug, Clone)]
pub struct WithdrawConfig {
    /// 통화 코드 (예: XRP)
    pub currency: String,
    /// 수량
    pub amount: Quantity,
    /// 목적지 주소
    pub address: String,
    /// 목적지 태그/메모
    pub tag: Option<String>,
    /// 추가 원시 파라미터
    pub extra: RequestParams,
}

impl WithdrawConfig {
    pub fn request(&self) -> WithdrawalRequest {
        let request = WithdrawalRequest::new(&self.currency, self.amount, &self.address);
        match &self.tag {
            Some(tag) => request.with_tag(tag),
            None => request,
        }
    }
}

/// 출금을 요청하고 결과를 JSON으로 출력합니다.
pub async fn withdraw(client: &BitkubClient, config: WithdrawConfig) -> Result<()> {
    let result = client.withdraw(&config.request(), &config.extra).await?;
    print_json(&result)
}
