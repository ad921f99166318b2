//! 잔고 조회.

use anyhow::Result;
use connector_bitkub::{BitkubClient, Exchange};

use super::print_json;

/// 잔고 시트를 조회해 JSON으로 출력합니다.
///
/// `non_zero`이면 여유/사용 잔고가 모두 0인 통화는 제외합니다.
pub async fn show_balance(client: &BitkubClient, non_zero: bool) -> Result<()> {
    let mut sheet = client.fetch_balance().await?;

    if non_zero {
        sheet
            .entries
            .retain(|_, entry| entry.total().map_or(true, |total| !total.is_zero()));
    }

    print_json(&sheet.entries)
}
