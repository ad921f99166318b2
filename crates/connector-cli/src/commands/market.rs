//! 마켓 목록 조회.

use anyhow::Result;
use connector_bitkub::{BitkubClient, Exchange};
use tracing::info;

use super::print_json;

/// 전체 마켓을 조회해 JSON으로 출력합니다.
pub async fn list_markets(client: &BitkubClient) -> Result<usize> {
    let markets = client.fetch_markets().await?;
    info!("Fetched {} markets from {}", markets.len(), client.name());

    print_json(&markets)?;
    Ok(markets.len())
}
