//! Bitkub 커넥터 CLI.
//!
//! # 사용 예시
//!
//! ```bash
//! # 마켓 목록 (인증 불필요)
//! bitkub markets
//!
//! # 잔고 조회 (BITKUB_API_KEY, BITKUB_API_SECRET 필요)
//! bitkub balance --non-zero
//!
//! # 지정가 매수 드라이런
//! bitkub order -s XRP/THB --side buy --type limit -a 20 -p 100 --test
//!
//! # 주문 취소
//! bitkub cancel fwQ6dnQWQPs4cbatF5Am2xCDP1J
//!
//! # XRP 출금 (태그 필수)
//! bitkub withdraw -c XRP -a 10 --address rPEPPER7kfTD9w2To4CQk6UCfuHM9c6GDY --tag 123
//! ```

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use connector_bitkub::{BitkubClient, BitkubConfig};
use connector_core::{init_logging, AppConfig, Credentials, LogConfig, OrderType, Side};
use rust_decimal::Decimal;
use tracing::{debug, error};

use connector_cli::commands::{account, market, params::parse_params, trade, withdraw};

#[derive(Parser)]
#[command(name = "bitkub")]
#[command(about = "Bitkub exchange connector CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = "config/default.toml")]
    config: String,

    /// REST API 기본 URL (설정 파일, BITKUB_BASE_URL보다 우선)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 마켓 목록 조회
    Markets,

    /// 잔고 조회
    Balance {
        /// 잔고가 0인 통화 제외
        #[arg(long, default_value = "false")]
        non_zero: bool,
    },

    /// 주문 제출
    Order {
        /// 심볼 (예: XRP/THB)
        #[arg(short, long)]
        symbol: String,

        /// 주문 방향 (buy, sell)
        #[arg(long)]
        side: Side,

        /// 주문 유형 (market, limit)
        #[arg(short = 't', long = "type", default_value = "limit")]
        order_type: OrderType,

        /// 수량
        #[arg(short, long)]
        amount: Decimal,

        /// 가격 (지정가 주문 필수)
        #[arg(short, long)]
        price: Option<Decimal>,

        /// 드라이런 엔드포인트 사용 (실제 주문 미실행)
        #[arg(long, default_value = "false")]
        test: bool,

        /// 추가 원시 파라미터 (key=value, 반복 가능)
        #[arg(long = "param")]
        params: Vec<String>,
    },

    /// 주문 취소
    Cancel {
        /// 거래소 주문 ID
        order_id: String,
    },

    /// 암호화폐 출금
    Withdraw {
        /// 통화 코드 (예: BTC, XRP)
        #[arg(short, long)]
        currency: String,

        /// 수량
        #[arg(short, long)]
        amount: Decimal,

        /// 목적지 주소
        #[arg(long)]
        address: String,

        /// 목적지 태그/메모 (XRP 필수)
        #[arg(long)]
        tag: Option<String>,

        /// 추가 원시 파라미터 (key=value, 반복 가능)
        #[arg(long = "param")]
        params: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env 파일 로드 (없어도 무시)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let app_config = AppConfig::load(&cli.config)?;
    init_logging(LogConfig::from(&app_config.logging))
        .map_err(|e| anyhow!("로깅 초기화 실패: {}", e))?;

    let credentials = Credentials::from_env("BITKUB_API_KEY", "BITKUB_API_SECRET");
    let mut config = BitkubConfig::from_exchange_config(&app_config.exchange, credentials);
    if let Some(base_url) = cli
        .base_url
        .or_else(|| std::env::var("BITKUB_BASE_URL").ok())
    {
        config = config.with_base_url(base_url);
    }
    debug!("Using {:?}", config);

    let client = BitkubClient::new(config)?;

    let outcome = match cli.command {
        Commands::Markets => market::list_markets(&client).await.map(|_| ()),

        Commands::Balance { non_zero } => account::show_balance(&client, non_zero).await,

        Commands::Order {
            symbol,
            side,
            order_type,
            amount,
            price,
            test,
            params,
        } => {
            let config = trade::PlaceOrderConfig {
                symbol,
                side,
                order_type,
                amount,
                price,
                test_mode: test,
                extra: parse_params(&params)?,
            };
            trade::place_order(&client, config).await
        }

        Commands::Cancel { order_id } => trade::cancel_order(&client, &order_id).await,

        Commands::Withdraw {
            currency,
            amount,
            address,
            tag,
            params,
        } => {
            let config = withdraw::WithdrawConfig {
                currency,
                amount,
                address,
                tag,
                extra: parse_params(&params)?,
            };
            withdraw::withdraw(&client, config).await
        }
    };

    if let Err(e) = &outcome {
        error!("Command failed: {}", e);
    }

    outcome
}
