//! 커넥터가 생성하는 정규 도메인 모델.

mod balance;
mod currency;
mod market;
mod order;
mod withdrawal;

pub use balance::*;
pub use currency::*;
pub use market::*;
pub use order::*;
pub use withdrawal::*;
