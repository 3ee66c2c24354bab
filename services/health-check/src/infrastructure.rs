// インフラストラクチャ層モジュール
pub mod clock;

// 再エクスポート
pub use clock::{Clock, FixedClock, SystemClock};
