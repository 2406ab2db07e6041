//! 时间戳转换
//!
//! Authlete API 以自 epoch 起的毫秒数表示时间点，`0` 表示未设置。

use chrono::{DateTime, Utc};

/// 将毫秒时间戳转换为 `DateTime<Utc>`
///
/// `0` 或超出可表示范围时返回 `None`。
pub fn millis_to_datetime(millis: i64) -> Option<DateTime<Utc>> {
    if millis == 0 {
        return None;
    }
    DateTime::from_timestamp_millis(millis)
}

/// 将 `DateTime<Utc>` 转换为毫秒时间戳
pub fn datetime_to_millis(dt: DateTime<Utc>) -> i64 {
    dt.timestamp_millis()
}
