//! 时间类型模块
//!
//! `Timestamp` 为可序列化的毫秒时间戳。浏览器端通过 `Date.now()` 获取，
//! 本模块只负责由此推导的纯计算（UTC 日期、默认保修期、建议编号）。

use chrono::{DateTime, Months};
use serde::{Deserialize, Serialize};

/// 线上的日历日期（`YYYY-MM-DD`）
pub use chrono::NaiveDate;

use crate::ASSET_ID_PREFIX;

/// 毫秒时间戳
///
/// 内部存储为 `i64`，表示自 Unix 纪元以来的毫秒数
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    #[inline]
    pub const fn new(ms: i64) -> Self {
        Self(ms)
    }

    #[inline]
    pub const fn as_millis(&self) -> i64 {
        self.0
    }

    /// 对应的 UTC 日历日期（与 `toISOString().split("T")[0]` 一致）
    pub fn utc_date(&self) -> NaiveDate {
        DateTime::from_timestamp_millis(self.0)
            .map(|dt| dt.date_naive())
            .unwrap_or(NaiveDate::MIN)
    }

    /// 建议的新资产编号：前缀加毫秒时间戳的最后四位
    pub fn suggested_asset_id(&self) -> String {
        let digits = self.0.unsigned_abs().to_string();
        let tail = &digits[digits.len().saturating_sub(4)..];
        format!("{}{}", ASSET_ID_PREFIX, tail)
    }
}

impl From<i64> for Timestamp {
    fn from(ms: i64) -> Self {
        Self(ms)
    }
}

impl From<Timestamp> for i64 {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

/// 给日期加上整年；2 月 29 日落到目标年的 2 月 28 日
pub fn years_after(date: NaiveDate, years: u32) -> NaiveDate {
    date.checked_add_months(Months::new(years * 12))
        .unwrap_or(date)
}
