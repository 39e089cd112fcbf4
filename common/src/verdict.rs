//! フォレンジック判定
//!
//! M-Score / Z-Score の平均値を固定閾値で3区分に分類する。
//! 分岐は上から順に評価し、最初に一致したものを採用する（順序も仕様の一部）。
//!
//! ## 既知の挙動
//! - avgM < -2.22 かつ avgZ <= 3.0 のような隙間の領域は「中程度」に落ちる
//! - 境界値はどちらの条件でも除外（-2.22, 3.0 は「中程度」）
//! - Accruals の平均は表示のみで判定には使わない
//! - M または Z の値が1つもない場合は判定なし（None）

use crate::extract::MetricSeries;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Beneish M-Score の操作リスク閾値
pub const M_SCORE_THRESHOLD: f64 = -2.22;
/// Altman Z-Score の安全圏
pub const Z_SCORE_SAFE: f64 = 3.0;
/// Altman Z-Score の危険圏
pub const Z_SCORE_DISTRESS: f64 = 1.8;

/// 判定区分
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Verdict {
    Strong,
    HighRisk,
    Moderate,
}

impl Verdict {
    /// 判定文
    pub fn text(&self) -> &'static str {
        match self {
            Verdict::Strong => "strong financial health, low manipulation risk.",
            Verdict::HighRisk => "high probability of earnings manipulation and financial distress.",
            Verdict::Moderate => "moderate financial strength with mixed forensic indicators.",
        }
    }

    /// 一覧表示用の短いリスク区分
    pub fn risk_level(&self) -> &'static str {
        match self {
            Verdict::Strong => "Low",
            Verdict::HighRisk => "High",
            Verdict::Moderate => "Moderate",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}

/// 平均M・平均Zから判定
pub fn classify(avg_m: f64, avg_z: f64) -> Verdict {
    if avg_m < M_SCORE_THRESHOLD && avg_z > Z_SCORE_SAFE {
        Verdict::Strong
    } else if avg_m > M_SCORE_THRESHOLD && avg_z < Z_SCORE_DISTRESS {
        Verdict::HighRisk
    } else {
        Verdict::Moderate
    }
}

/// 欠損値を除いた算術平均
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    let (sum, count) = values
        .into_iter()
        .flatten()
        .filter(|v| v.is_finite())
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// 会社ごとのフォレンジック指標の平均
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForensicAggregate {
    pub avg_m_score: Option<f64>,
    pub avg_z_score: Option<f64>,
    pub avg_accruals: Option<f64>,
    /// 表示のみ
    pub avg_f_score: Option<f64>,
}

impl ForensicAggregate {
    pub fn from_series(
        m_score: &MetricSeries,
        z_score: &MetricSeries,
        f_score: &MetricSeries,
        accruals: &MetricSeries,
    ) -> Self {
        Self {
            avg_m_score: m_score.mean(),
            avg_z_score: z_score.mean(),
            avg_accruals: accruals.mean(),
            avg_f_score: f_score.mean(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.avg_m_score.is_none()
            && self.avg_z_score.is_none()
            && self.avg_accruals.is_none()
            && self.avg_f_score.is_none()
    }

    /// M・Z の両方の平均がある場合のみ判定
    pub fn verdict(&self) -> Option<Verdict> {
        match (self.avg_m_score, self.avg_z_score) {
            (Some(m), Some(z)) => Some(classify(m, z)),
            _ => None,
        }
    }
}
