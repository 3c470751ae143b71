//! Welcome-page demo datasets.
//!
//! Fixture data for the console's welcome screen: fixed metric cards and
//! chart series plus a pseudo-random synthetic detection table. Nothing here
//! touches the backend or persists — the whole payload is regenerated on
//! every request, exactly like the original page rebuilt it on every mount.

use rand::Rng;
use serde::Serialize;
use time::{Date, OffsetDateTime};

const TABLE_ROWS: usize = 30;
const NEWS_ROWS: usize = 14;

// =============================================================================
// SHAPES
// =============================================================================

/// One headline metric with its spark-line series and card presentation.
#[derive(Debug, Clone, Serialize)]
pub struct MetricCard {
    pub name: &'static str,
    pub value: u64,
    pub icon: &'static str,
    pub color: &'static str,
    pub bg_color: &'static str,
    pub duration: u32,
    pub series: Vec<u64>,
}

/// Paired weekly series for the per-category bar chart.
#[derive(Debug, Clone, Serialize)]
pub struct BarChartGroup {
    pub anomalies: Vec<u64>,
    pub normal: Vec<u64>,
}

/// Share of detections attributed to one defect category.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryShare {
    pub category: &'static str,
    pub percentage: f64,
    pub duration: u32,
    pub color: &'static str,
}

/// One synthetic detection-statistics row.
#[derive(Debug, Clone, Serialize)]
pub struct DetectionRow {
    pub id: u32,
    pub file_name: String,
    pub sample_count: u32,
    pub detected_count: u32,
    pub category: &'static str,
    pub anomaly_count: u32,
    pub inspection_count: u32,
    pub pass_rate: u32,
    pub date: String,
}

/// Everything the welcome page renders, in one payload.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardData {
    pub cards: Vec<MetricCard>,
    pub bar_charts: Vec<BarChartGroup>,
    pub category_shares: Vec<CategoryShare>,
    pub table: Vec<DetectionRow>,
    pub latest_news: Vec<DetectionRow>,
}

// =============================================================================
// FIXED SERIES
// =============================================================================

/// Total samples, undetected, detected, detection rate.
#[must_use]
pub fn metric_cards() -> Vec<MetricCard> {
    vec![
        MetricCard {
            name: "Total samples",
            value: 12550,
            icon: "ri/group-line",
            color: "#41b6ff",
            bg_color: "#effaff",
            duration: 2200,
            series: vec![2101, 5288, 4239, 4962, 6752, 5208, 7450],
        },
        MetricCard {
            name: "Undetected",
            value: 215,
            icon: "ri/question-answer-line",
            color: "#e85f33",
            bg_color: "#fff5f4",
            duration: 1600,
            series: vec![2216, 1148, 1255, 788, 4821, 1973, 4379],
        },
        MetricCard {
            name: "Detected",
            value: 12335,
            icon: "ri/chat-check-line",
            color: "#26ce83",
            bg_color: "#eff8f4",
            duration: 1600,
            series: vec![861, 1002, 3195, 1715, 3666, 2415, 3645],
        },
        MetricCard {
            name: "Detection rate",
            value: 98,
            icon: "ri/star-smile-line",
            color: "#7846e5",
            bg_color: "#f6f4fe",
            duration: 100,
            series: vec![49, 98],
        },
    ]
}

/// Anomalies vs normal samples per weekday, one group per chart toggle.
#[must_use]
pub fn bar_chart_groups() -> Vec<BarChartGroup> {
    vec![
        BarChartGroup {
            anomalies: vec![2101, 5288, 4239, 4962, 6752, 5208, 7450],
            normal: vec![2216, 1148, 1255, 1788, 4821, 1973, 4379],
        },
        BarChartGroup {
            anomalies: vec![2101, 3280, 4400, 4962, 5752, 6889, 7600],
            normal: vec![2116, 3148, 3255, 3788, 4821, 4970, 5390],
        },
    ]
}

/// Defect-category shares, emitted in reverse declaration order so the
/// progress list renders smallest-last.
#[must_use]
pub fn category_shares() -> Vec<CategoryShare> {
    let mut shares = vec![
        CategoryShare { category: "Ring contamination", percentage: 7.13, duration: 110, color: "#41b6ff" },
        CategoryShare { category: "Dielectric patch", percentage: 56.01, duration: 105, color: "#41b6ff" },
        CategoryShare { category: "Coating contamination", percentage: 9.98, duration: 100, color: "#41b6ff" },
        CategoryShare { category: "Film defect", percentage: 17.72, duration: 95, color: "#41b6ff" },
        CategoryShare { category: "Circuit etch defect", percentage: 7.13, duration: 90, color: "#26ce83" },
        CategoryShare { category: "Photoresist residue", percentage: 2.04, duration: 85, color: "#26ce83" },
    ];
    shares.reverse();
    shares
}

// =============================================================================
// SYNTHETIC TABLE
// =============================================================================

/// 30 pseudo-random detection rows, dates counting back one day per row.
#[must_use]
pub fn detection_table(today: Date) -> Vec<DetectionRow> {
    let categories = category_shares();
    let mut rng = rand::rng();
    (0..TABLE_ROWS)
        .map(|index| {
            let date = today - time::Duration::days(index as i64);
            DetectionRow {
                id: u32::try_from(index).unwrap_or(u32::MAX) + 1,
                file_name: format!("{}.png", rng.random_range(1000..=1800) + 1),
                sample_count: rng.random_range(1800..=2000),
                detected_count: rng.random_range(1000..=1800),
                category: categories[rng.random_range(0..categories.len())].category,
                anomaly_count: rng.random_range(0..=5),
                inspection_count: rng.random_range(12600..=16999),
                pass_rate: rng.random_range(95..=100),
                date: format_date(date),
            }
        })
        .collect()
}

/// The 14 most recent table rows, relabeled with weekday-suffixed dates.
#[must_use]
pub fn latest_news(table: &[DetectionRow], today: Date) -> Vec<DetectionRow> {
    table
        .iter()
        .take(NEWS_ROWS)
        .enumerate()
        .map(|(index, row)| {
            let date = today - time::Duration::days(index as i64);
            let mut row = row.clone();
            row.date = format!("{} {}", format_date(date), date.weekday());
            row
        })
        .collect()
}

/// One fresh payload for the welcome page.
#[must_use]
pub fn generate() -> DashboardData {
    let today = OffsetDateTime::now_utc().date();
    let table = detection_table(today);
    let latest_news = latest_news(&table, today);
    DashboardData {
        cards: metric_cards(),
        bar_charts: bar_chart_groups(),
        category_shares: category_shares(),
        table,
        latest_news,
    }
}

fn format_date(date: Date) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), u8::from(date.month()), date.day())
}

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod tests;
