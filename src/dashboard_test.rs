use super::*;
use time::macros::date;

#[test]
fn four_metric_cards_with_expected_totals() {
    let cards = metric_cards();
    assert_eq!(cards.len(), 4);
    let values: Vec<u64> = cards.iter().map(|c| c.value).collect();
    assert_eq!(values, vec![12550, 215, 12335, 98]);
}

#[test]
fn metric_card_series_cover_a_week() {
    let cards = metric_cards();
    for card in &cards[..3] {
        assert_eq!(card.series.len(), 7, "{} should have one point per weekday", card.name);
    }
}

#[test]
fn bar_chart_groups_are_paired_weekly_series() {
    let groups = bar_chart_groups();
    assert_eq!(groups.len(), 2);
    for group in &groups {
        assert_eq!(group.anomalies.len(), 7);
        assert_eq!(group.normal.len(), 7);
    }
}

#[test]
fn category_shares_are_reversed() {
    let shares = category_shares();
    assert_eq!(shares.len(), 6);
    assert_eq!(shares.first().map(|s| s.category), Some("Photoresist residue"));
    assert_eq!(shares.last().map(|s| s.category), Some("Ring contamination"));
}

#[test]
fn detection_table_has_thirty_rows_in_range() {
    let table = detection_table(date!(2026 - 08 - 28));
    assert_eq!(table.len(), 30);
    for (index, row) in table.iter().enumerate() {
        assert_eq!(row.id as usize, index + 1);
        assert!(row.file_name.ends_with(".png"));
        assert!((1800..=2000).contains(&row.sample_count));
        assert!((1000..=1800).contains(&row.detected_count));
        assert!(row.anomaly_count <= 5);
        assert!((12600..=16999).contains(&row.inspection_count));
        assert!((95..=100).contains(&row.pass_rate));
    }
}

#[test]
fn detection_table_dates_count_backwards() {
    let table = detection_table(date!(2026 - 08 - 28));
    assert_eq!(table[0].date, "2026-08-28");
    assert_eq!(table[1].date, "2026-08-27");
    assert_eq!(table[29].date, "2026-07-30");
}

#[test]
fn latest_news_takes_fourteen_rows_with_weekday_labels() {
    let today = date!(2026 - 08 - 28);
    let table = detection_table(today);
    let news = latest_news(&table, today);
    assert_eq!(news.len(), 14);
    // 2026-08-28 is a Friday
    assert_eq!(news[0].date, "2026-08-28 Friday");
    assert_eq!(news[1].date, "2026-08-27 Thursday");
    assert_eq!(news[0].file_name, table[0].file_name);
}

#[test]
fn generate_produces_a_complete_payload() {
    let data = generate();
    assert_eq!(data.cards.len(), 4);
    assert_eq!(data.bar_charts.len(), 2);
    assert_eq!(data.category_shares.len(), 6);
    assert_eq!(data.table.len(), 30);
    assert_eq!(data.latest_news.len(), 14);
}

#[test]
fn payload_serializes_with_snake_case_keys() {
    let data = generate();
    let json = serde_json::to_value(&data).unwrap();
    assert!(json["table"][0].get("sample_count").is_some());
    assert!(json["latest_news"][0].get("pass_rate").is_some());
}
