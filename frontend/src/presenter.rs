//! Result presentation: chart buckets and table rows.
//!
//! [`present`] is a pure function of the [`ResultSet`]; the views render
//! whatever it returns and never reorder or filter rows themselves.

use crate::types::{ResultSet, Sentiment};

/// Chart title.
pub const CHART_TITLE: &str = "Sentiment Analysis Results";

/// Dataset label.
pub const SERIES_LABEL: &str = "Sentiment Distribution";

/// One bar of the sentiment chart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartBucket {
    pub sentiment: Sentiment,
    pub label: &'static str,
    pub value: u64,
    pub fill: &'static str,
    pub border: &'static str,
}

/// Fixed three-bucket series: Positive, Neutral, Negative.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartData {
    pub buckets: [ChartBucket; 3],
}

impl ChartData {
    pub fn values(&self) -> [u64; 3] {
        [self.buckets[0].value, self.buckets[1].value, self.buckets[2].value]
    }

    /// Largest bucket, used to scale the bars.
    pub fn max_value(&self) -> u64 {
        self.values().into_iter().max().unwrap_or(0)
    }

    /// Bar length in percent of the largest bucket.
    pub fn share(&self, value: u64) -> f64 {
        match self.max_value() {
            0 => 0.0,
            max => value as f64 * 100.0 / max as f64,
        }
    }
}

/// A table row ready to render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayRow {
    /// Render key: the zero-based position, unique within one result set.
    pub key: String,
    /// Identifier shown in the ID column: the server id, else position + 1.
    pub display_id: String,
    pub text: String,
    pub sentiment: Sentiment,
    pub row_class: String,
    pub badge_class: String,
    pub timestamp: String,
    /// Staggered entry animation.
    pub animation_delay: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Presentation {
    pub chart: ChartData,
    pub rows: Vec<DisplayRow>,
}

/// Derive chart and table data; nothing to render without a result set.
pub fn present(results: Option<&ResultSet>) -> Option<Presentation> {
    let results = results?;

    let buckets = Sentiment::ALL.map(|sentiment| ChartBucket {
        sentiment,
        label: sentiment.label(),
        value: results.statistics.count(sentiment),
        fill: sentiment.fill_color(),
        border: sentiment.border_color(),
    });

    let rows = results
        .rows
        .iter()
        .enumerate()
        .map(|(index, row)| DisplayRow {
            key: index.to_string(),
            display_id: row.id.map_or_else(|| (index + 1).to_string(), |id| id.to_string()),
            text: row.text.clone(),
            sentiment: row.sentiment,
            row_class: format!("{} scroll-animate fade-up", row.sentiment.row_class()),
            badge_class: row.sentiment.badge_class(),
            timestamp: row.timestamp.clone(),
            animation_delay: format!("animation-delay: {:.1}s", index as f64 * 0.1),
        })
        .collect();

    Some(Presentation {
        chart: ChartData { buckets },
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ResultRow, Statistics};

    fn sample() -> ResultSet {
        let sentiments = [
            Sentiment::Positive,
            Sentiment::Positive,
            Sentiment::Negative,
            Sentiment::Neutral,
            Sentiment::Positive,
            Sentiment::Negative,
            Sentiment::Positive,
            Sentiment::Neutral,
            Sentiment::Negative,
            Sentiment::Positive,
        ];
        ResultSet {
            statistics: Statistics { positive: 5, neutral: 2, negative: 3 },
            rows: sentiments
                .iter()
                .enumerate()
                .map(|(i, sentiment)| ResultRow {
                    id: if i == 2 { None } else { Some(i as i64 + 100) },
                    text: format!("review {}", i),
                    sentiment: *sentiment,
                    timestamp: "2024-05-01 10:00:00".into(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_chart_uses_fixed_bucket_order() {
        let presentation = present(Some(&sample())).unwrap();
        let labels: Vec<&str> = presentation.chart.buckets.iter().map(|b| b.label).collect();

        assert_eq!(labels, ["Positive", "Neutral", "Negative"]);
        assert_eq!(presentation.chart.values(), [5, 2, 3]);
        assert_eq!(presentation.rows.len(), 10);
    }

    #[test]
    fn test_missing_id_falls_back_to_position() {
        let presentation = present(Some(&sample())).unwrap();
        let row = &presentation.rows[2];

        assert_eq!(row.display_id, "3");
        assert_eq!(row.key, "2");
        assert_eq!(presentation.rows[0].display_id, "100");
        assert_eq!(presentation.rows[0].key, "0");
    }

    #[test]
    fn test_keys_unique_when_ids_mix_with_positions() {
        let rows = [Some(2), None, None, Some(2)]
            .into_iter()
            .map(|id| ResultRow {
                id,
                text: "ok".into(),
                sentiment: Sentiment::Neutral,
                timestamp: "2024-05-01 10:00:00".into(),
            })
            .collect();
        let results = ResultSet { statistics: Statistics { positive: 0, neutral: 4, negative: 0 }, rows };
        let presentation = present(Some(&results)).unwrap();

        let keys: Vec<&str> = presentation.rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, ["0", "1", "2", "3"]);
        let ids: Vec<&str> = presentation.rows.iter().map(|r| r.display_id.as_str()).collect();
        assert_eq!(ids, ["2", "2", "3", "2"]);
    }

    #[test]
    fn test_rows_keep_server_order_and_classes() {
        let presentation = present(Some(&sample())).unwrap();
        let texts: Vec<&str> = presentation.rows.iter().map(|r| r.text.as_str()).collect();
        let expected: Vec<String> = (0..10).map(|i| format!("review {}", i)).collect();

        assert_eq!(texts, expected);
        assert_eq!(presentation.rows[2].row_class, "sentiment-negative scroll-animate fade-up");
        assert_eq!(presentation.rows[2].badge_class, "sentiment-badge negative");
        assert_eq!(presentation.rows[3].animation_delay, "animation-delay: 0.3s");
    }

    #[test]
    fn test_absent_result_set_renders_nothing() {
        assert_eq!(present(None), None);
    }

    #[test]
    fn test_present_is_idempotent() {
        let results = sample();
        assert_eq!(present(Some(&results)), present(Some(&results)));
    }

    #[test]
    fn test_share_scales_to_largest_bucket() {
        let chart = present(Some(&sample())).unwrap().chart;
        assert_eq!(chart.max_value(), 5);
        assert_eq!(chart.share(5), 100.0);
        assert_eq!(chart.share(2), 40.0);

        let empty = ResultSet { statistics: Statistics::default(), rows: vec![] };
        assert_eq!(present(Some(&empty)).unwrap().chart.share(0), 0.0);
    }
}
