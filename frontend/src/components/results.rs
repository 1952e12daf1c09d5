//! Analysis results: sentiment chart and detailed table.

use leptos::*;

use crate::presenter::{ChartData, DisplayRow, Presentation, CHART_TITLE, SERIES_LABEL};

#[component]
pub fn ResultsSection(presentation: Memo<Option<Presentation>>) -> impl IntoView {
    move || {
        presentation.get().map(|Presentation { chart, rows }| {
            view! {
                <div class="results-container">
                    <div class="chart-section scroll-animate fade-up">
                        <SentimentChart chart=chart/>
                    </div>

                    <div class="table-section scroll-animate fade-up">
                        <h3>"Detailed Results"</h3>
                        <div class="table-wrapper">
                            <ResultsTable rows=rows/>
                        </div>
                    </div>
                </div>
            }
        })
    }
}

/// Bar chart over the three sentiment buckets.
#[component]
pub fn SentimentChart(chart: ChartData) -> impl IntoView {
    let bars = chart
        .buckets
        .iter()
        .map(|bucket| {
            let style = format!(
                "height: {:.1}%; background-color: {}; border: 1px solid {};",
                chart.share(bucket.value),
                bucket.fill,
                bucket.border,
            );
            view! {
                <div class="chart-column">
                    <span class="chart-value">{bucket.value}</span>
                    <div class="chart-bar" style=style></div>
                    <span class="chart-label">{bucket.label}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <figure class="sentiment-chart">
            <figcaption class="chart-title">{CHART_TITLE}</figcaption>
            <div class="chart-legend">{SERIES_LABEL}</div>
            <div class="chart-bars">{bars}</div>
        </figure>
    }
}

#[component]
fn ResultsTable(rows: Vec<DisplayRow>) -> impl IntoView {
    view! {
        <table>
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Text"</th>
                    <th>"Sentiment"</th>
                    <th>"Timestamp"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || rows.clone()
                    key=|row| row.key.clone()
                    children=move |row| {
                        view! {
                            <tr class=row.row_class style=row.animation_delay>
                                <td>{row.display_id}</td>
                                <td>{row.text}</td>
                                <td>
                                    <span class=row.badge_class>{row.sentiment.as_str()}</span>
                                </td>
                                <td>{row.timestamp}</td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}
