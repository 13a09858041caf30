//! SVG Charts
//!
//! Pie, column, ranked-bar and line charts drawn from the geometry in
//! `dashboard_core::chart`, plus the dashboard sections built on them.

use leptos::prelude::*;

use dashboard_core::chart::{
    horizontal_bars, nice_max, palette_color, pie_slices, polyline, series_markers, vertical_bars,
    week_x,
};
use dashboard_core::models::NamedCount;
use dashboard_core::view_model::{CategoryShare, TrendSeries};

type ChartItems = Vec<(String, u64, &'static str)>;

const GRID_LINES: u64 = 4;

/// Axis tick values from zero up to `top`
fn ticks(top: u64) -> Vec<u64> {
    (0..=GRID_LINES).map(|i| top * i / GRID_LINES).collect()
}

// ========================
// Primitive Charts
// ========================

const PIE_WIDTH: f64 = 420.0;
const PIE_HEIGHT: f64 = 300.0;
const PIE_RADIUS: f64 = 95.0;

#[component]
pub fn PieChart(items: ChartItems) -> impl IntoView {
    let cx = PIE_WIDTH / 2.0;
    let cy = PIE_HEIGHT / 2.0;
    let slices = pie_slices(&items, cx, cy, PIE_RADIUS);

    view! {
        <svg class="chart pie-chart" viewBox=format!("0 0 {} {}", PIE_WIDTH, PIE_HEIGHT) role="img">
            {slices.into_iter().map(|slice| {
                let anchor = if slice.label_x >= cx { "start" } else { "end" };
                view! {
                    <g class="pie-slice">
                        <path d=slice.path fill=slice.color stroke="#fff" stroke-width="1"></path>
                        <text
                            x=format!("{:.1}", slice.label_x)
                            y=format!("{:.1}", slice.label_y)
                            text-anchor=anchor
                            class="pie-label"
                        >
                            {slice.label}
                        </text>
                    </g>
                }
            }).collect_view()}
        </svg>
    }
}

const BAR_WIDTH: f64 = 420.0;
const BAR_HEIGHT: f64 = 220.0;
const BAR_LEFT: f64 = 44.0;
const BAR_TOP: f64 = 16.0;
const BAR_BOTTOM: f64 = 64.0;

/// Columns with a value axis
#[component]
pub fn BarChart(items: ChartItems) -> impl IntoView {
    let top = nice_max(items.iter().map(|(_, v, _)| *v).max().unwrap_or(0));
    let bars = vertical_bars(&items, BAR_WIDTH, BAR_HEIGHT);

    view! {
        <svg
            class="chart bar-chart"
            viewBox=format!("0 0 {} {}", BAR_LEFT + BAR_WIDTH + 8.0, BAR_TOP + BAR_HEIGHT + BAR_BOTTOM)
            role="img"
        >
            <g transform=format!("translate({},{})", BAR_LEFT, BAR_TOP)>
                {ticks(top).into_iter().map(|tick| {
                    let y = BAR_HEIGHT - tick as f64 / top as f64 * BAR_HEIGHT;
                    view! {
                        <line class="grid-line" x1="0" x2=BAR_WIDTH.to_string() y1=format!("{:.1}", y) y2=format!("{:.1}", y)></line>
                        <text class="axis-label" x="-8" y=format!("{:.1}", y + 4.0) text-anchor="end">{tick.to_string()}</text>
                    }
                }).collect_view()}
                {bars.into_iter().map(|bar| {
                    let center = bar.x + bar.width / 2.0;
                    let label_y = BAR_HEIGHT + 14.0;
                    view! {
                        <rect
                            x=format!("{:.1}", bar.x)
                            y=format!("{:.1}", bar.y)
                            width=format!("{:.1}", bar.width)
                            height=format!("{:.1}", bar.height)
                            fill=bar.color
                            rx="4"
                        ></rect>
                        <text class="bar-value" x=format!("{:.1}", center) y=format!("{:.1}", bar.y - 4.0) text-anchor="middle">
                            {bar.value.to_string()}
                        </text>
                        <text
                            class="axis-label"
                            x=format!("{:.1}", center)
                            y=format!("{:.1}", label_y)
                            text-anchor="end"
                            transform=format!("rotate(-35 {:.1} {:.1})", center, label_y)
                        >
                            {bar.label}
                        </text>
                    }
                }).collect_view()}
            </g>
        </svg>
    }
}

const ROW_HEIGHT: f64 = 34.0;
const ROW_LABEL_WIDTH: f64 = 160.0;
const ROW_BAR_WIDTH: f64 = 360.0;

/// Ranked rows, label on the left and count at the end of each bar
#[component]
pub fn HorizontalBarChart(items: ChartItems) -> impl IntoView {
    let height = ROW_HEIGHT * items.len().max(1) as f64;
    let bars = horizontal_bars(&items, ROW_BAR_WIDTH, height);

    view! {
        <svg
            class="chart horizontal-bar-chart"
            viewBox=format!("0 0 {} {}", ROW_LABEL_WIDTH + ROW_BAR_WIDTH + 48.0, height)
            role="img"
        >
            {bars.into_iter().map(|bar| {
                let middle = bar.y + bar.height / 2.0 + 4.0;
                view! {
                    <text class="axis-label" x=format!("{:.1}", ROW_LABEL_WIDTH - 8.0) y=format!("{:.1}", middle) text-anchor="end">
                        {bar.label}
                    </text>
                    <rect
                        x=format!("{:.1}", ROW_LABEL_WIDTH)
                        y=format!("{:.1}", bar.y)
                        width=format!("{:.1}", bar.width)
                        height=format!("{:.1}", bar.height)
                        fill=bar.color
                        rx="4"
                    ></rect>
                    <text class="bar-value" x=format!("{:.1}", ROW_LABEL_WIDTH + bar.width + 6.0) y=format!("{:.1}", middle)>
                        {bar.value.to_string()}
                    </text>
                }
            }).collect_view()}
        </svg>
    }
}

const LINE_WIDTH: f64 = 640.0;
const LINE_HEIGHT: f64 = 240.0;
const LINE_LEFT: f64 = 44.0;
const LINE_TOP: f64 = 16.0;
const LINE_BOTTOM: f64 = 70.0;

/// One line per series over a shared week axis
#[component]
pub fn LineChart(weeks: Vec<String>, series: Vec<TrendSeries>, max: u64) -> impl IntoView {
    let top = nice_max(max);
    let legend = series.len() > 1;
    let legend_items: Vec<(String, &'static str)> =
        series.iter().map(|s| (s.category.clone(), s.color)).collect();

    let lines = series
        .into_iter()
        .map(|s| {
            let markers = series_markers(&weeks, &s.points, LINE_WIDTH, LINE_HEIGHT, top);
            let points: Vec<(f64, f64)> = markers.iter().map(|m| (m.x, m.y)).collect();
            let dots = markers
                .into_iter()
                .map(|marker| view! {
                    <circle cx=format!("{:.1}", marker.x) cy=format!("{:.1}", marker.y) r="3.5" fill=s.color>
                        <title>{marker.title}</title>
                    </circle>
                })
                .collect_view();
            view! {
                <g class="series">
                    <polyline points=polyline(&points) fill="none" stroke=s.color stroke-width="2"></polyline>
                    {dots}
                </g>
            }
        })
        .collect_view();

    let count = weeks.len();
    let week_labels = weeks
        .into_iter()
        .enumerate()
        .map(|(i, week)| {
            let x = week_x(i, count, LINE_WIDTH);
            let y = LINE_HEIGHT + 14.0;
            view! {
                <text
                    class="axis-label"
                    x=format!("{:.1}", x)
                    y=format!("{:.1}", y)
                    text-anchor="end"
                    transform=format!("rotate(-35 {:.1} {:.1})", x, y)
                >
                    {week}
                </text>
            }
        })
        .collect_view();

    view! {
        <div class="line-chart">
            <svg
                class="chart"
                viewBox=format!("0 0 {} {}", LINE_LEFT + LINE_WIDTH + 16.0, LINE_TOP + LINE_HEIGHT + LINE_BOTTOM)
                role="img"
            >
                <g transform=format!("translate({},{})", LINE_LEFT, LINE_TOP)>
                    {ticks(top).into_iter().map(|tick| {
                        let y = LINE_HEIGHT - tick as f64 / top as f64 * LINE_HEIGHT;
                        view! {
                            <line class="grid-line" x1="0" x2=LINE_WIDTH.to_string() y1=format!("{:.1}", y) y2=format!("{:.1}", y)></line>
                            <text class="axis-label" x="-8" y=format!("{:.1}", y + 4.0) text-anchor="end">{tick.to_string()}</text>
                        }
                    }).collect_view()}
                    {week_labels}
                    {lines}
                </g>
            </svg>
            {legend.then(|| view! {
                <div class="chart-legend">
                    {legend_items.into_iter().map(|(name, color)| view! {
                        <span class="legend-item">
                            <span class="legend-swatch" style=format!("background:{}", color)></span>
                            {name}
                        </span>
                    }).collect_view()}
                </div>
            })}
        </div>
    }
}

// ========================
// Dashboard Sections
// ========================

#[component]
pub fn CategoryPie(categories: Vec<CategoryShare>) -> impl IntoView {
    let items: ChartItems = categories
        .iter()
        .map(|c| (format!("{}: {:.1}%", c.name, c.percentage), c.value, c.color))
        .collect();

    view! {
        <div class="chart-card">
            <h2>"Issues by Category"</h2>
            <PieChart items=items />
        </div>
    }
}

#[component]
pub fn StatusBars(statuses: Vec<NamedCount>) -> impl IntoView {
    let items: ChartItems = statuses
        .into_iter()
        .map(|s| (s.name, s.value, palette_color(0)))
        .collect();

    view! {
        <div class="chart-card">
            <h2>"Issues by Status"</h2>
            <BarChart items=items />
        </div>
    }
}

/// Categories ranked by issue count
#[component]
pub fn CategoryVolume(categories: Vec<CategoryShare>) -> impl IntoView {
    let items: ChartItems = categories
        .into_iter()
        .map(|c| (c.name, c.value, c.color))
        .collect();

    view! {
        <div class="chart-card full-width">
            <h2>"Category Volume"</h2>
            <HorizontalBarChart items=items />
        </div>
    }
}
