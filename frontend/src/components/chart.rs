//! SVG 图表，几何计算来自核心库的 `ChartSpec`

use career_saarthi::dashboard::chart::{ChartSpec, LegendPosition};
use leptos::prelude::*;

const WIDTH: f64 = 320.0;
const HEIGHT: f64 = 160.0;
const PAD: f64 = 32.0;

#[component]
pub fn LineChart(spec: ChartSpec) -> impl IntoView {
    let points = spec.line_points(WIDTH, HEIGHT);
    let color = spec.series.colors.first().cloned().unwrap_or_default();
    let fill = spec.series.fill.clone().unwrap_or_else(|| "none".to_string());

    // 折线下方的填充区域
    let area = if points.is_empty() {
        String::new()
    } else {
        let line = points
            .iter()
            .map(|(x, y)| format!("L {x:.1} {y:.1}"))
            .collect::<Vec<_>>()
            .join(" ");
        let first_x = points[0].0;
        let last_x = points[points.len() - 1].0;
        format!("M {first_x:.1} {HEIGHT:.1} {line} L {last_x:.1} {HEIGHT:.1} Z")
    };

    let ticks = spec
        .y_ticks(5)
        .into_iter()
        .map(|(value, text)| {
            let y = spec.y_position(value, HEIGHT);
            view! {
                <g>
                    <line x1="0" x2=WIDTH y1=y y2=y stroke="currentColor" stroke-opacity="0.1" />
                    <text x="-6" y=y text-anchor="end" dominant-baseline="middle" font-size="10" fill="currentColor">{text}</text>
                </g>
            }
        })
        .collect_view();

    let labels = spec
        .labels
        .iter()
        .zip(points.iter())
        .map(|(label, (x, _))| {
            view! {
                <text x=*x y=HEIGHT + 16.0 text-anchor="middle" font-size="10" fill="currentColor">
                    {label.clone()}
                </text>
            }
        })
        .collect_view();

    let dots = points
        .iter()
        .enumerate()
        .map(|(i, (x, y))| {
            let tip = spec.tooltip(i).unwrap_or_default();
            view! {
                <circle cx=*x cy=*y r="3" fill=color.clone()>
                    <title>{tip}</title>
                </circle>
            }
        })
        .collect_view();

    let view_box = format!("{} {} {} {}", -PAD, -8.0, WIDTH + PAD + 8.0, HEIGHT + PAD);
    let polyline = spec.polyline(WIDTH, HEIGHT);

    view! {
        <svg viewBox=view_box class="w-full h-64 text-base-content" role="img" aria-label=spec.series.label.clone()>
            {ticks}
            <path d=area fill=fill stroke="none" />
            <polyline points=polyline fill="none" stroke=color.clone() stroke-width="2" stroke-linejoin="round" />
            {dots}
            {labels}
        </svg>
    }
}

#[component]
pub fn DoughnutChart(spec: ChartSpec) -> impl IntoView {
    let segments = spec.segments(80.0, 80.0, 70.0);
    let show_legend = spec.legend == LegendPosition::Right;

    let arcs = segments
        .iter()
        .map(|seg| {
            view! {
                <path d=seg.path.clone() fill=seg.color.clone()>
                    <title>{seg.tooltip.clone()}</title>
                </path>
            }
        })
        .collect_view();

    let legend = segments
        .iter()
        .map(|seg| {
            let swatch = format!("background-color: {}", seg.color);
            view! {
                <li class="flex items-center gap-2 text-sm">
                    <span class="inline-block w-3 h-3 rounded-full" style=swatch></span>
                    <span>{seg.label.clone()}</span>
                    <span class="text-base-content/60">{format!("{:.0}%", seg.percent)}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="flex items-center gap-6">
            <svg viewBox="0 0 160 160" class="w-48 h-48" role="img">
                {arcs}
            </svg>
            {show_legend.then(|| view! { <ul class="space-y-2">{legend}</ul> })}
        </div>
    }
}
