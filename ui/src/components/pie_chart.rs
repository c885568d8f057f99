//! An SVG pie chart with a legend.

#![allow(non_snake_case)]

use dioxus::prelude::*;

use std::f64::consts::TAU;

const SIZE: f64 = 200.0;
const CENTER: f64 = SIZE / 2.0;
const RADIUS: f64 = SIZE / 2.0;

/// One wedge of the pie.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: &'static str,
    pub value: f64,
    pub color: &'static str,
}

#[derive(Props, PartialEq, Clone)]
pub struct PieChartProps {
    slices: Vec<PieSlice>,
}

/// Renders the slices as a pie with a legend underneath. A pure function of
/// its props, so the enclosing screen can re-render it as often as it likes.
pub fn PieChart(props: PieChartProps) -> Element {
    let wedges: Vec<(String, &'static str)> = fractions(&props.slices)
        .into_iter()
        .zip(&props.slices)
        .map(|((start, end), slice)| (wedge_path(start, end), slice.color))
        .collect();

    rsx! {
        div { class: "chart-container",
            svg {
                class: "chart",
                view_box: "0 0 {SIZE} {SIZE}",
                role: "img",
                {wedges.iter().map(|(d, color)| rsx! {
                    path { d: "{d}", fill: "{color}" }
                })}
            }
            ul { class: "chart-legend",
                for slice in props.slices {
                    li {
                        span {
                            class: "legend-swatch",
                            style: "background: {slice.color};",
                        }
                        "{slice.label}"
                    }
                }
            }
        }
    }
}

/// Cumulative `(start, end)` positions for each slice, in turns. With a
/// non-positive total every slice collapses to a zero span.
fn fractions(slices: &[PieSlice]) -> Vec<(f64, f64)> {
    let total: f64 = slices.iter().map(|slice| slice.value).sum();
    let mut cursor = 0.0;
    slices
        .iter()
        .map(|slice| {
            let share = if total > 0.0 { slice.value / total } else { 0.0 };
            let start = cursor;
            cursor += share;
            (start, cursor)
        })
        .collect()
}

/// The SVG path for one wedge, `start` and `end` in turns from twelve
/// o'clock. A wedge spanning the whole circle is drawn as two half arcs,
/// since a single arc whose endpoints coincide renders as nothing.
fn wedge_path(start: f64, end: f64) -> String {
    let span = end - start;
    if span <= 0.0 {
        return String::new();
    }
    if span >= 1.0 - 1e-9 {
        let (tx, ty) = point(0.0);
        let (bx, by) = point(0.5);
        return format!(
            "M {tx} {ty} \
             A {RADIUS} {RADIUS} 0 1 1 {bx} {by} \
             A {RADIUS} {RADIUS} 0 1 1 {tx} {ty} Z"
        );
    }

    let (x1, y1) = point(start);
    let (x2, y2) = point(end);
    let large_arc = if span > 0.5 { 1 } else { 0 };
    format!(
        "M {CENTER} {CENTER} L {x1} {y1} \
         A {RADIUS} {RADIUS} 0 {large_arc} 1 {x2} {y2} Z"
    )
}

fn point(turns: f64) -> (f64, f64) {
    let angle = turns * TAU - TAU / 4.0;
    (CENTER + RADIUS * angle.cos(), CENTER + RADIUS * angle.sin())
}
