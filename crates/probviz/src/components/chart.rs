//! Density chart rendering.
//!
//! Draws a `RenderOutput` curve with ratatui's `Chart`. The chart kind picks
//! the dataset style: a braille line for Normal, dots for the Poisson
//! approximation and vertical bars for Bernoulli.

use probviz_core::{ChartKind, RenderOutput};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    symbols,
    text::Span,
    widgets::{Axis, Block, Chart, Dataset, GraphType},
};

use crate::util::format::format_axis_value;
use crate::util::styles::{CURVE_COLOR, HEADER_COLOR};

/// Fraction of the y range added above the peak
const Y_HEADROOM: f64 = 0.1;

fn graph_style(chart: ChartKind) -> (GraphType, symbols::Marker) {
    match chart {
        ChartKind::Line => (GraphType::Line, symbols::Marker::Braille),
        ChartKind::Scatter => (GraphType::Scatter, symbols::Marker::Dot),
        ChartKind::Bar => (GraphType::Bar, symbols::Marker::HalfBlock),
    }
}

/// Axis bounds for a curve: x spans the domain, y starts at zero.
///
/// Bar charts get a little horizontal padding so the outermost bars are not
/// drawn on the axis itself.
pub fn chart_bounds(output: &RenderOutput) -> ([f64; 2], [f64; 2]) {
    let (x_min, x_max) = output.curve.x_bounds().unwrap_or((0.0, 1.0));
    let x_padding = match output.chart {
        ChartKind::Bar => (x_max - x_min).abs().max(1.0) * 0.1,
        _ => 0.0,
    };

    let y_peak = output
        .curve
        .y_bounds()
        .map(|(_, hi)| hi)
        .filter(|hi| hi.is_finite() && *hi > 0.0)
        .unwrap_or(1.0);

    (
        [x_min - x_padding, x_max + x_padding],
        [0.0, y_peak * (1.0 + Y_HEADROOM)],
    )
}

pub fn render_curve_chart(
    frame: &mut Frame,
    area: Rect,
    output: &RenderOutput,
    block: Block<'_>,
) {
    let ([x_min, x_max], [y_min, y_max]) = chart_bounds(output);
    let (graph_type, marker) = graph_style(output.chart);

    let dataset = Dataset::default()
        .name(output.kind.name())
        .marker(marker)
        .graph_type(graph_type)
        .style(Style::default().fg(CURVE_COLOR))
        .data(output.curve.points());

    let x_labels = vec![
        Span::raw(format_axis_value(x_min)),
        Span::raw(format_axis_value((x_min + x_max) / 2.0)),
        Span::raw(format_axis_value(x_max)),
    ];
    let y_labels = vec![
        Span::raw(format_axis_value(y_min)),
        Span::raw(format_axis_value((y_min + y_max) / 2.0)),
        Span::raw(format_axis_value(y_max)),
    ];

    let x_axis = Axis::default()
        .title(output.x_label.dark_gray())
        .bounds([x_min, x_max])
        .labels(x_labels);

    let y_axis = Axis::default()
        .title(Span::styled(output.y_label, Style::default().fg(HEADER_COLOR)))
        .bounds([y_min, y_max])
        .labels(y_labels);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(x_axis)
        .y_axis(y_axis);

    frame.render_widget(chart, area);
}
