//! Plotly figures for the four dashboard panels.
//!
//! Every builder is a pure mapping from a dataset table to a [`Figure`]: trace
//! list plus layout, in the JSON shape Plotly.js expects. The browser hands
//! them to `Plotly.newPlot`; the HTML report embeds them verbatim.

use model::{
    ActivationStep, Dataset, MonthlyTrend, ProductRevenue, SegmentAverage, StatusShare, Tab,
    Accent, Decimal,
};
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::format::{format_currency, format_currency_exact, format_percent};
use crate::retention::{retention_series, RetentionSeries};

const AXIS_TEXT: &str = "rgba(255, 255, 255, 0.3)";
const GRID: &str = "rgba(255, 255, 255, 0.04)";
const HOVER_BG: &str = "rgba(15, 15, 20, 0.95)";

/// A chart card: DOM id, heading and the Plotly payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub height: u32,
    pub data: Vec<Value>,
    pub layout: Value,
}

fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

/// Dark, transparent base layout shared by every chart. `extra` keys override
/// the base ones.
fn layout(height: u32, extra: Value) -> Value {
    let base = json!({
        "height": height,
        "margin": {"t": 10, "r": 10, "l": 50, "b": 30},
        "paper_bgcolor": "rgba(0,0,0,0)",
        "plot_bgcolor": "rgba(0,0,0,0)",
        "font": {"family": "DM Sans, sans-serif", "size": 10, "color": AXIS_TEXT},
        "showlegend": false,
        "hoverlabel": {
            "bgcolor": HOVER_BG,
            "bordercolor": "rgba(255, 255, 255, 0.1)",
            "font": {"color": "#fff", "size": 12}
        },
        "xaxis": {"showgrid": false, "zeroline": false},
        "yaxis": {"showgrid": true, "gridcolor": GRID, "griddash": "dash", "zeroline": false}
    });
    merge_value(base, extra)
}

fn merge_value(mut base: Value, extra: Value) -> Value {
    if let (Some(map), Value::Object(extra)) = (base.as_object_mut(), extra) {
        merge(map, extra);
    }
    base
}

fn merge(base: &mut Map<String, Value>, extra: Map<String, Value>) {
    for (key, value) in extra {
        let incoming = match value {
            Value::Object(incoming) => incoming,
            other => {
                base.insert(key, other);
                continue;
            }
        };
        if let Some(Value::Object(existing)) = base.get_mut(&key) {
            merge(existing, incoming);
            continue;
        }
        base.insert(key, Value::Object(incoming));
    }
}

fn area_trace(x: Vec<String>, y: Vec<f64>, accent: Accent, name: &str) -> Value {
    json!({
        "x": x,
        "y": y,
        "type": "scatter",
        "mode": "lines",
        "fill": "tozeroy",
        "fillcolor": accent.rgba(0.15),
        "line": {"color": accent.hex(), "width": 2, "shape": "spline"},
        "name": name
    })
}

fn months(monthly: &[MonthlyTrend]) -> Vec<String> {
    monthly.iter().map(|m| m.month.clone()).collect()
}

fn accents<'a>(items: impl Iterator<Item = &'a Accent>) -> Vec<&'static str> {
    items.map(|accent| accent.hex()).collect()
}

// ===================== Overview =====================

pub fn gmv_trend(monthly: &[MonthlyTrend]) -> Figure {
    let mut trace = area_trace(
        months(monthly),
        monthly.iter().map(|m| to_f64(m.gmv)).collect(),
        Accent::Gold,
        "GMV",
    );
    trace["text"] = json!(monthly.iter().map(|m| format_currency_exact(m.gmv)).collect::<Vec<_>>());
    trace["hovertemplate"] = json!("%{x}<br>GMV: %{text}<extra></extra>");

    Figure {
        id: "chart-gmv-trend",
        title: "GMV Over Time",
        subtitle: "Monthly trend across all products",
        height: 260,
        data: vec![trace],
        layout: layout(260, json!({"yaxis": {"tickprefix": "$", "tickformat": "~s"}})),
    }
}

fn donut(labels: Vec<String>, values: Vec<f64>, colors: Vec<&'static str>, text: Vec<String>, hole: f64) -> Value {
    json!({
        "type": "pie",
        "labels": labels,
        "values": values,
        "text": text,
        "hole": hole,
        "sort": false,
        "direction": "clockwise",
        "textinfo": "none",
        "marker": {"colors": colors, "line": {"width": 3, "color": "#0a0a0f"}},
        "hovertemplate": "%{label}: %{text}<extra></extra>"
    })
}

pub fn product_mix(products: &[ProductRevenue]) -> Figure {
    let trace = donut(
        products.iter().map(|p| p.name.clone()).collect(),
        products.iter().map(|p| to_f64(p.gmv)).collect(),
        accents(products.iter().map(|p| &p.accent)),
        products.iter().map(|p| format_currency(p.gmv)).collect(),
        0.66,
    );

    Figure {
        id: "chart-product-mix",
        title: "Product Mix",
        subtitle: "Revenue share by vertical",
        height: 180,
        data: vec![trace],
        layout: layout(180, json!({"margin": {"t": 0, "r": 0, "l": 0, "b": 0}})),
    }
}

pub fn segment_bars(segments: &[SegmentAverage]) -> Figure {
    let trace = json!({
        "type": "bar",
        "x": segments.iter().map(|s| s.segment.clone()).collect::<Vec<_>>(),
        "y": segments.iter().map(|s| to_f64(s.avg_gmv)).collect::<Vec<_>>(),
        "text": segments.iter().map(|s| format_currency_exact(s.avg_gmv)).collect::<Vec<_>>(),
        "textposition": "none",
        "marker": {"color": accents(segments.iter().map(|s| &s.accent))},
        "width": 0.5,
        "hovertemplate": "%{x}<br>Avg GMV: %{text}<extra></extra>"
    });

    Figure {
        id: "chart-segments",
        title: "User Segments",
        subtitle: "Avg lifetime GMV by tier",
        height: 180,
        data: vec![trace],
        layout: layout(180, json!({"yaxis": {"tickprefix": "$"}})),
    }
}

pub fn payment_status(statuses: &[StatusShare]) -> Figure {
    let trace = donut(
        statuses.iter().map(|s| s.status.clone()).collect(),
        statuses.iter().map(|s| f64::from(s.pct)).collect(),
        accents(statuses.iter().map(|s| &s.accent)),
        statuses.iter().map(|s| format_percent(s.pct)).collect(),
        0.65,
    );

    Figure {
        id: "chart-payment-status",
        title: "Payment Status",
        subtitle: "Transaction completion rates",
        height: 140,
        data: vec![trace],
        layout: layout(140, json!({"margin": {"t": 0, "r": 0, "l": 0, "b": 0}})),
    }
}

// ===================== Revenue =====================

pub fn revenue_trend(monthly: &[MonthlyTrend]) -> Figure {
    let mut gmv = area_trace(
        months(monthly),
        monthly.iter().map(|m| to_f64(m.gmv)).collect(),
        Accent::Teal,
        "GMV",
    );
    gmv["text"] = json!(monthly.iter().map(|m| format_currency_exact(m.gmv)).collect::<Vec<_>>());
    gmv["hovertemplate"] = json!("GMV: %{text}<extra></extra>");

    let transactions = json!({
        "x": months(monthly),
        "y": monthly.iter().map(|m| m.transactions).collect::<Vec<_>>(),
        "type": "scatter",
        "mode": "lines",
        "yaxis": "y2",
        "line": {"color": Accent::Gold.hex(), "width": 2, "shape": "spline"},
        "name": "Transactions",
        "hovertemplate": "Transactions: %{y:,}<extra></extra>"
    });

    Figure {
        id: "chart-revenue-trend",
        title: "Revenue Trend",
        subtitle: "Monthly GMV and transaction volume",
        height: 320,
        data: vec![gmv, transactions],
        layout: layout(
            320,
            json!({
                "margin": {"r": 50},
                "hovermode": "x unified",
                "yaxis": {"tickprefix": "$", "tickformat": "~s"},
                "yaxis2": {"overlaying": "y", "side": "right", "showgrid": false, "zeroline": false}
            }),
        ),
    }
}

fn horizontal_bars(products: &[ProductRevenue], x: Vec<f64>, text: Vec<String>, opacity: f64, label: &str) -> Value {
    json!({
        "type": "bar",
        "orientation": "h",
        "x": x,
        "y": products.iter().map(|p| p.name.clone()).collect::<Vec<_>>(),
        "text": text,
        "textposition": "none",
        "opacity": opacity,
        "marker": {"color": accents(products.iter().map(|p| &p.accent))},
        "name": label,
        "hovertemplate": format!("%{{y}}<br>{}: %{{text}}<extra></extra>", label)
    })
}

fn horizontal_layout(extra_xaxis: Value) -> Value {
    layout(
        260,
        json!({
            "margin": {"l": 100},
            "xaxis": merge_value(json!({"showgrid": true, "gridcolor": GRID, "griddash": "dash"}), extra_xaxis),
            "yaxis": {"showgrid": false, "autorange": "reversed", "tickfont": {"size": 12, "color": "rgba(255, 255, 255, 0.5)"}}
        }),
    )
}

pub fn product_revenue(products: &[ProductRevenue]) -> Figure {
    let trace = horizontal_bars(
        products,
        products.iter().map(|p| to_f64(p.gmv)).collect(),
        products.iter().map(|p| format_currency(p.gmv)).collect(),
        1.0,
        "GMV",
    );

    Figure {
        id: "chart-product-revenue",
        title: "Product Revenue",
        subtitle: "GMV contribution by product",
        height: 260,
        data: vec![trace],
        layout: horizontal_layout(json!({"tickprefix": "$", "tickformat": "~s"})),
    }
}

pub fn product_volume(products: &[ProductRevenue]) -> Figure {
    let trace = horizontal_bars(
        products,
        products.iter().map(|p| f64::from(p.transactions)).collect(),
        products.iter().map(|p| p.transactions.to_string()).collect(),
        0.7,
        "Transactions",
    );

    Figure {
        id: "chart-product-volume",
        title: "Volume Breakdown",
        subtitle: "Transaction count per product",
        height: 260,
        data: vec![trace],
        layout: horizontal_layout(json!({})),
    }
}

// ===================== Retention =====================

pub fn retention_curves(series: &[RetentionSeries]) -> Figure {
    let data = series
        .iter()
        .map(|s| {
            json!({
                "type": "scatter",
                "mode": "lines+markers",
                "name": s.cohort,
                "x": s.points.iter().map(|p| p.month.clone()).collect::<Vec<_>>(),
                "y": s.points.iter().map(|p| p.value).collect::<Vec<_>>(),
                "line": {"color": s.accent.hex(), "width": 2},
                "marker": {"size": 6, "color": s.accent.hex()},
                "connectgaps": false,
                "hovertemplate": format!("{} %{{x}}<br>Retention: %{{y}}%<extra></extra>", s.cohort)
            })
        })
        .collect();

    Figure {
        id: "chart-retention-curves",
        title: "Retention Over Time",
        subtitle: "Retention curves by cohort",
        height: 300,
        data,
        layout: layout(
            300,
            json!({
                "showlegend": true,
                "legend": {"orientation": "h", "y": -0.2, "font": {"size": 11, "color": "rgba(255, 255, 255, 0.5)"}},
                "xaxis": {"type": "category"},
                "yaxis": {"range": [0, 100], "ticksuffix": "%"}
            }),
        ),
    }
}

// ===================== Activation =====================

pub fn activation_curve(steps: &[ActivationStep]) -> Figure {
    let mut trace = area_trace(
        steps.iter().map(|s| s.day.clone()).collect(),
        steps.iter().map(|s| f64::from(s.pct)).collect(),
        Accent::Violet,
        "Activated",
    );
    trace["mode"] = json!("lines+markers");
    trace["line"]["width"] = json!(2.5);
    trace["marker"] = json!({"size": 8, "color": Accent::Violet.hex()});
    trace["hovertemplate"] = json!("%{x}<br>Activated: %{y}%<extra></extra>");

    Figure {
        id: "chart-activation",
        title: "Time to Activation",
        subtitle: "Cumulative % of users completing first transaction",
        height: 320,
        data: vec![trace],
        layout: layout(
            320,
            json!({
                "xaxis": {"tickfont": {"size": 11, "color": "rgba(255, 255, 255, 0.4)"}},
                "yaxis": {"range": [0, 100], "ticksuffix": "%"}
            }),
        ),
    }
}

/// Every Plotly figure shown on `tab`, in page order.
pub fn panel_figures(tab: Tab, data: &Dataset) -> Vec<Figure> {
    match tab {
        Tab::Overview => vec![
            gmv_trend(&data.monthly),
            product_mix(&data.products),
            segment_bars(&data.segments),
            payment_status(&data.statuses),
        ],
        Tab::Revenue => vec![
            revenue_trend(&data.monthly),
            product_revenue(&data.products),
            product_volume(&data.products),
        ],
        Tab::Retention => vec![retention_curves(&retention_series(&data.cohorts))],
        Tab::Activation => vec![activation_curve(&data.activation)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_figure_ids_are_unique() {
        let data = Dataset::superapp();
        let mut ids: Vec<&str> = Tab::ALL
            .into_iter()
            .flat_map(|tab| panel_figures(tab, &data))
            .map(|figure| figure.id)
            .collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
        assert_eq!(total, 9);
    }

    #[test]
    fn test_gmv_trend_follows_dataset_order() {
        let data = Dataset::superapp();
        let figure = gmv_trend(&data.monthly);
        let trace = &figure.data[0];

        assert_eq!(trace["x"][0], "Jan 24");
        assert_eq!(trace["x"][12], "Jan 25");
        assert_eq!(trace["y"][0], 42500.0);
        assert_eq!(trace["line"]["color"], "#E8B931");
        assert_eq!(figure.layout["height"], 260);
        assert_eq!(figure.layout["paper_bgcolor"], "rgba(0,0,0,0)");
    }

    #[test]
    fn test_product_mix_colors_follow_rows() {
        let data = Dataset::superapp();
        let figure = product_mix(&data.products);
        let trace = &figure.data[0];

        assert_eq!(trace["type"], "pie");
        assert_eq!(trace["labels"], json!(["BNPL", "Food Delivery", "Ride Sharing", "Gaming"]));
        assert_eq!(trace["marker"]["colors"], json!(["#E8B931", "#4ECDC4", "#FF6B6B", "#A78BFA"]));
        assert_eq!(trace["text"][3], "$49K");
    }

    #[test]
    fn test_revenue_trend_uses_secondary_axis() {
        let data = Dataset::superapp();
        let figure = revenue_trend(&data.monthly);

        assert_eq!(figure.data.len(), 2);
        assert_eq!(figure.data[1]["yaxis"], "y2");
        assert_eq!(figure.data[1]["y"][0], 310);
        assert_eq!(figure.layout["yaxis2"]["side"], "right");
        // Overrides merge into the base layout instead of replacing it.
        assert_eq!(figure.layout["margin"]["r"], 50);
        assert_eq!(figure.layout["margin"]["l"], 50);
        assert_eq!(figure.layout["yaxis"]["gridcolor"], GRID);
    }

    #[test]
    fn test_volume_bars_are_dimmed() {
        let data = Dataset::superapp();
        let figure = product_volume(&data.products);

        assert_eq!(figure.data[0]["orientation"], "h");
        assert_eq!(figure.data[0]["opacity"], 0.7);
        assert_eq!(figure.data[0]["x"], json!([2008.0, 1721.0, 1148.0, 861.0]));
    }

    #[test]
    fn test_retention_curves_one_trace_per_cohort() {
        let data = Dataset::superapp();
        let figure = retention_curves(&retention_series(&data.cohorts));

        assert_eq!(figure.data.len(), data.cohorts.len());
        let feb = &figure.data[1];
        assert_eq!(feb["name"], "Feb 24");
        assert_eq!(feb["line"]["color"], "#E8B931");
        assert_eq!(feb["x"], json!(["M0", "M1", "M2", "M3", "M4", "M5"]));
        assert_eq!(feb["y"], json!([100, 69, 55, 46, 39, 33]));
        assert_eq!(figure.layout["yaxis"]["range"], json!([0, 100]));
    }

    #[test]
    fn test_activation_curve_bounds() {
        let data = Dataset::superapp();
        let figure = activation_curve(&data.activation);

        assert_eq!(figure.data[0]["y"][7], 91.0);
        assert_eq!(figure.data[0]["mode"], "lines+markers");
        assert_eq!(figure.layout["yaxis"]["ticksuffix"], "%");
    }

    #[test]
    fn test_panels_map_to_their_tables() {
        let data = Dataset::superapp();
        let ids = |tab| -> Vec<&'static str> {
            panel_figures(tab, &data).into_iter().map(|f| f.id).collect()
        };

        assert_eq!(
            ids(Tab::Overview),
            vec!["chart-gmv-trend", "chart-product-mix", "chart-segments", "chart-payment-status"]
        );
        assert_eq!(
            ids(Tab::Revenue),
            vec!["chart-revenue-trend", "chart-product-revenue", "chart-product-volume"]
        );
        assert_eq!(ids(Tab::Retention), vec!["chart-retention-curves"]);
        assert_eq!(ids(Tab::Activation), vec!["chart-activation"]);
    }
}
