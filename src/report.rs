use std::fs;
use std::path::Path;

use compute::{format_percent, kpi_cards, panel_figures, Figure, HeatmapGrid};
use minijinja::Environment;
use model::{Dataset, Tab};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, instrument};

const TEMPLATE_NAME: &str = "report.html";
const TEMPLATE: &str = include_str!("../templates/report.html");

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to render report template: {0}")]
    Template(#[from] minijinja::Error),
    #[error("failed to serialize figure '{id}': {source}")]
    Figure {
        id: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write report to {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Serialize)]
struct KpiView {
    label: &'static str,
    value: String,
    sub: String,
    accent: &'static str,
}

#[derive(Debug, Serialize)]
struct MarketBar {
    country: String,
    users: u32,
    share_pct: u8,
}

#[derive(Debug, Serialize)]
struct LegendEntry {
    label: String,
    value: String,
    color: &'static str,
}

#[derive(Debug, Serialize)]
struct FigureView {
    id: &'static str,
    title: &'static str,
    subtitle: &'static str,
    height: u32,
    data: String,
    layout: String,
}

#[derive(Debug, Serialize)]
struct PanelView {
    label: &'static str,
    slug: &'static str,
    figures: Vec<FigureView>,
}

#[derive(Debug, Serialize)]
struct HighlightView {
    label: String,
    value: String,
    caption: String,
    color: &'static str,
}

#[derive(Debug, Serialize)]
struct ReportContext {
    badges: Vec<String>,
    kpis: Vec<KpiView>,
    markets: Vec<MarketBar>,
    product_legend: Vec<LegendEntry>,
    status_legend: Vec<LegendEntry>,
    heatmap: HeatmapGrid,
    highlights: Vec<HighlightView>,
    panels: Vec<PanelView>,
}

/// JSON for an inline `<script>` block. `</` is escaped so a tooltip markup
/// string can never close the script element early.
fn script_json<T: Serialize>(id: &'static str, value: &T) -> Result<String, ReportError> {
    serde_json::to_string(value)
        .map(|json| json.replace("</", "<\\/"))
        .map_err(|source| ReportError::Figure { id, source })
}

fn figure_view(figure: Figure) -> Result<FigureView, ReportError> {
    Ok(FigureView {
        id: figure.id,
        title: figure.title,
        subtitle: figure.subtitle,
        height: figure.height,
        data: script_json(figure.id, &figure.data)?,
        layout: script_json(figure.id, &figure.layout)?,
    })
}

fn kpi_views(data: &Dataset) -> Vec<KpiView> {
    kpi_cards(&data.kpis)
        .into_iter()
        .map(|card| KpiView {
            label: card.label,
            value: card.value,
            sub: card.caption,
            accent: card.accent.hex(),
        })
        .collect()
}

fn build_context(data: &Dataset) -> Result<ReportContext, ReportError> {
    let mut panels = Vec::with_capacity(Tab::ALL.len());
    for tab in Tab::ALL {
        let figures = panel_figures(tab, data)
            .into_iter()
            .map(figure_view)
            .collect::<Result<Vec<_>, _>>()?;
        debug!(tab = %tab, figures = figures.len(), "Prepared panel");
        panels.push(PanelView {
            label: tab.label(),
            slug: tab.slug(),
            figures,
        });
    }

    Ok(ReportContext {
        badges: data.market_badges.clone(),
        kpis: kpi_views(data),
        markets: data
            .countries
            .iter()
            .map(|c| MarketBar {
                country: c.country.clone(),
                users: c.users,
                share_pct: c.share_pct,
            })
            .collect(),
        product_legend: data
            .products
            .iter()
            .map(|p| LegendEntry {
                label: p.name.clone(),
                value: format_percent(p.share_pct),
                color: p.accent.hex(),
            })
            .collect(),
        status_legend: data
            .statuses
            .iter()
            .map(|s| LegendEntry {
                label: s.status.clone(),
                value: format_percent(s.pct),
                color: s.accent.hex(),
            })
            .collect(),
        heatmap: HeatmapGrid::from_cohorts(&data.cohorts),
        highlights: data
            .highlights
            .iter()
            .map(|h| HighlightView {
                label: h.label.clone(),
                value: h.value.clone(),
                caption: h.caption.clone(),
                color: h.accent.hex(),
            })
            .collect(),
        panels,
    })
}

/// Renders the standalone HTML report for `data`.
#[instrument(skip_all)]
pub fn render_report(data: &Dataset) -> Result<String, ReportError> {
    let mut env = Environment::new();
    env.add_template(TEMPLATE_NAME, TEMPLATE)?;
    let context = build_context(data)?;
    let html = env.get_template(TEMPLATE_NAME)?.render(&context)?;
    debug!(bytes = html.len(), "Rendered report");
    Ok(html)
}

/// Renders the report and writes it to `path`, creating parent directories.
#[instrument(skip(data), fields(path = %path.display()))]
pub fn write_report(data: &Dataset, path: &Path) -> Result<(), ReportError> {
    let html = render_report(data)?;
    let io_err = |source| ReportError::Io {
        path: path.display().to_string(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    fs::write(path, html).map_err(io_err)?;

    info!("Report written");
    Ok(())
}
