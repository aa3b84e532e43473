use std::rc::Rc;

use compute::panels::{
    activation_curve, gmv_trend, payment_status, product_mix, product_revenue, product_volume,
    retention_curves, revenue_trend, segment_bars,
};
use compute::{format_percent, retention_series};
use model::{Dataset, Tab};
use yew::prelude::*;

use super::chart::FigureCard;
use super::heatmap::RetentionHeatmap;
use crate::components::common::cards::{accent_style, ChartCard, SectionTitle};

#[derive(Properties, PartialEq)]
pub struct PanelProps {
    pub data: Rc<Dataset>,
}

fn panel_id(tab: Tab) -> String {
    format!("panel-{}", tab.slug())
}

#[function_component(OverviewPanel)]
pub fn overview_panel(props: &PanelProps) -> Html {
    let data = &props.data;

    html! {
        <section class="panel" id={panel_id(Tab::Overview)}>
            <div class="panel-grid grid-main-side">
                <FigureCard figure={gmv_trend(&data.monthly)} />
                <FigureCard figure={product_mix(&data.products)}>
                    <div class="legend-list">
                        { for data.products.iter().map(|p| html! {
                            <div key={p.name.clone()} class="legend-item">
                                <div class="legend-label">
                                    <span class="swatch" style={accent_style(p.accent)}></span>
                                    <span>{ &p.name }</span>
                                </div>
                                <span class="legend-value">{ format_percent(p.share_pct) }</span>
                            </div>
                        })}
                    </div>
                </FigureCard>
            </div>

            <div class="panel-grid grid-thirds">
                <ChartCard>
                    <SectionTitle title="Users by Market" subtitle="Distribution across MENA" />
                    <div class="market-list">
                        { for data.countries.iter().map(|c| html! {
                            <div key={c.country.clone()} class="market">
                                <div class="market-row">
                                    <span class="market-name">{ &c.country }</span>
                                    <span class="market-users">{ c.users }</span>
                                </div>
                                <div class="market-track">
                                    <div class="market-fill" style={format!("width: {}%;", c.share_pct)}></div>
                                </div>
                            </div>
                        })}
                    </div>
                </ChartCard>
                <FigureCard figure={segment_bars(&data.segments)} />
                <FigureCard figure={payment_status(&data.statuses)}>
                    <div class="legend-row">
                        { for data.statuses.iter().map(|s| html! {
                            <div key={s.status.clone()} class="legend-label">
                                <span class="dot" style={accent_style(s.accent)}></span>
                                <span>{ format!("{} {}", s.status, format_percent(s.pct)) }</span>
                            </div>
                        })}
                    </div>
                </FigureCard>
            </div>
        </section>
    }
}

#[function_component(RevenuePanel)]
pub fn revenue_panel(props: &PanelProps) -> Html {
    let data = &props.data;

    html! {
        <section class="panel" id={panel_id(Tab::Revenue)}>
            <FigureCard figure={revenue_trend(&data.monthly)} />
            <div class="panel-grid grid-halves">
                <FigureCard figure={product_revenue(&data.products)} />
                <FigureCard figure={product_volume(&data.products)} />
            </div>
        </section>
    }
}

#[function_component(RetentionPanel)]
pub fn retention_panel(props: &PanelProps) -> Html {
    let data = &props.data;
    // Reshaped on every render; the cohort matrix is small.
    let series = retention_series(&data.cohorts);

    html! {
        <section class="panel" id={panel_id(Tab::Retention)}>
            <ChartCard>
                <SectionTitle
                    title="Cohort Retention Heatmap"
                    subtitle="Percentage of users returning each month after activation"
                />
                <RetentionHeatmap cohorts={data.cohorts.clone()} />
            </ChartCard>
            <FigureCard figure={retention_curves(&series)} />
        </section>
    }
}

#[function_component(ActivationPanel)]
pub fn activation_panel(props: &PanelProps) -> Html {
    let data = &props.data;

    html! {
        <section class="panel" id={panel_id(Tab::Activation)}>
            <FigureCard figure={activation_curve(&data.activation)} />
            <div class="panel-grid grid-thirds">
                { for data.highlights.iter().map(|h| html! {
                    <ChartCard key={h.label.clone()}>
                        <div class="highlight" style={accent_style(h.accent)}>
                            <p class="highlight-label">{ &h.label }</p>
                            <p class="highlight-value">{ &h.value }</p>
                            <p class="highlight-caption">{ &h.caption }</p>
                        </div>
                    </ChartCard>
                })}
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct TabPanelProps {
    pub tab: Tab,
    pub data: Rc<Dataset>,
}

/// Renders exactly the panel belonging to `tab`.
#[function_component(TabPanel)]
pub fn tab_panel(props: &TabPanelProps) -> Html {
    let data = props.data.clone();
    log::trace!("Rendering {} panel", props.tab);

    match props.tab {
        Tab::Overview => html! { <OverviewPanel {data} /> },
        Tab::Revenue => html! { <RevenuePanel {data} /> },
        Tab::Retention => html! { <RetentionPanel {data} /> },
        Tab::Activation => html! { <ActivationPanel {data} /> },
    }
}
