use model::Accent;
use yew::prelude::*;

/// Inline custom property read by `style.css` for accent-colored details.
pub fn accent_style(accent: Accent) -> String {
    format!("--accent: {};", accent.hex())
}

#[derive(Properties, PartialEq)]
pub struct MetricCardProps {
    pub label: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub sub: Option<AttrValue>,
    #[prop_or(Accent::Gold)]
    pub accent: Accent,
}

/// KPI tile: uppercase label, large monospaced value, optional accent caption.
#[function_component(MetricCard)]
pub fn metric_card(props: &MetricCardProps) -> Html {
    html! {
        <div class="metric-card" style={accent_style(props.accent)}>
            <div class="metric-card-bar"></div>
            <p class="metric-label">{ &props.label }</p>
            <p class="metric-value">{ &props.value }</p>
            if let Some(sub) = &props.sub {
                <p class="metric-sub">{ sub }</p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionTitleProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
}

#[function_component(SectionTitle)]
pub fn section_title(props: &SectionTitleProps) -> Html {
    html! {
        <div class="section-title">
            <h2>{ &props.title }</h2>
            if let Some(subtitle) = &props.subtitle {
                <p>{ subtitle }</p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ChartCardProps {
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ChartCard)]
pub fn chart_card(props: &ChartCardProps) -> Html {
    html! {
        <div class={classes!("chart-card", props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}
