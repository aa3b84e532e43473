use compute::kpi_cards;
use model::KpiSummary;
use yew::prelude::*;

use crate::components::common::cards::MetricCard;

#[derive(Properties, PartialEq)]
pub struct StatsProps {
    pub kpis: KpiSummary,
}

/// Headline KPI row shown above every tab.
#[function_component(Stats)]
pub fn stats(props: &StatsProps) -> Html {
    html! {
        <div class="kpi-row">
            { for kpi_cards(&props.kpis).into_iter().map(|card| html! {
                <MetricCard
                    key={card.label}
                    label={card.label}
                    value={card.value}
                    sub={Some(AttrValue::from(card.caption))}
                    accent={card.accent}
                />
            })}
        </div>
    }
}
