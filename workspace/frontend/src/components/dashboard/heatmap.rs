use compute::HeatmapGrid;
use model::CohortRetention;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RetentionHeatmapProps {
    pub cohorts: Vec<CohortRetention>,
}

/// Cohort × month grid; the cell fill comes from the retention bucket.
#[function_component(RetentionHeatmap)]
pub fn retention_heatmap(props: &RetentionHeatmapProps) -> Html {
    let grid = HeatmapGrid::from_cohorts(&props.cohorts);

    html! {
        <div class="heatmap-scroll">
            <div class="heatmap" style={format!("grid-template-columns: 90px repeat({}, 1fr);", grid.months.len())}>
                <div class="heatmap-corner"></div>
                { for grid.months.iter().map(|month| html! {
                    <div class="heatmap-month">{ month }</div>
                })}
                { for grid.rows.iter().map(|row| html! {
                    <>
                        <div class="heatmap-cohort">{ &row.cohort }</div>
                        { for row.cells.iter().zip(&grid.months).map(|(cell, month)| html! {
                            <div
                                title={format!("{} {}", row.cohort, month)}
                                class={classes!("heatmap-cell", cell.bucket.css_class())}
                                style={format!("background: {}; color: {};", cell.fill, cell.text_color)}
                            >
                                { &cell.text }
                            </div>
                        })}
                    </>
                })}
            </div>
        </div>
    }
}
