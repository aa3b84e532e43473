use compute::Figure;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use yew::prelude::*;

use crate::components::common::cards::{ChartCard, SectionTitle};
use crate::settings;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly, js_name = newPlot)]
    fn new_plot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PlotConfig {
    responsive: bool,
    display_mode_bar: bool,
}

/// Plain objects instead of ES `Map`s, which Plotly does not read.
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, serde_wasm_bindgen::Error> {
    value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
}

fn draw(div_id: &str, figure: &Figure) -> Result<(), serde_wasm_bindgen::Error> {
    let config = PlotConfig {
        responsive: true,
        display_mode_bar: settings::get_settings().chart_toolbar,
    };
    new_plot(div_id, to_js(&figure.data)?, to_js(&figure.layout)?, to_js(&config)?);
    Ok(())
}

#[derive(Properties, PartialEq)]
pub struct PlotlyChartProps {
    pub figure: Figure,
}

/// Empty container that Plotly draws `figure` into once mounted.
#[function_component(PlotlyChart)]
pub fn plotly_chart(props: &PlotlyChartProps) -> Html {
    let chart_ref = use_node_ref();
    let figure = props.figure.clone();

    use_effect_with((chart_ref.clone(), figure), move |(chart_ref, figure)| {
        if let Some(element) = chart_ref.cast::<Element>() {
            let div_id = element.id();
            if div_id.is_empty() {
                log::warn!("Chart container has no id, skipping '{}'", figure.title);
            } else if let Err(err) = draw(&div_id, figure) {
                log::error!("Failed to render chart '{}': {}", figure.id, err);
            } else {
                log::trace!("Rendered chart '{}'", figure.id);
            }
        }
        || ()
    });

    html! {
        <div
            ref={chart_ref}
            id={props.figure.id}
            class="chart-container"
            style={format!("height: {}px;", props.figure.height)}
        ></div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FigureCardProps {
    pub figure: Figure,
    #[prop_or_default]
    pub children: Children,
}

/// Chart card with the figure's heading, the chart itself and any legend
/// markup passed as children.
#[function_component(FigureCard)]
pub fn figure_card(props: &FigureCardProps) -> Html {
    html! {
        <ChartCard>
            <SectionTitle title={props.figure.title} subtitle={props.figure.subtitle} />
            <PlotlyChart figure={props.figure.clone()} />
            { for props.children.iter() }
        </ChartCard>
    }
}
