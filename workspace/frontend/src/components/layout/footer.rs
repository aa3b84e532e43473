use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer">
            <span>{"dbt 1.11 · DuckDB · 33 tests passing"}</span>
            <span>{"SuperApp Lifecycle Analytics"}</span>
        </footer>
    }
}
