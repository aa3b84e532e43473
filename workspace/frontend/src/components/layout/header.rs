use model::Tab;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub badges: Vec<String>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="header">
            <div class="header-text">
                <div class="live">
                    <span class="live-dot"></span>
                    <span class="live-label">{"LIVE · dbt + DuckDB"}</span>
                </div>
                <h1 class="title">{"SuperApp Lifecycle Analytics"}</h1>
                <p class="subtitle">
                    {"Customer lifecycle intelligence across BNPL, food delivery, ride sharing & gaming · MENA region"}
                </p>
            </div>
            <div class="badges">
                { for props.badges.iter().map(|badge| html! {
                    <span key={badge.clone()} class="badge">{ badge }</span>
                })}
            </div>
        </header>
    }
}

#[derive(Properties, PartialEq)]
pub struct TabBarProps {
    pub active: Tab,
    pub on_select: Callback<Tab>,
}

/// One button per tab; the active one gets the `active` class.
#[function_component(TabBar)]
pub fn tab_bar(props: &TabBarProps) -> Html {
    html! {
        <nav class="tab-bar" role="tablist">
            { for Tab::ALL.into_iter().map(|tab| {
                let onclick = props.on_select.reform(move |_: MouseEvent| tab);
                let active = tab == props.active;
                html! {
                    <button
                        key={tab.slug()}
                        id={format!("tab-{}", tab.slug())}
                        role="tab"
                        aria-selected={active.to_string()}
                        class={classes!("tab", active.then_some("active"))}
                        {onclick}
                    >
                        { tab.label() }
                    </button>
                }
            })}
        </nav>
    }
}
