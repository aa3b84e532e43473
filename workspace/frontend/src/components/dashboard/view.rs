use std::rc::Rc;

use model::{Dataset, Tab};
use yew::prelude::*;

use super::panels::TabPanel;
use super::stats::Stats;
use crate::components::layout::footer::Footer;
use crate::components::layout::header::{Header, TabBar};

pub enum TabAction {
    Select(Tab),
}

/// Which tab is showing. Starts on the overview.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardState {
    pub active: Tab,
}

impl Reducible for DashboardState {
    type Action = TabAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            TabAction::Select(tab) if tab == self.active => self,
            TabAction::Select(tab) => {
                log::debug!("Switching tab {} -> {}", self.active, tab);
                Rc::new(Self { active: tab })
            }
        }
    }
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let data = use_memo((), |_| Dataset::superapp());
    let state = use_reducer(DashboardState::default);

    let badges = data.market_badges.clone();
    let kpis = data.kpis.clone();
    let on_select = {
        let state = state.clone();
        Callback::from(move |tab: Tab| state.dispatch(TabAction::Select(tab)))
    };

    html! {
        <div class="dashboard">
            <div class="glow glow-gold"></div>
            <div class="glow glow-teal"></div>
            <div class="container">
                <Header {badges} />
                <Stats {kpis} />
                <TabBar active={state.active} {on_select} />
                <TabPanel tab={state.active} {data} />
                <Footer />
            </div>
        </div>
    }
}
