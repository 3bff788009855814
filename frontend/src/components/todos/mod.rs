//! Todo list page: root module wiring the Yew `Component` implementation with
//! submodules for state, messages, update logic, view rendering, API calls and helpers.
//!
//! On first render the list is fetched sorted by creation date.

use common::model::todo::SortKey;
use yew::prelude::*;

mod api;
mod helpers;
mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::TodoListComponent;

impl Component for TodoListComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        TodoListComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            ctx.link().send_message(Msg::Load(SortKey::CreatedAt));
        }
    }
}
