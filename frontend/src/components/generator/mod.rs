//! Dataset generator: root module wiring the Yew `Component` implementation
//! with submodules for the form controller, update logic, view rendering and helpers.
//!
//! Responsibilities
//! - Re-export the component so `app.rs` can mount it.
//! - Provide the `Component` implementation that delegates to `update::update` and `view::view`.
//! - Focus the description field on first render and keep the row-count select in step with the form.

use yew::prelude::*;

mod error;
mod form;
mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::GeneratorProps;
pub use state::GeneratorComponent;

impl Component for GeneratorComponent {
    type Message = Msg;
    type Properties = GeneratorProps;

    fn create(_ctx: &Context<Self>) -> Self {
        GeneratorComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render {
            self.focus_description();
        }
        self.sync_row_count();
    }
}
