//! CMS-backed variant of the studio page. Content comes from a Strapi
//! instance on mount; the page sits in a loading state until the attempt
//! settles, and a retry control restarts the whole attempt after a total
//! failure.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use salma_site_core::strapi::{load_site, LoadState, StrapiConfig};
use salma_site_core::ui;

#[function_component(App)]
fn app() -> Html {
    let state = use_state(|| LoadState::Loading);
    let attempt = use_state(|| 0u32);

    // One load per attempt. The teardown flag keeps a late completion from
    // writing into a view that was already torn down or superseded.
    {
        let state = state.clone();
        use_effect_with(*attempt, move |_| {
            let cancelled = Rc::new(Cell::new(false));
            let flag = cancelled.clone();

            state.set(LoadState::Loading);
            spawn_local(async move {
                let config = StrapiConfig::from_build_env();
                let settled = load_site(&config).await;
                if !flag.get() {
                    state.set(settled);
                }
            });

            move || cancelled.set(true)
        });
    }

    let on_retry = {
        let attempt = attempt.clone();
        Callback::from(move |_e: MouseEvent| attempt.set(*attempt + 1))
    };

    match &*state {
        LoadState::Loading => ui::loading_view(),
        LoadState::Failed(message) => ui::failure_view(message, on_retry),
        LoadState::Ready(view) => ui::page(view),
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
