//! Museums page component

use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;

use super::{FilterBar, MuseumFormPanel, MuseumTable};
use crate::api::HttpMuseumApi;
use crate::config::ApiConfig;
use crate::dialogs::BrowserDialogs;
use crate::screen::{MuseumsScreen, ScreenState};

pub type Screen = MuseumsScreen<HttpMuseumApi, BrowserDialogs>;

/// copyable access to the screen for child components
///
/// the screen itself is `!Send`, so it sits in local storage; views read the
/// last published snapshot through `state()`.
#[derive(Clone, Copy)]
pub struct ScreenHandle {
    screen: StoredValue<Rc<Screen>, LocalStorage>,
    state: ReadSignal<ScreenState>,
    set_state: WriteSignal<ScreenState>,
}

impl ScreenHandle {
    fn new(screen: Screen) -> Self {
        let (state, set_state) = signal(screen.snapshot());
        Self {
            screen: StoredValue::new_local(Rc::new(screen)),
            state,
            set_state,
        }
    }

    pub fn state(&self) -> ReadSignal<ScreenState> {
        self.state
    }

    /// synchronous screen change, published immediately
    pub fn apply(&self, f: impl FnOnce(&Screen)) {
        let set_state = self.set_state;
        self.screen.try_with_value(|screen| {
            f(Rc::as_ref(screen));
            set_state.set(screen.snapshot());
        });
    }

    /// asynchronous screen operation, published once it settles
    pub fn run<F, Fut>(&self, op: F)
    where
        F: FnOnce(Rc<Screen>) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        let Some(screen) = self.screen.try_get_value() else {
            return;
        };
        let set_state = self.set_state;
        let task = op(Rc::clone(&screen));
        leptos::task::spawn_local(async move {
            task.await;
            if screen.is_live() {
                set_state.set(screen.snapshot());
            }
        });
    }

    fn destroy(&self) {
        self.screen.try_with_value(|screen| screen.destroy());
    }
}

#[component]
pub fn MuseumsPage() -> impl IntoView {
    let api = HttpMuseumApi::new(ApiConfig::from_build_env());
    let screen = ScreenHandle::new(MuseumsScreen::new(api, BrowserDialogs));
    let state = screen.state();

    // initial unfiltered load
    screen.run(|s| async move { s.init().await });
    on_cleanup(move || screen.destroy());

    view! {
        <div class="card">
            <h2>"🏛️ Museums"</h2>

            <FilterBar screen=screen />

            <button on:click=move |_| screen.apply(|s| s.toggle_form())>
                {move || if state.with(|s| s.form.is_visible()) { "Hide form" } else { "Add museum" }}
            </button>

            <MuseumFormPanel screen=screen />
        </div>

        <div class="card">
            <MuseumTable screen=screen />
        </div>
    }
}
