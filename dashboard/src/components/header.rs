//! Header component

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div>
                <h1>"Museum Admin"</h1>
                <p class="subtitle">"Museums and their exhibitions"</p>
            </div>
            <span class="badge">"Admin"</span>
        </header>
    }
}
