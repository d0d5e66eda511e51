//! City / name filter bar

use leptos::prelude::*;

use super::ScreenHandle;

#[component]
pub fn FilterBar(screen: ScreenHandle) -> impl IntoView {
    let state = screen.state();

    view! {
        <div class="input-group filters">
            <select on:change=move |ev| {
                let city = event_target_value(&ev);
                screen.run(move |s| async move { s.on_city_changed(city).await });
            }>
                <option value="" selected=move || state.with(|s| s.filters.city.is_empty())>
                    "All cities"
                </option>
                {move || state.with(|s| {
                    s.list.city_options().iter().map(|city| {
                        let selected = *city == s.filters.city;
                        view! { <option value=city.clone() selected=selected>{city.clone()}</option> }
                    }).collect::<Vec<_>>()
                })}
            </select>

            <select on:change=move |ev| {
                let name = event_target_value(&ev);
                screen.run(move |s| async move { s.on_name_changed(name).await });
            }>
                <option value="" selected=move || state.with(|s| s.filters.name.is_empty())>
                    "All museums"
                </option>
                {move || state.with(|s| {
                    s.list.name_options().iter().map(|name| {
                        let selected = *name == s.filters.name;
                        view! { <option value=name.clone() selected=selected>{name.clone()}</option> }
                    }).collect::<Vec<_>>()
                })}
            </select>

            <button on:click=move |_| screen.run(|s| async move { s.clear_filters().await })>
                "Clear filters"
            </button>
        </div>
    }
}
