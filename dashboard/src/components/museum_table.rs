//! Museum list table

use leptos::prelude::*;
use museum_shared::Museum;

use super::ScreenHandle;

#[component]
pub fn MuseumTable(screen: ScreenHandle) -> impl IntoView {
    let state = screen.state();

    view! {
        <Show
            when=move || state.with(|s| !s.list.records().is_empty())
            fallback=|| view! { <p>"No museums found."</p> }
        >
            <table>
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"City"</th>
                        <th>"Zip"</th>
                        <th>"Address"</th>
                        <th>"Opening hours"</th>
                        <th>"Exhibitions"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || state.with(|s| s.list.records().to_vec()).into_iter().map(|museum| {
                        view! { <MuseumRow screen=screen museum=museum /> }
                    }).collect::<Vec<_>>()}
                </tbody>
            </table>
        </Show>
    }
}

#[component]
fn MuseumRow(screen: ScreenHandle, museum: Museum) -> impl IntoView {
    let id = museum.id;
    let name = museum.name.clone();
    let exhibitions = museum.exhibitions.len();
    let edited = museum.clone();

    view! {
        <tr title=museum.description>
            <td>{museum.name}</td>
            <td>{museum.city}</td>
            <td>{museum.zip}</td>
            <td>{museum.address}</td>
            <td>{museum.opening_hours}</td>
            <td>{exhibitions}</td>
            <td>
                <button on:click=move |_| screen.apply(|s| s.begin_edit(&edited))>"Edit"</button>
                <button class="danger" on:click=move |_| {
                    let name = name.clone();
                    screen.run(move |s| async move { s.request_delete(id, &name).await });
                }>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
