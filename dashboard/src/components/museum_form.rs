//! Create / edit form

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use super::ScreenHandle;
use crate::screen::Field;

#[component]
pub fn MuseumFormPanel(screen: ScreenHandle) -> impl IntoView {
    let state = screen.state();

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        screen.run(|s| async move {
            if let Err(err) = s.submit().await {
                log::error!("unhandled error while saving museum: {}", err);
            }
        });
    };

    view! {
        <Show when=move || state.with(|s| s.form.is_visible())>
            <form class="museum-form" on:submit=submit>
                {Field::ALL.into_iter().map(|field| view! {
                    <FormField screen=screen field=field />
                }).collect::<Vec<_>>()}

                <div class="input-group">
                    <Show when=move || state.with(|s| s.form.is_readonly())>
                        <button type="button" on:click=move |_| screen.apply(|s| s.enable_editing())>
                            "Edit"
                        </button>
                    </Show>
                    <button type="submit" disabled=move || state.with(|s| !s.form.is_valid())>
                        {move || if state.with(|s| s.form.id().is_some()) { "Update" } else { "Create" }}
                    </button>
                </div>
            </form>
        </Show>
    }
}

#[component]
fn FormField(screen: ScreenHandle, field: Field) -> impl IntoView {
    let state = screen.state();

    view! {
        <label class="result-label">
            {field.label()}
            <input
                type="text"
                required=true
                prop:value=move || state.with(|s| s.form.value(field).to_string())
                readonly=move || state.with(|s| s.form.is_readonly())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    screen.apply(move |s| s.set_field(field, value));
                }
            />
        </label>
    }
}
