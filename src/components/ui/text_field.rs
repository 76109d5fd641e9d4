//! Labelled input with its inline validation message.

use crate::features::auth::forms::FormField;
use leptos::prelude::*;

#[component]
pub fn TextField(
    field: FormField,
    label: &'static str,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(into)] error: Signal<Option<String>>,
    on_input: impl Fn(String) + 'static,
) -> impl IntoView {
    let id = field.id();

    view! {
        <div class="space-y-2">
            <label class="block text-sm font-medium text-slate-700" for=id>
                {label}
            </label>
            <input
                id=id
                name=id
                type=input_type.unwrap_or("text")
                class="w-full rounded-md border border-slate-300 bg-white px-3 py-2 text-sm focus:border-slate-500 focus:outline-none focus:ring-2 focus:ring-slate-200"
                class:border-red-500=move || error.with(Option::is_some)
                placeholder=placeholder.unwrap_or_default()
                autocomplete=autocomplete.unwrap_or("off")
                aria-invalid=move || error.with(Option::is_some).to_string()
                required
                on:input=move |event| on_input(event_target_value(&event))
            />
            {move || {
                error
                    .get()
                    .map(|message| {
                        view! {
                            <em role="alert" class="block text-right text-xs text-red-600">
                                {message}
                            </em>
                        }
                    })
            }}
        </div>
    }
}
