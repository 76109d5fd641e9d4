use leptos::prelude::*;

#[component]
pub fn Spinner(#[prop(optional)] label: Option<&'static str>) -> impl IntoView {
    let label = label.unwrap_or("Loading");

    view! {
        <div class="flex items-center justify-center gap-2 text-sm text-slate-500">
            <div
                class="inline-block h-5 w-5 animate-spin rounded-full border-2 border-slate-200 border-t-slate-700"
                role="status"
                aria-live="polite"
                aria-label=label
            ></div>
            <span>{label}</span>
        </div>
    }
}
