use leptos::prelude::*;

/// Centered card used by the auth screens.
#[component]
pub fn Card(title: &'static str, description: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="flex min-h-[80vh] items-center justify-center px-6 py-10">
            <div class="w-full max-w-md rounded-xl border border-slate-200 bg-white p-6 shadow-sm">
                <div class="space-y-1.5">
                    <h1 class="text-3xl font-semibold tracking-tight">{title}</h1>
                    <p class="text-sm text-slate-500">{description}</p>
                </div>
                <div class="mt-6">{children()}</div>
            </div>
        </div>
    }
}
