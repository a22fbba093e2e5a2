use leptos::*;

/// Small pill label.
#[component]
pub fn TagBadge(children: Children) -> impl IntoView {
    view! {
        <span class="tag-badge inline-flex items-center rounded-full border border-emerald-400 bg-emerald-50/80 px-3 py-1 text-[0.8rem] font-medium text-emerald-700">
            {children()}
        </span>
    }
}
