//! Highlight and key-value lists

use control_center::{HighlightList, KeyValueList};
use leptos::*;

/// Vertical list of label/value/description entries, in input order
#[component]
pub fn HighlightListView(list: HighlightList) -> impl IntoView {
    if list.is_empty() {
        return view! { <div class="text-sm text-[#777]">"No highlights"</div> }.into_view();
    }

    view! {
        <ul class="space-y-2">
            {list
                .items()
                .iter()
                .map(|item| view! {
                    <li class="flex items-start justify-between gap-3 border-b border-[#f0f0f4] pb-2 last:border-0">
                        <div>
                            <div class="text-sm font-medium">{item.label.clone()}</div>
                            <div class="text-xs text-[#666]">{item.description.clone()}</div>
                        </div>
                        <div class="text-sm font-semibold whitespace-nowrap">{item.value.clone()}</div>
                    </li>
                })
                .collect_view()}
        </ul>
    }
    .into_view()
}

#[component]
pub fn KeyValueListView(list: KeyValueList) -> impl IntoView {
    view! {
        <div class="space-y-2 text-sm">
            {list
                .entries()
                .iter()
                .map(|entry| view! {
                    <div class="flex justify-between">
                        <span>{entry.label.clone()}</span>
                        <span class="font-semibold">{entry.value.clone()}</span>
                    </div>
                })
                .collect_view()}
        </div>
    }
}
