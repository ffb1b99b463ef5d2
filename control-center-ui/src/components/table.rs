//! Table Component

use control_center::Table;
use leptos::*;

/// Header row plus body rows, cells rendered as given
#[component]
pub fn DataTable(table: Table) -> impl IntoView {
    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full text-sm">
                <thead>
                    <tr class="text-left text-[#555]">
                        {table
                            .headers()
                            .iter()
                            .map(|h| view! { <th class="py-2 pr-4 font-medium">{h.clone()}</th> })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {table
                        .rows()
                        .iter()
                        .map(|row| view! {
                            <tr class="border-t border-[#f0f0f4]">
                                {row
                                    .iter()
                                    .map(|cell| view! { <td class="py-2 pr-4">{cell.clone()}</td> })
                                    .collect_view()}
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}
