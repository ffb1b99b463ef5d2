//! Intensity Grid Component
//!
//! One row per business unit, one column per period. Cell backgrounds follow
//! the green ramp from [`intensity_color`].

use control_center::{intensity_color, IntensityMatrix};
use leptos::*;

#[component]
pub fn Heatmap(matrix: IntensityMatrix) -> impl IntoView {
    view! {
        <div class="overflow-x-auto">
            <table class="text-xs">
                <thead>
                    <tr>
                        <th class="text-left pr-2 font-medium text-[#555]">"Unit"</th>
                        {matrix
                            .column_labels()
                            .iter()
                            .map(|c| view! { <th class="px-1 font-medium text-[#555]">{c.clone()}</th> })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {matrix
                        .rows()
                        .map(|(label, cells)| view! {
                            <tr>
                                <td class="pr-2 py-1 whitespace-nowrap">{label.to_string()}</td>
                                {cells
                                    .iter()
                                    .map(|&value| view! {
                                        <td class="px-1 py-1">
                                            <div
                                                class="w-10 h-6 rounded flex items-center justify-center"
                                                style=format!("background: {}", intensity_color(value))
                                            >
                                                {format!("{}%", value)}
                                            </div>
                                        </td>
                                    })
                                    .collect_view()}
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}
