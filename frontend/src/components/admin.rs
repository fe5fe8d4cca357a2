use career_saarthi::Route;
use career_saarthi::dashboard::admin::AdminDashboardModel;
use leptos::prelude::*;

use crate::components::chart::{DoughnutChart, LineChart};
use crate::components::chrome::PortalNav;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let model = AdminDashboardModel::default();

    let rows = model
        .recent
        .into_iter()
        .map(|a| {
            view! {
                <tr>
                    <td>
                        <span class=format!("inline-block w-2 h-2 rounded-full mr-2 {}", a.status.dot_class())></span>
                        {a.user}
                    </td>
                    <td>{a.action}</td>
                    <td class="text-base-content/60">{a.time}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-7xl mx-auto space-y-8">
                <PortalNav route=Route::AdminDashboard />

                <div class="grid gap-6 md:grid-cols-2">
                    <div class="card bg-base-100 shadow-xl">
                        <div class="card-body">
                            <h3 class="card-title">"Daily Active Users"</h3>
                            <LineChart spec=model.daily_users />
                        </div>
                    </div>
                    <div class="card bg-base-100 shadow-xl">
                        <div class="card-body">
                            <h3 class="card-title">"User Engagement"</h3>
                            <DoughnutChart spec=model.engagement />
                        </div>
                    </div>
                </div>

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body p-0">
                        <div class="p-6 pb-2">
                            <h3 class="card-title">"Recent Activities"</h3>
                        </div>
                        <div class="overflow-x-auto w-full">
                            <table class="table table-zebra w-full">
                                <thead>
                                    <tr>
                                        <th>"User"</th>
                                        <th>"Action"</th>
                                        <th>"Time"</th>
                                    </tr>
                                </thead>
                                <tbody>{rows}</tbody>
                            </table>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
