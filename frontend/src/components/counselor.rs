use std::rc::Rc;

use career_saarthi::CancelScope;
use career_saarthi::Route;
use career_saarthi::dashboard::counselor::{
    CounselorDashboardModel, DashboardLoad, DataSource, load_dashboard,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::chart::{DoughnutChart, LineChart};
use crate::components::chrome::PortalNav;
use crate::portal::use_portal;

#[component]
pub fn CounselorDashboardPage() -> impl IntoView {
    let portal = use_portal();
    let (load, set_load) = signal(Option::<DashboardLoad>::None);

    // 离开页面时取消还没返回的请求
    let scope = StoredValue::new_local(Rc::new(CancelScope::new()));
    on_cleanup(move || {
        scope.try_with_value(|s| s.cancel_all());
    });

    let load_data = move || {
        set_load.set(None);
        let ctx = portal.controller().context().clone();
        let scope = scope.get_value();
        spawn_local(async move {
            match load_dashboard(&ctx, &scope).await {
                Ok(result) => set_load.set(Some(result)),
                Err(e) => log::debug!("dashboard load dropped: {e}"),
            }
        });
    };

    // 初始加载
    load_data();

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-7xl mx-auto space-y-8">
                <PortalNav route=Route::CounselorDashboard />
                {move || match load.get() {
                    None => view! {
                        <div class="flex justify-center py-16">
                            <span class="loading loading-spinner loading-lg text-primary"></span>
                        </div>
                    }
                    .into_any(),
                    Some(result) => view! {
                        <FallbackNotice source=result.source.clone() on_retry=load_data />
                        <CounselorDashboard model=CounselorDashboardModel::from_data(&result.data) />
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}

/// 数据来自内置降级数据时显示提示和重试按钮
#[component]
fn FallbackNotice(source: DataSource, on_retry: impl Fn() + Copy + 'static) -> impl IntoView {
    match source {
        DataSource::Live => ().into_any(),
        DataSource::Fallback { reason, retryable } => view! {
            <div role="alert" class="alert alert-warning">
                <span class="material-icons">"cloud_off"</span>
                <span>"Showing sample data: " {reason}</span>
                {retryable.then(|| view! {
                    <button class="btn btn-sm" on:click=move |_| on_retry()>"Retry"</button>
                })}
            </div>
        }
        .into_any(),
    }
}

#[component]
fn CounselorDashboard(model: CounselorDashboardModel) -> impl IntoView {
    let stats = model.stats;

    let activities = model
        .activities
        .into_iter()
        .map(|a| {
            view! {
                <li class="flex items-start gap-3">
                    <span class=format!("material-icons p-2 rounded-full {}", a.tone.badge_classes())>{a.icon}</span>
                    <div>
                        <p class="font-medium">{a.title}</p>
                        <p class="text-sm text-base-content/60">{a.time}</p>
                    </div>
                </li>
            }
        })
        .collect_view();

    let upcoming = model
        .upcoming
        .into_iter()
        .map(|appt| {
            view! {
                <li class="flex items-center gap-3">
                    <img src=appt.avatar alt=appt.student.clone() class="w-10 h-10 rounded-full" />
                    <div class="flex-1">
                        <p class="font-medium">{appt.student}</p>
                        <p class="text-sm text-base-content/60">{appt.kind}</p>
                    </div>
                    <div class="text-right text-sm">
                        <p>{appt.time}</p>
                        <p class="text-base-content/60">{appt.date}</p>
                    </div>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
            <div class="stat">
                <div class="stat-title">"Today's Appointments"</div>
                <div class="stat-value text-primary" data-stat="appointments">{stats.appointments}</div>
            </div>
            <div class="stat">
                <div class="stat-title">"Active Students"</div>
                <div class="stat-value text-success" data-stat="students">{stats.students}</div>
            </div>
            <div class="stat">
                <div class="stat-title">"Rating"</div>
                <div class="stat-value text-secondary" data-stat="rating">{stats.rating}</div>
            </div>
        </div>

        <div class="grid gap-6 md:grid-cols-2">
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <h3 class="card-title">"Appointments"</h3>
                    <LineChart spec=model.appointments_chart />
                </div>
            </div>
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <h3 class="card-title">"Student Progress"</h3>
                    <DoughnutChart spec=model.progress_chart />
                </div>
            </div>
        </div>

        <div class="grid gap-6 md:grid-cols-2">
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <h3 class="card-title">"Recent Activity"</h3>
                    <ul id="recent-activities" class="space-y-4">{activities}</ul>
                </div>
            </div>
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <h3 class="card-title">"Upcoming Appointments"</h3>
                    <ul id="upcoming-appointments" class="space-y-4">{upcoming}</ul>
                </div>
            </div>
        </div>
    }
}
