//! 学生端单页应用：视图由 location hash 决定

use career_saarthi::dashboard::student::{ActionTarget, ProfileModel, StudentDashboardModel};
use career_saarthi::{Route, View};
use leptos::prelude::*;

use crate::components::chrome::{LoadingButton, PortalNav};
use crate::components::login::LoginPage;
use crate::portal::use_portal;
use crate::web::router::use_router;

#[component]
pub fn StudentApp(route: Route) -> impl IntoView {
    let portal = use_portal();
    let view_of = move || portal.state.with(|s| s.view);

    move || match view_of() {
        View::Login => view! { <LoginPage /> }.into_any(),
        View::Dashboard => {
            let model = portal.controller().dashboard_model();
            view! {
                <Shell route=route>
                    {model.map(|m| view! { <StudentDashboard model=m /> })}
                </Shell>
            }
            .into_any()
        }
        View::Profile => {
            let model = portal.controller().profile_model();
            view! {
                <Shell route=route>
                    {model.map(|m| view! { <Profile model=m /> })}
                </Shell>
            }
            .into_any()
        }
    }
}

#[component]
fn Shell(route: Route, children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-7xl mx-auto space-y-8">
                <PortalNav route=route />
                {children()}
            </div>
        </div>
    }
}

#[component]
fn StudentDashboard(model: StudentDashboardModel) -> impl IntoView {
    let router = use_router();
    let portal = use_portal();

    let progress = model
        .progress
        .into_iter()
        .map(|bar| {
            let width = format!("width: {}%", bar.percent);
            view! {
                <div>
                    <div class="flex justify-between text-sm mb-1">
                        <span>{bar.label}</span>
                        <span>{bar.caption}</span>
                    </div>
                    <div class="w-full bg-base-300 rounded-full h-2">
                        <div class=format!("{} h-2 rounded-full", bar.tone.fill_class()) style=width></div>
                    </div>
                </div>
            }
        })
        .collect_view();

    let deadlines = model
        .deadlines
        .into_iter()
        .map(|d| {
            view! {
                <li class="flex items-center gap-3">
                    <span class=format!("material-icons p-2 rounded-lg {}", d.tone.badge_classes())>{d.icon}</span>
                    <div class="flex-1">
                        <p class="font-medium">{d.title}</p>
                        <p class="text-sm text-base-content/60">{d.due}</p>
                    </div>
                    <span class="text-sm text-base-content/60">{d.date}</span>
                </li>
            }
        })
        .collect_view();

    let actions = model
        .actions
        .into_iter()
        .map(|action| {
            let target = action.target;
            let on_click = move |_| match target {
                ActionTarget::View(view) => {
                    portal.controller().navigate(view);
                    set_hash(view);
                }
                ActionTarget::Page(route) => router.navigate(route),
                ActionTarget::Nowhere => {}
            };
            view! {
                <button class="btn btn-outline h-auto py-4 flex-col gap-2" on:click=on_click>
                    <span class=format!("material-icons {}", action.tone.text_class())>{action.icon}</span>
                    <span>{action.label}</span>
                </button>
            }
        })
        .collect_view();

    view! {
        <h1 class="text-2xl font-bold">{model.greeting}</h1>
        <div class="grid gap-6 md:grid-cols-2">
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body space-y-4">
                    <h3 class="card-title">"Your Progress"</h3>
                    {progress}
                </div>
            </div>
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <h3 class="card-title">"Upcoming Deadlines"</h3>
                    <ul class="space-y-3">{deadlines}</ul>
                </div>
            </div>
        </div>
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <h3 class="card-title">"Quick Actions"</h3>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-4">{actions}</div>
            </div>
        </div>
    }
}

#[component]
fn Profile(model: ProfileModel) -> impl IntoView {
    let portal = use_portal();
    let back = model.back_to;
    let on_back = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        portal.controller().navigate(back);
        set_hash(back);
    };

    let fields = model
        .fields
        .into_iter()
        .map(|f| {
            view! {
                <div class="form-control">
                    <label class="label">
                        <span class="label-text">{f.label}</span>
                    </label>
                    <input
                        type=f.input_type
                        class="input input-bordered"
                        prop:value=f.value
                        readonly=f.read_only
                    />
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <div class="flex items-center gap-4 mb-4">
                    <span class="material-icons text-5xl text-primary">"account_circle"</span>
                    <div>
                        <h2 class="text-xl font-bold">{model.name}</h2>
                        <p class="text-base-content/60">{model.email}</p>
                        <span class="badge badge-primary mt-1">{model.role_label}</span>
                    </div>
                </div>
                <div class="grid gap-4 md:grid-cols-2">{fields}</div>
                <div class="card-actions justify-end mt-6">
                    <button class="btn btn-ghost">"Cancel"</button>
                    <LoadingButton class="btn btn-primary">"Save Changes"</LoadingButton>
                </div>
            </div>
        </div>
        <div class="text-center">
            <a href=back.hash() class="link link-primary" on:click=on_back>
                "← Back to Dashboard"
            </a>
        </div>
    }
}

fn set_hash(view: View) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_hash(&view.hash());
    }
}
