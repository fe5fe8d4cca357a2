//! 各页面共用的外框：顶部导航、移动端菜单、用户下拉菜单、深色模式、通知

use std::time::Duration;

use career_saarthi::{NotificationKind, Route};
use leptos::prelude::*;

use crate::portal::use_portal;
use crate::web::router::{RouteLink, use_router};

#[component]
pub fn Toast() -> impl IntoView {
    let portal = use_portal();
    let notification = portal.notification;

    view! {
        <Show when=move || notification.get().is_some()>
            <div class="toast toast-top toast-end z-50">
                <div class=move || {
                    match notification.get().map(|n| n.kind) {
                        Some(NotificationKind::Error) => "alert alert-error shadow-lg",
                        Some(NotificationKind::Info) => "alert alert-info shadow-lg",
                        _ => "alert alert-success shadow-lg",
                    }
                }>
                    <span>{move || notification.get().map(|n| n.message).unwrap_or_default()}</span>
                </div>
            </div>
        </Show>
    }
}

/// 点击后禁用并显示 "Processing..."，1.5 秒后恢复
#[component]
pub fn LoadingButton(#[prop(into)] class: String, children: ChildrenFn) -> impl IntoView {
    let (loading, set_loading) = signal(false);
    let on_click = move |_| {
        set_loading.set(true);
        set_timeout(move || set_loading.set(false), Duration::from_millis(1500));
    };

    view! {
        <button class=class disabled=move || loading.get() on:click=on_click>
            <Show when=move || loading.get() fallback=move || children()>
                <span class="loading loading-spinner loading-sm"></span>
                "Processing..."
            </Show>
        </button>
    }
}

#[component]
pub fn DarkModeToggle() -> impl IntoView {
    let portal = use_portal();
    view! {
        <button
            id="dark-mode-toggle"
            class="btn btn-ghost btn-circle"
            title="Toggle dark mode"
            on:click=move |_| portal.toggle_dark_mode()
        >
            <span class="material-icons">
                {move || if portal.dark_mode.get() { "light_mode" } else { "dark_mode" }}
            </span>
        </button>
    }
}

/// 用户下拉菜单，点击页面其他位置时关闭
#[component]
fn UserMenu() -> impl IntoView {
    let portal = use_portal();
    let (open, set_open) = signal(false);

    let handle = window_event_listener(leptos::ev::click, move |_| set_open.set(false));
    on_cleanup(move || handle.remove());

    let name = move || {
        portal
            .state
            .with(|s| s.user.as_ref().map(|u| u.name.clone()))
            .unwrap_or_else(|| "Account".to_string())
    };

    view! {
        <div class="relative">
            <button
                class="btn btn-ghost gap-2"
                data-dropdown-toggle="user-menu"
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_open.update(|o| *o = !*o);
                }
            >
                <span class="material-icons">"account_circle"</span>
                <span class="hidden md:inline">{name}</span>
            </button>
            <ul
                id="user-menu"
                class=move || {
                    if open.get() {
                        "dropdown-menu menu absolute right-0 mt-2 w-48 rounded-box bg-base-100 shadow z-40"
                    } else {
                        "dropdown-menu hidden"
                    }
                }
            >
                <li>
                    <button id="logoutBtn" on:click=move |_| portal.logout()>
                        <span class="material-icons mr-1">"logout"</span>
                        "Logout"
                    </button>
                </li>
            </ul>
        </div>
    }
}

/// 顶部导航；链接是当前页面同一角色下的页面
#[component]
pub fn PortalNav(route: Route) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let router = use_router();
    let siblings = route.siblings();

    let link_class = move |target: Route| {
        if target == route {
            "btn btn-ghost btn-sm btn-active"
        } else {
            "btn btn-ghost btn-sm"
        }
        .to_string()
    };

    let desktop_links = siblings
        .iter()
        .map(|&target| {
            view! { <RouteLink route=target class=link_class(target)>{target.title()}</RouteLink> }
        })
        .collect_view();

    let mobile_links = siblings
        .iter()
        .map(|&target| {
            view! {
                <li>
                    <a
                        href=target.to_path()
                        data-route=target.symbol()
                        on:click=move |ev| {
                            ev.prevent_default();
                            set_menu_open.set(false);
                            router.follow_link(target.symbol());
                        }
                    >
                        {target.title()}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="navbar bg-base-100 rounded-box shadow-xl">
            <div class="flex-1 gap-2">
                <button
                    id="mobile-menu-button"
                    class="btn btn-ghost btn-circle md:hidden"
                    on:click=move |_| set_menu_open.update(|o| *o = !*o)
                >
                    <span class="material-icons">"menu"</span>
                </button>
                <span class="material-icons text-primary">"school"</span>
                <a class="btn btn-ghost text-xl">"CareerSaarthi"</a>
                <nav class="hidden md:flex gap-1">{desktop_links}</nav>
            </div>
            <div class="flex-none gap-2">
                <DarkModeToggle />
                <UserMenu />
            </div>
        </div>

        <Show when=move || menu_open.get()>
            <div
                id="mobile-menu-overlay"
                class="fixed inset-0 bg-black/40 z-30 md:hidden"
                on:click=move |_| set_menu_open.set(false)
            ></div>
        </Show>
        <ul
            id="mobile-menu"
            class=move || {
                if menu_open.get() {
                    "menu fixed left-0 top-0 h-full w-64 bg-base-100 shadow-xl z-40 md:hidden open"
                } else {
                    "hidden"
                }
            }
        >
            {mobile_links}
        </ul>
    }
}
