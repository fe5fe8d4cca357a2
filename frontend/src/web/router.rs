//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，所有对 window.history 的操作都集中在此模块。
//! 每次进入页面（首次加载、前进/后退、站内跳转）都先经过导航守卫，
//! 守卫的判断本身在核心库 `guard` 中。

use career_saarthi::guard::{self, GuardDecision};
use career_saarthi::{Route, SessionStore};
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn write_history(path: &str, use_push: bool) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    let result = if use_push {
        history.push_state_with_url(&JsValue::NULL, "", Some(path))
    } else {
        history.replace_state_with_url(&JsValue::NULL, "", Some(path))
    };
    if let Err(e) = result {
        log::warn!("[Router] history update to {path} failed: {e:?}");
    }
}

/// 路由表之外的页面同样需要认证
fn requires_auth(route: Option<Route>) -> bool {
    route.is_none_or(|r| r.requires_auth())
}

/// 路由器服务
///
/// 当前页面为 `None` 表示页面名不在路由表中。
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<Option<Route>>,
    set_route: WriteSignal<Option<Route>>,
    session: StoredValue<SessionStore, LocalStorage>,
    /// 认证状态（注入的信号，实现解耦）
    is_authenticated: Signal<bool>,
}

impl RouterService {
    fn new(session: SessionStore, is_authenticated: Signal<bool>) -> Self {
        let (current_route, set_route) = signal(None);
        let router = Self {
            current_route,
            set_route,
            session: StoredValue::new_local(session),
            is_authenticated,
        };
        // 首次加载同样经过守卫，重定向使用 replaceState
        router.enter_page(&current_path(), false);
        router
    }

    pub fn current_route(&self) -> ReadSignal<Option<Route>> {
        self.current_route
    }

    /// **核心方法：导航与守卫**
    pub fn navigate(&self, route: Route) {
        self.enter_page(&route.to_path(), true);
    }

    /// 处理 `data-route` 链接；路由表里没有的符号不做任何事
    pub fn follow_link(&self, symbol: &str) {
        if let Some(route) = guard::resolve_link(symbol) {
            self.navigate(route);
        }
    }

    fn enter_page(&self, path: &str, use_push: bool) {
        let page = guard::current_page(path);
        let decision = self.session.with_value(|s| guard::evaluate(page, s));

        match decision {
            GuardDecision::Redirect(target) => {
                log::debug!("[Router] {path} -> {target}");
                write_history(&target.to_path(), use_push);
                self.set_route.set(Some(target));
            }
            GuardDecision::Proceed => {
                write_history(path, use_push);
                self.set_route.set(Route::from_destination(page));
            }
        }
    }

    /// 浏览器后退/前进按钮
    fn init_popstate_listener(&self) {
        let router = *self;
        let closure = Closure::<dyn Fn()>::new(move || {
            router.enter_page(&current_path(), false);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 认证状态变化时的自动重定向
    fn setup_auth_redirect(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let session = self.session;
        let is_authenticated = self.is_authenticated;

        Effect::new(move |_| {
            let is_auth = is_authenticated.get();
            let route = current_route.get_untracked();

            if is_auth && route == Some(Route::Login) {
                // 刚登录：按角色进入对应的落地页
                let target = session.with_value(|s| guard::redirect_by_role(s.raw_role().as_deref()));
                if target != Route::Login {
                    log::info!("[Router] logged in, redirecting to {target}");
                    write_history(&target.to_path(), true);
                    set_route.set(Some(target));
                }
            } else if !is_auth && requires_auth(route) {
                log::info!("[Router] logged out, redirecting to login");
                write_history(&Route::Login.to_path(), true);
                set_route.set(Some(Route::Login));
            }
        });
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(session: SessionStore, is_authenticated: Signal<bool>) -> RouterService {
    let router = RouterService::new(session, is_authenticated);

    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
#[component]
pub fn Router(
    session: SessionStore,
    /// 认证状态信号
    is_authenticated: Signal<bool>,
    children: Children,
) -> impl IntoView {
    provide_router(session, is_authenticated);

    children()
}

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件。
#[component]
pub fn RouterOutlet(matcher: fn(Option<Route>) -> AnyView) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}

/// 站内链接，按路由符号跳转
#[component]
pub fn RouteLink(
    route: Route,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();
    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        router.follow_link(route.symbol());
    };

    view! {
        <a href=route.to_path() data-route=route.symbol() class=class on:click=on_click>
            {children()}
        </a>
    }
}
