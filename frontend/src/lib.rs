//! CareerSaarthi 前端应用
//!
//! 采用 Context-Driven 架构：
//! - `portal`: 视图控制器与 Leptos 信号之间的桥
//! - `web::router`: 路由服务（导航守卫在每次进入页面时执行）
//! - `components`: UI 组件层，只负责把核心库的视图模型画出来

mod api;
mod components {
    pub mod admin;
    pub mod chart;
    pub mod chrome;
    pub mod counselor;
    pub mod login;
    pub mod section;
    pub mod student;
}
mod portal;
pub(crate) mod web;

use career_saarthi::{Route, Surface};
use leptos::prelude::*;

use crate::components::admin::AdminDashboardPage;
use crate::components::chrome::Toast;
use crate::components::counselor::CounselorDashboardPage;
use crate::components::login::LoginPage;
use crate::components::section::{NotFoundPage, SectionPage};
use crate::components::student::StudentApp;
use crate::portal::{PortalContext, install_effects};
use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据页面所属的表面返回对应的视图组件。
fn route_matcher(route: Option<Route>) -> AnyView {
    let Some(route) = route else {
        return view! { <NotFoundPage /> }.into_any();
    };
    match route.surface() {
        Surface::Login => view! { <LoginPage /> }.into_any(),
        Surface::StudentApp => view! { <StudentApp route=route /> }.into_any(),
        Surface::Counselor => view! { <CounselorDashboardPage /> }.into_any(),
        Surface::Admin => view! { <AdminDashboardPage /> }.into_any(),
        Surface::Section => view! { <SectionPage route=route /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建门户上下文（恢复会话、读取配置）
    let portal = PortalContext::new();
    provide_context(portal);
    install_effects(portal);

    // 2. 认证状态信号与会话，注入路由服务
    let is_authenticated = portal.is_authenticated_signal();
    let session = portal.controller().context().session.clone();

    view! {
        <Toast />
        <Router session=session is_authenticated=is_authenticated>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
