//! 门户上下文
//!
//! 持有视图控制器并把它的状态桥接到 Leptos 信号上。
//! 控制器不是 `Send`，放在本地存储的 `StoredValue` 里；信号本身可以自由复制。

use std::rc::Rc;
use std::time::Duration;

use career_saarthi::{
    AppContext, MockBackend, Notification, Notifier, PortalConfig, ViewController, ViewState,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::BrowserApi;
use crate::web::{BrowserStorage, GlooTimer, MetaConfig};

/// 通知写入 toast 信号
struct ToastNotifier {
    set_notification: WriteSignal<Option<Notification>>,
}

impl Notifier for ToastNotifier {
    fn notify(&self, notification: Notification) {
        self.set_notification.set(Some(notification));
    }
}

#[derive(Clone, Copy)]
pub struct PortalContext {
    controller: StoredValue<Rc<ViewController>, LocalStorage>,
    /// 视图状态（只读）
    pub state: ReadSignal<ViewState>,
    pub notification: ReadSignal<Option<Notification>>,
    pub set_notification: WriteSignal<Option<Notification>>,
    pub dark_mode: RwSignal<bool>,
}

impl PortalContext {
    /// 组装应用上下文并恢复上次的会话
    pub fn new() -> Self {
        let (notification, set_notification) = signal(None);

        let config = PortalConfig::from_source(&MetaConfig);
        let timer = Rc::new(GlooTimer);
        let mock = MockBackend::new(timer.clone(), config.api_delay);
        let base_url = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default();

        let app = AppContext::new(
            Rc::new(BrowserStorage),
            Rc::new(BrowserApi::new(mock, base_url)),
            timer,
            Rc::new(ToastNotifier { set_notification }),
            config,
        );
        let dark_mode = RwSignal::new(app.preferences.dark_mode());

        let controller = Rc::new(ViewController::new(app));
        let (state, set_state) = signal(controller.state());
        controller.subscribe(move |s| set_state.set(s.clone()));
        controller.init();
        if let Some(hash) = current_hash().filter(|h| !h.is_empty()) {
            controller.navigate_hash(&hash);
        }

        Self {
            controller: StoredValue::new_local(controller),
            state,
            notification,
            set_notification,
            dark_mode,
        }
    }

    pub fn controller(&self) -> Rc<ViewController> {
        self.controller.get_value()
    }

    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.authenticated))
    }

    pub fn login(&self, email: String, password: String, on_done: impl FnOnce() + 'static) {
        let controller = self.controller();
        spawn_local(async move {
            // 失败已经通过通知展示，这里不再处理
            let _ = controller.login(&email, &password).await;
            on_done();
        });
    }

    pub fn logout(&self) {
        self.controller().logout();
    }

    pub fn toggle_dark_mode(&self) {
        let enabled = self.controller().context().preferences.toggle_dark_mode();
        self.dark_mode.set(enabled);
    }
}

fn current_hash() -> Option<String> {
    web_sys::window()?.location().hash().ok()
}

/// 从 Context 获取门户上下文
pub fn use_portal() -> PortalContext {
    use_context::<PortalContext>().expect("PortalContext should be provided")
}

/// 深色模式同步到 `<html class="dark">`，通知 3 秒后清除
pub fn install_effects(ctx: PortalContext) {
    Effect::new(move |_| {
        let enabled = ctx.dark_mode.get();
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(root) = root {
            let _ = root.class_list().toggle_with_force("dark", enabled);
        }
    });

    Effect::new(move |_| {
        if ctx.notification.get().is_some() {
            set_timeout(
                move || ctx.set_notification.set(None),
                Duration::from_secs(3),
            );
        }
    });

    // hash 变化驱动学生端视图切换
    let controller = ctx.controller;
    let handle = window_event_listener(leptos::ev::hashchange, move |_| {
        let hash = current_hash().unwrap_or_default();
        controller.with_value(|c| c.navigate_hash(&hash));
    });
    on_cleanup(move || handle.remove());
}
