//! 没有专门仪表盘的页面：导航外框加标题

use career_saarthi::Route;
use leptos::prelude::*;

use crate::components::chrome::PortalNav;
use crate::web::router::RouteLink;

#[component]
pub fn SectionPage(route: Route) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-7xl mx-auto space-y-8">
                <PortalNav route=route />
                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body">
                        <h1 class="card-title text-2xl">{route.title()}</h1>
                        <p class="text-base-content/70">"This section is coming soon."</p>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="text-center space-y-4">
                <h1 class="text-6xl font-bold text-error">"404"</h1>
                <p class="text-xl">"Page not found"</p>
                <RouteLink route=Route::Login class="btn btn-primary">"Back to sign in"</RouteLink>
            </div>
        </div>
    }
}
