//! Application chrome: role-aware navigation bar around the routed page

use crate::app::Route;
use becas_frontend_common::use_session;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let ctx = use_session();
    let current = use_route::<Route>();

    let on_logout = {
        let ctx = ctx.clone();
        Callback::from(move |_| ctx.logout())
    };

    let nav = match &ctx.user {
        Some(user) => html! {
            <nav class="bg-blue-900 text-white">
                <div class="max-w-7xl mx-auto px-4 flex flex-wrap items-center gap-4 h-14">
                    <span class="font-bold">{"Becas"}</span>
                    {for Route::MENU.iter().filter(|route| route.visible_to(user.role)).map(|route| {
                        let active = current == Some(*route);
                        let class = if active { "font-semibold underline" } else { "opacity-80 hover:opacity-100" };
                        html! {
                            <Link<Route> to={*route} classes={classes!(class)}>{route.title()}</Link<Route>>
                        }
                    })}
                    <span class="ml-auto text-sm">{user.name.clone()}</span>
                    <button onclick={on_logout} class="text-sm border border-white/50 rounded px-2 py-1">
                        {"Cerrar sesión"}
                    </button>
                </div>
            </nav>
        },
        None => html! {},
    };

    html! {
        <div class="min-h-screen bg-gray-50">
            {nav}
            <main class="max-w-7xl mx-auto px-4 py-6">
                {props.children.clone()}
            </main>
        </div>
    }
}
