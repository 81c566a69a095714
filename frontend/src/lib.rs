pub mod base;
pub mod styles;
pub mod hooks;
pub mod components;
pub mod pages;
pub mod config;
pub mod preload;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{gift_wheel::GiftWheelPage, home::Home};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/wheel")]
    Wheel,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="min-h-screen w-full">
                <Switch<Route> render={switch} />
            </div>
        </BrowserRouter>
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::Wheel => html! { <GiftWheelPage /> },
        Route::NotFound => html! {
            <div class="min-h-screen flex items-center justify-center text-gray-500">
                {"Page not found"}
            </div>
        },
    }
}
