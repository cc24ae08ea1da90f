use log::{error, info};
use stylist::GlobalStyle;
use web_sys::Event;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod contact;
mod content;
mod theme;
mod motion;
mod dom;
mod components {
    pub mod about;
    pub mod contact_form;
    pub mod cta;
    pub mod footer;
    pub mod hero;
    pub mod metrics;
    pub mod services;
    pub mod showcase;
    pub mod whatsapp;
}
mod pages {
    pub mod home;
}

use dom::listeners::{DomHost, ListenerGroup};
use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <main class="not-found">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Home} classes="btn btn-primary">{"Back to home"}</Link<Route>>
                </main>
            }
        },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let listeners = web_sys::window().and_then(|window| {
                let scroll_window = window.clone();
                let mut listeners = ListenerGroup::new(DomHost::new(window));
                let attached = listeners.listen("scroll", Box::new(move |_: Event| {
                    let scroll_y = scroll_window.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll_y > 80.0);
                }));
                match attached {
                    Ok(()) => Some(listeners),
                    Err(err) => {
                        error!("{}", err);
                        None
                    }
                }
            });

            move || drop(listeners)
        }, ());
    }

    let class = if *is_scrolled { "top-nav glass scrolled" } else { "top-nav" };

    html! {
        <nav class={class}>
            <a href="/" class="brand">{content::COMPANY}</a>
            <div class="nav-links">
                <a href="#services">{"Services"}</a>
                <a href="#hardware">{"Hardware"}</a>
                <a href="#about">{"About"}</a>
                <a href="#contact">{"Contact"}</a>
            </div>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 20;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 1.25rem 2rem;
                        border: none;
                        transition: background 0.3s ease, padding 0.3s ease;
                    }
                    .top-nav.scrolled {
                        padding: 0.75rem 2rem;
                        border-bottom: 1px solid rgba(255, 255, 255, 0.08);
                    }
                    .brand {
                        font-weight: 600;
                        letter-spacing: 0.04em;
                        text-decoration: none;
                    }
                    .nav-links {
                        display: flex;
                        gap: 1.5rem;
                        font-size: 0.875rem;
                    }
                    .nav-links a {
                        color: #cbd5e1;
                        text-decoration: none;
                    }
                    .nav-links a:hover {
                        color: var(--blue);
                    }
                    .not-found {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 2rem;
                    }
                "#}
            </style>
        </nav>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(err) = console_log::init_with_level(config::get_log_level()) {
        gloo_console::error!(format!("error initializing log: {}", err));
    }

    if let Err(err) = GlobalStyle::new(theme::global_css()) {
        error!("global style rejected: {}", err);
    }

    info!("Starting SunEdge landing page");
    yew::Renderer::<App>::new().render();
}
