use log::{info, Level};
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod content;
mod effects;
mod components {
    pub mod cursor;
    pub mod icons;
    pub mod magnetic;
    pub mod marquee;
}
mod pages {
    pub mod landing;
}

use components::cursor::CursorOverlay;
use components::magnetic::MagneticButton;
use content::{NAV_LINKS, NOISE_OVERLAY};
use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering landing page");
            html! { <Landing /> }
        }
    }
}

/// Fixed glassy navigation bar. The mobile menu flag is the only transient
/// state in the app: the burger button flips it, nothing else touches it, so
/// anchor clicks inside the dropdown leave it open.
#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    html! {
        <div class="top-nav">
            <div class="nav-shell">
                <div class="nav-bar">
                    <a class="nav-brand" href="#">
                        <span class="brand-mark"></span>
                        <span class="brand-name">{"Studio Nova"}</span>
                    </a>
                    <div class="nav-links">
                        { for NAV_LINKS.iter().map(|(label, href)| html! {
                            <a class="nav-link" href={*href}>{ *label }</a>
                        }) }
                    </div>
                    <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                    <div class="nav-cta">
                        <MagneticButton>
                            <span class="button-label">{"Start a project"}</span>
                            { components::icons::arrow_right() }
                        </MagneticButton>
                    </div>
                </div>
                {
                    if *menu_open {
                        html! {
                            <div class="mobile-menu">
                                { for NAV_LINKS.iter().map(|(label, href)| html! {
                                    <a class="mobile-link" href={*href}>{ *label }</a>
                                }) }
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 40;
                    }

                    .nav-shell {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 1rem 1.5rem;
                    }

                    .nav-bar {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.1);
                        backdrop-filter: blur(24px);
                        padding: 0.5rem 1rem;
                    }

                    .nav-brand {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                    }

                    .brand-mark {
                        width: 2rem;
                        height: 2rem;
                        border-radius: 50%;
                        background: linear-gradient(to top right, #d946ef, #22d3ee);
                    }

                    .brand-name {
                        font-weight: 600;
                        letter-spacing: -0.01em;
                    }

                    .nav-links {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                        color: rgba(255, 255, 255, 0.8);
                    }

                    .nav-link {
                        transition: color 0.2s ease;
                    }

                    .nav-link:hover {
                        color: #ffffff;
                    }

                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 5px;
                        background: none;
                        border: none;
                        padding: 0.5rem;
                    }

                    .burger-menu span {
                        width: 22px;
                        height: 2px;
                        background: rgba(255, 255, 255, 0.8);
                        border-radius: 2px;
                    }

                    .mobile-menu {
                        display: none;
                        margin-top: 0.75rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 1rem;
                        background: rgba(0, 0, 0, 0.4);
                        backdrop-filter: blur(24px);
                        padding: 1rem;
                    }

                    .mobile-link {
                        display: block;
                        padding: 0.5rem 0;
                        color: rgba(255, 255, 255, 0.9);
                    }

                    @media (max-width: 768px) {
                        .nav-links,
                        .nav-cta {
                            display: none;
                        }

                        .burger-menu {
                            display: flex;
                        }

                        .mobile-menu {
                            display: block;
                        }
                    }
                "#}
            </style>
        </div>
    }
}

/// Layered gradient washes behind all content. Purely decorative.
#[function_component(Backdrop)]
fn backdrop() -> Html {
    html! {
        <div class="backdrop" aria-hidden="true">
            <div class="backdrop-wash wash-violet"></div>
            <div class="backdrop-wash wash-cyan"></div>
            <div class="backdrop-wash wash-indigo"></div>
            <div class="backdrop-noise" style={format!("background-image: url({NOISE_OVERLAY})")}></div>
            <style>
                {r#"
                    .backdrop {
                        position: fixed;
                        inset: 0;
                        z-index: -10;
                        pointer-events: none;
                        background: #0a0a0a;
                        overflow: hidden;
                    }

                    .backdrop-wash {
                        position: absolute;
                        border-radius: 50%;
                    }

                    .wash-violet {
                        top: -10rem;
                        left: 50%;
                        transform: translateX(-50%);
                        width: 90vmax;
                        height: 90vmax;
                        background: radial-gradient(circle at center, rgba(168, 85, 247, 0.25), transparent 60%);
                    }

                    .wash-cyan {
                        top: 50%;
                        left: 12%;
                        transform: translateY(-50%);
                        width: 30vmax;
                        height: 30vmax;
                        background: radial-gradient(circle at center, rgba(34, 211, 238, 0.2), transparent 60%);
                        filter: blur(40px);
                    }

                    .wash-indigo {
                        bottom: -10%;
                        right: -5%;
                        width: 40vmax;
                        height: 40vmax;
                        background: radial-gradient(circle at center, rgba(99, 102, 241, 0.2), transparent 60%);
                        filter: blur(64px);
                    }

                    .backdrop-noise {
                        position: absolute;
                        inset: 0;
                        opacity: 0.12;
                    }
                "#}
            </style>
        </div>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Backdrop />
            <CursorOverlay />
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
