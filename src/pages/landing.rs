use gloo_timers::callback::Timeout;
use web_sys::js_sys;
use yew::prelude::*;

use crate::components::icons;
use crate::components::magnetic::MagneticButton;
use crate::components::marquee::Marquee;
use crate::content::{FEATURES, HERO_IMAGE, LOGOS, SOCIAL_LINKS, WORK_ITEMS};
use crate::effects::{parallax_offset, parallax_scale, use_reveal, use_scroll_progress};

fn feature_icon(key: &str) -> Html {
    match key {
        "sparkles" => icons::sparkles(),
        "zap" => icons::zap(),
        "star" => icons::star(),
        _ => Html::default(),
    }
}

fn social_icon(name: &str) -> Html {
    match name {
        "Instagram" => icons::instagram(),
        "Twitter" => icons::twitter(),
        "LinkedIn" => icons::linkedin(),
        _ => Html::default(),
    }
}

/// Hero banner. The decorative blob drifts and grows with overall scroll
/// progress; the showcase card zooms to rest once after first paint.
#[function_component(Hero)]
fn hero() -> Html {
    let progress = use_scroll_progress();
    let card_ref = use_reveal();
    let settled = use_state(|| false);

    {
        let settled = settled.clone();
        use_effect_with_deps(
            move |_| {
                // Flip the class one tick after mount so the zoom transition
                // starts from the rendered 1.12 scale.
                let timeout = Timeout::new(80, move || settled.set(true));
                timeout.forget();
                || ()
            },
            (),
        );
    }

    let blob_style = format!(
        "transform: translateY({}px) scale({})",
        parallax_offset(progress),
        parallax_scale(progress)
    );
    let image_class = if *settled {
        "showcase-image settled"
    } else {
        "showcase-image"
    };

    html! {
        <section class="hero">
            <div class="hero-blob-layer" style={blob_style} aria-hidden="true">
                <div class="hero-blob"></div>
            </div>
            <div class="hero-content">
                <div class="hero-grid">
                    <div class="hero-copy">
                        <div class="hero-badge">
                            { icons::sparkles() }
                            <span>{"Design that feels alive"}</span>
                        </div>
                        <h1 class="hero-title">
                            {"Digital experiences for brands that dare to stand out"}
                        </h1>
                        <p class="hero-subtitle">
                            {"We craft playful, high-performance websites blending motion, art direction and code. Built to win hearts and awwwards."}
                        </p>
                        <div class="hero-cta-row">
                            <MagneticButton>
                                { icons::play() }
                                <span class="button-label">{"See showreel"}</span>
                            </MagneticButton>
                            <a href="#work" class="arrow-link">
                                <span>{"Explore works"}</span>
                                { icons::arrow_right() }
                            </a>
                        </div>
                        <div class="hero-trust">
                            <div class="hero-stars">
                                { for (0..5).map(|_| icons::star_filled()) }
                            </div>
                            <span>{"Trusted by 120+ bold brands"}</span>
                        </div>
                    </div>
                    <div class="hero-visual">
                        <div ref={card_ref} class="showcase-card reveal">
                            <div class="showcase-frame">
                                <img class={image_class} src={HERO_IMAGE} alt="Showcase of interactive work" />
                                <div class="showcase-tint"></div>
                                <div class="showcase-caption">
                                    <div class="caption-left">
                                        <span class="caption-mark"></span>
                                        <div>
                                            <p class="caption-title">{"Nova Playgrounds"}</p>
                                            <p class="caption-sub">{"Interactive microsite"}</p>
                                        </div>
                                    </div>
                                    <div class="caption-right">
                                        { icons::zap() }
                                        <span>{"WebGL • Motion"}</span>
                                    </div>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Logos)]
fn logos() -> Html {
    html! {
        <div class="logos">
            <p class="logos-label">{"Teams that trust our craft"}</p>
            <div class="logos-grid">
                { for LOGOS.iter().map(|(name, src)| html! {
                    <img class="logo-image" src={*src} alt={*name} loading="lazy" />
                }) }
            </div>
        </div>
    }
}

#[function_component(AboutStrip)]
fn about_strip() -> Html {
    let strip_ref = use_reveal();

    html! {
        <section id="about" class="about-strip">
            <div ref={strip_ref} class="about-grid reveal">
                { for FEATURES.iter().map(|(icon, title, blurb)| html! {
                    <div class="feature-card">
                        <div class="feature-chip">
                            { feature_icon(icon) }
                            <span>{ *title }</span>
                        </div>
                        <p class="feature-blurb">{ *blurb }</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct WorkCardProps {
    title: &'static str,
    tag: &'static str,
    image: &'static str,
}

#[function_component(WorkCard)]
fn work_card(props: &WorkCardProps) -> Html {
    let card_ref = use_reveal();

    html! {
        <a ref={card_ref} href="#" class="work-card reveal">
            <div class="work-media">
                <img class="work-image" src={props.image} alt={props.title} loading="lazy" />
                <div class="work-shade"></div>
                <span class="work-tag">{ props.tag }</span>
            </div>
            <div class="work-meta">
                <div>
                    <h3 class="work-title">{ props.title }</h3>
                    <p class="work-sub">{"Case study"}</p>
                </div>
                <span class="work-arrow">{ icons::arrow_right() }</span>
            </div>
        </a>
    }
}

#[function_component(Works)]
fn works() -> Html {
    let head_ref = use_reveal();

    html! {
        <section id="work" class="works">
            <div class="works-shell">
                <div ref={head_ref} class="works-head reveal">
                    <div>
                        <h2 class="section-title">{"Selected Works"}</h2>
                        <p class="section-sub">{"A taste of playful interfaces and bold identities."}</p>
                    </div>
                    <a class="arrow-link works-all" href="#">
                        <span>{"View all"}</span>
                        { icons::arrow_right() }
                    </a>
                </div>
                <div class="works-grid">
                    { for WORK_ITEMS.iter().map(|(title, tag, image)| html! {
                        <WorkCard title={*title} tag={*tag} image={*image} />
                    }) }
                    <div class="partner-panel">
                        <div>
                            <div class="panel-chip">
                                { icons::rocket() }
                                <span>{"Open for 2025"}</span>
                            </div>
                            <h3 class="panel-title">{"We partner with brave teams"}</h3>
                            <p class="panel-sub">{"Tell us about your wildest idea — we will make it tangible."}</p>
                        </div>
                        <MagneticButton>
                            <span class="button-label">{"Start a project"}</span>
                            { icons::arrow_right() }
                        </MagneticButton>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(CallToAction)]
fn call_to_action() -> Html {
    let frame_ref = use_reveal();

    html! {
        <section id="contact" class="cta">
            <div class="cta-shell">
                <div ref={frame_ref} class="cta-frame reveal">
                    <div class="cta-card">
                        <p class="cta-title">{"Ready to create something unforgettable?"}</p>
                        <p class="cta-sub">{"We blend motion, narrative and engineering into living brands."}</p>
                        <div class="cta-actions">
                            <MagneticButton>
                                <span class="button-label">{"Book discovery call"}</span>
                                { icons::arrow_right() }
                            </MagneticButton>
                            <a class="quiet-link" href="#work">{"See case studies"}</a>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <footer class="footer">
            <div class="footer-shell">
                <div class="footer-row">
                    <div class="footer-brand">
                        <span class="brand-mark"></span>
                        <span>{"Studio Nova"}</span>
                    </div>
                    <div class="footer-social">
                        { for SOCIAL_LINKS.iter().map(|(name, href)| html! {
                            <a class="social-link" href={*href} aria-label={*name}>
                                { social_icon(name) }
                            </a>
                        }) }
                    </div>
                </div>
                <p class="footer-note">{ format!("© {year} Studio Nova. Crafted with love and motion.") }</p>
            </div>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <main>
                <Hero />
                <Marquee />
                <Logos />
                <AboutStrip />
                <Works />
                <CallToAction />
            </main>
            <Footer />
            <style>
                {r#"
                    .hero {
                        position: relative;
                        display: flex;
                        align-items: center;
                        min-height: 100vh;
                        overflow: hidden;
                    }

                    .hero-blob-layer {
                        position: absolute;
                        inset: 0;
                        z-index: 0;
                        will-change: transform;
                    }

                    .hero-blob {
                        position: absolute;
                        top: -5rem;
                        right: -12rem;
                        width: 56rem;
                        height: 56rem;
                        max-width: 90vw;
                        background: linear-gradient(135deg, rgba(34, 211, 238, 0.7), rgba(167, 139, 250, 0.7));
                        border-radius: 42% 58% 63% 37% / 45% 37% 63% 55%;
                        filter: blur(60px);
                        opacity: 0.4;
                    }

                    .hero-content {
                        position: relative;
                        z-index: 10;
                        width: 100%;
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 7rem 1.5rem 0;
                    }

                    .hero-grid {
                        display: grid;
                        align-items: center;
                        gap: 2.5rem;
                    }

                    @media (min-width: 1024px) {
                        .hero-grid {
                            grid-template-columns: 1fr 1fr;
                        }
                    }

                    .hero-badge {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        margin-bottom: 1.5rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.1);
                        backdrop-filter: blur(24px);
                        padding: 0.25rem 0.75rem;
                        font-size: 0.75rem;
                        color: rgba(255, 255, 255, 0.8);
                    }

                    .hero-badge .icon {
                        width: 1rem;
                        height: 1rem;
                        color: #67e8f9;
                    }

                    .hero-title {
                        font-size: clamp(3rem, 6vw, 4.5rem);
                        font-weight: 900;
                        letter-spacing: -0.02em;
                        line-height: 1.05;
                        text-wrap: balance;
                    }

                    .hero-subtitle {
                        margin-top: 1.5rem;
                        max-width: 36rem;
                        color: rgba(255, 255, 255, 0.7);
                        line-height: 1.6;
                    }

                    .hero-cta-row {
                        margin-top: 2rem;
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        gap: 1rem;
                    }

                    .hero-trust {
                        margin-top: 2.5rem;
                        display: flex;
                        align-items: center;
                        gap: 1.5rem;
                        color: rgba(255, 255, 255, 0.7);
                    }

                    .hero-stars {
                        display: flex;
                        gap: 0.25rem;
                    }

                    .hero-stars .icon {
                        width: 1rem;
                        height: 1rem;
                        color: #facc15;
                    }

                    .showcase-card {
                        position: relative;
                        aspect-ratio: 4 / 5;
                        width: 100%;
                        overflow: hidden;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 2rem;
                        background: linear-gradient(to bottom right, rgba(255, 255, 255, 0.1), rgba(255, 255, 255, 0.05));
                        padding: 0.5rem;
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
                        backdrop-filter: blur(24px);
                    }

                    .showcase-frame {
                        position: relative;
                        height: 100%;
                        overflow: hidden;
                        border-radius: 1.6rem;
                    }

                    .showcase-image {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transform: scale(1.12);
                        transition: transform 1.8s ease-out;
                    }

                    .showcase-image.settled {
                        transform: scale(1);
                    }

                    .showcase-tint {
                        position: absolute;
                        inset: 0;
                        pointer-events: none;
                        background: linear-gradient(120deg, rgba(34, 211, 238, 0.25), transparent 30%, rgba(168, 85, 247, 0.25));
                    }

                    .showcase-caption {
                        position: absolute;
                        bottom: 1rem;
                        left: 1rem;
                        right: 1rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        border-radius: 0.75rem;
                        background: rgba(0, 0, 0, 0.4);
                        backdrop-filter: blur(8px);
                        padding: 0.75rem;
                    }

                    .caption-left {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                    }

                    .caption-mark {
                        width: 2rem;
                        height: 2rem;
                        border-radius: 50%;
                        background: linear-gradient(to top right, #d946ef, #22d3ee);
                    }

                    .caption-title {
                        font-size: 0.875rem;
                        font-weight: 500;
                    }

                    .caption-sub {
                        font-size: 0.75rem;
                        color: rgba(255, 255, 255, 0.7);
                    }

                    .caption-right {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        font-size: 0.75rem;
                    }

                    .caption-right .icon {
                        width: 1rem;
                        height: 1rem;
                        color: #67e8f9;
                    }

                    .arrow-link {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        color: rgba(255, 255, 255, 0.8);
                        transition: color 0.2s ease;
                    }

                    .arrow-link:hover {
                        color: #ffffff;
                    }

                    .arrow-link .icon {
                        width: 1rem;
                        height: 1rem;
                        transition: transform 0.2s ease;
                    }

                    .arrow-link:hover .icon {
                        transform: translateX(4px);
                    }

                    .logos {
                        padding: 4rem 0;
                    }

                    .logos-label {
                        margin-bottom: 1.5rem;
                        text-align: center;
                        text-transform: uppercase;
                        letter-spacing: 0.2em;
                        font-size: 0.75rem;
                        color: rgba(255, 255, 255, 0.5);
                    }

                    .logos-grid {
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 0 1rem;
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        place-items: center;
                        gap: 2.5rem;
                    }

                    @media (min-width: 640px) {
                        .logos-grid {
                            grid-template-columns: repeat(3, 1fr);
                        }
                    }

                    @media (min-width: 768px) {
                        .logos-grid {
                            grid-template-columns: repeat(5, 1fr);
                        }
                    }

                    .logo-image {
                        height: 2rem;
                        width: auto;
                        opacity: 0.6;
                        filter: invert(1);
                    }

                    .about-strip {
                        padding: 2rem 0;
                    }

                    .about-grid {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        display: grid;
                        gap: 1rem;
                    }

                    @media (min-width: 768px) {
                        .about-grid {
                            grid-template-columns: repeat(3, 1fr);
                        }
                    }

                    .feature-card {
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 1rem;
                        background: rgba(255, 255, 255, 0.05);
                        backdrop-filter: blur(8px);
                        padding: 1.5rem;
                    }

                    .feature-chip {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        margin-bottom: 0.75rem;
                        border: 1px solid rgba(255, 255, 255, 0.15);
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.1);
                        padding: 0.25rem 0.75rem;
                        font-size: 0.75rem;
                        color: rgba(255, 255, 255, 0.7);
                    }

                    .feature-chip .icon {
                        width: 1rem;
                        height: 1rem;
                    }

                    .feature-blurb {
                        color: rgba(255, 255, 255, 0.8);
                    }

                    .works {
                        position: relative;
                        padding: 6rem 0;
                    }

                    .works-shell {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }

                    .works-head {
                        display: flex;
                        align-items: flex-end;
                        justify-content: space-between;
                        margin-bottom: 2.5rem;
                    }

                    .section-title {
                        font-size: clamp(1.875rem, 4vw, 3rem);
                        font-weight: 800;
                        letter-spacing: -0.02em;
                    }

                    .section-sub {
                        margin-top: 0.5rem;
                        color: rgba(255, 255, 255, 0.6);
                    }

                    @media (max-width: 640px) {
                        .works-all {
                            display: none;
                        }
                    }

                    .works-grid {
                        display: grid;
                        gap: 1.5rem;
                    }

                    @media (min-width: 640px) {
                        .works-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }

                    @media (min-width: 1024px) {
                        .works-grid {
                            grid-template-columns: repeat(3, 1fr);
                        }
                    }

                    .work-card {
                        position: relative;
                        display: block;
                        overflow: hidden;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 1.5rem;
                        background: rgba(255, 255, 255, 0.05);
                        transition: transform 0.3s ease;
                    }

                    .work-card:hover {
                        transform: translateY(-6px);
                    }

                    .work-media {
                        position: relative;
                        aspect-ratio: 16 / 10;
                        overflow: hidden;
                    }

                    .work-image {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.7s ease;
                    }

                    .work-card:hover .work-image {
                        transform: scale(1.1);
                    }

                    .work-shade {
                        position: absolute;
                        inset: 0;
                        pointer-events: none;
                        background: linear-gradient(to top, rgba(0, 0, 0, 0.7), rgba(0, 0, 0, 0.3), transparent);
                        opacity: 0.8;
                    }

                    .work-tag {
                        position: absolute;
                        left: 1rem;
                        top: 1rem;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        border-radius: 9999px;
                        background: rgba(0, 0, 0, 0.4);
                        backdrop-filter: blur(8px);
                        padding: 0.25rem 0.75rem;
                        font-size: 0.75rem;
                        color: rgba(255, 255, 255, 0.8);
                    }

                    .work-meta {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 1.25rem;
                    }

                    .work-title {
                        font-weight: 600;
                        letter-spacing: -0.01em;
                    }

                    .work-sub {
                        font-size: 0.75rem;
                        color: rgba(255, 255, 255, 0.6);
                    }

                    .work-arrow {
                        display: inline-flex;
                        border: 1px solid rgba(255, 255, 255, 0.15);
                        border-radius: 50%;
                        background: rgba(255, 255, 255, 0.1);
                        padding: 0.5rem;
                        transform: rotate(-45deg);
                        transition: transform 0.3s ease;
                    }

                    .work-card:hover .work-arrow {
                        transform: rotate(0deg);
                    }

                    .work-arrow .icon {
                        width: 1.25rem;
                        height: 1.25rem;
                    }

                    .partner-panel {
                        display: none;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 1.5rem;
                        background: linear-gradient(to bottom right, rgba(217, 70, 239, 0.1), rgba(34, 211, 238, 0.1));
                        padding: 1.5rem;
                    }

                    @media (min-width: 1024px) {
                        .partner-panel {
                            display: flex;
                            flex-direction: column;
                            align-items: flex-start;
                            justify-content: space-between;
                            gap: 2rem;
                        }
                    }

                    .panel-chip {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        margin-bottom: 0.75rem;
                        border: 1px solid rgba(255, 255, 255, 0.15);
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.1);
                        padding: 0.25rem 0.75rem;
                        font-size: 0.75rem;
                        color: rgba(255, 255, 255, 0.7);
                    }

                    .panel-chip .icon {
                        width: 0.75rem;
                        height: 0.75rem;
                        color: #67e8f9;
                    }

                    .panel-title {
                        font-size: 1.5rem;
                        font-weight: 600;
                    }

                    .panel-sub {
                        margin-top: 0.5rem;
                        font-size: 0.875rem;
                        color: rgba(255, 255, 255, 0.7);
                    }

                    .cta {
                        position: relative;
                        padding: 6rem 0;
                    }

                    .cta-shell {
                        max-width: 64rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }

                    .cta-frame {
                        overflow: hidden;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 2rem;
                        background: linear-gradient(to bottom right, rgba(217, 70, 239, 0.1), rgba(34, 211, 238, 0.1));
                        padding: 0.25rem;
                    }

                    .cta-card {
                        border-radius: 1.6rem;
                        background: rgba(0, 0, 0, 0.5);
                        backdrop-filter: blur(24px);
                        padding: 2.5rem;
                        text-align: center;
                    }

                    .cta-title {
                        max-width: 42rem;
                        margin: 0 auto;
                        font-size: clamp(1.875rem, 3vw, 2.25rem);
                        font-weight: 700;
                        letter-spacing: -0.02em;
                        text-wrap: balance;
                    }

                    .cta-sub {
                        margin-top: 1rem;
                        color: rgba(255, 255, 255, 0.7);
                    }

                    .cta-actions {
                        margin-top: 2rem;
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        justify-content: center;
                        gap: 1rem;
                    }

                    .quiet-link {
                        color: rgba(255, 255, 255, 0.8);
                        transition: color 0.2s ease;
                    }

                    .quiet-link:hover {
                        color: #ffffff;
                    }

                    .footer {
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        padding: 2.5rem 0;
                        color: rgba(255, 255, 255, 0.7);
                    }

                    .footer-shell {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }

                    .footer-row {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: space-between;
                        gap: 1.5rem;
                    }

                    @media (min-width: 640px) {
                        .footer-row {
                            flex-direction: row;
                        }
                    }

                    .footer-brand {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        color: #ffffff;
                    }

                    .footer-social {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                    }

                    .social-link {
                        transition: color 0.2s ease;
                    }

                    .social-link:hover {
                        color: #ffffff;
                    }

                    .social-link .icon {
                        width: 1.25rem;
                        height: 1.25rem;
                    }

                    .footer-note {
                        margin-top: 1.5rem;
                        text-align: center;
                        font-size: 0.75rem;
                        color: rgba(255, 255, 255, 0.5);
                    }
                "#}
            </style>
        </div>
    }
}
