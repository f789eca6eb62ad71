use yew::prelude::*;

use crate::content::MARQUEE_ITEMS;

fn track() -> Html {
    html! {
        <div class="marquee-track">
            { for MARQUEE_ITEMS.iter().map(|item| html! {
                <span class="marquee-item">
                    <span class="marquee-pill">{ *item }</span>
                    <span class="marquee-dot"></span>
                </span>
            }) }
        </div>
    }
}

/// Endless keyword strip. The content is laid out twice and the inner row
/// translates by half its width per loop, so the seam never shows.
#[function_component(Marquee)]
pub fn marquee() -> Html {
    html! {
        <div class="marquee">
            <div class="marquee-inner">
                { track() }
                { track() }
            </div>
            <style>
                {r#"
                    .marquee {
                        position: relative;
                        overflow: hidden;
                        padding: 1.5rem 0;
                        background: linear-gradient(to top, rgba(0, 0, 0, 0.3), transparent);
                    }

                    .marquee-inner {
                        display: flex;
                        width: max-content;
                        animation: marquee-scroll 40s linear infinite;
                    }

                    .marquee-track {
                        display: flex;
                        flex-shrink: 0;
                        gap: 2rem;
                        padding-right: 2rem;
                    }

                    .marquee-item {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.75rem;
                        font-size: 1.25rem;
                        font-weight: 600;
                        letter-spacing: -0.01em;
                        color: rgba(255, 255, 255, 0.8);
                    }

                    .marquee-pill {
                        border: 1px solid rgba(255, 255, 255, 0.15);
                        border-radius: 9999px;
                        padding: 0.25rem 1rem;
                        color: rgba(255, 255, 255, 0.7);
                    }

                    .marquee-dot {
                        width: 4px;
                        height: 4px;
                        border-radius: 50%;
                        background: rgba(255, 255, 255, 0.3);
                    }

                    @keyframes marquee-scroll {
                        from { transform: translateX(0); }
                        to { transform: translateX(-50%); }
                    }
                "#}
            </style>
        </div>
    }
}
