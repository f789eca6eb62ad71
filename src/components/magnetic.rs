use yew::prelude::*;

use crate::effects::use_magnetic;

#[derive(Properties, PartialEq)]
pub struct MagneticButtonProps {
    #[prop_or_default]
    pub children: Children,
}

/// Pill button that drifts toward the pointer while hovered and snaps back
/// when it leaves. The pull itself lives in `effects::use_magnetic`; this
/// component only supplies the frame and the hover halo.
#[function_component(MagneticButton)]
pub fn magnetic_button(props: &MagneticButtonProps) -> Html {
    let button_ref = use_magnetic();

    html! {
        <button ref={button_ref} class="magnetic-button">
            <span class="magnetic-inner">
                <span class="magnetic-halo"></span>
                { for props.children.iter() }
            </span>
        </button>
    }
}
