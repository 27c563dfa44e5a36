use yew::prelude::*;

use crate::content::{LOGO_IMAGE, OWNER_NAME};

#[derive(Properties, PartialEq)]
pub struct LoadingScreenProps {
    pub duration_ms: u32,
}

/// Shown until the loading gate opens; the bar fills over the gate's duration.
#[function_component(LoadingScreen)]
pub fn loading_screen(props: &LoadingScreenProps) -> Html {
    let fill_style = format!("animation-duration: {}ms;", props.duration_ms);

    html! {
        <div class="loading-screen" role="status" aria-live="polite">
            <div class="loading-inner">
                <img src={LOGO_IMAGE} alt={OWNER_NAME} class="loading-logo" />
                <p class="loading-name">{OWNER_NAME}</p>
                <div class="loading-bar" aria-hidden="true">
                    <span class="loading-fill" style={fill_style}></span>
                </div>
                <p class="loading-caption">{"Loading portfolio"}</p>
            </div>
        </div>
    }
}
