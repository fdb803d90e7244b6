use yew::prelude::*;

/// Invisible tracking pixel for the marketing configuration. Rendered on
/// the normal page and on the maintenance page alike, so campaign
/// attribution survives maintenance windows.
#[function_component(MarketingPixels)]
pub fn marketing_pixels() -> Html {
    html! {
        <img
            src="/api/pixel.gif"
            alt=""
            width="1"
            height="1"
            style="position: absolute; opacity: 0; pointer-events: none;"
            aria-hidden="true"
        />
    }
}
