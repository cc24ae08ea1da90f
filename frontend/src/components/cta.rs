use yew::prelude::*;

use crate::content;

#[function_component(CallToAction)]
pub fn call_to_action() -> Html {
    html! {
        <section class="section cta-section">
            <div class="cta-panel">
                <h2>{content::CTA_HEADLINE}</h2>
                <a href="#contact" class="btn btn-pink shadow-glow-pink">{"Start a Project"}</a>
            </div>
        </section>
    }
}
