use yew::prelude::*;

use crate::content;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="section about-trigger">
            <div class="page-width about-grid">
                <div class="reveal-blur">
                    <h2 class="about-heading">{content::ABOUT_HEADLINE}</h2>
                    <p class="muted">{content::ABOUT_LEAD}</p>
                </div>
                <div class="reveal-blur glass about-detail">
                    <p class="muted">{content::ABOUT_DETAIL}</p>
                </div>
            </div>
        </section>
    }
}
