use yew::prelude::*;

use crate::content;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section class="hero">
            <div class="hero-glow" aria-hidden="true"></div>
            <div class="page-width">
                <div class="hero-card glass neon-border">
                    <p class="eyebrow">{content::COMPANY}</p>
                    <h1>{content::HERO_HEADLINE}</h1>
                    <p class="hero-subline">{content::HERO_SUBLINE}</p>
                    <div class="hero-actions">
                        <a href="#services" class="btn btn-primary shadow-glow">{"Explore Solutions"}</a>
                        <a href="#contact" class="btn btn-glass glass">{"Contact Us"}</a>
                    </div>
                </div>
            </div>
        </section>
    }
}
