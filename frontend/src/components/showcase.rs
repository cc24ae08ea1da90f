use yew::prelude::*;

use crate::content::Hardware;

#[derive(Properties, PartialEq)]
pub struct ShowcaseProps {
    pub items: &'static [Hardware],
}

/// The section's height is set at runtime from the track's overflow; the
/// sticky panel holds the strip in view while that height scrolls past.
#[function_component(HardwareShowcase)]
pub fn hardware_showcase(props: &ShowcaseProps) -> Html {
    html! {
        <section id="hardware" class="hardware-pin">
            <div class="hardware-panel">
                <div class="page-width">
                    <h2 class="section-heading">{"Hardware Showcase"}</h2>
                </div>
                <div class="hardware-track">
                    { for props.items.iter().enumerate().map(|(index, item)| html! {
                        <article key={item.name} class="hardware-card glass">
                            <span class="hardware-index">{format!("{:02}", index + 1)}</span>
                            <p class="eyebrow">{item.category}</p>
                            <h3>{item.name}</h3>
                            <p>{item.blurb}</p>
                        </article>
                    }) }
                </div>
            </div>
        </section>
    }
}
