use yew::prelude::*;

use crate::content::Service;

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    pub services: &'static [Service],
}

#[function_component(Services)]
pub fn services(props: &ServicesProps) -> Html {
    html! {
        <section id="services" class="section">
            <div class="page-width">
                <h2 class="section-heading">{"Core Services"}</h2>
                <div class="service-grid">
                    { for props.services.iter().map(|service| html! {
                        <article key={service.title} class="service-card glass">
                            <h3>{service.title}</h3>
                            <p>{service.copy}</p>
                        </article>
                    }) }
                </div>
            </div>
        </section>
    }
}
