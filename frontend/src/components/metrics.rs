use yew::prelude::*;

use crate::content::Metric;

#[derive(Properties, PartialEq)]
pub struct MetricsProps {
    pub metrics: &'static [Metric],
}

#[function_component(TrustMetrics)]
pub fn trust_metrics(props: &MetricsProps) -> Html {
    html! {
        <section class="section">
            <div class="page-width">
                <div class="metrics-frame">
                    <p class="eyebrow">{"Performance & Trust"}</p>
                    <div class="metric-grid">
                        { for props.metrics.iter().map(|metric| html! {
                            <article key={metric.label} class="metric-card glass">
                                <p class="metric-value">{metric.value}</p>
                                <p class="metric-label">{metric.label}</p>
                            </article>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
