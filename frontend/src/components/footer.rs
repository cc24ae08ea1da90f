use chrono::Datelike;
use yew::prelude::*;

use crate::content::{self, Social};

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub socials: &'static [Social],
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="page-width footer-row">
                <p>{format!("© {} {}", year, content::COMPANY)}</p>
                <nav class="socials">
                    { for props.socials.iter().map(|social| html! {
                        <a key={social.label} href={social.href} target="_blank" rel="noopener noreferrer">{social.label}</a>
                    }) }
                </nav>
                <p class="tagline">{content::TAGLINE}</p>
            </div>
        </footer>
    }
}
