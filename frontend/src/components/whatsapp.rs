use yew::prelude::*;

use crate::config;
use crate::content;

/// `wa.me` deep link. Without a number WhatsApp lets the visitor pick the
/// chat, the text is still prefilled.
pub fn whatsapp_href(number: Option<&str>, text: &str) -> String {
    let digits: String = number
        .unwrap_or_default()
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    let text = urlencoding::encode(text);
    if digits.is_empty() {
        format!("https://wa.me/?text={}", text)
    } else {
        format!("https://wa.me/{}?text={}", digits, text)
    }
}

#[function_component(WhatsAppLink)]
pub fn whatsapp_link() -> Html {
    let href = whatsapp_href(config::get_whatsapp_number(), content::WHATSAPP_TEXT);

    html! {
        <a class="whatsapp-link shadow-glow" href={href} target="_blank" rel="noopener noreferrer" aria-label="Chat on WhatsApp">
            {"WhatsApp"}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::whatsapp_href;

    #[test]
    fn number_is_reduced_to_digits() {
        assert_eq!(
            whatsapp_href(Some("+1 (555) 010-9999"), "Hi"),
            "https://wa.me/15550109999?text=Hi"
        );
    }

    #[test]
    fn text_is_url_encoded() {
        assert_eq!(
            whatsapp_href(Some("4912345"), "Hello SunEdge, I'd like a quote & a call"),
            "https://wa.me/4912345?text=Hello%20SunEdge%2C%20I%27d%20like%20a%20quote%20%26%20a%20call"
        );
    }

    #[test]
    fn missing_number_falls_back_to_chat_picker() {
        assert_eq!(whatsapp_href(None, "Hi there"), "https://wa.me/?text=Hi%20there");
        assert_eq!(whatsapp_href(Some("n/a"), "Hi"), "https://wa.me/?text=Hi");
    }
}
