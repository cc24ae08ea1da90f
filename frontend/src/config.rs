use log::Level;

use crate::contact::ContactEndpoint;

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug // Reveal and pin events are logged at debug
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}

// No submission target is wired up yet. A webhook can be supplied at build
// time, otherwise every submission fails with a visible notice.
pub fn get_contact_endpoint() -> ContactEndpoint {
    match option_env!("SUNEDGE_CONTACT_ENDPOINT") {
        Some(url) if !url.trim().is_empty() => ContactEndpoint::Webhook(url),
        _ => ContactEndpoint::Unconfigured,
    }
}

pub fn get_whatsapp_number() -> Option<&'static str> {
    option_env!("SUNEDGE_WHATSAPP_NUMBER").filter(|number| !number.trim().is_empty())
}
