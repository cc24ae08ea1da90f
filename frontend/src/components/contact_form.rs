use gloo_console::log;
use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::contact::{self, ContactSubmission};

const NOTICE_MS: u32 = 6000;

#[derive(Clone, PartialEq)]
enum FormStatus {
    Idle,
    Sending,
    Sent,
    Failed(String),
}

/// Issues a ticket per notice; a timeout only clears the notice it was
/// scheduled for.
#[derive(Debug, Default)]
struct NoticeClock {
    generation: u32,
}

impl NoticeClock {
    fn issue(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    fn is_current(&self, ticket: u32) -> bool {
        self.generation == ticket
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let status = use_state(|| FormStatus::Idle);
    let notices = use_mut_ref(NoticeClock::default);

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let status = status.clone();
        let notices = notices.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *status == FormStatus::Sending {
                return;
            }

            let submission = match ContactSubmission::new(&name, &email, &message) {
                Ok(submission) => submission,
                Err(err) => {
                    notices.borrow_mut().issue();
                    status.set(FormStatus::Failed(err.notice()));
                    return;
                }
            };

            let ticket = notices.borrow_mut().issue();
            status.set(FormStatus::Sending);
            let notices = notices.clone();
            let name = name.clone();
            let email = email.clone();
            let message = message.clone();
            let status = status.clone();
            spawn_local(async move {
                match contact::submit(&config::get_contact_endpoint(), &submission).await {
                    Ok(()) => {
                        log!("contact form submitted");
                        name.set(String::new());
                        email.set(String::new());
                        message.set(String::new());
                        status.set(FormStatus::Sent);
                    }
                    Err(err) => {
                        // typed values stay in place so nothing is lost
                        log!(format!("contact form failed: {}", err));
                        status.set(FormStatus::Failed(err.notice()));
                    }
                }

                Timeout::new(NOTICE_MS, move || {
                    if notices.borrow().is_current(ticket) {
                        status.set(FormStatus::Idle);
                    }
                })
                .forget();
            });
        })
    };

    let notice = match &*status {
        FormStatus::Idle => html! {},
        FormStatus::Sending => html! { <p class="form-notice">{"Sending..."}</p> },
        FormStatus::Sent => html! {
            <p class="form-notice success">{"Thanks! We'll get back to you within one business day."}</p>
        },
        FormStatus::Failed(text) => html! { <p class="form-notice error" role="alert">{text}</p> },
    };

    html! {
        <section id="contact" class="section">
            <div class="page-width contact-layout">
                <div>
                    <h2 class="section-heading">{"Contact"}</h2>
                    <p class="muted">{"Tell us about your project and we'll map out the next step together."}</p>
                </div>
                <form class="contact-form glass" onsubmit={onsubmit}>
                    <label>
                        <span>{"Name"}</span>
                        <input
                            type="text"
                            name="name"
                            required=true
                            autocomplete="name"
                            value={(*name).clone()}
                            oninput={
                                let name = name.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    name.set(input.value());
                                })
                            }
                        />
                    </label>
                    <label>
                        <span>{"Email"}</span>
                        <input
                            type="email"
                            name="email"
                            required=true
                            autocomplete="email"
                            value={(*email).clone()}
                            oninput={
                                let email = email.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    email.set(input.value());
                                })
                            }
                        />
                    </label>
                    <label>
                        <span>{"Message"}</span>
                        <textarea
                            name="message"
                            rows="5"
                            required=true
                            value={(*message).clone()}
                            oninput={
                                let message = message.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: HtmlTextAreaElement = e.target_unchecked_into();
                                    message.set(input.value());
                                })
                            }
                        />
                    </label>
                    <button type="submit" class="btn btn-primary shadow-glow" disabled={*status == FormStatus::Sending}>
                        {"Send Message"}
                    </button>
                    { notice }
                </form>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::NoticeClock;

    #[test]
    fn a_newer_notice_retires_older_tickets() {
        let mut notices = NoticeClock::default();
        let sending = notices.issue();
        assert!(notices.is_current(sending));

        // a validation failure shown while the first timeout is pending
        let invalid = notices.issue();
        assert!(!notices.is_current(sending));
        assert!(notices.is_current(invalid));
    }
}
