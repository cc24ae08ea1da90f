use yew::prelude::*;
use yew_hooks::use_title;

use crate::components::{
    about::About, contact_form::ContactForm, cta::CallToAction, footer::Footer, hero::Hero,
    metrics::TrustMetrics, services::Services, showcase::HardwareShowcase, whatsapp::WhatsAppLink,
};
use crate::content;
use crate::dom::{use_meta_description, use_scroll_scene};
use crate::motion::{
    CardFocus, Easing, MotionError, PinSpec, Playback, RevealSpec, ScrollRegion, StyleState, Trigger,
};

/// Every animated element on the landing page.
pub fn home_motion() -> Result<(Vec<RevealSpec>, Vec<PinSpec>), MotionError> {
    let shown = StyleState::IDENTITY;

    let reveals = vec![
        RevealSpec::new(".hero-card", shown.opacity(0.0).y(22.0), shown)
            .trigger(Trigger::Mount)
            .easing(Easing::EaseOut)
            .duration_ms(1000.0),
        RevealSpec::new(".hero-glow", shown.x(-60.0).opacity(0.6), shown.x(60.0))
            .trigger(Trigger::PointerTrack)
            .triggered_by(".hero")
            .playback(Playback::Scrubbed)
            .easing(Easing::Linear),
        RevealSpec::new(".section-heading", shown.opacity(0.35).y(18.0), shown)
            .trigger(Trigger::Scroll(ScrollRegion::between("top bottom", "top 60%")?))
            .playback(Playback::Scrubbed)
            .easing(Easing::Linear),
        // stagger runs per card index, each card triggering itself; the open
        // region only exits when scrolled back above the start
        RevealSpec::new(".service-card", shown.opacity(0.3).y(26.0), shown)
            .trigger(Trigger::Scroll(ScrollRegion::starting_at("top 88%")?))
            .playback(Playback::Toggle)
            .easing(Easing::POWER2_OUT)
            .duration_ms(900.0)
            .stagger_ms(80.0),
        RevealSpec::new(".service-card", shown, shown.y(-6.0))
            .trigger(Trigger::Hover)
            .playback(Playback::Toggle)
            .easing(Easing::POWER2_OUT)
            .duration_ms(250.0),
        RevealSpec::new(".reveal-blur", shown.opacity(0.0).blur(12.0).y(30.0), shown)
            .trigger(Trigger::Scroll(ScrollRegion::starting_at("top 82%")?))
            .triggered_by(".about-trigger")
            .easing(Easing::POWER3_OUT)
            .duration_ms(1100.0)
            .stagger_ms(150.0),
        RevealSpec::new(".metric-card", shown.opacity(0.0).y(16.0), shown)
            .trigger(Trigger::InView { amount: 0.5 })
            .playback(Playback::Once)
            .easing(Easing::Ease)
            .duration_ms(700.0)
            .stagger_ms(100.0),
        RevealSpec::new(".cta-panel", shown.scale(0.94).opacity(0.6), shown)
            .trigger(Trigger::Scroll(ScrollRegion::between("top bottom", "center center")?))
            .playback(Playback::Scrubbed)
            .easing(Easing::Linear),
    ];

    let pins = vec![PinSpec {
        section: ".hardware-pin",
        track: ".hardware-track",
        cards: ".hardware-card",
        focus: CardFocus::default(),
    }];

    Ok((reveals, pins))
}

#[function_component(Home)]
pub fn home() -> Html {
    use_title(content::PAGE_TITLE.to_string());
    use_meta_description(content::PAGE_DESCRIPTION);
    use_scroll_scene(home_motion);

    html! {
        <main class="landing">
            <div class="ambient-bg" aria-hidden="true"></div>
            <Hero />
            <Services services={content::SERVICES} />
            <HardwareShowcase items={content::HARDWARE} />
            <About />
            <TrustMetrics metrics={content::METRICS} />
            <ContactForm />
            <CallToAction />
            <Footer socials={content::SOCIALS} />
            <WhatsAppLink />
            <style>
                {r#"
                    .landing {
                        position: relative;
                        overflow-x: clip;
                    }
                    .landing > section, .landing > footer {
                        position: relative;
                        z-index: 1;
                    }
                    .page-width {
                        width: 100%;
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }
                    .section {
                        padding: 6rem 0;
                    }
                    .section-heading, .about-heading {
                        font-size: 2.25rem;
                        font-weight: 600;
                        margin: 0 0 3rem;
                    }
                    .eyebrow {
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        letter-spacing: 0.28em;
                        color: rgba(56, 182, 255, 0.8);
                        margin: 0 0 1rem;
                    }
                    .muted {
                        color: #cbd5e1;
                        line-height: 1.7;
                    }
                    .btn {
                        display: inline-block;
                        border-radius: 999px;
                        padding: 0.75rem 2rem;
                        font-size: 0.875rem;
                        font-weight: 500;
                        text-decoration: none;
                        cursor: pointer;
                        transition: transform 0.2s ease, background 0.2s ease, box-shadow 0.2s ease;
                    }
                    .btn:hover {
                        transform: translateY(-4px);
                    }
                    .btn-primary {
                        border: 1px solid rgba(123, 92, 255, 0.6);
                        background: rgba(123, 92, 255, 0.25);
                        color: #f1f5f9;
                    }
                    .btn-primary:hover {
                        background: rgba(123, 92, 255, 0.35);
                    }
                    .btn-primary:disabled {
                        opacity: 0.6;
                        cursor: progress;
                    }
                    .btn-glass:hover {
                        border-color: rgba(56, 182, 255, 0.6);
                        box-shadow: var(--glow-blue);
                    }
                    .btn-pink {
                        border: 1px solid rgba(255, 79, 216, 0.6);
                        background: rgba(255, 79, 216, 0.2);
                        font-weight: 600;
                        margin-top: 2rem;
                    }
                    .btn-pink:hover {
                        background: rgba(255, 79, 216, 0.35);
                    }

                    .hero {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        padding: 6rem 0;
                        overflow: hidden;
                    }
                    .hero-glow {
                        position: absolute;
                        top: 20%;
                        left: 50%;
                        width: 32rem;
                        height: 32rem;
                        margin-left: -16rem;
                        border-radius: 50%;
                        background: radial-gradient(circle, rgba(123, 92, 255, 0.25), transparent 65%);
                        pointer-events: none;
                    }
                    .hero-card {
                        position: relative;
                        max-width: 48rem;
                        border-radius: 1.5rem;
                        padding: 3.5rem;
                    }
                    .hero-card h1 {
                        font-size: 3.75rem;
                        font-weight: 600;
                        line-height: 1.1;
                        margin: 0;
                    }
                    .hero-subline {
                        margin-top: 1.5rem;
                        color: #cbd5e1;
                        font-size: 1.125rem;
                    }
                    .hero-actions {
                        margin-top: 2.5rem;
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                    }

                    .service-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1.5rem;
                    }
                    .service-card {
                        border-radius: 1rem;
                        padding: 2rem;
                        transition: border-color 0.5s ease, box-shadow 0.5s ease;
                    }
                    .service-card:hover {
                        border-color: rgba(123, 92, 255, 0.6);
                        box-shadow: var(--glow);
                    }
                    .service-card h3 {
                        font-size: 1.25rem;
                        font-weight: 500;
                        margin: 0;
                    }
                    .service-card p {
                        margin-top: 1rem;
                        font-size: 0.875rem;
                        line-height: 1.7;
                        color: #cbd5e1;
                    }

                    .hardware-pin {
                        position: relative;
                    }
                    .hardware-panel {
                        position: sticky;
                        top: 0;
                        height: 100vh;
                        overflow: hidden;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                    }
                    .hardware-track {
                        position: relative;
                        display: flex;
                        gap: 2rem;
                        width: max-content;
                        padding: 0 6vw;
                        will-change: transform;
                    }
                    .hardware-card {
                        flex: 0 0 auto;
                        width: 22rem;
                        min-height: 18rem;
                        border-radius: 1.25rem;
                        padding: 2rem;
                    }
                    .hardware-index {
                        font-size: 2.5rem;
                        font-weight: 600;
                        color: rgba(255, 255, 255, 0.15);
                    }
                    .hardware-card h3 {
                        margin: 0.25rem 0 0.75rem;
                        font-size: 1.375rem;
                    }
                    .hardware-card p:last-child {
                        color: #cbd5e1;
                        line-height: 1.6;
                    }

                    .about-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 2.5rem;
                    }
                    .about-detail {
                        border-radius: 1rem;
                        padding: 2rem;
                    }

                    .metrics-frame {
                        border-radius: 1.5rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(255, 255, 255, 0.02);
                        padding: 2.5rem;
                    }
                    .metric-grid {
                        margin-top: 1.5rem;
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1rem;
                    }
                    .metric-card {
                        border-radius: 1rem;
                        padding: 1.5rem;
                    }
                    .metric-value {
                        margin: 0;
                        font-size: 3rem;
                        font-weight: 600;
                        letter-spacing: -0.02em;
                        background: linear-gradient(to right, #ffffff, #cbd5e1, #64748b);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .metric-label {
                        margin: 0.75rem 0 0;
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        letter-spacing: 0.18em;
                        color: #94a3b8;
                    }

                    .contact-layout {
                        display: grid;
                        grid-template-columns: 1fr 1.2fr;
                        gap: 2.5rem;
                        align-items: start;
                    }
                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1.25rem;
                        border-radius: 1.25rem;
                        padding: 2rem;
                    }
                    .contact-form label {
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                        font-size: 0.875rem;
                        color: #cbd5e1;
                    }
                    .contact-form input, .contact-form textarea {
                        font: inherit;
                        color: #f1f5f9;
                        background: rgba(255, 255, 255, 0.04);
                        border: 1px solid rgba(255, 255, 255, 0.12);
                        border-radius: 0.75rem;
                        padding: 0.75rem 1rem;
                    }
                    .contact-form input:focus, .contact-form textarea:focus {
                        outline: none;
                        border-color: rgba(56, 182, 255, 0.6);
                        box-shadow: var(--glow-blue);
                    }
                    .form-notice {
                        margin: 0;
                        font-size: 0.875rem;
                        color: #cbd5e1;
                    }
                    .form-notice.success {
                        color: var(--blue);
                    }
                    .form-notice.error {
                        color: var(--pink);
                    }

                    .cta-section {
                        padding-top: 2.5rem;
                    }
                    .cta-panel {
                        max-width: 64rem;
                        margin: 0 auto;
                        border-radius: 1.5rem;
                        border: 1px solid rgba(56, 182, 255, 0.25);
                        background: linear-gradient(to right, rgba(123, 92, 255, 0.2), transparent, rgba(56, 182, 255, 0.2));
                        padding: 3rem;
                        text-align: center;
                    }
                    .cta-panel h2 {
                        font-size: 3rem;
                        font-weight: 600;
                        margin: 0;
                    }

                    .site-footer {
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        padding: 2rem 0;
                        font-size: 0.875rem;
                        color: #94a3b8;
                    }
                    .footer-row {
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        justify-content: space-between;
                        gap: 1rem;
                    }
                    .socials {
                        display: flex;
                        gap: 1.25rem;
                    }
                    .socials a {
                        text-decoration: none;
                    }
                    .socials a:hover {
                        color: var(--blue);
                    }
                    .tagline {
                        color: rgba(56, 182, 255, 0.7);
                    }

                    .whatsapp-link {
                        position: fixed;
                        right: 1.5rem;
                        bottom: 1.5rem;
                        z-index: 10;
                        border-radius: 999px;
                        padding: 0.75rem 1.25rem;
                        font-size: 0.875rem;
                        font-weight: 600;
                        text-decoration: none;
                        background: rgba(37, 211, 102, 0.2);
                        border: 1px solid rgba(37, 211, 102, 0.6);
                        animation: whatsapp-pulse 3s ease-in-out infinite;
                    }
                    @keyframes whatsapp-pulse {
                        0%, 100% { box-shadow: 0 0 0 rgba(37, 211, 102, 0); }
                        50% { box-shadow: 0 0 24px rgba(37, 211, 102, 0.35); }
                    }

                    @media (max-width: 900px) {
                        .service-grid, .metric-grid, .about-grid, .contact-layout {
                            grid-template-columns: 1fr;
                        }
                        .hero-card {
                            padding: 2.5rem;
                        }
                        .hero-card h1 {
                            font-size: 2.25rem;
                        }
                        .cta-panel h2, .section-heading, .about-heading {
                            font-size: 1.875rem;
                        }
                        .hardware-card {
                            width: 18rem;
                        }
                    }
                "#}
            </style>
        </main>
    }
}
