use chrono::{Datelike, Utc};
use log::info;
use yew::prelude::*;

use crate::components::contact::ContactCard;
use crate::components::email_modal::EmailModal;
use crate::components::hero::Hero;
use crate::components::services::ServicesGrid;
use crate::config;
use crate::i18n::{self, I18n, Language};
use crate::scroll::use_scroll_progress;

#[function_component(Landing)]
pub fn landing() -> Html {
    let lang = use_state(Language::detect);
    let progress = use_scroll_progress(config::SCROLL_THRESHOLD_PX);
    let show_email_modal = use_state(|| false);

    // Scroll to top and set the layout direction for the detected language
    // once on mount.
    {
        let initial = *lang;
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                i18n::apply_direction(initial);
                || ()
            },
            (),
        );
    }

    let set_lang = {
        let lang = lang.clone();
        Callback::from(move |next: Language| {
            info!("Switching language to {}", next.code());
            // Direction must flip in the same tick as the language.
            i18n::apply_direction(next);
            lang.set(next);
        })
    };
    let i18n_ctx = I18n {
        lang: *lang,
        set: set_lang.clone(),
    };
    let t = |key: &'static str| i18n::translate(*lang, key);

    let open_modal = {
        let show_email_modal = show_email_modal.clone();
        Callback::from(move |_| show_email_modal.set(true))
    };
    let close_modal = {
        let show_email_modal = show_email_modal.clone();
        Callback::from(move |_| show_email_modal.set(false))
    };

    // Header fades in with the first scroll, solidifies past 0.3.
    let header_style = format!(
        "opacity: {}; transform: translateY({}); pointer-events: {}; background: {}; border-bottom: {}; transition: all 300ms ease;",
        if progress > 0.0 { "1" } else { "0" },
        if progress > 0.0 { "0" } else { "-12px" },
        if progress > 0.0 { "auto" } else { "none" },
        if progress > 0.3 { "rgba(0, 0, 0, 0.98)" } else { "transparent" },
        if progress > 0.3 { "1px solid rgba(187, 132, 0, 0.1)" } else { "1px solid transparent" },
    );
    let indicator_style = format!(
        "opacity: {}; transition: opacity 400ms ease; pointer-events: none;",
        if progress == 0.0 { "1" } else { "0" }
    );
    let section_style = format!(
        "opacity: {}; transform: translateY({}); transition: opacity 600ms ease, transform 600ms ease;",
        if progress > 0.0 { "1" } else { "0" },
        if progress > 0.0 { "0" } else { "30px" },
    );

    let year = Utc::now().year();

    html! {
        <ContextProvider<I18n> context={i18n_ctx.clone()}>
        <div class="landing-page">
            <style>
                {r#"
                    .landing-page {
                        min-height: 100vh;
                        background: #000;
                        color: #fff;
                    }
                    .top-header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 40;
                    }
                    .header-content {
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 1.5rem 2rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .header-brand {
                        font-size: 1.25rem;
                        font-weight: 300;
                        letter-spacing: 0.1em;
                        color: #BB8400;
                    }
                    .header-nav {
                        display: flex;
                        gap: 2rem;
                        font-size: 0.9rem;
                    }
                    .header-nav a {
                        color: rgba(255, 255, 255, 0.7);
                        text-decoration: none;
                    }
                    .header-nav a:hover {
                        color: #BB8400;
                    }
                    .lang-switcher {
                        display: flex;
                        gap: 0.75rem;
                        margin-inline-start: 2rem;
                    }
                    .lang-switcher button {
                        background: none;
                        border: none;
                        font-size: 0.75rem;
                        letter-spacing: 0.1em;
                        color: rgba(255, 255, 255, 0.5);
                        cursor: pointer;
                    }
                    .lang-switcher button:hover {
                        color: rgba(255, 255, 255, 0.7);
                    }
                    .lang-switcher button.active {
                        color: #BB8400;
                    }
                    .scroll-indicator {
                        position: fixed;
                        bottom: 2rem;
                        left: 50%;
                        transform: translateX(-50%);
                        z-index: 30;
                        width: 1px;
                        height: 4rem;
                        background: linear-gradient(to bottom, transparent, rgba(187, 132, 0, 0.5), transparent);
                    }
                    .page-main {
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 0 2rem;
                    }
                    .hero {
                        position: relative;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        min-height: 90vh;
                        text-align: center;
                    }
                    .hero-glow {
                        position: absolute;
                        left: 50%;
                        top: 50%;
                        transform: translate(-50%, -50%);
                        width: 24rem;
                        height: 24rem;
                        border-radius: 9999px;
                        background: radial-gradient(circle, rgba(187, 132, 0, 0.25), transparent 70%);
                        filter: blur(60px);
                        pointer-events: none;
                    }
                    .hero-content {
                        position: relative;
                        z-index: 10;
                        max-width: 56rem;
                        margin: 0 auto;
                    }
                    .hero-headline {
                        min-height: 10rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 2.5rem;
                        font-weight: 800;
                        line-height: 1.2;
                    }
                    .hero-headline span {
                        display: inline-block;
                    }
                    .hero-description {
                        margin-top: 1rem;
                        color: rgba(255, 255, 255, 0.7);
                        max-width: 40rem;
                        margin-inline: auto;
                    }
                    .hero-cta-group {
                        margin-top: 1.5rem;
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.75rem;
                        justify-content: center;
                    }
                    .hero-cta {
                        padding: 0.75rem 1.5rem;
                        border: none;
                        border-radius: 6px;
                        background: #BB8400;
                        color: #fff;
                        cursor: pointer;
                    }
                    .hero-secondary {
                        padding: 0.75rem 1.5rem;
                        border: 1px solid rgba(255, 255, 255, 0.25);
                        border-radius: 6px;
                        color: rgba(255, 255, 255, 0.9);
                        text-decoration: none;
                    }
                    .hero-highlights {
                        margin-top: 2rem;
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
                        gap: 1rem;
                        max-width: 36rem;
                        margin-inline: auto;
                        text-align: start;
                    }
                    .hero-highlight {
                        display: flex;
                        gap: 0.75rem;
                        align-items: flex-start;
                    }
                    .hero-highlight h4 {
                        margin: 0;
                        font-size: 0.95rem;
                    }
                    .hero-highlight p {
                        margin: 0.25rem 0 0;
                        font-size: 0.85rem;
                        color: rgba(255, 255, 255, 0.6);
                    }
                    .section-title {
                        text-align: center;
                        margin-bottom: 3rem;
                    }
                    .section-title h2 {
                        font-size: 2.5rem;
                        font-weight: 300;
                        margin: 0 0 1rem;
                    }
                    .section-rule {
                        width: 4rem;
                        height: 1px;
                        background: #BB8400;
                        margin: 0 auto;
                    }
                    .services-section,
                    .contact-section {
                        padding: 6rem 0;
                    }
                    .contact-section {
                        border-top: 1px solid rgba(255, 255, 255, 0.05);
                    }
                    @keyframes fadeInUp {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .services-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
                        gap: 1.5rem;
                    }
                    .service-card {
                        padding: 1.5rem;
                        border-radius: 12px;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(255, 255, 255, 0.03);
                    }
                    .service-card:hover {
                        border-color: rgba(187, 132, 0, 0.4);
                    }
                    .service-icon {
                        font-size: 1.5rem;
                    }
                    .service-card h4 {
                        margin: 0.75rem 0 0.5rem;
                    }
                    .service-card p {
                        margin: 0;
                        font-size: 0.9rem;
                        color: rgba(255, 255, 255, 0.6);
                    }
                    .contact-subtitle {
                        color: rgba(255, 255, 255, 0.6);
                        font-size: 1.1rem;
                        max-width: 40rem;
                        margin: 2rem auto 0;
                    }
                    .contact-links {
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        justify-content: center;
                        gap: 2rem;
                        margin: 3rem auto;
                        max-width: 40rem;
                    }
                    .contact-links a {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        color: rgba(255, 255, 255, 0.7);
                        text-decoration: none;
                        font-weight: 300;
                    }
                    .contact-links a:hover {
                        color: #BB8400;
                    }
                    .contact-card {
                        max-width: 32rem;
                        margin: 0 auto;
                        padding: 2rem;
                        border: 1px solid rgba(187, 132, 0, 0.2);
                        border-radius: 16px;
                    }
                    .contact-card h3 {
                        margin: 0;
                        font-weight: 300;
                    }
                    .contact-card p {
                        color: rgba(255, 255, 255, 0.6);
                        font-weight: 300;
                    }
                    .contact-card-cta {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.75rem;
                        padding: 0.75rem 2rem;
                        border: 1px solid rgba(187, 132, 0, 0.3);
                        background: none;
                        color: #fff;
                        letter-spacing: 0.1em;
                        font-size: 0.9rem;
                        cursor: pointer;
                    }
                    .contact-card-cta:hover {
                        border-color: #BB8400;
                        color: #BB8400;
                    }
                    .contact-card-dash {
                        width: 1.5rem;
                        height: 1px;
                        background: currentColor;
                    }
                    .contact-card-note {
                        margin-top: 1rem;
                        font-size: 0.85rem;
                    }
                    .page-footer {
                        border-top: 1px solid rgba(255, 255, 255, 0.05);
                        padding: 2rem;
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        justify-content: space-between;
                        gap: 1rem;
                        max-width: 72rem;
                        margin: 0 auto;
                        font-size: 0.85rem;
                        color: rgba(255, 255, 255, 0.4);
                        font-weight: 300;
                    }
                "#}
            </style>

            <header class="top-header" style={header_style}>
                <div class="header-content">
                    <div class="header-brand">{ t("company") }</div>
                    <nav class="header-nav">
                        <a href="#services">{ t("nav.services") }</a>
                        <a href="#contact">{ t("nav.contact") }</a>
                    </nav>
                    <div class="lang-switcher">
                        {
                            Language::all().iter().map(|&l| {
                                let set = {
                                    let set = set_lang.clone();
                                    Callback::from(move |_: MouseEvent| set.emit(l))
                                };
                                let class = if *lang == l { "active" } else { "" };
                                html! {
                                    <button {class} onclick={set}>{ l.label() }</button>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </header>

            <div class="scroll-indicator" style={indicator_style}></div>

            <main class="page-main">
                <Hero progress={progress} on_contact={open_modal.clone()} />

                <section id="services" class="services-section" style={section_style.clone()}>
                    <div class="section-title">
                        <h2>{ t("services_title") }</h2>
                        <div class="section-rule"></div>
                    </div>
                    <ServicesGrid />
                </section>

                <section id="contact" class="contact-section" style={section_style}>
                    <div class="section-title">
                        <h2>{ t("contact_title") }</h2>
                        <div class="section-rule"></div>
                        <p class="contact-subtitle">{ t("contact_subtitle") }</p>
                    </div>
                    <div class="contact-links">
                        <a href={format!("tel:{}", config::CONTACT_PHONE)}>
                            {"📞 "}{ config::CONTACT_PHONE }
                        </a>
                        <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>
                            {"✉️ "}{ config::CONTACT_EMAIL }
                        </a>
                    </div>
                    <ContactCard on_contact={open_modal} />
                </section>
            </main>

            <footer class="page-footer">
                <div>{ i18n_ctx.t_with_year("footer", year) }</div>
                <div>{"© "}{ t("company") }</div>
            </footer>

            {
                if *show_email_modal {
                    html! { <EmailModal on_close={close_modal} /> }
                } else {
                    html! {}
                }
            }
        </div>
        </ContextProvider<I18n>>
    }
}
