use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;
use crate::i18n::use_i18n;

/// Headline phrases rotated in the hero, as translation keys.
pub const PHRASE_KEYS: [&str; 6] = [
    "hero.headline",
    "hero.headline_custom",
    "hero.headline_cloud",
    "hero.headline_payment",
    "hero.headline_ai",
    "hero.headline_digital",
];

/// Phrase rotation is a two-phase machine: hold the phrase, fade it out,
/// swap to the next one and fade back in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Visible,
    Fading,
}

pub fn advance(phase: Phase, index: usize, len: usize) -> (Phase, usize) {
    match phase {
        Phase::Visible => (Phase::Fading, index),
        Phase::Fading => (Phase::Visible, (index + 1) % len),
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    /// Normalized scroll progress driving the collapse animation.
    pub progress: f64,
    pub on_contact: Callback<()>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let i18n = use_i18n();
    let rotation = use_state(|| (Phase::Visible, 0usize));

    // One timeout per phase; dropping it in the cleanup cancels the
    // rotation when the hero unmounts.
    {
        let rotation = rotation.clone();
        let deps = *rotation;
        use_effect_with_deps(
            move |&(phase, index)| {
                let delay = match phase {
                    Phase::Visible => config::PHRASE_HOLD_MS,
                    Phase::Fading => config::PHRASE_FADE_MS,
                };
                let timeout = Timeout::new(delay, move || {
                    rotation.set(advance(phase, index, PHRASE_KEYS.len()));
                });
                move || drop(timeout)
            },
            deps,
        );
    }

    let (phase, index) = *rotation;
    let progress = props.progress;
    let revealed = progress > 0.1;

    // Headline shrinks from 1.5x to 1x as the visitor scrolls.
    let headline_style = format!(
        "transform: scale({}); transition: transform 300ms cubic-bezier(.2,.9,.2,1);",
        1.0 + 0.5 * (1.0 - progress)
    );
    let phrase_style = match phase {
        Phase::Visible => {
            "opacity: 1; transform: translateY(0); transition: opacity 600ms ease-in-out, transform 600ms ease-in-out;"
        }
        Phase::Fading => {
            "opacity: 0; transform: translateY(-10px); transition: opacity 600ms ease-in-out, transform 600ms ease-in-out;"
        }
    };
    let reveal_style = if revealed {
        "opacity: 1; transform: translateY(0); transition: opacity 400ms ease, transform 400ms ease; pointer-events: auto;"
    } else {
        "opacity: 0; transform: translateY(20px); transition: opacity 400ms ease, transform 400ms ease; pointer-events: none;"
    };

    let on_contact = {
        let on_contact = props.on_contact.clone();
        Callback::from(move |_: MouseEvent| on_contact.emit(()))
    };

    html! {
        <section class="hero">
            <div class="hero-glow"></div>
            <div class="hero-content">
                <h1 class="hero-headline" style={headline_style}>
                    <span style={phrase_style}>
                        { i18n.t(PHRASE_KEYS[index]) }
                    </span>
                </h1>

                <div style={reveal_style}>
                    <p class="hero-description">{ i18n.t("hero.description") }</p>

                    <div class="hero-cta-group">
                        <button class="hero-cta" onclick={on_contact}>
                            { i18n.t("hero.contact_us") }
                        </button>
                        <a class="hero-secondary" href="#services">
                            { i18n.t("hero.our_work") }
                        </a>
                    </div>

                    <div class="hero-highlights">
                        <div class="hero-highlight">
                            <span class="hero-highlight-icon">{"⌨️"}</span>
                            <div>
                                <h4>{ i18n.t("features.custom_web_apps") }</h4>
                                <p>{ i18n.t("features.custom_web_apps_desc") }</p>
                            </div>
                        </div>
                        <div class="hero-highlight">
                            <span class="hero-highlight-icon">{"☁️"}</span>
                            <div>
                                <h4>{ i18n.t("features.cloud_devops") }</h4>
                                <p>{ i18n.t("features.cloud_devops_desc") }</p>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_phase_fades_without_changing_phrase() {
        assert_eq!(advance(Phase::Visible, 2, 6), (Phase::Fading, 2));
    }

    #[test]
    fn fading_phase_advances_and_wraps() {
        assert_eq!(advance(Phase::Fading, 2, 6), (Phase::Visible, 3));
        assert_eq!(advance(Phase::Fading, 5, 6), (Phase::Visible, 0));
    }

    #[test]
    fn full_cycle_visits_every_phrase_in_order() {
        let len = PHRASE_KEYS.len();
        let mut state = (Phase::Visible, 0);
        let mut seen = Vec::new();
        for _ in 0..(2 * len) {
            state = advance(state.0, state.1, len);
            if state.0 == Phase::Visible {
                seen.push(state.1);
            }
        }
        assert_eq!(seen, vec![1, 2, 3, 4, 5, 0]);
    }
}
