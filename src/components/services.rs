use yew::prelude::*;

use crate::i18n::use_i18n;

// (icon, title key, description key)
const SERVICES: [(&str, &str, &str); 4] = [
    ("⌨️", "services.frontend", "services.frontend_desc"),
    ("🖥️", "services.backend", "services.backend_desc"),
    ("📞", "features.support", "services.support_desc"),
    ("🧭", "features.consulting", "services.consulting_desc"),
];

#[function_component(ServicesGrid)]
pub fn services_grid() -> Html {
    let i18n = use_i18n();

    html! {
        <div class="services-grid">
            {
                SERVICES.iter().enumerate().map(|(idx, (icon, title_key, desc_key))| {
                    // Staggered entrance, one card at a time.
                    let style = format!("animation: fadeInUp 0.6s ease-out {}s both;", idx as f64 * 0.1);
                    html! {
                        <div class="service-card" {style}>
                            <span class="service-icon">{ *icon }</span>
                            <div>
                                <h4>{ i18n.t(title_key) }</h4>
                                <p>{ i18n.t(desc_key) }</p>
                            </div>
                        </div>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}
