use yew::prelude::*;

use crate::i18n::use_i18n;

#[derive(Properties, PartialEq)]
pub struct ContactCardProps {
    pub on_contact: Callback<()>,
}

/// Start-a-project card shown in the contact section.
#[function_component(ContactCard)]
pub fn contact_card(props: &ContactCardProps) -> Html {
    let i18n = use_i18n();

    let onclick = {
        let on_contact = props.on_contact.clone();
        Callback::from(move |_: MouseEvent| on_contact.emit(()))
    };

    html! {
        <div class="contact-card">
            <h3>{ i18n.t("start_project.title") }</h3>
            <p>{ i18n.t("start_project.desc") }</p>
            <button class="contact-card-cta" {onclick}>
                { i18n.t("start_project.request_quote") }
                <span class="contact-card-dash"></span>
            </button>
            <p class="contact-card-note">{"✓ "}{ i18n.t("start_project.secure") }</p>
        </div>
    }
}
