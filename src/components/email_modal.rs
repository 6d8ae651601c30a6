use gloo_timers::future::TimeoutFuture;
use log::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::modal::Modal;
use crate::config;
use crate::form::{self, Draft, Field};
use crate::i18n::{use_i18n, I18n};

#[derive(Properties, PartialEq)]
pub struct EmailModalProps {
    pub on_close: Callback<()>,
}

/// Contact form rendered inside the generic modal. Owns the draft, the
/// per-field errors and the sending flag; the parent only controls whether
/// this component is mounted, so the draft resets for free on close.
#[function_component(EmailModal)]
pub fn email_modal(props: &EmailModalProps) -> Html {
    let i18n = use_i18n();
    let draft = use_state(Draft::default);
    let errors = use_state(form::Errors::default);
    let sending = use_state(|| false);

    // Editing a field updates its value and clears that field's error only.
    let edit_field = |field: Field| {
        let draft = draft.clone();
        let errors = errors.clone();
        move |value: String| {
            let mut next = (*draft).clone();
            match field {
                Field::Name => next.name = value,
                Field::Email => next.email = value,
                Field::Subject => next.subject = value,
                Field::Message => next.message = value,
            }
            draft.set(next);
            let mut cleared = (*errors).clone();
            cleared.clear(field);
            errors.set(cleared);
        }
    };
    let input_handler = |field: Field| {
        let edit = edit_field(field);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            edit(input.value());
        })
    };
    let on_name = input_handler(Field::Name);
    let on_email = input_handler(Field::Email);
    let on_subject = input_handler(Field::Subject);
    let on_message = {
        let edit = edit_field(Field::Message);
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            edit(area.value());
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let errors = errors.clone();
        let sending = sending.clone();
        let on_close = props.on_close.clone();
        let i18n = i18n.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *sending {
                return;
            }
            let checked = form::validate(&draft);
            if !checked.is_empty() {
                errors.set(checked);
                return;
            }
            sending.set(true);
            let uri = form::compose_mailto(
                config::CONTACT_EMAIL,
                i18n.t("modal.name"),
                i18n.t("modal.email"),
                &draft,
                i18n.t("start_project.title"),
            );
            let draft = draft.clone();
            let sending = sending.clone();
            let on_close = on_close.clone();
            spawn_local(async move {
                // Brief pause so the "sending" state is perceptible.
                TimeoutFuture::new(config::SUBMIT_DELAY_MS).await;
                info!("Handing message off to the mail client");
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href(&uri);
                }
                draft.set(Draft::default());
                sending.set(false);
                on_close.emit(());
            });
        })
    };

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let send_label = if *sending {
        i18n.t("modal.sending")
    } else {
        i18n.t("modal.send")
    };

    html! {
        <Modal title={i18n.t("modal.title").to_string()} on_close={props.on_close.clone()}>
            <style>
                {r#"
                    .email-form label {
                        display: block;
                        font-size: 0.85rem;
                        color: rgba(255, 255, 255, 0.8);
                        margin-bottom: 0.25rem;
                    }
                    .email-form input,
                    .email-form textarea {
                        width: 100%;
                        padding: 0.6rem 0.75rem;
                        margin-bottom: 1rem;
                        border-radius: 6px;
                        border: 1px solid rgba(255, 255, 255, 0.15);
                        background: rgba(255, 255, 255, 0.05);
                        color: #fff;
                    }
                    .email-form .field-error {
                        margin: -0.75rem 0 1rem;
                        font-size: 0.8rem;
                        color: #e5484d;
                    }
                    .email-form-actions {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .email-form-send {
                        padding: 0.6rem 1.25rem;
                        border: none;
                        border-radius: 6px;
                        background: #BB8400;
                        color: #fff;
                        cursor: pointer;
                    }
                    .email-form-send:disabled {
                        opacity: 0.6;
                        cursor: wait;
                    }
                    .email-form-cancel {
                        background: none;
                        border: none;
                        color: rgba(255, 255, 255, 0.6);
                        cursor: pointer;
                    }
                "#}
            </style>
            <form class="email-form" onsubmit={on_submit}>
                <label>{ i18n.t("modal.name") }</label>
                <input
                    value={draft.name.clone()}
                    oninput={on_name}
                    placeholder={i18n.t("modal.name").to_string()}
                />
                { field_error(&errors, Field::Name, &i18n) }

                <label>{ i18n.t("modal.email") }</label>
                <input
                    value={draft.email.clone()}
                    oninput={on_email}
                    placeholder={i18n.t("modal.email").to_string()}
                />
                { field_error(&errors, Field::Email, &i18n) }

                <label>{ i18n.t("modal.subject") }</label>
                <input
                    value={draft.subject.clone()}
                    oninput={on_subject}
                    placeholder={i18n.t("modal.subject").to_string()}
                />
                { field_error(&errors, Field::Subject, &i18n) }

                <label>{ i18n.t("modal.message") }</label>
                <textarea
                    value={draft.message.clone()}
                    oninput={on_message}
                    rows="5"
                    placeholder={i18n.t("modal.message").to_string()}
                />
                { field_error(&errors, Field::Message, &i18n) }

                <div class="email-form-actions">
                    <button type="submit" class="email-form-send" disabled={*sending}>
                        { send_label }
                    </button>
                    <button type="button" class="email-form-cancel" onclick={on_close_click}>
                        { i18n.t("modal.close") }
                    </button>
                </div>
            </form>
        </Modal>
    }
}

fn field_error(errors: &form::Errors, field: Field, i18n: &I18n) -> Html {
    match errors.get(field) {
        Some(err) => html! {
            <p class="field-error">{ i18n.t(err.message_key(field)) }</p>
        },
        None => html! {},
    }
}
