use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub title: String,
    pub on_close: Callback<()>,
    pub children: Children,
}

/// Generic overlay. Mounted only while open; the Escape listener and the
/// body scroll lock are acquired on mount and released in the effect cleanup,
/// so every exit path (Escape, backdrop, close button, unmount) releases them
/// exactly once.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    use_effect_with_deps(
        move |on_close: &Callback<()>| {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            let on_close = on_close.clone();
            let key_cb = Closure::<dyn FnMut(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                if e.key() == "Escape" {
                    on_close.emit(());
                }
            });
            document
                .add_event_listener_with_callback("keydown", key_cb.as_ref().unchecked_ref())
                .unwrap();

            if let Some(body) = document.body() {
                let _ = body.style().set_property("overflow", "hidden");
            }

            move || {
                document
                    .remove_event_listener_with_callback(
                        "keydown",
                        key_cb.as_ref().unchecked_ref(),
                    )
                    .unwrap();
                if let Some(body) = document.body() {
                    let _ = body.style().remove_property("overflow");
                }
            }
        },
        props.on_close.clone(),
    );

    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let swallow = Callback::from(|e: MouseEvent| e.stop_propagation());
    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop}>
            <style>
                {r#"
                    .modal-backdrop {
                        position: fixed;
                        inset: 0;
                        z-index: 50;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: rgba(0, 0, 0, 0.6);
                    }
                    .modal-dialog {
                        position: relative;
                        width: 100%;
                        max-width: 36rem;
                        margin: 0 1rem;
                        background: #111;
                        border: 1px solid rgba(187, 132, 0, 0.2);
                        border-radius: 12px;
                        overflow: hidden;
                    }
                    .modal-header {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 1rem 1.5rem;
                        border-bottom: 1px solid rgba(255, 255, 255, 0.08);
                    }
                    .modal-header h3 {
                        margin: 0;
                        font-size: 1.1rem;
                        font-weight: 300;
                        color: #fff;
                    }
                    .modal-close {
                        background: none;
                        border: none;
                        color: rgba(255, 255, 255, 0.6);
                        font-size: 1rem;
                        cursor: pointer;
                    }
                    .modal-close:hover {
                        color: #fff;
                    }
                    .modal-body {
                        padding: 1.5rem;
                    }
                "#}
            </style>
            <div class="modal-dialog" onclick={swallow}>
                <div class="modal-header">
                    <h3>{ &props.title }</h3>
                    <button class="modal-close" onclick={on_close_click}>{"✕"}</button>
                </div>
                <div class="modal-body">
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}
