use crate::shared::icons::icon;
use crate::shared::scroll_lock::{DocumentBody, ScrollLock};
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Modal frame container (overlay + surface + header with close button).
///
/// While mounted the page body does not scroll. The previous `overflow`
/// value comes back when the frame unmounts, however that happens.
#[component]
pub fn ModalFrame(
    /// Header title
    #[prop(into)]
    title: Signal<String>,
    /// Called on overlay click, Escape or the close button
    on_close: Callback<()>,
    /// When false, overlay click, Escape and the close button are ignored
    #[prop(optional, into)]
    can_close: Option<Signal<bool>>,
    /// Extra class for the modal surface (`div.modal`)
    #[prop(optional)]
    modal_class: Option<String>,
    children: Children,
) -> impl IntoView {
    let can_close = move || can_close.map(|s| s.get_untracked()).unwrap_or(true);
    let overlay_mouse_down = RwSignal::new(false);

    let lock = ScrollLock::acquire(DocumentBody);
    on_cleanup(move || drop(lock));

    let request_close = move || {
        if can_close() {
            // Next tick: the overlay may be removed during its own event dispatch.
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    let escape = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            request_close();
        }
    });
    on_cleanup(move || escape.remove());

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Close only if both press and release happened on the overlay itself,
    // so a text selection dragged outside the surface keeps the modal open.
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = overlay_mouse_down.get_untracked() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            request_close();
        }
    };

    let modal_class = match modal_class {
        Some(cls) => format!("modal {cls}"),
        None => "modal".to_string(),
    };

    view! {
        <div
            class="modal-overlay"
            role="dialog"
            aria-modal="true"
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div class=modal_class on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{move || title.get()}</h2>
                    <button
                        type="button"
                        class="button button--icon modal__close"
                        on:click=move |_| request_close()
                    >
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">{children()}</div>
            </div>
        </div>
    }
}
