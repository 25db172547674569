use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{CONTAINER_ID, TRANSITION_CLASS, TRANSITION_DELAY_MS};

#[inline]
pub fn slide_out(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(CONTAINER_ID) {
        let _ = el.class_list().add_1(TRANSITION_CLASS);
        log::info!("[transition] slide-out applied to #{CONTAINER_ID}");
    }
}

/// One-shot deferred transition after the click explosion. The pending
/// timer is not cancelable; a re-entrant click just re-applies the class.
pub fn schedule_slide_out(document: &web::Document) {
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move || {
        slide_out(&doc);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            TRANSITION_DELAY_MS,
        );
    }
    closure.forget();
}
