use std::cell::RefCell;
use std::rc::Rc;

use app_core::{Cursor, Field, SampleParams};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{TITLE_SELECTOR, TITLE_TEXT_ATTR};
use crate::{dom, glyph, input, transition};

/// Shared pointer state write path: pointermove on the window updates the
/// cursor every particle reads on the next tick.
pub fn wire_pointer_move(cursor: Rc<RefCell<Cursor>>, canvas: web::HtmlCanvasElement) {
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &canvas);
        cursor.borrow_mut().set(pos);
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        let _ =
            window.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Window resize: re-sync the backing size, then synchronously replace the
/// whole field at the new bounds.
pub fn wire_resize(field: Rc<RefCell<Field>>, canvas: web::HtmlCanvasElement) {
    let closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas);
        field
            .borrow_mut()
            .resize(canvas.width() as f32, canvas.height() as f32);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

pub struct TitleWiring {
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub field: Rc<RefCell<Field>>,
    pub sample_params: SampleParams,
}

/// Hover/click bridge for every interactive title element:
/// enter assembles the element's display text, leave releases the field,
/// click explodes it and schedules the page transition.
pub fn wire_title_handlers(w: TitleWiring) -> anyhow::Result<()> {
    let titles = w
        .document
        .query_selector_all(TITLE_SELECTOR)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    for i in 0..titles.length() {
        let Some(node) = titles.item(i) else { continue };
        let Ok(element) = node.dyn_into::<web::Element>() else {
            continue;
        };

        // mouseenter: sample the glyph cloud and fan it out onto particles
        {
            let element_enter = element.clone();
            let canvas = w.canvas.clone();
            let ctx = w.ctx.clone();
            let field = w.field.clone();
            let params = w.sample_params;
            let closure = Closure::wrap(Box::new(move || {
                // Missing attribute behaves as empty text: zero targets, all floating.
                let text = element_enter
                    .get_attribute(TITLE_TEXT_ATTR)
                    .unwrap_or_default();
                match glyph::sample_text(&ctx, canvas.width(), canvas.height(), &text, &params) {
                    Ok(coords) => {
                        log::info!("[hover] '{}' -> {} glyph points", text, coords.len());
                        field.borrow_mut().assign_targets(&coords);
                    }
                    Err(e) => log::error!("[hover] glyph sampling failed: {e:?}"),
                }
            }) as Box<dyn FnMut()>);
            let _ = element
                .add_event_listener_with_callback("mouseenter", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // mouseleave: back to free float
        {
            let field = w.field.clone();
            let closure = Closure::wrap(Box::new(move || {
                field.borrow_mut().release_targets();
            }) as Box<dyn FnMut()>);
            let _ = element
                .add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // click: explode, then hand off to the page transition after a beat
        {
            let field = w.field.clone();
            let document = w.document.clone();
            let closure = Closure::wrap(Box::new(move || {
                field.borrow_mut().explode_all();
                transition::schedule_slide_out(&document);
            }) as Box<dyn FnMut()>);
            let _ =
                element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
    Ok(())
}
