use std::cell::RefCell;
use std::rc::Rc;

use app_core::{Cursor, Field};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::render;

pub struct FrameContext {
    pub field: Rc<RefCell<Field>>,
    pub cursor: Rc<RefCell<Cursor>>,
    pub ctx: web::CanvasRenderingContext2d,
}

impl FrameContext {
    /// One animation tick: draw the previous tick's positions, then step
    /// the simulation against the current cursor.
    pub fn frame(&mut self) {
        let mut field = self.field.borrow_mut();
        render::draw_field(&self.ctx, &field);
        let cursor = *self.cursor.borrow();
        field.step(&cursor);
    }
}

/// Continuously re-scheduled requestAnimationFrame loop driving all
/// per-frame work.
pub fn run(mut frame_ctx: FrameContext) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
