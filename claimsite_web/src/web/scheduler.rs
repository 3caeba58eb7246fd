use std::time::Duration;

use claimsite::timer::{Scheduler, TimerHandle, MIN_PERIOD};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// `window.setTimeout` / `setInterval`. Cancelling clears the browser timer and
/// drops the JS closure.
#[derive(Debug, Clone, Copy, Default)]
pub(super) struct BrowserScheduler;

fn millis(d: Duration) -> i32 {
    d.as_millis().min(i32::MAX as u128) as i32
}

impl Scheduler for BrowserScheduler {
    fn set_timeout(&self, delay: Duration, f: Box<dyn FnOnce()>) -> TimerHandle {
        let Some(window) = web_sys::window() else {
            return TimerHandle::inert();
        };
        let cb = Closure::once(f);

        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            millis(delay),
        ) {
            Ok(id) => TimerHandle::new(move || {
                window.clear_timeout_with_handle(id);
                drop(cb);
            }),
            Err(_) => TimerHandle::inert(),
        }
    }

    fn set_interval(&self, period: Duration, mut f: Box<dyn FnMut()>) -> TimerHandle {
        let Some(window) = web_sys::window() else {
            return TimerHandle::inert();
        };
        let cb = Closure::wrap(Box::new(move || f()) as Box<dyn FnMut()>);

        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            millis(period.max(MIN_PERIOD)),
        ) {
            Ok(id) => TimerHandle::new(move || {
                window.clear_interval_with_handle(id);
                drop(cb);
            }),
            Err(_) => TimerHandle::inert(),
        }
    }
}
