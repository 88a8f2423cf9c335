//! DOM Event Wiring
//!
//! Static controls get one listener each; row controls are delegated to the
//! list element and resolve their task through the row's `data-id`.

use std::rc::Rc;

use todo_core::input::submitted_title;
use todo_core::{DomainResult, KeyIntent, TaskId, TodoSession};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event, EventTarget, HtmlInputElement, KeyboardEvent};

use super::{render, DomWidget};
use crate::storage::LocalStorage;

type Session = TodoSession<LocalStorage>;

fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) -> Result<(), JsValue> {
    let cb = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref::<js_sys::Function>())?;
    // Listeners live as long as the page
    cb.forget();
    Ok(())
}

/// Run `f` against the session, skipping the event if a handler is already running
fn with_session<T>(widget: &DomWidget, f: impl FnOnce(&mut Session) -> T) -> Option<T> {
    match widget.session.try_borrow_mut() {
        Ok(mut session) => Some(f(&mut session)),
        Err(_) => {
            tracing::warn!("session busy, event dropped");
            None
        }
    }
}

fn rerender(widget: &DomWidget) {
    if let Err(err) = render::render(widget) {
        tracing::error!(error = ?err, "render failed");
    }
}

/// Apply a row operation, log a stale id, and re-render
fn row_action(widget: &DomWidget, action: &str, f: impl FnOnce(&mut Session) -> DomainResult<()>) {
    if let Some(Err(err)) = with_session(widget, f) {
        tracing::warn!(error = %err, action, "row action failed");
    }
    rerender(widget);
}

fn event_element(ev: &Event) -> Option<Element> {
    ev.target()?.dyn_into::<Element>().ok()
}

fn row_of(target: &Element) -> Option<(Element, TaskId)> {
    let row = target.closest("li[data-id]").ok().flatten()?;
    let id = row.get_attribute("data-id")?.parse().ok()?;
    Some((row, id))
}

/// Delegated target: the element matching `selector` plus its row
fn delegated(ev: &Event, selector: &str) -> Option<(Element, Element, TaskId)> {
    let target = event_element(ev)?;
    if !target.matches(selector).unwrap_or(false) {
        return None;
    }
    let (row, id) = row_of(&target)?;
    Some((target, row, id))
}

fn key_intent(ev: &Event) -> Option<KeyIntent> {
    let key = ev.dyn_ref::<KeyboardEvent>()?;
    KeyIntent::from_key(&key.key(), key.is_composing())
}

fn input_value(el: &Element) -> Option<String> {
    el.dyn_ref::<HtmlInputElement>().map(|input| input.value())
}

pub fn bind(widget: &Rc<DomWidget>) -> Result<(), JsValue> {
    bind_controls(widget)?;
    bind_rows(widget)
}

fn bind_controls(widget: &Rc<DomWidget>) -> Result<(), JsValue> {
    let nodes = &widget.nodes;

    let w = Rc::clone(widget);
    listen(&nodes.new_todo, "keydown", move |ev| {
        if key_intent(&ev) != Some(KeyIntent::Submit) {
            return;
        }
        let value = w.nodes.new_todo.value();
        let Some(title) = submitted_title(&value) else {
            return;
        };
        if with_session(&w, |session| session.add(title)).is_some() {
            w.nodes.new_todo.set_value("");
            rerender(&w);
        }
    })?;

    let w = Rc::clone(widget);
    listen(&nodes.toggle_all, "change", move |_| {
        with_session(&w, |session| session.toggle_all());
        rerender(&w);
    })?;

    let w = Rc::clone(widget);
    listen(&nodes.clear, "click", move |_| {
        with_session(&w, |session| session.clear_completed());
        rerender(&w);
    })?;

    for (filter, button) in &nodes.filters {
        let w = Rc::clone(widget);
        let filter = *filter;
        listen(button, "click", move |_| {
            tracing::debug!(filter = filter.as_str(), "filter changed");
            with_session(&w, |session| session.set_filter(filter));
            rerender(&w);
        })?;
    }
    Ok(())
}

fn bind_rows(widget: &Rc<DomWidget>) -> Result<(), JsValue> {
    let list = &widget.nodes.list;

    let w = Rc::clone(widget);
    listen(list, "change", move |ev| {
        if let Some((_, _, id)) = delegated(&ev, ".toggle") {
            row_action(&w, "toggle", |session| session.toggle(id));
        }
    })?;

    let w = Rc::clone(widget);
    listen(list, "click", move |ev| {
        if let Some((_, _, id)) = delegated(&ev, ".destroy") {
            row_action(&w, "delete", |session| session.remove(id));
        }
    })?;

    let w = Rc::clone(widget);
    listen(list, "dblclick", move |ev| {
        if let Some((_, _, id)) = delegated(&ev, ".view label") {
            row_action(&w, "edit", |session| session.begin_edit(id));
        }
    })?;

    let w = Rc::clone(widget);
    listen(list, "input", move |ev| {
        if let Some((edit, _, _)) = delegated(&ev, ".edit") {
            if let Some(draft) = input_value(&edit) {
                with_session(&w, |session| session.set_draft(&draft));
            }
        }
    })?;

    let w = Rc::clone(widget);
    listen(list, "keydown", move |ev| {
        let Some((edit, _, _)) = delegated(&ev, ".edit") else {
            return;
        };
        match key_intent(&ev) {
            Some(KeyIntent::Submit) => {
                let draft = input_value(&edit).unwrap_or_default();
                row_action(&w, "commit", |session| {
                    session.set_draft(&draft);
                    session.commit_edit()
                });
            }
            Some(KeyIntent::Cancel) => {
                with_session(&w, |session| session.cancel_edit());
                rerender(&w);
            }
            None => {}
        }
    })?;

    // `blur` does not bubble, so listen for `focusout` on the list instead
    let w = Rc::clone(widget);
    listen(list, "focusout", move |ev| {
        let Some((_, row, id)) = delegated(&ev, ".edit") else {
            return;
        };
        let cancelled = with_session(&w, |session| {
            if !session.list().is_editing(id) {
                return None;
            }
            session.cancel_edit();
            session.list().tasks().iter().find(|t| t.id == id).map(|t| t.completed)
        });
        if let Some(Some(completed)) = cancelled {
            if let Err(err) = render::leave_edit_mode(&row, completed) {
                tracing::error!(error = ?err, "leaving edit mode failed");
            }
        }
    })?;

    Ok(())
}
