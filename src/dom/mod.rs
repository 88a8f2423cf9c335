//! Direct DOM Variant
//!
//! Same widget built with raw web-sys calls instead of data binding. The
//! session lives in a `RefCell`; handlers mutate it, release the borrow, and
//! then re-render. Row events are delegated to the list element so rows can
//! be rebuilt freely without re-registering listeners.

mod render;
mod events;

use std::cell::RefCell;
use std::rc::Rc;

use todo_core::TodoSession;
use wasm_bindgen::JsValue;

use crate::config::WidgetConfig;
use crate::storage::LocalStorage;

/// Widget state plus the static nodes it renders into
pub struct DomWidget {
    session: RefCell<TodoSession<LocalStorage>>,
    nodes: render::Nodes,
}

/// Build the widget under `<body>` and wire its events
pub fn mount(config: &WidgetConfig) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;

    let session = TodoSession::open(LocalStorage, config.storage_key.as_str());
    tracing::info!(count = session.list().tasks().len(), "task list restored");

    let nodes = render::skeleton(&document, &body)?;
    let widget = Rc::new(DomWidget {
        session: RefCell::new(session),
        nodes,
    });

    events::bind(&widget)?;
    render::render(&widget)?;
    widget.nodes.new_todo.focus()
}
