//! DOM Rendering
//!
//! `skeleton` builds the static structure once; `render` rebuilds the rows
//! and refreshes the counters from a snapshot of the session.

use todo_core::{EditSession, Task, VisibilityFilter};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use super::DomWidget;
use crate::components::{filter_class, remaining_label, row_class, row_hidden};

/// Static nodes the renderer writes into
pub struct Nodes {
    pub document: Document,
    pub new_todo: HtmlInputElement,
    pub main: HtmlElement,
    pub toggle_all: HtmlInputElement,
    pub list: Element,
    pub footer: HtmlElement,
    pub count: Element,
    pub filters: Vec<(VisibilityFilter, Element)>,
    pub clear: HtmlElement,
}

fn element(document: &Document, tag: &str, class: &str) -> Result<Element, JsValue> {
    let el = document.create_element(tag)?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    Ok(el)
}

fn input(document: &Document, class: &str) -> Result<HtmlInputElement, JsValue> {
    element(document, "input", class)?
        .dyn_into::<HtmlInputElement>()
        .map_err(JsValue::from)
}

fn html_element(document: &Document, tag: &str, class: &str) -> Result<HtmlElement, JsValue> {
    element(document, tag, class)?
        .dyn_into::<HtmlElement>()
        .map_err(JsValue::from)
}

pub fn skeleton(document: &Document, parent: &Element) -> Result<Nodes, JsValue> {
    let app = element(document, "section", "todoapp")?;

    let header = element(document, "header", "header")?;
    let heading = element(document, "h1", "")?;
    heading.set_text_content(Some("todos"));
    let new_todo = input(document, "new-todo")?;
    new_todo.set_placeholder("What needs to be done?");
    header.append_child(&heading)?;
    header.append_child(&new_todo)?;

    let main = html_element(document, "section", "main")?;
    let toggle_all = input(document, "toggle-all")?;
    toggle_all.set_type("checkbox");
    toggle_all.set_id("toggle-all");
    let toggle_label = element(document, "label", "")?;
    toggle_label.set_attribute("for", "toggle-all")?;
    toggle_label.set_text_content(Some("Mark all as complete"));
    let list = element(document, "ul", "todo-list")?;
    main.append_child(&toggle_all)?;
    main.append_child(&toggle_label)?;
    main.append_child(&list)?;

    let footer = html_element(document, "footer", "footer")?;
    let count = element(document, "span", "todo-count")?;
    let filter_list = element(document, "ul", "filters")?;
    let mut filters = Vec::with_capacity(VisibilityFilter::ALL.len());
    for filter in VisibilityFilter::ALL {
        let item = element(document, "li", "")?;
        let button = element(document, "button", "")?;
        button.set_attribute("type", "button")?;
        button.set_attribute("data-filter", filter.as_str())?;
        button.set_text_content(Some(filter.label()));
        item.append_child(&button)?;
        filter_list.append_child(&item)?;
        filters.push((filter, button));
    }
    let clear = html_element(document, "button", "clear-completed")?;
    clear.set_text_content(Some("Clear completed"));
    footer.append_child(&count)?;
    footer.append_child(&filter_list)?;
    footer.append_child(&clear)?;

    app.append_child(&header)?;
    app.append_child(&main)?;
    app.append_child(&footer)?;
    parent.append_child(&app)?;

    Ok(Nodes {
        document: document.clone(),
        new_todo,
        main,
        toggle_all,
        list,
        footer,
        count,
        filters,
        clear,
    })
}

fn build_row(document: &Document, task: &Task, editing: Option<&EditSession>) -> Result<Element, JsValue> {
    let session = editing.filter(|s| s.task_id == task.id);

    let row = element(document, "li", row_class(task.completed, session.is_some()))?;
    row.set_attribute("data-id", &task.id.to_string())?;

    let (view_hidden, edit_hidden) = row_hidden(session.is_some());
    let view = html_element(document, "div", "view")?;
    view.set_hidden(view_hidden);
    let toggle = input(document, "toggle")?;
    toggle.set_type("checkbox");
    toggle.set_checked(task.completed);
    let label = element(document, "label", "")?;
    label.set_text_content(Some(&task.title));
    let destroy = element(document, "button", "destroy")?;
    view.append_child(&toggle)?;
    view.append_child(&label)?;
    view.append_child(&destroy)?;

    let edit = input(document, "edit")?;
    edit.set_hidden(edit_hidden);
    edit.set_value(session.map_or(task.title.as_str(), |s| s.draft.as_str()));

    row.append_child(&view)?;
    row.append_child(&edit)?;
    Ok(row)
}

/// Rebuild rows and counters from the current session
pub fn render(widget: &DomWidget) -> Result<(), JsValue> {
    // Snapshot first: DOM mutation below can dispatch events that borrow the session.
    let (rows, summary, filter, editing) = {
        let session = widget.session.borrow();
        let list = session.list();
        (list.visible(), list.summary(), list.filter(), list.editing().cloned())
    };
    let nodes = &widget.nodes;

    nodes.list.set_inner_html("");
    for task in &rows {
        let row = build_row(&nodes.document, task, editing.as_ref())?;
        nodes.list.append_child(&row)?;
    }

    nodes.main.set_hidden(summary.total == 0);
    nodes.footer.set_hidden(summary.total == 0);
    nodes.toggle_all.set_checked(summary.all_completed());
    nodes.count.set_text_content(Some(&remaining_label(summary.remaining)));
    for (button_filter, button) in &nodes.filters {
        button.set_class_name(filter_class(*button_filter, filter));
    }
    nodes.clear.set_hidden(summary.completed == 0);

    if editing.is_some() {
        focus_edit_input(&nodes.list)?;
    }
    Ok(())
}

fn focus_edit_input(list: &Element) -> Result<(), JsValue> {
    if let Some(edit) = list.query_selector("li.editing .edit")? {
        edit.dyn_into::<HtmlElement>().map_err(JsValue::from)?.focus()?;
    }
    Ok(())
}

fn set_part_hidden(row: &Element, selector: &str, hidden: bool) -> Result<(), JsValue> {
    if let Some(part) = row.query_selector(selector)? {
        part.dyn_into::<HtmlElement>().map_err(JsValue::from)?.set_hidden(hidden);
    }
    Ok(())
}

/// Drop edit mode on a single row without rebuilding the list
pub fn leave_edit_mode(row: &Element, completed: bool) -> Result<(), JsValue> {
    row.set_class_name(row_class(completed, false));
    let (view_hidden, edit_hidden) = row_hidden(false);
    set_part_hidden(row, ".view", view_hidden)?;
    set_part_hidden(row, ".edit", edit_hidden)
}
