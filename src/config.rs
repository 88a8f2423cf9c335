//! Widget Configuration
//!
//! Read from `data-*` attributes on `<body>`:
//! `data-storage-key` selects the storage slot, `data-variant` picks the renderer.

use todo_core::DEFAULT_STORAGE_KEY;

/// Which front end to mount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Leptos data binding
    #[default]
    Bound,
    /// Hand-written DOM manipulation
    Dom,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Bound => "bound",
            Variant::Dom => "dom",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.trim() {
            "dom" => Variant::Dom,
            _ => Variant::Bound,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    pub storage_key: String,
    pub variant: Variant,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            variant: Variant::default(),
        }
    }
}

impl WidgetConfig {
    pub fn from_attributes(storage_key: Option<String>, variant: Option<String>) -> Self {
        let storage_key = storage_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_string());
        let variant = variant.as_deref().map(Variant::from_str).unwrap_or_default();
        Self { storage_key, variant }
    }

    pub fn from_body() -> Self {
        let body = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.body());

        match body {
            Some(body) => Self::from_attributes(
                body.get_attribute("data-storage-key"),
                body.get_attribute("data-variant"),
            ),
            None => {
                tracing::warn!("no <body> found, using default widget config");
                Self::default()
            }
        }
    }
}
