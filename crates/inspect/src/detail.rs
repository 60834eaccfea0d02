use serde::Serialize;

/// One labelled value inside a [`DetailGroup`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DetailItem {
    pub label: String,
    pub value: String,
    /// Set on pattern-support entries for supported patterns.
    pub important: bool,
}

impl DetailItem {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self { label: label.into(), value: value.into(), important: false }
    }

    pub fn important(mut self, important: bool) -> Self {
        self.important = important;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DetailGroup {
    pub name: String,
    pub items: Vec<DetailItem>,
}

impl DetailGroup {
    pub fn new(name: impl Into<String>, items: Vec<DetailItem>) -> Self {
        Self { name: name.into(), items }
    }

    pub fn item(&self, label: &str) -> Option<&DetailItem> {
        self.items.iter().find(|item| item.label == label)
    }

    /// Rendered value of the entry labelled `label`.
    pub fn value(&self, label: &str) -> Option<&str> {
        self.item(label).map(|item| item.value.as_str())
    }
}
