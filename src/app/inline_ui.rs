use anyhow::{Result, bail};
use indexmap::IndexMap;

use crate::store::ValueSource;

use super::{binding::FieldBinding, options::UiOptions, runtime::App};

/// Terminal UI presenting a column of inline editable fields.
pub struct InlineEditUI {
    title: Option<String>,
    bindings: Vec<FieldBinding>,
    source: Option<Box<dyn ValueSource>>,
    options: UiOptions,
}

impl Default for InlineEditUI {
    fn default() -> Self {
        Self::new()
    }
}

impl InlineEditUI {
    pub fn new() -> Self {
        Self {
            title: None,
            bindings: Vec::new(),
            source: None,
            options: UiOptions::default(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_options(mut self, options: UiOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_field(mut self, binding: FieldBinding) -> Self {
        self.bindings.push(binding);
        self
    }

    pub fn with_fields(mut self, bindings: impl IntoIterator<Item = FieldBinding>) -> Self {
        self.bindings.extend(bindings);
        self
    }

    /// Feeds externally changed values back into the fields while running.
    pub fn with_source(mut self, source: impl ValueSource + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Runs until the user quits and returns the last committed values.
    pub fn run(self) -> Result<IndexMap<String, String>> {
        let InlineEditUI {
            title,
            bindings,
            source,
            options,
        } = self;
        if bindings.is_empty() {
            bail!("no fields to edit");
        }
        tracing::info!(fields = bindings.len(), "starting inline editor");
        let mut app = App::new(title, bindings, source, options);
        app.run()
    }
}
