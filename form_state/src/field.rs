use serde_json::Value;

/// Input flavour of a field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldKind {
    #[default]
    Text,
    Number,
}

impl FieldKind {
    #[must_use]
    pub const fn input_type(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
        }
    }
}

/// Declarative description of one controlled input.
///
/// `M` is whatever the owning screen wants back from an edit, usually its
/// own edit message type.
pub struct FieldConfig<'a, M> {
    pub label: String,
    pub value: Value,
    pub error: bool,
    pub helper_text: Option<String>,
    pub kind: FieldKind,
    pub rows: Option<u16>,
    pub class_name: Option<String>,
    on_change: Box<dyn Fn(String) -> M + 'a>,
}

impl<'a, M> FieldConfig<'a, M> {
    pub fn new(
        label: impl Into<String>,
        value: impl Into<Value>,
        on_change: impl Fn(String) -> M + 'a,
    ) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            error: false,
            helper_text: None,
            kind: FieldKind::Text,
            rows: None,
            class_name: None,
            on_change: Box::new(on_change),
        }
    }

    /// Flags the field and shows `message` under it, if there is one.
    #[must_use]
    pub fn error(mut self, message: Option<&String>) -> Self {
        self.error = message.is_some();
        self.helper_text = message.cloned();
        self
    }

    #[must_use]
    pub fn number(mut self) -> Self {
        self.kind = FieldKind::Number;
        self
    }

    #[must_use]
    pub fn rows(mut self, rows: u16) -> Self {
        self.rows = Some(rows);
        self
    }

    #[must_use]
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }
}

impl<M> std::fmt::Debug for FieldConfig<'_, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldConfig")
            .field("label", &self.label)
            .field("value", &self.value)
            .field("error", &self.error)
            .field("helper_text", &self.helper_text)
            .field("kind", &self.kind)
            .field("rows", &self.rows)
            .field("class_name", &self.class_name)
            .finish_non_exhaustive()
    }
}

/// What an input shows for a given configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedField {
    pub label: String,
    pub value: String,
    pub error: bool,
    pub helper_text: Option<String>,
    pub multiline: bool,
    pub rows: Option<u16>,
    pub input_type: &'static str,
    pub class_name: Option<String>,
}

/// A bound input: renders from its configuration and turns raw input
/// back into the caller's edit message.
#[derive(Debug)]
pub struct Field<'a, M> {
    config: FieldConfig<'a, M>,
}

/// Binds a field configuration.
#[must_use]
pub fn field<M>(config: FieldConfig<'_, M>) -> Field<'_, M> {
    Field { config }
}

impl<M> Field<'_, M> {
    #[must_use]
    pub fn label(&self) -> &str {
        &self.config.label
    }

    #[must_use]
    pub fn render(&self) -> RenderedField {
        let c = &self.config;

        RenderedField {
            label: c.label.clone(),
            value: display_value(&c.value),
            error: c.error,
            helper_text: c.helper_text.clone(),
            multiline: c.rows.is_some_and(|rows| rows > 0),
            rows: c.rows,
            input_type: c.kind.input_type(),
            class_name: c.class_name.clone(),
        }
    }

    /// Feeds a raw input string to the change handler.
    pub fn input(&self, raw: impl Into<String>) -> M {
        (self.config.on_change)(raw.into())
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
