use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::schema::SelectOption;
use crate::value::Value;

/// Row access by column id. The table never assumes a row layout beyond
/// this; a missing column reads as [`Value::Null`].
pub trait RowData {
    fn cell(&self, column_id: &str) -> Value;
}

/// JSON objects work as rows out of the box.
impl RowData for serde_json::Value {
    fn cell(&self, column_id: &str) -> Value {
        self.get(column_id).map_or(Value::Null, Value::from_json)
    }
}

/// Horizontal alignment of a column's cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Which editor input a filterable column offers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterInput {
    #[default]
    Text,
    Dropdown(Vec<SelectOption>),
}

/// Custom cell presentation: receives the raw cell value and the whole row.
pub type CellRenderer<T> = Arc<dyn Fn(&Value, &T) -> String + Send + Sync>;

/// Custom header presentation: receives the column declaration.
pub type HeaderRenderer<T> = Arc<dyn Fn(&Column<T>) -> String + Send + Sync>;

/// One table column declaration.
pub struct Column<T> {
    /// Key into the row type.
    pub id: String,
    pub caption: String,
    /// Width hint in pixels.
    pub size: Option<u32>,
    pub align: Align,
    pub hide: bool,
    pub sortable: bool,
    pub filterable: bool,
    pub filter_input: FilterInput,
    pub render_cell: Option<CellRenderer<T>>,
    pub render_header: Option<HeaderRenderer<T>>,
}

impl<T> Column<T> {
    pub fn new(id: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            caption: caption.into(),
            size: None,
            align: Align::default(),
            hide: false,
            sortable: false,
            filterable: false,
            filter_input: FilterInput::default(),
            render_cell: None,
            render_header: None,
        }
    }

    pub fn size(mut self, px: u32) -> Self {
        self.size = Some(px);
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hide = true;
        self
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn filterable(mut self) -> Self {
        self.filterable = true;
        self
    }

    /// Marks the column filterable with a dropdown of preset choices instead
    /// of free text.
    pub fn filter_dropdown(mut self, options: Vec<SelectOption>) -> Self {
        self.filterable = true;
        self.filter_input = FilterInput::Dropdown(options);
        self
    }

    pub fn render_cell(mut self, f: impl Fn(&Value, &T) -> String + Send + Sync + 'static) -> Self {
        self.render_cell = Some(Arc::new(f));
        self
    }

    pub fn render_header(mut self, f: impl Fn(&Column<T>) -> String + Send + Sync + 'static) -> Self {
        self.render_header = Some(Arc::new(f));
        self
    }
}
