//! Table collection model.
//!
//! Built by the caller (or a table behavior layer) and only read here.

use std::fmt;
use std::rc::Rc;

use crate::markup::Attributes;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellNode {
    pub key: String,
    pub content: String,
    /// Cell holding the row's selection checkbox.
    pub is_selection_cell: bool,
}

impl CellNode {
    pub fn new(key: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            content: content.into(),
            is_selection_cell: false,
        }
    }

    pub fn selection(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            content: String::new(),
            is_selection_cell: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowNode {
    pub key: String,
    pub cells: Vec<CellNode>,
    pub selected: bool,
}

impl RowNode {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            cells: Vec::new(),
            selected: false,
        }
    }

    pub fn cell(mut self, cell: CellNode) -> Self {
        self.cells.push(cell);
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

/// Props given to the table body by its author.
#[derive(Clone, Default)]
pub struct BodyProps {
    /// Renders the content shown when the collection has no rows.
    pub render_empty_state: Option<Rc<dyn Fn() -> String>>,
    /// Arbitrary attributes; only DOM-safe ones reach the markup.
    pub attributes: Attributes,
}

impl fmt::Debug for BodyProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BodyProps")
            .field("render_empty_state", &self.render_empty_state.is_some())
            .field("attributes", &self.attributes)
            .finish()
    }
}

#[derive(Debug, Clone, Default)]
pub struct BodyNode {
    pub rows: Vec<RowNode>,
    pub props: BodyProps,
}

#[derive(Debug, Clone, Default)]
pub struct Collection {
    pub body: BodyNode,
    pub column_count: usize,
}

impl Collection {
    pub fn new(column_count: usize) -> Self {
        Self {
            column_count,
            ..Default::default()
        }
    }

    pub fn row(mut self, row: RowNode) -> Self {
        self.body.rows.push(row);
        self
    }

    pub fn empty_state(mut self, render: impl Fn() -> String + 'static) -> Self {
        self.body.props.render_empty_state = Some(Rc::new(render));
        self
    }

    pub fn body_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.body.props.attributes.insert(name.into(), value.into());
        self
    }

    /// Number of body rows.
    pub fn size(&self) -> usize {
        self.body.rows.len()
    }
}
