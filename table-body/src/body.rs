//! Projection of a collection's body into a `tbody` with grid roles.

use crate::collection::{CellNode, Collection, RowNode};
use crate::markup::{is_attribute_name, Attributes, Markup};

/// Class used on the empty-state cell when none is configured.
pub const EMPTY_WRAPPER_CLASS: &str = "empty-wrapper";

/// Presentation options for the body element.
#[derive(Debug, Clone, Default)]
pub struct BodyOptions {
    /// Base class from the table theme.
    pub slot_class: Option<String>,
    /// Class configured for the body slot by the table's owner.
    pub tbody_class: Option<String>,
    /// Class passed directly to the body.
    pub class_name: Option<String>,
    /// Class for the empty-state cell.
    pub empty_wrapper_class: Option<String>,
    /// Caller attributes; they win over everything else.
    pub attributes: Attributes,
}

/// Render the body rows of `collection`.
///
/// Rows and cells keep the collection's order. An empty collection with an
/// empty-state renderer gets a single row whose cell spans every column.
pub fn render_body(collection: &Collection, options: &BodyOptions) -> Markup {
    let size = collection.size();
    log::debug!("[table] rendering body with {size} row(s)");

    let mut body = Markup::element("tbody")
        .attr("role", "rowgroup")
        .attrs(dom_props(&collection.body.props.attributes).iter())
        .attrs(options.attributes.iter());

    let class = join_classes([
        options.slot_class.as_deref(),
        options.tbody_class.as_deref(),
        options.class_name.as_deref(),
    ]);
    if !class.is_empty() {
        body = body.attr("class", class);
    }
    if size == 0 {
        body = body.attr("data-empty", "true");
    }

    body = body.children(collection.body.rows.iter().map(render_row));

    if size == 0 {
        if let Some(render) = &collection.body.props.render_empty_state {
            let wrapper = options
                .empty_wrapper_class
                .as_deref()
                .unwrap_or(EMPTY_WRAPPER_CLASS);
            body = body.child(
                Markup::element("tr").attr("role", "row").child(
                    Markup::element("td")
                        .attr("role", "gridcell")
                        .attr("class", wrapper)
                        .attr("colspan", collection.column_count.to_string())
                        .child(Markup::text(render())),
                ),
            );
        }
    }

    body
}

fn render_row(row: &RowNode) -> Markup {
    let mut tr = Markup::element("tr")
        .attr("role", "row")
        .attr("data-key", row.key.as_str());
    if row.selected {
        tr = tr.attr("aria-selected", "true").attr("data-selected", "true");
    }
    tr.children(row.cells.iter().map(|cell| render_cell(row, cell)))
}

fn render_cell(row: &RowNode, cell: &CellNode) -> Markup {
    let td = Markup::element("td")
        .attr("role", "gridcell")
        .attr("data-key", cell.key.as_str());

    if !cell.is_selection_cell {
        return td.child(Markup::text(cell.content.as_str()));
    }

    let mut checkbox = Markup::element("input")
        .attr("type", "checkbox")
        .attr("aria-label", "Select");
    if row.selected {
        checkbox = checkbox.attr("checked", "");
    }
    td.attr("data-selection-cell", "true").child(checkbox)
}

/// Props that name or describe the element they sit on.
const LABELABLE_PROPS: &[&str] = &[
    "aria-label",
    "aria-labelledby",
    "aria-describedby",
    "aria-details",
];

/// Keep only attributes that are safe to put on the body element: `id`,
/// `data-*` and the labelling props.
fn dom_props(attributes: &Attributes) -> Attributes {
    attributes
        .iter()
        .filter(|(name, _)| {
            let name = name.as_str();
            let allowed =
                name == "id" || name.starts_with("data-") || LABELABLE_PROPS.contains(&name);
            allowed && is_attribute_name(name)
        })
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

fn join_classes<'a>(classes: impl IntoIterator<Item = Option<&'a str>>) -> String {
    classes
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
