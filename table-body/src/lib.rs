pub mod body;
pub mod collection;
pub mod markup;

pub use body::{render_body, BodyOptions, EMPTY_WRAPPER_CLASS};
pub use collection::{BodyNode, BodyProps, CellNode, Collection, RowNode};
pub use markup::{is_attribute_name, Attributes, Markup};
