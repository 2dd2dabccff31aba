//! # Formwork - Schema-Driven Form and Table Engines
//!
//! **Formwork** turns declarative schemas into interactive, validated UI
//! state. It powers admin-console pages with two independent, structurally
//! parallel engines:
//!
//! - [`FormEngine`](form::FormEngine) interprets a [`FormSchema`](schema::FormSchema)
//!   — typed field descriptors, a layout tree, validation rules, and
//!   visibility conditions — into value/error state and a render model the
//!   host UI paints.
//! - [`TableEngine`](table::TableEngine) interprets column declarations plus
//!   a caller-supplied row array into a sortable, filterable, paginated
//!   table view, holding the sort/filter/search rule state and echoing every
//!   change back to the owning page through callbacks.
//!
//! Neither engine performs I/O. Network fetching, routing, and styling stay
//! with the caller; the engines only emit already-collected, already-validated
//! state. The [`query`] module bridges the table's rule model to a backend
//! filter grammar (`contains(name,'foo') and age ge '21'`) with a serializer
//! and a typed parser.
//!
//! ## Quick start
//!
//! ```
//! use formwork::prelude::*;
//!
//! let schema = FormSchema::new("contact")
//!     .field(FieldNode::new("email", "Email", Renderer::Text).rules(FieldRules {
//!         required: Some(RequiredRule::Flag(true)),
//!         ..FieldRules::default()
//!     }))
//!     .field(FieldNode::new("newsletter", "Subscribe to updates", Renderer::Checkbox))
//!     .layout(vec![LayoutNode::stack(vec![
//!         LayoutNode::field("email"),
//!         LayoutNode::field("newsletter"),
//!     ])]);
//!
//! let mut form = FormEngine::new(schema);
//! form.change("email", FieldInput::Text("ops@example.com".into()));
//!
//! let payload = form.submit().expect("form is valid");
//! assert_eq!(payload.get("email"), Some(&Value::text("ops@example.com")));
//! ```
//!
//! Schemas usually arrive as JSON from page code; every schema type except
//! the custom-validator closure deserializes from the camelCase wire form.

pub mod error;
pub mod form;
pub mod prelude;
pub mod query;
pub mod schema;
pub mod table;
pub mod value;
