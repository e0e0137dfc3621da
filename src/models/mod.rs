/// Data models for the admin panel client.
/// Defines the Entity abstraction plus the Product and User records.

pub mod product;
pub mod user;

pub use product::Product;
pub use user::User;

use crate::error::Result;
use crate::i18n::ScreenLabels;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Input kind of a bound form field, used for coercion and rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    /// Free-text field that may be absent; rendered with a locale-specific
    /// "none" marker when empty.
    OptionalText,
}

/// One editable field of an entity: wire name, input kind, and its label in
/// both locales.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub label: crate::i18n::Label,
}

/// A flat record managed by one screen. Implementations supply the collection
/// endpoint name, id access, the designated filter field, and by-name field
/// binding for the modal form.
pub trait Entity:
    Clone + Default + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// REST collection this entity lives in (`GET /<COLLECTION>` etc).
    const COLLECTION: &'static str;

    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);

    /// Value of the designated field the live filter matches against.
    fn filter_key(&self) -> &str;

    /// Editable fields, in table column order.
    fn fields() -> &'static [FieldSpec];

    /// Screen-level strings for this entity's page.
    fn labels() -> &'static ScreenLabels;

    /// Current value of a field, rendered as text. None for unknown names.
    fn field(&self, name: &str) -> Option<String>;

    /// Overwrite one field of the draft from raw input text. Numeric fields
    /// coerce parse-or-zero. Fails only on unknown field names.
    fn set_field(&mut self, name: &str, input: &str) -> Result<()>;

    /// Adjust a draft immediately before it is POSTed (id hints and the like).
    fn prepare_create(&mut self) {}
}

/// Numeric coercion policy for form input: parse-or-zero. Input that does not
/// parse as a float binds as 0.0.
pub fn coerce_number(input: &str) -> f64 {
    input.trim().parse::<f64>().unwrap_or(0.0)
}
