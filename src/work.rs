//! The museum-work record.

use crate::form::FieldValues;

/// A registered museum work.
///
/// An opaque record of the form's accepted raw values: built once from a
/// validated [`FieldValues`] and never mutated afterwards. The `type` field
/// of the form is `kind` here (reserved word) and maps back to `"type"`
/// under serde.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Work {
    /// Name of the work.
    pub name: String,
    /// Name of the author.
    pub author: String,
    /// Year the work was released, as entered.
    #[cfg_attr(feature = "serde", serde(rename = "releaseYear"))]
    pub release_year: String,
    /// Artistic period.
    pub period: String,
    /// Kind of work (painting, sculpture, ...).
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: String,
    /// Free-form details.
    pub details: String,
}

impl Work {
    /// Build a work from a validated value mapping.
    ///
    /// Fields the mapping does not carry read as empty strings; the
    /// registration form always declares all six.
    ///
    /// # Example
    ///
    /// ```rust
    /// use acervo::form::FieldValues;
    /// use acervo::work::Work;
    ///
    /// let values: FieldValues = [
    ///     ("name", "Abaporu"),
    ///     ("author", "Tarsila do Amaral"),
    ///     ("releaseYear", "1928"),
    ///     ("period", "Modernismo"),
    ///     ("type", "Pintura"),
    ///     ("details", "Óleo sobre tela"),
    /// ]
    /// .into_iter()
    /// .collect();
    ///
    /// let work = Work::from_values(&values);
    /// assert_eq!(work.name, "Abaporu");
    /// assert_eq!(work.kind, "Pintura");
    /// ```
    pub fn from_values(values: &FieldValues) -> Self {
        let field = |name: &str| values.get(name).unwrap_or_default().to_string();

        Work {
            name: field("name"),
            author: field("author"),
            release_year: field("releaseYear"),
            period: field("period"),
            kind: field("type"),
            details: field("details"),
        }
    }
}
