/// The product and date the user currently has selected.
///
/// Owned by the product picker; the interaction core and the API client
/// treat it as a read-only input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSelection {
    pub product_id: String,
    pub date: String,
}

impl ProductSelection {
    pub fn new(product_id: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            date: date.into(),
        }
    }

    /// The selected date in hyphen-separated `YYYY-MM-DD` form.
    ///
    /// Date pickers deliver slash-separated dates; the query endpoint only
    /// accepts hyphens.
    pub fn normalized_date(&self) -> String {
        self.date.replace('/', "-")
    }

    /// Whether both fields are set and a query can be built.
    pub fn is_complete(&self) -> bool {
        !self.product_id.is_empty() && !self.date.is_empty()
    }
}
