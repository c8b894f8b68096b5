use crate::backend::Product;
use crate::core::error::CatalogError;

/// Products of one search, in the order the search service ranked them,
/// plus the advisor's current pick.
///
/// The item list never changes after construction; a new search builds a
/// new catalog. Only the recommendation pointer moves, and it is always a
/// valid index into `items`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    items: Vec<Product>,
    recommended_index: Option<usize>,
}

impl Catalog {
    pub fn new(items: Vec<Product>) -> Self {
        Self {
            items,
            recommended_index: None,
        }
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Product> {
        self.items.get(index)
    }

    pub fn recommended_index(&self) -> Option<usize> {
        self.recommended_index
    }

    pub fn recommended(&self) -> Option<&Product> {
        self.recommended_index.and_then(|i| self.items.get(i))
    }

    pub fn has_recommendation(&self) -> bool {
        self.recommended_index.is_some()
    }

    /// Whether the product at `index` is the advisor's pick.
    pub fn is_recommended(&self, index: usize) -> bool {
        self.recommended_index == Some(index)
    }

    /// Iterates `(index, product, is_recommended)` in catalog order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, &Product, bool)> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, product)| (i, product, self.is_recommended(i)))
    }

    /// Points the recommendation at `index`, replacing any previous pick.
    /// Leaves the pointer untouched when `index` is out of range.
    pub(crate) fn recommend(&mut self, index: i64) -> Result<usize, CatalogError> {
        let out_of_range = CatalogError::OutOfRange {
            index,
            len: self.items.len(),
        };
        let index = usize::try_from(index).map_err(|_| out_of_range.clone())?;
        if index >= self.items.len() {
            return Err(out_of_range);
        }
        self.recommended_index = Some(index);
        Ok(index)
    }
}
