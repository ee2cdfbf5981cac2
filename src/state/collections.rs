#[cfg(test)]
#[path = "collections_test.rs"]
mod collections_test;

/// Rejections raised by compare-list mutations. The `Display` text is the
/// warning shown to the shopper.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    #[error("Product is already in comparison list!")]
    AlreadyPresent,
    #[error("You can compare up to {limit} products at once!")]
    LimitReached { limit: usize },
}

/// Compare list, cart items and favorites.
///
/// The compare list is unique and bounded; cart and favorites accept
/// duplicates. Fields are private so every change goes through a mutator.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Collections {
    compare: Vec<String>,
    cart: Vec<String>,
    favorites: Vec<String>,
}

impl Collections {
    /// Rebuild from persisted lists.
    ///
    /// Stored data is not trusted: the compare list keeps the first
    /// occurrence of each id and at most `compare_limit` entries.
    pub fn from_persisted(compare: Vec<String>, cart: Vec<String>, favorites: Vec<String>, compare_limit: usize) -> Self {
        let mut unique: Vec<String> = Vec::with_capacity(compare.len().min(compare_limit));
        for id in compare {
            if unique.len() == compare_limit {
                break;
            }
            if !unique.contains(&id) {
                unique.push(id);
            }
        }
        Self { compare: unique, cart, favorites }
    }

    pub fn compare(&self) -> &[String] {
        &self.compare
    }

    pub fn cart(&self) -> &[String] {
        &self.cart
    }

    pub fn favorites(&self) -> &[String] {
        &self.favorites
    }

    // =========================================================================
    // COMPARE
    // =========================================================================

    /// Append `id` unless it is already listed or the list holds `limit` ids.
    ///
    /// # Errors
    ///
    /// [`ListError::AlreadyPresent`] or [`ListError::LimitReached`]; the
    /// list is untouched in both cases.
    pub fn add_to_compare(&mut self, id: &str, limit: usize) -> Result<(), ListError> {
        if self.compare.iter().any(|existing| existing == id) {
            return Err(ListError::AlreadyPresent);
        }
        if self.compare.len() >= limit {
            return Err(ListError::LimitReached { limit });
        }
        self.compare.push(id.to_owned());
        Ok(())
    }

    /// Returns whether `id` was listed.
    pub fn remove_from_compare(&mut self, id: &str) -> bool {
        remove_first(&mut self.compare, id)
    }

    // =========================================================================
    // CART
    // =========================================================================

    pub fn add_to_cart(&mut self, id: &str) {
        self.cart.push(id.to_owned());
    }

    /// Removes one occurrence. Returns whether `id` was in the cart.
    pub fn remove_from_cart(&mut self, id: &str) -> bool {
        remove_first(&mut self.cart, id)
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    // =========================================================================
    // FAVORITES
    // =========================================================================

    pub fn add_to_favorites(&mut self, id: &str) {
        self.favorites.push(id.to_owned());
    }

    /// Removes one occurrence. Returns whether `id` was a favorite.
    pub fn remove_favorite(&mut self, id: &str) -> bool {
        remove_first(&mut self.favorites, id)
    }

    pub fn clear_favorites(&mut self) {
        self.favorites.clear();
    }
}

fn remove_first(list: &mut Vec<String>, id: &str) -> bool {
    match list.iter().position(|existing| existing == id) {
        Some(index) => {
            list.remove(index);
            true
        }
        None => false,
    }
}
