//! Catalog browsing: free-text search and scent filtering.

use crate::domain::Product;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    /// Matched against name and description, ignoring case. Empty matches all.
    pub search: String,
    /// Exact scent; `None` means every scent.
    pub scent: Option<String>,
}

impl CatalogFilter {
    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || self.scent.is_some()
    }

    pub fn matches(&self, product: &Product) -> bool {
        let query = self.search.to_lowercase();
        let matches_search = product.name.to_lowercase().contains(&query)
            || product.description.to_lowercase().contains(&query);
        let matches_scent = match self.scent.as_deref() {
            Some(scent) => product.scent == scent,
            None => true,
        };
        matches_search && matches_scent
    }
}

/// Products passing `filter`, in catalog order.
pub fn filter_products<'a>(products: &'a [Product], filter: &CatalogFilter) -> Vec<&'a Product> {
    products.iter().filter(|p| filter.matches(p)).collect()
}

/// Distinct non-blank scents in the order they first appear.
pub fn available_scents(products: &[Product]) -> Vec<&str> {
    let mut scents: Vec<&str> = Vec::new();
    for product in products {
        let scent = product.scent.as_str();
        if !scent.trim().is_empty() && !scents.contains(&scent) {
            scents.push(scent);
        }
    }
    scents
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Money;

    fn catalog() -> Vec<Product> {
        vec![
            Product::new(1, "Sandalwood Sticks", Money::from_paise(29900))
                .with_scent("Woody")
                .with_description("Slow burning, 40 sticks"),
            Product::new(2, "Rose Cones", Money::from_paise(19900))
                .with_scent("Floral")
                .with_description("Hand rolled in Kannauj"),
            Product::new(3, "Oud Dhoop", Money::from_paise(45000))
                .with_scent("Woody"),
            Product::new(4, "Sampler", Money::from_paise(59900)).with_scent("  "),
        ]
    }

    fn ids(products: Vec<&Product>) -> Vec<u64> {
        products.into_iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let products = catalog();
        let filter = CatalogFilter::default();
        assert!(!filter.is_active());
        assert_eq!(ids(filter_products(&products, &filter)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_search_covers_name_and_description() {
        let products = catalog();
        let by_name = CatalogFilter {
            search: "ROSE".to_string(),
            scent: None,
        };
        assert_eq!(ids(filter_products(&products, &by_name)), vec![2]);

        let by_description = CatalogFilter {
            search: "kannauj".to_string(),
            scent: None,
        };
        assert_eq!(ids(filter_products(&products, &by_description)), vec![2]);
    }

    #[test]
    fn test_scent_is_exact() {
        let products = catalog();
        let woody = CatalogFilter {
            search: String::new(),
            scent: Some("Woody".to_string()),
        };
        assert_eq!(ids(filter_products(&products, &woody)), vec![1, 3]);

        let lowercase = CatalogFilter {
            search: String::new(),
            scent: Some("woody".to_string()),
        };
        assert!(filter_products(&products, &lowercase).is_empty());
    }

    #[test]
    fn test_search_and_scent_combine() {
        let products = catalog();
        let filter = CatalogFilter {
            search: "dhoop".to_string(),
            scent: Some("Woody".to_string()),
        };
        assert!(filter.is_active());
        assert_eq!(ids(filter_products(&products, &filter)), vec![3]);
    }

    #[test]
    fn test_available_scents_dedupes_and_skips_blank() {
        assert_eq!(available_scents(&catalog()), vec!["Woody", "Floral"]);
    }
}
