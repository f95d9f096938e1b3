//! Business categories and their sub-categories.

use serde::{Deserialize, Serialize};

use crate::domain::common::validation::require;
use crate::domain::common::{
    Collection, Entity, IdGenerator, RecordId, ValidationError, ValidationResult,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubCategory {
    pub id: RecordId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: RecordId,
    pub name: String,
    #[serde(rename = "subCategories")]
    pub sub_categories: Vec<SubCategory>,
}

impl Category {
    pub fn has_sub_category(&self, name: &str) -> bool {
        self.sub_categories
            .iter()
            .any(|s| s.name.eq_ignore_ascii_case(name.trim()))
    }
}

impl Entity for Category {
    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn element_name() -> &'static str {
        "Category"
    }

    fn list_name() -> &'static str {
        "Categories"
    }
}

/// Category tree edited from the businesses page.
///
/// Names are unique case-insensitively: among categories, and among the
/// sub-categories of one category.
#[derive(Debug, Clone)]
pub struct CategoryCatalog {
    categories: Collection<Category>,
    sub_ids: IdGenerator,
}

impl CategoryCatalog {
    pub fn from_seed(categories: Vec<Category>) -> Self {
        let max_sub = categories
            .iter()
            .flat_map(|c| c.sub_categories.iter().map(|s| s.id))
            .max()
            .unwrap_or_default();
        Self {
            categories: Collection::from_seed(categories),
            sub_ids: IdGenerator::after(max_sub),
        }
    }

    pub fn categories(&self) -> &[Category] {
        self.categories.items()
    }

    pub fn get(&self, id: RecordId) -> Option<&Category> {
        self.categories.get(id)
    }

    pub fn names(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.name.clone()).collect()
    }

    /// Sub-category names of the category called `category`.
    pub fn sub_category_names(&self, category: &str) -> Vec<String> {
        self.categories
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(category.trim()))
            .map(|c| c.sub_categories.iter().map(|s| s.name.clone()).collect())
            .unwrap_or_default()
    }

    pub fn add_category(&mut self, name: &str) -> ValidationResult<RecordId> {
        require("Category name", name)?;
        let name = name.trim();
        self.ensure_unique_category(name, None)?;
        Ok(self.categories.insert(Category {
            id: RecordId::default(),
            name: name.to_string(),
            sub_categories: Vec::new(),
        }))
    }

    pub fn rename_category(&mut self, id: RecordId, name: &str) -> ValidationResult {
        require("Category name", name)?;
        let name = name.trim();
        self.ensure_unique_category(name, Some(id))?;
        self.categories.modify(id, |c| c.name = name.to_string())
    }

    pub fn remove_category(&mut self, id: RecordId) -> ValidationResult<Category> {
        self.categories.remove(id).ok_or(ValidationError::NotFound {
            kind: Category::element_name(),
            id,
        })
    }

    pub fn add_sub_category(&mut self, category_id: RecordId, name: &str) -> ValidationResult<RecordId> {
        require("Sub-category name", name)?;
        let name = name.trim();
        let sub_ids = &mut self.sub_ids;
        let mut added = RecordId::default();
        // The id is drawn only once the name is known to be free.
        self.categories.try_modify(category_id, |c| {
            if c.has_sub_category(name) {
                return Err(ValidationError::Duplicate {
                    kind: "Sub-category",
                    name: name.to_string(),
                });
            }
            added = sub_ids.next();
            c.sub_categories.push(SubCategory {
                id: added,
                name: name.to_string(),
            });
            Ok(())
        })?;
        Ok(added)
    }

    pub fn remove_sub_category(&mut self, category_id: RecordId, sub_id: RecordId) -> ValidationResult {
        self.categories.try_modify(category_id, |c| {
            let before = c.sub_categories.len();
            c.sub_categories.retain(|s| s.id != sub_id);
            if c.sub_categories.len() == before {
                return Err(ValidationError::NotFound {
                    kind: "Sub-category",
                    id: sub_id,
                });
            }
            Ok(())
        })
    }

    fn ensure_unique_category(&self, name: &str, except: Option<RecordId>) -> ValidationResult {
        let taken = self
            .categories
            .iter()
            .any(|c| Some(c.id) != except && c.name.eq_ignore_ascii_case(name));
        if taken {
            return Err(ValidationError::Duplicate {
                kind: "Category",
                name: name.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::seed;
    use super::*;

    fn catalog() -> CategoryCatalog {
        CategoryCatalog::from_seed(seed::categories())
    }

    #[test]
    fn test_add_category_appends_exactly_one() {
        let mut cat = catalog();
        let before = cat.categories().len();
        let id = cat.add_category("  Handicrafts ").unwrap();
        assert_eq!(cat.categories().len(), before + 1);
        assert_eq!(cat.get(id).map(|c| c.name.as_str()), Some("Handicrafts"));
    }

    #[test]
    fn test_add_category_rejects_blank_and_duplicates() {
        let mut cat = catalog();
        let before = cat.categories().len();
        assert_eq!(
            cat.add_category("  "),
            Err(ValidationError::Required { field: "Category name" })
        );
        let existing = cat.categories()[0].name.to_uppercase();
        assert!(matches!(
            cat.add_category(&existing),
            Err(ValidationError::Duplicate { .. })
        ));
        assert_eq!(cat.categories().len(), before);
    }

    #[test]
    fn test_rename_to_own_name_is_allowed() {
        let mut cat = catalog();
        let first = cat.categories()[0].clone();
        cat.rename_category(first.id, &first.name.to_lowercase()).unwrap();
        let second = cat.categories()[1].name.clone();
        assert!(cat.rename_category(first.id, &second).is_err());
    }

    #[test]
    fn test_sub_categories() {
        let mut cat = catalog();
        let cid = cat.categories()[0].id;
        let sid = cat.add_sub_category(cid, "Organic").unwrap();
        assert!(cat.get(cid).unwrap().has_sub_category("organic"));
        assert!(cat.add_sub_category(cid, "ORGANIC").is_err());
        assert!(cat.add_sub_category(RecordId(9999), "Organic").is_err());

        cat.remove_sub_category(cid, sid).unwrap();
        assert!(!cat.get(cid).unwrap().has_sub_category("organic"));
        assert!(cat.remove_sub_category(cid, sid).is_err());
    }

    #[test]
    fn test_sub_category_ids_are_unique_across_catalog() {
        let mut cat = catalog();
        let a = cat.categories()[0].id;
        let b = cat.categories()[1].id;
        let s1 = cat.add_sub_category(a, "One").unwrap();
        let s2 = cat.add_sub_category(b, "Two").unwrap();
        assert_ne!(s1, s2);
        let all: Vec<RecordId> = cat
            .categories()
            .iter()
            .flat_map(|c| c.sub_categories.iter().map(|s| s.id))
            .collect();
        let mut dedup = all.clone();
        dedup.sort();
        dedup.dedup();
        assert_eq!(all.len(), dedup.len());
    }

    #[test]
    fn test_remove_category() {
        let mut cat = catalog();
        let id = cat.categories()[0].id;
        let removed = cat.remove_category(id).unwrap();
        assert_eq!(removed.id, id);
        assert!(cat.remove_category(id).is_err());
    }

    #[test]
    fn test_sub_category_names_lookup() {
        let cat = catalog();
        let first = &cat.categories()[0];
        assert_eq!(
            cat.sub_category_names(&first.name).len(),
            first.sub_categories.len()
        );
        assert!(cat.sub_category_names("Nope").is_empty());
    }

    #[test]
    fn test_rejected_sub_category_keeps_next_id() {
        // A floor far ahead of the clock makes every new id `last + 1`.
        let floor = RecordId(i64::MAX / 2);
        let mut cat = CategoryCatalog::from_seed(vec![Category {
            id: RecordId(1),
            name: "Retail".to_string(),
            sub_categories: vec![SubCategory {
                id: floor,
                name: "Grocery".to_string(),
            }],
        }]);

        assert!(matches!(
            cat.add_sub_category(RecordId(1), "grocery"),
            Err(ValidationError::Duplicate { .. })
        ));
        assert!(matches!(
            cat.add_sub_category(RecordId(99), "Bakery"),
            Err(ValidationError::NotFound { .. })
        ));
        assert!(cat.add_sub_category(RecordId(1), " ").is_err());

        assert_eq!(
            cat.add_sub_category(RecordId(1), "Bakery"),
            Ok(RecordId(floor.0 + 1))
        );
    }
}
