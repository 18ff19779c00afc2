use crate::formats::Category;

#[derive(Debug, Clone)]
pub struct CategoryRegistry {
    categories: Vec<Category>,
}

impl CategoryRegistry {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn content_labels() -> Self {
        Self::new(vec![
            category(1, "content", ""),
            category(2, "author", "article"),
            category(3, "column", "article"),
            category(4, "content_title", "article"),
        ])
    }

    pub fn article_labels() -> Self {
        Self::new(vec![
            category(1, "article", ""),
            category(2, "author", "article"),
            category(3, "column", "article"),
            category(4, "title", "article"),
        ])
    }

    // Exact match, declaration order, first hit wins.
    pub fn resolve(&self, label: &str) -> Option<u32> {
        self.categories
            .iter()
            .find(|category| category.name == label)
            .map(|category| category.id)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }
}

fn category(id: u32, name: &str, supercategory: &str) -> Category {
    Category {
        id,
        name: name.to_owned(),
        supercategory: supercategory.to_owned(),
    }
}
