use serde::{Deserialize, Serialize};

/// Server-side pagination envelope.
///
/// Unknown envelope fields (sort metadata, first/last markers) are ignored on
/// decode; the client only consumes what it renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: i64,
    pub total_pages: i32,
    /// Zero-based page index.
    pub number: i32,
    pub size: i32,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn has_next(&self) -> bool {
        self.number + 1 < self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn page_decodes_and_paginates() {
        let body = json!({
            "content": ["a", "b"],
            "totalElements": 5,
            "totalPages": 3,
            "number": 1,
            "size": 2,
            "last": false
        });

        let page: Page<String> = serde_json::from_value(body).unwrap();
        assert_eq!(page.content, vec!["a", "b"]);
        assert!(page.has_next());
        assert!(!page.is_empty());
    }

    #[test]
    fn last_page_has_no_next() {
        let page = Page {
            content: vec![1u32],
            total_elements: 5,
            total_pages: 3,
            number: 2,
            size: 2,
        };
        assert!(!page.has_next());
    }
}
