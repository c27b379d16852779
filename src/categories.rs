use crate::db::{Category, FormattedQuestion};

/// Distinct categories represented in `questions`, in first-seen order.
/// Invoked on a single page of results, so it reflects the current page
/// rather than the whole corpus.
pub fn current_categories(questions: &[FormattedQuestion]) -> Vec<String> {
    let mut current: Vec<String> = Vec::new();
    for question in questions {
        if !current.contains(&question.category) {
            current.push(question.category.clone());
        }
    }
    current
}

/// Projects the category records down to their display names, keeping the
/// store's enumeration order.
pub fn all_category_names(categories: Vec<Category>) -> Vec<String> {
    categories.into_iter().map(|c| c.kind).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: i64, category: &str) -> FormattedQuestion {
        FormattedQuestion {
            id,
            question: format!("Q{id}?"),
            answer: format!("A{id}"),
            difficulty: 1,
            category: category.to_owned(),
        }
    }

    #[test]
    fn deduplicates_preserving_first_seen_order() {
        let questions = vec![
            question(1, "2"),
            question(2, "1"),
            question(3, "2"),
            question(4, "3"),
        ];
        assert_eq!(current_categories(&questions), ["2", "1", "3"]);
    }

    #[test]
    fn empty_page_has_no_categories() {
        assert!(current_categories(&[]).is_empty());
    }

    #[test]
    fn names_keep_store_order() {
        let categories = vec![
            Category {
                id: 1,
                kind: "Science".to_owned(),
            },
            Category {
                id: 2,
                kind: "Art".to_owned(),
            },
        ];
        assert_eq!(all_category_names(categories), ["Science", "Art"]);
    }
}
