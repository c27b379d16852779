use crate::db::Question;

/// Case-insensitive substring filter over the question text, order
/// preserving. An empty term matches every question.
pub fn filter_questions(term: &str, questions: Vec<Question>) -> Vec<Question> {
    let needle = term.to_lowercase();
    questions
        .into_iter()
        .filter(|q| q.question.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: i64, text: &str) -> Question {
        Question {
            id,
            question: text.to_owned(),
            answer: "A".to_owned(),
            difficulty: 1,
            category: 1,
        }
    }

    #[test]
    fn matching_is_case_insensitive() {
        let questions = vec![question(1, "What is Q1?")];
        let found = filter_questions("q1", questions);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 1);
    }

    #[test]
    fn empty_term_matches_everything() {
        let questions = vec![question(1, "one"), question(2, "two")];
        assert_eq!(filter_questions("", questions).len(), 2);
    }

    #[test]
    fn non_matching_questions_are_dropped_and_order_kept() {
        let questions = vec![
            question(1, "Largest lake?"),
            question(2, "Tallest peak?"),
            question(3, "Deepest lake?"),
        ];
        let found = filter_questions("LAKE", questions);
        let ids: Vec<i64> = found.iter().map(|q| q.id).collect();
        assert_eq!(ids, [1, 3]);
    }
}
