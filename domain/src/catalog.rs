//! Question catalog
//!
//! An ordered, non-empty list of [`Question`]s played front to back. The
//! built-in [`QuestionSet::supermarket`] catalog holds the five shopping
//! problems the game ships with.

use crate::core::error::DomainError;
use crate::core::question::Question;

/// Ordered list of questions for one play-through
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSet {
    questions: Vec<Question>,
}

impl QuestionSet {
    /// Build a set from questions in play order.
    ///
    /// Fails when the list is empty or two questions share an id.
    pub fn new(questions: Vec<Question>) -> Result<Self, DomainError> {
        if questions.is_empty() {
            return Err(DomainError::EmptyQuestionSet);
        }
        for (i, q) in questions.iter().enumerate() {
            if questions[..i].iter().any(|prev| prev.id() == q.id()) {
                return Err(DomainError::DuplicateQuestionId(q.id()));
            }
        }
        Ok(Self { questions })
    }

    /// The five built-in shopping problems
    ///
    /// Fails on the first malformed entry instead of playing a shorter game.
    pub fn supermarket() -> Result<Self, DomainError> {
        Self::from_entries(supermarket_questions())
    }

    fn from_entries(
        entries: impl IntoIterator<Item = Result<Question, DomainError>>,
    ) -> Result<Self, DomainError> {
        let questions = entries.into_iter().collect::<Result<Vec<_>, _>>()?;
        Self::new(questions)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Index of the final question
    pub fn last_index(&self) -> usize {
        self.questions.len().saturating_sub(1)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    pub fn as_slice(&self) -> &[Question] {
        &self.questions
    }
}

fn supermarket_questions() -> Vec<Result<Question, DomainError>> {
    vec![
        Question::new(
            1,
            "Một túi bánh giá 18 000 đồng và một chai sữa giá 12 000 đồng. \
             Hỏi phải trả tất cả bao nhiêu tiền?",
            ["28 000", "29 000", "30 000", "31 000"],
            "30 000",
        )
        .map(|q| {
            q.with_hint("Hãy cộng 18 000 và 12 000.")
                .with_reward("Xe điều khiển từ xa siêu tốc", "🚗")
        }),
        Question::new(
            2,
            "Một quyển truyện giá 32 000 đồng. Bé đưa 50 000 đồng. \
             Hỏi được trả lại bao nhiêu tiền?",
            ["16 000", "17 000", "18 000", "19 000"],
            "18 000",
        )
        .map(|q| {
            q.with_hint("Lấy 50 000 trừ 32 000.")
                .with_reward("Máy chơi game mini", "🎮")
        }),
        Question::new(
            3,
            "Lan có 60 000 đồng. Lan mua hộp sữa 22 000 đồng và túi bánh 15 000 đồng. \
             Hỏi còn lại bao nhiêu tiền?",
            ["21 000", "22 000", "23 000", "24 000"],
            "23 000",
        )
        .map(|q| {
            q.with_hint(
                "Bước 1: Lấy 22 000 + 15 000. Bước 2: Lấy 60 000 - số tiền vừa tìm được.",
            )
            .with_reward("Gấu bông khổng lồ phát nhạc", "🧸")
        }),
        Question::new(
            4,
            "Nam có 80 000 đồng. Nam mua cặp 45 000 đồng và bút màu 18 000 đồng. \
             Hỏi còn lại bao nhiêu tiền?",
            ["15 000", "16 000", "17 000", "18 000"],
            "17 000",
        )
        .map(|q| {
            q.with_hint("Bước 1: 45 000 + 18 000. Bước 2: 80 000 - số tiền vừa tìm được.")
                .with_reward("Xe scooter phát sáng", "🛴")
        }),
        Question::new(
            5,
            "Mai có 70 000 đồng. Mai mua váy 42 000 đồng và một chiếc nón. \
             Sau khi mua xong còn lại 8 000 đồng. Hỏi chiếc nón giá bao nhiêu tiền?",
            ["18 000", "19 000", "20 000", "21 000"],
            "20 000",
        )
        .map(|q| {
            q.with_hint("Bước 1: 70 000 - 8 000. Bước 2: Lấy số tiền đó - 42 000.")
                .with_reward("Hộp quà bí mật phát sáng", "🎉")
        }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_questions_are_valid() {
        for q in supermarket_questions() {
            assert!(q.is_ok(), "{:?}", q);
        }
        assert!(QuestionSet::supermarket().is_ok());
    }

    #[test]
    fn test_malformed_entry_fails_the_whole_catalog() {
        let entries = vec![
            Question::new(1, "1 + 1?", ["1", "2", "3", "4"], "2"),
            Question::new(2, "2 + 2?", ["1", "2", "3", "5"], "4"),
        ];
        assert!(matches!(
            QuestionSet::from_entries(entries),
            Err(DomainError::InvalidQuestion { id: 2, .. })
        ));
    }

    #[test]
    fn test_duplicate_entry_ids_fail_the_catalog() {
        let entries = vec![
            Question::new(1, "1 + 1?", ["1", "2", "3", "4"], "2"),
            Question::new(1, "2 + 2?", ["1", "2", "3", "4"], "4"),
        ];
        assert_eq!(
            QuestionSet::from_entries(entries),
            Err(DomainError::DuplicateQuestionId(1))
        );
    }

    #[test]
    fn test_supermarket_has_five_questions() {
        let set = QuestionSet::supermarket().unwrap();
        assert_eq!(set.len(), 5);
        assert_eq!(set.last_index(), 4);
        let ids: Vec<u8> = set.iter().map(|q| q.id()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_every_answer_is_an_option() {
        for q in QuestionSet::supermarket().unwrap().iter() {
            assert!(q.options().iter().any(|o| o == q.answer()), "question {}", q.id());
            assert!(!q.hint().is_empty());
            assert!(!q.reward_icon().is_empty());
        }
    }

    #[test]
    fn test_expected_answers() {
        let set = QuestionSet::supermarket().unwrap();
        let answers: Vec<&str> = set.as_slice().iter().map(|q| q.answer()).collect();
        assert_eq!(answers, vec!["30 000", "18 000", "23 000", "17 000", "20 000"]);
    }

    #[test]
    fn test_empty_set_rejected() {
        assert_eq!(QuestionSet::new(vec![]), Err(DomainError::EmptyQuestionSet));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let q = Question::new(1, "?", ["a", "b", "c", "d"], "a").unwrap();
        assert_eq!(
            QuestionSet::new(vec![q.clone(), q]),
            Err(DomainError::DuplicateQuestionId(1))
        );
    }
}
