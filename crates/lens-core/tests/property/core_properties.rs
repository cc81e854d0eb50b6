//! Property tests for lens-core: authority derivation and ranking weights.

use proptest::prelude::*;

use lens_core::model::*;

fn question_with(status: QuestionStatus, priority: Priority) -> Node {
    Node::new(
        "q",
        NodeAttributes::Question(QuestionAttributes {
            text: "open question".into(),
            status,
            priority,
            answer: None,
            answered_by: None,
            superseded_by: None,
        }),
    )
}

fn status_strategy() -> impl Strategy<Value = QuestionStatus> {
    prop_oneof![Just(QuestionStatus::Pending), Just(QuestionStatus::Answered)]
}

fn priority_strategy() -> impl Strategy<Value = Priority> {
    prop_oneof![
        Just(Priority::Critical),
        Just(Priority::High),
        Just(Priority::Medium),
        Just(Priority::Low),
    ]
}

proptest! {
    /// Authority tracks status through any sequence of status changes.
    #[test]
    fn authority_follows_latest_status(
        statuses in prop::collection::vec(status_strategy(), 1..20),
        priority in priority_strategy(),
    ) {
        let mut node = question_with(QuestionStatus::Pending, priority);
        for status in &statuses {
            if let NodeAttributes::Question(q) = &mut node.attributes {
                q.status = *status;
            }
        }
        let expected = match statuses.last() {
            Some(QuestionStatus::Answered) => AuthorityLevel::AnsweredQuestion,
            _ => AuthorityLevel::PendingQuestion,
        };
        prop_assert_eq!(node.authority(), expected);
    }

    /// Rank round-trips for every level.
    #[test]
    fn authority_rank_roundtrip(rank in 1u8..=7) {
        let level = AuthorityLevel::from_rank(rank).unwrap();
        prop_assert_eq!(level.rank(), rank);
    }
}
