use super::*;

fn team(status: VivaTeamStatus) -> VivaTeam {
    VivaTeam { id: 1, student_number: "24001234".to_owned(), status, ..VivaTeam::default() }
}

#[test]
fn lifecycle_actions() {
    assert_eq!(
        team(VivaTeamStatus::Proposed).row_actions(),
        vec![RowAction::Edit, RowAction::Approve, RowAction::Reject, RowAction::Delete]
    );
    assert!(team(VivaTeamStatus::Approved).row_actions().contains(&RowAction::Schedule));
    assert!(team(VivaTeamStatus::Scheduled).row_actions().contains(&RowAction::RecordOutcome));
    assert_eq!(team(VivaTeamStatus::Completed).row_actions(), vec![RowAction::Edit, RowAction::Delete]);
}

#[test]
fn schedule_and_outcome_collect_input() {
    assert_eq!(VivaTeam::action_fields(RowAction::Schedule)[0].name, "scheduled_date");
    assert_eq!(VivaTeam::action_fields(RowAction::RecordOutcome)[0].name, "outcome");
    assert!(VivaTeam::action_fields(RowAction::Approve).is_empty());
}

#[test]
fn internal_examiners_column_joins_ids() {
    let mut record = team(VivaTeamStatus::Proposed);
    record.internal_examiner_1_id = Some(3);
    record.internal_examiner_2_id = Some(8);
    let column = VivaTeam::columns().into_iter().find(|c| c.header == "Internal Examiners").unwrap();
    assert_eq!((column.cell)(&record), "3, 8");
    assert_eq!((column.cell)(&team(VivaTeamStatus::Proposed)), format::EMPTY_CELL);
}
