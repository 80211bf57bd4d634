use orienta_core::{
    open_store_in_memory, ActivityKind, DocumentRepository, ProfileService, RepoError,
    SqliteDocumentRepository, SqliteSessionRepository,
};
use rusqlite::Connection;

const SEED_USER: u64 = 1;

#[test]
fn favorite_membership_follows_toggle_parity() {
    let conn = open_store_in_memory().unwrap();
    let service = profile_service(&conn);

    for round in 1..=5 {
        let now_favorite = service.toggle_favorite_career(SEED_USER, 2).unwrap();
        let expect_member = round % 2 == 1;
        assert_eq!(now_favorite, expect_member, "round {round}");

        let user = service.find_user(SEED_USER).unwrap().unwrap();
        assert_eq!(user.favorite_careers.contains(&2), expect_member);
    }
}

#[test]
fn interleaved_toggles_for_different_resources_both_persist() {
    let conn = open_store_in_memory().unwrap();
    let service = profile_service(&conn);

    assert!(service.toggle_saved_resource(SEED_USER, 1).unwrap());
    assert!(service.toggle_saved_resource(SEED_USER, 2).unwrap());

    let user = service.find_user(SEED_USER).unwrap().unwrap();
    assert_eq!(user.saved_resources, vec![1, 2]);
}

#[test]
fn create_custom_list_then_read_it_back() {
    let conn = open_store_in_memory().unwrap();
    let service = profile_service(&conn);

    let list_id = service
        .create_custom_list(SEED_USER, "Mis favoritas", "", vec![1, 2, 3])
        .unwrap();

    let lists = service.custom_lists(SEED_USER).unwrap();
    assert_eq!(lists.len(), 1);
    assert_eq!(lists[0].id, list_id);
    assert_eq!(lists[0].name, "Mis favoritas");
    assert_eq!(lists[0].description, "");
    assert_eq!(lists[0].career_ids, vec![1, 2, 3]);
}

#[test]
fn delete_custom_list_reports_whether_it_existed() {
    let conn = open_store_in_memory().unwrap();
    let service = profile_service(&conn);

    let list_id = service
        .create_custom_list(SEED_USER, "Temporal", "se borra", vec![4])
        .unwrap();

    assert!(service.delete_custom_list(SEED_USER, list_id).unwrap());
    assert!(!service.delete_custom_list(SEED_USER, list_id).unwrap());
    assert!(service.custom_lists(SEED_USER).unwrap().is_empty());
}

#[test]
fn custom_lists_of_unknown_user_read_as_empty() {
    let conn = open_store_in_memory().unwrap();
    let service = profile_service(&conn);

    assert!(service.custom_lists(9999).unwrap().is_empty());
}

#[test]
fn mutations_against_unknown_user_fail_without_persisting() {
    let conn = open_store_in_memory().unwrap();
    let service = profile_service(&conn);
    let documents = SqliteDocumentRepository::new(&conn);

    let before = documents.get().unwrap();
    let err = service.toggle_favorite_career(9999, 1).unwrap_err();
    assert!(matches!(err, RepoError::UserNotFound(9999)));

    // The aborted mutator must not have bumped the stored revision.
    assert_eq!(documents.get().unwrap(), before);
}

#[test]
fn record_activity_appends_in_order() {
    let conn = open_store_in_memory().unwrap();
    let service = profile_service(&conn);

    service
        .record_activity(SEED_USER, ActivityKind::CareerViewed, "career_id=2")
        .unwrap();
    service
        .record_activity(SEED_USER, ActivityKind::ReportGenerated, "report=cost")
        .unwrap();

    let user = service.find_user(SEED_USER).unwrap().unwrap();
    assert_eq!(user.activity_log.len(), 2);
    assert_eq!(user.activity_log[0].kind, ActivityKind::CareerViewed);
    assert_eq!(user.activity_log[0].detail, "career_id=2");
    assert_eq!(user.activity_log[1].kind, ActivityKind::ReportGenerated);
}

#[test]
fn record_test_result_stores_scores_and_suggestions() {
    let conn = open_store_in_memory().unwrap();
    let service = profile_service(&conn);

    let scores = vec![
        orienta_core::AreaScore {
            area: "tecnologia".to_string(),
            points: 5,
        },
        orienta_core::AreaScore {
            area: "salud".to_string(),
            points: 2,
        },
    ];
    let result_id = service
        .record_test_result(SEED_USER, 1, scores.clone(), vec![1, 2])
        .unwrap();

    let user = service.find_user(SEED_USER).unwrap().unwrap();
    assert_eq!(user.test_results.len(), 1);
    assert_eq!(user.test_results[0].id, result_id);
    assert_eq!(user.test_results[0].test_id, 1);
    assert_eq!(user.test_results[0].scores, scores);
    assert_eq!(user.test_results[0].top_careers, vec![1, 2]);
}

fn profile_service(
    conn: &Connection,
) -> ProfileService<SqliteDocumentRepository<'_>, SqliteSessionRepository<'_>> {
    ProfileService::new(
        SqliteDocumentRepository::new(conn),
        SqliteSessionRepository::new(conn),
    )
}
