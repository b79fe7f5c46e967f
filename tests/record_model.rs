use std::str::FromStr;

use chrono::NaiveDate;
use inco_core::classify::{DomainLabel, KeywordClassifier};
use inco_core::record::{
    applied_ids, has_applied, ApplicationRecord, ApplicationStatus, OpportunityDraft,
    OpportunityId, OpportunityRecord, StudentId,
};

fn make_draft(description: &str) -> OpportunityDraft {
    OpportunityDraft {
        title: "Research Fellowship".to_string(),
        description: description.to_string(),
        university: "Princeton".to_string(),
        posted_date: NaiveDate::from_ymd_opt(2026, 2, 8).unwrap(),
    }
}

fn make_application(student: i64, opportunity: i64, status: ApplicationStatus) -> ApplicationRecord {
    ApplicationRecord {
        student_id: StudentId::new(student),
        opportunity_id: OpportunityId::new(opportunity),
        status,
        applied_at: chrono::DateTime::from_timestamp(1_770_000_000, 0).unwrap(),
    }
}

#[test]
fn ingest_derives_the_domain_once() {
    let record = OpportunityRecord::ingest(
        OpportunityId::new(1),
        make_draft("legal research and policy analysis"),
        &KeywordClassifier,
    );

    assert_eq!(record.domain(), DomainLabel::Law);
    assert_eq!(record.title, "Research Fellowship");
}

#[test]
fn empty_description_classifies_as_general() {
    let record = OpportunityRecord::ingest(OpportunityId::new(2), make_draft(""), &KeywordClassifier);
    assert_eq!(record.domain(), DomainLabel::General);
}

#[test]
fn deserialized_label_is_stored_data_not_recomputed() {
    // A persisted record whose label disagrees with what the classifier would
    // say today must come back with the stored label. Classification happens
    // once, at ingestion.
    let json = r#"{
        "id": 9,
        "title": "Archived Fellowship",
        "description": "machine learning research",
        "university": "Columbia",
        "domain": "Law",
        "posted_date": "2026-01-15"
    }"#;

    let record: OpportunityRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.domain(), DomainLabel::Law);
}

#[test]
fn opportunity_record_round_trips_through_json() {
    let record = OpportunityRecord::ingest(
        OpportunityId::new(3),
        make_draft("clinical health studies"),
        &KeywordClassifier,
    );

    let json = serde_json::to_string(&record).unwrap();
    let back: OpportunityRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, record);
    assert_eq!(back.domain(), DomainLabel::Biomedical);
}

#[test]
fn application_status_text_round_trips() {
    let cases = [
        (ApplicationStatus::Submitted, "submitted"),
        (ApplicationStatus::UnderReview, "under_review"),
        (ApplicationStatus::Accepted, "accepted"),
        (ApplicationStatus::Rejected, "rejected"),
    ];

    for (status, text) in cases {
        assert_eq!(status.to_string(), text);
        assert_eq!(ApplicationStatus::from_str(text).unwrap(), status);
        assert_eq!(serde_json::to_string(&status).unwrap(), format!("\"{text}\""));
    }

    assert!(ApplicationStatus::from_str("withdrawn").is_err());
    assert_eq!(ApplicationStatus::default(), ApplicationStatus::Submitted);
}

#[test]
fn submitted_constructor_stamps_now() {
    let before = chrono::Utc::now();
    let app = ApplicationRecord::submitted(StudentId::new(1), OpportunityId::new(2));
    let after = chrono::Utc::now();

    assert_eq!(app.status, ApplicationStatus::Submitted);
    assert!(app.applied_at >= before && app.applied_at <= after);
}

#[test]
fn applied_ids_collects_across_statuses_for_one_student() {
    let applications = vec![
        make_application(1, 10, ApplicationStatus::Submitted),
        make_application(1, 11, ApplicationStatus::Rejected),
        make_application(1, 12, ApplicationStatus::Accepted),
        make_application(2, 13, ApplicationStatus::Submitted),
    ];

    let ids = applied_ids(&applications, StudentId::new(1));

    assert_eq!(ids.len(), 3, "every status counts, other students do not");
    assert!(ids.contains(&OpportunityId::new(11)), "rejected still counts as seen");
    assert!(!ids.contains(&OpportunityId::new(13)));
}

#[test]
fn has_applied_guards_duplicate_pairs() {
    let applications = vec![make_application(1, 10, ApplicationStatus::Submitted)];

    assert!(has_applied(&applications, StudentId::new(1), OpportunityId::new(10)));
    assert!(!has_applied(&applications, StudentId::new(1), OpportunityId::new(11)));
    assert!(!has_applied(&applications, StudentId::new(2), OpportunityId::new(10)));
}
