use application::{RosterService, SessionState};
use domain::{CommitError, Plan, RosterConfig, RosterError, Student};

fn service() -> RosterService {
    RosterService::new(&RosterConfig::default())
}

fn enroll(service: &mut RosterService, slot: &str, name: &str, plan: Plan) -> Result<Student, CommitError> {
    service.open_draft(slot)?;
    service.set_draft_name(name)?;
    service.set_draft_plan(plan)?;
    service.commit_draft()
}

#[test]
fn ana_joins_the_six_oclock_class() {
    let mut service = service();
    let student = enroll(&mut service, "6H", "Ana", Plan::Vip).unwrap();

    assert_eq!(student, Student::new("Ana", Plan::Vip));
    assert_eq!(service.count("6H").unwrap(), 1);
    assert_eq!(
        service.store().students("6H").unwrap(),
        &[Student::new("Ana", Plan::Vip)]
    );
    assert_eq!(service.session_state(), SessionState::Closed);
}

#[test]
fn full_class_rejects_the_next_student() {
    let mut service = service();
    for i in 0..17 {
        let plan = Plan::ALL[i % Plan::ALL.len()];
        enroll(&mut service, "7H", &format!("Student {:02}", i), plan).unwrap();
    }

    let err = enroll(&mut service, "7H", "One Too Many", Plan::Simples).unwrap_err();

    assert_eq!(
        err,
        CommitError::Roster(RosterError::CapacityExceeded {
            slot: "7H".into(),
            capacity: 17
        })
    );
    assert_eq!(service.count("7H").unwrap(), 17);
    assert_eq!(service.session_state(), SessionState::Editing);
    assert_eq!(service.draft().unwrap().name, "One Too Many");
}

#[test]
fn whitespace_name_is_refused_without_touching_rosters() {
    let mut service = service();
    service.open_draft("18H").unwrap();
    service.set_draft_name("  ").unwrap();
    service.set_draft_plan(Plan::WellHub).unwrap();

    assert_eq!(service.commit_draft(), Err(CommitError::EmptyName));
    assert!(service.summaries().iter().all(|s| s.count == 0));
    assert_eq!(service.draft().unwrap().plan, Some(Plan::WellHub));
}

#[test]
fn missing_plan_is_refused() {
    let mut service = service();
    service.open_draft("19H").unwrap();
    service.set_draft_name("Bia").unwrap();

    assert_eq!(service.commit_draft(), Err(CommitError::NoPlanSelected));
    assert_eq!(service.count("19H").unwrap(), 0);
    assert_eq!(service.session_state(), SessionState::Editing);
}

#[test]
fn cancel_leaves_rosters_alone() {
    let mut service = service();
    service.open_draft("8H").unwrap();
    service.set_draft_name("Caio").unwrap();
    service.set_draft_plan(Plan::TotalPass).unwrap();
    service.cancel_draft();

    assert_eq!(service.session_state(), SessionState::Closed);
    assert_eq!(service.count("8H").unwrap(), 0);
    assert_eq!(service.commit_draft(), Err(CommitError::NoDraft));
}

#[test]
fn reopening_discards_the_previous_draft() {
    let mut service = service();
    service.open_draft("6H").unwrap();
    service.set_draft_name("Ana").unwrap();
    service.open_draft("20H").unwrap();
    service.set_draft_name("Bia").unwrap();
    service.set_draft_plan(Plan::Vip).unwrap();
    service.commit_draft().unwrap();

    assert_eq!(service.count("6H").unwrap(), 0);
    assert_eq!(service.count("20H").unwrap(), 1);
}

#[test]
fn failed_commit_can_be_fixed_and_retried() {
    let mut service = service();
    service.open_draft("6H").unwrap();
    assert_eq!(service.commit_draft(), Err(CommitError::EmptyName));
    service.set_draft_name("Dani").unwrap();
    assert_eq!(service.commit_draft(), Err(CommitError::NoPlanSelected));
    service.set_draft_plan(Plan::Simples).unwrap();

    assert_eq!(service.commit_draft().unwrap(), Student::new("Dani", Plan::Simples));
    assert_eq!(service.count("6H").unwrap(), 1);
}
