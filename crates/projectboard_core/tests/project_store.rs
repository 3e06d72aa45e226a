use chrono::NaiveDate;
use projectboard_core::{
    Project, ProjectFields, ProjectHooks, ProjectRole, ProjectStatus, ProjectStore,
    ProjectValidationError, StoreConfig, StoreError, ToDoFields, ToDoStatus,
};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
enum HookEvent {
    Created(String),
    Updated(String),
    Removed(String),
}

#[derive(Clone, Default)]
struct Recorder {
    events: Rc<RefCell<Vec<HookEvent>>>,
}

impl ProjectHooks for Recorder {
    fn on_project_created(&self, project: &Project) {
        self.events
            .borrow_mut()
            .push(HookEvent::Created(project.id.clone()));
    }

    fn on_project_updated(&self, project: &Project) {
        self.events
            .borrow_mut()
            .push(HookEvent::Updated(project.id.clone()));
    }

    fn on_project_removed(&self, id: &str) {
        self.events
            .borrow_mut()
            .push(HookEvent::Removed(id.to_string()));
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn full_fields(name: &str) -> ProjectFields {
    ProjectFields {
        id: None,
        name: name.to_string(),
        description: "Structural survey".to_string(),
        status: ProjectStatus::Paused,
        user_role: ProjectRole::Supervisor,
        cost: Some(1250.5),
        progress: Some(0.4),
        finish_date: date(2025, 3, 14),
        todo_list: None,
    }
}

fn ids(store: &ProjectStore) -> Vec<String> {
    store.iter().map(|project| project.id.clone()).collect()
}

#[test]
fn add_then_get_returns_equal_project() {
    let mut store = ProjectStore::default();
    let created = store.add(full_fields("Harbor Bridge")).unwrap();

    let loaded = store.get(&created.id).unwrap();
    assert_eq!(loaded, &created);
    assert_eq!(loaded.name, "Harbor Bridge");
    assert_eq!(loaded.description, "Structural survey");
    assert_eq!(loaded.status, ProjectStatus::Paused);
    assert_eq!(loaded.user_role, ProjectRole::Supervisor);
    assert_eq!(loaded.cost, 1250.5);
    assert_eq!(loaded.progress, 0.4);
    assert_eq!(loaded.finish_date, date(2025, 3, 14));
    assert!(loaded.todo_list.is_empty());
}

#[test]
fn add_preserves_insertion_order() {
    let mut store = ProjectStore::default();
    let a = store.add(full_fields("Project A1")).unwrap();
    let b = store.add(full_fields("Project B2")).unwrap();
    let c = store.add(full_fields("Project C3")).unwrap();

    assert_eq!(ids(&store), vec![a.id, b.id, c.id]);
}

#[test]
fn add_short_name_fails_and_leaves_store_unchanged() {
    let mut store = ProjectStore::seeded(StoreConfig::default());
    let before = ids(&store);

    let err = store.add(full_fields("Tiny")).unwrap_err();
    assert_eq!(
        err,
        StoreError::Validation(ProjectValidationError::NameTooShort { min: 5, actual: 4 })
    );
    assert_eq!(ids(&store), before);
}

#[test]
fn add_duplicate_name_fails_and_leaves_store_unchanged() {
    let mut store = ProjectStore::seeded(StoreConfig::default());
    let before = ids(&store);

    let err = store.add(full_fields("Default Project")).unwrap_err();
    assert_eq!(err, StoreError::DuplicateName("Default Project".to_string()));
    assert_eq!(ids(&store), before);
}

#[test]
fn name_uniqueness_is_case_sensitive() {
    let mut store = ProjectStore::seeded(StoreConfig::default());
    assert!(store.add(full_fields("default project")).is_ok());
    assert_eq!(store.len(), 2);
}

#[test]
fn remove_unknown_id_is_noop() {
    let mut store = ProjectStore::seeded(StoreConfig::default());
    let recorder = Recorder::default();
    store.subscribe(Box::new(recorder.clone()));
    let before = ids(&store);

    assert!(store.remove("no-such-id").is_none());
    assert_eq!(ids(&store), before);
    assert!(recorder.events.borrow().is_empty());
}

#[test]
fn remove_keeps_remaining_identities() {
    let mut store = ProjectStore::default();
    let a = store.add(full_fields("Project A1")).unwrap();
    let b = store.add(full_fields("Project B2")).unwrap();
    let c = store.add(full_fields("Project C3")).unwrap();

    let removed = store.remove(&b.id).unwrap();
    assert_eq!(removed.id, b.id);
    assert_eq!(ids(&store), vec![a.id, c.id]);
    assert!(store.get(&b.id).is_none());
}

#[test]
fn hooks_fire_for_create_update_and_remove() {
    let mut store = ProjectStore::default();
    let recorder = Recorder::default();
    store.subscribe(Box::new(recorder.clone()));

    let project = store.add(full_fields("Hooked Project")).unwrap();
    store
        .add_todo(&project.id, ToDoFields::new("survey site", date(2025, 1, 2)))
        .unwrap();
    store.remove(&project.id);

    assert_eq!(
        *recorder.events.borrow(),
        vec![
            HookEvent::Created(project.id.clone()),
            HookEvent::Updated(project.id.clone()),
            HookEvent::Removed(project.id.clone()),
        ]
    );
}

#[test]
fn failed_add_fires_no_hook() {
    let mut store = ProjectStore::default();
    let recorder = Recorder::default();
    store.subscribe(Box::new(recorder.clone()));

    assert!(store.add(full_fields("abc")).is_err());
    assert!(recorder.events.borrow().is_empty());
}

#[test]
fn update_applies_edit_and_keeps_identity_and_todos() {
    let mut store = ProjectStore::default();
    let project = store.add(full_fields("Original Name")).unwrap();
    store
        .add_todo(&project.id, ToDoFields::new("keep me", date(2025, 2, 1)))
        .unwrap();

    let mut edit = full_fields("Renamed Project");
    edit.status = ProjectStatus::Completed;
    edit.progress = Some(1.0);
    let updated = store.update(&project.id, edit).unwrap();

    assert_eq!(updated.id, project.id);
    assert_eq!(updated.name, "Renamed Project");
    assert_eq!(updated.status, ProjectStatus::Completed);
    assert_eq!(updated.todo_list.len(), 1);
    assert_eq!(store.get(&project.id).unwrap(), &updated);
}

#[test]
fn update_rejects_name_of_another_project_but_allows_own() {
    let mut store = ProjectStore::default();
    let first = store.add(full_fields("First Project")).unwrap();
    store.add(full_fields("Second Project")).unwrap();

    let err = store
        .update(&first.id, full_fields("Second Project"))
        .unwrap_err();
    assert_eq!(err, StoreError::DuplicateName("Second Project".to_string()));
    assert_eq!(store.get(&first.id).unwrap().name, "First Project");

    assert!(store.update(&first.id, full_fields("First Project")).is_ok());
}

#[test]
fn update_unknown_project_is_not_found() {
    let mut store = ProjectStore::default();
    let err = store.update("ghost", full_fields("Ghost Project")).unwrap_err();
    assert_eq!(err, StoreError::NotFound("ghost".to_string()));
}

#[test]
fn todo_status_changes_in_place_without_reordering() {
    let mut store = ProjectStore::default();
    let project = store.add(full_fields("Todo Holder")).unwrap();
    let first = store
        .add_todo(&project.id, ToDoFields::new("first", date(2025, 1, 1)))
        .unwrap();
    let second = store
        .add_todo(&project.id, ToDoFields::new("second", date(2025, 1, 2)))
        .unwrap();

    store
        .set_todo_status(&project.id, &first.id, ToDoStatus::Finished)
        .unwrap();

    let stored = store.get(&project.id).unwrap();
    let order: Vec<&str> = stored.todo_list.iter().map(|todo| todo.id.as_str()).collect();
    assert_eq!(order, vec![first.id.as_str(), second.id.as_str()]);
    assert_eq!(stored.todo(&first.id).unwrap().status, ToDoStatus::Finished);
    assert_eq!(stored.todo(&second.id).unwrap().status, ToDoStatus::Pending);

    let err = store
        .set_todo_status(&project.id, "missing", ToDoStatus::Finished)
        .unwrap_err();
    assert_eq!(err, StoreError::NotFound("missing".to_string()));
}

#[test]
fn progress_is_always_a_fraction() {
    let mut store = ProjectStore::default();
    let mut over = full_fields("Too Much Progress");
    over.progress = Some(3.5);
    let mut under = full_fields("Negative Progress");
    under.progress = Some(-1.0);
    store.add(over).unwrap();
    let under = store.add(under).unwrap();

    let mut edit = full_fields("Negative Progress");
    edit.progress = Some(7.0);
    store.update(&under.id, edit).unwrap();

    assert!(store
        .iter()
        .all(|project| (0.0..=1.0).contains(&project.progress)));
}

#[test]
fn custom_min_name_length_is_honored() {
    let mut store = ProjectStore::new(StoreConfig {
        min_name_length: 3,
        seed_default_project: false,
    });
    assert!(store.add(full_fields("Abc")).is_ok());
    assert!(store.add(full_fields("Ab")).is_err());
}
