//! End-to-end runtime behavior: coalescing, urgent recomputes, edits and
//! shutdown. Time is paused so the cooldown window is deterministic.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use planner_content::ContentFactory;
use planner_core::{
    Axis, CatalogIndex, CostTable, CostTables, EntityId, EntityProfile, EntityProgress,
    EquipmentCategory, MaterialId, MaterialRecord, OracleError, PlannerConfig, ProgressError,
    ProgressionRange, Roster, RosterEntry, SkillType,
};
use planner_runtime::{
    OracleManager, PlannerEvent, PlannerRuntime, RepositoryError, RosterRepository,
    RuntimeConfig, RuntimeError, RuntimeHandle,
};
use planner_runtime::events::Topic;
use tokio::sync::broadcast::error::TryRecvError;
use tokio::time::sleep;

const ARU: EntityId = EntityId(1);
const CREDITS: MaterialId = MaterialId(5);

fn oracles() -> OracleManager {
    let tables = CostTables::new()
        .with_table(CostTable::CharacterXp, (0..90).map(|level| level * 1_000).collect())
        .with_table(CostTable::CharacterCredits, (0..90).map(|level| level * 100).collect());

    let mut catalog = CatalogIndex::new();
    catalog.insert_material(MaterialRecord::new(CREDITS, "Credits").with_owned(1_000));
    catalog.insert_material(MaterialRecord::new(MaterialId(300), "Ancient Note").with_owned(2));

    OracleManager::new(Arc::new(catalog), Arc::new(tables), PlannerConfig::default())
}

fn aru() -> RosterEntry {
    let profile = SkillType::ALL
        .into_iter()
        .fold(EntityProfile::new(ARU, "Aru"), |profile, skill| {
            let max = if skill.is_ex() { 5 } else { 10 };
            profile.with_max_skill_level(skill, max)
        });
    let mut progress = EntityProgress::default();
    progress.character = ProgressionRange::at(40);
    RosterEntry::new(profile, progress)
}

async fn runtime() -> PlannerRuntime {
    PlannerRuntime::builder()
        .oracles(oracles())
        .roster([aru()].into_iter().collect())
        .build()
        .await
        .unwrap()
}

async fn revision(handle: &RuntimeHandle) -> u64 {
    handle.report().await.unwrap().revision
}

#[tokio::test(start_paused = true)]
async fn initial_pass_runs_at_start() {
    let runtime = runtime().await;
    let handle = runtime.handle();

    let snapshot = handle.report().await.unwrap();
    assert_eq!(snapshot.revision, 1);
    assert_eq!(snapshot.report.credits.total, 0);
    assert_eq!(snapshot.report.balance(CREDITS).unwrap().owned, 1_000);

    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn edits_inside_cooldown_collapse_into_one_pass() {
    let runtime = runtime().await;
    let handle = runtime.handle();
    assert_eq!(revision(&handle).await, 1);
    let mut reports = handle.subscribe(Topic::Report);
    let mut roster_events = handle.subscribe(Topic::Roster);

    for target in 41..=45 {
        handle
            .set_character_range(ARU, ProgressionRange::new(40, target))
            .await
            .unwrap();
    }
    assert_eq!(revision(&handle).await, 1);
    assert!(matches!(reports.try_recv(), Err(TryRecvError::Empty)));

    sleep(Duration::from_millis(1_100)).await;

    match reports.try_recv().unwrap() {
        PlannerEvent::ReportUpdated(snapshot) => {
            assert_eq!(snapshot.revision, 2);
            assert_eq!(snapshot.report.credits.for_entity(ARU), 500);
        }
        other => panic!("unexpected event {other:?}"),
    }
    assert!(matches!(reports.try_recv(), Err(TryRecvError::Empty)));

    let mut roster_changes = 0;
    while roster_events.try_recv().is_ok() {
        roster_changes += 1;
    }
    assert_eq!(roster_changes, 5);

    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn edit_after_cooldown_runs_immediately() {
    let runtime = runtime().await;
    let handle = runtime.handle();
    assert_eq!(revision(&handle).await, 1);

    sleep(Duration::from_millis(1_500)).await;
    handle
        .set_character_range(ARU, ProgressionRange::new(40, 42))
        .await
        .unwrap();

    let snapshot = handle.report().await.unwrap();
    assert_eq!(snapshot.revision, 2);
    assert_eq!(snapshot.report.needed(CREDITS), 200);

    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn urgent_toggle_runs_now_and_cancels_pending_pass() {
    let runtime = runtime().await;
    let handle = runtime.handle();
    assert_eq!(revision(&handle).await, 1);

    handle
        .set_character_range(ARU, ProgressionRange::new(40, 41))
        .await
        .unwrap();
    assert_eq!(revision(&handle).await, 1);

    handle.toggle_max_skills(ARU, true).await.unwrap();
    let snapshot = handle.report().await.unwrap();
    assert_eq!(snapshot.revision, 2);
    // The urgent pass already sees the deferred edit.
    assert_eq!(snapshot.report.credits.for_entity(ARU), 100);

    let entry = handle.entity(ARU).await.unwrap().unwrap();
    assert_eq!(entry.progress.skill(SkillType::Ex), ProgressionRange::at(5));
    assert_eq!(entry.progress.skill(SkillType::Public), ProgressionRange::at(10));

    sleep(Duration::from_secs(3)).await;
    assert_eq!(revision(&handle).await, 2);

    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn urgent_request_bypasses_cooldown() {
    let runtime = runtime().await;
    let handle = runtime.handle();
    assert_eq!(revision(&handle).await, 1);

    handle.request_recompute(false).await.unwrap();
    assert_eq!(revision(&handle).await, 1);
    handle.request_recompute(true).await.unwrap();
    assert_eq!(revision(&handle).await, 2);

    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn rejected_edits_change_nothing() {
    let runtime = runtime().await;
    let handle = runtime.handle();
    sleep(Duration::from_millis(1_500)).await;

    let err = handle
        .set_character_range(ARU, ProgressionRange::new(0, 5))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::Progress(ProgressError::InvalidRange {
            axis: Axis::Level,
            ..
        })
    ));

    let err = handle
        .set_skill_range(ARU, SkillType::Public, ProgressionRange::new(6, 4))
        .await
        .unwrap_err();
    assert!(matches!(err, RuntimeError::Progress(_)));

    let err = handle
        .set_equipment_range(EntityId(99), EquipmentCategory::Hat, ProgressionRange::new(1, 2))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::Progress(ProgressError::UnknownEntity(EntityId(99)))
    ));

    let mut invalid = EntityProgress::default();
    invalid
        .potentials
        .insert(planner_core::PotentialType::Attack, ProgressionRange::new(5, 2));
    assert!(handle.update_progress(ARU, invalid).await.is_err());

    assert_eq!(revision(&handle).await, 1);
    assert_eq!(handle.entity(ARU).await.unwrap(), Some(aru()));

    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn owned_quantities_feed_the_next_pass() {
    let runtime = runtime().await;
    let handle = runtime.handle();
    sleep(Duration::from_millis(1_500)).await;

    handle.set_owned_quantity(MaterialId(300), 40).await.unwrap();
    let snapshot = handle.report().await.unwrap();
    assert_eq!(snapshot.revision, 2);
    assert_eq!(snapshot.report.balance(MaterialId(300)).unwrap().remaining, 40);

    let err = handle.set_owned_quantity(MaterialId(301), 1).await.unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::Oracle(OracleError::MaterialNotFound(MaterialId(301)))
    ));

    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn roster_membership_changes() {
    let runtime = runtime().await;
    let handle = runtime.handle();
    sleep(Duration::from_millis(1_500)).await;

    let mut progress = EntityProgress::default();
    progress.character = ProgressionRange::new(1, 3);
    handle
        .upsert_entity(RosterEntry::new(EntityProfile::new(EntityId(2), "Hina"), progress))
        .await
        .unwrap();

    let requirements = handle.entity_requirements(EntityId(2)).await.unwrap();
    assert_eq!(requirements.len(), 1);
    assert_eq!((requirements[0].id(), requirements[0].total_quantity), (CREDITS, 200));
    assert_eq!(handle.credits().await.unwrap().for_entity(EntityId(2)), 200);

    let removed = handle.remove_entity(EntityId(2)).await.unwrap();
    assert_eq!(removed.id(), EntityId(2));
    assert!(handle.remove_entity(EntityId(2)).await.is_err());
    assert!(handle.entity_requirements(EntityId(2)).await.is_err());

    sleep(Duration::from_millis(1_100)).await;
    assert_eq!(handle.credits().await.unwrap().total, 0);

    runtime.shutdown().await.unwrap();
}

struct UnavailableRepo;

impl RosterRepository for UnavailableRepo {
    fn load(&self) -> planner_runtime::repository::Result<Roster> {
        Err(RepositoryError::Unavailable("offline".into()))
    }

    fn save(&self, _roster: &Roster) -> planner_runtime::repository::Result<()> {
        Err(RepositoryError::Unavailable("offline".into()))
    }
}

#[tokio::test(start_paused = true)]
async fn unreadable_repository_starts_empty() {
    let runtime = PlannerRuntime::builder()
        .oracles(oracles())
        .repository(Arc::new(UnavailableRepo))
        .build()
        .await
        .unwrap();
    let handle = runtime.handle();

    let snapshot = handle.report().await.unwrap();
    assert!(snapshot.report.shortages.is_empty());
    assert_eq!(snapshot.report.summary.len(), 2);

    // Save failures are logged, not surfaced.
    handle.upsert_entity(aru()).await.unwrap();
    assert!(handle.entity(ARU).await.unwrap().is_some());

    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn missing_oracles_fail_the_build() {
    let result = PlannerRuntime::builder().build().await;
    assert!(matches!(result, Err(RuntimeError::MissingOracles)));
}

#[tokio::test(start_paused = true)]
async fn sample_data_usage_lookup() {
    let factory = ContentFactory::new(
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../planner/content/data"),
    );
    let oracles = OracleManager::new(
        Arc::new(factory.load_catalog().unwrap()),
        Arc::new(factory.load_tables().unwrap()),
        factory.load_config().unwrap(),
    );
    let runtime = PlannerRuntime::builder()
        .config(RuntimeConfig::default().with_recompute_cooldown(Duration::from_millis(250)))
        .oracles(oracles)
        .roster(factory.load_roster().unwrap())
        .build()
        .await
        .unwrap();
    let handle = runtime.handle();

    let usage: Vec<_> = handle
        .usage_for(MaterialId(3001))
        .await
        .unwrap()
        .into_iter()
        .map(|row| (row.entity, row.quantity))
        .collect();
    assert_eq!(usage, vec![(EntityId(10000), 25), (EntityId(10001), 15)]);

    handle
        .set_equipment_range(EntityId(10001), EquipmentCategory::Hat, ProgressionRange::at(2))
        .await
        .unwrap();
    sleep(Duration::from_millis(300)).await;
    let usage = handle.usage_for(MaterialId(3001)).await.unwrap();
    assert_eq!(usage.len(), 1);

    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn calls_fail_after_shutdown() {
    let runtime = runtime().await;
    let handle = runtime.handle();

    handle.shutdown().await.unwrap();
    runtime.shutdown().await.unwrap();

    assert!(matches!(
        handle.report().await,
        Err(RuntimeError::CommandChannelClosed)
    ));
}
