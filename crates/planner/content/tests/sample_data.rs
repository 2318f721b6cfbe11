//! Loads the bundled `data/` directory and runs a full aggregation pass.

use std::path::PathBuf;

use planner_content::ContentFactory;
use planner_core::{
    Axis, EntityId, Env, EquipmentCategory, MaterialId, RequirementKind, aggregate,
    entity_requirements,
};

fn factory() -> ContentFactory {
    ContentFactory::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data"))
}

#[test]
fn sample_data_loads() {
    let factory = factory();
    let config = factory.load_config().unwrap();
    let catalog = factory.load_catalog().unwrap();
    let roster = factory.load_roster().unwrap();
    factory.load_tables().unwrap();

    assert_eq!(config.currency_id, MaterialId(5));
    assert_eq!(catalog.len(), 19);
    assert_eq!(roster.len(), 2);
}

#[test]
fn sample_roster_aggregates() {
    let factory = factory();
    let config = factory.load_config().unwrap();
    let tables = factory.load_tables().unwrap();
    let catalog = factory.load_catalog().unwrap();
    let roster = factory.load_roster().unwrap();
    let env = Env::with_all(&catalog, &tables, config);

    let report = aggregate(&env, &roster);

    let hat_blueprint = report.balance(MaterialId(3002)).unwrap();
    assert_eq!((hat_blueprint.needed, hat_blueprint.remaining), (40, -37));
    assert_eq!(report.balance(MaterialId(3003)).unwrap().remaining, -15);
    assert_eq!(report.balance(MaterialId(9999)).unwrap().remaining, 0);

    let hat = Axis::Equipment(EquipmentCategory::Hat);
    let rows: Vec<_> = report
        .attribution
        .usage_for(MaterialId(3001))
        .iter()
        .map(|row| (row.entity, row.axis, row.quantity))
        .collect();
    assert_eq!(rows, vec![(EntityId(10000), hat, 25), (EntityId(10001), hat, 15)]);

    assert_eq!(report.credits.total, report.needed(config.currency_id));
    assert!(report.shortages.windows(2).all(|w| w[0].remaining <= w[1].remaining));
    assert_eq!(report, aggregate(&env, &roster));
}

#[test]
fn milestone_appears_for_public_skill() {
    let factory = factory();
    let config = factory.load_config().unwrap();
    let tables = factory.load_tables().unwrap();
    let catalog = factory.load_catalog().unwrap();
    let roster = factory.load_roster().unwrap();
    let env = Env::with_all(&catalog, &tables, config);

    let aru = roster.get(EntityId(10000)).unwrap();
    let special: Vec<_> = entity_requirements(&env, aru)
        .into_iter()
        .filter(|entry| entry.kind == RequirementKind::SkillSpecial)
        .collect();
    assert_eq!(special.len(), 1);
    assert_eq!(special[0].material, config.skill_special_material_id);
}
