use reident_core::db::open_dataset_in_memory;
use reident_core::{count_matches, Attribute, Profile, RecordStore};
use rusqlite::{params, Connection};

const INSERT_SQL: &str = "INSERT INTO census (
    region, comuna, sex, age_band, marital_status, education_level,
    labor_force_status, occupation_code, workplace_location, commute_mode
) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)";

fn insert_record(conn: &Connection, values: [Option<i64>; 10]) {
    conn.execute(
        INSERT_SQL,
        params![
            values[0], values[1], values[2], values[3], values[4], values[5], values[6],
            values[7], values[8], values[9]
        ],
    )
    .unwrap();
}

fn scenario_a_store() -> RecordStore {
    let conn = open_dataset_in_memory().unwrap();
    insert_record(&conn, [Some(13), None, Some(1), None, None, None, None, None, None, None]);
    insert_record(&conn, [Some(13), None, Some(2), None, None, None, None, None, None, None]);
    insert_record(&conn, [Some(7), None, Some(1), None, None, None, None, None, None, None]);
    RecordStore::load(&conn).unwrap()
}

#[test]
fn unconstrained_profile_matches_whole_store() {
    let store = scenario_a_store();
    let (matches, used) = count_matches(&store, &Profile::default());
    assert_eq!(matches, store.len());
    assert!(used.is_empty());
}

#[test]
fn scenario_a_region_then_sex() {
    let store = scenario_a_store();

    let region_only = Profile {
        region: Some(13),
        ..Profile::default()
    };
    let (matches, used) = count_matches(&store, &region_only);
    assert_eq!(matches, 2);
    assert_eq!(used, vec![Attribute::Region]);

    let region_and_sex = Profile {
        region: Some(13),
        sex: Some(1),
        ..Profile::default()
    };
    let (matches, used) = count_matches(&store, &region_and_sex);
    assert_eq!(matches, 1);
    assert_eq!(used, vec![Attribute::Region, Attribute::Sex]);
}

#[test]
fn null_record_cell_never_matches_a_constraint() {
    let conn = open_dataset_in_memory().unwrap();
    insert_record(&conn, [Some(13), None, None, None, None, None, None, None, None, None]);
    insert_record(&conn, [Some(13), Some(13101), None, None, None, None, None, None, None, None]);
    let store = RecordStore::load(&conn).unwrap();

    let profile = Profile {
        comuna: Some(13101),
        ..Profile::default()
    };
    let (matches, _) = count_matches(&store, &profile);
    assert_eq!(matches, 1);
}

#[test]
fn no_exact_match_yields_zero() {
    let store = scenario_a_store();
    let profile = Profile {
        region: Some(7),
        sex: Some(2),
        ..Profile::default()
    };
    let (matches, _) = count_matches(&store, &profile);
    assert_eq!(matches, 0);
}

#[test]
fn attributes_used_follow_canonical_order_not_assignment_order() {
    let store = scenario_a_store();

    // Assemble the profile dependent-attribute-first.
    let mut profile = Profile::default();
    profile.set(Attribute::CommuteMode, Some(4));
    profile.set(Attribute::Region, Some(13));
    profile.set(Attribute::Sex, Some(1));

    let (_, used) = count_matches(&store, &profile);
    assert_eq!(
        used,
        vec![Attribute::Region, Attribute::Sex, Attribute::CommuteMode]
    );
}

#[test]
fn out_of_enumeration_codes_still_match_exactly() {
    let conn = open_dataset_in_memory().unwrap();
    insert_record(&conn, [Some(13), None, Some(9), None, None, None, None, None, None, None]);
    let store = RecordStore::load(&conn).unwrap();

    let profile = Profile {
        sex: Some(9),
        ..Profile::default()
    };
    let (matches, _) = count_matches(&store, &profile);
    assert_eq!(matches, 1);
}
