//! Service-level tests for the POS catalog
//!
//! These tests verify the observable contract of `PosService`:
//! - round-trip: created batches come back field-for-field, in order
//! - identity stability across updates
//! - update visibility and matching (by id, and by name fallback)
//! - not-found and validation failures leave the catalog unchanged
//! - `clear()` is idempotent and total

use campus_coffee::prelude::*;
use std::sync::Arc;

fn service() -> PosService {
    PosService::new(Arc::new(InMemoryPosRepository::new()))
}

fn draft(name: &str, description: &str) -> NewPos {
    NewPos {
        name: name.to_string(),
        description: description.to_string(),
        pos_type: PosType::Cafe,
        campus: CampusType::Main,
        street: "Universitaetsstrasse".to_string(),
        house_number: "30".to_string(),
        postal_code: 95447,
        city: "Bayreuth".to_string(),
    }
}

fn update_from(pos: &Pos) -> PosUpdate {
    PosUpdate {
        id: Some(pos.id),
        name: pos.name.clone(),
        description: pos.description.clone(),
        pos_type: pos.pos_type,
        campus: pos.campus,
        street: pos.street.clone(),
        house_number: pos.house_number.clone(),
        postal_code: pos.postal_code,
        city: pos.city.clone(),
    }
}

// =============================================================================
// Create / Retrieve
// =============================================================================

#[tokio::test]
async fn test_round_trip_preserves_order_and_fields() {
    let service = service();

    let inputs = vec![
        draft("Glashaus", "Coffee bar in the student union"),
        NewPos {
            pos_type: PosType::VendingMachine,
            campus: CampusType::North,
            ..draft("NW II vending", "Coffee machine next to the lecture hall")
        },
        NewPos {
            pos_type: PosType::Cafeteria,
            ..draft("Mensa", "Main cafeteria")
        },
    ];

    let created = service.create(inputs.clone()).await.unwrap();
    assert_eq!(created.len(), inputs.len());

    let retrieved = service.retrieve().await.unwrap();
    assert_eq!(retrieved.len(), inputs.len());

    for (input, stored) in inputs.iter().zip(&retrieved) {
        assert_eq!(stored.name, input.name);
        assert_eq!(stored.description, input.description);
        assert_eq!(stored.pos_type, input.pos_type);
        assert_eq!(stored.campus, input.campus);
        assert_eq!(stored.street, input.street);
        assert_eq!(stored.house_number, input.house_number);
        assert_eq!(stored.postal_code, input.postal_code);
        assert_eq!(stored.city, input.city);
    }
}

#[tokio::test]
async fn test_create_assigns_distinct_ids_and_timestamps() {
    let service = service();

    let created = service
        .create(vec![draft("A", "first"), draft("B", "second")])
        .await
        .unwrap();

    assert_ne!(created[0].id, created[1].id);
    for pos in &created {
        assert_eq!(pos.created_at, pos.updated_at);
    }
}

#[tokio::test]
async fn test_create_rejects_invalid_input_atomically() {
    let service = service();

    let result = service
        .create(vec![draft("A", "valid"), draft("", "no name")])
        .await;

    assert!(matches!(
        result.unwrap_err(),
        CoffeeError::Validation(ValidationError::FieldErrors(_))
    ));
    // the valid element must not have been stored
    assert!(service.retrieve().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_rejects_out_of_range_postal_code() {
    let service = service();

    let result = service
        .create(vec![NewPos {
            postal_code: 999,
            ..draft("A", "bad postal code")
        }])
        .await;

    assert!(matches!(result.unwrap_err(), CoffeeError::Validation(_)));
}

// =============================================================================
// Update
// =============================================================================

#[tokio::test]
async fn test_identity_stable_across_updates() {
    let service = service();
    let created = service.create(vec![draft("A", "original")]).await.unwrap();
    let id = created[0].id;

    for round in 0..3 {
        let mut update = update_from(&service.retrieve().await.unwrap()[0]);
        update.description = format!("revision {}", round);
        let updated = service.update(vec![update]).await.unwrap();
        assert_eq!(updated[0].id, id);
    }

    let retrieved = service.retrieve().await.unwrap();
    assert_eq!(retrieved[0].id, id);
    assert_eq!(retrieved[0].description, "revision 2");
}

#[tokio::test]
async fn test_update_visibility_and_untouched_fields() {
    let service = service();
    let created = service.create(vec![draft("A", "original")]).await.unwrap();
    let before = created[0].clone();

    let mut update = update_from(&before);
    update.description = "New Desc".to_string();
    service.update(vec![update]).await.unwrap();

    let retrieved = service.retrieve().await.unwrap();
    let after = &retrieved[0];
    assert_eq!(after.description, "New Desc");
    assert_eq!(after.id, before.id);
    assert_eq!(after.name, before.name);
    assert_eq!(after.street, before.street);
    assert_eq!(after.created_at, before.created_at);
    assert!(after.updated_at >= before.updated_at);
}

#[tokio::test]
async fn test_update_matches_by_name_when_id_absent() {
    let service = service();
    let created = service
        .create(vec![draft("A", "first"), draft("B", "second")])
        .await
        .unwrap();

    let mut update = update_from(&created[1]);
    update.id = None;
    update.description = "matched by name".to_string();

    let updated = service.update(vec![update]).await.unwrap();
    assert_eq!(updated[0].id, created[1].id);

    let retrieved = service.retrieve().await.unwrap();
    assert_eq!(retrieved[1].description, "matched by name");
    assert_eq!(retrieved[0].description, "first");
}

#[tokio::test]
async fn test_update_unknown_name_fails_and_leaves_state() {
    let service = service();
    service.create(vec![draft("A", "original")]).await.unwrap();

    let mut update = update_from(&service.retrieve().await.unwrap()[0]);
    update.id = None;
    update.name = "Phantom".to_string();

    let err = service.update(vec![update]).await.unwrap_err();
    assert!(matches!(
        err,
        CoffeeError::Pos(PosError::NotFoundByName { .. })
    ));

    let retrieved = service.retrieve().await.unwrap();
    assert_eq!(retrieved.len(), 1);
    assert_eq!(retrieved[0].description, "original");
}

#[tokio::test]
async fn test_update_unknown_id_fails() {
    let service = service();
    service.create(vec![draft("A", "original")]).await.unwrap();

    let mut update = update_from(&service.retrieve().await.unwrap()[0]);
    update.id = Some(Uuid::new_v4());

    let err = service.update(vec![update]).await.unwrap_err();
    assert!(matches!(
        err,
        CoffeeError::Pos(PosError::NotFoundById { .. })
    ));
}

#[tokio::test]
async fn test_update_batch_is_all_or_nothing() {
    let service = service();
    let created = service
        .create(vec![draft("A", "first"), draft("B", "second")])
        .await
        .unwrap();

    let mut good = update_from(&created[0]);
    good.description = "should not be applied".to_string();
    let mut bad = update_from(&created[1]);
    bad.id = Some(Uuid::new_v4());

    let result = service.update(vec![good, bad]).await;
    assert!(result.is_err());

    // the valid element of the batch must not have been applied
    let retrieved = service.retrieve().await.unwrap();
    assert_eq!(retrieved[0].description, "first");
    assert_eq!(retrieved[1].description, "second");
}

#[tokio::test]
async fn test_update_does_not_change_position() {
    let service = service();
    let created = service
        .create(vec![draft("A", "a"), draft("B", "b"), draft("C", "c")])
        .await
        .unwrap();

    let mut update = update_from(&created[1]);
    update.description = "moved? no".to_string();
    service.update(vec![update]).await.unwrap();

    let names: Vec<String> = service
        .retrieve()
        .await
        .unwrap()
        .into_iter()
        .map(|pos| pos.name)
        .collect();
    assert_eq!(names, vec!["A", "B", "C"]);
}

// =============================================================================
// Clear
// =============================================================================

#[tokio::test]
async fn test_clear_is_idempotent_and_total() {
    let service = service();

    // clearing an empty catalog succeeds
    service.clear().await.unwrap();
    assert!(service.retrieve().await.unwrap().is_empty());

    service
        .create(vec![draft("A", "a"), draft("B", "b"), draft("C", "c")])
        .await
        .unwrap();
    assert_eq!(service.retrieve().await.unwrap().len(), 3);

    service.clear().await.unwrap();
    assert!(service.retrieve().await.unwrap().is_empty());
}

// =============================================================================
// Scenario: create three, modify one description by name
// =============================================================================

/// Build a creation input from a tabular scenario row, the way the
/// acceptance harness describes POS records.
fn row(name: &str, description: &str, pos_type: &str, campus: &str) -> NewPos {
    let row: std::collections::HashMap<String, String> = [
        ("name", name),
        ("description", description),
        ("type", pos_type),
        ("campus", campus),
        ("street", "Universitaetsstrasse"),
        ("houseNumber", "30"),
        ("postalCode", "95447"),
        ("city", "Bayreuth"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    new_pos_from_row(&row).unwrap()
}

#[tokio::test]
async fn test_scenario_modify_description_by_name() {
    let service = service();

    let created = service
        .create(vec![
            row("A", "first", "CAFETERIA", "MAIN"),
            row("B", "second", "CAFE", "MAIN"),
            row("C", "third", "VENDING_MACHINE", "NORTH"),
        ])
        .await
        .unwrap();
    let b_id = created[1].id;

    // resolve the target by name, the way the acceptance harness does
    let existing = service
        .retrieve()
        .await
        .unwrap()
        .into_iter()
        .find(|pos| pos.name == "B")
        .expect("POS with name 'B' not found");
    let mut update = update_from(&existing);
    update.description = "New Desc".to_string();
    service.update(vec![update]).await.unwrap();

    let retrieved = service.retrieve().await.unwrap();
    let names: Vec<&str> = retrieved.iter().map(|pos| pos.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);
    assert_eq!(retrieved[1].description, "New Desc");
    assert_eq!(retrieved[1].id, b_id);
    assert_eq!(retrieved[0].description, "first");
    assert_eq!(retrieved[2].description, "third");
}
