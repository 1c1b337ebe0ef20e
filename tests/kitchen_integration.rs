//! Integration tests for the kitchen world
//!
//! These tests drive the world the way the UI does:
//! - select an item type, place it, remove it
//! - watch the work-triangle report follow every change
//! - stack ovens and take stacks apart again

use glam::Vec3;
use kitchen_planner::core::config::{PlannerConfig, RoomConfig};
use kitchen_planner::core::error::PlannerError;
use kitchen_planner::core::types::{ItemId, ItemType};
use kitchen_planner::world::{KitchenWorld, PlaceOutcome};
use proptest::prelude::*;

fn new_world() -> KitchenWorld {
    KitchenWorld::new(RoomConfig::new(4.0, 5.0), PlannerConfig::default())
        .expect("default world should build")
}

fn place(world: &mut KitchenWorld, item_type: ItemType, position: Vec3) -> ItemId {
    let id = world.select_item(item_type).expect("item available");
    let outcome = world.place_item(id, position, None).expect("place succeeds");
    assert_eq!(outcome, PlaceOutcome::Placed);
    id
}

fn ovens(world: &KitchenWorld) -> (ItemId, ItemId) {
    let ids: Vec<ItemId> = world
        .items()
        .iter()
        .filter(|i| i.item_type == ItemType::Oven)
        .map(|i| i.id)
        .collect();
    (ids[0], ids[1])
}

// ============================================================================
// Work Triangle Scenarios
// ============================================================================

/// Sink at (0,0,2), stove at (0,0,0.2), refrigerator at (2,0,0)
#[test]
fn test_golden_triangle_end_to_end() {
    let mut world = new_world();

    place(&mut world, ItemType::Sink, Vec3::new(0.0, 0.0, 2.0));
    assert!(!world.triangle_report().is_complete);

    place(&mut world, ItemType::Stove, Vec3::new(0.0, 0.0, 0.2));
    assert!(!world.triangle_report().is_complete);

    place(&mut world, ItemType::Refrigerator, Vec3::new(2.0, 0.0, 0.0));

    let report = world.triangle_report();
    assert!(report.is_complete);
    assert!(report.is_valid, "violations: {:?}", report.violations);

    let sides = report.sides.expect("complete report has sides");
    assert!((sides.sink_stove - 1.8).abs() < 0.01);
    assert!((sides.sink_refrigerator - 2.83).abs() < 0.01);
    assert!((sides.stove_refrigerator - 2.0).abs() < 0.02);

    // Completion stays an explicit action
    assert!(!world.is_completed());
    world.mark_complete().unwrap();
    assert!(world.is_completed());
}

#[test]
fn test_triangle_incomplete_whatever_else_is_placed() {
    let mut world = new_world();
    place(&mut world, ItemType::Sink, Vec3::new(-1.0, 0.0, -2.0));
    place(&mut world, ItemType::Refrigerator, Vec3::new(1.5, 0.0, -2.0));
    place(&mut world, ItemType::Oven, Vec3::new(0.0, 0.0, 2.0));
    for i in 0..4 {
        place(&mut world, ItemType::Countertop, Vec3::new(-1.5 + i as f32 * 0.6, 0.0, 2.0));
    }

    let report = world.triangle_report();
    assert!(!report.is_complete);
    assert!(!report.is_valid);
    assert!(report.sides.is_none());
}

#[test]
fn test_triangle_boundary_distances() {
    let mut world = new_world();
    let sink = place(&mut world, ItemType::Sink, Vec3::new(0.0, 0.0, 0.0));
    let stove = place(&mut world, ItemType::Stove, Vec3::new(1.2, 0.0, 0.0));
    place(&mut world, ItemType::Refrigerator, Vec3::new(0.6, 0.0, 2.0));

    assert!(!world.triangle_report().is_valid);

    // Nudge the stove just past the minimum
    world.remove_item(stove).unwrap();
    let stove = place(&mut world, ItemType::Stove, Vec3::new(1.2001, 0.0, 0.0));
    assert!(world.triangle_report().is_valid);

    // Sink exactly at the maximum from the refrigerator
    world.remove_item(sink).unwrap();
    place(&mut world, ItemType::Sink, Vec3::new(0.6, 0.0, -3.0));
    let report = world.triangle_report();
    assert!(!report.is_valid);
    assert!(report.violations.iter().any(|v| v.contains("too far")));
    assert!(world.item(stove).unwrap().placed);
}

#[test]
fn test_drag_feedback_does_not_mutate() {
    let mut world = new_world();
    place(&mut world, ItemType::Sink, Vec3::new(0.0, 0.0, 2.0));
    place(&mut world, ItemType::Refrigerator, Vec3::new(2.0, 0.0, 0.0));

    let drag = world.drag_validation(Vec3::new(0.0, 0.0, 0.2), ItemType::Stove);
    assert!(drag.is_valid);
    assert!((drag.distances["Main Sink"] - 1.8).abs() < 1e-4);
    assert!(drag.distances.contains_key("Refrigerator"));

    let cramped = world.drag_validation(Vec3::new(0.0, 0.0, 1.5), ItemType::Stove);
    assert!(!cramped.is_valid);

    assert_eq!(world.placed_items().count(), 2);
    assert!(!world.triangle_report().is_complete);
}

// ============================================================================
// Inventory Scenarios
// ============================================================================

#[test]
fn test_eleventh_cabinet_is_refused() {
    let mut world = new_world();
    let cabinets: Vec<ItemId> = world
        .items()
        .iter()
        .filter(|i| i.item_type == ItemType::Countertop)
        .map(|i| i.id)
        .collect();
    assert_eq!(cabinets.len(), 10);

    for (i, id) in cabinets.iter().enumerate() {
        let outcome = world
            .place_item(*id, Vec3::new(-1.7 + (i % 5) as f32 * 0.6, 0.0, if i < 5 { -2.2 } else { 2.2 }), None)
            .unwrap();
        assert_eq!(outcome, PlaceOutcome::Placed);
    }

    // A lower cap refuses before the inventory runs dry
    let config = PlannerConfig {
        max_placed_countertops: 9,
        ..PlannerConfig::default()
    };
    let mut capped = KitchenWorld::new(RoomConfig::new(4.0, 5.0), config).unwrap();
    for id in &cabinets[..9] {
        capped.place_item(*id, Vec3::ZERO, None).unwrap();
    }
    let tenth = cabinets[9];
    assert_eq!(
        capped.place_item(tenth, Vec3::ZERO, None).unwrap(),
        PlaceOutcome::CabinetLimitReached
    );
    assert!(capped.available_items().any(|i| i.id == tenth));
    assert!(!capped.placed_items().any(|i| i.id == tenth));

    // With all 10 placed nothing is left to select
    assert!(matches!(
        world.select_item(ItemType::Countertop),
        Err(PlannerError::NothingAvailable(ItemType::Countertop))
    ));
}

#[test]
fn test_remove_resets_position_rotation_and_completion() {
    let mut world = new_world();
    place(&mut world, ItemType::Sink, Vec3::new(0.0, 0.0, 2.0));
    let stove = world.select_item(ItemType::Stove).unwrap();
    world
        .place_item(stove, Vec3::new(0.0, 0.0, 0.2), Some(std::f32::consts::FRAC_PI_2))
        .unwrap();
    place(&mut world, ItemType::Refrigerator, Vec3::new(2.0, 0.0, 0.0));
    world.mark_complete().unwrap();

    world.remove_item(stove).unwrap();

    let item = world.item(stove).unwrap();
    assert!(!item.placed);
    assert_eq!(item.position, Vec3::ZERO);
    assert_eq!(item.rotation, 0.0);
    assert!(world.available_items().any(|i| i.id == stove));
    assert!(!world.is_completed());
    assert!(!world.triangle_report().is_complete);
}

#[test]
fn test_missing_ids_are_explicit_errors() {
    let mut world = new_world();
    let ghost = ItemId(500);
    assert!(matches!(world.place_item(ghost, Vec3::ZERO, None), Err(PlannerError::ItemNotFound(_))));
    assert!(matches!(world.remove_item(ghost), Err(PlannerError::ItemNotFound(_))));
    assert!(matches!(world.update_cabinet_size(ghost, 1.0), Err(PlannerError::ItemNotFound(_))));
    assert!(matches!(world.update_oven_stack(ghost, ItemId(0)), Err(PlannerError::ItemNotFound(_))));
}

// ============================================================================
// Oven Stacking
// ============================================================================

#[test]
fn test_stack_and_remove_top() {
    let mut world = new_world();
    let (base, top) = ovens(&world);
    world.place_item(base, Vec3::new(-1.5, 0.0, 2.0), None).unwrap();

    world.update_oven_stack(base, top).unwrap();

    let base_item = world.item(base).unwrap();
    let top_item = world.item(top).unwrap();
    assert!((base_item.dimensions.height - 1.2).abs() < 1e-6);
    assert!(top_item.placed);
    assert_eq!(top_item.position, Vec3::new(-1.5, 0.6, 2.0));

    // Upper unit never blocks placement on its own
    let check = world
        .check_placement(base, Vec3::new(-1.5, 0.0, 2.0), 0.0, None)
        .unwrap();
    assert!(check.valid);

    world.remove_item(top).unwrap();

    let base_item = world.item(base).unwrap();
    assert!(base_item.stacked_with.is_none());
    assert!((base_item.dimensions.height - 0.6).abs() < 1e-6);
    assert_eq!(base_item.name, "Wall Oven 1");

    let top_item = world.item(top).unwrap();
    assert!(!top_item.placed);
    assert_eq!(top_item.name, "Wall Oven 2");
    assert!((top_item.dimensions.height - 0.6).abs() < 1e-6);
    assert_eq!(top_item.position, Vec3::ZERO);
}

#[test]
fn test_removing_base_lowers_top() {
    let mut world = new_world();
    let (base, top) = ovens(&world);
    world.place_item(base, Vec3::new(1.5, 0.0, -2.0), None).unwrap();
    world.update_oven_stack(base, top).unwrap();

    world.remove_item(base).unwrap();

    let top_item = world.item(top).unwrap();
    assert!(top_item.placed);
    assert!(top_item.stacked_on.is_none());
    assert_eq!(top_item.position, Vec3::new(1.5, 0.0, -2.0));
    assert_eq!(top_item.name, "Wall Oven 2");

    let base_item = world.item(base).unwrap();
    assert!(!base_item.placed);
    assert_eq!(base_item.name, "Wall Oven 1");
    assert!((base_item.dimensions.height - 0.6).abs() < 1e-6);
}

#[test]
fn test_removed_base_stacks_again_at_single_height() {
    let mut world = new_world();
    let (base, top) = ovens(&world);
    world.place_item(base, Vec3::new(1.5, 0.0, -2.0), None).unwrap();
    world.update_oven_stack(base, top).unwrap();
    world.remove_item(base).unwrap();

    // The old base goes on top of the oven left standing
    world.update_oven_stack(top, base).unwrap();

    let lower = world.item(top).unwrap();
    assert!((lower.dimensions.height - 1.2).abs() < 1e-6);
    let upper = world.item(base).unwrap();
    assert_eq!(upper.position, Vec3::new(1.5, 0.6, -2.0));
    assert!((upper.dimensions.height - 0.6).abs() < 1e-6);
    assert_eq!(upper.name, "Wall Oven 1 (Stacked)");
}

#[test]
fn test_stack_onto_unplaced_base_fails() {
    let mut world = new_world();
    let (base, top) = ovens(&world);
    assert!(matches!(
        world.update_oven_stack(base, top),
        Err(PlannerError::ItemNotPlaced(_))
    ));
    assert!(!world.item(top).unwrap().placed);
}

// ============================================================================
// Pool Exclusivity
// ============================================================================

#[derive(Debug, Clone)]
enum Op {
    Place(u32, f32, f32),
    Remove(u32),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u32..18, -2.0f32..2.0, -2.5f32..2.5).prop_map(|(id, x, z)| Op::Place(id, x, z)),
        (0u32..18).prop_map(Op::Remove),
    ]
}

proptest! {
    #[test]
    fn prop_pools_stay_disjoint(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let mut world = new_world();
        for op in ops {
            // Errors are fine here; only the pool invariant matters
            let _ = match op {
                Op::Place(id, x, z) => world.place_item(ItemId(id), Vec3::new(x, 0.0, z), None).map(|_| ()),
                Op::Remove(id) => world.remove_item(ItemId(id)),
            };

            let available: Vec<ItemId> = world.available_items().map(|i| i.id).collect();
            let placed: Vec<ItemId> = world.placed_items().map(|i| i.id).collect();
            prop_assert_eq!(available.len() + placed.len(), world.items().len());
            for id in &placed {
                prop_assert!(!available.contains(id));
            }
            prop_assert!(world.placed_items().filter(|i| i.item_type == ItemType::Countertop).count() <= 10);
            prop_assert_eq!(world.triangle_report().is_complete,
                world.placed_items().any(|i| i.item_type == ItemType::Sink)
                    && world.placed_items().any(|i| i.item_type == ItemType::Stove)
                    && world.placed_items().any(|i| i.item_type == ItemType::Refrigerator));
        }
    }
}
