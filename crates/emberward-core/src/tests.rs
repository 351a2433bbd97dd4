//! Tests for the core vocabulary: hex math, tier ordering, spawn table,
//! and the serde surface.

use crate::commands::PlayerCommand;
use crate::enums::{FireType, TowerKind};
use crate::events::SimEvent;
use crate::profiles::fire_profile;
use crate::spawn_table::FireSpawnTable;
use crate::types::{Hex, TowerId, HEX_DIRECTIONS};

// ---- Hex math ----

#[test]
fn test_hex_distance_is_cube_max_abs() {
    let origin = Hex::ORIGIN;
    assert_eq!(origin.distance(Hex::new(3, 0)), 3);
    assert_eq!(origin.distance(Hex::new(0, -4)), 4);
    // q=2, r=-5 → s=3 → max(2,5,3) = 5
    assert_eq!(origin.distance(Hex::new(2, -5)), 5);
    assert_eq!(Hex::new(1, 1).distance(Hex::new(1, 1)), 0);
}

#[test]
fn test_hex_neighbors_are_all_at_distance_one() {
    let center = Hex::new(-2, 5);
    for n in center.neighbors() {
        assert_eq!(center.distance(n), 1);
    }
}

#[test]
fn test_hex_direction_roundtrip() {
    let h = Hex::new(4, -1);
    for d in 0..6u8 {
        let n = h.neighbor(d);
        assert_eq!(h.direction_to(n), Some(d));
    }
    assert_eq!(h.direction_to(Hex::new(4, -3)), None);
}

#[test]
fn test_opposite_directions_cancel() {
    for d in 0..6u8 {
        let there = Hex::ORIGIN.neighbor(d);
        let back = there.neighbor(d + 3);
        assert_eq!(back, Hex::ORIGIN);
    }
    // Direction table covers all six distinct offsets.
    for (i, a) in HEX_DIRECTIONS.iter().enumerate() {
        for b in &HEX_DIRECTIONS[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

// ---- Fire tiers ----

#[test]
fn test_fire_tier_ordering() {
    assert!(FireType::Cinder < FireType::Flame);
    assert!(FireType::Flame < FireType::Blaze);
    assert!(FireType::Inferno < FireType::Cataclysm);
    assert_eq!(FireType::Cinder.next_tier(), FireType::Flame);
    // Top tier saturates.
    assert_eq!(FireType::Cataclysm.next_tier(), FireType::Cataclysm);
}

#[test]
fn test_fire_profiles_escalate_with_tier() {
    let mut last_dps = 0.0;
    let mut last_health = 0.0;
    for t in FireType::ALL {
        let p = fire_profile(t);
        assert!(p.damage_per_sec > last_dps, "{t:?} dps should escalate");
        assert!(
            p.extinguish_time > last_health,
            "{t:?} extinguish time should escalate"
        );
        last_dps = p.damage_per_sec;
        last_health = p.extinguish_time;
    }
    assert_eq!(fire_profile(FireType::Cinder).extinguish_time, 5.0);
}

// ---- Spawn table ----

#[test]
fn test_default_table_rows_sum_to_one() {
    let table = FireSpawnTable::default();
    for wave in 1..=60 {
        let row = table.probabilities(wave);
        let total: f64 = row.iter().sum();
        assert!(
            (total - 1.0).abs() < 0.01,
            "wave {wave} row sums to {total}"
        );
        assert!(row.iter().all(|p| *p >= 0.0));
    }
}

#[test]
fn test_table_tiers_introduce_gradually() {
    let table = FireSpawnTable::default();
    // Wave 1 is all Cinder; Cataclysm has no weight yet.
    let early = table.probabilities(1);
    assert_eq!(early[FireType::Cinder.index()], 1.0);
    assert_eq!(early[FireType::Cataclysm.index()], 0.0);
    assert_eq!(table.max_tier(1), FireType::Cinder);

    // Late waves carry weight on the top tier.
    let late = table.probabilities(60);
    assert!(late[FireType::Cataclysm.index()] > 0.0);
    assert_eq!(table.max_tier(60), FireType::Cataclysm);
}

#[test]
fn test_table_lookup_clamps_past_end() {
    let table = FireSpawnTable::default();
    assert_eq!(table.probabilities(999), table.probabilities(60));
    // Wave 0 clamps to the first row rather than underflowing.
    assert_eq!(table.probabilities(0), table.probabilities(1));
}

#[test]
fn test_table_draw_covers_distribution() {
    let table = FireSpawnTable::from_rows(vec![[0.5, 0.5, 0.0, 0.0, 0.0, 0.0]]);
    assert_eq!(table.draw(1, 0.25), FireType::Cinder);
    assert_eq!(table.draw(1, 0.75), FireType::Flame);
    // A roll at the rounding tail lands on the strongest available tier.
    assert_eq!(table.draw(1, 0.9999999), FireType::Flame);
}

// ---- Serde surface ----

#[test]
fn test_commands_and_events_roundtrip_json() {
    let command = PlayerCommand::PlaceTower {
        kind: TowerKind::Bomber,
        hex: Hex::new(3, -2),
        direction: 4,
    };
    let json = serde_json::to_string(&command).unwrap();
    assert!(json.contains("\"type\":\"PlaceTower\""));
    let back: PlayerCommand = serde_json::from_str(&json).unwrap();
    assert!(matches!(
        back,
        PlayerCommand::PlaceTower { direction: 4, .. }
    ));

    let event = SimEvent::TowerDestroyed { tower: TowerId(7) };
    let json = serde_json::to_string(&event).unwrap();
    let back: SimEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(back, event);
}

#[test]
fn test_degenerate_rows_degrade_safely() {
    let table = FireSpawnTable::from_rows(vec![[0.0, -3.0, 0.0, 0.0, 0.0, f64::NAN]]);
    let row = table.probabilities(1);
    assert_eq!(row[0], 1.0, "zero-weight row degrades to all-Cinder");
    assert!(FireSpawnTable::from_rows(Vec::new()).len() > 0);
}
