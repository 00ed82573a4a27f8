use super::types::{Inventory, PowerUp};
use crate::error::{ProgressError, Result};
use crate::stats::{PlayerId, PlayerStats};
use crate::store::ProgressStore;

/// Buy one unit of `power_up`, paying from `total_points`.
///
/// Nothing changes when the player cannot afford it. Ranks and badges
/// already earned are unaffected by the lower point total.
pub fn purchase(
    stats: &mut PlayerStats,
    inventory: &mut Inventory,
    power_up: &PowerUp,
) -> Result<()> {
    if stats.total_points < power_up.cost {
        return Err(ProgressError::InsufficientPoints {
            needed: power_up.cost,
            available: stats.total_points,
        });
    }
    stats.total_points -= power_up.cost;
    inventory.add(&power_up.id);
    Ok(())
}

/// Find a power-up by id in a catalog.
pub fn find_power_up<'a>(catalog: &'a [PowerUp], id: &str) -> Result<&'a PowerUp> {
    catalog
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| ProgressError::UnknownPowerUp(id.to_string()))
}

/// A completed purchase as persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub power_up: PowerUp,
    pub owned: u32,
    pub points_left: u64,
}

/// Buy `power_up_id` for `player` and persist the result.
///
/// Points are saved before the inventory. If the inventory save fails the
/// points are refunded, so a failed purchase never costs anything.
pub fn buy(
    store: &mut dyn ProgressStore,
    player: PlayerId,
    power_up_id: &str,
) -> Result<Receipt> {
    let catalog = store.power_ups()?;
    let power_up = find_power_up(&catalog, power_up_id)?.clone();
    let before = store
        .load_stats(player)?
        .ok_or(ProgressError::PlayerNotFound(player))?;
    let mut stats = before;
    let mut inventory = store.inventory(player)?;

    purchase(&mut stats, &mut inventory, &power_up)?;
    store.save_stats(player, &stats)?;
    if let Err(err) = store.save_inventory(player, &inventory) {
        if let Err(refund) = store.save_stats(player, &before) {
            log::error!("could not refund {} to {}: {}", power_up.cost, player, refund);
        }
        return Err(err);
    }

    log::info!("{} bought {} for {}", player, power_up.id, power_up.cost);
    Ok(Receipt {
        owned: inventory.quantity(&power_up.id),
        points_left: stats.total_points,
        power_up,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shop::data::default_power_ups;
    use crate::store::{MemoryStore, Table};
    use uuid::Uuid;

    #[test]
    fn test_purchase_deducts_and_adds() {
        let catalog = default_power_ups();
        let hint = find_power_up(&catalog, "hint").unwrap();
        let mut stats = PlayerStats {
            total_points: 250,
            ..Default::default()
        };
        let mut inventory = Inventory::default();

        purchase(&mut stats, &mut inventory, hint).unwrap();
        purchase(&mut stats, &mut inventory, hint).unwrap();

        assert_eq!(stats.total_points, 50);
        assert_eq!(inventory.quantity("hint"), 2);
    }

    #[test]
    fn test_purchase_rejected_leaves_state_untouched() {
        let catalog = default_power_ups();
        let double = find_power_up(&catalog, "double-points").unwrap();
        let mut stats = PlayerStats {
            total_points: 499,
            ..Default::default()
        };
        let mut inventory = Inventory::default();

        let err = purchase(&mut stats, &mut inventory, double).unwrap_err();
        assert!(matches!(
            err,
            ProgressError::InsufficientPoints {
                needed: 500,
                available: 499
            }
        ));
        assert_eq!(stats.total_points, 499);
        assert_eq!(inventory.quantity("double-points"), 0);
    }

    #[test]
    fn test_unknown_power_up() {
        let catalog = default_power_ups();
        assert!(matches!(
            find_power_up(&catalog, "jetpack"),
            Err(ProgressError::UnknownPowerUp(_))
        ));
    }

    fn store_with_points(player: PlayerId, points: u64) -> MemoryStore {
        let mut store = MemoryStore::new();
        let stats = PlayerStats {
            total_points: points,
            ..Default::default()
        };
        store.save_stats(player, &stats).unwrap();
        store
    }

    #[test]
    fn test_buy_persists_points_and_inventory() {
        let player = Uuid::from_u128(1);
        let mut store = store_with_points(player, 300);

        let receipt = buy(&mut store, player, "hint").unwrap();
        assert_eq!(receipt.owned, 1);
        assert_eq!(receipt.points_left, 200);
        assert_eq!(store.load_stats(player).unwrap().unwrap().total_points, 200);
        assert_eq!(store.inventory(player).unwrap().quantity("hint"), 1);
    }

    #[test]
    fn test_buy_for_unknown_player() {
        let mut store = MemoryStore::new();
        let player = Uuid::from_u128(2);
        assert!(matches!(
            buy(&mut store, player, "hint"),
            Err(ProgressError::PlayerNotFound(id)) if id == player
        ));
        assert_eq!(store.inventory(player).unwrap(), Inventory::default());
    }

    #[test]
    fn test_failed_points_save_changes_nothing() {
        let player = Uuid::from_u128(3);
        let mut store = store_with_points(player, 300);
        store.fail_writes_to(Table::PlayerStats);

        assert!(matches!(
            buy(&mut store, player, "hint"),
            Err(ProgressError::InjectedFailure(_))
        ));
        assert_eq!(store.load_stats(player).unwrap().unwrap().total_points, 300);
        assert_eq!(store.inventory(player).unwrap().quantity("hint"), 0);
    }

    #[test]
    fn test_failed_inventory_save_refunds_points() {
        let player = Uuid::from_u128(4);
        let mut store = store_with_points(player, 300);
        store.fail_writes_to(Table::PlayerItems);

        assert!(buy(&mut store, player, "time-freeze").is_err());
        assert_eq!(store.load_stats(player).unwrap().unwrap().total_points, 300);
        assert_eq!(store.inventory(player).unwrap().quantity("time-freeze"), 0);
    }
}
