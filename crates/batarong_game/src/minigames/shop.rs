// crates/batarong_game/src/minigames/shop.rs
//! Ray's three-item cash shop. Purchases are permanent; the pistol is the
//! only item with a gameplay effect (it grants the gun).

pub const SHOP_ITEM_COUNT: usize = 3;

#[derive(Debug, Clone)]
pub struct ShopItem {
    pub name: &'static str,
    pub price: u64,
    pub purchased: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseOutcome {
    Purchased { grants_gun: bool },
    AlreadyOwned,
    NotEnoughPiwo,
}

pub struct ShopState {
    items: [ShopItem; SHOP_ITEM_COUNT],
}

impl Default for ShopState {
    fn default() -> Self {
        Self {
            items: [
                ShopItem { name: "A pistol", price: 5, purchased: false },
                ShopItem { name: "The America", price: 50, purchased: false },
                ShopItem { name: "nuke", price: 1000, purchased: false },
            ],
        }
    }
}

impl ShopState {
    pub fn items(&self) -> &[ShopItem] {
        &self.items
    }

    pub fn try_purchase(&mut self, index: usize, piwo: &mut u64) -> Option<PurchaseOutcome> {
        let item = self.items.get_mut(index)?;

        if item.purchased {
            return Some(PurchaseOutcome::AlreadyOwned);
        }
        if *piwo < item.price {
            return Some(PurchaseOutcome::NotEnoughPiwo);
        }

        *piwo -= item.price;
        item.purchased = true;
        Some(PurchaseOutcome::Purchased { grants_gun: index == 0 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pistol_purchase_grants_the_gun() {
        let mut shop = ShopState::default();
        let mut piwo = 10;

        let outcome = shop.try_purchase(0, &mut piwo);
        assert_eq!(outcome, Some(PurchaseOutcome::Purchased { grants_gun: true }));
        assert_eq!(piwo, 5);
    }

    #[test]
    fn other_items_do_not_grant_the_gun() {
        let mut shop = ShopState::default();
        let mut piwo = 2000;

        assert_eq!(
            shop.try_purchase(1, &mut piwo),
            Some(PurchaseOutcome::Purchased { grants_gun: false })
        );
        assert_eq!(
            shop.try_purchase(2, &mut piwo),
            Some(PurchaseOutcome::Purchased { grants_gun: false })
        );
        assert_eq!(piwo, 2000 - 50 - 1000);
    }

    #[test]
    fn purchase_is_idempotent() {
        let mut shop = ShopState::default();
        let mut piwo = 100;

        shop.try_purchase(0, &mut piwo);
        assert_eq!(shop.try_purchase(0, &mut piwo), Some(PurchaseOutcome::AlreadyOwned));
        assert_eq!(piwo, 95);
    }

    #[test]
    fn insufficient_funds_deduct_nothing() {
        let mut shop = ShopState::default();
        let mut piwo = 4;

        assert_eq!(shop.try_purchase(0, &mut piwo), Some(PurchaseOutcome::NotEnoughPiwo));
        assert_eq!(piwo, 4);
        assert!(!shop.items()[0].purchased);
    }

    #[test]
    fn out_of_range_index_is_none() {
        let mut shop = ShopState::default();
        let mut piwo = 100;
        assert_eq!(shop.try_purchase(3, &mut piwo), None);
    }
}
