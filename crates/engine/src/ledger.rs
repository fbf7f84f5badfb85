//! Pure state-transition functions over a [`Snapshot`].
//!
//! Every operation takes the current snapshot by reference plus an action
//! payload and returns a full replacement snapshot (or a rejection). Wallet,
//! listings and history are updated in one value, so a partially applied
//! operation is structurally impossible.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use api_types::{
    ItemStatus,
    transaction::{Transaction, TxAction, TxStatus},
    waste::{ListingDraft, WasteItem},
};

use crate::{EngineError, ResultEngine, Snapshot, Tokens};

/// Credit payout for a listing: `max(1, round(quantity * multiplier))`,
/// rounding half away from zero.
pub fn listing_credits(draft: &ListingDraft) -> Tokens {
    let scaled = (draft.quantity as f64) * draft.quality.multiplier();
    Tokens::new((scaled.round() as i64).max(1))
}

impl Snapshot {
    /// Purchases the listing with id `item_id`.
    ///
    /// An unknown id is a no-op returning the snapshot unchanged: the UI
    /// only offers ids from the currently displayed list, so this is a
    /// contract leniency rather than an error. A listing that is not
    /// `Available` is rejected with [`EngineError::ItemNotAvailable`], and a
    /// wallet that cannot cover the price with
    /// [`EngineError::InsufficientBalance`].
    ///
    /// On success the wallet is debited, the item's status flips to `Sold`
    /// (everything else untouched) and one `Waste Purchased` transaction is
    /// prepended to the history.
    pub fn buy_item(&self, item_id: Uuid, now: DateTime<Utc>) -> ResultEngine<Snapshot> {
        let Some(item) = self.item(item_id) else {
            return Ok(self.clone());
        };

        if item.status != ItemStatus::Available {
            return Err(EngineError::ItemNotAvailable(format!(
                "{} from {} is {}",
                item.material,
                item.owner,
                item.status.as_str()
            )));
        }

        let price = Tokens::new(item.credits);
        let balance = Tokens::new(self.wallet.balance);
        if balance < price {
            return Err(EngineError::InsufficientBalance {
                required: price.raw(),
                available: balance.raw(),
            });
        }

        let mut wallet = self.wallet;
        wallet.balance = (balance - price).raw();
        wallet.spent = (Tokens::new(wallet.spent) + price).raw();

        let record = Transaction {
            id: Uuid::new_v4(),
            occurred_at: now,
            action: TxAction::WastePurchased,
            material: item.material.clone(),
            quantity: item.quantity,
            tokens: (-price).raw(),
            counterparty: item.owner.clone(),
            status: TxStatus::Completed,
        };

        let items = self
            .items
            .iter()
            .map(|candidate| {
                if candidate.id == item_id {
                    let mut sold = candidate.clone();
                    sold.status = ItemStatus::Sold;
                    sold
                } else {
                    candidate.clone()
                }
            })
            .collect();

        Ok(Snapshot {
            items,
            transactions: prepend(&self.transactions, record),
            wallet,
        })
    }

    /// Creates a listing from `draft`.
    ///
    /// Assigns a fresh id, prepends the listing, credits the wallet with the
    /// computed payout and prepends one `Waste Listed` transaction. Rejects
    /// only a zero quantity (the one structural invalidity a draft can
    /// carry).
    pub fn create_listing(
        &self,
        draft: &ListingDraft,
        owner: &str,
        now: DateTime<Utc>,
    ) -> ResultEngine<Snapshot> {
        if draft.quantity == 0 {
            return Err(EngineError::InvalidDraft(
                "quantity must be >= 1 kg".to_string(),
            ));
        }

        let credits = listing_credits(draft);

        let item = WasteItem {
            id: Uuid::new_v4(),
            material: draft.material.clone(),
            quantity: draft.quantity,
            owner: owner.to_string(),
            location: draft.location,
            credits: credits.raw(),
            description: if draft.description.trim().is_empty() {
                "User provided listing.".to_string()
            } else {
                draft.description.clone()
            },
            status: draft.status,
            images: draft.images.clone(),
        };

        let mut wallet = self.wallet;
        wallet.balance = (Tokens::new(wallet.balance) + credits).raw();
        wallet.earned = (Tokens::new(wallet.earned) + credits).raw();

        let record = Transaction {
            id: Uuid::new_v4(),
            occurred_at: now,
            action: TxAction::WasteListed,
            material: item.material.clone(),
            quantity: item.quantity,
            tokens: credits.raw(),
            counterparty: "Marketplace".to_string(),
            status: TxStatus::Verified,
        };

        Ok(Snapshot {
            items: prepend(&self.items, item),
            transactions: prepend(&self.transactions, record),
            wallet,
        })
    }

    /// Buys `amount` tokens with fiat.
    ///
    /// The fiat leg is display-only (no payment processor exists); the
    /// ledger records the token leg and nothing else.
    pub fn buy_tokens(&self, amount: Tokens, now: DateTime<Utc>) -> ResultEngine<Snapshot> {
        if !amount.is_positive() {
            return Err(EngineError::InvalidAmount(format!(
                "token purchase must be positive, got {amount}"
            )));
        }

        let mut wallet = self.wallet;
        wallet.balance = (Tokens::new(wallet.balance) + amount).raw();
        wallet.purchased = (Tokens::new(wallet.purchased) + amount).raw();

        let record = Transaction {
            id: Uuid::new_v4(),
            occurred_at: now,
            action: TxAction::TokensPurchased,
            material: "T2C".to_string(),
            quantity: amount.raw().unsigned_abs(),
            tokens: amount.raw(),
            counterparty: "Trash2Cash".to_string(),
            status: TxStatus::Completed,
        };

        Ok(Snapshot {
            items: self.items.clone(),
            transactions: prepend(&self.transactions, record),
            wallet,
        })
    }
}

fn prepend<T: Clone>(existing: &[T], head: T) -> Vec<T> {
    let mut next = Vec::with_capacity(existing.len() + 1);
    next.push(head);
    next.extend_from_slice(existing);
    next
}

#[cfg(test)]
mod tests {
    use api_types::{Location, QualityGrade};
    use chrono::TimeZone;

    use super::*;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
    }

    fn draft(quantity: u64, quality: QualityGrade) -> ListingDraft {
        ListingDraft {
            material: "Plastic".to_string(),
            quantity,
            quality,
            description: "Baled PET".to_string(),
            location: Location::Local,
            status: ItemStatus::Available,
            images: Vec::new(),
        }
    }

    #[test]
    fn credit_formula_matches_grade_table() {
        assert_eq!(listing_credits(&draft(10, QualityGrade::B)).raw(), 10);
        assert_eq!(listing_credits(&draft(10, QualityGrade::A)).raw(), 12);
        assert_eq!(listing_credits(&draft(10, QualityGrade::C)).raw(), 8);
        // Floor of 1 applies once the rounded payout drops below a token.
        assert_eq!(listing_credits(&draft(1, QualityGrade::C)).raw(), 1);
    }

    #[test]
    fn buy_item_debits_wallet_and_flips_status() {
        let snapshot = Snapshot::seeded(fixed_now());
        let target = snapshot.items[0].clone();
        assert_eq!(target.credits, 90);

        let next = snapshot.buy_item(target.id, fixed_now()).unwrap();

        assert_eq!(next.wallet.balance, 150);
        assert_eq!(next.wallet.spent, 150);
        assert_eq!(next.wallet.earned, snapshot.wallet.earned);
        assert_eq!(next.item(target.id).unwrap().status, ItemStatus::Sold);

        // All other items untouched.
        for (before, after) in snapshot.items.iter().zip(&next.items) {
            if before.id != target.id {
                assert_eq!(before, after);
            }
        }

        assert_eq!(next.transactions.len(), snapshot.transactions.len() + 1);
        let record = &next.transactions[0];
        assert_eq!(record.action, TxAction::WastePurchased);
        assert_eq!(record.tokens, -90);
        assert_eq!(record.counterparty, target.owner);
        assert_eq!(record.quantity, target.quantity);
        assert_eq!(record.status, TxStatus::Completed);
    }

    #[test]
    fn buy_item_rejects_insufficient_balance() {
        let mut snapshot = Snapshot::seeded(fixed_now());
        snapshot.wallet.balance = 50;
        let target = snapshot.items[0].id;

        let err = snapshot.buy_item(target, fixed_now()).unwrap_err();
        assert_eq!(
            err,
            EngineError::InsufficientBalance {
                required: 90,
                available: 50
            }
        );
    }

    #[test]
    fn buy_item_rejects_non_available_items() {
        let snapshot = Snapshot::seeded(fixed_now());
        let in_process = snapshot.items[1].clone();
        assert_eq!(in_process.status, ItemStatus::InProcess);

        assert!(matches!(
            snapshot.buy_item(in_process.id, fixed_now()),
            Err(EngineError::ItemNotAvailable(_))
        ));

        // A sold item cannot be bought twice.
        let sold = snapshot.buy_item(snapshot.items[0].id, fixed_now()).unwrap();
        assert!(matches!(
            sold.buy_item(snapshot.items[0].id, fixed_now()),
            Err(EngineError::ItemNotAvailable(_))
        ));
    }

    #[test]
    fn buy_item_with_unknown_id_is_a_no_op() {
        let snapshot = Snapshot::seeded(fixed_now());
        let next = snapshot.buy_item(Uuid::new_v4(), fixed_now()).unwrap();
        assert_eq!(next, snapshot);
    }

    #[test]
    fn create_listing_credits_wallet_and_prepends() {
        let snapshot = Snapshot::seeded(fixed_now());
        let next = snapshot
            .create_listing(&draft(10, QualityGrade::A), "You", fixed_now())
            .unwrap();

        assert_eq!(next.items.len(), snapshot.items.len() + 1);
        let listed = &next.items[0];
        assert_eq!(listed.credits, 12);
        assert_eq!(listed.owner, "You");

        assert_eq!(next.wallet.balance, snapshot.wallet.balance + 12);
        assert_eq!(next.wallet.earned, snapshot.wallet.earned + 12);
        assert_eq!(next.wallet.spent, snapshot.wallet.spent);

        let record = &next.transactions[0];
        assert_eq!(record.action, TxAction::WasteListed);
        assert_eq!(record.tokens, 12);
        assert_eq!(record.counterparty, "Marketplace");
        assert_eq!(record.status, TxStatus::Verified);
    }

    #[test]
    fn create_listing_rejects_zero_quantity() {
        let snapshot = Snapshot::seeded(fixed_now());
        assert!(matches!(
            snapshot.create_listing(&draft(0, QualityGrade::B), "You", fixed_now()),
            Err(EngineError::InvalidDraft(_))
        ));
    }

    #[test]
    fn create_listing_defaults_empty_description() {
        let snapshot = Snapshot::seeded(fixed_now());
        let mut blank = draft(5, QualityGrade::B);
        blank.description = "  ".to_string();
        let next = snapshot
            .create_listing(&blank, "You", fixed_now())
            .unwrap();
        assert_eq!(next.items[0].description, "User provided listing.");
    }

    #[test]
    fn buy_tokens_credits_balance_and_purchased() {
        let snapshot = Snapshot::seeded(fixed_now());
        let next = snapshot.buy_tokens(Tokens::new(100), fixed_now()).unwrap();

        assert_eq!(next.wallet.balance, snapshot.wallet.balance + 100);
        assert_eq!(next.wallet.purchased, snapshot.wallet.purchased + 100);

        let record = &next.transactions[0];
        assert_eq!(record.action, TxAction::TokensPurchased);
        assert_eq!(record.material, "T2C");
        assert_eq!(record.tokens, 100);
        assert_eq!(record.quantity, 100);
        assert_eq!(record.counterparty, "Trash2Cash");
    }

    #[test]
    fn buy_tokens_rejects_non_positive_amounts() {
        let snapshot = Snapshot::seeded(fixed_now());
        assert!(snapshot.buy_tokens(Tokens::ZERO, fixed_now()).is_err());
        assert!(snapshot.buy_tokens(Tokens::new(-5), fixed_now()).is_err());
    }
}
