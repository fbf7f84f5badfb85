use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use api_types::{
    ItemStatus, Location,
    transaction::{Transaction, TxAction, TxStatus},
    wallet::WalletState,
    waste::WasteItem,
};

/// Full session state at a point in time.
///
/// The caller owns exactly one `Snapshot` and replaces it wholesale with the
/// value returned by a ledger operation; the engine never mutates a snapshot
/// in place and never retains references across calls. This keeps the
/// wallet, the listings and the transaction history consistent by
/// construction.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub items: Vec<WasteItem>,
    /// Most-recent-first; new transactions are prepended.
    pub transactions: Vec<Transaction>,
    pub wallet: WalletState,
}

impl Snapshot {
    /// Demo fixtures the session starts from after "login".
    ///
    /// Four listings, three historical transactions (today, yesterday, two
    /// days ago) and a wallet at 240 T2C.
    pub fn seeded(now: DateTime<Utc>) -> Self {
        let items = vec![
            WasteItem {
                id: Uuid::new_v4(),
                material: "Plastic".to_string(),
                quantity: 120,
                owner: "GreenWorks Co.".to_string(),
                location: Location::Regional,
                credits: 90,
                description: "Sorted PET bottles, 90% clear, baled.".to_string(),
                status: ItemStatus::Available,
                images: Vec::new(),
            },
            WasteItem {
                id: Uuid::new_v4(),
                material: "Metal".to_string(),
                quantity: 60,
                owner: "Urban Scrap".to_string(),
                location: Location::Local,
                credits: 150,
                description: "Aluminum cans, crushed, well sorted.".to_string(),
                status: ItemStatus::InProcess,
                images: Vec::new(),
            },
            WasteItem {
                id: Uuid::new_v4(),
                material: "Glass".to_string(),
                quantity: 200,
                owner: "City MRF".to_string(),
                location: Location::Regional,
                credits: 60,
                description: "Mixed glass cullet, color separated.".to_string(),
                status: ItemStatus::Available,
                images: Vec::new(),
            },
            WasteItem {
                id: Uuid::new_v4(),
                material: "Paper".to_string(),
                quantity: 100,
                owner: "PaperLoop".to_string(),
                location: Location::International,
                credits: 80,
                description: "Cardboard bales, minimal contamination.".to_string(),
                status: ItemStatus::Sold,
                images: Vec::new(),
            },
        ];

        let transactions = vec![
            Transaction {
                id: Uuid::new_v4(),
                occurred_at: now,
                action: TxAction::WasteListed,
                material: "Plastic".to_string(),
                quantity: 50,
                tokens: 40,
                counterparty: "Marketplace".to_string(),
                status: TxStatus::Verified,
            },
            Transaction {
                id: Uuid::new_v4(),
                occurred_at: now - Duration::days(1),
                action: TxAction::TokensPurchased,
                material: "T2C".to_string(),
                quantity: 100,
                tokens: 100,
                counterparty: "Trash2Cash".to_string(),
                status: TxStatus::Completed,
            },
            Transaction {
                id: Uuid::new_v4(),
                occurred_at: now - Duration::days(2),
                action: TxAction::WastePurchased,
                material: "Metal".to_string(),
                quantity: 20,
                tokens: -60,
                counterparty: "Urban Scrap".to_string(),
                status: TxStatus::Completed,
            },
        ];

        Self {
            items,
            transactions,
            wallet: WalletState {
                balance: 240,
                earned: 140,
                spent: 60,
                purchased: 160,
            },
        }
    }

    /// Looks a listing up by id.
    pub fn item(&self, item_id: Uuid) -> Option<&WasteItem> {
        self.items.iter().find(|item| item.id == item_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_wallet_matches_fixtures() {
        let snapshot = Snapshot::seeded(Utc::now());
        assert_eq!(snapshot.wallet.balance, 240);
        assert_eq!(snapshot.wallet.earned, 140);
        assert_eq!(snapshot.wallet.spent, 60);
        assert_eq!(snapshot.wallet.purchased, 160);
        assert_eq!(snapshot.items.len(), 4);
        assert_eq!(snapshot.transactions.len(), 3);
    }

    #[test]
    fn seeded_history_is_most_recent_first() {
        let snapshot = Snapshot::seeded(Utc::now());
        let times: Vec<_> = snapshot
            .transactions
            .iter()
            .map(|tx| tx.occurred_at)
            .collect();
        assert!(times[0] > times[1]);
        assert!(times[1] > times[2]);
    }

    #[test]
    fn snapshot_round_trips_as_json() {
        let snapshot = Snapshot::seeded(Utc::now());
        let payload = serde_json::to_string(&snapshot).unwrap();
        let restored: Snapshot = serde_json::from_str(&payload).unwrap();
        assert_eq!(restored, snapshot);
    }
}
