use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use api_types::{
    ItemStatus, Location, QualityGrade,
    transaction::TxAction,
    wallet::WalletState,
    waste::{ListingDraft, WasteItem},
};
use engine::{EngineError, Snapshot, Tokens};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap()
}

fn listing(credits: i64) -> WasteItem {
    WasteItem {
        id: Uuid::new_v4(),
        material: "Plastic".to_string(),
        quantity: 40,
        owner: "GreenWorks Co.".to_string(),
        location: Location::Regional,
        credits,
        description: "Baled PET.".to_string(),
        status: ItemStatus::Available,
        images: Vec::new(),
    }
}

#[test]
fn purchase_then_overdraw_leaves_state_unchanged() {
    let affordable = listing(150);
    let expensive = listing(200);
    let snapshot = Snapshot {
        items: vec![affordable.clone(), expensive.clone()],
        transactions: Vec::new(),
        wallet: WalletState {
            balance: 240,
            earned: 140,
            spent: 60,
            purchased: 160,
        },
    };

    let after_first = snapshot.buy_item(affordable.id, now()).unwrap();
    assert_eq!(after_first.wallet.balance, 90);
    assert_eq!(after_first.wallet.spent, 210);

    let err = after_first.buy_item(expensive.id, now()).unwrap_err();
    assert_eq!(
        err,
        EngineError::InsufficientBalance {
            required: 200,
            available: 90
        }
    );

    // Rejection produced no new snapshot: the caller keeps holding
    // `after_first`, and it is untouched.
    assert_eq!(after_first.wallet.balance, 90);
    assert_eq!(after_first.transactions.len(), 1);
    assert_eq!(
        after_first.item(expensive.id).unwrap().status,
        ItemStatus::Available
    );
}

#[test]
fn token_purchase_credits_wallet_and_records_t2c_leg() {
    let snapshot = Snapshot::seeded(now());
    let next = snapshot.buy_tokens(Tokens::new(100), now()).unwrap();

    assert_eq!(next.wallet.balance, snapshot.wallet.balance + 100);
    assert_eq!(next.wallet.purchased, snapshot.wallet.purchased + 100);
    assert_eq!(next.transactions.len(), snapshot.transactions.len() + 1);

    let record = &next.transactions[0];
    assert_eq!(record.tokens, 100);
    assert_eq!(record.material, "T2C");
    assert_eq!(record.action, TxAction::TokensPurchased);
}

#[test]
fn listing_purchase_and_token_buy_keep_balance_identity() {
    // balance == earned + purchased - spent holds through a whole session.
    let draft = ListingDraft {
        material: "Glass".to_string(),
        quantity: 25,
        quality: QualityGrade::A,
        description: "Color separated cullet.".to_string(),
        location: Location::Local,
        status: ItemStatus::Available,
        images: Vec::new(),
    };

    let mut snapshot = Snapshot::seeded(now());
    snapshot = snapshot.create_listing(&draft, "You", now()).unwrap();
    snapshot = snapshot.buy_tokens(Tokens::new(25), now()).unwrap();
    let target = snapshot
        .items
        .iter()
        .find(|item| item.status == ItemStatus::Available)
        .map(|item| item.id)
        .unwrap();
    snapshot = snapshot.buy_item(target, now()).unwrap();

    assert_eq!(
        snapshot.wallet.balance,
        snapshot.wallet.earned + snapshot.wallet.purchased - snapshot.wallet.spent
    );
    assert!(snapshot.wallet.balance >= 0);
}

#[test]
fn every_successful_operation_prepends_exactly_one_transaction() {
    let mut snapshot = Snapshot::seeded(now());
    let before = snapshot.transactions.len();

    let draft = ListingDraft {
        material: "Organic".to_string(),
        quantity: 12,
        quality: QualityGrade::C,
        description: String::new(),
        location: Location::Local,
        status: ItemStatus::Available,
        images: Vec::new(),
    };
    snapshot = snapshot.create_listing(&draft, "You", now()).unwrap();
    assert_eq!(snapshot.transactions.len(), before + 1);
    assert_eq!(snapshot.transactions[0].action, TxAction::WasteListed);

    snapshot = snapshot.buy_tokens(Tokens::new(10), now()).unwrap();
    assert_eq!(snapshot.transactions.len(), before + 2);
    assert_eq!(snapshot.transactions[0].action, TxAction::TokensPurchased);

    let target = snapshot.items[0].id;
    snapshot = snapshot.buy_item(target, now()).unwrap();
    assert_eq!(snapshot.transactions.len(), before + 3);
    assert_eq!(snapshot.transactions[0].action, TxAction::WastePurchased);
}
