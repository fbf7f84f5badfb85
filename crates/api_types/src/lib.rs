use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Status of a waste listing in the marketplace.
///
/// The only engine-driven transition is `Available` -> `Sold` (via a
/// purchase). `InProcess` is a valid listing state with no transition out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemStatus {
    #[default]
    Available,
    #[serde(rename = "In-Process")]
    InProcess,
    Sold,
}

impl ItemStatus {
    /// Returns the display label used across the UI and CSV export.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::InProcess => "In-Process",
            Self::Sold => "Sold",
        }
    }

    pub const ALL: [ItemStatus; 3] = [Self::Available, Self::InProcess, Self::Sold];
}

/// Coarse origin category of a listing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Location {
    #[default]
    Local,
    Regional,
    International,
}

impl Location {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Local => "Local",
            Self::Regional => "Regional",
            Self::International => "International",
        }
    }

    pub const ALL: [Location; 3] = [Self::Local, Self::Regional, Self::International];
}

/// Quality grade of listed material. Scales the credit payout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualityGrade {
    A,
    #[default]
    B,
    C,
}

impl QualityGrade {
    /// Payout multiplier (A=1.2, B=1.0, C=0.8). Placeholder values kept
    /// as-is for behavioral compatibility with the demo fixtures.
    pub fn multiplier(self) -> f64 {
        match self {
            Self::A => 1.2,
            Self::B => 1.0,
            Self::C => 0.8,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A (High)",
            Self::B => "B (Medium)",
            Self::C => "C (Low)",
        }
    }

    pub const ALL: [QualityGrade; 3] = [Self::A, Self::B, Self::C];
}

pub mod waste {
    use super::*;

    /// A marketplace listing.
    ///
    /// `id` is unique and immutable once assigned. `credits` is the price in
    /// tokens and is always >= 1.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct WasteItem {
        pub id: Uuid,
        /// Material type. Open set; the well-known values are Plastic,
        /// Metal, Glass, Paper, Organic and Electronics.
        pub material: String,
        /// Quantity in kilograms.
        pub quantity: u64,
        /// Display name of the lister.
        pub owner: String,
        pub location: Location,
        /// Price/value in tokens. Always >= 1.
        pub credits: i64,
        pub description: String,
        pub status: ItemStatus,
        /// Image reference paths, possibly empty.
        #[serde(default)]
        pub images: Vec<String>,
    }

    /// Input for creating a listing. The engine assigns the id and computes
    /// the credit payout from quantity and quality.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct ListingDraft {
        pub material: String,
        /// Quantity in kilograms, must be >= 1.
        pub quantity: u64,
        pub quality: QualityGrade,
        pub description: String,
        pub location: Location,
        /// Initial listing status chosen by the lister.
        pub status: ItemStatus,
        #[serde(default)]
        pub images: Vec<String>,
    }

    pub const WELL_KNOWN_MATERIALS: [&str; 6] = [
        "Plastic",
        "Metal",
        "Glass",
        "Paper",
        "Organic",
        "Electronics",
    ];
}

pub mod transaction {
    use super::*;

    /// Kind of ledger event a transaction records.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub enum TxAction {
        #[serde(rename = "Waste Listed")]
        WasteListed,
        #[serde(rename = "Waste Purchased")]
        WastePurchased,
        #[serde(rename = "Tokens Purchased")]
        TokensPurchased,
    }

    impl TxAction {
        pub fn as_str(self) -> &'static str {
            match self {
                Self::WasteListed => "Waste Listed",
                Self::WastePurchased => "Waste Purchased",
                Self::TokensPurchased => "Tokens Purchased",
            }
        }
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub enum TxStatus {
        Pending,
        Verified,
        Completed,
    }

    impl TxStatus {
        pub fn as_str(self) -> &'static str {
            match self {
                Self::Pending => "Pending",
                Self::Verified => "Verified",
                Self::Completed => "Completed",
            }
        }
    }

    /// Immutable audit record of one ledger event.
    ///
    /// Exactly one transaction is created per successful ledger operation,
    /// prepended to the history (most-recent-first). Never mutated after
    /// creation.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct Transaction {
        pub id: Uuid,
        pub occurred_at: DateTime<Utc>,
        pub action: TxAction,
        /// Material label; `"T2C"` for token purchases.
        pub material: String,
        pub quantity: u64,
        /// Signed token amount: positive = credited to the wallet,
        /// negative = debited.
        pub tokens: i64,
        pub counterparty: String,
        pub status: TxStatus,
    }
}

pub mod wallet {
    use super::*;

    /// Running balances of the session wallet.
    ///
    /// `balance` stays >= 0 after every successful operation and equals
    /// `earned + purchased - spent` as long as operations are applied
    /// atomically (which the engine guarantees by returning wallet and
    /// history together).
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct WalletState {
        /// Current spendable tokens.
        pub balance: i64,
        /// Cumulative credits earned from listings.
        pub earned: i64,
        /// Cumulative credits spent on purchases.
        pub spent: i64,
        /// Cumulative tokens bought with fiat.
        pub purchased: i64,
    }
}

pub mod filter {
    use super::*;

    /// Criteria for filtering marketplace listings. All fields are
    /// AND-combined; `None` on a categorical field means "all".
    #[derive(Clone, Debug, Default, Serialize, Deserialize)]
    pub struct ItemFilter {
        /// Case-insensitive substring matched against material, owner or
        /// description. Empty matches everything.
        pub search: String,
        pub material: Option<String>,
        pub status: Option<ItemStatus>,
        pub location: Option<Location>,
        pub min_credits: i64,
        pub min_quantity: u64,
    }

    /// Criteria for filtering the transaction history.
    #[derive(Clone, Debug, Default, Serialize, Deserialize)]
    pub struct TransactionFilter {
        /// Case-insensitive substring matched against material, action
        /// label or counterparty. Empty matches everything.
        pub search: String,
        /// Case-insensitive substring of the action label; `None` means
        /// "all".
        pub action: Option<String>,
        /// Inclusive lower date bound (start of day, UTC).
        pub from: Option<chrono::NaiveDate>,
        /// Inclusive upper date bound (end of day, UTC).
        pub to: Option<chrono::NaiveDate>,
    }
}
