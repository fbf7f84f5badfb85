pub mod impact;
pub mod listing;
pub mod login;
pub mod marketplace;
pub mod tokens;
pub mod transactions;
pub mod wallet;
