pub mod kind;
pub mod ledger;
pub mod outcome;
