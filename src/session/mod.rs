//! Interactive answering session.
//!
//! A session owns the answers typed so far and the page position of every
//! stage it has visited. It starts empty when `stagebook session` is run and
//! is dropped when the session ends; answers leave the session only through
//! export.
//!
//! Every user command becomes an [`Action`]; [`reduce`] turns the current
//! [`AppState`] and an action into the next state plus an [`Outcome`] telling
//! the driver which side effects to perform (persist the document, write an
//! export file) and what to print.

pub mod action;
pub mod ledger;
pub mod pagination;
pub mod reducer;
pub mod repl;
pub mod state;
pub mod view;

pub use action::{Action, ParseActionError};
pub use ledger::AnswerLedger;
pub use pagination::Pager;
pub use reducer::{reduce, DocumentChange, Outcome};
pub use repl::{run_session, SessionContext};
pub use state::{AppState, SessionSettings, SessionState};
