//! Core types for the helpdesk fulfillment bot
//!
//! Wire-shape structs for the dialog platform contract plus the four
//! response-envelope builders. This crate does no IO; everything here is
//! plain data the other crates pass around.

pub mod request;
pub mod response;

pub use request::{BotInfo, CurrentIntent, DialogRequest, SessionAttributes, Slots};
pub use response::{
    close, confirm_intent, delegate, elicit_slot, DialogAction, DialogMessage, DialogResponse,
    FulfillmentState,
};
