pub mod handle_ephemeral;
pub mod open_dm;
pub mod respond_ephemeral;
