use soroban_sdk::{token, Address, Env};

use crate::ledger;
use crate::storage_types::Error;

/// Pull `amount` of the configured token from `from` into the contract balance.
pub fn pull_into_escrow(env: &Env, from: &Address, amount: i128) -> Result<(), Error> {
    let token_address = ledger::token(env)?;
    let token_client = token::Client::new(env, &token_address);

    match token_client.try_transfer(from, &env.current_contract_address(), &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::TransferFailure),
    }
}

/// Pay `amount` out of the contract balance to `to`.
///
/// Callers commit their own state before calling this; an `Err` here is
/// returned from the entry point so the host discards those writes.
pub fn release_from_escrow(env: &Env, to: &Address, amount: i128) -> Result<(), Error> {
    let token_address = ledger::token(env)?;
    let token_client = token::Client::new(env, &token_address);

    match token_client.try_transfer(&env.current_contract_address(), to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::TransferFailure),
    }
}
