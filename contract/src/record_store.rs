//! The record contract over world state.

use dispute_store::StateStore;
use dispute_types::Transaction;
use tracing::{debug, info, warn};

use crate::key_lock::KeyLocks;
use crate::seed::seed_transactions;
use crate::ContractError;

/// Manages `Transaction` records keyed by their id.
///
/// Each operation issues at most two backend calls. `create` and `update`
/// hold a per-key lock across their existence check and write, so two
/// concurrent creates of the same unseen id cannot both succeed.
pub struct RecordStore<S> {
    state: S,
    locks: KeyLocks,
}

impl<S: StateStore> RecordStore<S> {
    pub fn new(state: S) -> Self {
        Self {
            state,
            locks: KeyLocks::new(),
        }
    }

    /// The underlying world state.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Write the base set of transactions to world state.
    ///
    /// Existing keys are overwritten without an existence check, so calling
    /// this again resets the seed records to their original content.
    pub fn initialize(&self) -> Result<(), ContractError> {
        let seed = seed_transactions();
        for tran in &seed {
            let _guard = self.locks.lock(&tran.tran_id);
            self.write(tran)?;
        }
        info!(count = seed.len(), "seeded world state");
        Ok(())
    }

    /// Returns true when a transaction with the given id is stored.
    pub fn exists(&self, id: &str) -> Result<bool, ContractError> {
        Ok(self.state.state_exists(id)?)
    }

    /// Store a new transaction. Fails if the id is already taken.
    pub fn create(
        &self,
        id: &str,
        approval_code: &str,
        bill_details: &str,
        customer_details: &str,
        status: &str,
    ) -> Result<(), ContractError> {
        let _guard = self.locks.lock(id);
        if self.exists(id)? {
            warn!(id, "create rejected: transaction already exists");
            return Err(ContractError::AlreadyExists(id.to_string()));
        }

        let tran = Transaction::new(id, approval_code, bill_details, customer_details, status);
        self.write(&tran)?;
        info!(id, status, "transaction created");
        Ok(())
    }

    /// Fetch the transaction stored under `id`.
    pub fn read(&self, id: &str) -> Result<Transaction, ContractError> {
        let bytes = self
            .state
            .get_state(id)?
            .ok_or_else(|| ContractError::NotFound(id.to_string()))?;
        Ok(Transaction::from_json_bytes(&bytes)?)
    }

    /// Replace every field of an existing transaction.
    ///
    /// Nothing from the previous record survives; there is no partial update.
    pub fn update(
        &self,
        id: &str,
        approval_code: &str,
        bill_details: &str,
        customer_details: &str,
        status: &str,
    ) -> Result<(), ContractError> {
        let _guard = self.locks.lock(id);
        if !self.exists(id)? {
            warn!(id, "update rejected: transaction does not exist");
            return Err(ContractError::NotFound(id.to_string()));
        }

        let tran = Transaction::new(id, approval_code, bill_details, customer_details, status);
        self.write(&tran)?;
        info!(id, status, "transaction updated");
        Ok(())
    }

    fn write(&self, tran: &Transaction) -> Result<(), ContractError> {
        let bytes = tran.to_json_bytes()?;
        self.state.put_state(&tran.tran_id, &bytes)?;
        debug!(id = %tran.tran_id, bytes = bytes.len(), "transaction written");
        Ok(())
    }
}
