//! Script templates: named conventions for building the locking and
//! unlocking scripts of a specific script class.
//!
//! A template's `lock` is a synchronous, deterministic constructor and
//! lives as a module-level function with template-specific parameters.
//! Unlocking is deferred: `unlock` returns a handle implementing
//! `UnlockingScriptTemplate`, because a valid unlocking script needs a
//! finalized transaction and an asynchronous signing step that are not
//! available when the handle is created. A template whose script class
//! has no spending path fails at `unlock` time with `UnlockNotSupported`
//! instead of returning a handle.

pub mod metanet;

use std::future::Future;

use quill_script::UnlockingScript;

use crate::transaction::Transaction;
use crate::TransactionError;

/// The deferred signing handle produced by a template's `unlock`.
///
/// Handles hold no mutable state; handles for distinct inputs of the
/// same transaction are independent once the transaction's other fields
/// are fixed and may be awaited concurrently. There is no cancellation
/// primitive: dropping the future discards the pending work without
/// side effects.
pub trait UnlockingScriptTemplate {
    /// Produce the unlocking script for one input of a transaction.
    ///
    /// # Arguments
    /// * `tx` - The transaction being signed.
    /// * `input_index` - The index of the input to sign.
    ///
    /// # Returns
    /// The unlocking script, or an error if signing fails.
    fn sign(
        &self,
        tx: &Transaction,
        input_index: u32,
    ) -> impl Future<Output = Result<UnlockingScript, TransactionError>> + Send;

    /// Estimate the byte length of the unlocking script this handle will
    /// produce, for fee budgeting before the real signature exists.
    fn estimate_length(
        &self,
    ) -> impl Future<Output = Result<u64, TransactionError>> + Send;
}
