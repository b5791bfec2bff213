//! Metanet data-carrier template.
//!
//! Builds unspendable outputs that anchor a node of metadata on chain:
//! OP_0 OP_RETURN halts evaluation unconditionally, and the pushes that
//! follow carry the protocol tag, the node's public key, the parent
//! transaction id (or "null" for a root node), and the caller's data
//! fields. Because the outputs are unspendable by construction there is
//! no unlocking side at all.

use quill_primitives::PublicKey;
use quill_script::opcodes::{OP_0, OP_RETURN};
use quill_script::{LockingScript, ScriptChunk, UnlockingScript};

use crate::template::UnlockingScriptTemplate;
use crate::transaction::Transaction;
use crate::TransactionError;

/// Protocol tag pushed as the first field of every Metanet output.
pub const PROTOCOL_TAG: &str = "meta";

/// Field value standing in for the parent transaction id of a root node.
const ROOT_PARENT: &str = "null";

/// Build a Metanet locking script.
///
/// The chunk sequence is OP_0, OP_RETURN, then one push per field in
/// fixed order: the protocol tag, the public key's canonical string
/// form, the parent transaction id (or "null" when `parent_txid` is
/// `None`), and finally each caller data field.
///
/// Each field is pushed with its own byte length as the opcode. Fields
/// of 76 bytes or more therefore do not produce a well-formed short
/// push; the encoding is kept as is rather than widened to a PUSHDATA
/// form. A field longer than 255 bytes cannot store its length in the
/// opcode byte at all and is rejected.
///
/// # Arguments
/// * `public_key` - The key responsible for the Metanet node.
/// * `parent_txid` - The parent node's transaction id, or `None` for a
///   root node.
/// * `data` - Metadata fields ending in the data payload, in order.
///
/// # Returns
/// The locking script, or `FieldTooLong` for a field over 255 bytes.
pub fn lock(
    public_key: &PublicKey,
    parent_txid: Option<&str>,
    data: &[&str],
) -> Result<LockingScript, TransactionError> {
    let mut chunks = vec![ScriptChunk::op(OP_0), ScriptChunk::op(OP_RETURN)];

    let key = public_key.to_string();
    let parent = parent_txid.unwrap_or(ROOT_PARENT);
    let mut fields: Vec<&str> = vec![PROTOCOL_TAG, key.as_str(), parent];
    fields.extend_from_slice(data);

    for field in fields {
        let bytes = field.as_bytes();
        if bytes.len() > 0xff {
            return Err(TransactionError::FieldTooLong(bytes.len()));
        }
        chunks.push(ScriptChunk::push(bytes.len() as u8, bytes.to_vec()));
    }

    Ok(LockingScript::from_chunks(chunks))
}

/// Request an unlocking handle for a Metanet output.
///
/// Always fails: OP_0 OP_RETURN outputs halt script evaluation
/// unconditionally, so no unlocking script can ever satisfy them.
///
/// # Returns
/// `UnlockNotSupported`, unconditionally.
pub fn unlock() -> Result<MetanetUnlocker, TransactionError> {
    Err(TransactionError::UnlockNotSupported("metanet"))
}

/// The unlocking handle type for Metanet outputs.
///
/// `unlock` never produces a value of this type. The trait methods fail
/// with the same signal, so the failure is total however the type is
/// reached.
#[derive(Debug)]
pub struct MetanetUnlocker;

impl UnlockingScriptTemplate for MetanetUnlocker {
    async fn sign(
        &self,
        _tx: &Transaction,
        _input_index: u32,
    ) -> Result<UnlockingScript, TransactionError> {
        Err(TransactionError::UnlockNotSupported("metanet"))
    }

    async fn estimate_length(&self) -> Result<u64, TransactionError> {
        Err(TransactionError::UnlockNotSupported("metanet"))
    }
}
