//! Script opcode values and the bidirectional name table.
//!
//! One immutable table, shared by every caller: byte value to canonical
//! mnemonic and back. Byte values 1 through 75 are direct data pushes
//! (the value is the push length) and carry no mnemonic, as do the other
//! unassigned values; lookups for them return `None` rather than an error.

// Push value opcodes.
/// Push an empty byte string onto the stack.
pub const OP_0: u8 = 0x00;
/// Alias of `OP_0`.
pub const OP_FALSE: u8 = 0x00;
/// The next byte holds the length of the data to push.
pub const OP_PUSHDATA1: u8 = 0x4c;
/// The next 2 bytes (little-endian) hold the length of the data to push.
pub const OP_PUSHDATA2: u8 = 0x4d;
/// The next 4 bytes (little-endian) hold the length of the data to push.
pub const OP_PUSHDATA4: u8 = 0x4e;
/// Push the number -1 onto the stack.
pub const OP_1NEGATE: u8 = 0x4f;
/// Reserved; transaction is invalid unless occurring in an unexecuted branch.
pub const OP_RESERVED: u8 = 0x50;
/// Push the number 1 onto the stack.
pub const OP_1: u8 = 0x51;
/// Alias of `OP_1`.
pub const OP_TRUE: u8 = 0x51;
/// Push the number 2 onto the stack.
pub const OP_2: u8 = 0x52;
/// Push the number 3 onto the stack.
pub const OP_3: u8 = 0x53;
/// Push the number 4 onto the stack.
pub const OP_4: u8 = 0x54;
/// Push the number 5 onto the stack.
pub const OP_5: u8 = 0x55;
/// Push the number 6 onto the stack.
pub const OP_6: u8 = 0x56;
/// Push the number 7 onto the stack.
pub const OP_7: u8 = 0x57;
/// Push the number 8 onto the stack.
pub const OP_8: u8 = 0x58;
/// Push the number 9 onto the stack.
pub const OP_9: u8 = 0x59;
/// Push the number 10 onto the stack.
pub const OP_10: u8 = 0x5a;
/// Push the number 11 onto the stack.
pub const OP_11: u8 = 0x5b;
/// Push the number 12 onto the stack.
pub const OP_12: u8 = 0x5c;
/// Push the number 13 onto the stack.
pub const OP_13: u8 = 0x5d;
/// Push the number 14 onto the stack.
pub const OP_14: u8 = 0x5e;
/// Push the number 15 onto the stack.
pub const OP_15: u8 = 0x5f;
/// Push the number 16 onto the stack.
pub const OP_16: u8 = 0x60;

// Control flow.
/// Do nothing.
pub const OP_NOP: u8 = 0x61;
/// Reserved.
pub const OP_VER: u8 = 0x62;
/// Execute the following statements if the top stack value is truthy.
pub const OP_IF: u8 = 0x63;
/// Execute the following statements if the top stack value is falsy.
pub const OP_NOTIF: u8 = 0x64;
/// Reserved.
pub const OP_VERIF: u8 = 0x65;
/// Reserved.
pub const OP_VERNOTIF: u8 = 0x66;
/// Marks the alternative branch of an `OP_IF`.
pub const OP_ELSE: u8 = 0x67;
/// Ends an `OP_IF` / `OP_NOTIF` block.
pub const OP_ENDIF: u8 = 0x68;
/// Fail unless the top stack value is truthy.
pub const OP_VERIFY: u8 = 0x69;
/// Marks the output unspendable; the remainder of the script is data.
pub const OP_RETURN: u8 = 0x6a;

// Stack.
/// Move the top stack item to the alt stack.
pub const OP_TOALTSTACK: u8 = 0x6b;
/// Move the top alt stack item to the stack.
pub const OP_FROMALTSTACK: u8 = 0x6c;
/// Drop the top two stack items.
pub const OP_2DROP: u8 = 0x6d;
/// Duplicate the top two stack items.
pub const OP_2DUP: u8 = 0x6e;
/// Duplicate the top three stack items.
pub const OP_3DUP: u8 = 0x6f;
/// Copy the third and fourth stack items to the top.
pub const OP_2OVER: u8 = 0x70;
/// Rotate the fifth and sixth stack items to the top.
pub const OP_2ROT: u8 = 0x71;
/// Swap the top two pairs of stack items.
pub const OP_2SWAP: u8 = 0x72;
/// Duplicate the top stack item if it is truthy.
pub const OP_IFDUP: u8 = 0x73;
/// Push the stack depth.
pub const OP_DEPTH: u8 = 0x74;
/// Drop the top stack item.
pub const OP_DROP: u8 = 0x75;
/// Duplicate the top stack item.
pub const OP_DUP: u8 = 0x76;
/// Remove the second stack item.
pub const OP_NIP: u8 = 0x77;
/// Copy the second stack item to the top.
pub const OP_OVER: u8 = 0x78;
/// Copy the n-th stack item to the top.
pub const OP_PICK: u8 = 0x79;
/// Move the n-th stack item to the top.
pub const OP_ROLL: u8 = 0x7a;
/// Rotate the top three stack items.
pub const OP_ROT: u8 = 0x7b;
/// Swap the top two stack items.
pub const OP_SWAP: u8 = 0x7c;
/// Copy the top stack item below the second item.
pub const OP_TUCK: u8 = 0x7d;

// Splice.
/// Concatenate the top two byte strings.
pub const OP_CAT: u8 = 0x7e;
/// Split a byte string at an index.
pub const OP_SPLIT: u8 = 0x7f;
/// Convert a number to a byte string of a given size.
pub const OP_NUM2BIN: u8 = 0x80;
/// Convert a byte string to a number.
pub const OP_BIN2NUM: u8 = 0x81;
/// Push the length of the top byte string.
pub const OP_SIZE: u8 = 0x82;

// Bitwise logic.
/// Bitwise invert.
pub const OP_INVERT: u8 = 0x83;
/// Bitwise and.
pub const OP_AND: u8 = 0x84;
/// Bitwise or.
pub const OP_OR: u8 = 0x85;
/// Bitwise xor.
pub const OP_XOR: u8 = 0x86;
/// Byte-string equality.
pub const OP_EQUAL: u8 = 0x87;
/// `OP_EQUAL` followed by `OP_VERIFY`.
pub const OP_EQUALVERIFY: u8 = 0x88;
/// Reserved.
pub const OP_RESERVED1: u8 = 0x89;
/// Reserved.
pub const OP_RESERVED2: u8 = 0x8a;

// Arithmetic.
/// Add 1.
pub const OP_1ADD: u8 = 0x8b;
/// Subtract 1.
pub const OP_1SUB: u8 = 0x8c;
/// Multiply by 2.
pub const OP_2MUL: u8 = 0x8d;
/// Divide by 2.
pub const OP_2DIV: u8 = 0x8e;
/// Negate.
pub const OP_NEGATE: u8 = 0x8f;
/// Absolute value.
pub const OP_ABS: u8 = 0x90;
/// Boolean not.
pub const OP_NOT: u8 = 0x91;
/// 0 if the input is 0, 1 otherwise.
pub const OP_0NOTEQUAL: u8 = 0x92;
/// Addition.
pub const OP_ADD: u8 = 0x93;
/// Subtraction.
pub const OP_SUB: u8 = 0x94;
/// Multiplication.
pub const OP_MUL: u8 = 0x95;
/// Division.
pub const OP_DIV: u8 = 0x96;
/// Remainder.
pub const OP_MOD: u8 = 0x97;
/// Left shift.
pub const OP_LSHIFT: u8 = 0x98;
/// Right shift.
pub const OP_RSHIFT: u8 = 0x99;
/// Boolean and.
pub const OP_BOOLAND: u8 = 0x9a;
/// Boolean or.
pub const OP_BOOLOR: u8 = 0x9b;
/// Numeric equality.
pub const OP_NUMEQUAL: u8 = 0x9c;
/// `OP_NUMEQUAL` followed by `OP_VERIFY`.
pub const OP_NUMEQUALVERIFY: u8 = 0x9d;
/// Numeric inequality.
pub const OP_NUMNOTEQUAL: u8 = 0x9e;
/// Less than.
pub const OP_LESSTHAN: u8 = 0x9f;
/// Greater than.
pub const OP_GREATERTHAN: u8 = 0xa0;
/// Less than or equal.
pub const OP_LESSTHANOREQUAL: u8 = 0xa1;
/// Greater than or equal.
pub const OP_GREATERTHANOREQUAL: u8 = 0xa2;
/// Minimum of two numbers.
pub const OP_MIN: u8 = 0xa3;
/// Maximum of two numbers.
pub const OP_MAX: u8 = 0xa4;
/// Test whether a number is within a range.
pub const OP_WITHIN: u8 = 0xa5;

// Crypto.
/// RIPEMD-160 hash.
pub const OP_RIPEMD160: u8 = 0xa6;
/// SHA-1 hash.
pub const OP_SHA1: u8 = 0xa7;
/// SHA-256 hash.
pub const OP_SHA256: u8 = 0xa8;
/// RIPEMD-160 of SHA-256.
pub const OP_HASH160: u8 = 0xa9;
/// Double SHA-256.
pub const OP_HASH256: u8 = 0xaa;
/// Signature-hash boundary marker.
pub const OP_CODESEPARATOR: u8 = 0xab;
/// Check an ECDSA signature.
pub const OP_CHECKSIG: u8 = 0xac;
/// `OP_CHECKSIG` followed by `OP_VERIFY`.
pub const OP_CHECKSIGVERIFY: u8 = 0xad;
/// Check an m-of-n multisignature.
pub const OP_CHECKMULTISIG: u8 = 0xae;
/// `OP_CHECKMULTISIG` followed by `OP_VERIFY`.
pub const OP_CHECKMULTISIGVERIFY: u8 = 0xaf;

// Reserved no-ops.
/// Does nothing.
pub const OP_NOP1: u8 = 0xb0;
/// Does nothing.
pub const OP_NOP2: u8 = 0xb1;
/// Does nothing.
pub const OP_NOP3: u8 = 0xb2;
/// Does nothing.
pub const OP_NOP4: u8 = 0xb3;
/// Does nothing.
pub const OP_NOP5: u8 = 0xb4;
/// Does nothing.
pub const OP_NOP6: u8 = 0xb5;
/// Does nothing.
pub const OP_NOP7: u8 = 0xb6;
/// Does nothing.
pub const OP_NOP8: u8 = 0xb7;
/// Does nothing.
pub const OP_NOP9: u8 = 0xb8;
/// Does nothing.
pub const OP_NOP10: u8 = 0xb9;

// Template matching placeholders, never valid in a real script.
/// Placeholder for a public key hash in script templates.
pub const OP_PUBKEYHASH: u8 = 0xfd;
/// Placeholder for a public key in script templates.
pub const OP_PUBKEY: u8 = 0xfe;
/// Placeholder for any invalid opcode.
pub const OP_INVALIDOPCODE: u8 = 0xff;

/// Look up the canonical mnemonic for an opcode byte.
///
/// Direct-push opcodes (1 through 75) and other unassigned byte values
/// have no mnemonic and return `None`.
///
/// # Arguments
/// * `op` - The opcode byte.
///
/// # Returns
/// The canonical `OP_...` name, or `None` for nameless values.
pub fn opcode_to_string(op: u8) -> Option<&'static str> {
    let name = match op {
        OP_0 => "OP_0",
        OP_PUSHDATA1 => "OP_PUSHDATA1",
        OP_PUSHDATA2 => "OP_PUSHDATA2",
        OP_PUSHDATA4 => "OP_PUSHDATA4",
        OP_1NEGATE => "OP_1NEGATE",
        OP_RESERVED => "OP_RESERVED",
        OP_1 => "OP_1",
        OP_2 => "OP_2",
        OP_3 => "OP_3",
        OP_4 => "OP_4",
        OP_5 => "OP_5",
        OP_6 => "OP_6",
        OP_7 => "OP_7",
        OP_8 => "OP_8",
        OP_9 => "OP_9",
        OP_10 => "OP_10",
        OP_11 => "OP_11",
        OP_12 => "OP_12",
        OP_13 => "OP_13",
        OP_14 => "OP_14",
        OP_15 => "OP_15",
        OP_16 => "OP_16",
        OP_NOP => "OP_NOP",
        OP_VER => "OP_VER",
        OP_IF => "OP_IF",
        OP_NOTIF => "OP_NOTIF",
        OP_VERIF => "OP_VERIF",
        OP_VERNOTIF => "OP_VERNOTIF",
        OP_ELSE => "OP_ELSE",
        OP_ENDIF => "OP_ENDIF",
        OP_VERIFY => "OP_VERIFY",
        OP_RETURN => "OP_RETURN",
        OP_TOALTSTACK => "OP_TOALTSTACK",
        OP_FROMALTSTACK => "OP_FROMALTSTACK",
        OP_2DROP => "OP_2DROP",
        OP_2DUP => "OP_2DUP",
        OP_3DUP => "OP_3DUP",
        OP_2OVER => "OP_2OVER",
        OP_2ROT => "OP_2ROT",
        OP_2SWAP => "OP_2SWAP",
        OP_IFDUP => "OP_IFDUP",
        OP_DEPTH => "OP_DEPTH",
        OP_DROP => "OP_DROP",
        OP_DUP => "OP_DUP",
        OP_NIP => "OP_NIP",
        OP_OVER => "OP_OVER",
        OP_PICK => "OP_PICK",
        OP_ROLL => "OP_ROLL",
        OP_ROT => "OP_ROT",
        OP_SWAP => "OP_SWAP",
        OP_TUCK => "OP_TUCK",
        OP_CAT => "OP_CAT",
        OP_SPLIT => "OP_SPLIT",
        OP_NUM2BIN => "OP_NUM2BIN",
        OP_BIN2NUM => "OP_BIN2NUM",
        OP_SIZE => "OP_SIZE",
        OP_INVERT => "OP_INVERT",
        OP_AND => "OP_AND",
        OP_OR => "OP_OR",
        OP_XOR => "OP_XOR",
        OP_EQUAL => "OP_EQUAL",
        OP_EQUALVERIFY => "OP_EQUALVERIFY",
        OP_RESERVED1 => "OP_RESERVED1",
        OP_RESERVED2 => "OP_RESERVED2",
        OP_1ADD => "OP_1ADD",
        OP_1SUB => "OP_1SUB",
        OP_2MUL => "OP_2MUL",
        OP_2DIV => "OP_2DIV",
        OP_NEGATE => "OP_NEGATE",
        OP_ABS => "OP_ABS",
        OP_NOT => "OP_NOT",
        OP_0NOTEQUAL => "OP_0NOTEQUAL",
        OP_ADD => "OP_ADD",
        OP_SUB => "OP_SUB",
        OP_MUL => "OP_MUL",
        OP_DIV => "OP_DIV",
        OP_MOD => "OP_MOD",
        OP_LSHIFT => "OP_LSHIFT",
        OP_RSHIFT => "OP_RSHIFT",
        OP_BOOLAND => "OP_BOOLAND",
        OP_BOOLOR => "OP_BOOLOR",
        OP_NUMEQUAL => "OP_NUMEQUAL",
        OP_NUMEQUALVERIFY => "OP_NUMEQUALVERIFY",
        OP_NUMNOTEQUAL => "OP_NUMNOTEQUAL",
        OP_LESSTHAN => "OP_LESSTHAN",
        OP_GREATERTHAN => "OP_GREATERTHAN",
        OP_LESSTHANOREQUAL => "OP_LESSTHANOREQUAL",
        OP_GREATERTHANOREQUAL => "OP_GREATERTHANOREQUAL",
        OP_MIN => "OP_MIN",
        OP_MAX => "OP_MAX",
        OP_WITHIN => "OP_WITHIN",
        OP_RIPEMD160 => "OP_RIPEMD160",
        OP_SHA1 => "OP_SHA1",
        OP_SHA256 => "OP_SHA256",
        OP_HASH160 => "OP_HASH160",
        OP_HASH256 => "OP_HASH256",
        OP_CODESEPARATOR => "OP_CODESEPARATOR",
        OP_CHECKSIG => "OP_CHECKSIG",
        OP_CHECKSIGVERIFY => "OP_CHECKSIGVERIFY",
        OP_CHECKMULTISIG => "OP_CHECKMULTISIG",
        OP_CHECKMULTISIGVERIFY => "OP_CHECKMULTISIGVERIFY",
        OP_NOP1 => "OP_NOP1",
        OP_NOP2 => "OP_NOP2",
        OP_NOP3 => "OP_NOP3",
        OP_NOP4 => "OP_NOP4",
        OP_NOP5 => "OP_NOP5",
        OP_NOP6 => "OP_NOP6",
        OP_NOP7 => "OP_NOP7",
        OP_NOP8 => "OP_NOP8",
        OP_NOP9 => "OP_NOP9",
        OP_NOP10 => "OP_NOP10",
        OP_PUBKEYHASH => "OP_PUBKEYHASH",
        OP_PUBKEY => "OP_PUBKEY",
        OP_INVALIDOPCODE => "OP_INVALIDOPCODE",
        _ => return None,
    };
    Some(name)
}

/// Look up the opcode byte for a mnemonic.
///
/// Accepts the canonical names plus the `OP_FALSE` and `OP_TRUE` aliases.
///
/// # Arguments
/// * `name` - The mnemonic string.
///
/// # Returns
/// The opcode byte, or `None` if the name is not in the table.
pub fn string_to_opcode(name: &str) -> Option<u8> {
    let op = match name {
        "OP_0" | "OP_FALSE" => OP_0,
        "OP_PUSHDATA1" => OP_PUSHDATA1,
        "OP_PUSHDATA2" => OP_PUSHDATA2,
        "OP_PUSHDATA4" => OP_PUSHDATA4,
        "OP_1NEGATE" => OP_1NEGATE,
        "OP_RESERVED" => OP_RESERVED,
        "OP_1" | "OP_TRUE" => OP_1,
        "OP_2" => OP_2,
        "OP_3" => OP_3,
        "OP_4" => OP_4,
        "OP_5" => OP_5,
        "OP_6" => OP_6,
        "OP_7" => OP_7,
        "OP_8" => OP_8,
        "OP_9" => OP_9,
        "OP_10" => OP_10,
        "OP_11" => OP_11,
        "OP_12" => OP_12,
        "OP_13" => OP_13,
        "OP_14" => OP_14,
        "OP_15" => OP_15,
        "OP_16" => OP_16,
        "OP_NOP" => OP_NOP,
        "OP_VER" => OP_VER,
        "OP_IF" => OP_IF,
        "OP_NOTIF" => OP_NOTIF,
        "OP_VERIF" => OP_VERIF,
        "OP_VERNOTIF" => OP_VERNOTIF,
        "OP_ELSE" => OP_ELSE,
        "OP_ENDIF" => OP_ENDIF,
        "OP_VERIFY" => OP_VERIFY,
        "OP_RETURN" => OP_RETURN,
        "OP_TOALTSTACK" => OP_TOALTSTACK,
        "OP_FROMALTSTACK" => OP_FROMALTSTACK,
        "OP_2DROP" => OP_2DROP,
        "OP_2DUP" => OP_2DUP,
        "OP_3DUP" => OP_3DUP,
        "OP_2OVER" => OP_2OVER,
        "OP_2ROT" => OP_2ROT,
        "OP_2SWAP" => OP_2SWAP,
        "OP_IFDUP" => OP_IFDUP,
        "OP_DEPTH" => OP_DEPTH,
        "OP_DROP" => OP_DROP,
        "OP_DUP" => OP_DUP,
        "OP_NIP" => OP_NIP,
        "OP_OVER" => OP_OVER,
        "OP_PICK" => OP_PICK,
        "OP_ROLL" => OP_ROLL,
        "OP_ROT" => OP_ROT,
        "OP_SWAP" => OP_SWAP,
        "OP_TUCK" => OP_TUCK,
        "OP_CAT" => OP_CAT,
        "OP_SPLIT" => OP_SPLIT,
        "OP_NUM2BIN" => OP_NUM2BIN,
        "OP_BIN2NUM" => OP_BIN2NUM,
        "OP_SIZE" => OP_SIZE,
        "OP_INVERT" => OP_INVERT,
        "OP_AND" => OP_AND,
        "OP_OR" => OP_OR,
        "OP_XOR" => OP_XOR,
        "OP_EQUAL" => OP_EQUAL,
        "OP_EQUALVERIFY" => OP_EQUALVERIFY,
        "OP_RESERVED1" => OP_RESERVED1,
        "OP_RESERVED2" => OP_RESERVED2,
        "OP_1ADD" => OP_1ADD,
        "OP_1SUB" => OP_1SUB,
        "OP_2MUL" => OP_2MUL,
        "OP_2DIV" => OP_2DIV,
        "OP_NEGATE" => OP_NEGATE,
        "OP_ABS" => OP_ABS,
        "OP_NOT" => OP_NOT,
        "OP_0NOTEQUAL" => OP_0NOTEQUAL,
        "OP_ADD" => OP_ADD,
        "OP_SUB" => OP_SUB,
        "OP_MUL" => OP_MUL,
        "OP_DIV" => OP_DIV,
        "OP_MOD" => OP_MOD,
        "OP_LSHIFT" => OP_LSHIFT,
        "OP_RSHIFT" => OP_RSHIFT,
        "OP_BOOLAND" => OP_BOOLAND,
        "OP_BOOLOR" => OP_BOOLOR,
        "OP_NUMEQUAL" => OP_NUMEQUAL,
        "OP_NUMEQUALVERIFY" => OP_NUMEQUALVERIFY,
        "OP_NUMNOTEQUAL" => OP_NUMNOTEQUAL,
        "OP_LESSTHAN" => OP_LESSTHAN,
        "OP_GREATERTHAN" => OP_GREATERTHAN,
        "OP_LESSTHANOREQUAL" => OP_LESSTHANOREQUAL,
        "OP_GREATERTHANOREQUAL" => OP_GREATERTHANOREQUAL,
        "OP_MIN" => OP_MIN,
        "OP_MAX" => OP_MAX,
        "OP_WITHIN" => OP_WITHIN,
        "OP_RIPEMD160" => OP_RIPEMD160,
        "OP_SHA1" => OP_SHA1,
        "OP_SHA256" => OP_SHA256,
        "OP_HASH160" => OP_HASH160,
        "OP_HASH256" => OP_HASH256,
        "OP_CODESEPARATOR" => OP_CODESEPARATOR,
        "OP_CHECKSIG" => OP_CHECKSIG,
        "OP_CHECKSIGVERIFY" => OP_CHECKSIGVERIFY,
        "OP_CHECKMULTISIG" => OP_CHECKMULTISIG,
        "OP_CHECKMULTISIGVERIFY" => OP_CHECKMULTISIGVERIFY,
        "OP_NOP1" => OP_NOP1,
        "OP_NOP2" => OP_NOP2,
        "OP_NOP3" => OP_NOP3,
        "OP_NOP4" => OP_NOP4,
        "OP_NOP5" => OP_NOP5,
        "OP_NOP6" => OP_NOP6,
        "OP_NOP7" => OP_NOP7,
        "OP_NOP8" => OP_NOP8,
        "OP_NOP9" => OP_NOP9,
        "OP_NOP10" => OP_NOP10,
        "OP_PUBKEYHASH" => OP_PUBKEYHASH,
        "OP_PUBKEY" => OP_PUBKEY,
        "OP_INVALIDOPCODE" => OP_INVALIDOPCODE,
        _ => return None,
    };
    Some(op)
}

/// Check whether an opcode pushes a small integer (OP_0, OP_1 through OP_16).
pub fn is_small_int_op(op: u8) -> bool {
    op == OP_0 || (OP_1..=OP_16).contains(&op)
}
