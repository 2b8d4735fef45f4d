//! Canonical message encoding.
//!
//! Every intent is serialized into a fixed binary layout that the destination
//! program decodes by byte offset, with no schema negotiation:
//!
//! ```text
//! | tag (1) | u64 fields (8 each, big-endian) | chain (32) | 32-byte slots ... |
//! ```
//!
//! - The chain identifier is a `uint256` word (big-endian, left-padded).
//! - Account, wallet, mint and data-account fields are exactly 32 bytes.
//!   Anything else is rejected; the encoder never pads or truncates.
//! - Boolean stream flags are carried as `u64` (1 = true, 0 = false).
//!
//! The caller's own identity (depositor/sender/withdrawer depending on the
//! intent) is not part of the user-supplied [`Intent`]; the contract fills it
//! from the transaction sender so a caller can never act for someone else.
//!
//! | Intent                   | Tag | Layout after tag                                                       |
//! |--------------------------|-----|------------------------------------------------------------------------|
//! | InitializePda            | 1   | chain, account                                                         |
//! | StreamCreate             | 2   | start, end, amount, chain, sender, receiver, can_update, can_cancel, mint |
//! | InitializeTokenAccount   | 3   | chain, account, mint                                                   |
//! | StreamWithdraw           | 4   | chain, withdrawer, mint, depositor, data_account                       |
//! | DepositToken             | 6   | amount, chain, depositor, mint                                         |
//! | StreamPause              | 8   | chain, depositor, mint, receiver, data_account                         |
//! | TokenWithdraw            | 10  | amount, chain, withdrawer, mint                                        |
//! | InstantTransfer          | 12  | amount, chain, sender, mint, receiver                                  |
//! | StreamUpdate             | 14  | start, end, amount, chain, sender, receiver, mint, data_account        |
//! | StreamCancel             | 16  | chain, depositor, mint, receiver, data_account                         |
//! | DirectTransferNative     | 17  | amount, chain, sender, mint, receiver                                  |
//! | DirectTransferWrapped    | 18  | amount, chain, sender, mint, receiver                                  |

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Binary;

use crate::error::ContractError;
use crate::hash::chain_id_to_bytes32;

// ============================================================================
// Operation Tags
// ============================================================================

pub const TAG_INITIALIZE_PDA: u8 = 1;
pub const TAG_STREAM_CREATE: u8 = 2;
pub const TAG_INITIALIZE_TOKEN_ACCOUNT: u8 = 3;
pub const TAG_STREAM_WITHDRAW: u8 = 4;
pub const TAG_DEPOSIT_TOKEN: u8 = 6;
pub const TAG_STREAM_PAUSE: u8 = 8;
pub const TAG_TOKEN_WITHDRAW: u8 = 10;
pub const TAG_INSTANT_TRANSFER: u8 = 12;
pub const TAG_STREAM_UPDATE: u8 = 14;
pub const TAG_STREAM_CANCEL: u8 = 16;
pub const TAG_DIRECT_TRANSFER_NATIVE: u8 = 17;
pub const TAG_DIRECT_TRANSFER_WRAPPED: u8 = 18;

/// Width of every address-like slot and of the chain word
pub const SLOT_LEN: usize = 32;

// ============================================================================
// Intent
// ============================================================================

/// A caller-requested bridging operation.
///
/// Account-like fields are raw 32-byte destination-chain keys.
#[cw_serde]
pub enum Intent {
    /// Create the caller's program-derived account on the destination chain
    InitializePda {},
    /// Create the caller's token account for `token_mint`
    InitializeTokenAccount { token_mint: Binary },
    /// Deposit `amount` of `token_mint` into the caller's PDA
    DepositToken { amount: u64, token_mint: Binary },
    /// Open a stream from the caller to `receiver`
    StreamCreate {
        start_time: u64,
        end_time: u64,
        amount: u64,
        receiver: Binary,
        can_update: bool,
        can_cancel: bool,
        token_mint: Binary,
    },
    /// Change the schedule/amount of an existing stream
    StreamUpdate {
        start_time: u64,
        end_time: u64,
        amount: u64,
        receiver: Binary,
        token_mint: Binary,
        data_account: Binary,
    },
    /// Receiver withdraws the streamed tokens of `depositor`'s stream
    StreamWithdraw {
        depositor: Binary,
        token_mint: Binary,
        data_account: Binary,
    },
    /// Toggle pause/resume on a stream the caller owns
    StreamPause {
        receiver: Binary,
        token_mint: Binary,
        data_account: Binary,
    },
    /// Cancel a stream the caller owns
    StreamCancel {
        receiver: Binary,
        token_mint: Binary,
        data_account: Binary,
    },
    /// Send `amount` immediately from the caller's PDA to `receiver`
    InstantTransfer {
        amount: u64,
        receiver: Binary,
        token_mint: Binary,
    },
    /// Withdraw deposited tokens back to the caller
    TokenWithdraw { amount: u64, token_mint: Binary },
    /// Bridge native-chain tokens straight to `receiver`
    DirectTransferNative {
        amount: u64,
        receiver: Binary,
        token_mint: Binary,
    },
    /// Bridge wrapped tokens straight to `receiver`
    DirectTransferWrapped {
        amount: u64,
        receiver: Binary,
        token_mint: Binary,
    },
}

/// One position in a payload layout
enum Slot<'a> {
    Int(u64),
    Chain,
    Caller,
    Account(&'static str, &'a Binary),
}

impl Intent {
    pub fn tag(&self) -> u8 {
        match self {
            Intent::InitializePda {} => TAG_INITIALIZE_PDA,
            Intent::InitializeTokenAccount { .. } => TAG_INITIALIZE_TOKEN_ACCOUNT,
            Intent::DepositToken { .. } => TAG_DEPOSIT_TOKEN,
            Intent::StreamCreate { .. } => TAG_STREAM_CREATE,
            Intent::StreamUpdate { .. } => TAG_STREAM_UPDATE,
            Intent::StreamWithdraw { .. } => TAG_STREAM_WITHDRAW,
            Intent::StreamPause { .. } => TAG_STREAM_PAUSE,
            Intent::StreamCancel { .. } => TAG_STREAM_CANCEL,
            Intent::InstantTransfer { .. } => TAG_INSTANT_TRANSFER,
            Intent::TokenWithdraw { .. } => TAG_TOKEN_WITHDRAW,
            Intent::DirectTransferNative { .. } => TAG_DIRECT_TRANSFER_NATIVE,
            Intent::DirectTransferWrapped { .. } => TAG_DIRECT_TRANSFER_WRAPPED,
        }
    }

    /// Snake-case name, used as the `method` attribute
    pub fn kind(&self) -> &'static str {
        match self {
            Intent::InitializePda {} => "initialize_pda",
            Intent::InitializeTokenAccount { .. } => "initialize_token_account",
            Intent::DepositToken { .. } => "deposit_token",
            Intent::StreamCreate { .. } => "stream_create",
            Intent::StreamUpdate { .. } => "stream_update",
            Intent::StreamWithdraw { .. } => "stream_withdraw",
            Intent::StreamPause { .. } => "stream_pause",
            Intent::StreamCancel { .. } => "stream_cancel",
            Intent::InstantTransfer { .. } => "instant_transfer",
            Intent::TokenWithdraw { .. } => "token_withdraw",
            Intent::DirectTransferNative { .. } => "direct_transfer_native",
            Intent::DirectTransferWrapped { .. } => "direct_transfer_wrapped",
        }
    }

    /// Role the caller's own identity plays in this intent
    pub fn caller_role(&self) -> &'static str {
        match self {
            Intent::InitializePda {} | Intent::InitializeTokenAccount { .. } => "account",
            Intent::DepositToken { .. }
            | Intent::StreamPause { .. }
            | Intent::StreamCancel { .. } => "depositor",
            Intent::StreamWithdraw { .. } | Intent::TokenWithdraw { .. } => "withdrawer",
            Intent::StreamCreate { .. }
            | Intent::StreamUpdate { .. }
            | Intent::InstantTransfer { .. }
            | Intent::DirectTransferNative { .. }
            | Intent::DirectTransferWrapped { .. } => "sender",
        }
    }

    /// Token amount carried by the intent, if any
    pub fn amount(&self) -> Option<u64> {
        match self {
            Intent::DepositToken { amount, .. }
            | Intent::StreamCreate { amount, .. }
            | Intent::StreamUpdate { amount, .. }
            | Intent::InstantTransfer { amount, .. }
            | Intent::TokenWithdraw { amount, .. }
            | Intent::DirectTransferNative { amount, .. }
            | Intent::DirectTransferWrapped { amount, .. } => Some(*amount),
            Intent::InitializePda {}
            | Intent::InitializeTokenAccount { .. }
            | Intent::StreamWithdraw { .. }
            | Intent::StreamPause { .. }
            | Intent::StreamCancel { .. } => None,
        }
    }

    /// User-supplied account fields in wire order, by name
    pub fn accounts(&self) -> Vec<(&'static str, &Binary)> {
        self.layout()
            .into_iter()
            .filter_map(|slot| match slot {
                Slot::Account(name, value) => Some((name, value)),
                _ => None,
            })
            .collect()
    }

    fn layout(&self) -> Vec<Slot<'_>> {
        use Slot::{Account, Caller, Chain, Int};

        match self {
            Intent::InitializePda {} => vec![Chain, Caller],
            Intent::InitializeTokenAccount { token_mint } => {
                vec![Chain, Caller, Account("token_mint", token_mint)]
            }
            Intent::DepositToken { amount, token_mint } => vec![
                Int(*amount),
                Chain,
                Caller,
                Account("token_mint", token_mint),
            ],
            Intent::StreamCreate {
                start_time,
                end_time,
                amount,
                receiver,
                can_update,
                can_cancel,
                token_mint,
            } => vec![
                Int(*start_time),
                Int(*end_time),
                Int(*amount),
                Chain,
                Caller,
                Account("receiver", receiver),
                Int(*can_update as u64),
                Int(*can_cancel as u64),
                Account("token_mint", token_mint),
            ],
            Intent::StreamUpdate {
                start_time,
                end_time,
                amount,
                receiver,
                token_mint,
                data_account,
            } => vec![
                Int(*start_time),
                Int(*end_time),
                Int(*amount),
                Chain,
                Caller,
                Account("receiver", receiver),
                Account("token_mint", token_mint),
                Account("data_account", data_account),
            ],
            Intent::StreamWithdraw {
                depositor,
                token_mint,
                data_account,
            } => vec![
                Chain,
                Caller,
                Account("token_mint", token_mint),
                Account("depositor", depositor),
                Account("data_account", data_account),
            ],
            Intent::StreamPause {
                receiver,
                token_mint,
                data_account,
            }
            | Intent::StreamCancel {
                receiver,
                token_mint,
                data_account,
            } => vec![
                Chain,
                Caller,
                Account("token_mint", token_mint),
                Account("receiver", receiver),
                Account("data_account", data_account),
            ],
            Intent::TokenWithdraw { amount, token_mint } => vec![
                Int(*amount),
                Chain,
                Caller,
                Account("token_mint", token_mint),
            ],
            Intent::InstantTransfer {
                amount,
                receiver,
                token_mint,
            }
            | Intent::DirectTransferNative {
                amount,
                receiver,
                token_mint,
            }
            | Intent::DirectTransferWrapped {
                amount,
                receiver,
                token_mint,
            } => vec![
                Int(*amount),
                Chain,
                Caller,
                Account("token_mint", token_mint),
                Account("receiver", receiver),
            ],
        }
    }

    /// Check every account field has the exact slot width.
    pub fn validate(&self) -> Result<(), ContractError> {
        for (field, value) in self.accounts() {
            check_slot(field, value)?;
        }
        Ok(())
    }

    /// Serialize into the canonical payload.
    pub fn encode(&self, target_chain: u16, caller: &[u8; 32]) -> Result<Vec<u8>, ContractError> {
        let layout = self.layout();
        let mut out = Vec::with_capacity(1 + layout.len() * SLOT_LEN);
        out.push(self.tag());

        for slot in layout {
            match slot {
                Slot::Int(value) => out.extend_from_slice(&value.to_be_bytes()),
                Slot::Chain => out.extend_from_slice(&chain_id_to_bytes32(target_chain)),
                Slot::Caller => out.extend_from_slice(caller),
                Slot::Account(field, value) => {
                    check_slot(field, value)?;
                    out.extend_from_slice(value.as_slice());
                }
            }
        }

        Ok(out)
    }
}

fn check_slot(field: &str, value: &Binary) -> Result<(), ContractError> {
    if value.len() != SLOT_LEN {
        return Err(ContractError::MalformedField {
            field: field.to_string(),
            expected: SLOT_LEN,
            got: value.len(),
        });
    }
    Ok(())
}

// ============================================================================
// Reference Decoder
// ============================================================================

/// A decoded canonical message
#[cw_serde]
pub struct DecodedMessage {
    pub target_chain: u16,
    /// Identity of the account that originated the message
    pub caller: Binary,
    pub intent: Intent,
}

struct Reader<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> Reader<'a> {
    fn take(&mut self, len: usize) -> Result<&'a [u8], ContractError> {
        let end = self.offset + len;
        if end > self.bytes.len() {
            return Err(ContractError::MalformedPayload {
                reason: format!(
                    "truncated at offset {}: need {} bytes, have {}",
                    self.offset,
                    len,
                    self.bytes.len() - self.offset
                ),
            });
        }
        let bytes: &'a [u8] = self.bytes;
        let slice = &bytes[self.offset..end];
        self.offset = end;
        Ok(slice)
    }

    fn u64(&mut self) -> Result<u64, ContractError> {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(self.take(8)?);
        Ok(u64::from_be_bytes(buf))
    }

    fn flag(&mut self) -> Result<bool, ContractError> {
        match self.u64()? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(ContractError::MalformedPayload {
                reason: format!("flag must be 0 or 1, got {}", other),
            }),
        }
    }

    fn slot(&mut self) -> Result<Binary, ContractError> {
        Ok(Binary::from(self.take(SLOT_LEN)?))
    }

    fn chain(&mut self) -> Result<u16, ContractError> {
        let word = self.take(SLOT_LEN)?;
        if word[..30].iter().any(|b| *b != 0) {
            return Err(ContractError::MalformedPayload {
                reason: "chain id does not fit in 16 bits".to_string(),
            });
        }
        Ok(u16::from_be_bytes([word[30], word[31]]))
    }

    fn finish(self) -> Result<(), ContractError> {
        if self.offset != self.bytes.len() {
            return Err(ContractError::MalformedPayload {
                reason: format!("{} trailing bytes", self.bytes.len() - self.offset),
            });
        }
        Ok(())
    }
}

impl DecodedMessage {
    /// Parse a canonical payload back into its fields.
    pub fn decode(bytes: &[u8]) -> Result<Self, ContractError> {
        let (&tag, rest) = bytes.split_first().ok_or(ContractError::MalformedPayload {
            reason: "empty payload".to_string(),
        })?;
        let mut r = Reader {
            bytes: rest,
            offset: 0,
        };

        let (target_chain, caller, intent) = match tag {
            TAG_INITIALIZE_PDA => {
                let chain = r.chain()?;
                let caller = r.slot()?;
                (chain, caller, Intent::InitializePda {})
            }
            TAG_INITIALIZE_TOKEN_ACCOUNT => {
                let chain = r.chain()?;
                let caller = r.slot()?;
                let token_mint = r.slot()?;
                (chain, caller, Intent::InitializeTokenAccount { token_mint })
            }
            TAG_DEPOSIT_TOKEN | TAG_TOKEN_WITHDRAW => {
                let amount = r.u64()?;
                let chain = r.chain()?;
                let caller = r.slot()?;
                let token_mint = r.slot()?;
                let intent = if tag == TAG_DEPOSIT_TOKEN {
                    Intent::DepositToken { amount, token_mint }
                } else {
                    Intent::TokenWithdraw { amount, token_mint }
                };
                (chain, caller, intent)
            }
            TAG_STREAM_CREATE => {
                let start_time = r.u64()?;
                let end_time = r.u64()?;
                let amount = r.u64()?;
                let chain = r.chain()?;
                let caller = r.slot()?;
                let receiver = r.slot()?;
                let can_update = r.flag()?;
                let can_cancel = r.flag()?;
                let token_mint = r.slot()?;
                let intent = Intent::StreamCreate {
                    start_time,
                    end_time,
                    amount,
                    receiver,
                    can_update,
                    can_cancel,
                    token_mint,
                };
                (chain, caller, intent)
            }
            TAG_STREAM_UPDATE => {
                let start_time = r.u64()?;
                let end_time = r.u64()?;
                let amount = r.u64()?;
                let chain = r.chain()?;
                let caller = r.slot()?;
                let receiver = r.slot()?;
                let token_mint = r.slot()?;
                let data_account = r.slot()?;
                let intent = Intent::StreamUpdate {
                    start_time,
                    end_time,
                    amount,
                    receiver,
                    token_mint,
                    data_account,
                };
                (chain, caller, intent)
            }
            TAG_STREAM_WITHDRAW => {
                let chain = r.chain()?;
                let caller = r.slot()?;
                let token_mint = r.slot()?;
                let depositor = r.slot()?;
                let data_account = r.slot()?;
                let intent = Intent::StreamWithdraw {
                    depositor,
                    token_mint,
                    data_account,
                };
                (chain, caller, intent)
            }
            TAG_STREAM_PAUSE | TAG_STREAM_CANCEL => {
                let chain = r.chain()?;
                let caller = r.slot()?;
                let token_mint = r.slot()?;
                let receiver = r.slot()?;
                let data_account = r.slot()?;
                let intent = if tag == TAG_STREAM_PAUSE {
                    Intent::StreamPause {
                        receiver,
                        token_mint,
                        data_account,
                    }
                } else {
                    Intent::StreamCancel {
                        receiver,
                        token_mint,
                        data_account,
                    }
                };
                (chain, caller, intent)
            }
            TAG_INSTANT_TRANSFER | TAG_DIRECT_TRANSFER_NATIVE | TAG_DIRECT_TRANSFER_WRAPPED => {
                let amount = r.u64()?;
                let chain = r.chain()?;
                let caller = r.slot()?;
                let token_mint = r.slot()?;
                let receiver = r.slot()?;
                let intent = match tag {
                    TAG_INSTANT_TRANSFER => Intent::InstantTransfer {
                        amount,
                        receiver,
                        token_mint,
                    },
                    TAG_DIRECT_TRANSFER_NATIVE => Intent::DirectTransferNative {
                        amount,
                        receiver,
                        token_mint,
                    },
                    _ => Intent::DirectTransferWrapped {
                        amount,
                        receiver,
                        token_mint,
                    },
                };
                (chain, caller, intent)
            }
            other => {
                return Err(ContractError::MalformedPayload {
                    reason: format!("unknown tag {}", other),
                })
            }
        };
        r.finish()?;

        Ok(DecodedMessage {
            target_chain,
            caller,
            intent,
        })
    }
}
