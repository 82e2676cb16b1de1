//! Hash computation for detached-signature (permit) approvals
//!
//! The digest follows the EIP-712 layout so that the same wallets and
//! tooling used for EVM `permit` can sign approvals for the CW20 token.
//! Dynamic values (names, chain id, bech32 addresses) are hashed to 32 bytes
//! before being placed in their slot, matching `abi.encode` of `bytes32`.
//!
//! # Byte Layout
//!
//! Domain separator input (160 bytes):
//! - Bytes 0-31:    DOMAIN_TYPEHASH
//! - Bytes 32-63:   keccak256(name)
//! - Bytes 64-95:   keccak256(version)
//! - Bytes 96-127:  keccak256(chain_id)
//! - Bytes 128-159: keccak256(verifying_contract)
//!
//! Permit struct input (192 bytes):
//! - Bytes 0-31:    PERMIT_TYPEHASH
//! - Bytes 32-63:   keccak256(owner)
//! - Bytes 64-95:   keccak256(spender)
//! - Bytes 96-127:  value (uint256, big-endian, left-padded)
//! - Bytes 128-159: nonce (uint256, big-endian, left-padded)
//! - Bytes 160-191: deadline (uint256, big-endian, left-padded)
//!
//! Final digest: `keccak256(0x19 0x01 ‖ domain_separator ‖ struct_hash)`

use tiny_keccak::{Hasher, Keccak};

/// Domain version baked into every permit signature
pub const PERMIT_DOMAIN_VERSION: &str = "1";

const DOMAIN_TYPE: &[u8] =
    b"EIP712Domain(string name,string version,string chainId,string verifyingContract)";

const PERMIT_TYPE: &[u8] =
    b"Permit(address owner,address spender,uint256 value,uint256 nonce,uint256 deadline)";

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Left-pad a u128 into a 32-byte big-endian uint256 slot
fn u256_slot(value: u128) -> [u8; 32] {
    let mut slot = [0u8; 32];
    slot[16..].copy_from_slice(&value.to_be_bytes());
    slot
}

/// Domain separator binding signatures to one token deployment on one chain.
pub fn domain_separator(name: &str, chain_id: &str, verifying_contract: &str) -> [u8; 32] {
    let mut data = [0u8; 160];
    data[0..32].copy_from_slice(&keccak256(DOMAIN_TYPE));
    data[32..64].copy_from_slice(&keccak256(name.as_bytes()));
    data[64..96].copy_from_slice(&keccak256(PERMIT_DOMAIN_VERSION.as_bytes()));
    data[96..128].copy_from_slice(&keccak256(chain_id.as_bytes()));
    data[128..160].copy_from_slice(&keccak256(verifying_contract.as_bytes()));
    keccak256(&data)
}

/// Hash of one permit approval, before domain binding.
pub fn permit_struct_hash(
    owner: &str,
    spender: &str,
    value: u128,
    nonce: u64,
    deadline: u64,
) -> [u8; 32] {
    let mut data = [0u8; 192];
    data[0..32].copy_from_slice(&keccak256(PERMIT_TYPE));
    data[32..64].copy_from_slice(&keccak256(owner.as_bytes()));
    data[64..96].copy_from_slice(&keccak256(spender.as_bytes()));
    data[96..128].copy_from_slice(&u256_slot(value));
    data[128..160].copy_from_slice(&u256_slot(nonce as u128));
    data[160..192].copy_from_slice(&u256_slot(deadline as u128));
    keccak256(&data)
}

/// The 32-byte message that the token owner signs.
pub fn permit_digest(domain_separator: &[u8; 32], struct_hash: &[u8; 32]) -> [u8; 32] {
    let mut data = [0u8; 66];
    data[0] = 0x19;
    data[1] = 0x01;
    data[2..34].copy_from_slice(domain_separator);
    data[34..66].copy_from_slice(struct_hash);
    keccak256(&data)
}
