//! Signer account derivation for permit signatures
//!
//! A recovered secp256k1 key maps to two possible accounts, both rendered as
//! bech32 with the chain's account prefix:
//! - standard Cosmos `secp256k1` accounts: `ripemd160(sha256(compressed_pubkey))`
//! - EVM-compatible `ethsecp256k1` accounts: the last 20 bytes of
//!   `keccak256(uncompressed_pubkey[1..])`

use cosmwasm_std::{StdError, StdResult};
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

use crate::hash::keccak256;

/// Length of an uncompressed SEC1 secp256k1 public key (0x04 ‖ X ‖ Y)
pub const UNCOMPRESSED_PUBKEY_LEN: usize = 65;

fn check_uncompressed(pubkey: &[u8]) -> StdResult<()> {
    if pubkey.len() != UNCOMPRESSED_PUBKEY_LEN || pubkey[0] != 0x04 {
        return Err(StdError::generic_err(format!(
            "Invalid public key: expected {} byte uncompressed key",
            UNCOMPRESSED_PUBKEY_LEN
        )));
    }
    Ok(())
}

/// SEC1 compressed form (0x02/0x03 ‖ X) of an uncompressed key.
pub fn compress_pubkey(pubkey: &[u8]) -> StdResult<[u8; 33]> {
    check_uncompressed(pubkey)?;

    let mut compressed = [0u8; 33];
    compressed[0] = if pubkey[64] & 1 == 1 { 0x03 } else { 0x02 };
    compressed[1..].copy_from_slice(&pubkey[1..33]);
    Ok(compressed)
}

/// Raw 20-byte standard Cosmos account of an uncompressed secp256k1 key.
pub fn cosmos_account_bytes_from_pubkey(pubkey: &[u8]) -> StdResult<[u8; 20]> {
    let compressed = compress_pubkey(pubkey)?;
    let hash = Ripemd160::digest(Sha256::digest(compressed));
    let mut account = [0u8; 20];
    account.copy_from_slice(hash.as_slice());
    Ok(account)
}

/// Raw 20-byte `ethsecp256k1` account of an uncompressed secp256k1 key.
pub fn eth_account_bytes_from_pubkey(pubkey: &[u8]) -> StdResult<[u8; 20]> {
    check_uncompressed(pubkey)?;

    let hash = keccak256(&pubkey[1..]);
    let mut account = [0u8; 20];
    account.copy_from_slice(&hash[12..]);
    Ok(account)
}

pub fn cosmos_account_from_pubkey(pubkey: &[u8], hrp: &str) -> StdResult<String> {
    encode_bech32_address(&cosmos_account_bytes_from_pubkey(pubkey)?, hrp)
}

pub fn eth_account_from_pubkey(pubkey: &[u8], hrp: &str) -> StdResult<String> {
    encode_bech32_address(&eth_account_bytes_from_pubkey(pubkey)?, hrp)
}

/// Every account a key controls: standard first, then `ethsecp256k1`.
pub fn signer_accounts(pubkey: &[u8], hrp: &str) -> StdResult<[String; 2]> {
    Ok([
        cosmos_account_from_pubkey(pubkey, hrp)?,
        eth_account_from_pubkey(pubkey, hrp)?,
    ])
}

/// Encode raw 20 bytes to a bech32 address with given prefix
pub fn encode_bech32_address(bytes: &[u8; 20], hrp: &str) -> StdResult<String> {
    if hrp.is_empty() || !hrp.bytes().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()) {
        return Err(StdError::generic_err(format!("Invalid bech32 prefix: {}", hrp)));
    }

    let data5 = regroup_bits(bytes, 8, 5);
    let checksum = bech32_checksum(hrp, &data5);

    let mut out = String::with_capacity(hrp.len() + 1 + data5.len() + checksum.len());
    out.push_str(hrp);
    out.push('1');
    out.extend(
        data5
            .iter()
            .chain(checksum.iter())
            .map(|&v| BECH32_CHARSET[v as usize] as char),
    );
    Ok(out)
}

/// Bech32 character set
const BECH32_CHARSET: &[u8] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// Regroup a bit stream, zero-padding the final group
fn regroup_bits(data: &[u8], from_bits: u32, to_bits: u32) -> Vec<u8> {
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let max_v = (1u32 << to_bits) - 1;
    let mut result = Vec::with_capacity(data.len() * from_bits as usize / to_bits as usize + 1);

    for &value in data {
        acc = (acc << from_bits) | value as u32;
        bits += from_bits;
        while bits >= to_bits {
            bits -= to_bits;
            result.push(((acc >> bits) & max_v) as u8);
        }
    }
    if bits > 0 {
        result.push(((acc << (to_bits - bits)) & max_v) as u8);
    }
    result
}

/// Six 5-bit checksum groups over the expanded prefix and data
fn bech32_checksum(hrp: &str, data: &[u8]) -> [u8; 6] {
    let mut values: Vec<u8> = hrp.bytes().map(|c| c >> 5).collect();
    values.push(0);
    values.extend(hrp.bytes().map(|c| c & 31));
    values.extend_from_slice(data);
    values.extend_from_slice(&[0; 6]);

    let polymod = bech32_polymod(&values) ^ 1;
    let mut checksum = [0u8; 6];
    for (i, slot) in checksum.iter_mut().enumerate() {
        *slot = ((polymod >> (5 * (5 - i))) & 31) as u8;
    }
    checksum
}

fn bech32_polymod(values: &[u8]) -> u32 {
    const GENERATOR: [u32; 5] = [
        0x3b6a_57b2,
        0x2650_8e6d,
        0x1ea1_19fa,
        0x3d42_33dd,
        0x2a14_62b3,
    ];

    let mut chk: u32 = 1;
    for &v in values {
        let top = chk >> 25;
        chk = ((chk & 0x01ff_ffff) << 5) ^ (v as u32);
        for (i, gen) in GENERATOR.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                chk ^= gen;
            }
        }
    }
    chk
}
