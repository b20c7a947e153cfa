//! AES-128 as a block primitive
//!
//! FIPS 197 with a 128-bit key. The S-box is computed arithmetically rather
//! than looked up, so no memory access depends on secret data.
//!
//! [`Aes128`] holds no key material. The round keys are expanded on every
//! call into a buffer that is wiped when the call returns, which lets a single
//! instance be shared by any number of workers.

use byteorder::{BigEndian, ByteOrder};
use core::sync::atomic::{compiler_fence, Ordering};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::BlockPrimitive;
use crate::error::Result;
use crate::types::{Block, Key};
use modecrypt_internal::constant_time::xor_in_place;
use modecrypt_params::utils::symmetric::{
    AES128_EXPANDED_KEY_SIZE, AES128_KEY_SIZE, AES128_ROUNDS, AES_BLOCK_SIZE, KEY_SIZE,
};


/// Round constants for key expansion
const RCON: [u32; 11] = [
    0x00000000, 0x01000000, 0x02000000, 0x04000000, 0x08000000, 0x10000000,
    0x20000000, 0x40000000, 0x80000000, 0x1b000000, 0x36000000,
];

/// Number of 32-bit words in the expanded key
const SCHEDULE_WORDS: usize = AES128_EXPANDED_KEY_SIZE / 4;

// the primitive key is an AES-128 key
const _: () = assert!(KEY_SIZE == AES128_KEY_SIZE);

/// Multiply two bytes in GF(2⁸) modulo x⁸ + x⁴ + x³ + x + 1
#[inline(always)]
fn gf_mul(a: u8, b: u8) -> u8 {
    let mut p = 0u8;
    let mut a = a;
    let mut b = b;
    for _ in 0..8 {
        let mask = (b & 1).wrapping_neg();
        p ^= a & mask;
        let hi = a >> 7;
        a = (a << 1) ^ (hi * 0x1b);
        b >>= 1;
    }
    p
}

/// x²⁵⁴, which is x⁻¹ for nonzero x and 0 for 0
#[inline(always)]
fn gf_inv(x: u8) -> u8 {
    let mut acc = 1u8;
    let mut square = x;
    // 254 = 0b1111_1110
    for _ in 1..8 {
        square = gf_mul(square, square);
        acc = gf_mul(acc, square);
    }
    acc
}

/// Forward S-box: affine transform of the field inverse
#[inline(always)]
fn sbox(x: u8) -> u8 {
    let i = gf_inv(x);
    i ^ i.rotate_left(1) ^ i.rotate_left(2) ^ i.rotate_left(3) ^ i.rotate_left(4) ^ 0x63
}

/// Inverse S-box: undo the affine transform, then invert
#[inline(always)]
fn inv_sbox(x: u8) -> u8 {
    let y = x ^ 0x63;
    gf_inv(y.rotate_left(1) ^ y.rotate_left(3) ^ y.rotate_left(6))
}

#[inline(always)]
fn sub_word(word: u32) -> u32 {
    let mut bytes = [0u8; 4];
    BigEndian::write_u32(&mut bytes, word);
    for b in bytes.iter_mut() {
        *b = sbox(*b);
    }
    BigEndian::read_u32(&bytes)
}

/// Expanded AES-128 key schedule, wiped on drop
#[derive(Zeroize, ZeroizeOnDrop)]
struct RoundKeys {
    rounds: [Block; AES128_ROUNDS + 1],
}

impl RoundKeys {
    fn expand(key: &Key) -> Self {
        let mut words = [0u32; SCHEDULE_WORDS];
        for (word, chunk) in words.iter_mut().zip(key.as_bytes().chunks_exact(4)) {
            *word = BigEndian::read_u32(chunk);
        }

        for i in 4..SCHEDULE_WORDS {
            let mut temp = words[i - 1];
            if i % 4 == 0 {
                temp = sub_word(temp.rotate_left(8)) ^ RCON[i / 4];
            }
            words[i] = words[i - 4] ^ temp;
        }

        let mut rounds = [[0u8; AES_BLOCK_SIZE]; AES128_ROUNDS + 1];
        for (round, chunk) in rounds.iter_mut().zip(words.chunks_exact(4)) {
            BigEndian::write_u32_into(chunk, round);
        }
        words.zeroize();

        Self { rounds }
    }

    #[inline(always)]
    fn round(&self, round: usize) -> &Block {
        &self.rounds[round]
    }
}

#[inline(always)]
fn add_round_key(state: &mut Block, round_key: &Block) {
    xor_in_place(state, round_key);
}

fn sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = sbox(*byte);
    }
    compiler_fence(Ordering::SeqCst);
}

fn inv_sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = inv_sbox(*byte);
    }
    compiler_fence(Ordering::SeqCst);
}

/// Row r rotates left by r columns; the state is column-major
fn shift_rows(state: &mut Block) {
    let t = *state;
    for c in 0..4 {
        for r in 1..4 {
            state[r + 4 * c] = t[r + 4 * ((c + r) % 4)];
        }
    }
}

fn inv_shift_rows(state: &mut Block) {
    let t = *state;
    for c in 0..4 {
        for r in 1..4 {
            state[r + 4 * ((c + r) % 4)] = t[r + 4 * c];
        }
    }
}

fn mix_columns(state: &mut Block) {
    for column in state.chunks_exact_mut(4) {
        let [s0, s1, s2, s3] = [column[0], column[1], column[2], column[3]];
        column[0] = gf_mul(s0, 2) ^ gf_mul(s1, 3) ^ s2 ^ s3;
        column[1] = s0 ^ gf_mul(s1, 2) ^ gf_mul(s2, 3) ^ s3;
        column[2] = s0 ^ s1 ^ gf_mul(s2, 2) ^ gf_mul(s3, 3);
        column[3] = gf_mul(s0, 3) ^ s1 ^ s2 ^ gf_mul(s3, 2);
    }
}

fn inv_mix_columns(state: &mut Block) {
    for column in state.chunks_exact_mut(4) {
        let [s0, s1, s2, s3] = [column[0], column[1], column[2], column[3]];
        column[0] = gf_mul(s0, 14) ^ gf_mul(s1, 11) ^ gf_mul(s2, 13) ^ gf_mul(s3, 9);
        column[1] = gf_mul(s0, 9) ^ gf_mul(s1, 14) ^ gf_mul(s2, 11) ^ gf_mul(s3, 13);
        column[2] = gf_mul(s0, 13) ^ gf_mul(s1, 9) ^ gf_mul(s2, 14) ^ gf_mul(s3, 11);
        column[3] = gf_mul(s0, 11) ^ gf_mul(s1, 13) ^ gf_mul(s2, 9) ^ gf_mul(s3, 14);
    }
}

/// AES-128 block cipher
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Aes128;

impl Aes128 {
    /// Creates the primitive
    pub const fn new() -> Self {
        Aes128
    }
}

impl BlockPrimitive for Aes128 {
    fn encrypt_block(&self, key: &Key, block: &Block) -> Result<Block> {
        let round_keys = RoundKeys::expand(key);
        let mut state = *block;

        add_round_key(&mut state, round_keys.round(0));
        for round in 1..AES128_ROUNDS {
            sub_bytes(&mut state);
            shift_rows(&mut state);
            mix_columns(&mut state);
            add_round_key(&mut state, round_keys.round(round));
        }
        sub_bytes(&mut state);
        shift_rows(&mut state);
        add_round_key(&mut state, round_keys.round(AES128_ROUNDS));

        Ok(state)
    }

    fn decrypt_block(&self, key: &Key, block: &Block) -> Result<Block> {
        let round_keys = RoundKeys::expand(key);
        let mut state = *block;

        add_round_key(&mut state, round_keys.round(AES128_ROUNDS));
        for round in (1..AES128_ROUNDS).rev() {
            inv_shift_rows(&mut state);
            inv_sub_bytes(&mut state);
            add_round_key(&mut state, round_keys.round(round));
            inv_mix_columns(&mut state);
        }
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        add_round_key(&mut state, round_keys.round(0));

        Ok(state)
    }

    fn name(&self) -> &'static str {
        "AES-128"
    }
}
