//! Property-based tests for the six modes

use modecrypt_algorithms::block::modes::{ctr::counter_block, framing};
use modecrypt_algorithms::{Aes128, CounterNonce, Direction, Iv, Key, Mode, ModeEngine, Seed};
use modecrypt_tests::stubs::{CountingPrimitive, RotatePrimitive};
use proptest::prelude::*;

/// Whole-block messages of 1 to 16 blocks
fn block_aligned_data() -> impl Strategy<Value = Vec<u8>> {
    (1usize..=16).prop_flat_map(|blocks| prop::collection::vec(any::<u8>(), blocks * 16))
}

fn any_mode() -> impl Strategy<Value = Mode> {
    prop::sample::select(Mode::ALL.to_vec())
}

fn seed_for(mode: Mode, iv: [u8; 16], nonce: u64) -> Seed {
    if mode.requires_iv() {
        Seed::Iv(Iv::new(iv))
    } else if mode.requires_nonce() {
        Seed::Nonce(CounterNonce::from_u64(nonce))
    } else {
        Seed::None
    }
}

fn xor(a: &[u8], b: &[u8]) -> Vec<u8> {
    a.iter().zip(b).map(|(x, y)| x ^ y).collect()
}

proptest! {
    #[test]
    fn round_trip_every_mode(
        mode in any_mode(),
        key in any::<[u8; 16]>(),
        iv in any::<[u8; 16]>(),
        nonce in any::<u64>(),
        data in block_aligned_data()
    ) {
        let engine = ModeEngine::new(RotatePrimitive);
        let key = Key::new(key);
        let seed = seed_for(mode, iv, nonce);

        let ct = engine.run(mode, Direction::Encrypt, &key, &seed, &data).unwrap();
        let pt = engine.run(mode, Direction::Decrypt, &key, &seed, &ct).unwrap();
        prop_assert_eq!(pt, data);
    }

    #[test]
    fn ecb_is_deterministic_per_block(
        key in any::<[u8; 16]>(),
        block in any::<[u8; 16]>(),
        filler in any::<[u8; 16]>(),
        positions in prop::collection::vec(any::<bool>(), 2..12)
    ) {
        let engine = ModeEngine::new(RotatePrimitive);
        let key = Key::new(key);
        let message: Vec<u8> = positions
            .iter()
            .flat_map(|&pick| if pick { block } else { filler })
            .collect();

        let ct = engine.ecb(&key, &message, Direction::Encrypt).unwrap();
        let single = engine.ecb(&key, &block, Direction::Encrypt).unwrap();
        for (i, &pick) in positions.iter().enumerate() {
            if pick {
                prop_assert_eq!(&ct[i * 16..(i + 1) * 16], &single[..]);
            }
        }
    }

    #[test]
    fn ctr_is_ecb_of_counter_blocks(
        key in any::<[u8; 16]>(),
        nonce in any::<u64>(),
        data in block_aligned_data()
    ) {
        let engine = ModeEngine::new(RotatePrimitive);
        let key = Key::new(key);
        let nonce = CounterNonce::from_u64(nonce);

        let counters: Vec<u8> = (0..framing::block_count(data.len()) as u64)
            .flat_map(|i| counter_block(&nonce, i))
            .collect();
        let keystream = engine.ecb(&key, &counters, Direction::Encrypt).unwrap();

        let ct = engine.ctr(&key, &nonce, &data, Direction::Encrypt).unwrap();
        prop_assert_eq!(ct, xor(&data, &keystream));
    }

    #[test]
    fn cbc_and_pcbc_avalanche(
        key in any::<[u8; 16]>(),
        iv in any::<[u8; 16]>(),
        data in block_aligned_data(),
        flip in any::<prop::sample::Index>(),
        bit in 0u8..8
    ) {
        let engine = ModeEngine::new(Aes128);
        let key = Key::new(key);
        let iv = Iv::new(iv);
        let byte = flip.index(data.len());
        let first_changed = byte / 16;

        let mut flipped = data.clone();
        flipped[byte] ^= 1 << bit;

        for mode in [Mode::Cbc, Mode::Pcbc] {
            let seed = Seed::Iv(iv.clone());
            let a = engine.run(mode, Direction::Encrypt, &key, &seed, &data).unwrap();
            let b = engine.run(mode, Direction::Encrypt, &key, &seed, &flipped).unwrap();
            for i in 0..data.len() / 16 {
                let same = a[i * 16..(i + 1) * 16] == b[i * 16..(i + 1) * 16];
                prop_assert_eq!(same, i < first_changed, "{} block {}", mode, i);
            }
        }
    }

    #[test]
    fn pcbc_ciphertext_corruption_propagates(
        key in any::<[u8; 16]>(),
        iv in any::<[u8; 16]>(),
        data in block_aligned_data(),
        flip in any::<prop::sample::Index>()
    ) {
        let engine = ModeEngine::new(Aes128);
        let key = Key::new(key);
        let iv = Iv::new(iv);
        let mut ct = engine.pcbc(&key, &iv, &data, Direction::Encrypt).unwrap();

        let byte = flip.index(ct.len());
        ct[byte] ^= 0x01;
        let pt = engine.pcbc(&key, &iv, &ct, Direction::Decrypt).unwrap();
        for i in 0..data.len() / 16 {
            let same = pt[i * 16..(i + 1) * 16] == data[i * 16..(i + 1) * 16];
            prop_assert_eq!(same, i < byte / 16, "block {}", i);
        }
    }

    #[test]
    fn ofb_keystream_ignores_data(
        key in any::<[u8; 16]>(),
        iv in any::<[u8; 16]>(),
        (a, b) in (1usize..=8).prop_flat_map(|n| (
            prop::collection::vec(any::<u8>(), n * 16),
            prop::collection::vec(any::<u8>(), n * 16),
        ))
    ) {
        let engine = ModeEngine::new(RotatePrimitive);
        let key = Key::new(key);
        let iv = Iv::new(iv);

        let ct_a = engine.ofb(&key, &iv, &a, Direction::Encrypt).unwrap();
        let ct_b = engine.ofb(&key, &iv, &b, Direction::Encrypt).unwrap();
        prop_assert_eq!(xor(&ct_a, &a), xor(&ct_b, &b));
    }

    #[test]
    fn trailing_partial_block_is_dropped(
        mode in any_mode(),
        key in any::<[u8; 16]>(),
        data in prop::collection::vec(any::<u8>(), 0..200)
    ) {
        let engine = ModeEngine::new(RotatePrimitive);
        let key = Key::new(key);
        let seed = seed_for(mode, [7; 16], 7);

        let out = engine.run(mode, Direction::Encrypt, &key, &seed, &data).unwrap();
        prop_assert_eq!(out.len(), data.len() / 16 * 16);

        // the whole-block prefix encrypts exactly as if the tail were absent
        let prefix = engine.run(mode, Direction::Encrypt, &key, &seed, &data[..out.len()]).unwrap();
        prop_assert_eq!(out, prefix);
    }

    #[test]
    fn invalid_flags_fail_before_any_transform(
        mode in any_mode(),
        flag in any::<i64>().prop_filter("not a direction", |f| *f != 0 && *f != 1),
        data in block_aligned_data()
    ) {
        let engine = ModeEngine::new(CountingPrimitive::new(RotatePrimitive));
        let key = Key::new([0x24; 16]);
        let seed = seed_for(mode, [1; 16], 1);

        let err = engine.run(mode, flag, &key, &seed, &data).unwrap_err();
        prop_assert!(err.is_invalid_direction());
        prop_assert_eq!(engine.primitive().total(), 0);
    }
}
