//! Engine-level behaviour: scheduling, counters, framing and error paths

use modecrypt_algorithms::block::modes::framing;
use modecrypt_algorithms::{
    Aes128, CounterNonce, Ctr, Direction, EngineConfig, Error, Iv, Key, Mode, ModeEngine,
    ModeOfOperation, Schedule, Seed,
};
use modecrypt_tests::stubs::{CountingPrimitive, FailingPrimitive, RotatePrimitive, XorPrimitive};
use proptest::prelude::*;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn random_bytes(len: usize, seed: u64) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut out = vec![0u8; len];
    rng.fill_bytes(&mut out);
    out
}

fn seed_for(mode: Mode) -> Seed {
    if mode.requires_iv() {
        Seed::Iv(Iv::from_u128(0x0f0e0d0c0b0a09080706050403020100))
    } else if mode.requires_nonce() {
        Seed::Nonce(CounterNonce::from_u64(0x1122334455667788))
    } else {
        Seed::None
    }
}

#[test]
fn schedule_table() {
    let expected = [
        (Mode::Ecb, Schedule::Parallel, Schedule::Parallel),
        (Mode::Cbc, Schedule::Sequential, Schedule::Parallel),
        (Mode::Pcbc, Schedule::Sequential, Schedule::Sequential),
        (Mode::Cfb, Schedule::Sequential, Schedule::Parallel),
        (Mode::Ofb, Schedule::Sequential, Schedule::Sequential),
        (Mode::Ctr, Schedule::Parallel, Schedule::Parallel),
    ];
    let engine = ModeEngine::new(XorPrimitive);
    for (mode, encrypt, decrypt) in expected {
        assert_eq!(engine.schedule(mode, Direction::Encrypt), encrypt, "{} encrypt", mode);
        assert_eq!(engine.schedule(mode, Direction::Decrypt), decrypt, "{} decrypt", mode);
    }
}

#[test]
fn parallel_workers_preserve_block_order() {
    let key = Key::from_u128(0x000102030405060708090a0b0c0d0e0f);
    let message = random_bytes(16 * 257 + 9, 11);
    let sequential = ModeEngine::new(Aes128);

    for workers in [2, 3, 8, 300] {
        let config = EngineConfig::default()
            .with_workers(workers)
            .with_parallel_threshold(1);
        let parallel = ModeEngine::with_config(Aes128, config).unwrap();

        for mode in Mode::ALL {
            let seed = seed_for(mode);
            for direction in [Direction::Encrypt, Direction::Decrypt] {
                let expected = sequential.run(mode, direction, &key, &seed, &message).unwrap();
                let actual = parallel.run(mode, direction, &key, &seed, &message).unwrap();
                assert_eq!(actual, expected, "{} {} with {} workers", mode, direction, workers);
            }
        }
    }
}

#[test]
fn parallel_decrypt_makes_one_call_per_block() {
    let config = EngineConfig::default().with_workers(4).with_parallel_threshold(1);
    let engine = ModeEngine::with_config(CountingPrimitive::new(RotatePrimitive), config).unwrap();
    let key = Key::new([9; 16]);
    let iv = Iv::from_u128(3);
    let message = random_bytes(16 * 40, 12);

    engine.cbc(&key, &iv, &message, Direction::Decrypt).unwrap();
    assert_eq!(engine.primitive().decrypts(), 40);
    assert_eq!(engine.primitive().encrypts(), 0);

    // CFB decrypt uses the forward primitive only
    engine.cfb(&key, &iv, &message, Direction::Decrypt).unwrap();
    assert_eq!(engine.primitive().decrypts(), 40);
    assert_eq!(engine.primitive().encrypts(), 40);
}

#[test]
fn inverse_primitive_only_where_the_mode_needs_it() {
    let key = Key::new([0x33; 16]);
    let message = random_bytes(16 * 6, 14);

    for mode in Mode::ALL {
        let engine = ModeEngine::new(CountingPrimitive::new(RotatePrimitive));
        let seed = seed_for(mode);
        let ct = engine.run(mode, Direction::Encrypt, &key, &seed, &message).unwrap();
        engine.run(mode, Direction::Decrypt, &key, &seed, &ct).unwrap();

        let counting = engine.primitive();
        assert_eq!(counting.total(), 12, "{}", mode);
        assert_eq!(counting.decrypts() > 0, mode.uses_inverse_primitive(), "{}", mode);
    }
}

#[test]
fn ctr_counter_wraps_at_u64_max() {
    let key = Key::from_u128(0x2b7e151628aed2a6abf7158809cf4f3c);
    let nonce = CounterNonce::from_u64(0xabcdef);
    let blocks = framing::to_blocks(&[0u8; 48]);

    let wrapped = Ctr::with_initial_counter(nonce.clone(), u64::MAX)
        .apply(&Aes128, &key, Direction::Encrypt, &blocks)
        .unwrap();
    let from_zero = Ctr::new(nonce).apply(&Aes128, &key, Direction::Encrypt, &blocks).unwrap();

    // counters MAX, 0, 1: the last two blocks repeat the stream from zero
    assert_eq!(&wrapped[1..], &from_zero[..2]);
    assert_ne!(wrapped[0], from_zero[0]);
}

#[test]
fn seventeen_bytes_become_sixteen() {
    let engine = ModeEngine::new(Aes128);
    let key = Key::from_u128(1);
    let message = random_bytes(17, 13);

    for mode in Mode::ALL {
        let seed = seed_for(mode);
        let ct = engine.run(mode, Direction::Encrypt, &key, &seed, &message).unwrap();
        assert_eq!(ct.len(), 16);

        // re-appending the dropped tail restores the full length
        let mut restored = engine.run(mode, Direction::Decrypt, &key, &seed, &ct).unwrap();
        restored.extend_from_slice(framing::trailing(&message));
        assert_eq!(restored, message);
    }
}

#[test]
fn primitive_failure_midway_returns_no_output() {
    let key = Key::new([0; 16]);
    let iv = Iv::zeroed();
    let message = [0u8; 16 * 8];

    let engine = ModeEngine::new(FailingPrimitive::after(5));
    let err = engine.cbc(&key, &iv, &message, Direction::Encrypt).unwrap_err();
    assert!(matches!(err, Error::Primitive { .. }));

    let config = EngineConfig::default().with_workers(4).with_parallel_threshold(1);
    let engine = ModeEngine::with_config(FailingPrimitive::after(5), config).unwrap();
    let err = engine.ctr(&key, &CounterNonce::zeroed(), &message, Direction::Encrypt).unwrap_err();
    assert!(matches!(err, Error::Primitive { .. }));
}

#[test]
fn direction_names_and_flags() {
    let engine = ModeEngine::new(XorPrimitive);
    let key = Key::new([0x10; 16]);
    let iv = Iv::new([0x01; 16]);
    let message = [0x02u8; 32];

    let expected = hex_block_pair("13", "01");
    assert_eq!(engine.cbc(&key, &iv, &message, 0u8).unwrap(), expected);
    assert_eq!(engine.cbc(&key, &iv, &message, 0i32).unwrap(), expected);
    assert_eq!(engine.cbc(&key, &iv, &message, "Encrypt").unwrap(), expected);
    assert_eq!(engine.cbc(&key, &iv, &expected, "decrypt").unwrap(), message.to_vec());
    assert_eq!(engine.cbc(&key, &iv, &expected, Direction::Encrypt.inverse()).unwrap(), message.to_vec());

    let err = engine.cbc(&key, &iv, &message, 2u8).unwrap_err();
    assert!(err.is_invalid_direction());
    assert_eq!(err.context(), "ModeEngine::cbc");
}

fn hex_block_pair(first: &str, second: &str) -> Vec<u8> {
    let mut out = hex::decode(first.repeat(16)).unwrap();
    out.extend(hex::decode(second.repeat(16)).unwrap());
    out
}

proptest! {
    #[test]
    fn parallel_equals_sequential(
        mode in prop::sample::select(Mode::ALL.to_vec()),
        decrypt in any::<bool>(),
        workers in 2usize..9,
        data in prop::collection::vec(any::<u8>(), 0..16 * 40)
    ) {
        let direction = if decrypt { Direction::Decrypt } else { Direction::Encrypt };
        let key = Key::new([0x5c; 16]);
        let seed = seed_for(mode);

        let sequential = ModeEngine::new(RotatePrimitive);
        let config = EngineConfig::default().with_workers(workers).with_parallel_threshold(2);
        let parallel = ModeEngine::with_config(RotatePrimitive, config).unwrap();

        prop_assert_eq!(
            parallel.run(mode, direction, &key, &seed, &data).unwrap(),
            sequential.run(mode, direction, &key, &seed, &data).unwrap()
        );
    }
}
