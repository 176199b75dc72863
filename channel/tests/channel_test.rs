use channel::{binary_to_text, text_to_binary, transmit, xor, ChannelError};
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;

#[test]
fn test_transmit_without_distortion() {
    let mut rng = ChaCha12Rng::seed_from_u64(11);
    let input = "010010";

    assert_eq!(transmit(input, 0.0, 0, &mut rng).unwrap(), input);
}

#[test]
fn test_transmit_with_certain_distortion() {
    let mut rng = ChaCha12Rng::seed_from_u64(11);

    assert_eq!(transmit("010010", 1.0, 0, &mut rng).unwrap(), "101101");
}

#[test]
fn test_transmit_ignores_trailing_characters() {
    let mut rng = ChaCha12Rng::seed_from_u64(11);

    assert_eq!(transmit("010010", 1.0, 3, &mut rng).unwrap(), "101010");
    assert_eq!(transmit("1011", 1.0, 9, &mut rng).unwrap(), "1011");
}

#[test]
fn test_transmit_preserves_length_and_alphabet() {
    let mut rng = ChaCha12Rng::seed_from_u64(42);
    let input: String = (0..512).map(|at| if at % 3 == 0 { '1' } else { '0' }).collect();

    let output = transmit(&input, 0.5, 0, &mut rng).unwrap();
    assert_eq!(output.len(), input.len());
    assert!(output.chars().all(|c| c == '0' || c == '1'));
}

#[test]
fn test_transmit_rejects_non_binary() {
    let mut rng = ChaCha12Rng::seed_from_u64(11);

    assert_eq!(
        transmit("abc", 0.1, 0, &mut rng),
        Err(ChannelError::NonBinary)
    );
}

#[test]
fn test_xor() {
    assert_eq!(xor("101000", "011101").unwrap(), "110101");
    assert_eq!(xor("0000", "0000").unwrap(), "0000");
    assert_eq!(xor("1111", "0000").unwrap(), "1111");
}

#[test]
fn test_xor_rejects_non_binary() {
    assert_eq!(xor("1010", "1020"), Err(ChannelError::NonBinary));
}

#[test]
fn test_xor_rejects_length_mismatch() {
    let err = xor("1010", "010").unwrap_err();
    assert_eq!(err, ChannelError::LengthMismatch { left: 4, right: 3 });
    assert_eq!(err.to_string(), "The lengths of the strings do not match.");
}

#[test]
fn test_text_to_binary() {
    assert_eq!(text_to_binary("A"), "0000000001000001");
    assert_eq!(
        text_to_binary("hello"),
        "00000000011010000000000001100101000000000110110000000000011011000000000001101111"
    );
}

#[test]
fn test_binary_to_text() {
    assert_eq!(binary_to_text("0000000001000001").unwrap(), "A");
    assert_eq!(
        binary_to_text(
            "00000000011010000000000001100101000000000110110000000000011011000000000001101111"
        )
        .unwrap(),
        "hello"
    );
}

#[test]
fn test_binary_to_text_rejects_non_binary() {
    for invalid in ["invalidBinary", "00000002"] {
        assert_eq!(binary_to_text(invalid), Err(ChannelError::NonBinary));
    }
}

#[test]
fn test_text_round_trip() {
    for text in ["golay", "Å", "中文", "mixed 0 and 1"] {
        assert_eq!(binary_to_text(&text_to_binary(text)).unwrap(), text);
    }
}
