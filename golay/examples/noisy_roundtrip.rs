use channel::{binary_to_text, text_to_binary, transmit, xor};
use golay::{GolayDecoder, GolayEncoder};
use rand::thread_rng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = thread_rng();

    let message = "golay codec round trip";
    let binary = text_to_binary(message);

    let encoder = GolayEncoder::new();
    let decoder = GolayDecoder::new();

    let encoded = encoder.encode(&binary)?;
    let received = transmit(&encoded, 0.01, 0, &mut rng)?;
    let flipped = xor(&encoded, &received)?;
    let decoded = decoder.decode(&received)?;

    println!("message:   {message}");
    println!(
        "distorted: {} of {} characters",
        flipped.chars().filter(|&c| c == '1').count(),
        flipped.len()
    );
    println!("recovered: {}", binary_to_text(&decoded[..binary.len()])?);

    Ok(())
}
