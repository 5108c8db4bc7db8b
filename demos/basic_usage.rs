//! Basic usage - encode, decode and convert a record.
//!
//! Run with: cargo run --example basic_usage

use msgwire::{BinaryCodec, MsgUtils, Record};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let record = Record::new(
        "example_001",
        "rust_example",
        ["user1", "user2"],
        "Hello from Rust!",
        "example",
    );

    println!("Original record: {:?}", record);

    // Serialize into an exactly sized buffer
    let mut bytes = vec![0u8; BinaryCodec::size_of(&record)];
    let written = BinaryCodec::encode(&record, &mut bytes)?;
    println!("Serialized size: {} bytes", written);

    // Deserialize
    let decoded = BinaryCodec::decode(&bytes)?;
    println!("Decoded record: {:?}", decoded);
    assert_eq!(record, decoded);

    // Text form for logs
    println!("As text: {}", MsgUtils::to_text(&decoded)?);

    // Utility construction
    let (created, timestamp) = MsgUtils::create(
        "Generated message",
        "rust_example",
        ["user3"],
        "example",
    );
    println!(
        "Created {} at {} (valid: {})",
        created.id,
        timestamp,
        MsgUtils::validate(&created)
    );

    Ok(())
}
