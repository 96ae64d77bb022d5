//! Example demonstrating the owner-gated ledger

use ledger_core::Identity;
use ledger_state::Ledger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("🦀 Owner Ledger Demo");
    println!("====================");

    // Create identities
    println!("\n1. Creating identities...");
    let owner = Identity::from_hex("00000000000000000000000000000000000000aa")?;
    let alice = Identity::from_hex("1234567890abcdef1234567890abcdef12345678")?;
    let bob = Identity::from_hex("abcdef1234567890abcdef1234567890abcdef12")?;

    println!("   Owner: {}", owner);
    println!("   Alice: {}", alice);
    println!("   Bob:   {}", bob);

    // Construct the ledger
    println!("\n2. Constructing the ledger...");
    let mut ledger = Ledger::new(owner);
    println!("   Owner fixed at construction: {}", ledger.owner());
    println!("   Alice's initial value: {}", ledger.get_stored_data(&alice)?);

    // Each identity writes its own value
    println!("\n3. Storing values...");
    ledger.set_stored_data(alice, 1)?;
    ledger.set_stored_data(bob, 2)?;
    println!("   Alice reads back: {}", ledger.get_stored_data(&alice)?);
    println!("   Bob reads back:   {}", ledger.get_stored_data(&bob)?);

    // Owner queries any identity
    println!("\n4. Owner querying stored values...");
    println!("   Owner sees Alice: {}", ledger.get_count(&owner, &alice)?);
    println!("   Owner sees Bob:   {}", ledger.get_count(&owner, &bob)?);

    // Non-owner queries are rejected
    println!("\n5. Non-owner queries are rejected...");
    match ledger.get_count(&alice, &bob) {
        Ok(_) => unreachable!("non-owner query must be rejected"),
        Err(err) => println!("   Alice querying Bob: {}", err),
    }
    match ledger.get_count(&bob, &bob) {
        Ok(_) => unreachable!("non-owner query must be rejected"),
        Err(err) => println!("   Bob querying Bob:   {}", err),
    }

    println!("\n✅ All operations completed successfully!");
    println!("   - Default-zero reads ✓");
    println!("   - Per-identity writes ✓");
    println!("   - Owner-only privileged reads ✓");
    println!("   - Non-owner denial ✓");

    Ok(())
}
