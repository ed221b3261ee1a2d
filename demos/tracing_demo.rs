//! Demonstrates tracing integration with validators
//!
//! Run with: cargo run --example tracing_demo --features tracing

use bulwark::prelude::*;
use serde_json::json;

fn main() {
    // Set up tracing subscriber
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    tracing::info!("Starting tracing demo");

    let order = object(
        Shape::new()
            .field("id", string())
            .field("quantity", number().ensure(|n| *n > 0.0, "quantity must be positive"))
            .field("items", array(string())),
    );

    // Failures become `warn` events on the `bulwark` target
    let validator = Validator::with_config(ValidatorConfig::new().with_tracing_handler());

    let inputs = [
        json!({"id": "a-1", "quantity": 2, "items": ["pen"]}),
        json!({"id": 7, "quantity": 2, "items": ["pen"]}),
        json!({"id": "a-3", "quantity": 1, "items": "pen"}),
    ];

    for input in inputs {
        match validator.validate(&order, &input.into()) {
            Ok(Verdict::Valid(order)) => tracing::info!("accepted {}", order),
            Ok(Verdict::Lenient { value, failures }) => {
                tracing::info!("accepted with {} failure(s): {}", failures.len(), value)
            }
            Err(e) => tracing::error!("rejected: {}", e),
        }
    }

    // The raising validator never touches the handler
    let strict = Validator::new();
    if let Err(e) = strict.validate(&order, &json!({"id": "x"}).into()) {
        tracing::error!("strict validator rejected: {}", e);
    }
}
