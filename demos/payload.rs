//! Validating an inbound JSON payload
//!
//! Run with: cargo run --example payload

use bulwark::prelude::*;
use serde_json::json;

fn signup_guard() -> impl Guard<Output = Value> {
    object(
        Shape::new()
            .field("username", string().ensure(|s| !s.is_empty(), "username is empty"))
            .field("age", number().ensure(|n| *n >= 13.0, "too young"))
            .field("email", nullable(string()))
            .field("referrer", optional(string()))
            .field("roles", array(bulwark::either!(string(), number()))),
    )
}

fn main() {
    let guard = signup_guard();

    let good: Value = json!({
        "username": "ada",
        "age": 36,
        "email": null,
        "roles": ["admin", 3],
        "tracking": "dropped",
    })
    .into();

    println!("is valid: {}", is(&good, &guard));
    match validate(&guard, &good) {
        Ok(clean) => println!("clean payload: {}", clean),
        Err(e) => println!("error: {}", e),
    }

    let bad: Value = json!({"username": "ada", "age": 9, "email": null, "roles": []}).into();
    match validate(&guard, &bad) {
        Ok(_) => println!("unexpectedly valid"),
        Err(e) => println!("error at {:?}: {}", e.field_path(), e),
    }

    // Log and continue: every failure reaches the handler once
    let lenient = Validator::with_config(
        ValidatorConfig::new().with_error_handler(|msg| eprintln!("warning: {}", msg)),
    );
    let verdict = lenient
        .validate(&guard, &json!({"username": 1, "age": "40", "roles": "guest"}).into())
        .expect("custom handler never raises");
    println!("valid: {}, best effort: {}", verdict.is_valid(), verdict.into_lenient());
}
