use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use digit_token::token::{Advisory, DEFAULT_BYTE_BUDGET_BASE, default_byte_budget};
use digit_token::{TokenOptions, generate_token, generate_token_from_json};
use serde_json::json;
use tracing::Level;

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `f` with a WARN-level subscriber and returns everything it logged.
fn capture_warnings(f: impl FnOnce()) -> String {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_ansi(false)
        .without_time()
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, f);

    let bytes = buffer.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

fn with_budget(budget: usize) -> TokenOptions {
    TokenOptions {
        byte_budget: Some(budget),
        ..TokenOptions::default()
    }
}

#[test]
fn default_options_have_no_advisories() {
    assert!(TokenOptions::default().advisories(6).is_empty());
    assert!(with_budget(default_byte_budget(6)).advisories(6).is_empty());
    assert!(with_budget(2 * default_byte_budget(6)).advisories(6).is_empty());
}

#[test]
fn scarce_memory_advisory() {
    let options = with_budget(64);

    assert_eq!(
        options.advisories(6),
        vec![Advisory::ScarceMemory {
            budget: 64,
            ideal: 70
        }]
    );
    assert_eq!(
        options.advisories(6)[0].to_string(),
        "Warning - scarce memory: Allocated memory is less than ideal for the algorithm, this *may* result in decreased performance."
    );

    // Generation still succeeds
    let token = generate_token(6, &options).unwrap();
    assert_eq!(token.as_str().unwrap().len(), 6);
}

#[test]
fn overcompensated_memory_advisory() {
    let options = with_budget(1024);

    assert_eq!(
        options.advisories(6),
        vec![Advisory::OvercompensatedMemory {
            budget: 1024,
            ideal: 70
        }]
    );
    assert_eq!(
        options.advisories(6)[0].to_string(),
        "Warning - overcompensated memory: Allocated memory is more than ideal for the algorithm, this *may* result in decreased performance."
    );

    let token = generate_token(6, &options).unwrap();
    assert_eq!(token.as_str().unwrap().len(), 6);
}

#[test]
fn deprecated_option_advisory() {
    for flag in [true, false] {
        let options = TokenOptions {
            avoid_modulo_bias: Some(flag),
            ..TokenOptions::default()
        };

        assert_eq!(options.advisories(6), vec![Advisory::DeprecatedOption]);
        assert!(generate_token(6, &options).is_ok());
    }

    assert!(
        Advisory::DeprecatedOption
            .to_string()
            .starts_with("Warning - deprecated option:")
    );
}

#[test]
fn advisories_are_reported_in_order() {
    let options = TokenOptions {
        avoid_modulo_bias: Some(true),
        byte_budget: Some(1),
        ..TokenOptions::default()
    };

    assert_eq!(
        options.advisories(1),
        vec![
            Advisory::DeprecatedOption,
            Advisory::ScarceMemory {
                budget: 1,
                ideal: DEFAULT_BYTE_BUDGET_BASE + 1
            },
        ]
    );
}

#[test]
fn resolved_budget() {
    assert_eq!(TokenOptions::default().resolve_byte_budget(6), 70);
    assert_eq!(TokenOptions::default().resolve_byte_budget(1000), 1064);
    assert_eq!(with_budget(7).resolve_byte_budget(6), 7);
}

#[test]
fn generation_emits_budget_warnings() {
    let logs = capture_warnings(|| {
        generate_token(6, &with_budget(64)).unwrap();
        generate_token(6, &with_budget(1024)).unwrap();
    });

    assert!(logs.contains("WARN"), "{logs}");
    assert!(logs.contains("Warning - scarce memory"), "{logs}");
    assert!(logs.contains("Warning - overcompensated memory"), "{logs}");
}

#[test]
fn default_generation_is_silent() {
    let logs = capture_warnings(|| {
        generate_token(6, &TokenOptions::default()).unwrap();
    });

    assert!(logs.is_empty(), "{logs}");
}

#[test]
fn deprecation_is_reported_even_when_validation_fails() {
    let options = TokenOptions {
        avoid_modulo_bias: Some(true),
        skip_padding: Some(true),
        ..TokenOptions::default()
    };

    let logs = capture_warnings(|| {
        assert!(generate_token(1, &options).is_err());
    });
    assert_eq!(logs.matches("Warning - deprecated option").count(), 1, "{logs}");

    let logs = capture_warnings(|| {
        let result = generate_token_from_json(
            &json!(16),
            &json!({ "avoidModuloBias": "invalid", "returnType": "number" }),
        );
        assert!(result.is_err());
    });
    assert_eq!(logs.matches("Warning - deprecated option").count(), 1, "{logs}");
}

#[test]
fn deprecation_is_reported_once_on_success() {
    let logs = capture_warnings(|| {
        generate_token_from_json(&json!(6), &json!({ "avoidModuloBias": true })).unwrap();
    });

    assert_eq!(logs.matches("Warning - deprecated option").count(), 1, "{logs}");
}
