use digit_token::rng::Csprng;
use digit_token::{TokenOptions, generate_token, generate_token_with};

const DRAWS: usize = 100_000;

fn digit_counts(mut next: impl FnMut() -> String) -> [usize; 10] {
    let mut counts = [0usize; 10];

    for _ in 0..DRAWS {
        let token = next();
        let digit = token.as_bytes()[0] - b'0';
        counts[digit as usize] += 1;
    }

    counts
}

fn assert_uniform(counts: &[usize; 10]) {
    // 7% .. 13%
    let low = DRAWS * 7 / 100;
    let high = DRAWS * 13 / 100;

    for count in counts {
        assert!((low..=high).contains(count), "{counts:?}");
    }
}

#[test]
fn single_digit_tokens_are_uniform() {
    let options = TokenOptions::default();
    let counts = digit_counts(|| generate_token(1, &options).unwrap().to_string());

    assert_uniform(&counts);
}

#[test]
fn single_byte_budget_is_uniform() {
    let options = TokenOptions {
        byte_budget: Some(1),
        ..TokenOptions::default()
    };
    let mut rng = Csprng::new();
    let counts = digit_counts(|| {
        generate_token_with(1, &options, &mut rng)
            .unwrap()
            .to_string()
    });

    assert_uniform(&counts);
}

#[test]
fn leading_digit_of_long_tokens_is_uniform() {
    let options = TokenOptions::default();
    let mut rng = Csprng::new();
    let counts = digit_counts(|| {
        generate_token_with(8, &options, &mut rng)
            .unwrap()
            .to_string()
    });

    assert_uniform(&counts);
}
