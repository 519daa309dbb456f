use rand::Rng;

/// A generated captcha: the SVG to show and the answer to keep server-side.
pub struct CaptchaChallenge {
    pub svg: String,
    pub answer: String,
}

/// Renders a small arithmetic challenge as an SVG image. The answer never
/// appears in the markup, only the question does.
pub fn generate() -> CaptchaChallenge {
    let mut rng = rand::rng();

    let a: i32 = rng.random_range(1..=9);
    let b: i32 = rng.random_range(1..=9);
    let subtract = rng.random_bool(0.5);

    // Keep subtraction results non-negative.
    let (left, right, answer) = if subtract {
        let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
        (hi, lo, hi - lo)
    } else {
        (a, b, a + b)
    };
    let operator = if subtract { "−" } else { "+" };

    let question = format!("{left} {operator} {right} = ?");
    let tilt: i32 = rng.random_range(-8..=8);

    let svg = format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="160" height="50">"#,
            r##"<rect width="160" height="50" fill="#f4f4f4"/>"##,
            r##"<line x1="0" y1="{y1}" x2="160" y2="{y2}" stroke="#bbb" stroke-width="1"/>"##,
            r#"<text x="80" y="32" font-family="monospace" font-size="22" "#,
            r##"text-anchor="middle" fill="#333" transform="rotate({tilt} 80 25)">{question}</text>"##,
            r#"</svg>"#
        ),
        y1 = rng.random_range(5..45),
        y2 = rng.random_range(5..45),
        tilt = tilt,
        question = question,
    );

    CaptchaChallenge {
        svg,
        answer: answer.to_string(),
    }
}

/// Case-insensitive, whitespace-tolerant answer comparison.
pub fn check_answer(expected: &str, submitted: &str) -> bool {
    expected.trim().eq_ignore_ascii_case(submitted.trim())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn generated_answer_is_not_in_markup() {
        for _ in 0..50 {
            let challenge = generate();
            assert!(challenge.svg.contains("= ?"));
            // The answer digit may coincide with an operand, so check the
            // full "= answer" form is absent rather than the bare digit.
            assert!(!challenge.svg.contains(&format!("= {}", challenge.answer)));
        }
    }

    #[test]
    fn answers_are_single_non_negative_digits_or_teens() {
        for _ in 0..50 {
            let challenge = generate();
            let value: i32 = challenge.answer.parse().unwrap();
            assert!((0..=18).contains(&value));
        }
    }

    #[test]
    fn markup_keeps_hex_color_attributes_intact() {
        let challenge = generate();
        assert!(challenge.svg.starts_with("<svg "));
        assert!(challenge.svg.ends_with("</svg>"));
        assert!(challenge.svg.contains(r##"fill="#f4f4f4""##));
        assert!(challenge.svg.contains(r##"fill="#333""##));
    }

    #[test]
    fn check_answer_tolerates_whitespace() {
        assert!(check_answer("7", " 7 "));
        assert!(!check_answer("7", "8"));
    }
}
