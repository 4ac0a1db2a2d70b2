use studybuddy_core::solve;

#[test]
fn multiplication_in_a_sentence() {
    let out = solve("What is 12 * 7?");
    assert!(out.contains("Problem: 12 * 7"));
    assert!(out.contains("Step 1: Identify operation"));
    assert!(out.contains("Answer: 84"));
}

#[test]
fn addition_subtraction_division() {
    assert!(solve("2 + 2").contains("Answer: 4"));
    assert!(solve("10 - 3").contains("Answer: 7"));
    assert!(solve("9 / 2").contains("Answer: 4.5"));
}

#[test]
fn exponentiation() {
    let out = solve("2^10");
    assert!(out.contains("Problem: 2 ^ 10"));
    assert!(out.contains("Answer: 1024"));
}

#[test]
fn negative_and_decimal_operands() {
    let out = solve("please solve -1.5 * 4 for me");
    assert!(out.contains("Problem: -1.5 * 4"));
    assert!(out.contains("Answer: -6"));
}

#[test]
fn division_by_zero_is_not_an_error() {
    let out = solve("1 / 0");
    assert!(out.contains("Answer: inf"));
    let out = solve("0 / 0");
    assert!(out.contains("Answer: NaN"));
}

#[test]
fn first_arithmetic_match_wins() {
    // Unanchored scan: only the first expression is evaluated.
    let out = solve("compare 1 + 1 and 2 + 2");
    assert!(out.contains("Problem: 1 + 1"));
    assert!(out.contains("Answer: 2"));
}

#[test]
fn quadratic_canonical_form() {
    let out = solve("x^2+3x-4=0");
    assert!(out.contains("Equation: x^2 + 3x - 4 = 0"));
    assert!(out.contains("Δ = b^2 - 4ac = 25"));
    assert!(out.contains("Answer: x1 = 1, x2 = -4"));
}

#[test]
fn quadratic_with_unicode_glyphs() {
    // ² and the en-dash are normalized before matching.
    let out = solve("x²+3x–4=0");
    assert!(out.contains("Answer: x1 = 1, x2 = -4"));
}

#[test]
fn quadratic_with_whitespace() {
    let out = solve("x^2 - 5x + 6 = 0");
    assert!(out.contains("Δ = b^2 - 4ac = 1"));
    assert!(out.contains("Answer: x1 = 3, x2 = 2"));
}

#[test]
fn quadratic_negative_discriminant_reports_nan_roots() {
    let out = solve("x^2 + 2x + 5 = 0");
    assert!(out.contains("Δ = b^2 - 4ac = -16"));
    assert!(out.contains("Answer: x1 = NaN, x2 = NaN"));
}

#[test]
fn quadratic_does_not_generalize() {
    // Leading coefficient on x^2 is outside the canonical form; the
    // arithmetic scan picks up an embedded expression instead.
    let out = solve("2x^2+3x-4=0");
    assert!(out.starts_with("Problem:"));
}

#[test]
fn no_match_falls_through_to_generic_template() {
    let out = solve("Explain the French Revolution");
    assert_eq!(
        out,
        "Step 1: Understand the question\nStep 2: Break into parts\nStep 3: Explain clearly\nAnswer: Provide concise, step-by-step reasoning based on the prompt."
    );
}

#[test]
fn whitespace_is_trimmed_before_matching() {
    assert!(solve("   3 * 3   ").contains("Answer: 9"));
}
