use passgauge::{StrengthLabel, classify};

fn score(password: &str) -> (u32, StrengthLabel) {
    let report = classify(password);
    (report.score, report.label)
}

#[test]
fn documented_vectors() {
    assert_eq!(score(""), (0, StrengthLabel::None));
    assert_eq!(score("aaaa"), (1, StrengthLabel::Weak));
    assert_eq!(score("Password123!"), (8, StrengthLabel::Medium));
    assert_eq!(score("Sup3rStr0ngP@ssw0rd!!"), (10, StrengthLabel::Strong));
}

#[test]
fn length_bonuses_stack_with_checks() {
    // lowercase, no repeats, 8+: 3
    assert_eq!(score("abcdefgh"), (3, StrengthLabel::Weak));
    // + 12+ check and bonus: 5
    assert_eq!(score("abcdefghijkl"), (5, StrengthLabel::Medium));
    // + 16+ check and bonus: 7
    assert_eq!(score("abcdefghijklmnop"), (7, StrengthLabel::Medium));
}

#[test]
fn short_mixed_passwords() {
    // 7 chars with every class: 4 class checks + no repeats = 5
    assert_eq!(score("aB3$xY9"), (5, StrengthLabel::Medium));
    assert_eq!(score("aB3"), (4, StrengthLabel::Weak));
}

#[test]
fn repeats_cost_one_point() {
    let (clean, _) = score("Abcdefgh1234!xyz");
    let (repeated, _) = score("Abcdefgh1111!xyz");
    assert_eq!(clean, 10);
    assert_eq!(repeated, 9);
}

#[test]
fn symbols_outside_the_set_do_not_count() {
    assert!(!classify("Password123-").checks.symbol);
    assert_eq!(score("Password123-").0, 7);
}

#[test]
fn classify_is_idempotent() {
    for password in ["", "aaaa", "Password123!", "Sup3rStr0ngP@ssw0rd!!", "x y z"] {
        assert_eq!(classify(password), classify(password));
    }
}
