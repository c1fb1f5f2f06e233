//! Arithmetic flashcard generation - pure logic, no UI.
//! Invalid draws (division or remainder by zero) are resampled, never surfaced.

use rand::Rng;

/// Operands are drawn uniformly from this closed range.
pub const MIN_OPERAND: i32 = -100;
pub const MAX_OPERAND: i32 = 100;

/// Answers are formatted to this many significant digits.
pub const ANSWER_PRECISION: u32 = 5;

// Invalid draws happen with probability 2/5 * 1/201 per iteration, so this
// cap is unreachable in practice. It exists so a broken RNG cannot hang us.
const MAX_RESAMPLES: u32 = 64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Rem,
    Div,
}

impl Operator {
    pub const ALL: [Operator; 5] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Rem,
        Operator::Div,
    ];

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Rem => '%',
            Operator::Div => '/',
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One question/answer pair. Immutable once built; a new deck regenerates
/// the full set instead of mutating cards in place.
#[derive(Clone, Debug, PartialEq)]
pub struct Flashcard {
    pub id: u32,
    pub a: i32,
    pub b: i32,
    pub operator: Operator,
    pub question: String,
    pub answer: String,
}

/// Compute `a <op> b`. Returns `None` exactly when dividing or taking the
/// remainder with `b == 0`; every other combination is well-defined.
pub fn calculate(a: i32, b: i32, operator: Operator) -> Option<f64> {
    let result = match operator {
        Operator::Add => f64::from(a) + f64::from(b),
        Operator::Sub => f64::from(a) - f64::from(b),
        Operator::Mul => f64::from(a) * f64::from(b),
        Operator::Rem => {
            if b == 0 {
                return None;
            }
            // truncated remainder, same sign as `a`
            f64::from(a % b)
        }
        Operator::Div => {
            if b == 0 {
                return None;
            }
            f64::from(a) / f64::from(b)
        }
    };
    Some(result)
}

/// Format `value` to `digits` significant digits, trailing zeros kept,
/// matching `Number.prototype.toPrecision` for the plain-decimal range the
/// generator can produce (|value| <= 10000).
pub fn to_precision(value: f64, digits: u32) -> String {
    let decimals_for_zero = digits.saturating_sub(1) as usize;
    if value == 0.0 {
        // also normalizes negative zero
        return format!("{:.*}", decimals_for_zero, 0.0);
    }

    let abs = value.abs();
    let mut magnitude = abs.log10().floor() as i32;
    // log10 can land one below at exact powers of ten
    if 10f64.powi(magnitude + 1) <= abs {
        magnitude += 1;
    }

    let decimals = (digits as i32 - 1 - magnitude).max(0) as usize;

    // rounding can carry into a new leading digit ("99.9996" -> "100.000");
    // when it does, one fewer decimal keeps the digit count right
    let scale = 10f64.powi(decimals as i32);
    let rounded = (value * scale).round() / scale;
    if decimals > 0 && rounded.abs() >= 10f64.powi(magnitude + 1) {
        format!("{:.*}", decimals - 1, value)
    } else {
        format!("{:.*}", decimals, value)
    }
}

/// Generate one flashcard with the given id. Operands and operator are drawn
/// uniformly; invalid triples are rejected and redrawn until a valid one
/// appears.
pub fn generate<R: Rng>(id: u32, rng: &mut R) -> Flashcard {
    let mut attempts = 0u32;
    let (a, b, operator, result) = loop {
        let a = rng.gen_range(MIN_OPERAND..=MAX_OPERAND);
        let b = rng.gen_range(MIN_OPERAND..=MAX_OPERAND);
        let operator = Operator::ALL[rng.gen_range(0..Operator::ALL.len())];

        if let Some(result) = calculate(a, b, operator) {
            break (a, b, operator, result);
        }

        attempts += 1;
        if attempts >= MAX_RESAMPLES {
            log::warn!("question generator hit the resample cap ({MAX_RESAMPLES}); forcing addition");
            break (a, b, Operator::Add, f64::from(a) + f64::from(b));
        }
    };

    Flashcard {
        id,
        a,
        b,
        operator,
        question: format!("{a} {operator} {b}"),
        answer: to_precision(result, ANSWER_PRECISION),
    }
}

/// Build a deck of `count` independent cards with ids `1..=count`.
/// Duplicate questions across cards are permitted.
pub fn build_deck<R: Rng>(count: u32, rng: &mut R) -> Vec<Flashcard> {
    (1..=count).map(|id| generate(id, rng)).collect()
}
