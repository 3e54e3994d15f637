use std::fmt::Display;
use std::str::FromStr;

use fnv::FnvHashMap;
use itertools::Itertools;

use super::value_in_range;
use super::ModelBuilder;
use super::SolutionExtractor;
use crate::model::Assignment;
use crate::model::IntVar;
use crate::model::LinearExpr;
use crate::model::Model;
use crate::InstanceError;
use crate::MarrowError;
use crate::ValidationError;

/// The longest word accepted; longer words have coefficients outside the engine's range.
pub const MAX_WORD_LENGTH: usize = 9;

/// A puzzle `ADDEND + ... + ADDEND = RESULT` where every letter stands for a distinct digit and no
/// word starts with a zero, such as `SEND + MORE = MONEY`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CryptarithmInstance {
    addends: Vec<String>,
    result: String,
}

impl CryptarithmInstance {
    pub fn new(
        addends: impl IntoIterator<Item = impl Into<String>>,
        result: impl Into<String>,
    ) -> Result<CryptarithmInstance, InstanceError> {
        let addends = addends.into_iter().map(Into::into).collect::<Vec<String>>();
        let result = result.into();

        if addends.is_empty() {
            return Err(InstanceError::Empty("addend"));
        }
        for word in addends.iter().chain([&result]) {
            if word.is_empty() || !word.chars().all(|letter| letter.is_ascii_uppercase()) {
                return Err(InstanceError::InvalidWord(word.clone()));
            }
            if word.len() > MAX_WORD_LENGTH {
                return Err(InstanceError::WordTooLong {
                    word: word.clone(),
                    max: MAX_WORD_LENGTH,
                });
            }
        }

        let instance = CryptarithmInstance { addends, result };
        let num_letters = instance.letters().len();
        if num_letters > 10 {
            return Err(InstanceError::TooManyLetters(num_letters));
        }

        Ok(instance)
    }

    pub fn addends(&self) -> &[String] {
        &self.addends
    }

    pub fn result(&self) -> &str {
        &self.result
    }

    fn words(&self) -> impl Iterator<Item = &str> {
        self.addends
            .iter()
            .map(String::as_str)
            .chain([self.result.as_str()])
    }

    /// The distinct letters in order of first appearance.
    pub fn letters(&self) -> Vec<char> {
        self.words().flat_map(str::chars).unique().collect()
    }

    fn is_leading(&self, letter: char) -> bool {
        self.words().any(|word| word.starts_with(letter))
    }
}

/// Parses `SEND + MORE = MONEY`; whitespace is ignored.
impl FromStr for CryptarithmInstance {
    type Err = InstanceError;

    fn from_str(puzzle: &str) -> Result<Self, Self::Err> {
        let puzzle = puzzle
            .chars()
            .filter(|character| !character.is_whitespace())
            .collect::<String>();
        let Some((addends, result)) = puzzle.split_once('=') else {
            return Err(InstanceError::InvalidWord(puzzle));
        };

        CryptarithmInstance::new(addends.split('+'), result)
    }
}

impl Display for CryptarithmInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.addends.iter().join(" + "), self.result)
    }
}

/// The digit variable of every letter, in order of first appearance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CryptarithmHandles {
    pub letters: Vec<(char, IntVar)>,
}

/// The digit of every letter, in order of first appearance.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CryptarithmSolution {
    pub digits: Vec<(char, u8)>,
}

impl CryptarithmSolution {
    pub fn digit(&self, letter: char) -> Option<u8> {
        self.digits
            .iter()
            .find(|(other, _)| *other == letter)
            .map(|&(_, digit)| digit)
    }

    /// The number spelled by `word`.
    pub fn word_value(&self, word: &str) -> Option<i64> {
        word.chars().try_fold(0, |value, letter| {
            Some(value * 10 + i64::from(self.digit(letter)?))
        })
    }
}

/// A digit per letter (non-zero for leading letters), all different, and the sum as a single
/// linear equality with positional coefficients.
#[derive(Clone, Copy, Debug, Default)]
pub struct Cryptarithm;

impl ModelBuilder for Cryptarithm {
    type Instance = CryptarithmInstance;
    type Handles = CryptarithmHandles;

    fn build(
        &self,
        instance: &CryptarithmInstance,
    ) -> Result<(Model, CryptarithmHandles), MarrowError> {
        let mut model = Model::default();

        let letters = instance
            .letters()
            .into_iter()
            .map(|letter| {
                let lower_bound = if instance.is_leading(letter) { 1 } else { 0 };
                model
                    .new_int_var(lower_bound, 9, letter.to_string())
                    .map(|digit| (letter, digit))
            })
            .collect::<Result<Vec<_>, _>>()?;

        model.add_all_different(letters.iter().map(|&(_, digit)| digit))?;

        let mut coefficients = FnvHashMap::<char, i64>::default();
        for (word, sign) in instance
            .addends
            .iter()
            .map(|addend| (addend, 1))
            .chain([(&instance.result, -1)])
        {
            for (position, letter) in word.chars().rev().enumerate() {
                *coefficients.entry(letter).or_default() += sign * 10_i64.pow(position as u32);
            }
        }

        let sum = letters
            .iter()
            .map(|&(letter, digit)| {
                let coefficient = coefficients.get(&letter).copied().unwrap_or_default();
                (coefficient, digit)
            })
            .collect::<LinearExpr>();
        model.add_linear_eq(sum, 0)?;

        Ok((model, CryptarithmHandles { letters }))
    }
}

impl SolutionExtractor for Cryptarithm {
    type Solution = CryptarithmSolution;

    fn extract(
        &self,
        _: &CryptarithmInstance,
        handles: &CryptarithmHandles,
        assignment: &Assignment,
    ) -> Result<CryptarithmSolution, ValidationError> {
        let digits = handles
            .letters
            .iter()
            .map(|&(letter, digit)| {
                value_in_range(assignment, digit, 0, 9, || letter.to_string())
                    .map(|value| (letter, value as u8))
            })
            .collect::<Result<_, _>>()?;

        Ok(CryptarithmSolution { digits })
    }

    fn validate(
        &self,
        instance: &CryptarithmInstance,
        solution: &CryptarithmSolution,
    ) -> Result<(), ValidationError> {
        for (&(first, first_digit), &(second, second_digit)) in
            solution.digits.iter().tuple_combinations()
        {
            if first_digit == second_digit {
                return Err(ValidationError::SharedDigit {
                    first,
                    second,
                    digit: first_digit,
                });
            }
        }

        let value = |word: &str| {
            if solution.digit(word.chars().next().unwrap_or('0')) == Some(0) {
                return Err(ValidationError::LeadingZero(word.to_owned()));
            }
            solution
                .word_value(word)
                .ok_or_else(|| ValidationError::MissingValue(word.to_owned()))
        };

        let sum = instance
            .addends
            .iter()
            .map(|addend| value(addend.as_str()))
            .sum::<Result<i64, _>>()?;
        let result = value(instance.result.as_str())?;
        if sum != result {
            return Err(ValidationError::WrongSum { sum, result });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Constraint;

    fn send_more_money() -> CryptarithmInstance {
        "SEND + MORE = MONEY".parse().unwrap()
    }

    fn solution(letters: &str, digits: &[u8]) -> CryptarithmSolution {
        CryptarithmSolution {
            digits: letters.chars().zip(digits.iter().copied()).collect(),
        }
    }

    #[test]
    fn puzzles_are_parsed_from_text() {
        let instance = send_more_money();

        assert_eq!(["SEND", "MORE"], instance.addends());
        assert_eq!("MONEY", instance.result());
        assert_eq!(vec!['S', 'E', 'N', 'D', 'M', 'O', 'R', 'Y'], instance.letters());
        assert_eq!("SEND + MORE = MONEY", instance.to_string());
    }

    #[test]
    fn malformed_puzzles_are_rejected() {
        assert_eq!(
            Err(InstanceError::InvalidWord("SEND+MORE".to_owned())),
            "SEND + MORE".parse::<CryptarithmInstance>()
        );
        assert_eq!(
            Err(InstanceError::InvalidWord("".to_owned())),
            "SEND + = MONEY".parse::<CryptarithmInstance>()
        );
        assert_eq!(
            Err(InstanceError::InvalidWord("send".to_owned())),
            "send + MORE = MONEY".parse::<CryptarithmInstance>()
        );
    }

    #[test]
    fn more_than_ten_letters_are_rejected() {
        assert_eq!(
            Err(InstanceError::TooManyLetters(11)),
            CryptarithmInstance::new(["ABCDEF", "GHIJK"], "A")
        );
    }

    #[test]
    fn leading_letters_cannot_be_zero() {
        let (model, handles) = Cryptarithm.build(&send_more_money()).unwrap();

        let bounds = handles
            .letters
            .iter()
            .map(|&(letter, digit)| (letter, model.bounds(digit).0))
            .collect::<Vec<_>>();
        assert_eq!(
            vec![
                ('S', 1),
                ('E', 0),
                ('N', 0),
                ('D', 0),
                ('M', 1),
                ('O', 0),
                ('R', 0),
                ('Y', 0)
            ],
            bounds
        );
    }

    #[test]
    fn the_sum_is_one_equality_with_positional_coefficients() {
        let instance = send_more_money();
        let (model, _) = Cryptarithm.build(&instance).unwrap();
        let known_solution = Assignment::new(vec![9, 5, 6, 7, 1, 0, 8, 2]);

        let [Constraint::AllDifferent(letters), Constraint::Linear(sum)] = model.constraints() else {
            panic!("expected an all-different and a linear constraint");
        };
        assert_eq!(8, letters.len());
        assert_eq!(Some(0), known_solution.evaluate(sum.expr()));
        assert_eq!(0, sum.rhs());
    }

    #[test]
    fn the_known_solution_is_valid() {
        let instance = send_more_money();
        let solution = solution("SENDMORY", &[9, 5, 6, 7, 1, 0, 8, 2]);

        assert_eq!(Some(10652), solution.word_value("MONEY"));
        assert_eq!(Ok(()), Cryptarithm.validate(&instance, &solution));
    }

    #[test]
    fn shared_digits_are_detected() {
        let instance = send_more_money();
        let solution = solution("SENDMORY", &[9, 5, 6, 7, 1, 0, 8, 5]);

        assert_eq!(
            Err(ValidationError::SharedDigit {
                first: 'E',
                second: 'Y',
                digit: 5
            }),
            Cryptarithm.validate(&instance, &solution)
        );
    }

    #[test]
    fn wrong_sums_are_detected() {
        let instance = send_more_money();
        let solution = solution("SENDMORY", &[9, 5, 6, 7, 1, 0, 3, 2]);

        assert_eq!(
            Err(ValidationError::WrongSum {
                sum: 9567 + 1035,
                result: 10652
            }),
            Cryptarithm.validate(&instance, &solution)
        );
    }
}
