//! The errors of the modelling layer. Infeasibility and exhausted budgets are statuses of a
//! [`SolverOutcome`](crate::SolverOutcome), never errors.
use thiserror::Error;

/// Malformed input, detected before any variable is created.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InstanceError {
    #[error("the board size must be at least 1")]
    EmptyBoard,
    #[error("expected {expected} rows but found {found}")]
    WrongRowCount { expected: usize, found: usize },
    #[error("row {row} has {found} cells, expected {expected}")]
    WrongColumnCount {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("the clue {value} at row {row}, column {column} is outside 1..=9")]
    ClueOutOfRange { row: usize, column: usize, value: u8 },
    #[error("the container must have positive dimensions, got {width}x{height}")]
    InvalidContainer { width: i64, height: i64 },
    #[error("rectangle {index} has a non-positive size {width}x{height}")]
    InvalidRectangle { index: usize, width: i64, height: i64 },
    #[error("rectangle {index} ({width}x{height}) does not fit in the {container_width}x{container_height} container")]
    RectangleTooLarge {
        index: usize,
        width: i64,
        height: i64,
        container_width: i64,
        container_height: i64,
    },
    #[error("at least one {0} is required")]
    Empty(&'static str),
    #[error("the summed area {area} of the squares is not a perfect square")]
    NotAPerfectSquare { area: i64 },
    #[error("got {processing_times} processing times, {weights} weights and {release_times} release times")]
    MismatchedJobData {
        processing_times: usize,
        weights: usize,
        release_times: usize,
    },
    #[error("job {job} has a negative {field}: {value}")]
    NegativeJobData {
        job: usize,
        field: &'static str,
        value: i64,
    },
    #[error("at least one machine is required")]
    NoMachines,
    #[error("the word `{0}` must be non-empty and consist of the letters A to Z")]
    InvalidWord(String),
    #[error("the word `{word}` is longer than {max} letters")]
    WordTooLong { word: String, max: usize },
    #[error("the puzzle uses {0} distinct letters, but there are only 10 digits")]
    TooManyLetters(usize),
    #[error("the {0} of the instance exceeds the 64-bit integer range")]
    Overflow(&'static str),
}

/// Failures while declaring variables and constraints.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("the domain of `{name}` is empty: [{lower_bound}, {upper_bound}]")]
    EmptyDomain {
        name: String,
        lower_bound: i64,
        upper_bound: i64,
    },
    #[error("all-different terms must contain exactly one variable, found {num_variables}")]
    NonAffineTerm { num_variables: usize },
    #[error("a variable of model {found} was used in model {expected}")]
    ForeignVariable { expected: u32, found: u32 },
    #[error("a two-dimensional no-overlap needs as many x-intervals ({x}) as y-intervals ({y})")]
    MismatchedIntervals { x: usize, y: usize },
    #[error("the {0} of an expression exceeds the 64-bit integer range")]
    Overflow(&'static str),
}

/// Failures while translating a model into the solving engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("the {what} {value} does not fit in the integer range of the engine")]
    Overflow { what: &'static str, value: i64 },
}

/// An assignment reported as a solution violates the structure its model encodes. This always
/// points at a defect in the model or the engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("the assignment has no value for `{0}`")]
    MissingValue(String),
    #[error("the value {value} of `{variable}` is outside its range")]
    ValueOutOfRange { variable: String, value: i64 },
    #[error("queens in rows {first} and {second} attack each other")]
    QueensAttack { first: usize, second: usize },
    #[error("the {unit} contains the digit {digit} more than once")]
    DuplicateDigit { unit: String, digit: u8 },
    #[error("the clue {expected} at row {row}, column {column} became {found}")]
    ClueChanged {
        row: usize,
        column: usize,
        expected: u8,
        found: u8,
    },
    #[error("rectangle {0} lies outside the container")]
    PlacementOutOfBounds(usize),
    #[error("rectangles {first} and {second} overlap")]
    RectanglesOverlap { first: usize, second: usize },
    #[error("job {0} starts before its release time")]
    ReleaseTimeViolated(usize),
    #[error("jobs {first} and {second} overlap")]
    JobsOverlap { first: usize, second: usize },
    #[error("the reported objective {reported} differs from the recomputed {recomputed}")]
    ObjectiveMismatch { reported: i64, recomputed: i64 },
    #[error("the letters {first} and {second} share the digit {digit}")]
    SharedDigit { first: char, second: char, digit: u8 },
    #[error("the word `{0}` starts with a zero")]
    LeadingZero(String),
    #[error("the addends sum to {sum}, but the result reads {result}")]
    WrongSum { sum: i64, result: i64 },
}

/// The error of every solve function.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarrowError {
    #[error("invalid instance: {0}")]
    Instance(#[from] InstanceError),
    #[error("invalid model: {0}")]
    Model(#[from] ModelError),
    #[error("engine failure: {0}")]
    Engine(#[from] EngineError),
    #[error("internal consistency violation: {0}")]
    Validation(#[from] ValidationError),
    #[error("{0} is not supported")]
    Unsupported(&'static str),
}
