mod os_signal_termination;
mod parsing;
mod renderers;
mod result;

use std::io::Write;
use std::ops::ControlFlow;
use std::time::Duration;

use clap::Parser;
use clap::Subcommand;
use log::error;
use log::info;
use log::LevelFilter;
use marrow_core::statistics::configure_statistic_logging;
use marrow_solver::instances::demo_packing_instance;
use marrow_solver::instances::perfect_rectangle;
use marrow_solver::instances::perfect_squared_square;
use marrow_solver::instances::random_single_machine_instance;
use marrow_solver::instances::PERFECT_RECTANGLES;
use marrow_solver::instances::PERFECT_SQUARED_SQUARES;
use marrow_solver::solve_with;
use marrow_solver::Cryptarithm;
use marrow_solver::CryptarithmInstance;
use marrow_solver::Dimensions;
use marrow_solver::MarrowEngine;
use marrow_solver::Packing;
use marrow_solver::PackingInstance;
use marrow_solver::PerfectSquaredSquareInstance;
use marrow_solver::Queens;
use marrow_solver::QueensInstance;
use marrow_solver::Scheduling;
use marrow_solver::SchedulingInstance;
use marrow_solver::SolutionExtractor;
use marrow_solver::SolutionRenderer;
use marrow_solver::SolveOptions;
use marrow_solver::SquarePackingInstance;
use marrow_solver::Sudoku;
use marrow_solver::SudokuInstance;
use os_signal_termination::OsSignal;
use parsing::parse_dimensions;
use parsing::parse_sudoku;
use renderers::BoardRenderer;
use renderers::CryptarithmRenderer;
use renderers::GridRenderer;
use renderers::PackingRenderer;
use renderers::ScheduleRenderer;
use result::MarrowCliError;
use result::MarrowCliResult;

/// The puzzle solved when `sudoku` is given no grid.
const DEFAULT_SUDOKU: &str =
    "..46..35......4..78..5....21.53...6...........3...12.47....3..13..9......21..58..";

#[derive(Debug, Parser)]
#[command(
    help_template = "\
{before-help}{name} {version}
About: {about}

{usage-heading}\n{tab}{usage}

{all-args}{after-help}
",
    version,
    about,
    arg_required_else_help = true
)]
struct Args {
    #[command(subcommand)]
    problem: Problem,

    /// The time budget for the solver, given in milliseconds.
    ///
    /// Possible values: u64 (Optional)
    #[arg(short = 't', long = "time-limit-ms", global = true, verbatim_doc_comment)]
    time_limit_ms: Option<u64>,

    /// The maximum number of decisions the solver may take.
    ///
    /// Possible values: u64 (Optional)
    #[arg(long = "decision-limit", global = true, verbatim_doc_comment)]
    decision_limit: Option<u64>,

    /// Instructs the solver to report all solutions in the case of satisfaction problems,
    /// or print intermediate solutions of increasing quality in the case of optimisation
    /// problems.
    ///
    /// Possible values: bool
    #[arg(short = 'a', long = "all-solutions", global = true, verbatim_doc_comment)]
    all_solutions: bool,

    /// Enables log message output from the solver.
    ///
    /// Possible values: bool
    #[arg(short = 'v', long = "verbose", global = true, verbatim_doc_comment)]
    verbose: bool,

    /// Enables logging of statistics from the solver.
    ///
    /// Possible values: bool
    #[arg(short = 's', long = "log-statistics", global = true, verbatim_doc_comment)]
    log_statistics: bool,
}

#[derive(Debug, Subcommand)]
enum Problem {
    /// Place N queens on an NxN board so that no two attack each other.
    Queens {
        /// The size of the board.
        n: usize,
    },

    /// Complete a 9x9 sudoku.
    Sudoku {
        /// The grid row by row: the digits 1 to 9 are clues, '.' and '0' are empty cells.
        #[arg(value_parser = parse_sudoku, default_value = DEFAULT_SUDOKU)]
        grid: SudokuInstance,
    },

    /// Pack rectangles into a container without rotating them. Without arguments a small demo
    /// instance is solved.
    Packing {
        /// The container as WIDTHxHEIGHT.
        #[arg(long, value_parser = parse_dimensions, requires = "rectangles")]
        container: Option<Dimensions>,

        /// The rectangles as WIDTHxHEIGHT, separated by commas or spaces.
        #[arg(
            long,
            value_parser = parse_dimensions,
            value_delimiter = ',',
            num_args = 1..,
            requires = "container"
        )]
        rectangles: Vec<Dimensions>,
    },

    /// Pack squares into a container.
    Squares {
        /// The container as WIDTHxHEIGHT.
        #[arg(value_parser = parse_dimensions)]
        container: Dimensions,

        /// The sides of the squares, separated by commas or spaces.
        #[arg(value_delimiter = ',', num_args = 1.., required = true)]
        sides: Vec<i64>,
    },

    /// Tile a rectangle from the catalogue of perfect rectangles with its squares.
    PerfectRectangle {
        /// The position in the catalogue.
        #[arg(default_value_t = 0)]
        index: usize,
    },

    /// Tile a square with squares; the side of the square follows from their total area.
    PerfectSquare {
        /// The position in the catalogue of perfect squared squares of orders 21 to 25.
        #[arg(long, default_value_t = 0, conflicts_with = "sides")]
        index: usize,

        /// The sides of the squares, separated by commas or spaces, instead of a catalogue entry.
        #[arg(long, value_delimiter = ',', num_args = 1..)]
        sides: Vec<i64>,
    },

    /// Minimise the weighted sum of completion times of jobs with release times on one machine.
    /// Without job data a random instance is generated.
    Scheduling {
        /// The number of jobs of the random instance.
        #[arg(long, default_value_t = 16)]
        jobs: usize,

        /// The seed of the random instance.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// The processing times, separated by commas or spaces.
        #[arg(
            long,
            value_delimiter = ',',
            num_args = 1..,
            requires_all = ["weights", "release_times"]
        )]
        processing_times: Vec<i64>,

        /// The weights, separated by commas or spaces.
        #[arg(long, value_delimiter = ',', num_args = 1.., requires = "processing_times")]
        weights: Vec<i64>,

        /// The release times, separated by commas or spaces.
        #[arg(long, value_delimiter = ',', num_args = 1.., requires = "processing_times")]
        release_times: Vec<i64>,
    },

    /// Assign distinct digits to letters so that the sum holds, e.g. "SEND + MORE = MONEY".
    Cryptarithm {
        /// The puzzle.
        #[arg(default_value = "SEND + MORE = MONEY")]
        puzzle: String,
    },
}

/// What every subcommand shares.
#[derive(Debug)]
struct Session {
    options: SolveOptions,
    all_solutions: bool,
    signal: OsSignal,
}

fn configure_logging(verbose: bool, log_statistics: bool) -> std::io::Result<()> {
    if log_statistics {
        configure_statistic_logging("%% stat:", Some("%% stat-end"));
    }
    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(move |buf, record| {
            write!(buf, "% ")?;

            writeln!(buf, "{}", record.args())
        })
        .filter_level(level_filter)
        .target(env_logger::Target::Stdout)
        .init();
    info!("Logging successfully configured");
    Ok(())
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => {
            error!("Execution failed, error: {e}");
            std::process::exit(1);
        }
    }
}

fn run() -> MarrowCliResult<()> {
    let args = Args::parse();

    configure_logging(args.verbose, args.log_statistics)?;

    let mut options = SolveOptions::default();
    if let Some(time_limit_ms) = args.time_limit_ms {
        options = options.with_time_budget(Duration::from_millis(time_limit_ms));
    }
    if let Some(decision_limit) = args.decision_limit {
        options = options.with_decision_budget(decision_limit);
    }
    if args.all_solutions {
        options = options.enumerating_all_solutions();
    }

    let session = Session {
        options,
        all_solutions: args.all_solutions,
        signal: OsSignal::install()?,
    };

    match args.problem {
        Problem::Queens { n } => {
            session.solve(&Queens, &QueensInstance::new(n)?, &BoardRenderer)
        }
        Problem::Sudoku { grid } => session.solve(&Sudoku, &grid, &GridRenderer),
        Problem::Packing {
            container,
            rectangles,
        } => {
            let instance = match container {
                Some(container) => PackingInstance::new(container, rectangles)?,
                None => demo_packing_instance()?,
            };
            session.solve(&Packing, &instance, &PackingRenderer::default())
        }
        Problem::Squares { container, sides } => {
            let instance = SquarePackingInstance::new(container, sides)?;
            session.solve(&Packing, instance.as_packing(), &PackingRenderer::default())
        }
        Problem::PerfectRectangle { index } => {
            let instance =
                perfect_rectangle(index).ok_or(MarrowCliError::UnknownCatalogueEntry {
                    catalogue: "perfect rectangle",
                    index,
                    len: PERFECT_RECTANGLES.len(),
                })??;
            session.solve(&Packing, instance.as_packing(), &PackingRenderer::default())
        }
        Problem::PerfectSquare { index, sides } => {
            let instance = if sides.is_empty() {
                perfect_squared_square(index).ok_or(MarrowCliError::UnknownCatalogueEntry {
                    catalogue: "perfect squared square",
                    index,
                    len: PERFECT_SQUARED_SQUARES.len(),
                })??
            } else {
                PerfectSquaredSquareInstance::new(sides)?
            };
            info!("tiling a square of side {}", instance.side());
            session.solve(&Packing, instance.as_packing(), &PackingRenderer::default())
        }
        Problem::Scheduling {
            jobs,
            seed,
            processing_times,
            weights,
            release_times,
        } => {
            let instance = if processing_times.is_empty() {
                random_single_machine_instance(jobs, seed)?
            } else {
                SchedulingInstance::new(processing_times, weights, release_times)?
            };
            session.solve(
                &Scheduling,
                &instance,
                &ScheduleRenderer {
                    instance: &instance,
                },
            )
        }
        Problem::Cryptarithm { puzzle } => {
            let instance = puzzle.parse::<CryptarithmInstance>()?;
            session.solve(
                &Cryptarithm,
                &instance,
                &CryptarithmRenderer {
                    instance: &instance,
                },
            )
        }
    }
}

impl Session {
    /// Solves `instance` and prints the report line followed by the solution. With
    /// `--all-solutions` every solution is printed as soon as it is found.
    fn solve<Family, Renderer>(
        &self,
        family: &Family,
        instance: &Family::Instance,
        renderer: &Renderer,
    ) -> MarrowCliResult<()>
    where
        Family: SolutionExtractor,
        Renderer: SolutionRenderer<Family::Solution>,
    {
        let mut engine = MarrowEngine::with_stop_flag(self.signal.flag());
        let mut num_printed = 0;
        let mut print_error = None;

        let outcome = solve_with(family, instance, &mut engine, &self.options, |solution| {
            if !self.all_solutions {
                return ControlFlow::Continue(());
            }

            num_printed += 1;
            match print_solution(renderer, solution, Some(num_printed)) {
                Ok(()) => ControlFlow::Continue(()),
                Err(e) => {
                    print_error = Some(e);
                    ControlFlow::Break(())
                }
            }
        })?;

        if let Some(e) = print_error {
            return Err(e);
        }

        println!("{}", outcome.report());
        if !self.all_solutions {
            if let Some(solution) = &outcome.solution {
                print_solution(renderer, solution, None)?;
            }
        }

        Ok(())
    }
}

fn print_solution<S>(
    renderer: &impl SolutionRenderer<S>,
    solution: &S,
    number: Option<u64>,
) -> MarrowCliResult<()> {
    let mut drawing = String::new();
    renderer.render(solution, &mut drawing)?;

    let mut stdout = std::io::stdout().lock();
    if let Some(number) = number {
        writeln!(stdout, "solution #{number}")?;
    }
    write!(stdout, "{drawing}")?;
    stdout.flush()?;
    Ok(())
}
