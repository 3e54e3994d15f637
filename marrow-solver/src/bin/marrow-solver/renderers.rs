//! Plain-text drawings of the solutions of every family.
use std::fmt::Write;

use itertools::Itertools;
use marrow_solver::CryptarithmInstance;
use marrow_solver::CryptarithmSolution;
use marrow_solver::PackingSolution;
use marrow_solver::QueensSolution;
use marrow_solver::Schedule;
use marrow_solver::SchedulingInstance;
use marrow_solver::SolutionRenderer;
use marrow_solver::SudokuSolution;

#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct BoardRenderer;

impl SolutionRenderer<QueensSolution> for BoardRenderer {
    fn render(&self, solution: &QueensSolution, out: &mut dyn Write) -> std::fmt::Result {
        let n = solution.columns.len();
        for &column in &solution.columns {
            let row = (0..n)
                .map(|other| if other == column { 'Q' } else { '.' })
                .join(" ");
            writeln!(out, "{row}")?;
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct GridRenderer;

impl SolutionRenderer<SudokuSolution> for GridRenderer {
    fn render(&self, solution: &SudokuSolution, out: &mut dyn Write) -> std::fmt::Result {
        const SEPARATOR: &str = "+-------+-------+-------+";

        for (row_index, row) in solution.grid.iter().enumerate() {
            if row_index % 3 == 0 {
                writeln!(out, "{SEPARATOR}")?;
            }
            for block in row.chunks(3) {
                write!(out, "| {} ", block.iter().join(" "))?;
            }
            writeln!(out, "|")?;
        }
        writeln!(out, "{SEPARATOR}")
    }
}

/// Draws the container with one character per unit cell, the top row first, followed by the
/// placement of every rectangle. Containers wider or higher than `max_drawn_side` are only listed.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PackingRenderer {
    pub(crate) max_drawn_side: i64,
}

impl Default for PackingRenderer {
    fn default() -> Self {
        PackingRenderer { max_drawn_side: 80 }
    }
}

const RECTANGLE_LABELS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

fn rectangle_label(index: usize) -> char {
    RECTANGLE_LABELS.get(index).map_or('#', |&label| label as char)
}

impl SolutionRenderer<PackingSolution> for PackingRenderer {
    fn render(&self, solution: &PackingSolution, out: &mut dyn Write) -> std::fmt::Result {
        let container = solution.container;

        if container.width <= self.max_drawn_side && container.height <= self.max_drawn_side {
            let width = container.width as usize;
            let height = container.height as usize;
            let mut cells = vec![vec!['.'; width]; height];

            for (index, placement) in solution.placements.iter().enumerate() {
                for y in placement.y..placement.y + placement.height {
                    for x in placement.x..placement.x + placement.width {
                        cells[y as usize][x as usize] = rectangle_label(index);
                    }
                }
            }

            for row in cells.iter().rev() {
                writeln!(out, "{}", row.iter().collect::<String>())?;
            }
        }

        for (index, placement) in solution.placements.iter().enumerate() {
            writeln!(
                out,
                "{}: {}x{} at ({}, {})",
                rectangle_label(index),
                placement.width,
                placement.height,
                placement.x,
                placement.y
            )?;
        }
        Ok(())
    }
}

/// Lists the jobs in processing order.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ScheduleRenderer<'a> {
    pub(crate) instance: &'a SchedulingInstance,
}

impl SolutionRenderer<Schedule> for ScheduleRenderer<'_> {
    fn render(&self, solution: &Schedule, out: &mut dyn Write) -> std::fmt::Result {
        for job in solution.job_order() {
            writeln!(
                out,
                "job {job}: [{}, {}) release {} weight {}",
                solution.starts[job],
                solution.completion_time(self.instance, job),
                self.instance.release_times()[job],
                self.instance.weights()[job]
            )?;
        }
        writeln!(
            out,
            "weighted completion time: {} | makespan: {}",
            solution.weighted_completion_time(self.instance),
            solution.makespan(self.instance)
        )
    }
}

/// Shows the puzzle with every word replaced by its number, followed by the digit of every letter.
#[derive(Clone, Copy, Debug)]
pub(crate) struct CryptarithmRenderer<'a> {
    pub(crate) instance: &'a CryptarithmInstance,
}

impl SolutionRenderer<CryptarithmSolution> for CryptarithmRenderer<'_> {
    fn render(&self, solution: &CryptarithmSolution, out: &mut dyn Write) -> std::fmt::Result {
        let number = |word: &str| {
            solution
                .word_value(word)
                .map_or_else(|| word.to_owned(), |value| value.to_string())
        };

        writeln!(
            out,
            "{} = {}",
            self.instance
                .addends()
                .iter()
                .map(|addend| number(addend))
                .join(" + "),
            number(self.instance.result())
        )?;
        writeln!(
            out,
            "{}",
            solution
                .digits
                .iter()
                .map(|(letter, digit)| format!("{letter}={digit}"))
                .join(" ")
        )
    }
}

#[cfg(test)]
mod tests {
    use marrow_solver::Dimensions;
    use marrow_solver::Placement;

    use super::*;

    fn render<S>(renderer: &impl SolutionRenderer<S>, solution: &S) -> String {
        let mut out = String::new();
        renderer.render(solution, &mut out).unwrap();
        out
    }

    #[test]
    fn queens_are_drawn_one_row_per_line() {
        let solution = QueensSolution {
            columns: vec![1, 3, 0, 2],
        };

        assert_eq!(
            ". Q . .\n. . . Q\nQ . . .\n. . Q .\n",
            render(&BoardRenderer, &solution)
        );
    }

    #[test]
    fn packings_are_drawn_with_the_top_row_first() {
        let solution = PackingSolution {
            container: Dimensions::new(3, 2),
            placements: vec![
                Placement {
                    x: 0,
                    y: 0,
                    width: 2,
                    height: 1,
                },
                Placement {
                    x: 2,
                    y: 0,
                    width: 1,
                    height: 2,
                },
            ],
        };

        assert_eq!(
            "..1\n001\n0: 2x1 at (0, 0)\n1: 1x2 at (2, 0)\n",
            render(&PackingRenderer::default(), &solution)
        );
    }

    #[test]
    fn large_packings_are_only_listed() {
        let solution = PackingSolution {
            container: Dimensions::new(200, 200),
            placements: vec![Placement {
                x: 0,
                y: 0,
                width: 200,
                height: 200,
            }],
        };

        assert_eq!(
            "0: 200x200 at (0, 0)\n",
            render(&PackingRenderer::default(), &solution)
        );
    }

    #[test]
    fn schedules_are_listed_in_processing_order() {
        let instance = SchedulingInstance::new(vec![2, 1], vec![1, 3], vec![0, 0]).unwrap();
        let solution = Schedule {
            starts: vec![1, 0],
        };

        assert_eq!(
            "job 1: [0, 1) release 0 weight 3\n\
             job 0: [1, 3) release 0 weight 1\n\
             weighted completion time: 6 | makespan: 3\n",
            render(&ScheduleRenderer { instance: &instance }, &solution)
        );
    }

    #[test]
    fn cryptarithms_show_the_substituted_sum() {
        let instance: CryptarithmInstance = "AB + B = BC".parse().unwrap();
        let solution = CryptarithmSolution {
            digits: vec![('A', 4), ('B', 5), ('C', 0)],
        };

        assert_eq!(
            "45 + 5 = 50\nA=4 B=5 C=0\n",
            render(&CryptarithmRenderer { instance: &instance }, &solution)
        );
    }
}
