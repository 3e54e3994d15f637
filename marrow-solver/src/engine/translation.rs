use fnv::FnvHashMap;
use log::debug;
use marrow_core::constraints;
use marrow_core::results::ProblemSolution;
use marrow_core::variables::AffineView;
use marrow_core::variables::DomainId;
use marrow_core::variables::Literal;
use marrow_core::variables::TransformableVariable;
use marrow_core::ConstraintOperationError;
use marrow_core::Solver;

use crate::model::AffineExpr;
use crate::model::Assignment;
use crate::model::BoolVar;
use crate::model::Comparator;
use crate::model::Constraint;
use crate::model::IntVar;
use crate::model::IntervalSize;
use crate::model::IntervalVar;
use crate::model::LinearConstraint;
use crate::model::LinearExpr;
use crate::model::Model;
use crate::EngineError;

type Term = AffineView<DomainId>;

/// A [`Model`] rebuilt inside a `marrow-core` [`Solver`].
///
/// A conflict while posting a constraint leaves the solver infeasible; the remaining constraints
/// are then skipped.
#[derive(Debug)]
pub(crate) struct Translation {
    pub(crate) solver: Solver,
    pub(crate) domains: DomainMap,
    fixed_sizes: FnvHashMap<i32, DomainId>,
    objective: Option<DomainId>,
}

impl Translation {
    pub(crate) fn new(model: &Model) -> Result<Translation, EngineError> {
        let mut translation = Translation {
            solver: Solver::default(),
            domains: DomainMap(Vec::with_capacity(model.num_variables())),
            fixed_sizes: FnvHashMap::default(),
            objective: None,
        };

        for var in model.variables() {
            let (lower_bound, upper_bound) = model.bounds(var);
            let domain = translation.solver.new_named_bounded_integer(
                to_engine_int(lower_bound, "lower bound")?,
                to_engine_int(upper_bound, "upper bound")?,
                model.name(var),
            );
            translation.domains.0.push(domain);
        }

        if let Some(objective) = model.objective() {
            translation.objective = Some(translation.objective_variable(model, objective)?);
        }

        for interval in model.intervals() {
            if let IntervalSize::Variable(size) = interval.size() {
                translation.link_interval(model, interval, size)?;
            }
        }

        for constraint in model.constraints() {
            if translation.solver.is_infeasible() {
                break;
            }
            translation.post_constraint(model, constraint)?;
        }

        debug!(
            "translated {} variables and {} constraints",
            model.num_variables(),
            model.constraints().len(),
        );

        Ok(translation)
    }

    pub(crate) fn objective(&self) -> Option<DomainId> {
        self.objective
    }

    fn domain(&self, var: IntVar) -> DomainId {
        self.domains.get(var)
    }

    fn post_constraint(
        &mut self,
        model: &Model,
        constraint: &Constraint,
    ) -> Result<(), EngineError> {
        match constraint {
            Constraint::AllDifferent(terms) => {
                let terms = terms
                    .iter()
                    .map(|term| self.affine(model, term))
                    .collect::<Result<Vec<_>, _>>()?;
                let result = self
                    .solver
                    .add_constraint(constraints::all_different(terms))
                    .post();
                self.record(result, "all-different");
            }
            Constraint::NoOverlap1D(intervals) => {
                let (starts, sizes) = self.intervals(model, intervals)?;
                let result = self
                    .solver
                    .add_constraint(constraints::disjunctive(starts, sizes))
                    .post();
                self.record(result, "no-overlap");
            }
            Constraint::NoOverlap2D {
                x_intervals,
                y_intervals,
            } => {
                let (x_starts, x_sizes) = self.intervals(model, x_intervals)?;
                let (y_starts, y_sizes) = self.intervals(model, y_intervals)?;
                let result = self
                    .solver
                    .add_constraint(constraints::no_overlap_2d(
                        x_starts, x_sizes, y_starts, y_sizes,
                    ))
                    .post();
                self.record(result, "two-dimensional no-overlap");
            }
            Constraint::Linear(linear) => self.post_linear(model, linear)?,
        }

        Ok(())
    }

    fn post_linear(&mut self, model: &Model, linear: &LinearConstraint) -> Result<(), EngineError> {
        let terms = self.linear_terms(model, linear.expr())?;
        let rhs = linear
            .rhs()
            .checked_sub(linear.expr().constant())
            .ok_or(EngineError::Overflow {
                what: "right-hand side",
                value: linear.rhs(),
            })?;
        let rhs = to_engine_int(rhs, "right-hand side")?;

        let Some(enforcement) = self.enforcement_literal(linear.enforcement())? else {
            let result = match linear.comparator() {
                Comparator::Le => self
                    .solver
                    .add_constraint(constraints::less_than_or_equals(terms, rhs))
                    .post(),
                Comparator::Eq => self
                    .solver
                    .add_constraint(constraints::equals(terms, rhs))
                    .post(),
            };
            self.record(result, "linear constraint");
            return Ok(());
        };

        let result = match linear.comparator() {
            Comparator::Le => self
                .solver
                .add_constraint(constraints::less_than_or_equals(terms, rhs))
                .implied_by(enforcement),
            Comparator::Eq => self
                .solver
                .add_constraint(constraints::equals(terms, rhs))
                .implied_by(enforcement),
        };
        self.record(result, "half-reified linear constraint");
        Ok(())
    }

    /// A literal which is true when all `literals` are. Multiple literals are combined through a
    /// fresh literal `r` with `r >= 1 - n + sum literals`.
    fn enforcement_literal(
        &mut self,
        literals: &[BoolVar],
    ) -> Result<Option<Literal>, EngineError> {
        match literals {
            [] => Ok(None),
            [literal] => Ok(Some(self.literal(*literal))),
            _ => {
                let conjunction = self.solver.new_literal();
                let mut terms = vec![conjunction.get_integer_variable()];
                terms.extend(
                    literals
                        .iter()
                        .map(|&literal| self.literal(literal).get_integer_variable().scaled(-1)),
                );
                let rhs = to_engine_int(1 - literals.len() as i64, "enforcement literal count")?;

                let result = self
                    .solver
                    .add_constraint(constraints::greater_than_or_equals(terms, rhs))
                    .post();
                self.record(result, "enforcement conjunction");
                Ok(Some(conjunction))
            }
        }
    }

    fn literal(&self, literal: BoolVar) -> Literal {
        let positive = Literal::new(self.domain(literal.var()));
        if literal.is_negated() {
            !positive
        } else {
            positive
        }
    }

    fn objective_variable(
        &mut self,
        model: &Model,
        objective: &LinearExpr,
    ) -> Result<DomainId, EngineError> {
        let (lower_bound, upper_bound) = expression_bounds(model, objective);
        let mut terms = self.linear_terms(model, objective)?;

        let objective_domain = self.solver.new_named_bounded_integer(
            to_engine_int(lower_bound, "objective bound")?,
            to_engine_int(upper_bound, "objective bound")?,
            "objective",
        );

        // sum c_i x_i - objective = -constant
        terms.push(objective_domain.scaled(-1));
        let rhs = to_engine_int(-objective.constant(), "objective constant")?;
        let result = self
            .solver
            .add_constraint(constraints::equals(terms, rhs))
            .post();
        self.record(result, "objective definition");

        Ok(objective_domain)
    }

    /// Posts `start + size - end = 0`.
    fn link_interval(
        &mut self,
        model: &Model,
        interval: &IntervalVar,
        size: IntVar,
    ) -> Result<(), EngineError> {
        let end = self.affine(model, &interval.end())?;
        let terms = vec![
            self.domain(interval.start()).scaled(1),
            self.domain(size).scaled(1),
            end.scaled(-1),
        ];

        let result = self
            .solver
            .add_constraint(constraints::equals(terms, 0))
            .post();
        self.record(result, "interval end");
        Ok(())
    }

    fn intervals(
        &mut self,
        model: &Model,
        intervals: &[IntervalVar],
    ) -> Result<(Vec<Term>, Vec<Term>), EngineError> {
        let mut starts = Vec::with_capacity(intervals.len());
        let mut sizes = Vec::with_capacity(intervals.len());

        for interval in intervals {
            let _ = self.affine(model, &interval.end())?;
            starts.push(self.domain(interval.start()).scaled(1));

            let size = match interval.size() {
                IntervalSize::Fixed(size) => self.fixed_size(size)?,
                IntervalSize::Variable(size) => self.domain(size),
            };
            sizes.push(size.scaled(1));
        }

        Ok((starts, sizes))
    }

    /// One fixed domain per distinct size.
    fn fixed_size(&mut self, size: i64) -> Result<DomainId, EngineError> {
        let size = to_engine_int(size, "interval size")?;
        let solver = &mut self.solver;
        let domain = self.fixed_sizes.entry(size).or_insert_with(|| {
            solver.new_named_bounded_integer(size, size, format!("size={size}"))
        });
        Ok(*domain)
    }

    fn linear_terms(&self, model: &Model, expr: &LinearExpr) -> Result<Vec<Term>, EngineError> {
        expr.terms()
            .iter()
            .filter(|(coefficient, _)| *coefficient != 0)
            .map(|&(coefficient, var)| self.affine(model, &AffineExpr::new(var, coefficient, 0)))
            .collect()
    }

    /// The engine view of `expr`, provided the view stays in the engine's integer range.
    fn affine(&self, model: &Model, expr: &AffineExpr) -> Result<Term, EngineError> {
        let scale = to_engine_int(expr.scale(), "coefficient")?;
        let offset = to_engine_int(expr.offset_value(), "offset")?;

        let (lower_bound, upper_bound) = model.bounds(expr.var());
        let _ = to_engine_int(expr.evaluate(lower_bound), "term bound")?;
        let _ = to_engine_int(expr.evaluate(upper_bound), "term bound")?;

        Ok(self.domain(expr.var()).scaled(scale).offset(offset))
    }

    fn record(&self, result: Result<(), ConstraintOperationError>, what: &str) {
        if let Err(error) = result {
            debug!("root conflict while posting the {what}: {error}");
        }
    }
}

/// The engine domain of every model variable, indexed by [`IntVar::index`].
#[derive(Debug)]
pub(crate) struct DomainMap(Vec<DomainId>);

impl DomainMap {
    pub(crate) fn get(&self, var: IntVar) -> DomainId {
        self.0[var.index()]
    }

    /// The values of the model variables in `solution`.
    pub(crate) fn assignment(&self, solution: &impl ProblemSolution) -> Assignment {
        Assignment::new(
            self.0
                .iter()
                .map(|&domain| i64::from(solution.get_integer_value(domain)))
                .collect(),
        )
    }
}

/// The range of `expr` over the initial domains of its variables.
fn expression_bounds(model: &Model, expr: &LinearExpr) -> (i64, i64) {
    expr.terms().iter().fold(
        (expr.constant(), expr.constant()),
        |(lower, upper), &(coefficient, var)| {
            let (lower_bound, upper_bound) = model.bounds(var);
            let first = coefficient.saturating_mul(lower_bound);
            let second = coefficient.saturating_mul(upper_bound);
            (
                lower.saturating_add(first.min(second)),
                upper.saturating_add(first.max(second)),
            )
        },
    )
}

fn to_engine_int(value: i64, what: &'static str) -> Result<i32, EngineError> {
    i32::try_from(value).map_err(|_| EngineError::Overflow { what, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_outside_the_engine_range_are_rejected() {
        let mut model = Model::default();
        let _ = model.new_int_var(0, 1 << 40, "x").unwrap();

        let result = Translation::new(&model);

        assert_eq!(
            Some(EngineError::Overflow {
                what: "upper bound",
                value: 1 << 40
            }),
            result.err()
        );
    }

    #[test]
    fn large_coefficients_are_rejected() {
        let mut model = Model::default();
        let x = model.new_int_var(0, 10, "x").unwrap();
        model
            .add_linear_le(LinearExpr::new().with_term(i64::from(i32::MAX), x), 5)
            .unwrap();

        let result = Translation::new(&model);

        assert!(matches!(
            result,
            Err(EngineError::Overflow {
                what: "term bound",
                ..
            })
        ));
    }

    #[test]
    fn root_conflicts_leave_the_solver_infeasible() {
        let mut model = Model::default();
        let x = model.new_int_var(3, 5, "x").unwrap();
        model.add_linear_le(x, 2).unwrap();

        let translation = Translation::new(&model).unwrap();

        assert!(translation.solver.is_infeasible());
    }

    #[test]
    fn conjunctions_of_enforcement_literals_are_respected() {
        let mut model = Model::default();
        let x = model.new_int_var(0, 10, "x").unwrap();
        let a = model.new_bool_var("a");
        let b = model.new_bool_var("b");
        model.add_linear_eq(a.var(), 1).unwrap();
        model
            .add_linear(
                LinearConstraint::new(x, Comparator::Le, 4)
                    .only_enforce_if(a)
                    .only_enforce_if(!b),
            )
            .unwrap();
        model.add_linear_eq(b.var(), 0).unwrap();

        let translation = Translation::new(&model).unwrap();

        assert_eq!(4, translation.solver.upper_bound(&translation.domain(x)));
    }

    #[test]
    fn the_objective_covers_the_range_of_its_expression() {
        let mut model = Model::default();
        let x = model.new_int_var(0, 4, "x").unwrap();
        let y = model.new_int_var(1, 3, "y").unwrap();
        model
            .minimise(LinearExpr::weighted_sum([(2, x), (-1, y)]).with_constant(5))
            .unwrap();

        let translation = Translation::new(&model).unwrap();
        let objective = translation.objective().unwrap();

        assert_eq!(2, translation.solver.lower_bound(&objective));
        assert_eq!(12, translation.solver.upper_bound(&objective));
    }
}
