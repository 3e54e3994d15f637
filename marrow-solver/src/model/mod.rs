//! The modelling vocabulary: bounded integer variables, literals, intervals, affine and linear
//! expressions, and the constraints a [`Model`] collects.
//!
//! A [`Model`] is a passive description. It is built by a [`ModelBuilder`](crate::ModelBuilder),
//! handed to a [`SolvingEngine`](crate::SolvingEngine) and discarded once the solution has been
//! extracted.
//!
//! ```rust
//! # use marrow_solver::model::Model;
//! # use marrow_solver::model::LinearExpr;
//! let mut model = Model::default();
//! let x = model.new_int_var(0, 5, "x").unwrap();
//! let y = model.new_int_var(0, 5, "y").unwrap();
//!
//! model.add_all_different([x, y]).unwrap();
//! model
//!     .add_linear_le(LinearExpr::weighted_sum([(1, x), (1, y)]), 4)
//!     .unwrap();
//! model.minimise(x).unwrap();
//!
//! assert_eq!(2, model.num_variables());
//! assert_eq!(2, model.constraints().len());
//! ```
mod assignment;
mod constraints;
mod expressions;
mod intervals;
mod variables;

use std::sync::atomic::AtomicU32;
use std::sync::atomic::Ordering;

pub use assignment::*;
pub use constraints::*;
pub use expressions::*;
pub use intervals::*;
pub use variables::*;

use crate::ModelError;

static NEXT_MODEL_ID: AtomicU32 = AtomicU32::new(0);

/// How the engine should pick the next variable to branch on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VariableSelection {
    /// In the order the variables were given.
    InputOrder,
    /// The variable with the smallest domain.
    FirstFail,
    /// The variable with the smallest lower bound.
    SmallestLowerBound,
}

/// A search hint: branch on `variables` first, choosing among them with `selection` and trying
/// the smallest value first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecisionStrategy {
    pub variables: Vec<IntVar>,
    pub selection: VariableSelection,
}

#[derive(Clone, Debug)]
struct VariableInfo {
    name: String,
    lower_bound: i64,
    upper_bound: i64,
}

/// Variables, intervals, constraints, an optional objective to minimise and an optional decision
/// strategy.
#[derive(Debug)]
pub struct Model {
    id: u32,
    variables: Vec<VariableInfo>,
    intervals: Vec<IntervalVar>,
    constraints: Vec<Constraint>,
    objective: Option<LinearExpr>,
    decision_strategy: Option<DecisionStrategy>,
}

impl Default for Model {
    fn default() -> Self {
        Model {
            id: NEXT_MODEL_ID.fetch_add(1, Ordering::Relaxed),
            variables: vec![],
            intervals: vec![],
            constraints: vec![],
            objective: None,
            decision_strategy: None,
        }
    }
}

impl Model {
    /// Creates the variable `name` with the domain `[lower_bound, upper_bound]`.
    pub fn new_int_var(
        &mut self,
        lower_bound: i64,
        upper_bound: i64,
        name: impl Into<String>,
    ) -> Result<IntVar, ModelError> {
        let name = name.into();
        if lower_bound > upper_bound {
            return Err(ModelError::EmptyDomain {
                name,
                lower_bound,
                upper_bound,
            });
        }

        let var = IntVar {
            model: self.id,
            index: self.variables.len() as u32,
        };
        self.variables.push(VariableInfo {
            name,
            lower_bound,
            upper_bound,
        });
        Ok(var)
    }

    pub fn new_bool_var(&mut self, name: impl Into<String>) -> BoolVar {
        let var = IntVar {
            model: self.id,
            index: self.variables.len() as u32,
        };
        self.variables.push(VariableInfo {
            name: name.into(),
            lower_bound: 0,
            upper_bound: 1,
        });
        BoolVar::new(var)
    }

    /// Creates the interval `[start, start + size)`.
    ///
    /// A variable size introduces an end variable named after the start variable.
    pub fn new_interval(
        &mut self,
        start: IntVar,
        size: IntervalSize,
    ) -> Result<IntervalVar, ModelError> {
        self.check_owned(start)?;

        let end = match size {
            IntervalSize::Fixed(size) => start.offset(size),
            IntervalSize::Variable(size_var) => {
                self.check_owned(size_var)?;
                let (start_lb, start_ub) = self.bounds(start);
                let (size_lb, size_ub) = self.bounds(size_var);
                let name = format!("{}.end", self.name(start));
                self.new_int_var(start_lb + size_lb, start_ub + size_ub, name)?
                    .into()
            }
        };

        let interval = IntervalVar::new(start, size, end);
        self.intervals.push(interval);
        Ok(interval)
    }

    /// The terms take pairwise distinct values. Every term must be affine in a single variable.
    pub fn add_all_different<Term: Into<LinearExpr>>(
        &mut self,
        terms: impl IntoIterator<Item = Term>,
    ) -> Result<(), ModelError> {
        let terms = terms
            .into_iter()
            .map(|term| {
                let term = term.into();
                term.as_affine().ok_or(ModelError::NonAffineTerm {
                    num_variables: term.num_variables(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        for term in &terms {
            self.check_owned(term.var())?;
        }

        self.constraints.push(Constraint::AllDifferent(terms));
        Ok(())
    }

    pub fn add_no_overlap(
        &mut self,
        intervals: impl IntoIterator<Item = IntervalVar>,
    ) -> Result<(), ModelError> {
        let intervals = intervals.into_iter().collect::<Vec<_>>();
        self.check_intervals(&intervals)?;

        self.constraints.push(Constraint::NoOverlap1D(intervals));
        Ok(())
    }

    /// Rectangle `i` spans `x_intervals[i]` horizontally and `y_intervals[i]` vertically.
    pub fn add_no_overlap_2d(
        &mut self,
        x_intervals: impl IntoIterator<Item = IntervalVar>,
        y_intervals: impl IntoIterator<Item = IntervalVar>,
    ) -> Result<(), ModelError> {
        let x_intervals = x_intervals.into_iter().collect::<Vec<_>>();
        let y_intervals = y_intervals.into_iter().collect::<Vec<_>>();
        if x_intervals.len() != y_intervals.len() {
            return Err(ModelError::MismatchedIntervals {
                x: x_intervals.len(),
                y: y_intervals.len(),
            });
        }
        self.check_intervals(&x_intervals)?;
        self.check_intervals(&y_intervals)?;

        self.constraints.push(Constraint::NoOverlap2D {
            x_intervals,
            y_intervals,
        });
        Ok(())
    }

    pub fn add_linear(&mut self, constraint: LinearConstraint) -> Result<(), ModelError> {
        for &(_, var) in constraint.expr().terms() {
            self.check_owned(var)?;
        }
        for literal in constraint.enforcement() {
            self.check_owned(literal.var())?;
        }

        self.constraints.push(Constraint::Linear(constraint));
        Ok(())
    }

    pub fn add_linear_eq(
        &mut self,
        expr: impl Into<LinearExpr>,
        rhs: i64,
    ) -> Result<(), ModelError> {
        self.add_linear(LinearConstraint::new(expr, Comparator::Eq, rhs))
    }

    pub fn add_linear_le(
        &mut self,
        expr: impl Into<LinearExpr>,
        rhs: i64,
    ) -> Result<(), ModelError> {
        self.add_linear(LinearConstraint::new(expr, Comparator::Le, rhs))
    }

    /// Sets the objective to minimise, replacing any earlier one.
    pub fn minimise(&mut self, expr: impl Into<LinearExpr>) -> Result<(), ModelError> {
        let expr = expr.into();
        for &(_, var) in expr.terms() {
            self.check_owned(var)?;
        }

        self.objective = Some(expr);
        Ok(())
    }

    pub fn suggest_decision_strategy(
        &mut self,
        variables: impl IntoIterator<Item = IntVar>,
        selection: VariableSelection,
    ) -> Result<(), ModelError> {
        let variables = variables.into_iter().collect::<Vec<_>>();
        for &var in &variables {
            self.check_owned(var)?;
        }

        self.decision_strategy = Some(DecisionStrategy {
            variables,
            selection,
        });
        Ok(())
    }

    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    /// All variables in order of creation.
    pub fn variables(&self) -> impl Iterator<Item = IntVar> + '_ {
        (0..self.variables.len() as u32).map(|index| IntVar {
            model: self.id,
            index,
        })
    }

    /// The initial domain of `var` as `(lower_bound, upper_bound)`.
    ///
    /// Panics if `var` belongs to another model.
    pub fn bounds(&self, var: IntVar) -> (i64, i64) {
        let info = &self.variables[var.index()];
        (info.lower_bound, info.upper_bound)
    }

    /// Panics if `var` belongs to another model.
    pub fn name(&self, var: IntVar) -> &str {
        &self.variables[var.index()].name
    }

    pub fn intervals(&self) -> &[IntervalVar] {
        &self.intervals
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn objective(&self) -> Option<&LinearExpr> {
        self.objective.as_ref()
    }

    pub fn decision_strategy(&self) -> Option<&DecisionStrategy> {
        self.decision_strategy.as_ref()
    }

    /// Whether `var` was created by this model.
    pub fn owns(&self, var: IntVar) -> bool {
        var.model == self.id && var.index() < self.variables.len()
    }

    fn check_owned(&self, var: IntVar) -> Result<(), ModelError> {
        if self.owns(var) {
            Ok(())
        } else {
            Err(ModelError::ForeignVariable {
                expected: self.id,
                found: var.model,
            })
        }
    }

    fn check_intervals(&self, intervals: &[IntervalVar]) -> Result<(), ModelError> {
        for interval in intervals {
            self.check_owned(interval.start())?;
            self.check_owned(interval.end().var())?;
            if let IntervalSize::Variable(size) = interval.size() {
                self.check_owned(size)?;
            }
        }
        Ok(())
    }
}
