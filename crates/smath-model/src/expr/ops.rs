use std::ops;

use super::builder::binary;
use super::{Element, Expr, Literal};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Gt,
    Lt,
    Ge,
    Le,
    Ne,
    Eq,
    And,
}

impl BinaryOp {
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
            Self::Gt => ">",
            Self::Lt => "<",
            Self::Ge => "≥",
            Self::Le => "≤",
            Self::Ne => "≠",
            Self::Eq => "=",
            Self::And => "&",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Neg,
    Factorial,
}

impl UnaryOp {
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Neg => "-",
            Self::Factorial => "!",
        }
    }
}

impl Expr {
    pub(crate) fn binary_with(&self, rhs: impl Into<Literal>, op: BinaryOp) -> Expr {
        binary(self, rhs, op)
    }

    pub(crate) fn unary(&self, op: UnaryOp) -> Expr {
        self.extended([Element::operator(op.symbol(), 1)])
    }

    pub fn add(&self, rhs: impl Into<Literal>) -> Expr {
        self.binary_with(rhs, BinaryOp::Add)
    }

    pub fn subtract(&self, rhs: impl Into<Literal>) -> Expr {
        self.binary_with(rhs, BinaryOp::Sub)
    }

    pub fn multiply(&self, rhs: impl Into<Literal>) -> Expr {
        self.binary_with(rhs, BinaryOp::Mul)
    }

    pub fn divide(&self, rhs: impl Into<Literal>) -> Expr {
        self.binary_with(rhs, BinaryOp::Div)
    }

    pub fn power(&self, rhs: impl Into<Literal>) -> Expr {
        self.binary_with(rhs, BinaryOp::Pow)
    }

    pub fn greater(&self, rhs: impl Into<Literal>) -> Expr {
        self.binary_with(rhs, BinaryOp::Gt)
    }

    pub fn less(&self, rhs: impl Into<Literal>) -> Expr {
        self.binary_with(rhs, BinaryOp::Lt)
    }

    pub fn greater_or_equal(&self, rhs: impl Into<Literal>) -> Expr {
        self.binary_with(rhs, BinaryOp::Ge)
    }

    pub fn less_or_equal(&self, rhs: impl Into<Literal>) -> Expr {
        self.binary_with(rhs, BinaryOp::Le)
    }

    pub fn not_equal(&self, rhs: impl Into<Literal>) -> Expr {
        self.binary_with(rhs, BinaryOp::Ne)
    }

    pub fn equal(&self, rhs: impl Into<Literal>) -> Expr {
        self.binary_with(rhs, BinaryOp::Eq)
    }

    pub fn logical_and(&self, rhs: impl Into<Literal>) -> Expr {
        self.binary_with(rhs, BinaryOp::And)
    }

    pub fn negate(&self) -> Expr {
        self.unary(UnaryOp::Neg)
    }

    pub fn factorial(&self) -> Expr {
        self.unary(UnaryOp::Factorial)
    }

    /// `self * unit`, the canonical way to give a bare number physical units.
    pub fn attach_unit(&self, unit: impl Into<String>) -> Expr {
        self.extended([Element::unit_operand(unit), Element::operator("*", 2)])
    }

    /// Appends a bracket display hint.
    pub fn grouped(&self) -> Expr {
        self.extended([Element::bracket()])
    }
}

macro_rules! impl_binary_trait {
    ($trait:ident, $method:ident, $op:expr) => {
        impl<T: Into<Literal>> ops::$trait<T> for Expr {
            type Output = Expr;

            fn $method(self, rhs: T) -> Expr {
                binary(&self, rhs, $op)
            }
        }

        impl<T: Into<Literal>> ops::$trait<T> for &Expr {
            type Output = Expr;

            fn $method(self, rhs: T) -> Expr {
                binary(self, rhs, $op)
            }
        }

        impl_binary_trait!(@reversed $trait, $method, $op, i32, i64, f64);
    };
    (@reversed $trait:ident, $method:ident, $op:expr, $($lhs:ty),*) => {
        $(
            impl ops::$trait<Expr> for $lhs {
                type Output = Expr;

                fn $method(self, rhs: Expr) -> Expr {
                    binary(&Literal::from(self).into_expr(), rhs, $op)
                }
            }

            impl ops::$trait<&Expr> for $lhs {
                type Output = Expr;

                fn $method(self, rhs: &Expr) -> Expr {
                    binary(&Literal::from(self).into_expr(), rhs, $op)
                }
            }
        )*
    };
}

impl_binary_trait!(Add, add, BinaryOp::Add);
impl_binary_trait!(Sub, sub, BinaryOp::Sub);
impl_binary_trait!(Mul, mul, BinaryOp::Mul);
impl_binary_trait!(Div, div, BinaryOp::Div);

impl ops::Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        self.unary(UnaryOp::Neg)
    }
}

impl ops::Neg for &Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        self.unary(UnaryOp::Neg)
    }
}
