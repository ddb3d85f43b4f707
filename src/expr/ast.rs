//! Expression tree and tree-walking evaluation.
//!
//! Evaluation is total: every node maps a finite `x` to some `f64`, with
//! NaN/∞ standing in for domain errors (`sqrt(-1)`, `1/0`, `log(0)`, ...).
//! Nothing here panics or allocates during evaluation.

/// Named real functions callable from an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Func {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Exp,
    Log,
    Log2,
    Log10,
    Sqrt,
    Cbrt,
    Abs,
    Pow,
}

impl Func {
    /// Looks up a function by its source-text name.
    /// `log` is the natural logarithm.
    pub(crate) fn from_name(name: &str) -> Option<Func> {
        match name {
            "sin"   => Some(Func::Sin),
            "cos"   => Some(Func::Cos),
            "tan"   => Some(Func::Tan),
            "asin"  => Some(Func::Asin),
            "acos"  => Some(Func::Acos),
            "atan"  => Some(Func::Atan),
            "sinh"  => Some(Func::Sinh),
            "cosh"  => Some(Func::Cosh),
            "tanh"  => Some(Func::Tanh),
            "exp"   => Some(Func::Exp),
            "log"   => Some(Func::Log),
            "log2"  => Some(Func::Log2),
            "log10" => Some(Func::Log10),
            "sqrt"  => Some(Func::Sqrt),
            "cbrt"  => Some(Func::Cbrt),
            "abs"   => Some(Func::Abs),
            "pow"   => Some(Func::Pow),
            _       => None,
        }
    }

    pub(crate) const fn name(self) -> &'static str {
        match self {
            Func::Sin   => "sin",
            Func::Cos   => "cos",
            Func::Tan   => "tan",
            Func::Asin  => "asin",
            Func::Acos  => "acos",
            Func::Atan  => "atan",
            Func::Sinh  => "sinh",
            Func::Cosh  => "cosh",
            Func::Tanh  => "tanh",
            Func::Exp   => "exp",
            Func::Log   => "log",
            Func::Log2  => "log2",
            Func::Log10 => "log10",
            Func::Sqrt  => "sqrt",
            Func::Cbrt  => "cbrt",
            Func::Abs   => "abs",
            Func::Pow   => "pow",
        }
    }

    pub(crate) const fn arity(self) -> usize {
        match self {
            Func::Pow => 2,
            _         => 1,
        }
    }

    /// Applies the function to already-checked arguments (`args.len() == arity`).
    fn apply(self, args: &[f64]) -> f64 {
        match self {
            Func::Sin   => args[0].sin(),
            Func::Cos   => args[0].cos(),
            Func::Tan   => args[0].tan(),
            Func::Asin  => args[0].asin(),
            Func::Acos  => args[0].acos(),
            Func::Atan  => args[0].atan(),
            Func::Sinh  => args[0].sinh(),
            Func::Cosh  => args[0].cosh(),
            Func::Tanh  => args[0].tanh(),
            Func::Exp   => args[0].exp(),
            Func::Log   => args[0].ln(),
            Func::Log2  => args[0].log2(),
            Func::Log10 => args[0].log10(),
            Func::Sqrt  => args[0].sqrt(),
            Func::Cbrt  => args[0].cbrt(),
            Func::Abs   => args[0].abs(),
            Func::Pow   => args[0].powf(args[1]),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Ast {
    Num(f64),
    Var,
    Neg(Box<Ast>),
    Bin(BinOp, Box<Ast>, Box<Ast>),
    Call(Func, Vec<Ast>),
}

impl Ast {
    pub(crate) fn eval(&self, x: f64) -> f64 {
        match self {
            Ast::Num(n) => *n,
            Ast::Var    => x,
            Ast::Neg(inner) => -inner.eval(x),
            Ast::Bin(op, lhs, rhs) => {
                let l = lhs.eval(x);
                let r = rhs.eval(x);
                match op {
                    BinOp::Add => l + r,
                    BinOp::Sub => l - r,
                    BinOp::Mul => l * r,
                    BinOp::Div => l / r,
                    BinOp::Pow => l.powf(r),
                }
            }
            Ast::Call(func, args) => {
                // arity fixed at parse time; at most 2 arguments
                let mut vals = [0.0; 2];
                for (slot, arg) in vals.iter_mut().zip(args) {
                    *slot = arg.eval(x);
                }
                func.apply(&vals[..args.len()])
            }
        }
    }
}
