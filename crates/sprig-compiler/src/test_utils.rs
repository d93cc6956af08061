//! Operator fixtures for tests.

/// A sequence of operator elements: `ops!['a', plus!['b'], 'c']`.
#[macro_export]
macro_rules! ops {
    ($($elem:expr),* $(,)?) => {{
        let elems: Vec<$crate::op::OpElem<_>> = vec![$($crate::op::OpElem::from($elem)),*];
        elems
    }};
}

#[macro_export]
macro_rules! plus {
    ($($elem:expr),+ $(,)?) => {
        $crate::op::Op::plus($crate::ops![$($elem),+]).unwrap()
    };
}

#[macro_export]
macro_rules! star {
    ($($elem:expr),+ $(,)?) => {
        $crate::op::Op::star($crate::ops![$($elem),+]).unwrap()
    };
}

#[macro_export]
macro_rules! qmark {
    ($($elem:expr),+ $(,)?) => {
        $crate::op::Op::qmark($crate::ops![$($elem),+]).unwrap()
    };
}

/// `alt!(['b'], ['c'])`
#[macro_export]
macro_rules! alt {
    ([$($left:expr),* $(,)?], [$($right:expr),* $(,)?]) => {
        $crate::op::Op::alt($crate::ops![$($left),*], $crate::ops![$($right),*]).unwrap()
    };
}
