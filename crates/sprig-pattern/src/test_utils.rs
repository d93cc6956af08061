//! Pattern fixtures for tests. Leaves are `&'static str`.

/// `branch!["A", "B", and!["C", "D"]]`
#[macro_export]
macro_rules! branch {
    ($($elem:expr),+ $(,)?) => {
        $crate::tree::Tree::<&'static str>::branch(vec![
            $($crate::tree::TreeElem::<&'static str>::from($elem)),+
        ])
        .unwrap()
    };
}

/// `and!["A", "B"]`, or with a scope: `and!(@1; "A", "B")`
#[macro_export]
macro_rules! and {
    (@ $loc:literal ; $($elem:expr),+ $(,)?) => {
        $crate::and![$($elem),+].with_loc($loc)
    };
    ($($elem:expr),+ $(,)?) => {
        $crate::tree::Tree::<&'static str>::and(vec![
            $($crate::tree::TreeElem::<&'static str>::from($elem)),+
        ])
        .unwrap()
    };
}

/// `then!["A", "B"]`, or with a scope: `then!(@1; "A", "B")`
#[macro_export]
macro_rules! then {
    (@ $loc:literal ; $($elem:expr),+ $(,)?) => {
        $crate::then![$($elem),+].with_loc($loc)
    };
    ($($elem:expr),+ $(,)?) => {
        $crate::tree::Tree::<&'static str>::then(vec![
            $($crate::tree::TreeElem::<&'static str>::from($elem)),+
        ])
        .unwrap()
    };
}

#[macro_export]
macro_rules! or {
    ($($elem:expr),+ $(,)?) => {
        $crate::tree::Tree::<&'static str>::or(vec![
            $($crate::tree::TreeElem::<&'static str>::from($elem)),+
        ])
        .unwrap()
    };
}

/// `sib!(0; "A", sib!(1; "B", "C"))`
#[macro_export]
macro_rules! sib {
    ($loc:literal ; $($elem:expr),* $(,)?) => {
        $crate::constraints::Sibling::<&'static str>::new(
            $loc,
            vec![$($crate::constraints::SibElem::<&'static str>::from($elem)),*],
        )
    };
}

#[macro_export]
macro_rules! total {
    ($($elem:expr),* $(,)?) => {
        $crate::constraints::Order::<&'static str>::total(vec![
            $($crate::constraints::OrdElem::<&'static str>::from($elem)),*
        ])
    };
}

#[macro_export]
macro_rules! partial {
    ($($elem:expr),* $(,)?) => {
        $crate::constraints::Order::<&'static str>::partial(vec![
            $($crate::constraints::OrdElem::<&'static str>::from($elem)),*
        ])
    };
}

/// `dag! { "A" => ["B", "C"], "B" => ["D"] }`
#[macro_export]
macro_rules! dag {
    ($($from:literal => [$($to:literal),* $(,)?]),* $(,)?) => {{
        let mut dag = $crate::constraints::Dag::<&'static str>::new();
        $($(dag.add_edge($from, $to);)*)*
        dag
    }};
}
