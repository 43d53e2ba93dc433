/// Builds an [`ast::Ref`](crate::ast::Ref) from a dotted path of identifiers.
///
/// The head becomes the rooting variable, every following segment a string
/// key: `reference!(input.fruits.name)` is `input.fruits.name`.
#[macro_export]
macro_rules! reference {
    ( $head:ident $( . $seg:ident )* ) => {
        $crate::ast::Ref::new(vec![
            $crate::ast::Term::var(stringify!($head)),
            $( $crate::ast::Term::string(stringify!($seg)), )*
        ])
    };
}
