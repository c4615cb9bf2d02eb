/// Builds a [`Value`](crate::Value) using RAON-like syntax.
///
/// Blocks are written `{ name = value, ... }` and arrays `[value, ...]`;
/// anything else goes through `Value::from`. Negative numbers and other
/// multi-token expressions need parentheses: `(-1)`.
///
/// # Panics
///
/// Panics if the elements of an array literal do not all have the same type.
///
/// # Examples
///
/// ```rust
/// use raon::{parse_str, raon, Value};
///
/// let expected = raon!({
///     name = "hydra",
///     limits = { max_conn = 100, retry = [1, 2, 5] },
/// });
///
/// let doc = parse_str("name = \"hydra\"\nlimits = { max_conn = 100, retry = [1, 2, 5] }").unwrap();
/// assert_eq!(Value::Block(doc), expected);
/// ```
#[macro_export]
macro_rules! raon {
    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array($crate::Array::new())
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(
            $crate::Array::from_values(vec![$($crate::raon!($elem)),*])
                .expect("raon! array elements must all have the same type"),
        )
    };

    ({}) => {
        $crate::Value::Block($crate::Block::new())
    };

    ({ $($name:ident = $value:tt),* $(,)? }) => {
        $crate::Value::Block($crate::Block::from_entries(vec![
            $($crate::Entry::new(stringify!($name), $crate::raon!($value))),*
        ]))
    };

    ($other:expr) => {
        $crate::Value::from($other)
    };
}
