#[macro_export]
macro_rules! toon {
    // Handle null
    (null) => {
        $crate::ToonValue::Null
    };

    // Handle true
    (true) => {
        $crate::ToonValue::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::ToonValue::Bool(false)
    };

    // Handle empty array
    ([]) => {
        $crate::ToonValue::Array(vec![])
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::ToonValue::Array(vec![$($crate::toon!($elem)),*])
    };

    // Handle empty object
    ({}) => {
        $crate::ToonValue::Object($crate::ToonMap::new())
    };

    // Handle non-empty object
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::ToonMap::new();
        $(
            object.insert($key.to_string(), $crate::toon!($value));
        )*
        $crate::ToonValue::Object(object)
    }};

    // Handle different literal types explicitly

    // String literals (quoted)
    ($s:expr) => {{
        // This is a fallback for any expression
        $crate::to_value(&$s).unwrap_or($crate::ToonValue::Null)
    }};
}
