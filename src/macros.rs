#[macro_export]
macro_rules! props {
    // Handle null
    (null) => {
        $crate::Value::Null
    };

    // Handle true
    (true) => {
        $crate::Value::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::Value::Bool(false)
    };

    // Handle empty list
    ([]) => {
        $crate::Value::List(vec![])
    };

    // Handle non-empty list
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::List(vec![$($crate::props!($elem)),*])
    };

    // Handle empty record
    ({}) => {
        $crate::Value::Record($crate::Record::new())
    };

    // Handle non-empty record
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut record = $crate::Record::new();
        $(
            record.insert($key.to_string(), $crate::props!($value));
        )*
        $crate::Value::Record(record)
    }};

    // Fallback for any expression
    ($other:expr) => {{
        $crate::to_value(&$other).unwrap_or($crate::Value::Null)
    }};
}
