#[macro_export]
macro_rules! validate {
    ($env:expr, $assert:expr, $err:expr) => {
        {
            if ($assert) {
                Ok(())
            } else {
                let error_code: $crate::error::ErrorCode = $err;
                soroban_sdk::log!($env, "Error {} thrown at {}:{}", error_code as u32, file!(), line!());
                Err(error_code)
            }
        }
    };
    (
        $env:expr,
        $assert:expr,
        $err:expr,
        $($arg:tt)+
    ) => {
        {
            if ($assert) {
                Ok(())
            } else {
                let error_code: $crate::error::ErrorCode = $err;
                soroban_sdk::log!($env, "Error {} thrown at {}:{}", error_code as u32, file!(), line!());
                soroban_sdk::log!($env, $($arg)*);
                Err(error_code)
            }
        }
    };
}

/// Adds `$value` to a counter in place, returning `MathError` from the
/// enclosing function on overflow.
#[macro_export]
macro_rules! safe_increment {
    ($env:expr, $counter:expr, $value:expr) => {{
        $counter = $counter.checked_add($value).ok_or_else(|| {
            soroban_sdk::log!($env, "Math error thrown at {}:{}", file!(), line!());
            $crate::error::ErrorCode::MathError
        })?
    }};
}
