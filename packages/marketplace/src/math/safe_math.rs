use soroban_sdk::{log, Env};

use crate::error::{ErrorCode, MarketplaceResult};

pub trait SafeMath: Sized {
    fn safe_add(self, rhs: Self, env: &Env) -> MarketplaceResult<Self>;
    fn safe_sub(self, rhs: Self, env: &Env) -> MarketplaceResult<Self>;
    fn safe_mul(self, rhs: Self, env: &Env) -> MarketplaceResult<Self>;
}

macro_rules! checked_impl {
    ($t:ty) => {
        impl SafeMath for $t {
            #[track_caller]
            #[inline(always)]
            fn safe_add(self, v: $t, env: &Env) -> MarketplaceResult<$t> {
                match self.checked_add(v) {
                    Some(result) => Ok(result),
                    None => {
                        log!(env, "Math error thrown at {}:{}", file!(), line!());
                        Err(ErrorCode::MathError)
                    }
                }
            }

            #[track_caller]
            #[inline(always)]
            fn safe_sub(self, v: $t, env: &Env) -> MarketplaceResult<$t> {
                match self.checked_sub(v) {
                    Some(result) => Ok(result),
                    None => {
                        log!(env, "Math error thrown at {}:{}", file!(), line!());
                        Err(ErrorCode::MathError)
                    }
                }
            }

            #[track_caller]
            #[inline(always)]
            fn safe_mul(self, v: $t, env: &Env) -> MarketplaceResult<$t> {
                match self.checked_mul(v) {
                    Some(result) => Ok(result),
                    None => {
                        log!(env, "Math error thrown at {}:{}", file!(), line!());
                        Err(ErrorCode::MathError)
                    }
                }
            }
        }
    };
}

checked_impl!(u32);
checked_impl!(u64);
checked_impl!(i128);
